#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schemas for the vitals estimation engine.
//!
//! - `Config` and sub-structs are deserialized from TOML and validated.
//! - Every section is optional; omitted keys fall back to the shipped calibration.
use serde::Deserialize;
use std::path::Path;

/// Body-temperature regression calibration.
///
/// T_body ≈ alpha·ΔT + beta·T_battery + gamma·ln(t) + delta, clamped to `[min_c, max_c]`.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TemperatureCfg {
    /// Weight of the skin-contact warming delta (battery − ambient).
    pub alpha: f64,
    /// Weight of the final battery temperature.
    pub beta: f64,
    /// Weight of ln(contact seconds).
    pub gamma: f64,
    /// Calibration offset (°C).
    pub delta: f64,
    /// Lower clamp of the estimate (°C).
    pub min_c: f64,
    /// Upper clamp of the estimate (°C).
    pub max_c: f64,
    /// Ambient temperature assumed when the caller supplies none (°C).
    pub default_ambient_c: f64,
    pub confidence_base: f64,
    /// Confidence contribution at full dwell time.
    pub time_weight: f64,
    /// Confidence contribution at full warming.
    pub heat_weight: f64,
    /// Contact time (s) at which the dwell term saturates.
    pub full_contact_s: f64,
    /// Warming delta (°C) at which the heat term saturates.
    pub full_warming_c: f64,
    /// Hard ceiling on reported confidence.
    pub confidence_cap: f64,
}

impl Default for TemperatureCfg {
    fn default() -> Self {
        Self {
            alpha: 1.15,
            beta: 0.52,
            gamma: 0.65,
            delta: 8.4,
            min_c: 34.5,
            max_c: 42.5,
            default_ambient_c: 25.0,
            confidence_base: 0.35,
            time_weight: 0.40,
            heat_weight: 0.20,
            full_contact_s: 120.0,
            full_warming_c: 3.0,
            confidence_cap: 0.90,
        }
    }
}

/// Physiological acceptance bands for HRV samples (inclusive).
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HrvCfg {
    pub rr_min_ms: f64,
    pub rr_max_ms: f64,
    pub hr_min_bpm: f64,
    pub hr_max_bpm: f64,
}

impl Default for HrvCfg {
    fn default() -> Self {
        Self {
            rr_min_ms: 400.0,
            rr_max_ms: 1500.0,
            hr_min_bpm: 40.0,
            hr_max_bpm: 200.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RespirationCfg {
    /// Rates below this are rejected as insufficient signal (breaths/min).
    pub min_rate: f64,
    /// Rates above this are rejected as noise (breaths/min).
    pub max_rate: f64,
    /// Ambient noise level (0–100) below which confidence is not penalized.
    pub noise_baseline: f64,
    /// Confidence assumed when the mobile client supplies none.
    pub default_confidence: f64,
    /// Adjusted confidence never drops below this.
    pub confidence_floor: f64,
}

impl Default for RespirationCfg {
    fn default() -> Self {
        Self {
            min_rate: 4.0,
            max_rate: 60.0,
            noise_baseline: 30.0,
            default_confidence: 0.5,
            confidence_floor: 0.1,
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (JSON lines)
    pub level: Option<String>, // "info","debug"
    /// Log rotation policy: "never" | "daily" | "hourly" (default: never)
    pub rotation: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct Config {
    pub temperature: TemperatureCfg,
    pub hrv: HrvCfg,
    pub respiration: RespirationCfg,
    pub logging: Logging,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

/// Read, parse and validate a TOML config file.
pub fn load_file(path: &Path) -> eyre::Result<Config> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("read config {:?}: {}", path, e))?;
    let cfg = load_toml(&text).map_err(|e| eyre::eyre!("parse config {:?}: {}", path, e))?;
    cfg.validate()?;
    Ok(cfg)
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

fn unit_interval(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        // Temperature
        let t = &self.temperature;
        if !all_finite(&[t.alpha, t.beta, t.gamma, t.delta]) {
            eyre::bail!("temperature coefficients (alpha, beta, gamma, delta) must be finite");
        }
        if !all_finite(&[t.min_c, t.max_c, t.default_ambient_c]) {
            eyre::bail!("temperature.min_c, max_c and default_ambient_c must be finite");
        }
        if t.min_c >= t.max_c {
            eyre::bail!("temperature.min_c must be < temperature.max_c");
        }
        if !(t.full_contact_s.is_finite() && t.full_contact_s > 0.0) {
            eyre::bail!("temperature.full_contact_s must be > 0");
        }
        if !(t.full_warming_c.is_finite() && t.full_warming_c > 0.0) {
            eyre::bail!("temperature.full_warming_c must be > 0");
        }
        if !unit_interval(t.confidence_cap) {
            eyre::bail!("temperature.confidence_cap must be in [0.0, 1.0]");
        }
        for (name, w) in [
            ("confidence_base", t.confidence_base),
            ("time_weight", t.time_weight),
            ("heat_weight", t.heat_weight),
        ] {
            if !unit_interval(w) {
                eyre::bail!("temperature.{name} must be in [0.0, 1.0]");
            }
        }

        // HRV
        let h = &self.hrv;
        if !all_finite(&[h.rr_min_ms, h.rr_max_ms, h.hr_min_bpm, h.hr_max_bpm]) {
            eyre::bail!("hrv bounds must be finite");
        }
        if h.rr_min_ms <= 0.0 || h.rr_min_ms >= h.rr_max_ms {
            eyre::bail!("hrv.rr_min_ms must be > 0 and < hrv.rr_max_ms");
        }
        if h.hr_min_bpm <= 0.0 || h.hr_min_bpm >= h.hr_max_bpm {
            eyre::bail!("hrv.hr_min_bpm must be > 0 and < hrv.hr_max_bpm");
        }

        // Respiration
        let r = &self.respiration;
        if !all_finite(&[r.min_rate, r.max_rate, r.noise_baseline]) {
            eyre::bail!("respiration bounds must be finite");
        }
        if r.min_rate < 0.0 || r.min_rate >= r.max_rate {
            eyre::bail!("respiration.min_rate must be >= 0 and < respiration.max_rate");
        }
        if !(0.0..=100.0).contains(&r.noise_baseline) {
            eyre::bail!("respiration.noise_baseline must be in [0, 100]");
        }
        if !unit_interval(r.default_confidence) {
            eyre::bail!("respiration.default_confidence must be in [0.0, 1.0]");
        }
        if !unit_interval(r.confidence_floor) {
            eyre::bail!("respiration.confidence_floor must be in [0.0, 1.0]");
        }

        // Logging
        if let Some(rot) = self.logging.rotation.as_deref()
            && !matches!(rot, "never" | "daily" | "hourly")
        {
            eyre::bail!("logging.rotation must be one of: never, daily, hourly");
        }

        Ok(())
    }
}
