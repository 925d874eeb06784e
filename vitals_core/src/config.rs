//! Runtime calibration for the estimators.
//!
//! These are the structs the estimators actually read. They are separate from the
//! TOML-deserialized schema in `vitals_config`; see `conversions` for the bridge.

use crate::error::BuildError;

/// Temperature regression model and confidence heuristic.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureModel {
    /// Weight of ΔT = battery − ambient.
    pub alpha: f64,
    /// Weight of the final battery temperature.
    pub beta: f64,
    /// Weight of ln(contact seconds).
    pub gamma: f64,
    /// Offset (°C).
    pub delta: f64,
    /// Estimates are clamped into `[min_c, max_c]`.
    pub min_c: f64,
    pub max_c: f64,
    /// Ambient temperature used when the caller has none (°C).
    pub default_ambient_c: f64,
    pub confidence: ConfidenceModel,
}

impl Default for TemperatureModel {
    fn default() -> Self {
        Self {
            alpha: 1.15,
            beta: 0.52,
            gamma: 0.65,
            delta: 8.4,
            min_c: 34.5,
            max_c: 42.5,
            default_ambient_c: 25.0,
            confidence: ConfidenceModel::default(),
        }
    }
}

/// `base + time_weight·min(1, t/full_contact_s) + heat_weight·min(1, max(0,ΔT)/full_warming_c)`,
/// capped at `cap`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceModel {
    pub base: f64,
    pub time_weight: f64,
    pub heat_weight: f64,
    pub full_contact_s: f64,
    pub full_warming_c: f64,
    pub cap: f64,
}

impl Default for ConfidenceModel {
    fn default() -> Self {
        Self {
            base: 0.35,
            time_weight: 0.40,
            heat_weight: 0.20,
            full_contact_s: 120.0,
            full_warming_c: 3.0,
            cap: 0.90,
        }
    }
}

/// Physiological acceptance bands for HRV input (inclusive on both ends).
#[derive(Debug, Clone, PartialEq)]
pub struct HrvBounds {
    pub rr_min_ms: f64,
    pub rr_max_ms: f64,
    pub hr_min_bpm: f64,
    pub hr_max_bpm: f64,
}

impl Default for HrvBounds {
    fn default() -> Self {
        Self {
            rr_min_ms: 400.0,
            rr_max_ms: 1500.0,
            hr_min_bpm: 40.0,
            hr_max_bpm: 200.0,
        }
    }
}

/// Respiration acceptance range and confidence adjustment.
#[derive(Debug, Clone, PartialEq)]
pub struct RespirationCfg {
    pub min_rate: f64,
    pub max_rate: f64,
    /// Noise (0–100) at or below this level costs no confidence.
    pub noise_baseline: f64,
    pub default_confidence: f64,
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

fn finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

impl TemperatureModel {
    pub(crate) fn check(&self) -> Result<(), BuildError> {
        if !finite(&[self.alpha, self.beta, self.gamma, self.delta]) {
            return Err(BuildError::InvalidConfig(
                "temperature coefficients must be finite",
            ));
        }
        if !finite(&[self.min_c, self.max_c, self.default_ambient_c]) || self.min_c >= self.max_c
        {
            return Err(BuildError::InvalidConfig(
                "temperature clamp must be finite with min_c < max_c",
            ));
        }
        let c = &self.confidence;
        if !(c.full_contact_s > 0.0 && c.full_warming_c > 0.0) {
            return Err(BuildError::InvalidConfig(
                "confidence saturation points must be > 0",
            ));
        }
        if !(0.0..=1.0).contains(&c.cap) {
            return Err(BuildError::InvalidConfig("confidence cap must be in [0, 1]"));
        }
        Ok(())
    }
}

impl HrvBounds {
    pub(crate) fn check(&self) -> Result<(), BuildError> {
        if !finite(&[self.rr_min_ms, self.rr_max_ms, self.hr_min_bpm, self.hr_max_bpm]) {
            return Err(BuildError::InvalidConfig("hrv bounds must be finite"));
        }
        if self.rr_min_ms <= 0.0 || self.rr_min_ms >= self.rr_max_ms {
            return Err(BuildError::InvalidConfig("hrv RR band is empty or non-positive"));
        }
        if self.hr_min_bpm <= 0.0 || self.hr_min_bpm >= self.hr_max_bpm {
            return Err(BuildError::InvalidConfig("hrv heart-rate band is empty or non-positive"));
        }
        Ok(())
    }
}

impl RespirationCfg {
    pub(crate) fn check(&self) -> Result<(), BuildError> {
        if !finite(&[self.min_rate, self.max_rate, self.noise_baseline]) {
            return Err(BuildError::InvalidConfig("respiration bounds must be finite"));
        }
        if self.min_rate >= self.max_rate {
            return Err(BuildError::InvalidConfig("respiration min_rate must be < max_rate"));
        }
        if !(0.0..=1.0).contains(&self.confidence_floor)
            || !(0.0..=1.0).contains(&self.default_confidence)
        {
            return Err(BuildError::InvalidConfig(
                "respiration confidence settings must be in [0, 1]",
            ));
        }
        Ok(())
    }
}
