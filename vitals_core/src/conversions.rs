//! `From` implementations bridging `vitals_config` types to `vitals_core` types.

use crate::config::{ConfidenceModel, HrvBounds, RespirationCfg, TemperatureModel};

// ── TemperatureModel ─────────────────────────────────────────────────────────

impl From<&vitals_config::TemperatureCfg> for TemperatureModel {
    fn from(c: &vitals_config::TemperatureCfg) -> Self {
        Self {
            alpha: c.alpha,
            beta: c.beta,
            gamma: c.gamma,
            delta: c.delta,
            min_c: c.min_c,
            max_c: c.max_c,
            default_ambient_c: c.default_ambient_c,
            confidence: ConfidenceModel {
                base: c.confidence_base,
                time_weight: c.time_weight,
                heat_weight: c.heat_weight,
                full_contact_s: c.full_contact_s,
                full_warming_c: c.full_warming_c,
                cap: c.confidence_cap,
            },
        }
    }
}

// ── HrvBounds ────────────────────────────────────────────────────────────────

impl From<&vitals_config::HrvCfg> for HrvBounds {
    fn from(c: &vitals_config::HrvCfg) -> Self {
        Self {
            rr_min_ms: c.rr_min_ms,
            rr_max_ms: c.rr_max_ms,
            hr_min_bpm: c.hr_min_bpm,
            hr_max_bpm: c.hr_max_bpm,
        }
    }
}

// ── RespirationCfg ───────────────────────────────────────────────────────────

impl From<&vitals_config::RespirationCfg> for RespirationCfg {
    fn from(c: &vitals_config::RespirationCfg) -> Self {
        Self {
            min_rate: c.min_rate,
            max_rate: c.max_rate,
            noise_baseline: c.noise_baseline,
            default_confidence: c.default_confidence,
            confidence_floor: c.confidence_floor,
        }
    }
}
