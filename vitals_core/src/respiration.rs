//! Respiration rate validation and interpretation.
//!
//! Peak detection on the microphone RMS envelope happens on the phone; this module
//! only checks the resulting rate, discounts the client's confidence for ambient
//! noise, and bands the rate.

use crate::config::RespirationCfg;
use crate::error::{EstimateError, RangeReason, Result};
use crate::util::round_dp;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RespirationInput {
    /// Breaths per minute computed on the device.
    pub respiration_rate: f64,
    /// Breath cycles detected (informational).
    pub peaks_count: Option<u32>,
    /// Measurement length in seconds (informational).
    pub duration: Option<f64>,
    /// Ambient noise, 0 (silent) to 100.
    pub noise_level: Option<f64>,
    /// Device-side confidence in [0, 1].
    pub confidence: Option<f64>,
}

impl RespirationInput {
    pub fn new(respiration_rate: f64) -> Self {
        Self {
            respiration_rate,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RespirationBand {
    /// < 12 breaths/min
    Bradypnea,
    /// [12, 20]
    Normal,
    /// (20, 30]
    MildlyElevated,
    /// (30, 40]
    MildTachypnea,
    /// > 40
    SevereTachypnea,
}

impl RespirationBand {
    pub fn description(self) -> &'static str {
        match self {
            Self::Bradypnea => "Bradypnea (< 12 breaths/min), slow breathing, normal in deep rest",
            Self::Normal => "Normal rate (12–20 breaths/min)",
            Self::MildlyElevated => {
                "Slightly elevated (21–30 breaths/min), effort, stress or anxiety"
            }
            Self::MildTachypnea => "Elevated (31–40 breaths/min), mild tachypnea",
            Self::SevereTachypnea => "Severe tachypnea (> 40 breaths/min), see a doctor",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Bradypnea => "bradypnea",
            Self::Normal => "normal",
            Self::MildlyElevated => "mildly_elevated",
            Self::MildTachypnea => "mild_tachypnea",
            Self::SevereTachypnea => "severe_tachypnea",
        }
    }
}

impl core::fmt::Display for RespirationBand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RespirationEstimate {
    /// Rate rounded to whole breaths/min.
    pub respiration_rate: i64,
    /// Noise-adjusted confidence in [floor, 1], two decimals.
    pub confidence: f64,
    pub band: RespirationBand,
}

impl RespirationEstimate {
    pub fn interpretation(&self) -> &'static str {
        self.band.description()
    }
}

/// Reject rates outside `[cfg.min_rate, cfg.max_rate]`.
pub fn validate_rate(cfg: &RespirationCfg, rate: f64) -> Result<()> {
    if rate.is_nan() || rate < cfg.min_rate {
        return Err(EstimateError::OutOfRange(RangeReason::RespirationTooLow {
            min: cfg.min_rate,
        }));
    }
    if rate > cfg.max_rate {
        return Err(EstimateError::OutOfRange(RangeReason::RespirationTooHigh {
            max: cfg.max_rate,
        }));
    }
    Ok(())
}

/// Discount the device confidence by the ambient noise above baseline.
///
/// Missing noise counts as silent. A missing, zero or non-finite confidence
/// means the device did not score the reading and uses `cfg.default_confidence`.
/// The result is in `[cfg.confidence_floor, 1.0]`, rounded to two decimals.
pub fn adjust_confidence(
    cfg: &RespirationCfg,
    noise_level: Option<f64>,
    confidence: Option<f64>,
) -> f64 {
    let noise = noise_level.unwrap_or(0.0);
    let noise_penalty = (noise - cfg.noise_baseline).max(0.0) / 100.0;
    let base = confidence
        .filter(|c| c.is_finite() && c.abs() > 0.0)
        .unwrap_or(cfg.default_confidence);
    let adjusted = (base - noise_penalty).min(1.0).max(cfg.confidence_floor);
    round_dp(adjusted, 2)
}

pub fn interpret_respiration(rate: f64) -> RespirationBand {
    if rate < 12.0 {
        RespirationBand::Bradypnea
    } else if rate <= 20.0 {
        RespirationBand::Normal
    } else if rate <= 30.0 {
        RespirationBand::MildlyElevated
    } else if rate <= 40.0 {
        RespirationBand::MildTachypnea
    } else {
        RespirationBand::SevereTachypnea
    }
}

/// Validate a device-computed rate and produce the rounded rate, adjusted confidence
/// and band. The band is taken from the unrounded rate.
pub fn validate_and_interpret(
    cfg: &RespirationCfg,
    input: &RespirationInput,
) -> Result<RespirationEstimate> {
    let rate = input.respiration_rate;
    if let Err(e) = validate_rate(cfg, rate) {
        tracing::debug!(rate, error = %e, "respiration rate rejected");
        return Err(e);
    }
    let confidence = adjust_confidence(cfg, input.noise_level, input.confidence);
    Ok(RespirationEstimate {
        respiration_rate: rate.round_ties_even() as i64,
        confidence,
        band: interpret_respiration(rate),
    })
}
