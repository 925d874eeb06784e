//! Heart-rate variability from camera-PPG samples.
//!
//! Samples arrive either as instantaneous heart rates (bpm) or as RR intervals (ms).
//! Both are reduced to a filtered RR series first; every statistic is computed from
//! that series only, so an artifact sample never reaches SDNN or RMSSD.

use crate::config::HrvBounds;
use crate::error::{EstimateError, RangeReason, Result};
use crate::util::{MS_PER_MINUTE, mean, round_dp};

/// Minimum number of samples (and of surviving RR intervals).
pub const MIN_SAMPLES: usize = 2;

/// Unit of the values in an `HrvSampleSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleKind {
    /// Instantaneous heart rate (bpm).
    #[default]
    HeartRate,
    /// Beat-to-beat interval (ms).
    RrInterval,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HrvSampleSet {
    pub samples: Vec<f64>,
    pub kind: SampleKind,
}

impl HrvSampleSet {
    /// `is_rr = true` means `samples` are RR intervals in ms, otherwise heart rates in bpm.
    pub fn new(samples: Vec<f64>, is_rr: bool) -> Self {
        let kind = if is_rr {
            SampleKind::RrInterval
        } else {
            SampleKind::HeartRate
        };
        Self { samples, kind }
    }

    pub fn heart_rates(samples: Vec<f64>) -> Self {
        Self::new(samples, false)
    }

    pub fn rr_intervals(samples: Vec<f64>) -> Self {
        Self::new(samples, true)
    }

    pub fn is_rr(&self) -> bool {
        self.kind == SampleKind::RrInterval
    }
}

/// Time-domain HRV metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HrvMetrics {
    /// Mean heart rate over the filtered intervals (bpm), one decimal.
    pub mean_hr: f64,
    /// Population standard deviation of RR intervals (ms), one decimal.
    pub hrv_sdnn: f64,
    /// Root mean square of successive RR differences (ms), one decimal.
    pub hrv_rmssd: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HrvBand {
    /// RMSSD < 20 ms
    Low,
    /// [20, 40)
    Normal,
    /// [40, 70)
    Good,
    /// ≥ 70 ms
    Excellent,
}

impl HrvBand {
    pub fn description(self) -> &'static str {
        match self {
            Self::Low => "Low HRV, high stress or insufficient recovery",
            Self::Normal => "Moderate HRV, normal state",
            Self::Good => "Good HRV, good recovery",
            Self::Excellent => "Excellent HRV, excellent physiological state",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

impl core::fmt::Display for HrvBand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HrvEstimate {
    pub metrics: HrvMetrics,
    pub band: HrvBand,
}

impl HrvEstimate {
    pub fn interpretation(&self) -> &'static str {
        self.band.description()
    }
}

/// Convert and filter samples into physiologically plausible RR intervals (ms).
///
/// Order is preserved; non-finite samples never pass the band check.
pub fn filtered_rr(bounds: &HrvBounds, set: &HrvSampleSet) -> Vec<f64> {
    match set.kind {
        SampleKind::RrInterval => set
            .samples
            .iter()
            .copied()
            .filter(|rr| (bounds.rr_min_ms..=bounds.rr_max_ms).contains(rr))
            .collect(),
        SampleKind::HeartRate => set
            .samples
            .iter()
            .copied()
            .filter(|hr| (bounds.hr_min_bpm..=bounds.hr_max_bpm).contains(hr))
            .map(|hr| MS_PER_MINUTE / hr)
            .collect(),
    }
}

/// Population standard deviation of `rr`.
pub fn sdnn(rr: &[f64]) -> f64 {
    let m = mean(rr);
    let var = mean(&rr.iter().map(|x| (x - m).powi(2)).collect::<Vec<_>>());
    var.sqrt()
}

/// RMS of successive differences; 0.0 when fewer than two intervals.
pub fn rmssd(rr: &[f64]) -> f64 {
    if rr.len() < 2 {
        return 0.0;
    }
    let sq: Vec<f64> = rr.windows(2).map(|w| (w[1] - w[0]).powi(2)).collect();
    mean(&sq).sqrt()
}

/// Compute mean HR, SDNN and RMSSD from raw samples.
pub fn compute(bounds: &HrvBounds, set: &HrvSampleSet) -> Result<HrvMetrics> {
    if set.samples.len() < MIN_SAMPLES {
        return Err(EstimateError::InsufficientData {
            got: set.samples.len(),
            required: MIN_SAMPLES,
        });
    }

    let rr = filtered_rr(bounds, set);
    tracing::debug!(
        supplied = set.samples.len(),
        kept = rr.len(),
        is_rr = set.is_rr(),
        "hrv samples filtered"
    );
    if rr.len() < MIN_SAMPLES {
        let reason = match set.kind {
            SampleKind::HeartRate => RangeReason::HeartRate {
                min_bpm: bounds.hr_min_bpm,
                max_bpm: bounds.hr_max_bpm,
            },
            SampleKind::RrInterval => RangeReason::RrInterval {
                min_ms: bounds.rr_min_ms,
                max_ms: bounds.rr_max_ms,
            },
        };
        return Err(EstimateError::OutOfRange(reason));
    }

    let hr: Vec<f64> = rr.iter().map(|x| MS_PER_MINUTE / x).collect();
    Ok(HrvMetrics {
        mean_hr: round_dp(mean(&hr), 1),
        hrv_sdnn: round_dp(sdnn(&rr), 1),
        hrv_rmssd: round_dp(rmssd(&rr), 1),
    })
}

pub fn interpret_hrv(rmssd: f64) -> HrvBand {
    if rmssd < 20.0 {
        HrvBand::Low
    } else if rmssd < 40.0 {
        HrvBand::Normal
    } else if rmssd < 70.0 {
        HrvBand::Good
    } else {
        HrvBand::Excellent
    }
}

/// Metrics plus the RMSSD band.
pub fn estimate_hrv(bounds: &HrvBounds, set: &HrvSampleSet) -> Result<HrvEstimate> {
    let metrics = compute(bounds, set)?;
    Ok(HrvEstimate {
        metrics,
        band: interpret_hrv(metrics.hrv_rmssd),
    })
}
