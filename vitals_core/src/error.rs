use thiserror::Error;

/// Why a reading was rejected as physiologically implausible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeReason {
    /// Fewer than two heart-rate samples fell inside the accepted band.
    HeartRate { min_bpm: f64, max_bpm: f64 },
    /// Fewer than two RR intervals fell inside the accepted band.
    RrInterval { min_ms: f64, max_ms: f64 },
    /// Respiration rate below the floor: the microphone saw no usable signal.
    RespirationTooLow { min: f64 },
    /// Respiration rate above the ceiling: the peaks were most likely noise.
    RespirationTooHigh { max: f64 },
}

impl core::fmt::Display for RangeReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::HeartRate { min_bpm, max_bpm } => {
                write!(f, "samples out of range (heart rate: {min_bpm}–{max_bpm} bpm)")
            }
            Self::RrInterval { min_ms, max_ms } => {
                write!(f, "samples out of range (RR interval: {min_ms}–{max_ms} ms)")
            }
            Self::RespirationTooLow { min } => {
                write!(f, "value too low (< {min} breaths/min), insufficient signal")
            }
            Self::RespirationTooHigh { max } => {
                write!(f, "value too high (> {max} breaths/min), probable noise")
            }
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimateError {
    #[error("at least {required} samples required, got {got}")]
    InsufficientData { got: usize, required: usize },
    #[error("{0}")]
    OutOfRange(RangeReason),
}

#[derive(Debug, Error, Clone)]
pub enum BuildError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, EstimateError>;
