//! Small numeric helpers shared by the estimators.

/// Milliseconds per minute; converts between bpm and RR interval (ms).
pub const MS_PER_MINUTE: f64 = 60_000.0;

/// Round to `places` decimal digits.
///
/// Rounds the exact binary value: `2.675` (stored as 2.67499...) gives `2.67`.
pub fn round_dp(x: f64, places: usize) -> f64 {
    if !x.is_finite() {
        return x;
    }
    format!("{x:.places$}").parse().unwrap_or(x)
}

/// Arithmetic mean; 0.0 for an empty slice.
#[inline]
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}
