//! Human-readable error descriptions and structured JSON error formatting.

use vitals_core::error::{EstimateError, RangeReason};

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    // Typed matches first
    if let Some(ee) = err.downcast_ref::<EstimateError>() {
        return match ee {
            EstimateError::InsufficientData { got, required } => format!(
                "What happened: Not enough samples ({got}, need at least {required}).\nLikely causes: The PPG capture was too short or lost the finger.\nHow to fix: Record a longer measurement and send all samples."
            ),
            EstimateError::OutOfRange(reason) => match reason {
                RangeReason::HeartRate { .. } | RangeReason::RrInterval { .. } => format!(
                    "What happened: {ee}.\nLikely causes: Motion artifacts or signal dropout during capture.\nHow to fix: Keep still, cover the camera and flash fully, then measure again."
                ),
                RangeReason::RespirationTooLow { .. } => format!(
                    "What happened: {ee}.\nLikely causes: Breathing was not audible to the microphone.\nHow to fix: Hold the phone closer and breathe normally during the measurement."
                ),
                RangeReason::RespirationTooHigh { .. } => format!(
                    "What happened: {ee}.\nLikely causes: Ambient noise was detected as breath cycles.\nHow to fix: Measure again in a quieter place."
                ),
            },
        };
    }

    let msg = err.to_string();
    let lower = msg.to_ascii_lowercase();

    if lower.starts_with("invalid input") {
        return format!(
            "What happened: {msg}.\nLikely causes: A sensor reading outside what the device can report.\nHow to fix: Check the values passed on the command line."
        );
    }

    if lower.contains("read config") || lower.contains("parse config") {
        return format!(
            "What happened: The configuration file could not be loaded.\nLikely causes: Wrong path or malformed TOML.\nHow to fix: Check --config. Original: {msg}"
        );
    }

    if lower.contains("invalid config") || lower.contains("must be") {
        return format!(
            "What happened: Configuration is invalid ({msg}).\nLikely causes: Out-of-range calibration values in the TOML.\nHow to fix: Edit the config file, then rerun. See etc/vitals.toml for a sample."
        );
    }

    // Generic fallback
    let mut cause = String::new();
    if let Some(src) = err.source() {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

/// Stable reason name for JSON output.
pub fn reason_name(err: &eyre::Report) -> &'static str {
    match err.downcast_ref::<EstimateError>() {
        Some(EstimateError::InsufficientData { .. }) => "InsufficientData",
        Some(EstimateError::OutOfRange(_)) => "OutOfRange",
        None if err.to_string().starts_with("invalid input") => "InvalidInput",
        None => "Error",
    }
}

/// Map estimator errors to stable exit codes; everything else returns 1.
pub fn exit_code_for_error(err: &eyre::Report) -> i32 {
    match err.downcast_ref::<EstimateError>() {
        Some(EstimateError::OutOfRange(_)) => 3,
        Some(EstimateError::InsufficientData { .. }) => 4,
        None => 1,
    }
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    use serde_json::json;

    let details = match err.downcast_ref::<EstimateError>() {
        Some(EstimateError::InsufficientData { got, required }) => {
            Some(json!({ "got": got, "required": required }))
        }
        Some(EstimateError::OutOfRange(reason)) => Some(match reason {
            RangeReason::HeartRate { min_bpm, max_bpm } => {
                json!({ "min_bpm": min_bpm, "max_bpm": max_bpm })
            }
            RangeReason::RrInterval { min_ms, max_ms } => {
                json!({ "min_ms": min_ms, "max_ms": max_ms })
            }
            RangeReason::RespirationTooLow { min } => json!({ "min": min }),
            RangeReason::RespirationTooHigh { max } => json!({ "max": max }),
        }),
        None => None,
    };

    let reason = reason_name(err);
    let msg = humanize(err);
    let obj = if let Some(d) = details {
        json!({ "reason": reason, "details": d, "message": msg })
    } else {
        json!({ "reason": reason, "message": msg })
    };
    obj.to_string()
}
