//! Command handlers: transport checks, engine call, result rendering.

use crate::validate;
use eyre::{Result, WrapErr};
use serde_json::{Value, json};
use vitals_core::{
    Engine, HrvEstimate, HrvSampleSet, MeasurementKind, RespirationEstimate, RespirationInput,
    TemperatureEstimate, TemperatureInput,
};

/// Attached to every temperature and respiration result shown to the user.
pub const DISCLAIMER: &str = "Estimate for information only. Not a certified medical device. \
                              Consult a healthcare professional.";

/// A rendered command result: JSON for `--json`, text otherwise.
pub struct Rendered {
    pub json: Value,
    pub text: String,
}

pub fn temperature(engine: &Engine, input: &TemperatureInput) -> Result<Rendered> {
    validate::temperature(input)?;
    let est = engine.temperature(input);
    tracing::info!(
        estimated_temp = est.estimated_temp,
        confidence = est.confidence,
        band = est.band.code(),
        "temperature estimate"
    );
    Ok(render_temperature(&est))
}

pub fn render_temperature(est: &TemperatureEstimate) -> Rendered {
    let unit = MeasurementKind::Temperature.unit();
    let json = json!({
        "kind": MeasurementKind::Temperature.name(),
        "estimated_temp": est.estimated_temp,
        "unit": unit,
        "confidence": est.confidence,
        "band": est.band.code(),
        "interpretation": est.interpretation(),
        "disclaimer": DISCLAIMER,
    });
    let text = format!(
        "Estimated body temperature: {:.1} {unit} (confidence {:.2})\n{}\n{}",
        est.estimated_temp,
        est.confidence,
        est.interpretation(),
        DISCLAIMER
    );
    Rendered { json, text }
}

pub fn hrv(engine: &Engine, samples: Vec<f64>, is_rr: bool) -> Result<Rendered> {
    validate::hrv_samples(&samples)?;
    let set = HrvSampleSet::new(samples, is_rr);
    let est = engine.hrv(&set).wrap_err("HRV computation failed")?;
    tracing::info!(
        mean_hr = est.metrics.mean_hr,
        sdnn = est.metrics.hrv_sdnn,
        rmssd = est.metrics.hrv_rmssd,
        band = est.band.code(),
        "hrv estimate"
    );
    Ok(render_hrv(&est))
}

pub fn render_hrv(est: &HrvEstimate) -> Rendered {
    let m = &est.metrics;
    let json = json!({
        "kind": MeasurementKind::Hrv.name(),
        "mean_hr": m.mean_hr,
        "hrv_sdnn": m.hrv_sdnn,
        "hrv_rmssd": m.hrv_rmssd,
        "unit": MeasurementKind::Hrv.unit(),
        "band": est.band.code(),
        "interpretation": est.interpretation(),
    });
    let text = format!(
        "Mean heart rate: {:.1} {}\nSDNN: {:.1} ms\nRMSSD: {:.1} ms\n{}",
        m.mean_hr,
        MeasurementKind::HeartRate.unit(),
        m.hrv_sdnn,
        m.hrv_rmssd,
        est.interpretation()
    );
    Rendered { json, text }
}

pub fn respiration(engine: &Engine, input: &RespirationInput) -> Result<Rendered> {
    validate::respiration(input)?;
    let est = engine
        .respiration(input)
        .wrap_err("respiration rate rejected")?;
    tracing::info!(
        rate = est.respiration_rate,
        confidence = est.confidence,
        band = est.band.code(),
        "respiration estimate"
    );
    Ok(render_respiration(&est, input))
}

pub fn render_respiration(est: &RespirationEstimate, input: &RespirationInput) -> Rendered {
    let unit = MeasurementKind::Respiration.unit();
    let json = json!({
        "kind": MeasurementKind::Respiration.name(),
        "respiration_rate": est.respiration_rate,
        "unit": unit,
        "confidence": est.confidence,
        "band": est.band.code(),
        "interpretation": est.interpretation(),
        "disclaimer": DISCLAIMER,
        "peaks_count": input.peaks_count,
        "duration": input.duration,
    });
    let text = format!(
        "Respiration rate: {} {unit} (confidence {:.2})\n{}\n{}",
        est.respiration_rate,
        est.confidence,
        est.interpretation(),
        DISCLAIMER
    );
    Rendered { json, text }
}

pub fn units() -> Rendered {
    let kinds: Vec<Value> = MeasurementKind::ALL
        .iter()
        .map(|k| json!({ "kind": k.name(), "unit": k.unit() }))
        .collect();
    let text = MeasurementKind::ALL
        .iter()
        .map(|k| format!("{:<12} {}", k.name(), k.unit()))
        .collect::<Vec<_>>()
        .join("\n");
    Rendered {
        json: Value::Array(kinds),
        text,
    }
}

/// Run each estimator on a fixed, known-good reading.
pub fn self_check(engine: &Engine) -> Result<Rendered> {
    let t = engine.temperature(&TemperatureInput::new(36.0, 90).with_ambient(25.0));
    if !(t.estimated_temp.is_finite() && t.confidence > 0.0) {
        eyre::bail!("self-check failed: temperature estimator returned {t:?}");
    }

    let h = engine
        .hrv(&HrvSampleSet::heart_rates(vec![
            72., 74., 70., 73., 75., 71., 72., 68., 74., 73.,
        ]))
        .wrap_err("self-check failed: hrv")?;

    let r = engine
        .respiration(&RespirationInput::new(16.0))
        .wrap_err("self-check failed: respiration")?;

    tracing::info!("self-check ok");
    let json = json!({
        "status": "ok",
        "checks": {
            "temperature": t.estimated_temp,
            "hrv_mean_hr": h.metrics.mean_hr,
            "respiration_rate": r.respiration_rate,
        }
    });
    let text = format!(
        "temperature: ok ({:.1} °C)\nhrv: ok (mean HR {:.1} bpm)\nrespiration: ok ({} resp/min)\nself-check ok",
        t.estimated_temp, h.metrics.mean_hr, r.respiration_rate
    );
    Ok(Rendered { json, text })
}
