//! Transport-layer input checks.
//!
//! Coarse sanity limits applied before anything reaches the engine. The engine keeps
//! its own, narrower physiological filtering and does not rely on these.

use eyre::Result;
use vitals_core::{RespirationInput, TemperatureInput};

pub const BATTERY_TEMP_RANGE: (f64, f64) = (15.0, 60.0);
pub const MIN_CONTACT_S: u32 = 10;
pub const RESPIRATION_RATE_RANGE: (f64, f64) = (1.0, 80.0);

fn within(v: f64, (lo, hi): (f64, f64)) -> bool {
    v.is_finite() && v >= lo && v <= hi
}

pub fn temperature(input: &TemperatureInput) -> Result<()> {
    if !within(input.battery_temp, BATTERY_TEMP_RANGE) {
        eyre::bail!(
            "invalid input: battery_temp must be in [{}, {}] °C, got {}",
            BATTERY_TEMP_RANGE.0,
            BATTERY_TEMP_RANGE.1,
            input.battery_temp
        );
    }
    if input.contact_time < MIN_CONTACT_S {
        eyre::bail!(
            "invalid input: contact_time must be >= {MIN_CONTACT_S} s, got {}",
            input.contact_time
        );
    }
    if let Some(ambient) = input.ambient_temp
        && !ambient.is_finite()
    {
        eyre::bail!("invalid input: ambient_temp must be a finite number");
    }
    Ok(())
}

pub fn hrv_samples(samples: &[f64]) -> Result<()> {
    if let Some(bad) = samples.iter().find(|s| !s.is_finite()) {
        eyre::bail!("invalid input: samples must be finite numbers, got {bad}");
    }
    Ok(())
}

pub fn respiration(input: &RespirationInput) -> Result<()> {
    if !within(input.respiration_rate, RESPIRATION_RATE_RANGE) {
        eyre::bail!(
            "invalid input: respiration_rate must be in [{}, {}] breaths/min, got {}",
            RESPIRATION_RATE_RANGE.0,
            RESPIRATION_RATE_RANGE.1,
            input.respiration_rate
        );
    }
    if let Some(noise) = input.noise_level
        && !within(noise, (0.0, 100.0))
    {
        eyre::bail!("invalid input: noise_level must be in [0, 100], got {noise}");
    }
    if let Some(c) = input.confidence
        && !within(c, (0.0, 1.0))
    {
        eyre::bail!("invalid input: confidence must be in [0, 1], got {c}");
    }
    if let Some(d) = input.duration
        && !(d.is_finite() && d > 0.0)
    {
        eyre::bail!("invalid input: duration must be > 0 s, got {d}");
    }
    Ok(())
}
