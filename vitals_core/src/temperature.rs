//! Body temperature from the battery thermistor.
//!
//! The phone is held against the skin; the battery warms from ambient towards skin
//! temperature. A linear model over the warming delta, the final battery reading and
//! ln(contact time) maps that to a body-temperature estimate.

use crate::config::TemperatureModel;
use crate::util::round_dp;

/// One thermistor reading after skin contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureInput {
    /// Battery temperature after contact (°C).
    pub battery_temp: f64,
    /// Skin contact duration (s).
    pub contact_time: u32,
    /// Battery temperature before contact (°C); the model default is used when `None`.
    pub ambient_temp: Option<f64>,
}

impl TemperatureInput {
    pub fn new(battery_temp: f64, contact_time: u32) -> Self {
        Self {
            battery_temp,
            contact_time,
            ambient_temp: None,
        }
    }

    pub fn with_ambient(mut self, ambient_temp: f64) -> Self {
        self.ambient_temp = Some(ambient_temp);
        self
    }
}

/// Clinical-style interpretation of an estimated body temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureBand {
    /// < 36.0 °C
    HypothermiaPossible,
    /// [36.0, 37.5)
    Normal,
    /// [37.5, 38.0)
    SlightlyElevated,
    /// [38.0, 39.0)
    MildFever,
    /// [39.0, 40.0)
    ModerateFever,
    /// ≥ 40.0 °C
    SevereFever,
}

impl TemperatureBand {
    pub fn description(self) -> &'static str {
        match self {
            Self::HypothermiaPossible => "Mild hypothermia possible (< 36°C), warm up",
            Self::Normal => "Normal temperature (36.0–37.4°C)",
            Self::SlightlyElevated => "Slightly elevated (37.5–37.9°C), monitor the trend",
            Self::MildFever => "Mild fever (38.0–38.9°C), rest and hydrate",
            Self::ModerateFever => "Moderate fever (39.0–39.9°C), see a doctor",
            Self::SevereFever => "High fever (≥ 40°C), seek urgent medical care",
        }
    }

    /// Stable machine-readable name.
    pub fn code(self) -> &'static str {
        match self {
            Self::HypothermiaPossible => "hypothermia_possible",
            Self::Normal => "normal",
            Self::SlightlyElevated => "slightly_elevated",
            Self::MildFever => "mild_fever",
            Self::ModerateFever => "moderate_fever",
            Self::SevereFever => "severe_fever",
        }
    }
}

impl core::fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureEstimate {
    /// Estimated body temperature (°C), one decimal.
    pub estimated_temp: f64,
    /// Confidence in [0, cap], two decimals.
    pub confidence: f64,
    pub band: TemperatureBand,
}

impl TemperatureEstimate {
    pub fn interpretation(&self) -> &'static str {
        self.band.description()
    }
}

/// Regression estimate and confidence for one reading.
///
/// Returns `(estimated_temp, confidence)`, rounded to one and two decimals. The
/// estimate is always inside `[model.min_c, model.max_c]`; a saturated regression is
/// clamped, not rejected.
pub fn estimate(
    model: &TemperatureModel,
    battery_temp: f64,
    contact_time: u32,
    ambient_temp: f64,
) -> (f64, f64) {
    let delta_t = battery_temp - ambient_temp;
    let contact_factor = f64::from(contact_time.max(1)).ln();

    let raw = model.alpha * delta_t + model.beta * battery_temp + model.gamma * contact_factor
        + model.delta;
    // max/min rather than clamp: a NaN regression lands on the lower bound instead of escaping.
    let estimated = raw.max(model.min_c).min(model.max_c);
    if estimated != raw {
        tracing::warn!(
            raw_c = raw,
            clamped_c = estimated,
            "temperature regression outside model range; clamped"
        );
    }

    let c = &model.confidence;
    let time_factor = (f64::from(contact_time) / c.full_contact_s).min(1.0);
    let heat_factor = (delta_t.max(0.0) / c.full_warming_c).min(1.0);
    let confidence = c.base + c.time_weight * time_factor + c.heat_weight * heat_factor;

    (round_dp(estimated, 1), round_dp(confidence.min(c.cap), 2))
}

/// Band an (already clamped) estimate.
pub fn interpret_temperature(temp: f64) -> TemperatureBand {
    if temp < 36.0 {
        TemperatureBand::HypothermiaPossible
    } else if temp < 37.5 {
        TemperatureBand::Normal
    } else if temp < 38.0 {
        TemperatureBand::SlightlyElevated
    } else if temp < 39.0 {
        TemperatureBand::MildFever
    } else if temp < 40.0 {
        TemperatureBand::ModerateFever
    } else {
        TemperatureBand::SevereFever
    }
}

/// Full estimate for one reading: value, confidence and band.
pub fn estimate_body_temperature(
    model: &TemperatureModel,
    input: &TemperatureInput,
) -> TemperatureEstimate {
    let ambient = input.ambient_temp.unwrap_or(model.default_ambient_c);
    let (estimated_temp, confidence) =
        estimate(model, input.battery_temp, input.contact_time, ambient);
    tracing::debug!(
        battery_c = input.battery_temp,
        ambient_c = ambient,
        contact_s = input.contact_time,
        estimated_temp,
        confidence,
        "temperature estimated"
    );
    TemperatureEstimate {
        estimated_temp,
        confidence,
        band: interpret_temperature(estimated_temp),
    }
}
