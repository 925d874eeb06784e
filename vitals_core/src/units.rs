//! Measurement kinds the wider system records, with their display units.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementKind {
    Temperature,
    HeartRate,
    Steps,
    Hrv,
    Respiration,
    Activity,
}

impl MeasurementKind {
    pub const ALL: [Self; 6] = [
        Self::Temperature,
        Self::HeartRate,
        Self::Steps,
        Self::Hrv,
        Self::Respiration,
        Self::Activity,
    ];

    /// Wire name, as used by measurement records.
    pub fn name(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::HeartRate => "hr",
            Self::Steps => "steps",
            Self::Hrv => "hrv",
            Self::Respiration => "respiration",
            Self::Activity => "activity",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::HeartRate => "bpm",
            Self::Steps => "steps",
            Self::Hrv => "ms",
            Self::Respiration => "resp/min",
            Self::Activity => "kcal",
        }
    }
}

impl core::fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown measurement kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for MeasurementKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
