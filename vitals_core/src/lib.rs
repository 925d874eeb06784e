#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Physiological signal estimation (transport-agnostic).
//!
//! Three independent, stateless estimators turn smartphone sensor readings into a
//! wellness estimate, a confidence score and an interpretation band.
//!
//! ## Architecture
//!
//! - **Temperature**: battery-thermistor regression with clamping (`temperature` module)
//! - **HRV**: RR filtering, mean HR, SDNN, RMSSD (`hrv` module)
//! - **Respiration**: range check, noise-adjusted confidence (`respiration` module)
//! - **Configuration**: calibration structs (`config` module), TOML bridge (`conversions`)
//! - **Engine**: validated bundle of the three calibrations (`builder` module)
//!
//! None of these are medical measurements. Callers attach their own disclaimer
//! when presenting temperature and respiration results.

pub mod builder;
pub mod config;
pub mod conversions;
pub mod error;
pub mod hrv;
pub mod respiration;
pub mod temperature;
pub mod units;
pub mod util;

pub use builder::{Engine, EngineBuilder};
pub use config::{ConfidenceModel, HrvBounds, RespirationCfg, TemperatureModel};
pub use error::{BuildError, EstimateError, RangeReason};
pub use hrv::{HrvBand, HrvEstimate, HrvMetrics, HrvSampleSet, SampleKind};
pub use respiration::{RespirationBand, RespirationEstimate, RespirationInput};
pub use temperature::{TemperatureBand, TemperatureEstimate, TemperatureInput};
pub use units::MeasurementKind;
