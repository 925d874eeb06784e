//! `Engine` facade and its builder.
//!
//! The engine only bundles the three calibrations; every call is a pure function of
//! its input and the engine is freely shareable across threads.

use crate::config::{HrvBounds, RespirationCfg, TemperatureModel};
use crate::error::{BuildError, Result};
use crate::hrv::{self, HrvEstimate, HrvSampleSet};
use crate::respiration::{self, RespirationEstimate, RespirationInput};
use crate::temperature::{self, TemperatureEstimate, TemperatureInput};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Engine {
    temperature: TemperatureModel,
    hrv: HrvBounds,
    respiration: RespirationCfg,
}

impl Engine {
    /// Start building an Engine; unset calibrations use the shipped defaults.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Build from a parsed TOML config.
    pub fn from_config(cfg: &vitals_config::Config) -> eyre::Result<Self> {
        let engine = Self::builder()
            .with_temperature_model((&cfg.temperature).into())
            .with_hrv_bounds((&cfg.hrv).into())
            .with_respiration((&cfg.respiration).into())
            .try_build()?;
        Ok(engine)
    }

    pub fn temperature_model(&self) -> &TemperatureModel {
        &self.temperature
    }

    pub fn hrv_bounds(&self) -> &HrvBounds {
        &self.hrv
    }

    pub fn respiration_cfg(&self) -> &RespirationCfg {
        &self.respiration
    }

    pub fn temperature(&self, input: &TemperatureInput) -> TemperatureEstimate {
        temperature::estimate_body_temperature(&self.temperature, input)
    }

    pub fn hrv(&self, samples: &HrvSampleSet) -> Result<HrvEstimate> {
        hrv::estimate_hrv(&self.hrv, samples)
    }

    pub fn respiration(&self, input: &RespirationInput) -> Result<RespirationEstimate> {
        respiration::validate_and_interpret(&self.respiration, input)
    }
}

#[derive(Debug, Default)]
pub struct EngineBuilder {
    temperature: Option<TemperatureModel>,
    hrv: Option<HrvBounds>,
    respiration: Option<RespirationCfg>,
}

impl EngineBuilder {
    pub fn with_temperature_model(mut self, model: TemperatureModel) -> Self {
        self.temperature = Some(model);
        self
    }

    pub fn with_hrv_bounds(mut self, bounds: HrvBounds) -> Self {
        self.hrv = Some(bounds);
        self
    }

    pub fn with_respiration(mut self, cfg: RespirationCfg) -> Self {
        self.respiration = Some(cfg);
        self
    }

    /// Validate the calibrations and build.
    pub fn try_build(self) -> std::result::Result<Engine, BuildError> {
        let engine = Engine {
            temperature: self.temperature.unwrap_or_default(),
            hrv: self.hrv.unwrap_or_default(),
            respiration: self.respiration.unwrap_or_default(),
        };
        engine.temperature.check()?;
        engine.hrv.check()?;
        engine.respiration.check()?;
        Ok(engine)
    }
}
