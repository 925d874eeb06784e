//! CLI argument definitions.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "vitals",
    version,
    about = "Wellness estimates from smartphone sensor readings (not a medical device)"
)]
pub struct Cli {
    /// Path to config TOML; shipped calibration is used when omitted
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit results, errors and logs as JSON instead of text
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace); RUST_LOG takes precedence
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate body temperature from the battery thermistor
    Temperature {
        /// Battery temperature after skin contact (°C)
        #[arg(long, value_name = "CELSIUS", allow_negative_numbers = true)]
        battery_temp: f64,
        /// Skin contact duration (seconds)
        #[arg(long, value_name = "SECONDS")]
        contact_time: u32,
        /// Battery temperature before contact (°C); defaults to the calibration's ambient
        #[arg(long, value_name = "CELSIUS", allow_negative_numbers = true)]
        ambient_temp: Option<f64>,
    },
    /// Heart-rate variability from camera-PPG samples
    Hrv {
        /// Comma-separated samples (bpm, or ms with --rr)
        #[arg(
            long,
            value_name = "LIST",
            value_delimiter = ',',
            num_args = 1..,
            required = true
        )]
        samples: Vec<f64>,
        /// Samples are RR intervals in milliseconds instead of heart rates
        #[arg(long, action = ArgAction::SetTrue)]
        rr: bool,
    },
    /// Validate and interpret a device-computed respiration rate
    Respiration {
        /// Breaths per minute computed on the device
        #[arg(long, value_name = "BPM")]
        rate: f64,
        /// Breath cycles detected (echoed back)
        #[arg(long, value_name = "N")]
        peaks_count: Option<u32>,
        /// Measurement duration in seconds (echoed back)
        #[arg(long, value_name = "SECONDS")]
        duration: Option<f64>,
        /// Ambient noise level, 0 (silent) to 100
        #[arg(long, value_name = "LEVEL")]
        noise_level: Option<f64>,
        /// Device-side confidence, 0 to 1
        #[arg(long, value_name = "SCORE")]
        confidence: Option<f64>,
    },
    /// List measurement kinds and their units
    Units,
    /// Run every estimator on a known reading and report
    SelfCheck,
}
