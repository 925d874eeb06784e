mod cli;
mod error_fmt;
mod estimate;
mod logging;
mod validate;

use clap::Parser;
use cli::{Cli, Commands};
use error_fmt::{exit_code_for_error, format_error_json, humanize};
use eyre::Result;
use vitals_core::{Engine, RespirationInput, TemperatureInput};

fn main() {
    let _ = color_eyre::install();
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        if json {
            eprintln!("{}", format_error_json(&err));
        } else {
            eprintln!("{}", humanize(&err));
        }
        std::process::exit(exit_code_for_error(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    let cfg = match cli.config.as_deref() {
        Some(path) => vitals_config::load_file(path)?,
        None => vitals_config::Config::default(),
    };
    // Held until `run` returns so the file sink flushes before exit.
    let _log_guard = logging::init_tracing(cli.json, &cli.log_level, &cfg.logging)?;
    let engine = Engine::from_config(&cfg)?;
    tracing::debug!(config = ?cli.config, "engine ready");

    let out = match cli.cmd {
        Commands::Temperature {
            battery_temp,
            contact_time,
            ambient_temp,
        } => {
            let input = TemperatureInput {
                battery_temp,
                contact_time,
                ambient_temp,
            };
            estimate::temperature(&engine, &input)?
        }
        Commands::Hrv { samples, rr } => estimate::hrv(&engine, samples, rr)?,
        Commands::Respiration {
            rate,
            peaks_count,
            duration,
            noise_level,
            confidence,
        } => {
            let input = RespirationInput {
                respiration_rate: rate,
                peaks_count,
                duration,
                noise_level,
                confidence,
            };
            estimate::respiration(&engine, &input)?
        }
        Commands::Units => estimate::units(),
        Commands::SelfCheck => estimate::self_check(&engine)?,
    };

    if cli.json {
        println!("{}", out.json);
    } else {
        println!("{}", out.text);
    }
    Ok(())
}
