use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use forecast_core::{Config, NormalizeOptions, StormglassResponse, UnitSystem, WeatherReport};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Normalize multi-source hourly weather feeds")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively set defaults (forecast days, location, units).
    Configure,

    /// Print the normalized report for a payload as JSON.
    Normalize {
        #[command(flatten)]
        input: InputArgs,

        /// Latitude override; defaults to the payload's meta block.
        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude override; defaults to the payload's meta block.
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,

        /// Emit single-line JSON.
        #[arg(long)]
        compact: bool,
    },

    /// Show current conditions and the daily forecast for a payload.
    Show {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Path to a raw hourly payload (JSON).
    pub payload: PathBuf,

    /// Location label; falls back to the configured default.
    #[arg(long)]
    pub location: Option<String>,

    /// Number of forecast days to keep.
    #[arg(long)]
    pub days: Option<usize>,
}

impl InputArgs {
    fn options(&self, config: &Config) -> NormalizeOptions {
        NormalizeOptions { max_days: self.days.unwrap_or_else(|| config.max_days()) }
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure()?,
            Command::Normalize { input, lat, lng, compact } => {
                let config = Config::load()?;
                let response = read_payload(&input.payload).await?;
                let name = config.location_name(input.location.clone())?;
                let coordinates = match (lat, lng) {
                    (Some(lat), Some(lng)) => (lat, lng),
                    _ => response.coordinates(),
                };

                let report = forecast_core::normalize(
                    response.hours(),
                    &name,
                    coordinates,
                    input.options(&config),
                );
                print_json(&report, compact)?;
            }
            Command::Show { input } => {
                let config = Config::load()?;
                let response = read_payload(&input.payload).await?;
                let name = config.location_name(input.location.clone())?;

                let report = response.normalize(&name, input.options(&config));
                print!("{}", render::report(&report, config.units));
            }
        }

        Ok(())
    }
}

async fn read_payload(path: &Path) -> Result<StormglassResponse> {
    let body = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read payload file: {}", path.display()))?;

    let response = forecast_core::decode(&body)
        .with_context(|| format!("Invalid payload in {}", path.display()))?;

    debug!(hours = response.hours().len(), path = %path.display(), "loaded payload");
    Ok(response)
}

fn print_json(report: &WeatherReport, compact: bool) -> Result<()> {
    let out = if compact {
        serde_json::to_string(report)
    } else {
        serde_json::to_string_pretty(report)
    }
    .context("Failed to serialize report")?;

    println!("{out}");
    Ok(())
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let max_days = inquire::CustomType::<usize>::new("Forecast days to keep:")
        .with_default(config.max_days())
        .with_error_message("Please enter a whole number")
        .prompt()
        .context("Failed to read forecast days")?;

    let location = inquire::Text::new("Default location name:")
        .with_default(config.default_location.as_deref().unwrap_or_default())
        .prompt()
        .context("Failed to read default location")?;

    let start = UnitSystem::all().iter().position(|u| *u == config.units).unwrap_or_default();
    let units = inquire::Select::new("Units for `forecast show`:", UnitSystem::all().to_vec())
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read unit system")?;

    config.max_days = Some(max_days);
    config.default_location = Some(location.trim().to_string()).filter(|l| !l.is_empty());
    config.units = units;
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
