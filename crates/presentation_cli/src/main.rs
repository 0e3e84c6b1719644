//! JetWell CLI
//!
//! Command-line interface for the pre-flight weather briefing.

#![allow(clippy::print_stdout)]

mod report;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::ports::{LocationSnapshot, SettingsPort};
use application::services::{
    AmbientSoundCoordinator, BriefingOrchestrator, LocationResolver, TriggerReason,
};
use clap::{Parser, Subcommand};
use domain::risk::RiskAssessment;
use domain::value_objects::{GeoLocation, WeatherCategory};
use infrastructure::{
    AppConfig, FileSettingsStore, HeadlessAudioOutput, WatchLocationProvider, WatchReachability,
    WeatherAdapter, init_telemetry,
};
use tracing::warn;

/// JetWell CLI
#[derive(Debug, Parser)]
#[command(name = "jetwell-cli")]
#[command(author, version, about = "JetWell pre-flight weather briefing", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "JETWELL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the current weather and print the briefing
    ///
    /// Without coordinates the configured fallback location is used.
    /// Example: jetwell-cli briefing --lat 40.4168 --lon -3.7038
    Briefing {
        /// Device latitude
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Device longitude
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Simulate a device that refused location access
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        denied: bool,

        /// Print the briefing state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the risk signals for a weather category and wind speed
    ///
    /// Example: jetwell-cli classify thunderstorm 50
    Classify {
        /// Weather category (e.g. clear, rain, thunderstorm)
        category: WeatherCategory,

        /// Wind speed as reported by the weather service
        wind: f64,
    },

    /// Show or change the ambient sound setting
    Sounds {
        #[command(subcommand)]
        action: SoundsAction,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum SoundsAction {
    /// Enable ambient sounds
    On,
    /// Disable ambient sounds
    Off,
    /// Print the current setting
    Status,
}

/// Determine log filter level from verbosity count
///
/// Without `-v` the configured filter applies.
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Location snapshot described by the briefing arguments
fn location_snapshot(
    lat: Option<f64>,
    lon: Option<f64>,
    denied: bool,
) -> anyhow::Result<LocationSnapshot> {
    if denied {
        return Ok(LocationSnapshot::denied());
    }
    match (lat, lon) {
        (Some(lat), Some(lon)) => {
            let fix = GeoLocation::new(lat, lon).context("invalid device coordinates")?;
            Ok(LocationSnapshot::authorized(fix))
        },
        _ => Ok(LocationSnapshot::default()),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => AppConfig::load().context("failed to load configuration"),
    }
}

fn audio_output(config: &AppConfig) -> HeadlessAudioOutput {
    config
        .audio
        .sound_dir
        .as_ref()
        .map_or_else(HeadlessAudioOutput::new, HeadlessAudioOutput::with_sound_dir)
}

async fn run_briefing(
    config: &AppConfig,
    snapshot: LocationSnapshot,
    json: bool,
) -> anyhow::Result<()> {
    if config.weather.api_key.is_none() {
        warn!("No weather API key configured; set JETWELL_WEATHER__API_KEY");
    }

    let weather = WeatherAdapter::with_config(config.weather_client_config())?;
    let settings = Arc::new(FileSettingsStore::open(config.settings.path.clone()));
    let sounds = Arc::new(AmbientSoundCoordinator::new(
        Arc::new(audio_output(config)),
        settings,
    ));
    let orchestrator = BriefingOrchestrator::new(
        Arc::new(weather),
        Arc::new(WatchLocationProvider::new(snapshot)),
        Arc::new(WatchReachability::default()),
        Arc::clone(&sounds),
        LocationResolver::new(config.fallback_location()),
    );

    orchestrator.trigger(TriggerReason::Activation).await;
    let state = orchestrator.snapshot();

    if json {
        let body = serde_json::json!({
            "state": state,
            "risk": state.risk(),
            "ambient_sound": sounds.current(),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print!("{}", report::render_briefing(&state, sounds.current()));
    }

    sounds.stop();
    Ok(())
}

fn run_sounds(config: &AppConfig, action: SoundsAction) -> anyhow::Result<()> {
    let store = Arc::new(FileSettingsStore::open(config.settings.path.clone()));

    let enabled = match action {
        SoundsAction::Status => store.sounds_enabled(),
        SoundsAction::On | SoundsAction::Off => {
            let enabled = action == SoundsAction::On;
            let coordinator =
                AmbientSoundCoordinator::new(Arc::new(audio_output(config)), store.clone());
            coordinator
                .set_globally_enabled(enabled)
                .with_context(|| format!("failed to save {}", store.path().display()))?;
            enabled
        },
    };

    if enabled {
        println!("🔊 Ambient sounds: on");
    } else {
        println!("🔇 Ambient sounds: off");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    let mut telemetry = config.telemetry.clone();
    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        telemetry.log_filter = filter.to_string();
    }
    init_telemetry(&telemetry)?;

    match cli.command {
        Commands::Briefing {
            lat,
            lon,
            denied,
            json,
        } => {
            let snapshot = location_snapshot(lat, lon, denied)?;
            run_briefing(&config, snapshot, json).await?;
        },

        Commands::Classify { category, wind } => {
            println!("🌦️  {category}, wind {wind}");
            let risk = RiskAssessment::evaluate(category, wind);
            print!("{}", report::render_risk(&risk));
        },

        Commands::Sounds { action } => run_sounds(&config, action)?,
    }

    Ok(())
}
