//! Application configuration
//!
//! Layered: built-in defaults, then an optional `config.toml`, then
//! `JETWELL_*` environment variables (`__` separates nested keys, e.g.
//! `JETWELL_WEATHER__API_KEY`).

use std::fmt;
use std::path::{Path, PathBuf};

use domain::value_objects::GeoLocation;
use integration_weather::WeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "JETWELL";

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Weather service configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Briefing behavior
    #[serde(default)]
    pub briefing: BriefingConfig,

    /// Persisted user settings
    #[serde(default)]
    pub settings: SettingsConfig,

    /// Audio output
    #[serde(default)]
    pub audio: AudioConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeatherMap API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// OpenWeatherMap API key (sensitive, never serialized)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
}

fn default_weather_base_url() -> String {
    WeatherConfig::default().base_url
}

fn default_weather_timeout() -> u64 {
    WeatherConfig::default().timeout_secs
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            api_key: None,
            timeout_secs: default_weather_timeout(),
        }
    }
}

/// A latitude/longitude pair as written in configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocationConfig {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Default for GeoLocationConfig {
    fn default() -> Self {
        let ny = GeoLocation::new_york();
        Self {
            latitude: ny.latitude(),
            longitude: ny.longitude(),
        }
    }
}

/// Briefing configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BriefingConfig {
    /// Location used when the device location is unavailable
    #[serde(default)]
    pub fallback_location: GeoLocationConfig,
}

/// Settings store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    /// Path of the JSON settings file
    #[serde(default = "default_settings_path")]
    pub path: PathBuf,
}

fn default_settings_path() -> PathBuf {
    PathBuf::from("jetwell-settings.json")
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            path: default_settings_path(),
        }
    }
}

/// Audio output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Directory holding `<sound>.mp3` assets; unchecked when unset
    #[serde(default)]
    pub sound_dir: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryAppConfig {
    /// Log filter directive (e.g. "info", "application=debug,info")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit JSON lines instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TelemetryAppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false), None)
    }

    /// Load configuration from an explicit file and environment
    ///
    /// Unlike [`AppConfig::load`], the file must exist.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true), None)
    }

    fn build<S>(
        file: S,
        env_override: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let ny = GeoLocation::new_york();
        let builder = config::Config::builder()
            .set_default("briefing.fallback_location.latitude", ny.latitude())?
            .set_default("briefing.fallback_location.longitude", ny.longitude())?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env_override),
            );

        builder.build()?.try_deserialize()
    }

    /// The validated fallback location
    ///
    /// Out-of-range coordinates are replaced by New York.
    #[must_use]
    pub fn fallback_location(&self) -> GeoLocation {
        let configured = self.briefing.fallback_location;
        GeoLocation::new(configured.latitude, configured.longitude).unwrap_or_else(|e| {
            warn!(
                latitude = configured.latitude,
                longitude = configured.longitude,
                error = %e,
                "Invalid fallback location, using New York"
            );
            GeoLocation::new_york()
        })
    }

    /// Configuration for the weather client
    #[must_use]
    pub fn weather_client_config(&self) -> WeatherConfig {
        WeatherConfig {
            base_url: self.weather.base_url.clone(),
            api_key: self
                .weather
                .api_key
                .as_ref()
                .map(|key| key.expose_secret().to_string())
                .unwrap_or_default(),
            timeout_secs: self.weather.timeout_secs,
        }
    }
}
