//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer and hosts
//! configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, AudioConfig, BriefingConfig, Environment, GeoLocationConfig, SettingsConfig,
    TelemetryAppConfig, WeatherAppConfig,
};
pub use telemetry::{TelemetryError, init_telemetry};
