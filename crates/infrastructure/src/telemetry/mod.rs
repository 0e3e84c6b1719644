//! Logging initialization
//!
//! Installs a `tracing` subscriber writing to stderr. `RUST_LOG` takes
//! precedence over the configured filter.

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::TelemetryAppConfig;

/// Error type for telemetry initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured filter is not a valid directive
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter {
        /// Offending filter
        filter: String,
        /// Parser message
        reason: String,
    },

    /// A global subscriber is already installed
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Build the filter from `RUST_LOG`, else from configuration
fn build_filter(config: &TelemetryAppConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.log_filter).map_err(|e| TelemetryError::InvalidFilter {
        filter: config.log_filter.clone(),
        reason: e.to_string(),
    })
}

/// Initialize the global subscriber
///
/// # Errors
///
/// Fails when the filter does not parse or a subscriber is already set.
pub fn init_telemetry(config: &TelemetryAppConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;

    let result = if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    result.map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(json = config.json, "Telemetry initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_fails() {
        let config = TelemetryAppConfig::default();
        let _ = init_telemetry(&config);
        assert!(matches!(
            init_telemetry(&config),
            Err(TelemetryError::Init(_))
        ));
    }

    #[test]
    fn error_display_names_filter() {
        let err = TelemetryError::InvalidFilter {
            filter: "=[".into(),
            reason: "bad".into(),
        };
        assert!(err.to_string().contains("=["));
    }
}
