//! Weather service port
//!
//! Defines the interface for current weather retrieval.

use async_trait::async_trait;
use domain::entities::WeatherReading;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
///
/// Implementations perform exactly one round trip per call and never
/// return a partially populated reading.
#[allow(clippy::struct_field_names)] // automock generates struct with `get_*` prefixes
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current weather for a location
    async fn get_current_weather(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherReading, ApplicationError>;
}
