//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::entities::WeatherReading;
use domain::value_objects::GeoLocation;
use integration_weather::{OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for the OpenWeatherMap current weather API
pub struct WeatherAdapter {
    client: OpenWeatherClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create an adapter with the given client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::InvalidRequest(e) => ApplicationError::InvalidRequest(e),
            WeatherError::NetworkUnreachable(e) => ApplicationError::NetworkUnreachable(e),
            WeatherError::ServerError { status } => ApplicationError::ServerError { status },
            WeatherError::DecodeError(e) => ApplicationError::Decode(e),
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn get_current_weather(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherReading, ApplicationError> {
        let result = self
            .client
            .get_current(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(reading) => {
                debug!(
                    temperature = reading.temperature_celsius,
                    category = %reading.category,
                    city = %reading.city_name,
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result
    }
}
