//! OpenWeatherMap weather client
//!
//! HTTP client for the OpenWeatherMap current weather endpoint.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use domain::entities::WeatherReading;
use domain::value_objects::GeoLocation;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::ApiResponse;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The request could not be built, e.g. out-of-range coordinates
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The service could not be reached (DNS, connect, timeout, reset)
    #[error("Network unreachable: {0}")]
    NetworkUnreachable(String),

    /// The service answered with a status other than 200
    #[error("Server error: HTTP {status}")]
    ServerError {
        /// HTTP status code
        status: u16,
    },

    /// The response body did not match the expected schema
    #[error("Decode error: {0}")]
    DecodeError(String),
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as `appid`
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get the current weather for a location
    ///
    /// Coordinates are rounded to four decimal places before the request.
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherReading, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::InvalidRequest(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Validate and round coordinates
    fn request_location(latitude: f64, longitude: f64) -> Result<GeoLocation, WeatherError> {
        GeoLocation::new(latitude, longitude)
            .map(|location| location.rounded())
            .map_err(|e| WeatherError::InvalidRequest(e.to_string()))
    }

    /// Query parameters for a current weather request
    fn query_params(&self, location: &GeoLocation) -> [(&'static str, String); 4] {
        [
            ("lat", format!("{:.4}", location.latitude())),
            ("lon", format!("{:.4}", location.longitude())),
            ("units", "metric".to_string()),
            ("appid", self.config.api_key.clone()),
        ]
    }

    fn map_send_error(e: &reqwest::Error) -> WeatherError {
        if e.is_builder() {
            WeatherError::InvalidRequest(e.to_string())
        } else {
            WeatherError::NetworkUnreachable(e.to_string())
        }
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherReading, WeatherError> {
        let location = Self::request_location(latitude, longitude)?;
        let url = format!("{}/weather", self.config.base_url.trim_end_matches('/'));

        debug!(url = %url, location = %location, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&self.query_params(&location))
            .send()
            .await
            .map_err(|e| Self::map_send_error(&e))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = %status, "Weather service returned non-success status");
            return Err(WeatherError::ServerError {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| WeatherError::NetworkUnreachable(e.to_string()))?;

        let api_response: ApiResponse = serde_json::from_slice(&body)
            .map_err(|e| WeatherError::DecodeError(e.to_string()))?;

        Ok(WeatherReading::from(api_response))
    }
}
