//! OpenWeatherMap response models
//!
//! Only the fields the briefing needs are decoded; a missing field fails
//! the whole response.

use domain::entities::WeatherReading;
use domain::value_objects::WeatherCategory;
use serde::Deserialize;

/// Body of `GET /weather`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// Temperature block
    pub main: MainBlock,
    /// Conditions, most significant first
    pub weather: Vec<ConditionBlock>,
    /// Visibility in meters
    pub visibility: u32,
    /// Wind block
    pub wind: WindBlock,
    /// City name
    pub name: String,
}

/// `main` object
#[derive(Debug, Clone, Deserialize)]
pub struct MainBlock {
    /// Temperature in the requested units (Celsius for `units=metric`)
    pub temp: f64,
}

/// Entry of the `weather` array
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionBlock {
    /// Condition group, e.g. `"Rain"`
    pub main: String,
    /// Free text description, e.g. `"light rain"`
    pub description: String,
}

/// `wind` object
#[derive(Debug, Clone, Deserialize)]
pub struct WindBlock {
    /// Wind speed as reported
    pub speed: f64,
}

impl From<ApiResponse> for WeatherReading {
    fn from(response: ApiResponse) -> Self {
        let (category, description) = response
            .weather
            .into_iter()
            .next()
            .map_or((WeatherCategory::Unknown, String::new()), |condition| {
                (
                    WeatherCategory::from_condition(&condition.main),
                    condition.description,
                )
            });

        Self {
            temperature_celsius: response.main.temp,
            wind_speed_kmh: response.wind.speed,
            category,
            description,
            visibility_label: Self::visibility_label_from_meters(response.visibility),
            city_name: response.name,
        }
    }
}
