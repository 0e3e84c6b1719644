//! Weather reading entity
//!
//! A single decoded observation for the briefing location.

use serde::{Deserialize, Serialize};

use crate::value_objects::WeatherCategory;

/// Immutable snapshot of current conditions
///
/// Replaced wholesale on every successful fetch; never patched field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Temperature in Celsius
    pub temperature_celsius: f64,
    /// Wind speed as reported by the endpoint
    pub wind_speed_kmh: f64,
    /// Condition group
    pub category: WeatherCategory,
    /// Free-text description from the endpoint (e.g. "light rain")
    pub description: String,
    /// Visibility label, e.g. `"10+ Km"`
    pub visibility_label: String,
    /// Name of the reporting city
    pub city_name: String,
}

impl WeatherReading {
    /// Format a visibility distance in meters as a whole-kilometer label
    ///
    /// Uses floor division, so 9_999 m is reported as `"9+ Km"`.
    #[must_use]
    pub fn visibility_label_from_meters(meters: u32) -> String {
        format!("{}+ Km", meters / 1000)
    }

    /// Signed, whole-degree temperature label (e.g. `"+22°"`, `"-3°"`)
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn temperature_label(&self) -> String {
        let sign = if self.temperature_celsius > 0.0 { "+" } else { "" };
        format!("{sign}{}°", self.temperature_celsius.trunc() as i64)
    }

    /// Whole-number wind label (e.g. `"5 Km/h"`)
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn wind_label(&self) -> String {
        format!("{} Km/h", self.wind_speed_kmh.trunc() as i64)
    }
}

/// Reading shown before the first fetch settles
impl Default for WeatherReading {
    fn default() -> Self {
        Self {
            temperature_celsius: 22.0,
            wind_speed_kmh: 5.0,
            category: WeatherCategory::Clear,
            description: String::new(),
            visibility_label: "10+ Km".to_string(),
            city_name: "Moscow".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(temperature: f64, wind: f64) -> WeatherReading {
        WeatherReading {
            temperature_celsius: temperature,
            wind_speed_kmh: wind,
            ..WeatherReading::default()
        }
    }

    #[test]
    fn default_reading() {
        let default = WeatherReading::default();
        assert_eq!(default.category, WeatherCategory::Clear);
        assert_eq!(default.visibility_label, "10+ Km");
        assert_eq!(default.city_name, "Moscow");
        assert!(default.description.is_empty());
    }

    #[test]
    fn visibility_label_floors_to_kilometers() {
        assert_eq!(WeatherReading::visibility_label_from_meters(10_000), "10+ Km");
        assert_eq!(WeatherReading::visibility_label_from_meters(9_999), "9+ Km");
        assert_eq!(WeatherReading::visibility_label_from_meters(999), "0+ Km");
        assert_eq!(WeatherReading::visibility_label_from_meters(0), "0+ Km");
    }

    #[test]
    fn temperature_label_has_sign_for_positive_values() {
        assert_eq!(reading(22.4, 0.0).temperature_label(), "+22°");
        assert_eq!(reading(0.0, 0.0).temperature_label(), "0°");
        assert_eq!(reading(-3.7, 0.0).temperature_label(), "-3°");
    }

    #[test]
    fn wind_label_truncates() {
        assert_eq!(reading(0.0, 12.9).wind_label(), "12 Km/h");
    }
}
