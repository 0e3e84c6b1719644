//! Weather category value object
//!
//! The closed set of condition groups reported by the weather endpoint
//! (`weather[].main` in OpenWeatherMap responses).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Condition group of a weather reading
///
/// Upstream values outside this set are represented as [`WeatherCategory::Unknown`],
/// so a reading always carries a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCategory {
    /// Clear sky
    #[default]
    Clear,
    /// Any cloud cover
    Clouds,
    /// Rain
    Rain,
    /// Drizzle
    Drizzle,
    /// Thunderstorm
    Thunderstorm,
    /// Snow
    Snow,
    /// Mist
    Mist,
    /// Smoke
    Smoke,
    /// Haze
    Haze,
    /// Dust whirls
    Dust,
    /// Fog
    Fog,
    /// Sand
    Sand,
    /// Volcanic ash
    Ash,
    /// Squalls
    Squall,
    /// Tornado
    Tornado,
    /// Condition not recognized
    Unknown,
}

impl WeatherCategory {
    /// Every category, in declaration order
    pub const ALL: [Self; 16] = [
        Self::Clear,
        Self::Clouds,
        Self::Rain,
        Self::Drizzle,
        Self::Thunderstorm,
        Self::Snow,
        Self::Mist,
        Self::Smoke,
        Self::Haze,
        Self::Dust,
        Self::Fog,
        Self::Sand,
        Self::Ash,
        Self::Squall,
        Self::Tornado,
        Self::Unknown,
    ];

    /// Map an upstream condition name to a category
    ///
    /// Matching is exact and case-sensitive against the names the endpoint
    /// emits (`"Clear"`, `"Clouds"`, ...). Anything else is `Unknown`.
    #[must_use]
    pub fn from_condition(condition: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.condition_name() == condition)
            .unwrap_or(Self::Unknown)
    }

    /// Upstream condition name for this category
    #[must_use]
    pub const fn condition_name(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Rain => "Rain",
            Self::Drizzle => "Drizzle",
            Self::Thunderstorm => "Thunderstorm",
            Self::Snow => "Snow",
            Self::Mist => "Mist",
            Self::Smoke => "Smoke",
            Self::Haze => "Haze",
            Self::Dust => "Dust",
            Self::Fog => "Fog",
            Self::Sand => "Sand",
            Self::Ash => "Ash",
            Self::Squall => "Squall",
            Self::Tornado => "Tornado",
            Self::Unknown => "Unknown",
        }
    }

    /// Get a human-readable description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Clouds => "Cloudy",
            Self::Sand => "Sandstorm",
            Self::Ash => "Volcanic Ash",
            other => other.condition_name(),
        }
    }

    /// Symbol name used by the presentation layer for this category
    #[must_use]
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Clear => "sun.max.fill",
            Self::Clouds => "cloud.fill",
            Self::Rain => "cloud.rain.fill",
            Self::Drizzle => "cloud.drizzle.fill",
            Self::Thunderstorm => "cloud.bolt.fill",
            Self::Snow => "cloud.snow.fill",
            Self::Mist | Self::Smoke | Self::Haze | Self::Fog => "cloud.fog.fill",
            Self::Dust | Self::Sand | Self::Ash => "sun.dust.fill",
            Self::Squall => "wind",
            Self::Tornado => "tornado",
            Self::Unknown => "questionmark.circle.fill",
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Lenient parsing for operator input (case-insensitive)
impl FromStr for WeatherCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.condition_name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::UnknownWeatherCategory(s.to_string()))
    }
}
