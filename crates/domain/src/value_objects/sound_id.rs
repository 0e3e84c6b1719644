//! Ambient sound identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

use super::WeatherCategory;

/// Looped ambient sound matched to current conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundId {
    /// Quiet background for clear, cloudy and low-visibility conditions
    Calm,
    /// Rainfall, used for all precipitation and storms
    Rain,
    /// Strong wind
    Windy,
}

impl SoundId {
    /// Sound for a weather category, if any
    ///
    /// The mapping is many-to-one; `Unknown` has no sound.
    #[must_use]
    pub const fn for_category(category: WeatherCategory) -> Option<Self> {
        match category {
            WeatherCategory::Clear
            | WeatherCategory::Clouds
            | WeatherCategory::Haze
            | WeatherCategory::Smoke
            | WeatherCategory::Mist
            | WeatherCategory::Fog
            | WeatherCategory::Dust
            | WeatherCategory::Sand
            | WeatherCategory::Ash => Some(Self::Calm),
            WeatherCategory::Rain
            | WeatherCategory::Drizzle
            | WeatherCategory::Thunderstorm
            | WeatherCategory::Squall
            | WeatherCategory::Snow => Some(Self::Rain),
            WeatherCategory::Tornado => Some(Self::Windy),
            WeatherCategory::Unknown => None,
        }
    }

    /// Asset name of the sound (without extension)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Rain => "rain",
            Self::Windy => "windy",
        }
    }
}

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
