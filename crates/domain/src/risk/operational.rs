//! Operational signals shown on the briefing screen
//!
//! Each function is a fixed lookup over (category, wind speed). Wind
//! thresholds are strict: a wind speed equal to a threshold stays in the
//! lower bucket.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::WeatherCategory;

/// Expected ground waiting time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaitingTime {
    /// "10 min"
    TenMinutes,
    /// "15 min"
    FifteenMinutes,
    /// "20 min"
    TwentyMinutes,
    /// "25 min"
    TwentyFiveMinutes,
    /// "30 min"
    ThirtyMinutes,
    /// "45+ min"
    FortyFivePlus,
}

impl WaitingTime {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::TenMinutes => "10 min",
            Self::FifteenMinutes => "15 min",
            Self::TwentyMinutes => "20 min",
            Self::TwentyFiveMinutes => "25 min",
            Self::ThirtyMinutes => "30 min",
            Self::FortyFivePlus => "45+ min",
        }
    }
}

impl fmt::Display for WaitingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Runway congestion level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RunwayCongestion {
    /// Minimal
    Minimal,
    /// Low
    Low,
    /// Medium
    Medium,
    /// High
    High,
}

impl RunwayCongestion {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RunwayCongestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Expected waiting time for the given conditions
#[must_use]
pub fn waiting_time(category: WeatherCategory, wind_speed: f64) -> WaitingTime {
    use WeatherCategory as C;

    match category {
        C::Thunderstorm | C::Tornado | C::Squall => WaitingTime::FortyFivePlus,
        C::Rain | C::Drizzle | C::Snow => WaitingTime::ThirtyMinutes,
        C::Fog | C::Mist | C::Haze | C::Smoke => WaitingTime::TwentyFiveMinutes,
        C::Clouds if wind_speed > 10.0 => WaitingTime::TwentyMinutes,
        C::Clouds => WaitingTime::FifteenMinutes,
        C::Clear if wind_speed > 15.0 => WaitingTime::FifteenMinutes,
        C::Clear => WaitingTime::TenMinutes,
        C::Dust | C::Sand | C::Ash | C::Unknown => WaitingTime::TwentyMinutes,
    }
}

/// Runway congestion for the given conditions
#[must_use]
pub fn runway_congestion(category: WeatherCategory, wind_speed: f64) -> RunwayCongestion {
    use WeatherCategory as C;

    match category {
        C::Thunderstorm | C::Tornado | C::Squall | C::Snow => RunwayCongestion::High,
        C::Rain | C::Drizzle | C::Fog | C::Mist | C::Haze => RunwayCongestion::Medium,
        C::Clouds if wind_speed > 10.0 => RunwayCongestion::Medium,
        C::Clouds => RunwayCongestion::Low,
        C::Clear if wind_speed > 15.0 => RunwayCongestion::Low,
        C::Clear => RunwayCongestion::Minimal,
        C::Smoke | C::Dust | C::Sand | C::Ash | C::Unknown => RunwayCongestion::Low,
    }
}

/// Whether delays are likely for the given conditions
#[must_use]
pub fn delay_probability(category: WeatherCategory, wind_speed: f64) -> bool {
    use WeatherCategory as C;

    match category {
        C::Thunderstorm | C::Tornado | C::Squall | C::Snow | C::Rain | C::Fog => true,
        C::Drizzle | C::Mist | C::Haze => wind_speed > 8.0,
        C::Clouds => wind_speed > 12.0,
        C::Clear => wind_speed > 20.0,
        C::Smoke | C::Dust | C::Sand | C::Ash | C::Unknown => false,
    }
}
