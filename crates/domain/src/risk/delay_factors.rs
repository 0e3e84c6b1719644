//! Delay predictor factors
//!
//! Three coarse statuses summarizing how likely a departure is to slip.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::operational::{RunwayCongestion, runway_congestion};
use crate::value_objects::WeatherCategory;

/// How alarming a status is, from least to most
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Nothing to act on
    Nominal,
    /// Worth watching
    Elevated,
    /// Expect disruption
    Severe,
    /// Disruption is near certain
    Critical,
}

/// Which factor a status describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelayFactorKind {
    /// Weather at the airport
    WeatherConditions,
    /// Airport congestion
    AirportCongestion,
    /// Probability of delays on the route
    RouteDelayProbability,
}

impl DelayFactorKind {
    /// Title shown next to the status
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::WeatherConditions => "Weather conditions",
            Self::AirportCongestion => "Airport congestion",
            Self::RouteDelayProbability => "Probability of delays on the route",
        }
    }
}

/// A single factor status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DelayFactor {
    /// Factor being described
    pub kind: DelayFactorKind,
    /// Status label, e.g. `"High Risk"`
    pub status: &'static str,
    /// Severity of the status
    pub severity: Severity,
}

impl DelayFactor {
    const fn new(kind: DelayFactorKind, status: &'static str, severity: Severity) -> Self {
        Self {
            kind,
            status,
            severity,
        }
    }
}

impl fmt::Display for DelayFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.title(), self.status)
    }
}

/// All three delay factors for one reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DelayFactors {
    /// Weather conditions status
    pub weather_conditions: DelayFactor,
    /// Airport congestion status
    pub airport_congestion: DelayFactor,
    /// Route delay probability status
    pub route_delay_probability: DelayFactor,
}

impl DelayFactors {
    /// Evaluate every factor for the given conditions
    #[must_use]
    pub fn evaluate(category: WeatherCategory, wind_speed: f64) -> Self {
        Self {
            weather_conditions: weather_conditions_status(category, wind_speed),
            airport_congestion: airport_congestion_status(category, wind_speed),
            route_delay_probability: route_delay_status(category, wind_speed),
        }
    }

    /// The factors in display order
    #[must_use]
    pub const fn as_array(&self) -> [DelayFactor; 3] {
        [
            self.weather_conditions,
            self.airport_congestion,
            self.route_delay_probability,
        ]
    }

    /// Highest severity among the factors
    #[must_use]
    pub fn worst_severity(&self) -> Severity {
        self.as_array()
            .iter()
            .map(|factor| factor.severity)
            .max()
            .unwrap_or(Severity::Nominal)
    }
}

/// Weather conditions factor
#[must_use]
pub fn weather_conditions_status(category: WeatherCategory, wind_speed: f64) -> DelayFactor {
    use WeatherCategory as C;
    const KIND: DelayFactorKind = DelayFactorKind::WeatherConditions;

    match category {
        C::Thunderstorm | C::Tornado | C::Squall => {
            DelayFactor::new(KIND, "High Risk", Severity::Severe)
        },
        C::Snow | C::Rain | C::Fog => DelayFactor::new(KIND, "Medium", Severity::Elevated),
        C::Clouds | C::Drizzle | C::Mist | C::Haze if wind_speed > 10.0 => {
            DelayFactor::new(KIND, "Medium", Severity::Elevated)
        },
        C::Clouds | C::Drizzle | C::Mist | C::Haze => {
            DelayFactor::new(KIND, "Low", Severity::Nominal)
        },
        C::Clear | C::Smoke | C::Dust | C::Sand | C::Ash | C::Unknown => {
            DelayFactor::new(KIND, "Normal", Severity::Nominal)
        },
    }
}

/// Airport congestion factor, labelled for the delay predictor
///
/// Follows the runway congestion table; `Medium` reads as `"Middle"` here.
#[must_use]
pub fn airport_congestion_status(category: WeatherCategory, wind_speed: f64) -> DelayFactor {
    const KIND: DelayFactorKind = DelayFactorKind::AirportCongestion;

    match runway_congestion(category, wind_speed) {
        RunwayCongestion::High => DelayFactor::new(KIND, "High", Severity::Severe),
        RunwayCongestion::Medium => DelayFactor::new(KIND, "Middle", Severity::Elevated),
        RunwayCongestion::Low => DelayFactor::new(KIND, "Low", Severity::Nominal),
        RunwayCongestion::Minimal => DelayFactor::new(KIND, "Minimal", Severity::Nominal),
    }
}

/// Route delay probability factor
#[must_use]
pub fn route_delay_status(category: WeatherCategory, wind_speed: f64) -> DelayFactor {
    use WeatherCategory as C;
    const KIND: DelayFactorKind = DelayFactorKind::RouteDelayProbability;

    let elevated = match category {
        C::Thunderstorm | C::Tornado | C::Squall | C::Snow | C::Rain | C::Fog => {
            return DelayFactor::new(KIND, "High", Severity::Critical);
        },
        C::Drizzle | C::Mist | C::Haze => wind_speed > 8.0,
        C::Clouds => wind_speed > 12.0,
        C::Clear => wind_speed > 20.0,
        C::Smoke | C::Dust | C::Sand | C::Ash | C::Unknown => false,
    };

    if elevated {
        DelayFactor::new(KIND, "Medium", Severity::Elevated)
    } else {
        DelayFactor::new(KIND, "Low", Severity::Nominal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_conditions_severe() {
        let factor = weather_conditions_status(WeatherCategory::Squall, 0.0);
        assert_eq!(factor.status, "High Risk");
        assert_eq!(factor.severity, Severity::Severe);
    }

    #[test]
    fn weather_conditions_wind_sensitive_group() {
        assert_eq!(weather_conditions_status(WeatherCategory::Mist, 10.0).status, "Low");
        assert_eq!(weather_conditions_status(WeatherCategory::Mist, 10.5).status, "Medium");
        assert_eq!(weather_conditions_status(WeatherCategory::Clouds, 3.0).status, "Low");
    }

    #[test]
    fn weather_conditions_clear_is_normal_at_any_wind() {
        assert_eq!(weather_conditions_status(WeatherCategory::Clear, 90.0).status, "Normal");
        assert_eq!(weather_conditions_status(WeatherCategory::Unknown, 0.0).status, "Normal");
    }

    #[test]
    fn airport_congestion_uses_middle_label() {
        let factor = airport_congestion_status(WeatherCategory::Rain, 0.0);
        assert_eq!(factor.status, "Middle");
        assert_eq!(factor.severity, Severity::Elevated);
        assert_eq!(
            airport_congestion_status(WeatherCategory::Clear, 1.0).status,
            "Minimal"
        );
    }

    #[test]
    fn route_delay_levels() {
        assert_eq!(
            route_delay_status(WeatherCategory::Fog, 0.0).severity,
            Severity::Critical
        );
        assert_eq!(route_delay_status(WeatherCategory::Haze, 9.0).status, "Medium");
        assert_eq!(route_delay_status(WeatherCategory::Clear, 20.0).status, "Low");
        assert_eq!(route_delay_status(WeatherCategory::Ash, 99.0).status, "Low");
    }

    #[test]
    fn evaluate_collects_all_factors() {
        let factors = DelayFactors::evaluate(WeatherCategory::Thunderstorm, 50.0);
        let kinds: Vec<_> = factors.as_array().iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DelayFactorKind::WeatherConditions,
                DelayFactorKind::AirportCongestion,
                DelayFactorKind::RouteDelayProbability,
            ]
        );
        assert_eq!(factors.worst_severity(), Severity::Critical);
    }

    #[test]
    fn calm_conditions_are_nominal() {
        let factors = DelayFactors::evaluate(WeatherCategory::Clear, 5.0);
        assert_eq!(factors.worst_severity(), Severity::Nominal);
    }

    #[test]
    fn display_includes_title() {
        let factor = route_delay_status(WeatherCategory::Rain, 0.0);
        assert_eq!(factor.to_string(), "Probability of delays on the route: High");
    }
}
