//! Operational risk classification
//!
//! Deterministic rules that turn a [`WeatherReading`] into the signals shown
//! to crews: waiting time, runway congestion, delay probability and the
//! three delay predictor factors. Everything here is pure; evaluating the
//! same input twice always yields the same output.

mod delay_factors;
mod operational;

use serde::Serialize;

pub use delay_factors::{
    DelayFactor, DelayFactorKind, DelayFactors, Severity, airport_congestion_status,
    route_delay_status, weather_conditions_status,
};
pub use operational::{
    RunwayCongestion, WaitingTime, delay_probability, runway_congestion, waiting_time,
};

use crate::entities::WeatherReading;
use crate::value_objects::WeatherCategory;

/// Every derived signal for one reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    /// Expected ground waiting time
    pub waiting_time: WaitingTime,
    /// Runway congestion level
    pub runway_congestion: RunwayCongestion,
    /// Whether delays are likely
    pub delay_probability: bool,
    /// Delay predictor factors
    pub delay_factors: DelayFactors,
}

impl RiskAssessment {
    /// Classify a reading
    #[must_use]
    pub fn assess(reading: &WeatherReading) -> Self {
        Self::evaluate(reading.category, reading.wind_speed_kmh)
    }

    /// Classify raw conditions
    #[must_use]
    pub fn evaluate(category: WeatherCategory, wind_speed: f64) -> Self {
        Self {
            waiting_time: waiting_time(category, wind_speed),
            runway_congestion: runway_congestion(category, wind_speed),
            delay_probability: delay_probability(category, wind_speed),
            delay_factors: DelayFactors::evaluate(category, wind_speed),
        }
    }

    /// `"Yes"` / `"No"` label for the delay flag
    #[must_use]
    pub const fn possible_delays_label(&self) -> &'static str {
        if self.delay_probability { "Yes" } else { "No" }
    }
}
