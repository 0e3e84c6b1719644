//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Coordinates outside the valid latitude/longitude ranges
    #[error(
        "Invalid coordinates ({latitude}, {longitude}): latitude must be -90 to 90, longitude must be -180 to 180"
    )]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Weather category name that is not part of the closed set
    #[error("Unknown weather category: {0}")]
    UnknownWeatherCategory(String),
}

impl DomainError {
    /// Create an invalid coordinates error
    #[must_use]
    pub const fn invalid_coordinates(latitude: f64, longitude: f64) -> Self {
        Self::InvalidCoordinates {
            latitude,
            longitude,
        }
    }
}
