//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Number of decimal places kept when coordinates are normalized for a request
pub const COORDINATE_PRECISION: i32 = 4;

/// A geographic location with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::invalid_coordinates(latitude, longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a location without validation (for trusted sources)
    ///
    /// Caller must ensure latitude is in [-90, 90] and longitude in [-180, 180]
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Round both coordinates to [`COORDINATE_PRECISION`] decimal places
    ///
    /// Rounding keeps request URLs stable for fixes that jitter in the
    /// fifth decimal and beyond (roughly one meter).
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            latitude: round_coordinate(self.latitude),
            longitude: round_coordinate(self.longitude),
        }
    }
}

fn round_coordinate(value: f64) -> f64 {
    let factor = 10f64.powi(COORDINATE_PRECISION);
    (value * factor).round() / factor
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Common locations for defaults
impl GeoLocation {
    /// New York, USA
    #[must_use]
    pub const fn new_york() -> Self {
        Self::new_unchecked(40.7128, -74.006)
    }
}
