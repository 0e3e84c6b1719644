//! Location provider port
//!
//! Exposes the latest state of the device geolocation service: permission,
//! most recent fix and most recent error.

use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

/// Authorization state of the location service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionStatus {
    /// The user has not been asked yet
    #[default]
    NotDetermined,
    /// The user refused access
    Denied,
    /// Access is blocked by policy
    Restricted,
    /// Access granted
    Authorized,
}

impl PermissionStatus {
    /// Whether the provider will never deliver a fix
    #[must_use]
    pub const fn is_refused(&self) -> bool {
        matches!(self, Self::Denied | Self::Restricted)
    }
}

/// Kind of the most recent location error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationErrorKind {
    /// The provider could not get a fix right now but keeps trying
    LocationUnknown,
    /// The provider reported an authorization failure
    Denied,
    /// The provider needed the network and could not reach it
    Network,
    /// Any other provider failure
    Other,
}

/// Point-in-time view of the location provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationSnapshot {
    /// Current authorization status
    pub permission: PermissionStatus,
    /// Most recent fix, if any
    pub fix: Option<GeoLocation>,
    /// Most recent error, if any
    pub last_error: Option<LocationErrorKind>,
}

impl LocationSnapshot {
    /// Snapshot for an authorized provider with a fix
    #[must_use]
    pub const fn authorized(fix: GeoLocation) -> Self {
        Self {
            permission: PermissionStatus::Authorized,
            fix: Some(fix),
            last_error: None,
        }
    }

    /// Snapshot for a provider the user refused
    #[must_use]
    pub const fn denied() -> Self {
        Self {
            permission: PermissionStatus::Denied,
            fix: None,
            last_error: Some(LocationErrorKind::Denied),
        }
    }
}

/// Port for reading the device location state
#[cfg_attr(test, automock)]
pub trait LocationPort: Send + Sync {
    /// Latest permission, fix and error
    fn snapshot(&self) -> LocationSnapshot;
}
