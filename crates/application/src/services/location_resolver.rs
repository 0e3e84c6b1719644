//! Location resolution
//!
//! Decides which coordinates a weather request uses. Resolution never fails:
//! when the device cannot provide a usable fix the configured fallback is
//! returned together with the reason.

use std::fmt;

use domain::value_objects::GeoLocation;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ports::{LocationErrorKind, LocationSnapshot};

/// Why the fallback location was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// Location access was denied or restricted
    PermissionDenied,
    /// The provider reported that no fix is available right now
    LocationTemporarilyUnknown,
    /// No fix has been delivered yet
    AwaitingFix,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::PermissionDenied => "location access denied",
            Self::LocationTemporarilyUnknown => "location temporarily unavailable",
            Self::AwaitingFix => "waiting for a location fix",
        };
        f.write_str(text)
    }
}

/// Where the request coordinates came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "reason")]
pub enum LocationSource {
    /// The device fix
    Device,
    /// The configured fallback location
    Fallback(FallbackReason),
}

impl LocationSource {
    /// Whether the fallback location was used
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Coordinates chosen for one request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    /// Coordinates, rounded to four decimal places
    pub location: GeoLocation,
    /// Origin of the coordinates
    pub source: LocationSource,
}

/// Chooses query coordinates from the provider state
#[derive(Debug, Clone, Copy)]
pub struct LocationResolver {
    fallback: GeoLocation,
}

impl Default for LocationResolver {
    fn default() -> Self {
        Self::new(GeoLocation::new_york())
    }
}

impl LocationResolver {
    /// Create a resolver with the given fallback location
    #[must_use]
    pub fn new(fallback: GeoLocation) -> Self {
        Self {
            fallback: fallback.rounded(),
        }
    }

    /// The fallback location
    #[must_use]
    pub const fn fallback(&self) -> GeoLocation {
        self.fallback
    }

    /// Resolve the coordinates for a weather request
    #[must_use]
    pub fn resolve(&self, snapshot: &LocationSnapshot) -> ResolvedLocation {
        let resolved = if snapshot.permission.is_refused() {
            self.use_fallback(FallbackReason::PermissionDenied)
        } else if let Some(fix) = snapshot.fix {
            ResolvedLocation {
                location: fix.rounded(),
                source: LocationSource::Device,
            }
        } else if snapshot.last_error == Some(LocationErrorKind::LocationUnknown) {
            self.use_fallback(FallbackReason::LocationTemporarilyUnknown)
        } else {
            self.use_fallback(FallbackReason::AwaitingFix)
        };

        debug!(
            permission = ?snapshot.permission,
            source = ?resolved.source,
            location = %resolved.location,
            "Resolved request location"
        );
        resolved
    }

    const fn use_fallback(&self, reason: FallbackReason) -> ResolvedLocation {
        ResolvedLocation {
            location: self.fallback,
            source: LocationSource::Fallback(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::PermissionStatus;

    fn snapshot(
        permission: PermissionStatus,
        fix: Option<GeoLocation>,
        last_error: Option<LocationErrorKind>,
    ) -> LocationSnapshot {
        LocationSnapshot {
            permission,
            fix,
            last_error,
        }
    }

    #[test]
    fn denied_uses_new_york() {
        let resolved = LocationResolver::default().resolve(&LocationSnapshot::denied());
        assert_eq!(resolved.location.latitude(), 40.7128);
        assert_eq!(resolved.location.longitude(), -74.006);
        assert_eq!(
            resolved.source,
            LocationSource::Fallback(FallbackReason::PermissionDenied)
        );
    }

    #[test]
    fn restricted_ignores_stale_fix() {
        let stale = GeoLocation::new_unchecked(52.52, 13.405);
        let resolved = LocationResolver::default().resolve(&snapshot(
            PermissionStatus::Restricted,
            Some(stale),
            None,
        ));
        assert_eq!(resolved.location, GeoLocation::new_york());
        assert!(resolved.source.is_fallback());
    }

    #[test]
    fn authorized_fix_is_rounded() {
        let fix = GeoLocation::new_unchecked(55.755_831_2, 37.617_673_9);
        let resolved = LocationResolver::default().resolve(&LocationSnapshot::authorized(fix));
        assert_eq!(resolved.location.latitude(), 55.7558);
        assert_eq!(resolved.location.longitude(), 37.6177);
        assert_eq!(resolved.source, LocationSource::Device);
    }

    #[test]
    fn temporarily_unknown_uses_fallback() {
        let resolved = LocationResolver::default().resolve(&snapshot(
            PermissionStatus::Authorized,
            None,
            Some(LocationErrorKind::LocationUnknown),
        ));
        assert_eq!(
            resolved.source,
            LocationSource::Fallback(FallbackReason::LocationTemporarilyUnknown)
        );
    }

    #[test]
    fn undetermined_without_fix_does_not_block() {
        let resolved = LocationResolver::default().resolve(&LocationSnapshot::default());
        assert_eq!(resolved.location, GeoLocation::new_york());
        assert_eq!(
            resolved.source,
            LocationSource::Fallback(FallbackReason::AwaitingFix)
        );
    }

    #[test]
    fn authorized_without_fix_or_error_awaits_fix() {
        let resolved = LocationResolver::default().resolve(&snapshot(
            PermissionStatus::Authorized,
            None,
            Some(LocationErrorKind::Network),
        ));
        assert_eq!(
            resolved.source,
            LocationSource::Fallback(FallbackReason::AwaitingFix)
        );
    }

    #[test]
    fn undetermined_with_fix_uses_fix() {
        let fix = GeoLocation::new_unchecked(48.8566, 2.3522);
        let resolved = LocationResolver::default().resolve(&snapshot(
            PermissionStatus::NotDetermined,
            Some(fix),
            None,
        ));
        assert_eq!(resolved.location, fix);
        assert_eq!(resolved.source, LocationSource::Device);
    }

    #[test]
    fn custom_fallback_is_rounded() {
        let resolver = LocationResolver::new(GeoLocation::new_unchecked(51.507_351, -0.127_758));
        assert_eq!(resolver.fallback().latitude(), 51.5074);
        assert_eq!(resolver.fallback().longitude(), -0.1278);
    }

    #[test]
    fn source_serializes_with_reason() {
        let json = serde_json::to_string(&LocationSource::Fallback(FallbackReason::AwaitingFix))
            .expect("serialize");
        assert_eq!(json, r#"{"kind":"fallback","reason":"awaiting_fix"}"#);
    }
}
