//! Location adapter backed by a watch channel
//!
//! The host platform publishes permission changes, fixes and errors; the
//! orchestrator reads snapshots and can subscribe to changes.

use application::ports::{LocationErrorKind, LocationPort, LocationSnapshot, PermissionStatus};
use domain::value_objects::GeoLocation;
use tokio::sync::watch;
use tracing::debug;

/// Location provider fed by the host platform
#[derive(Debug)]
pub struct WatchLocationProvider {
    state: watch::Sender<LocationSnapshot>,
}

impl Default for WatchLocationProvider {
    fn default() -> Self {
        Self::new(LocationSnapshot::default())
    }
}

impl WatchLocationProvider {
    /// Create a provider with an initial snapshot
    #[must_use]
    pub fn new(initial: LocationSnapshot) -> Self {
        let (state, _) = watch::channel(initial);
        Self { state }
    }

    /// Subscribe to snapshot changes
    pub fn changes(&self) -> watch::Receiver<LocationSnapshot> {
        self.state.subscribe()
    }

    /// Record a permission change
    pub fn set_permission(&self, permission: PermissionStatus) {
        debug!(?permission, "Location permission changed");
        self.state.send_if_modified(|snapshot| {
            let changed = snapshot.permission != permission;
            snapshot.permission = permission;
            changed
        });
    }

    /// Record a new fix; clears the last error
    pub fn update_fix(&self, fix: GeoLocation) {
        debug!(%fix, "Location fix received");
        self.state.send_modify(|snapshot| {
            snapshot.fix = Some(fix);
            snapshot.last_error = None;
        });
    }

    /// Record a provider error
    pub fn report_error(&self, kind: LocationErrorKind) {
        debug!(?kind, "Location error reported");
        self.state.send_modify(|snapshot| snapshot.last_error = Some(kind));
    }
}

impl LocationPort for WatchLocationProvider {
    fn snapshot(&self) -> LocationSnapshot {
        *self.state.borrow()
    }
}
