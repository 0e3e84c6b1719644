//! Reachability adapter backed by a watch channel

use application::ports::ReachabilityPort;
use tokio::sync::watch;
use tracing::info;

/// Network reachability fed by the host platform
#[derive(Debug)]
pub struct WatchReachability {
    state: watch::Sender<bool>,
}

impl Default for WatchReachability {
    fn default() -> Self {
        Self::new(true)
    }
}

impl WatchReachability {
    /// Create with an initial value
    #[must_use]
    pub fn new(reachable: bool) -> Self {
        let (state, _) = watch::channel(reachable);
        Self { state }
    }

    /// Subscribe to reachability changes
    pub fn changes(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }

    /// Publish the latest value; subscribers are notified only on change
    pub fn set_reachable(&self, reachable: bool) {
        let changed = self.state.send_if_modified(|current| {
            let changed = *current != reachable;
            *current = reachable;
            changed
        });
        if changed {
            info!(reachable, "Network reachability changed");
        }
    }
}

impl ReachabilityPort for WatchReachability {
    fn is_reachable(&self) -> bool {
        *self.state.borrow()
    }
}
