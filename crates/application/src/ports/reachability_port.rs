//! Network reachability port

#[cfg(test)]
use mockall::automock;

/// Port for the most recent network reachability value
#[cfg_attr(test, automock)]
pub trait ReachabilityPort: Send + Sync {
    /// Whether the network is currently reachable
    fn is_reachable(&self) -> bool;
}
