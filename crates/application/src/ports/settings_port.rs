//! User settings port

#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for persisted user preferences
#[cfg_attr(test, automock)]
pub trait SettingsPort: Send + Sync {
    /// Whether ambient sounds are globally enabled (defaults to true)
    fn sounds_enabled(&self) -> bool;

    /// Persist the global sound flag
    fn set_sounds_enabled(&self, enabled: bool) -> Result<(), ApplicationError>;
}
