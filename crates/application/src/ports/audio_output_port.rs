//! Audio output port
//!
//! A single looping channel. Only the ambient sound coordinator talks to it.

use domain::value_objects::SoundId;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the ambient audio channel
#[cfg_attr(test, automock)]
pub trait AudioOutputPort: Send + Sync {
    /// Start looping `sound` indefinitely
    fn start_loop(&self, sound: SoundId) -> Result<(), ApplicationError>;

    /// Stop whatever is playing; a no-op when silent
    fn stop(&self);
}
