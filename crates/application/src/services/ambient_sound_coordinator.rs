//! Ambient sound coordination
//!
//! Owns the single ambient audio channel. At most one looped sound plays at
//! any time, and nothing plays while sounds are globally disabled.
//!
//! The enabled flag is re-read from the settings store on every play
//! request, except while a toggle that failed to persist is pending; the
//! in-memory choice wins until a later toggle is saved.

use std::fmt;
use std::sync::Arc;

use domain::value_objects::{SoundId, WeatherCategory};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::error::ApplicationError;
use crate::ports::{AudioOutputPort, SettingsPort};

#[derive(Debug, Clone, Copy)]
struct SoundState {
    current: Option<SoundId>,
    globally_enabled: bool,
    unsaved: bool,
}

/// Maps weather to ambient sounds and drives the audio output
pub struct AmbientSoundCoordinator {
    output: Arc<dyn AudioOutputPort>,
    settings: Arc<dyn SettingsPort>,
    state: Mutex<SoundState>,
}

impl fmt::Debug for AmbientSoundCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AmbientSoundCoordinator")
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}

impl AmbientSoundCoordinator {
    /// Create a coordinator; nothing plays until the first weather change
    pub fn new(output: Arc<dyn AudioOutputPort>, settings: Arc<dyn SettingsPort>) -> Self {
        let globally_enabled = settings.sounds_enabled();
        Self {
            output,
            settings,
            state: Mutex::new(SoundState {
                current: None,
                globally_enabled,
                unsaved: false,
            }),
        }
    }

    /// React to a new weather category
    ///
    /// Returns the sound playing afterwards.
    pub fn on_weather_changed(&self, category: WeatherCategory) -> Option<SoundId> {
        let mut state = self.state.lock();
        if !state.unsaved {
            state.globally_enabled = self.settings.sounds_enabled();
        }

        if !state.globally_enabled {
            debug!(?category, "Ambient sounds disabled, ensuring silence");
            self.stop_locked(&mut state);
            return None;
        }

        let Some(sound) = SoundId::for_category(category) else {
            debug!(?category, "No ambient sound for category");
            self.stop_locked(&mut state);
            return None;
        };

        if state.current == Some(sound) {
            debug!(%sound, "Ambient sound already playing");
            return state.current;
        }

        self.stop_locked(&mut state);
        match self.output.start_loop(sound) {
            Ok(()) => {
                info!(%sound, ?category, "Ambient sound started");
                state.current = Some(sound);
            },
            Err(e) => {
                warn!(%sound, error = %e, "Failed to start ambient sound");
                state.current = None;
            },
        }
        state.current
    }

    /// Enable or disable ambient sounds globally
    ///
    /// Disabling stops playback before returning. Enabling does not resume
    /// anything; the next weather change starts the matching sound.
    ///
    /// The flag is persisted while the state lock is held, so no play
    /// request can observe the old stored value mid-toggle. If persisting
    /// fails the new value still applies in memory and the error is
    /// returned.
    pub fn set_globally_enabled(&self, enabled: bool) -> Result<(), ApplicationError> {
        let mut state = self.state.lock();
        state.globally_enabled = enabled;
        if !enabled {
            self.stop_locked(&mut state);
        }

        let persisted = self.settings.set_sounds_enabled(enabled);
        state.unsaved = persisted.is_err();
        match &persisted {
            Ok(()) => info!(enabled, "Ambient sounds toggled"),
            Err(e) => {
                warn!(enabled, error = %e, "Ambient sound setting not saved, keeping it in memory");
            },
        }
        persisted
    }

    /// Stop the current sound, if any
    pub fn stop(&self) {
        let mut state = self.state.lock();
        self.stop_locked(&mut state);
    }

    /// The sound currently looping
    #[must_use]
    pub fn current(&self) -> Option<SoundId> {
        self.state.lock().current
    }

    /// Whether ambient sounds were enabled at the last check
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state.lock().globally_enabled
    }

    fn stop_locked(&self, state: &mut SoundState) {
        if let Some(sound) = state.current.take() {
            self.output.stop();
            debug!(%sound, "Ambient sound stopped");
        }
    }
}
