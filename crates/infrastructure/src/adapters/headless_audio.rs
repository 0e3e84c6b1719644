//! Audio output for hosts without a sound device
//!
//! Tracks which sound would be looping and logs every transition. When a
//! sound directory is configured, starting a sound requires its
//! `<id>.mp3` asset to exist there.

use std::path::PathBuf;

use application::error::ApplicationError;
use application::ports::AudioOutputPort;
use domain::value_objects::SoundId;
use parking_lot::Mutex;
use tracing::info;

/// Audio output that records playback instead of producing sound
#[derive(Debug, Default)]
pub struct HeadlessAudioOutput {
    sound_dir: Option<PathBuf>,
    playing: Mutex<Option<SoundId>>,
}

impl HeadlessAudioOutput {
    /// Create an output that accepts every sound
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an output that requires assets under `dir`
    #[must_use]
    pub fn with_sound_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            sound_dir: Some(dir.into()),
            playing: Mutex::new(None),
        }
    }

    /// The sound currently looping
    #[must_use]
    pub fn now_playing(&self) -> Option<SoundId> {
        *self.playing.lock()
    }

    fn asset_path(&self, sound: SoundId) -> Option<PathBuf> {
        self.sound_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.mp3", sound.as_str())))
    }
}

impl AudioOutputPort for HeadlessAudioOutput {
    fn start_loop(&self, sound: SoundId) -> Result<(), ApplicationError> {
        if let Some(asset) = self.asset_path(sound) {
            if !asset.is_file() {
                return Err(ApplicationError::Audio(format!(
                    "sound asset not found: {}",
                    asset.display()
                )));
            }
        }

        *self.playing.lock() = Some(sound);
        info!(%sound, "Looping ambient sound");
        Ok(())
    }

    fn stop(&self) {
        if let Some(sound) = self.playing.lock().take() {
            info!(%sound, "Ambient sound stopped");
        }
    }
}
