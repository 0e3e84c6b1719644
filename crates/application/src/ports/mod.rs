//! Port definitions - Interfaces for external adapters

mod audio_output_port;
mod location_port;
mod reachability_port;
mod settings_port;
mod weather_port;

pub use audio_output_port::AudioOutputPort;
#[cfg(test)]
pub use audio_output_port::MockAudioOutputPort;
pub use location_port::{LocationErrorKind, LocationPort, LocationSnapshot, PermissionStatus};
#[cfg(test)]
pub use location_port::MockLocationPort;
pub use reachability_port::ReachabilityPort;
#[cfg(test)]
pub use reachability_port::MockReachabilityPort;
pub use settings_port::SettingsPort;
#[cfg(test)]
pub use settings_port::MockSettingsPort;
pub use weather_port::WeatherPort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
