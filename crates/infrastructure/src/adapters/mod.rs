//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod file_settings_store;
mod headless_audio;
mod location_adapter;
mod reachability_adapter;
mod weather_adapter;

pub use file_settings_store::{FileSettingsStore, SettingsStoreError, StoredSettings};
pub use headless_audio::HeadlessAudioOutput;
pub use location_adapter::WatchLocationProvider;
pub use reachability_adapter::WatchReachability;
pub use weather_adapter::WeatherAdapter;
