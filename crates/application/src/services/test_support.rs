//! Hand-written port doubles shared by the service tests

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use domain::entities::WeatherReading;
use domain::value_objects::{GeoLocation, SoundId, WeatherCategory};
use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::error::ApplicationError;
use crate::ports::{
    AudioOutputPort, LocationPort, LocationSnapshot, ReachabilityPort, SettingsPort, WeatherPort,
};

pub type WeatherResult = Result<WeatherReading, ApplicationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    Start(SoundId),
    Stop,
}

/// Audio output that records every call
#[derive(Debug, Default)]
pub struct RecordingAudio {
    events: Mutex<Vec<AudioEvent>>,
}

impl RecordingAudio {
    pub fn events(&self) -> Vec<AudioEvent> {
        self.events.lock().clone()
    }
}

impl AudioOutputPort for RecordingAudio {
    fn start_loop(&self, sound: SoundId) -> Result<(), ApplicationError> {
        self.events.lock().push(AudioEvent::Start(sound));
        Ok(())
    }

    fn stop(&self) {
        self.events.lock().push(AudioEvent::Stop);
    }
}

/// Settings kept in memory
#[derive(Debug)]
pub struct InMemorySettings {
    enabled: AtomicBool,
}

impl InMemorySettings {
    pub const fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
        }
    }
}

impl SettingsPort for InMemorySettings {
    fn sounds_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn set_sounds_enabled(&self, enabled: bool) -> Result<(), ApplicationError> {
        self.enabled.store(enabled, Ordering::SeqCst);
        Ok(())
    }
}

/// Reachability flag that tests flip
#[derive(Debug)]
pub struct ToggleReachability(AtomicBool);

impl ToggleReachability {
    pub const fn new(reachable: bool) -> Self {
        Self(AtomicBool::new(reachable))
    }

    pub fn set(&self, reachable: bool) {
        self.0.store(reachable, Ordering::SeqCst);
    }
}

impl ReachabilityPort for ToggleReachability {
    fn is_reachable(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Location provider with a replaceable snapshot
#[derive(Debug, Default)]
pub struct StaticLocation(Mutex<LocationSnapshot>);

impl StaticLocation {
    pub fn new(snapshot: LocationSnapshot) -> Self {
        Self(Mutex::new(snapshot))
    }

    pub fn set(&self, snapshot: LocationSnapshot) {
        *self.0.lock() = snapshot;
    }
}

impl LocationPort for StaticLocation {
    fn snapshot(&self) -> LocationSnapshot {
        *self.0.lock()
    }
}

/// Weather port whose responses are released by the test
///
/// Each call takes the next gate in order; a call without a gate fails.
#[derive(Debug, Default)]
pub struct GatedWeather {
    gates: Mutex<VecDeque<oneshot::Receiver<WeatherResult>>>,
    requested: Mutex<Vec<GeoLocation>>,
    calls: AtomicUsize,
}

impl GatedWeather {
    pub fn gate(&self) -> oneshot::Sender<WeatherResult> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().push_back(rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<GeoLocation> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl WeatherPort for GatedWeather {
    async fn get_current_weather(&self, location: &GeoLocation) -> WeatherResult {
        self.requested.lock().push(*location);
        let gate = self.gates.lock().pop_front();
        self.calls.fetch_add(1, Ordering::SeqCst);

        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ApplicationError::Internal("gate dropped".into()))),
            None => Err(ApplicationError::Internal("no gate".into())),
        }
    }
}

/// Yield until `condition` holds
pub async fn wait_until(condition: impl Fn() -> bool) {
    for _ in 0..1_000 {
        if condition() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition not reached");
}

/// Give spawned tasks a chance to run
pub async fn yield_many() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}

pub fn reading(category: WeatherCategory, wind_speed_kmh: f64, city: &str) -> WeatherReading {
    WeatherReading {
        temperature_celsius: 12.0,
        wind_speed_kmh,
        category,
        description: category.description().to_lowercase(),
        visibility_label: "10+ Km".to_string(),
        city_name: city.to_string(),
    }
}
