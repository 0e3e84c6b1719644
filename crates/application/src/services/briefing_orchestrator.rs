//! Briefing orchestration
//!
//! Drives one refresh cycle per trigger: check reachability, resolve the
//! location, fetch the weather, publish the outcome and update the ambient
//! sound. Triggers may overlap; only the most recently started one is
//! allowed to settle, older results are computed and dropped.
//!
//! State is published through a [`tokio::sync::watch`] channel so any
//! number of readers can observe snapshots without touching the state.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain::RiskAssessment;
use domain::entities::WeatherReading;
use domain::value_objects::GeoLocation;
use parking_lot::Mutex;
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use super::ambient_sound_coordinator::AmbientSoundCoordinator;
use super::location_resolver::{LocationResolver, LocationSource};
use crate::ports::{LocationPort, LocationSnapshot, ReachabilityPort, WeatherPort};

/// Message shown when the network is unreachable
pub const NO_NETWORK_MESSAGE: &str =
    "No internet connection. Please check your connection and try again.";

/// Message shown for every other failure
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load weather data. Please try again later.";

/// User-facing failure of a refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BriefingFailure {
    /// The network was unreachable; no request was made
    NoNetwork,
    /// The request failed for any other reason
    LoadFailed,
}

impl BriefingFailure {
    /// Message for the presentation layer
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NoNetwork => NO_NETWORK_MESSAGE,
            Self::LoadFailed => LOAD_FAILED_MESSAGE,
        }
    }
}

impl fmt::Display for BriefingFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Coarse lifecycle phase of the briefing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BriefingPhase {
    /// Nothing has been requested yet
    Idle,
    /// A refresh is in flight
    Loading,
    /// The last refresh produced a reading
    Settled,
    /// The last refresh failed
    Failed,
}

/// Published briefing state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BriefingState {
    /// A refresh is in flight
    pub is_loading: bool,
    /// Last known good reading
    pub reading: WeatherReading,
    /// Failure of the last settled refresh
    pub error: Option<BriefingFailure>,
    /// Generation of the last transition
    pub generation: u64,
    /// Origin of the coordinates used for `reading`
    pub location_source: Option<LocationSource>,
    /// When `reading` was last replaced
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for BriefingState {
    fn default() -> Self {
        Self {
            is_loading: false,
            reading: WeatherReading::default(),
            error: None,
            generation: 0,
            location_source: None,
            updated_at: None,
        }
    }
}

impl BriefingState {
    /// Lifecycle phase derived from the flags
    #[must_use]
    pub const fn phase(&self) -> BriefingPhase {
        if self.is_loading {
            BriefingPhase::Loading
        } else if self.error.is_some() {
            BriefingPhase::Failed
        } else if self.updated_at.is_some() {
            BriefingPhase::Settled
        } else {
            BriefingPhase::Idle
        }
    }

    /// Error message, if the last refresh failed
    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(BriefingFailure::message)
    }

    /// Risk signals for the current reading; `None` while failed
    #[must_use]
    pub fn risk(&self) -> Option<RiskAssessment> {
        if self.error.is_some() {
            return None;
        }
        Some(RiskAssessment::assess(&self.reading))
    }
}

/// What started a refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerReason {
    /// The briefing screen became active
    Activation,
    /// The device location fix changed
    LocationChanged,
    /// The user asked to retry
    UserRetry,
    /// The network came back after a no-network failure
    ReachabilityRestored,
}

/// Result of one trigger, as seen by its caller
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerOutcome {
    /// The reading was published
    Settled(WeatherReading),
    /// The failure was published
    Failed(BriefingFailure),
    /// A newer trigger started first; nothing was published
    Superseded,
}

/// Coordinates location, weather and ambient sound for the briefing screen
pub struct BriefingOrchestrator {
    weather: Arc<dyn WeatherPort>,
    location: Arc<dyn LocationPort>,
    reachability: Arc<dyn ReachabilityPort>,
    sounds: Arc<AmbientSoundCoordinator>,
    resolver: LocationResolver,
    generation: Mutex<u64>,
    state: watch::Sender<BriefingState>,
}

impl fmt::Debug for BriefingOrchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BriefingOrchestrator")
            .field("resolver", &self.resolver)
            .field("generation", &*self.generation.lock())
            .field("sounds", &self.sounds)
            .finish_non_exhaustive()
    }
}

impl BriefingOrchestrator {
    /// Create an orchestrator in the idle state
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        location: Arc<dyn LocationPort>,
        reachability: Arc<dyn ReachabilityPort>,
        sounds: Arc<AmbientSoundCoordinator>,
        resolver: LocationResolver,
    ) -> Self {
        let (state, _) = watch::channel(BriefingState::default());
        Self {
            weather,
            location,
            reachability,
            sounds,
            resolver,
            generation: Mutex::new(0),
            state,
        }
    }

    /// Subscribe to state snapshots
    pub fn subscribe(&self) -> watch::Receiver<BriefingState> {
        self.state.subscribe()
    }

    /// Current state snapshot
    #[must_use]
    pub fn snapshot(&self) -> BriefingState {
        self.state.borrow().clone()
    }

    /// The ambient sound coordinator driven by this orchestrator
    #[must_use]
    pub const fn sounds(&self) -> &Arc<AmbientSoundCoordinator> {
        &self.sounds
    }

    /// Run one refresh cycle
    ///
    /// Never fails: every failure is published in the state and reported
    /// through the returned outcome.
    #[instrument(skip(self))]
    pub async fn trigger(&self, reason: TriggerReason) -> TriggerOutcome {
        let generation = self.begin();

        if !self.reachability.is_reachable() {
            warn!(generation, "Network unreachable, skipping weather request");
            return self.settle(generation, Err(BriefingFailure::NoNetwork));
        }

        let resolved = self.resolver.resolve(&self.location.snapshot());
        debug!(
            generation,
            location = %resolved.location,
            source = ?resolved.source,
            "Requesting current weather"
        );

        match self.weather.get_current_weather(&resolved.location).await {
            Ok(reading) => self.settle(generation, Ok((reading, resolved.source))),
            Err(e) => {
                warn!(generation, error = %e, "Weather request failed");
                self.settle(generation, Err(BriefingFailure::LoadFailed))
            },
        }
    }

    /// Refresh whenever the device fix changes
    ///
    /// Fixes are compared after rounding, so jitter below the request
    /// precision does not cause a refresh. Each refresh runs on its own task
    /// so a newer fix can supersede a slower request. Returns when the
    /// sender is dropped.
    pub async fn watch_location(self: Arc<Self>, mut changes: watch::Receiver<LocationSnapshot>) {
        let mut last_fix = rounded_fix(&changes.borrow_and_update());

        while changes.changed().await.is_ok() {
            let fix = rounded_fix(&changes.borrow_and_update());
            if fix == last_fix {
                continue;
            }
            last_fix = fix;
            debug!(?fix, "Location fix changed");
            self.spawn_trigger(TriggerReason::LocationChanged);
        }
    }

    /// Retry after the network comes back
    ///
    /// Only an unreachable to reachable transition while the briefing shows
    /// the no-network failure starts a refresh. Returns when the sender is
    /// dropped.
    pub async fn watch_reachability(self: Arc<Self>, mut changes: watch::Receiver<bool>) {
        let mut was_reachable = *changes.borrow_and_update();

        while changes.changed().await.is_ok() {
            let reachable = *changes.borrow_and_update();
            let restored = reachable && !was_reachable;
            was_reachable = reachable;

            if restored && self.state.borrow().error == Some(BriefingFailure::NoNetwork) {
                info!("Network restored, retrying briefing");
                self.spawn_trigger(TriggerReason::ReachabilityRestored);
            }
        }
    }

    fn spawn_trigger(self: &Arc<Self>, reason: TriggerReason) {
        let this = Arc::clone(self);
        tokio::spawn(async move {
            this.trigger(reason).await;
        });
    }

    fn begin(&self) -> u64 {
        let mut current = self.generation.lock();
        *current += 1;
        let generation = *current;

        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
            state.generation = generation;
        });
        debug!(generation, "Briefing refresh started");
        generation
    }

    fn settle(
        &self,
        generation: u64,
        outcome: Result<(WeatherReading, LocationSource), BriefingFailure>,
    ) -> TriggerOutcome {
        let current = self.generation.lock();
        if *current != generation {
            debug!(
                generation,
                latest = *current,
                "Dropping result of superseded refresh"
            );
            return TriggerOutcome::Superseded;
        }

        match outcome {
            Ok((reading, source)) => {
                let category = reading.category;
                self.state.send_modify(|state| {
                    state.is_loading = false;
                    state.error = None;
                    state.reading = reading.clone();
                    state.generation = generation;
                    state.location_source = Some(source);
                    state.updated_at = Some(Utc::now());
                });
                info!(
                    generation,
                    city = %reading.city_name,
                    ?category,
                    wind = reading.wind_speed_kmh,
                    "Briefing updated"
                );
                self.sounds.on_weather_changed(category);
                TriggerOutcome::Settled(reading)
            },
            Err(failure) => {
                self.state.send_modify(|state| {
                    state.is_loading = false;
                    state.error = Some(failure);
                    state.generation = generation;
                });
                warn!(generation, ?failure, "Briefing refresh failed");
                self.sounds.stop();
                TriggerOutcome::Failed(failure)
            },
        }
    }
}

fn rounded_fix(snapshot: &LocationSnapshot) -> Option<GeoLocation> {
    snapshot.fix.map(|fix| fix.rounded())
}
