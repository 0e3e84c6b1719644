//! End-to-end briefing tests
//!
//! Real adapters wired into the orchestrator, with the weather service
//! replaced by a wiremock server.

use std::sync::Arc;

use application::ports::{LocationSnapshot, SettingsPort};
use application::services::{
    AmbientSoundCoordinator, BriefingFailure, BriefingOrchestrator, BriefingPhase,
    FallbackReason, LocationResolver, LocationSource, TriggerOutcome, TriggerReason,
};
use domain::value_objects::{GeoLocation, SoundId, WeatherCategory};
use infrastructure::{
    FileSettingsStore, HeadlessAudioOutput, WatchLocationProvider, WatchReachability,
    WeatherAdapter,
};
use integration_weather::WeatherConfig;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn weather_body(main: &str, wind: f64) -> serde_json::Value {
    serde_json::json!({
        "weather": [{"main": main, "description": main.to_lowercase()}],
        "main": {"temp": 18.0},
        "visibility": 10000,
        "wind": {"speed": wind},
        "name": "New York"
    })
}

struct Harness {
    orchestrator: Arc<BriefingOrchestrator>,
    location: Arc<WatchLocationProvider>,
    reachability: Arc<WatchReachability>,
    audio: Arc<HeadlessAudioOutput>,
    settings: Arc<FileSettingsStore>,
    _dir: TempDir,
}

#[allow(clippy::expect_used)]
fn harness(server: &MockServer, snapshot: LocationSnapshot) -> Harness {
    let dir = TempDir::new().expect("temp dir");
    let weather = WeatherAdapter::with_config(WeatherConfig {
        base_url: server.uri(),
        api_key: "e2e-key".to_string(),
        timeout_secs: 5,
    })
    .expect("adapter");

    let location = Arc::new(WatchLocationProvider::new(snapshot));
    let reachability = Arc::new(WatchReachability::new(true));
    let audio = Arc::new(HeadlessAudioOutput::new());
    let settings = Arc::new(FileSettingsStore::open(dir.path().join("settings.json")));
    let sounds = Arc::new(AmbientSoundCoordinator::new(
        audio.clone(),
        settings.clone(),
    ));

    let orchestrator = Arc::new(BriefingOrchestrator::new(
        Arc::new(weather),
        location.clone(),
        reachability.clone(),
        sounds,
        LocationResolver::default(),
    ));

    Harness {
        orchestrator,
        location,
        reachability,
        audio,
        settings,
        _dir: dir,
    }
}

#[tokio::test]
async fn thunderstorm_briefing_plays_and_flags_risk() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_body("Thunderstorm", 50.0)))
        .mount(&server)
        .await;

    let h = harness(&server, LocationSnapshot::authorized(GeoLocation::new_york()));
    let outcome = h.orchestrator.trigger(TriggerReason::Activation).await;

    assert!(matches!(outcome, TriggerOutcome::Settled(_)));
    let state = h.orchestrator.snapshot();
    assert_eq!(state.phase(), BriefingPhase::Settled);
    assert_eq!(state.location_source, Some(LocationSource::Device));

    let risk = state.risk().expect("risk while loaded");
    assert_eq!(risk.waiting_time.label(), "45+ min");
    assert_eq!(risk.runway_congestion.label(), "High");
    assert!(risk.delay_probability);
    assert_eq!(h.audio.now_playing(), Some(SoundId::Rain));
}

#[tokio::test]
async fn server_error_stops_sound_and_keeps_reading() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_body("Rain", 10.0)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let h = harness(&server, LocationSnapshot::authorized(GeoLocation::new_york()));
    h.orchestrator.trigger(TriggerReason::Activation).await;
    assert_eq!(h.audio.now_playing(), Some(SoundId::Rain));

    let outcome = h.orchestrator.trigger(TriggerReason::UserRetry).await;
    assert!(matches!(
        outcome,
        TriggerOutcome::Failed(BriefingFailure::LoadFailed)
    ));

    let state = h.orchestrator.snapshot();
    assert_eq!(state.error, Some(BriefingFailure::LoadFailed));
    assert!(state.risk().is_none());
    assert_eq!(state.reading.category, WeatherCategory::Rain);
    assert_eq!(h.audio.now_playing(), None);
}

#[tokio::test]
async fn denied_permission_requests_fallback_coordinates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "40.7128"))
        .and(query_param("lon", "-74.0060"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "e2e-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_body("Clear", 5.0)))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, LocationSnapshot::denied());
    h.orchestrator.trigger(TriggerReason::Activation).await;

    let state = h.orchestrator.snapshot();
    assert_eq!(state.phase(), BriefingPhase::Settled);
    assert_eq!(
        state.location_source,
        Some(LocationSource::Fallback(FallbackReason::PermissionDenied))
    );
    assert_eq!(h.audio.now_playing(), Some(SoundId::Calm));
}

#[tokio::test]
async fn unreachable_network_skips_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_body("Clear", 5.0)))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server, LocationSnapshot::authorized(GeoLocation::new_york()));
    h.reachability.set_reachable(false);

    let outcome = h.orchestrator.trigger(TriggerReason::Activation).await;
    assert!(matches!(
        outcome,
        TriggerOutcome::Failed(BriefingFailure::NoNetwork)
    ));
    assert_eq!(
        h.orchestrator.snapshot().error_message(),
        Some(application::services::NO_NETWORK_MESSAGE)
    );
}

#[tokio::test]
async fn disabled_sounds_stay_silent_after_reload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_body("Snow", 5.0)))
        .mount(&server)
        .await;

    let h = harness(&server, LocationSnapshot::authorized(GeoLocation::new_york()));
    h.orchestrator.trigger(TriggerReason::Activation).await;
    assert_eq!(h.audio.now_playing(), Some(SoundId::Rain));

    h.orchestrator
        .sounds()
        .set_globally_enabled(false)
        .expect("persist");
    assert_eq!(h.audio.now_playing(), None);
    assert!(!h.settings.sounds_enabled());

    h.orchestrator.trigger(TriggerReason::UserRetry).await;
    assert_eq!(h.audio.now_playing(), None);
}

#[tokio::test]
async fn new_fix_refreshes_briefing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "51.4700"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_body("Fog", 5.0)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_body("Clear", 5.0)))
        .mount(&server)
        .await;

    let h = harness(&server, LocationSnapshot::authorized(GeoLocation::new_york()));
    h.orchestrator.trigger(TriggerReason::Activation).await;

    let mut states = h.orchestrator.subscribe();
    tokio::spawn(h.orchestrator.clone().watch_location(h.location.changes()));
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }

    h.location.update_fix(GeoLocation::new_unchecked(51.47, -0.4543));

    let settled = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        loop {
            if states.changed().await.is_err() {
                return None;
            }
            let state = states.borrow_and_update().clone();
            if state.phase() == BriefingPhase::Settled
                && state.reading.category == WeatherCategory::Fog
            {
                return Some(state);
            }
        }
    })
    .await
    .expect("briefing refreshed in time");

    assert!(settled.is_some());
}
