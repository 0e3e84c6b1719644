//! Plain-text rendering of briefing results

use std::fmt::Write;

use application::services::{BriefingState, LocationSource};
use domain::risk::RiskAssessment;
use domain::value_objects::SoundId;

/// Render the risk signals and delay factors
pub fn render_risk(risk: &RiskAssessment) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "⏱️  Waiting time: {}", risk.waiting_time.label());
    let _ = writeln!(
        out,
        "🛬 Runway congestion: {}",
        risk.runway_congestion.label()
    );
    let _ = writeln!(out, "⚠️  Possible delays: {}", risk.possible_delays_label());
    let _ = writeln!(out, "📋 Delay predictor:");
    for factor in risk.delay_factors.as_array() {
        let _ = writeln!(out, "   • {factor}");
    }
    out
}

/// Render a settled briefing, or its failure message
pub fn render_briefing(state: &BriefingState, sound: Option<SoundId>) -> String {
    if let Some(message) = state.error_message() {
        return format!("❌ {message}\n");
    }

    let reading = &state.reading;
    let mut out = String::new();
    let _ = write!(out, "📍 {}", reading.city_name);
    if let Some(LocationSource::Fallback(reason)) = state.location_source {
        let _ = write!(out, " (using default location: {reason})");
    }
    out.push('\n');
    let _ = writeln!(
        out,
        "🌡️  {}  {}",
        reading.temperature_label(),
        reading.category
    );
    let _ = writeln!(
        out,
        "💨 Wind {}   👁️  Visibility {}",
        reading.wind_label(),
        reading.visibility_label
    );

    if let Some(risk) = state.risk() {
        out.push_str(&render_risk(&risk));
    }

    match sound {
        Some(sound) => {
            let _ = writeln!(out, "🔊 Ambient sound: {sound}");
        },
        None => {
            let _ = writeln!(out, "🔇 Ambient sound: off");
        },
    }
    out
}
