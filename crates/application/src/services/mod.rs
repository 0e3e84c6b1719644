//! Application services - Use case implementations

mod ambient_sound_coordinator;
mod briefing_orchestrator;
mod location_resolver;

#[cfg(test)]
mod test_support;

pub use ambient_sound_coordinator::AmbientSoundCoordinator;
pub use briefing_orchestrator::{
    BriefingFailure, BriefingOrchestrator, BriefingPhase, BriefingState, LOAD_FAILED_MESSAGE,
    NO_NETWORK_MESSAGE, TriggerOutcome, TriggerReason,
};
pub use location_resolver::{FallbackReason, LocationResolver, LocationSource, ResolvedLocation};
