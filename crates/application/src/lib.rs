//! Application layer - Use cases and orchestration
//!
//! Contains the briefing orchestrator, location resolution, ambient sound
//! coordination and the port definitions the infrastructure implements.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
