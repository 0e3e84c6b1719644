//! Domain layer for JetWell
//!
//! Contains the weather reading model, value objects, the operational risk
//! rules and domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod risk;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use risk::RiskAssessment;
pub use value_objects::*;
