//! Foundation module - Shared domain primitives.
//!
//! Identifiers, error types and the state machine trait used by the
//! preview lifecycle.

mod errors;
mod ids;
mod state_machine;

pub use errors::{ErrorCode, InvalidTransition, PreviewError, SchemaLoadError};
pub use ids::PreviewSessionId;
pub use state_machine::StateMachine;
