//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (identifiers, errors, state machine trait)
//! - `preview` - Resume documents, schema validation and HTML presentation
pub mod foundation;
pub mod preview;
