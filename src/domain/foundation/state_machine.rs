//! State machine trait for status enums.
//!
//! Gives lifecycle enums a single place to declare their legal transitions
//! and a validated `transition_to` built on top of it.

use super::InvalidTransition;

/// Trait for status enums that represent state machines.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for PreviewStatus {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Ready, Rendering) | (Rendering, Ready))
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Ready => vec![Rendering, Disposed],
///             // ...
///         }
///     }
/// }
///
/// let next = status.transition_to(PreviewStatus::Rendering)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, InvalidTransition> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(InvalidTransition {
                from: format!("{:?}", self),
                to: format!("{:?}", target),
            })
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
