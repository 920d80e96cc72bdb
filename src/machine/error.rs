//! Runtime errors raised while driving a state machine.

use thiserror::Error;

/// Errors that can occur when applying an event.
///
/// An event with no matching handler is not an error; it produces an
/// invalid [`Transition`](crate::core::Transition) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateMachineError {
    /// A state was reached that no definition in the graph matches.
    #[error("Missing definition for state {state}!")]
    MissingDefinition { state: String },
}
