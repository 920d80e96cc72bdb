//! Build errors for transition graphs.

use thiserror::Error;

/// Errors that can occur when building a transition graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial_state(state) before .build()")]
    MissingInitialState,
}
