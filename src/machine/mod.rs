//! The runtime engine.
//!
//! [`StateMachine`] holds the current state and dispatches events against
//! its [`Graph`](crate::graph::Graph), notifying listeners in a fixed order:
//!
//! 1. transition listeners, for every result
//! 2. global exit listeners, then the exited state's own (valid only)
//! 3. global enter listeners, then the entered state's own (valid only)

mod engine;
mod error;

pub use engine::StateMachine;
pub use error::StateMachineError;
