//! Core value types of the state machine.
//!
//! This module contains the pieces that know nothing about graphs or
//! locking:
//! - State naming via the `State` trait
//! - Predicate matchers for states and events
//! - Transition results

mod matcher;
mod state;
mod transition;

pub use matcher::Matcher;
pub use state::State;
pub use transition::{Transition, TransitionTo};
