//! Stategraph: a type-checked finite state machine
//!
//! A machine is declared as a graph: for each state, which events it
//! accepts, what state and side effect each one produces, and which
//! listeners fire on enter and exit. The engine then accepts events one at
//! a time, computes the next state deterministically and notifies
//! listeners in a fixed order.
//!
//! # Core Concepts
//!
//! - **State**: caller-owned values naming themselves via the `State` trait
//! - **Matchers**: variant tests plus guard predicates, first match wins
//! - **Graph**: the immutable set of state definitions and global listeners
//! - **StateMachine**: the current-state cell and the dispatch algorithm
//!
//! # Example
//!
//! ```rust
//! use stategraph::core::{Transition, TransitionTo};
//! use stategraph::{matcher, state_enum, StateMachine};
//!
//! state_enum! {
//!     enum Matter {
//!         Solid,
//!         Liquid,
//!     }
//! }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Heat {
//!     Melt,
//!     Freeze,
//! }
//!
//! let machine = StateMachine::<Matter, Heat, &'static str>::create(|graph| {
//!     graph
//!         .initial_state(Matter::Solid)
//!         .state(matcher!(Matter::Solid), |s| {
//!             s.on(matcher!(Heat::Melt), |_, _| {
//!                 TransitionTo::new(Matter::Liquid).with_side_effect("melted")
//!             });
//!         })
//!         .state(matcher!(Matter::Liquid), |s| {
//!             s.on(matcher!(Heat::Freeze), |_, _| TransitionTo::new(Matter::Solid));
//!         });
//! })
//! .unwrap();
//!
//! let transition = machine.transition(Heat::Melt).unwrap();
//! assert_eq!(transition.side_effect(), Some(&"melted"));
//! assert_eq!(machine.current_state(), Matter::Liquid);
//!
//! // Liquid does not handle Melt: the event is rejected and nothing moves.
//! let rejected = machine.transition(Heat::Melt).unwrap();
//! assert_eq!(
//!     rejected,
//!     Transition::Invalid { from_state: Matter::Liquid, event: Heat::Melt }
//! );
//! ```

// Lets `state_enum!` name its serde re-export inside this crate too.
extern crate self as stategraph;

pub mod builder;
pub mod core;
pub mod graph;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, GraphBuilder, StateDefinitionBuilder};
pub use core::{Matcher, State, Transition, TransitionTo};
pub use graph::Graph;
pub use machine::{StateMachine, StateMachineError};

#[doc(hidden)]
pub use serde as __serde;
