//! Builder API for declaring transition graphs.
//!
//! [`GraphBuilder`] collects state definitions and global listeners;
//! [`StateDefinitionBuilder`] is the context passed to each per-state
//! closure. The `state_enum!` and `matcher!` macros cut the boilerplate of
//! declaring states and writing variant matchers.

pub mod error;
pub mod graph;
pub mod macros;
pub mod state;

pub use error::BuildError;
pub use graph::GraphBuilder;
pub use state::StateDefinitionBuilder;
