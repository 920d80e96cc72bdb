//! Core State trait for state machine states.
//!
//! States are caller-owned immutable values. The engine clones them into
//! transition results and stores exactly one of them as the current state,
//! but never looks inside one beyond matcher predicates and [`State::name`].

use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the current state is copied into every transition result
/// - `PartialEq`: states must be comparable for `Matcher::eq` and tests
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync`: a machine may be driven from several threads
///
/// # Example
///
/// ```rust
/// use stategraph::core::State;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum DoorState {
///     Open,
///     Closed { locked: bool },
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed { .. } => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Closed { locked: true }.name(), "Closed");
/// ```
pub trait State: Clone + PartialEq + Debug + Send + Sync + 'static {
    /// Get the state's name for display/logging.
    ///
    /// For enum states this is the variant name, without its payload.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum TestState {
        Idle,
        Running(u32),
        Stopped { reason: String },
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running(_) => "Running",
                Self::Stopped { .. } => "Stopped",
            }
        }
    }

    #[test]
    fn state_name_ignores_payload() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Running(3).name(), "Running");
        assert_eq!(
            TestState::Stopped {
                reason: "done".to_string()
            }
            .name(),
            "Stopped"
        );
    }

    #[test]
    fn string_states_name_themselves() {
        assert_eq!("a".name(), "a");
        assert_eq!(String::from("locked").name(), "locked");
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(TestState::Running(1), TestState::Running(1));
        assert_ne!(TestState::Running(1), TestState::Running(2));
        assert_ne!(TestState::Idle, TestState::Running(1));
    }
}
