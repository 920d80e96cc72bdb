//! Outcomes of offering an event to a state machine.

use serde::{Deserialize, Serialize};

/// Result of applying one event.
///
/// A `Valid` transition means the current state had a handler for the event
/// and the machine moved to `to_state` (possibly the same state). An
/// `Invalid` transition means no handler matched and the machine stayed put.
///
/// # Example
///
/// ```rust
/// use stategraph::core::Transition;
///
/// let valid: Transition<&str, u8, ()> = Transition::Valid {
///     from_state: "idle",
///     event: 1,
///     to_state: "busy",
///     side_effect: None,
/// };
/// let invalid: Transition<&str, u8, ()> = Transition::Invalid {
///     from_state: "idle",
///     event: 2,
/// };
///
/// assert!(valid.is_valid());
/// assert_eq!(valid.to_state(), Some(&"busy"));
/// assert!(!invalid.is_valid());
/// assert_eq!(invalid.from_state(), &"idle");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition<S, E, SE> {
    /// The event was handled.
    Valid {
        /// State the machine was in when the event arrived
        from_state: S,
        /// The event that caused the transition
        event: E,
        /// State the machine is in afterwards
        to_state: S,
        /// Optional payload for the caller to act on
        side_effect: Option<SE>,
    },

    /// No handler in the current state matched the event.
    Invalid {
        /// State the machine was (and still is) in
        from_state: S,
        /// The rejected event
        event: E,
    },
}

impl<S, E, SE> Transition<S, E, SE> {
    pub fn from_state(&self) -> &S {
        match self {
            Self::Valid { from_state, .. } | Self::Invalid { from_state, .. } => from_state,
        }
    }

    pub fn event(&self) -> &E {
        match self {
            Self::Valid { event, .. } | Self::Invalid { event, .. } => event,
        }
    }

    /// Destination state, or `None` for an invalid transition.
    pub fn to_state(&self) -> Option<&S> {
        match self {
            Self::Valid { to_state, .. } => Some(to_state),
            Self::Invalid { .. } => None,
        }
    }

    pub fn side_effect(&self) -> Option<&SE> {
        match self {
            Self::Valid { side_effect, .. } => side_effect.as_ref(),
            Self::Invalid { .. } => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// What a transition function decided: the next state and an optional side
/// effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTo<S, SE> {
    pub to_state: S,
    pub side_effect: Option<SE>,
}

impl<S, SE> TransitionTo<S, SE> {
    /// Move to `state` without a side effect.
    pub fn new(state: S) -> Self {
        Self {
            to_state: state,
            side_effect: None,
        }
    }

    /// Stay in `state`.
    ///
    /// This is still a valid transition: exit and enter listeners of the
    /// state fire as for any other move.
    pub fn stay(state: &S) -> Self
    where
        S: Clone,
    {
        Self::new(state.clone())
    }

    /// Attach a side effect.
    pub fn with_side_effect(mut self, side_effect: SE) -> Self {
        self.side_effect = Some(side_effect);
        self
    }
}
