//! Per-state definitions: event handlers plus enter/exit listeners.

use crate::core::{Matcher, TransitionTo};
use std::sync::Arc;

/// Computes the next state and side effect for an accepted event.
pub type TransitionFn<S, E, SE> = Arc<dyn Fn(&S, &E) -> TransitionTo<S, SE> + Send + Sync>;

/// Listener called with a state and the event that caused entering or
/// leaving it.
pub type StateListener<S, E> = Arc<dyn Fn(&S, &E) + Send + Sync>;

/// Everything the machine knows about one declared state.
///
/// Handlers are kept in registration order; the first one whose matcher
/// accepts the event wins.
pub struct StateDefinition<S, E, SE> {
    pub(crate) transitions: Vec<(Matcher<E>, TransitionFn<S, E, SE>)>,
    pub(crate) on_enter: Vec<StateListener<S, E>>,
    pub(crate) on_exit: Vec<StateListener<S, E>>,
}

impl<S, E: 'static, SE> StateDefinition<S, E, SE> {
    pub(crate) fn new() -> Self {
        Self {
            transitions: Vec::new(),
            on_enter: Vec::new(),
            on_exit: Vec::new(),
        }
    }

    /// Run the first handler that accepts `event`.
    ///
    /// Returns `None` when no handler matches.
    pub fn handle(&self, state: &S, event: &E) -> Option<TransitionTo<S, SE>> {
        self.transitions
            .iter()
            .find(|(matcher, _)| matcher.matches(event))
            .map(|(_, create_transition_to)| create_transition_to(state, event))
    }

    #[cfg(test)]
    pub(crate) fn accepts(&self, event: &E) -> bool {
        self.transitions
            .iter()
            .any(|(matcher, _)| matcher.matches(event))
    }

    #[cfg(test)]
    pub(crate) fn handler_count(&self) -> usize {
        self.transitions.len()
    }

    pub(crate) fn notify_enter(&self, state: &S, cause: &E) {
        for listener in &self.on_enter {
            listener(state, cause);
        }
    }

    pub(crate) fn notify_exit(&self, state: &S, cause: &E) {
        for listener in &self.on_exit {
            listener(state, cause);
        }
    }
}
