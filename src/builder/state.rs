//! Builder for a single state's definition.

use crate::core::{Matcher, TransitionTo};
use crate::graph::{StateDefinition, TransitionFn};
use std::sync::Arc;

/// Context handed to each per-state registration closure.
///
/// Handlers registered with [`on`](Self::on) are tried in registration
/// order. Listeners registered here only fire for states selected by this
/// definition's matcher, after the global listeners of the same phase.
pub struct StateDefinitionBuilder<S, E, SE> {
    definition: StateDefinition<S, E, SE>,
}

impl<S, E: 'static, SE> StateDefinitionBuilder<S, E, SE> {
    pub(crate) fn new() -> Self {
        Self {
            definition: StateDefinition::new(),
        }
    }

    /// Handle events accepted by `event_matcher`.
    ///
    /// `create_transition_to` receives the current state and the event and
    /// decides where to go. It runs while the machine's dispatch lock is
    /// held; calling the same machine's `transition` from it panics.
    pub fn on<F>(&mut self, event_matcher: Matcher<E>, create_transition_to: F) -> &mut Self
    where
        F: Fn(&S, &E) -> TransitionTo<S, SE> + Send + Sync + 'static,
    {
        let create_transition_to: TransitionFn<S, E, SE> = Arc::new(create_transition_to);
        self.definition
            .transitions
            .push((event_matcher, create_transition_to));
        self
    }

    /// Called with the entered state and the causing event.
    pub fn on_enter<F>(&mut self, listener: F) -> &mut Self
    where
        F: Fn(&S, &E) + Send + Sync + 'static,
    {
        self.definition.on_enter.push(Arc::new(listener));
        self
    }

    /// Called with the exited state and the causing event.
    pub fn on_exit<F>(&mut self, listener: F) -> &mut Self
    where
        F: Fn(&S, &E) + Send + Sync + 'static,
    {
        self.definition.on_exit.push(Arc::new(listener));
        self
    }

    pub(crate) fn build(self) -> StateDefinition<S, E, SE> {
        self.definition
    }
}
