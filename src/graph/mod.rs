//! Immutable transition graphs.
//!
//! A [`Graph`] is the finished output of a [`GraphBuilder`](crate::builder::GraphBuilder):
//! the initial state, the ordered state definitions and the global
//! listeners. Once built it is never mutated; machines share it through an
//! `Arc`.

mod definition;

pub use definition::{StateDefinition, StateListener, TransitionFn};

use crate::core::{Matcher, State, Transition};
use crate::machine::StateMachineError;
use std::sync::Arc;

/// Listener called with every transition result, valid or not.
pub type TransitionListener<S, E, SE> = Arc<dyn Fn(&Transition<S, E, SE>) + Send + Sync>;

/// State matcher paired with the definition it selects.
pub(crate) type DefinitionEntry<S, E, SE> = (Arc<Matcher<S>>, Arc<StateDefinition<S, E, SE>>);

/// Fully resolved description of a state machine.
pub struct Graph<S, E, SE> {
    pub(crate) initial_state: S,
    pub(crate) state_definitions: Vec<DefinitionEntry<S, E, SE>>,
    pub(crate) on_transition_listeners: Vec<TransitionListener<S, E, SE>>,
    pub(crate) on_enter_listeners: Vec<StateListener<S, E>>,
    pub(crate) on_exit_listeners: Vec<StateListener<S, E>>,
}

impl<S: State, E: 'static, SE> Graph<S, E, SE> {
    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }

    #[cfg(test)]
    pub(crate) fn definition_count(&self) -> usize {
        self.state_definitions.len()
    }

    /// Find the definition for `state`.
    ///
    /// Definitions are scanned in registration order and the first matcher
    /// that accepts `state` wins, even if later ones would match too.
    ///
    /// # Errors
    ///
    /// Returns [`StateMachineError::MissingDefinition`] when no matcher
    /// accepts `state`. That means the graph is misconfigured: a reachable
    /// state was never declared.
    pub fn definition_for(
        &self,
        state: &S,
    ) -> Result<&Arc<StateDefinition<S, E, SE>>, StateMachineError> {
        self.state_definitions
            .iter()
            .find(|(matcher, _)| matcher.matches(state))
            .map(|(_, definition)| definition)
            .ok_or_else(|| StateMachineError::MissingDefinition {
                state: state.name().to_string(),
            })
    }

    pub(crate) fn notify_transition(&self, transition: &Transition<S, E, SE>) {
        for listener in &self.on_transition_listeners {
            listener(transition);
        }
    }

    /// Global enter listeners, then the state's own.
    pub(crate) fn notify_enter(&self, state: &S, cause: &E) -> Result<(), StateMachineError> {
        for listener in &self.on_enter_listeners {
            listener(state, cause);
        }
        self.definition_for(state)?.notify_enter(state, cause);
        Ok(())
    }

    /// Global exit listeners, then the state's own.
    pub(crate) fn notify_exit(&self, state: &S, cause: &E) -> Result<(), StateMachineError> {
        for listener in &self.on_exit_listeners {
            listener(state, cause);
        }
        self.definition_for(state)?.notify_exit(state, cause);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;
    use crate::core::TransitionTo;

    fn graph() -> Graph<String, u8, ()> {
        GraphBuilder::<String, u8, ()>::new()
            .initial_state("a".to_string())
            .state(Matcher::eq("a".to_string()), |s| {
                s.on(Matcher::eq(1), |_, _| TransitionTo::new("b".to_string()));
            })
            .state(Matcher::new(|s: &String| s.starts_with('a')), |s| {
                s.on(Matcher::eq(2), |_, _| TransitionTo::new("shadowed".to_string()));
            })
            .state(Matcher::any(), |s| {
                s.on(Matcher::eq(3), |_, _| TransitionTo::new("a".to_string()));
            })
            .build()
            .unwrap()
    }

    #[test]
    fn first_registered_definition_wins() {
        let graph = graph();

        let definition = graph.definition_for(&"a".to_string()).unwrap();
        assert!(definition.accepts(&1));
        assert!(!definition.accepts(&2));

        let definition = graph.definition_for(&"ab".to_string()).unwrap();
        assert!(definition.accepts(&2));
    }

    #[test]
    fn catch_all_definition_registered_last() {
        let graph = graph();

        let definition = graph.definition_for(&"zzz".to_string()).unwrap();
        assert!(definition.accepts(&3));
        assert!(!definition.accepts(&1));
    }

    #[test]
    fn missing_definition_names_state() {
        let graph = GraphBuilder::<String, u8, ()>::new()
            .initial_state("a".to_string())
            .state(Matcher::eq("a".to_string()), |_| {})
            .build()
            .unwrap();

        let error = graph.definition_for(&"b".to_string()).err().unwrap();
        assert_eq!(error.to_string(), "Missing definition for state b!");
    }
}
