//! Builder for constructing transition graphs.

use crate::builder::error::BuildError;
use crate::builder::state::StateDefinitionBuilder;
use crate::core::{Matcher, State, Transition};
use crate::graph::{DefinitionEntry, Graph, StateListener, TransitionListener};
use std::sync::Arc;
use tracing::debug;

/// Accumulates state definitions and listeners into a [`Graph`].
///
/// Registration order matters: state definitions and event handlers are
/// both resolved first-match-wins, and listeners fire in the order they
/// were added.
pub struct GraphBuilder<S, E, SE> {
    pub(crate) initial_state: Option<S>,
    state_definitions: Vec<DefinitionEntry<S, E, SE>>,
    on_transition_listeners: Vec<TransitionListener<S, E, SE>>,
    on_enter_listeners: Vec<StateListener<S, E>>,
    on_exit_listeners: Vec<StateListener<S, E>>,
}

impl<S: State, E: 'static, SE: 'static> GraphBuilder<S, E, SE> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            initial_state: None,
            state_definitions: Vec::new(),
            on_transition_listeners: Vec::new(),
            on_enter_listeners: Vec::new(),
            on_exit_listeners: Vec::new(),
        }
    }

    /// Create a builder holding everything `graph` declares, including its
    /// initial state.
    pub fn from_graph(graph: &Graph<S, E, SE>) -> Self {
        Self {
            initial_state: Some(graph.initial_state.clone()),
            state_definitions: graph.state_definitions.clone(),
            on_transition_listeners: graph.on_transition_listeners.clone(),
            on_enter_listeners: graph.on_enter_listeners.clone(),
            on_exit_listeners: graph.on_exit_listeners.clone(),
        }
    }

    /// Set the initial state (required).
    pub fn initial_state(&mut self, state: S) -> &mut Self {
        self.initial_state = Some(state);
        self
    }

    /// Declare the definition used for states accepted by `state_matcher`.
    ///
    /// If an earlier definition also accepts a state, the earlier one is
    /// used for it.
    pub fn state<F>(&mut self, state_matcher: Matcher<S>, init: F) -> &mut Self
    where
        F: FnOnce(&mut StateDefinitionBuilder<S, E, SE>),
    {
        let mut definition = StateDefinitionBuilder::new();
        init(&mut definition);
        self.state_definitions
            .push((Arc::new(state_matcher), Arc::new(definition.build())));
        self
    }

    /// Called with every transition result, valid or invalid.
    pub fn on_transition<F>(&mut self, listener: F) -> &mut Self
    where
        F: Fn(&Transition<S, E, SE>) + Send + Sync + 'static,
    {
        self.on_transition_listeners.push(Arc::new(listener));
        self
    }

    /// Called whenever any state is entered, before the state's own enter
    /// listeners.
    pub fn on_enter<F>(&mut self, listener: F) -> &mut Self
    where
        F: Fn(&S, &E) + Send + Sync + 'static,
    {
        self.on_enter_listeners.push(Arc::new(listener));
        self
    }

    /// Called whenever any state is exited, before the state's own exit
    /// listeners.
    pub fn on_exit<F>(&mut self, listener: F) -> &mut Self
    where
        F: Fn(&S, &E) + Send + Sync + 'static,
    {
        self.on_exit_listeners.push(Arc::new(listener));
        self
    }

    /// Build the graph.
    /// Returns an error if no initial state was set.
    pub fn build(&self) -> Result<Graph<S, E, SE>, BuildError> {
        let initial_state = self
            .initial_state
            .clone()
            .ok_or(BuildError::MissingInitialState)?;
        Ok(self.assemble(initial_state))
    }

    pub(crate) fn assemble(&self, initial_state: S) -> Graph<S, E, SE> {
        debug!(
            initial_state = initial_state.name(),
            definitions = self.state_definitions.len(),
            transition_listeners = self.on_transition_listeners.len(),
            "built transition graph"
        );
        Graph {
            initial_state,
            state_definitions: self.state_definitions.clone(),
            on_transition_listeners: self.on_transition_listeners.clone(),
            on_enter_listeners: self.on_enter_listeners.clone(),
            on_exit_listeners: self.on_exit_listeners.clone(),
        }
    }
}

impl<S: State, E: 'static, SE: 'static> Default for GraphBuilder<S, E, SE> {
    fn default() -> Self {
        Self::new()
    }
}
