//! State machine that dispatches events against a transition graph.

use crate::builder::{BuildError, GraphBuilder};
use crate::core::{State, Transition, TransitionTo};
use crate::graph::Graph;
use crate::machine::error::StateMachineError;
use parking_lot::{ReentrantMutex, RwLock};
use std::cell::Cell;
use std::fmt::{self, Debug};
use std::sync::Arc;
use tracing::{debug, error, trace};

/// State machine driven one event at a time.
///
/// The machine owns a single current-state cell and shares its immutable
/// [`Graph`] with every machine derived from it. `transition` may be called
/// concurrently: reading the current state, dispatching the event and
/// storing the new state happen under one lock, while listeners run after
/// the lock is released so they may call `transition` themselves.
/// Transition functions may not: a nested call panics instead of
/// deadlocking.
pub struct StateMachine<S, E, SE> {
    graph: Arc<Graph<S, E, SE>>,
    state: RwLock<S>,
    /// Set while a transition function runs on the thread holding the lock.
    dispatch: ReentrantMutex<Cell<bool>>,
}

/// Clears the dispatch flag, also when a transition function panics.
struct Dispatching<'a>(&'a Cell<bool>);

impl Drop for Dispatching<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<S, E, SE> StateMachine<S, E, SE>
where
    S: State,
    E: Debug + 'static,
    SE: Debug + 'static,
{
    /// Build a machine from a graph-construction closure.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingInitialState`] if the closure never set
    /// an initial state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stategraph::core::{Matcher, Transition, TransitionTo};
    /// use stategraph::StateMachine;
    ///
    /// let machine = StateMachine::<&str, u8, ()>::create(|graph| {
    ///     graph
    ///         .initial_state("off")
    ///         .state(Matcher::eq("off"), |s| {
    ///             s.on(Matcher::eq(1), |_, _| TransitionTo::new("on"));
    ///         })
    ///         .state(Matcher::eq("on"), |s| {
    ///             s.on(Matcher::eq(0), |_, _| TransitionTo::new("off"));
    ///         });
    /// })
    /// .unwrap();
    ///
    /// let transition = machine.transition(1).unwrap();
    /// assert_eq!(
    ///     transition,
    ///     Transition::Valid { from_state: "off", event: 1, to_state: "on", side_effect: None }
    /// );
    /// assert_eq!(machine.current_state(), "on");
    /// ```
    pub fn create<F>(init: F) -> Result<Self, BuildError>
    where
        F: FnOnce(&mut GraphBuilder<S, E, SE>),
    {
        let mut builder = GraphBuilder::new();
        init(&mut builder);
        Ok(Self::new(builder.build()?))
    }

    /// Create a machine in `graph`'s initial state.
    pub fn new(graph: Graph<S, E, SE>) -> Self {
        Self::from_shared(Arc::new(graph))
    }

    fn from_shared(graph: Arc<Graph<S, E, SE>>) -> Self {
        let state = RwLock::new(graph.initial_state().clone());
        Self {
            graph,
            state,
            dispatch: ReentrantMutex::new(Cell::new(false)),
        }
    }

    /// Get the current state.
    ///
    /// Another thread may move the machine on as soon as this returns, so
    /// a listener should rely on its arguments rather than this value.
    pub fn current_state(&self) -> S {
        self.state.read().clone()
    }

    pub fn graph(&self) -> &Graph<S, E, SE> {
        &self.graph
    }

    /// Offer `event` to the machine.
    ///
    /// If the current state's definition has a handler for `event`, the
    /// machine moves to the state it returns and a `Valid` transition is
    /// produced; otherwise the state is left alone and the result is
    /// `Invalid`. Transition listeners are then called with the result and,
    /// for a valid transition only, exit listeners of the old state followed
    /// by enter listeners of the new one (global before state-scoped).
    ///
    /// # Errors
    ///
    /// Returns [`StateMachineError::MissingDefinition`] if the current
    /// state, or the state being entered, has no definition. In the second
    /// case the new state has already been stored and the transition and
    /// exit listeners have run.
    ///
    /// # Panics
    ///
    /// Panics if called from inside one of this machine's transition
    /// functions.
    pub fn transition(&self, event: E) -> Result<Transition<S, E, SE>, StateMachineError> {
        let transition = {
            let dispatch = self.dispatch.lock();
            assert!(
                !dispatch.get(),
                "StateMachine::transition called from a transition function of the same machine"
            );
            dispatch.set(true);
            let _dispatching = Dispatching(&dispatch);
            let from_state = self.state.read().clone();
            let transition = self.get_transition(from_state, event)?;
            if let Transition::Valid { to_state, .. } = &transition {
                *self.state.write() = to_state.clone();
            }
            transition
        };

        match &transition {
            Transition::Valid {
                from_state,
                event,
                to_state,
                side_effect,
            } => debug!(
                from = from_state.name(),
                to = to_state.name(),
                ?event,
                ?side_effect,
                "transition"
            ),
            Transition::Invalid { from_state, event } => {
                trace!(from = from_state.name(), ?event, "event rejected")
            }
        }

        self.graph.notify_transition(&transition);
        if let Transition::Valid {
            from_state,
            event,
            to_state,
            ..
        } = &transition
        {
            self.graph
                .notify_exit(from_state, event)
                .and_then(|()| self.graph.notify_enter(to_state, event))
                .inspect_err(|e| error!(error = %e, "state graph is incomplete"))?;
        }
        Ok(transition)
    }

    /// Build a new machine from this machine's graph, starting in this
    /// machine's current state.
    ///
    /// `init` may add definitions or listeners, or pick another initial
    /// state. The new machine is independent of this one afterwards.
    pub fn derive<F>(&self, init: F) -> Self
    where
        F: FnOnce(&mut GraphBuilder<S, E, SE>),
    {
        let seed = self.current_state();
        let mut builder = GraphBuilder::from_graph(&self.graph);
        // Only an explicit choice in `init` replaces the current state.
        builder.initial_state = None;
        init(&mut builder);
        let initial_state = builder.initial_state.take().unwrap_or(seed);
        debug!(initial_state = initial_state.name(), "derived state machine");
        Self::new(builder.assemble(initial_state))
    }

    fn get_transition(
        &self,
        from_state: S,
        event: E,
    ) -> Result<Transition<S, E, SE>, StateMachineError> {
        let definition = self
            .graph
            .definition_for(&from_state)
            .inspect_err(|e| error!(error = %e, "cannot dispatch event"))?;

        Ok(match definition.handle(&from_state, &event) {
            Some(TransitionTo {
                to_state,
                side_effect,
            }) => Transition::Valid {
                from_state,
                event,
                to_state,
                side_effect,
            },
            None => Transition::Invalid { from_state, event },
        })
    }
}

impl<S: Debug, E, SE> Debug for StateMachine<S, E, SE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("state", &*self.state.read())
            .field("definitions", &self.graph.state_definitions.len())
            .finish()
    }
}
