//! Behavioural tests for machines over enum-valued and constant-valued
//! states.

use std::sync::{Arc, Mutex};

use stategraph::core::{Matcher, Transition, TransitionTo};
use stategraph::{matcher, state_enum, BuildError, StateMachine, StateMachineError};

type Log = Arc<Mutex<Vec<String>>>;

fn record(log: &Log, entry: String) {
    log.lock().unwrap().push(entry);
}

fn entries(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}

mod object_state_machine {
    use super::*;

    state_enum! {
        enum State {
            A,
            B,
            C,
            D,
        }
    }

    #[derive(Clone, PartialEq, Debug)]
    enum Event {
        E1,
        E2,
        E3,
        E4,
    }

    #[derive(Clone, PartialEq, Debug)]
    enum SideEffect {
        Se1,
    }

    type Machine = StateMachine<State, Event, SideEffect>;

    fn machine(log: &Log) -> Machine {
        let (exit_a_1, exit_a_2) = (Arc::clone(log), Arc::clone(log));
        let (enter_c_1, enter_c_2) = (Arc::clone(log), Arc::clone(log));
        let (transition_1, transition_2) = (Arc::clone(log), Arc::clone(log));

        Machine::create(|graph| {
            graph
                .initial_state(State::A)
                .state(matcher!(State::A), |s| {
                    s.on_exit(move |s, e| record(&exit_a_1, format!("exit-1 {s:?} {e:?}")))
                        .on_exit(move |s, e| record(&exit_a_2, format!("exit-2 {s:?} {e:?}")))
                        .on(matcher!(Event::E1), |_, _| TransitionTo::new(State::B))
                        .on(matcher!(Event::E2), |_, _| TransitionTo::new(State::C))
                        .on(matcher!(Event::E4), |_, _| TransitionTo::new(State::D));
                })
                .state(matcher!(State::B), |s| {
                    s.on(matcher!(Event::E3), |_, _| {
                        TransitionTo::new(State::C).with_side_effect(SideEffect::Se1)
                    });
                })
                .state(matcher!(State::C), |s| {
                    s.on(matcher!(Event::E4), |state, _| TransitionTo::stay(state))
                        .on_enter(move |s, e| record(&enter_c_1, format!("enter-1 {s:?} {e:?}")))
                        .on_enter(move |s, e| record(&enter_c_2, format!("enter-2 {s:?} {e:?}")));
                })
                .on_transition(move |t| record(&transition_1, format!("transition-1 {t:?}")))
                .on_transition(move |t| record(&transition_2, format!("transition-2 {t:?}")));
        })
        .unwrap()
    }

    #[test]
    fn state_returns_initial_state() {
        let machine = machine(&Log::default());

        assert_eq!(machine.current_state(), State::A);
    }

    #[test]
    fn valid_event_returns_transition() {
        let machine = machine(&Log::default());

        assert_eq!(
            machine.transition(Event::E1).unwrap(),
            Transition::Valid {
                from_state: State::A,
                event: Event::E1,
                to_state: State::B,
                side_effect: None,
            }
        );
        assert_eq!(
            machine.transition(Event::E3).unwrap(),
            Transition::Valid {
                from_state: State::B,
                event: Event::E3,
                to_state: State::C,
                side_effect: Some(SideEffect::Se1),
            }
        );
    }

    #[test]
    fn valid_event_sets_new_state() {
        let machine = machine(&Log::default());

        machine.transition(Event::E1).unwrap();
        assert_eq!(machine.current_state(), State::B);

        machine.transition(Event::E3).unwrap();
        assert_eq!(machine.current_state(), State::C);
    }

    #[test]
    fn valid_event_triggers_transition_listeners() {
        let log = Log::default();
        let machine = machine(&log);

        machine.transition(Event::E1).unwrap();
        machine.transition(Event::E3).unwrap();
        machine.transition(Event::E4).unwrap();

        let transitions: Vec<String> = entries(&log)
            .into_iter()
            .filter(|entry| entry.starts_with("transition-2"))
            .collect();
        assert_eq!(
            transitions,
            vec![
                "transition-2 Valid { from_state: A, event: E1, to_state: B, side_effect: None }",
                "transition-2 Valid { from_state: B, event: E3, to_state: C, side_effect: Some(Se1) }",
                "transition-2 Valid { from_state: C, event: E4, to_state: C, side_effect: None }",
            ]
        );
    }

    #[test]
    fn valid_event_triggers_enter_listeners() {
        let log = Log::default();
        let machine = machine(&log);

        machine.transition(Event::E2).unwrap();

        let log = entries(&log);
        assert!(log.contains(&"enter-1 C E2".to_string()));
        assert!(log.contains(&"enter-2 C E2".to_string()));
    }

    #[test]
    fn valid_event_triggers_exit_listeners() {
        let log = Log::default();
        let machine = machine(&log);

        machine.transition(Event::E2).unwrap();

        assert_eq!(
            entries(&log),
            vec![
                "transition-1 Valid { from_state: A, event: E2, to_state: C, side_effect: None }",
                "transition-2 Valid { from_state: A, event: E2, to_state: C, side_effect: None }",
                "exit-1 A E2",
                "exit-2 A E2",
                "enter-1 C E2",
                "enter-2 C E2",
            ]
        );
    }

    #[test]
    fn invalid_event_returns_invalid_transition() {
        let log = Log::default();
        let machine = machine(&log);
        let from_state = machine.current_state();

        let transition = machine.transition(Event::E3).unwrap();

        assert_eq!(
            transition,
            Transition::Invalid {
                from_state: State::A,
                event: Event::E3,
            }
        );
        assert_eq!(machine.current_state(), from_state);
        assert_eq!(
            entries(&log),
            vec![
                "transition-1 Invalid { from_state: A, event: E3 }",
                "transition-2 Invalid { from_state: A, event: E3 }",
            ]
        );
    }

    #[test]
    fn undeclared_state_returns_missing_definition() {
        let machine = machine(&Log::default());

        let result = machine.transition(Event::E4);

        assert_eq!(
            result,
            Err(StateMachineError::MissingDefinition {
                state: "D".to_string()
            })
        );
    }

    #[test]
    fn create_without_initial_state_fails() {
        let result = Machine::create(|_| {});

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }
}

mod constant_state_machine {
    use super::*;

    const STATE_A: &str = "a";
    const STATE_B: &str = "b";
    const STATE_C: &str = "c";
    const STATE_D: &str = "d";

    const EVENT_1: u32 = 1;
    const EVENT_2: u32 = 2;
    const EVENT_3: u32 = 3;
    const EVENT_4: u32 = 4;

    const SIDE_EFFECT_1: &str = "alpha";

    type Machine = StateMachine<&'static str, u32, &'static str>;

    fn machine(log: &Log) -> Machine {
        let (enter_c, exit_a, transitions) = (Arc::clone(log), Arc::clone(log), Arc::clone(log));

        Machine::create(|graph| {
            graph
                .initial_state(STATE_A)
                .state(Matcher::eq(STATE_A), |s| {
                    s.on_exit(move |s, e| record(&exit_a, format!("exit {s} {e}")))
                        .on(Matcher::eq(EVENT_1), |_, _| TransitionTo::new(STATE_B))
                        .on(Matcher::eq(EVENT_2), |_, _| TransitionTo::new(STATE_C))
                        .on(Matcher::eq(EVENT_4), |_, _| TransitionTo::new(STATE_D));
                })
                .state(Matcher::eq(STATE_B), |s| {
                    s.on(Matcher::eq(EVENT_3), |_, _| {
                        TransitionTo::new(STATE_C).with_side_effect(SIDE_EFFECT_1)
                    });
                })
                .state(Matcher::eq(STATE_C), |s| {
                    s.on_enter(move |s, e| record(&enter_c, format!("enter {s} {e}")));
                })
                .on_transition(move |t| record(&transitions, format!("{t:?}")));
        })
        .unwrap()
    }

    #[test]
    fn state_returns_initial_state() {
        assert_eq!(machine(&Log::default()).current_state(), STATE_A);
    }

    #[test]
    fn valid_events_return_transitions() {
        let machine = machine(&Log::default());

        assert_eq!(
            machine.transition(EVENT_1).unwrap(),
            Transition::Valid {
                from_state: STATE_A,
                event: EVENT_1,
                to_state: STATE_B,
                side_effect: None,
            }
        );
        assert_eq!(
            machine.transition(EVENT_3).unwrap(),
            Transition::Valid {
                from_state: STATE_B,
                event: EVENT_3,
                to_state: STATE_C,
                side_effect: Some(SIDE_EFFECT_1),
            }
        );
        assert_eq!(machine.current_state(), STATE_C);
    }

    #[test]
    fn listeners_receive_state_and_cause() {
        let log = Log::default();
        let machine = machine(&log);

        machine.transition(EVENT_2).unwrap();

        assert_eq!(
            entries(&log),
            vec![
                "Valid { from_state: \"a\", event: 2, to_state: \"c\", side_effect: None }",
                "exit a 2",
                "enter c 2",
            ]
        );
    }

    #[test]
    fn invalid_event_keeps_state() {
        let machine = machine(&Log::default());

        let transition = machine.transition(EVENT_3).unwrap();

        assert_eq!(
            transition,
            Transition::Invalid {
                from_state: STATE_A,
                event: EVENT_3,
            }
        );
        assert_eq!(machine.current_state(), STATE_A);
    }

    #[test]
    fn undeclared_state_returns_missing_definition() {
        let result = machine(&Log::default()).transition(EVENT_4);

        assert!(matches!(
            result,
            Err(StateMachineError::MissingDefinition { ref state }) if state == STATE_D
        ));
    }

    #[test]
    fn missing_destination_definition_names_state() {
        let machine = StateMachine::<&'static str, u32, ()>::create(|graph| {
            graph.initial_state(STATE_A).state(Matcher::eq(STATE_A), |s| {
                s.on(Matcher::eq(EVENT_1), |_, _| TransitionTo::new(STATE_B));
            });
        })
        .unwrap();

        let error = machine.transition(EVENT_1).err().unwrap();

        assert_eq!(error.to_string(), "Missing definition for state b!");
    }

    #[test]
    fn create_without_initial_state_fails() {
        assert!(matches!(
            Machine::create(|_| {}),
            Err(BuildError::MissingInitialState)
        ));
    }
}

mod dispatch_order {
    use super::*;

    state_enum! {
        enum Light {
            Off,
            On { brightness: u8 },
        }
    }

    #[derive(Clone, PartialEq, Debug)]
    enum Switch {
        Toggle,
        Dim(u8),
    }

    #[test]
    fn first_matching_event_handler_wins() {
        let log = Log::default();
        let (first, second) = (Arc::clone(&log), Arc::clone(&log));

        let machine = StateMachine::<Light, Switch, ()>::create(|graph| {
            graph
                .initial_state(Light::Off)
                .state(matcher!(Light::Off), |s| {
                    s.on(matcher!(Switch::Toggle), move |_, _| {
                        record(&first, "first".to_string());
                        TransitionTo::new(Light::On { brightness: 100 })
                    })
                    .on(Matcher::any(), move |state, _| {
                        record(&second, "second".to_string());
                        TransitionTo::stay(state)
                    });
                })
                .state(matcher!(Light::On { .. }), |_| {});
        })
        .unwrap();

        machine.transition(Switch::Toggle).unwrap();

        assert_eq!(entries(&log), vec!["first"]);
        assert_eq!(machine.current_state(), Light::On { brightness: 100 });
    }

    #[test]
    fn guarded_handlers_fall_through_to_later_ones() {
        let machine = StateMachine::<Light, Switch, &'static str>::create(|graph| {
            graph
                .initial_state(Light::On { brightness: 50 })
                .state(matcher!(Light::On { .. }), |s| {
                    s.on(matcher!(Switch::Dim(level) if *level == 0), |_, _| {
                        TransitionTo::new(Light::Off)
                    })
                    .on(matcher!(Switch::Dim(_)), |_, event| match event {
                        Switch::Dim(level) => TransitionTo::new(Light::On { brightness: *level }),
                        Switch::Toggle => TransitionTo::new(Light::Off),
                    })
                    .on(matcher!(Switch::Toggle), |_, _| {
                        TransitionTo::new(Light::Off).with_side_effect("clicked")
                    });
                })
                .state(matcher!(Light::Off), |_| {});
        })
        .unwrap();

        let dimmed = machine.transition(Switch::Dim(20)).unwrap();
        assert_eq!(dimmed.to_state(), Some(&Light::On { brightness: 20 }));

        let off = machine.transition(Switch::Dim(0)).unwrap();
        assert_eq!(off.to_state(), Some(&Light::Off));
        assert_eq!(off.side_effect(), None);
    }

    #[test]
    fn first_registered_state_definition_wins() {
        let machine = StateMachine::<Light, Switch, &'static str>::create(|graph| {
            graph
                .initial_state(Light::On { brightness: 100 })
                .state(
                    Matcher::new(|s: &Light| matches!(s, Light::On { .. }))
                        .when(|s| matches!(s, Light::On { brightness } if *brightness > 50)),
                    |s| {
                        s.on(matcher!(Switch::Toggle), |_, _| {
                            TransitionTo::new(Light::Off).with_side_effect("bright")
                        });
                    },
                )
                .state(Matcher::any(), |s| {
                    s.on(matcher!(Switch::Toggle), |_, _| {
                        TransitionTo::new(Light::On { brightness: 10 })
                            .with_side_effect("catch-all")
                    });
                });
        })
        .unwrap();

        let first = machine.transition(Switch::Toggle).unwrap();
        assert_eq!(first.side_effect(), Some(&"bright"));

        let second = machine.transition(Switch::Toggle).unwrap();
        assert_eq!(second.side_effect(), Some(&"catch-all"));

        let third = machine.transition(Switch::Toggle).unwrap();
        assert_eq!(third.side_effect(), Some(&"catch-all"));
        assert_eq!(machine.current_state(), Light::On { brightness: 10 });
    }

    #[test]
    fn self_transition_fires_exit_then_enter() {
        let log = Log::default();
        let (exit, enter) = (Arc::clone(&log), Arc::clone(&log));

        let machine = StateMachine::<Light, Switch, ()>::create(|graph| {
            graph.initial_state(Light::Off).state(matcher!(Light::Off), |s| {
                s.on(matcher!(Switch::Dim(_)), |state, _| TransitionTo::stay(state))
                    .on_exit(move |s, e| record(&exit, format!("exit {s:?} {e:?}")))
                    .on_enter(move |s, e| record(&enter, format!("enter {s:?} {e:?}")));
            });
        })
        .unwrap();

        let transition = machine.transition(Switch::Dim(3)).unwrap();

        assert!(transition.is_valid());
        assert_eq!(transition.to_state(), Some(&Light::Off));
        assert_eq!(entries(&log), vec!["exit Off Dim(3)", "enter Off Dim(3)"]);
    }
}
