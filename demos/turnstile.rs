//! Turnstile State Machine
//!
//! This example demonstrates states and events that carry data.
//!
//! Key concepts:
//! - Guards computed from state payload (accumulated credit)
//! - Side effects as commands for the surrounding system
//! - Staying in a state while still emitting a side effect
//! - Restoring a remembered state after repair
//!
//! Run with: RUST_LOG=debug cargo run --example turnstile

use stategraph::core::{Transition, TransitionTo};
use stategraph::{matcher, state_enum, StateMachine};
use tracing_subscriber::EnvFilter;

const FARE_PRICE: u32 = 50;

state_enum! {
    enum TurnstileState {
        Locked { credit: u32 },
        Unlocked,
        Broken(Box<TurnstileState>),
    }
}

#[derive(Clone, PartialEq, Debug)]
enum TurnstileEvent {
    InsertCoin(u32),
    AdmitPerson,
    MachineDidFail,
    MachineRepairDidComplete,
}

#[derive(Clone, PartialEq, Debug)]
enum TurnstileCommand {
    SoundAlarm,
    CloseDoors,
    OpenDoors,
    OrderRepair,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Turnstile State Machine ===\n");

    let machine =
        StateMachine::<TurnstileState, TurnstileEvent, TurnstileCommand>::create(|graph| {
            graph
                .initial_state(TurnstileState::Locked { credit: 0 })
                .state(matcher!(TurnstileState::Locked { .. }), |s| {
                    s.on(matcher!(TurnstileEvent::InsertCoin(_)), |state, event| {
                        let (TurnstileState::Locked { credit }, TurnstileEvent::InsertCoin(value)) =
                            (state, event)
                        else {
                            return TransitionTo::stay(state);
                        };
                        let new_credit = credit.saturating_add(*value);
                        if new_credit >= FARE_PRICE {
                            TransitionTo::new(TurnstileState::Unlocked)
                                .with_side_effect(TurnstileCommand::OpenDoors)
                        } else {
                            TransitionTo::new(TurnstileState::Locked { credit: new_credit })
                        }
                    })
                    .on(matcher!(TurnstileEvent::AdmitPerson), |state, _| {
                        TransitionTo::stay(state).with_side_effect(TurnstileCommand::SoundAlarm)
                    })
                    .on(matcher!(TurnstileEvent::MachineDidFail), |state, _| {
                        TransitionTo::new(TurnstileState::Broken(Box::new(state.clone())))
                            .with_side_effect(TurnstileCommand::OrderRepair)
                    });
                })
                .state(matcher!(TurnstileState::Unlocked), |s| {
                    s.on(matcher!(TurnstileEvent::AdmitPerson), |_, _| {
                        TransitionTo::new(TurnstileState::Locked { credit: 0 })
                            .with_side_effect(TurnstileCommand::CloseDoors)
                    });
                })
                .state(matcher!(TurnstileState::Broken(_)), |s| {
                    s.on(
                        matcher!(TurnstileEvent::MachineRepairDidComplete),
                        |state, _| match state {
                            TurnstileState::Broken(old_state) => {
                                TransitionTo::new((**old_state).clone())
                            }
                            other => TransitionTo::stay(other),
                        },
                    );
                })
                .on_transition(|transition| {
                    if let Transition::Valid {
                        side_effect: Some(command),
                        ..
                    } = transition
                    {
                        println!("  -> hardware command: {command:?}");
                    }
                });
        })
        .unwrap();

    println!("Initial state: {:?}\n", machine.current_state());

    let events = [
        TurnstileEvent::InsertCoin(10),
        TurnstileEvent::AdmitPerson,
        TurnstileEvent::InsertCoin(25),
        TurnstileEvent::InsertCoin(25),
        TurnstileEvent::InsertCoin(5),
        TurnstileEvent::AdmitPerson,
        TurnstileEvent::InsertCoin(15),
        TurnstileEvent::MachineDidFail,
        TurnstileEvent::InsertCoin(50),
        TurnstileEvent::MachineRepairDidComplete,
    ];

    for event in events {
        println!("Event: {event:?}");
        match machine.transition(event) {
            Ok(Transition::Valid { to_state, .. }) => println!("  now {to_state:?}"),
            Ok(Transition::Invalid { from_state, .. }) => {
                println!("  ignored while {from_state:?}")
            }
            Err(e) => println!("  error: {e}"),
        }
    }

    println!("\nFinal state: {:?}", machine.current_state());
    println!("\n=== Example Complete ===");
}
