//! Matter State Machine
//!
//! This example demonstrates listeners around phase changes of matter.
//!
//! Key concepts:
//! - Side effects interpreted by a transition listener
//! - Global enter/exit listeners running before state-scoped ones
//! - Deriving a machine that starts in another state
//!
//! Run with: RUST_LOG=debug cargo run --example matter

use stategraph::core::{State, Transition, TransitionTo};
use stategraph::{matcher, state_enum, StateMachine};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum MatterState {
        Solid,
        Liquid,
        Gas,
    }
}

#[derive(Clone, PartialEq, Debug)]
enum MatterEvent {
    OnMelted,
    OnFrozen,
    OnVaporized,
    OnCondensed,
}

#[derive(Clone, PartialEq, Debug)]
enum MatterSideEffect {
    LogMelted,
    LogFrozen,
    LogVaporized,
    LogCondensed,
}

fn message(side_effect: &MatterSideEffect) -> &'static str {
    match side_effect {
        MatterSideEffect::LogMelted => "I melted",
        MatterSideEffect::LogFrozen => "I froze",
        MatterSideEffect::LogVaporized => "I vaporized",
        MatterSideEffect::LogCondensed => "I condensed",
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Matter State Machine ===\n");

    let machine = StateMachine::<MatterState, MatterEvent, MatterSideEffect>::create(|graph| {
        graph
            .initial_state(MatterState::Solid)
            .on_enter(|state, cause| println!("  global enter {} by {cause:?}", state.name()))
            .on_exit(|state, cause| println!("  global exit {} by {cause:?}", state.name()))
            .state(matcher!(MatterState::Solid), |s| {
                s.on_enter(|_, _| println!("  enter Solid"))
                    .on_exit(|_, _| println!("  exit Solid"))
                    .on(matcher!(MatterEvent::OnMelted), |_, _| {
                        TransitionTo::new(MatterState::Liquid)
                            .with_side_effect(MatterSideEffect::LogMelted)
                    });
            })
            .state(matcher!(MatterState::Liquid), |s| {
                s.on_enter(|_, _| println!("  enter Liquid"))
                    .on_exit(|_, _| println!("  exit Liquid"))
                    .on(matcher!(MatterEvent::OnFrozen), |_, _| {
                        TransitionTo::new(MatterState::Solid)
                            .with_side_effect(MatterSideEffect::LogFrozen)
                    })
                    .on(matcher!(MatterEvent::OnVaporized), |_, _| {
                        TransitionTo::new(MatterState::Gas)
                            .with_side_effect(MatterSideEffect::LogVaporized)
                    });
            })
            .state(matcher!(MatterState::Gas), |s| {
                s.on_enter(|_, _| println!("  enter Gas"))
                    .on_exit(|_, _| println!("  exit Gas"))
                    .on(matcher!(MatterEvent::OnCondensed), |_, _| {
                        TransitionTo::new(MatterState::Liquid)
                            .with_side_effect(MatterSideEffect::LogCondensed)
                    });
            })
            .on_transition(|transition| match transition {
                Transition::Valid {
                    side_effect: Some(side_effect),
                    ..
                } => println!("  {}", message(side_effect)),
                Transition::Valid { .. } => {}
                Transition::Invalid { from_state, event } => {
                    println!("  {event:?} is not possible while {}", from_state.name())
                }
            });
    })
    .unwrap();

    println!("Initial state: {:?}\n", machine.current_state());

    for event in [
        MatterEvent::OnMelted,
        MatterEvent::OnVaporized,
        MatterEvent::OnMelted,
        MatterEvent::OnCondensed,
        MatterEvent::OnFrozen,
    ] {
        println!("Event: {event:?}");
        if let Err(e) = machine.transition(event) {
            println!("  error: {e}");
        }
    }

    println!("\nStarting a second machine already boiling:");
    let boiling = machine.derive(|graph| {
        graph.initial_state(MatterState::Gas);
    });
    println!("Initial state: {:?}", boiling.current_state());
    println!("Original machine still {:?}", machine.current_state());

    println!("\n=== Example Complete ===");
}
