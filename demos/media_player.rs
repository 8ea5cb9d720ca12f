//! Media Player State Machine
//!
//! This example demonstrates event-driven transitions with undo/redo.
//!
//! Key concepts:
//! - Event-driven transitions via trigger()
//! - Linear undo/redo of state changes
//! - Redo invalidation on new transitions
//! - Error handling for unknown events
//!
//! Run with: cargo run --example media_player

use waypoint::core::StateMachine;
use waypoint::machine_config;

fn main() {
    println!("=== Media Player State Machine ===\n");

    let config = machine_config! {
        initial: "idle",
        states: {
            "idle" => { "start" => "running" },
            "running" => { "stop" => "idle", "pause" => "paused" },
            "paused" => { "resume" => "running" },
        }
    }
    .unwrap();

    let mut player = StateMachine::new(config);
    println!("Initial state: {}", player.current_state());

    player.trigger("start").unwrap();
    println!("After 'start': {}", player.current_state());

    player.trigger("pause").unwrap();
    println!("After 'pause': {}\n", player.current_state());

    println!("Undo/redo:");
    player.undo();
    println!("  undo -> {}", player.current_state());
    player.redo();
    println!("  redo -> {}\n", player.current_state());

    println!("A new transition invalidates the redo stack:");
    player.undo();
    player.trigger("stop").unwrap();
    println!(
        "  undo, then 'stop' -> {} (redo available: {})\n",
        player.current_state(),
        player.can_redo()
    );

    println!("Unknown events are rejected without changing state:");
    match player.trigger("eject") {
        Ok(()) => unreachable!(),
        Err(err) => println!("  {err}"),
    }
    println!("  still in: {}\n", player.current_state());

    println!("States reacting to 'pause': {:?}", player.states_handling("pause"));
    println!("All states: {:?}", player.states());

    println!("\n=== Example Complete ===");
}
