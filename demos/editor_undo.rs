//! Editor Workflow with History Management
//!
//! This example demonstrates a linear document workflow and the history
//! management operations.
//!
//! Key concepts:
//! - Linear workflows via linear_config()
//! - reset() returns to the initial state without touching history
//! - clear_history() drops the undo stack only
//!
//! Run with: cargo run --example editor_undo

use waypoint::builder::linear_config;
use waypoint::core::StateMachine;

fn main() {
    println!("=== Editor Workflow ===\n");

    let config = linear_config(&["draft", "review", "approved", "published"]).unwrap();
    let mut doc = StateMachine::new(config);

    println!("Workflow: {:?}", doc.states());
    println!("Initial state: {}\n", doc.current_state());

    while doc.trigger("next").is_ok() {
        println!("  advanced to: {}", doc.current_state());
    }
    println!(
        "Reached '{}'; undo depth is {}\n",
        doc.current_state(),
        doc.history().undo_depth()
    );

    println!("reset() returns to the initial state but keeps history:");
    doc.reset();
    println!(
        "  state: {}, undo depth: {}",
        doc.current_state(),
        doc.history().undo_depth()
    );
    doc.undo();
    println!("  undo steps into pre-reset history: {}\n", doc.current_state());

    println!("clear_history() drops the undo stack, keeps the redo stack:");
    doc.clear_history();
    println!(
        "  can_undo: {}, can_redo: {}",
        doc.can_undo(),
        doc.can_redo()
    );
    doc.redo();
    println!("  redo still works: {}", doc.current_state());

    println!("\n=== Example Complete ===");
}
