//! Mouse Trap State Machine
//!
//! This example runs the bundled event script through the trap.
//!
//! Key concepts:
//! - Table-driven transitions declared once
//! - Unexpected events warn and keep the current state
//! - Status lines captured with a `Recorder` instead of stdout
//! - History of every state entered
//!
//! Run with: cargo run --example mouse_trap

use mousetrap::core::State;
use mousetrap::effects::Recorder;
use mousetrap::script::{Script, ScriptRunner};
use mousetrap::trap::new_trap;

fn main() {
    println!("=== Mouse Trap State Machine ===\n");

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/MouseMoves.txt");
    let script = match Script::from_path(path) {
        Ok(script) => script,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let mut trap = new_trap(Recorder::new());
    let report = match ScriptRunner::default().run(&mut trap, &script) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    println!("Status lines:");
    for line in trap.sink().lines() {
        println!("  {line}");
    }

    let path: Vec<&str> = trap
        .history()
        .get_path()
        .into_iter()
        .map(|state| state.name())
        .collect();

    println!("\nStates entered: {}", path.join(" -> "));
    println!("Events applied: {}", report.events_applied);
    println!("Unexpected events: {}", report.unexpected_events);
    println!("Final state: {}", report.final_state);

    println!("\n=== Example Complete ===");
}
