//! Quick Start Example
//!
//! Demonstrates the primary wiring configuration: construct a power source
//! externally and inject it into the lamp's builder.
//!
//! Run with `cargo run --example quick_start -p lampsim_core`.

use lampsim_core::{Lamp, LampProfile, LampStatus};
use lampsim_power::GridSupply;

fn main() -> Result<(), eyre::Report> {
    // Build a lamp around an injected mains supply (120 V, 1000 A ceiling).
    let mut lamp = Lamp::builder()
        .with_name("The lamp")
        .with_power(GridSupply::mains())
        .with_profile(LampProfile::FLOOR)
        .build()?;

    for attempt in 1..=3 {
        match lamp.turn_on()? {
            LampStatus::Lit { lumens } => {
                println!("attempt {attempt}: {} produced {lumens} lumens", lamp.name());
            }
            LampStatus::Dark(reason) => {
                println!("attempt {attempt}: {} stayed dark ({reason:?})", lamp.name());
            }
        }
    }

    Ok(())
}
