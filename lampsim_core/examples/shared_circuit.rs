//! Shared Circuit Example
//!
//! One mains supply behind a shared handle, two lamps on it. The stage
//! wash's over-capacity draw blows the circuit for both. That failure mode is
//! exactly what the shared wiring strategy makes visible.
//!
//! Run with `cargo run --example shared_circuit -p lampsim_core`.

use lampsim_core::{Lamp, LampProfile, SharedPower};
use lampsim_power::GridSupply;

fn main() -> Result<(), eyre::Report> {
    let shared = SharedPower::new(GridSupply::mains());

    let mut floor = Lamp::builder()
        .with_name("The lamp")
        .with_power(shared.clone())
        .with_profile(LampProfile::FLOOR)
        .build()?;
    let mut wash = Lamp::builder()
        .with_name("Stage wash")
        .with_power(shared.clone())
        .with_profile(LampProfile::HIGH_OUTPUT)
        .build()?;

    println!("floor lamp: {:?}", floor.turn_on()?); // lights
    println!("stage wash: {:?}", wash.turn_on()?); // blows the circuit
    println!("floor lamp: {:?}", floor.turn_on()?); // dark from now on

    Ok(())
}
