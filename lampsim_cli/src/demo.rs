//! The fixed demonstration sequence: one short script per wiring strategy.

use lampsim_core::{Lamp, LampProfile, LampStatus, PerCallPower, SharedPower};
use lampsim_power::{GridSupply, ReserveSupply};

use crate::cli::WiringArg;

pub fn run_demo(only: Option<WiringArg>) -> eyre::Result<()> {
    let want = |w: WiringArg| only.is_none() || only == Some(w);
    if want(WiringArg::Shared) {
        shared_demo()?;
    }
    if want(WiringArg::PerCall) {
        per_call_demo()?;
    }
    if want(WiringArg::Injected) {
        injected_demo()?;
    }
    Ok(())
}

fn report(lamp: &mut Lamp) -> eyre::Result<()> {
    match lamp.turn_on()? {
        LampStatus::Lit { lumens } => {
            println!("{} turned on and produced {lumens} lumens.", lamp.name());
        }
        LampStatus::Dark(_) => {
            println!("Not enough power to turn on {}.", lamp.name());
        }
    }
    Ok(())
}

/// Every lamp on one mains circuit. The overload from the wall wash blows the
/// breaker for the floor lamp too.
fn shared_demo() -> eyre::Result<()> {
    println!("== shared wiring: every lamp on one mains circuit ==");
    let mains = SharedPower::new(GridSupply::mains());

    let mut floor = Lamp::builder()
        .with_name("the floor lamp")
        .with_profile(LampProfile::FLOOR)
        .with_power(mains.clone())
        .build()?;
    let mut wash = Lamp::builder()
        .with_name("the high-output wall wash")
        .with_profile(LampProfile::HIGH_OUTPUT)
        .with_power(mains.clone())
        .build()?;

    report(&mut floor)?;
    report(&mut wash)?;
    report(&mut floor)?;
    Ok(())
}

/// A brand-new circuit per request. The overload never sticks, so the floor
/// lamp lights again right after the wall wash blew "the" breaker.
fn per_call_demo() -> eyre::Result<()> {
    println!("== per-call wiring: a fresh circuit per request (masks faults) ==");
    let circuit = SharedPower::new(PerCallPower::new(GridSupply::mains));

    let mut floor = Lamp::builder()
        .with_name("the floor lamp")
        .with_profile(LampProfile::FLOOR)
        .with_power(circuit.clone())
        .build()?;
    let mut wash = Lamp::builder()
        .with_name("the high-output wall wash")
        .with_profile(LampProfile::HIGH_OUTPUT)
        .with_power(circuit.clone())
        .build()?;

    report(&mut floor)?;
    report(&mut wash)?;
    report(&mut floor)?;
    Ok(())
}

/// Each lamp owns an isolated source; one lamp's blown breaker cannot darken
/// another. Also shows a battery-backed lamp going dark as its reserve drains.
fn injected_demo() -> eyre::Result<()> {
    println!("== injected wiring: each lamp owns an isolated source ==");

    let mut desk = Lamp::builder()
        .with_name("the desk lamp")
        .with_profile(LampProfile::FLOOR)
        .with_power(GridSupply::lightweight())
        .build()?;
    let mut wash = Lamp::builder()
        .with_name("the high-output wall wash")
        .with_profile(LampProfile::HIGH_OUTPUT)
        .with_power(GridSupply::lightweight())
        .build()?;

    report(&mut wash)?;
    report(&mut desk)?;

    let mut lantern = Lamp::builder()
        .with_name("the camping lantern")
        .with_profile(LampProfile::FLOOR)
        .with_power(ReserveSupply::new(120.0, 15.0, 3600.0))
        .build()?;
    for _ in 0..3 {
        report(&mut lantern)?;
    }
    Ok(())
}
