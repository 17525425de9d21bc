//! Config-driven runs: source construction, lamp assembly, turn-on loop.

use std::collections::HashMap;

use eyre::WrapErr;
use lampsim_config::{CatalogRow, Config, SourceEntry, SourceKind, Wiring};
use lampsim_core::{DarkReason, Lamp, LampProfile, LampStatus, PerCallPower, SharedPower};
use lampsim_power::{GridSupply, ReserveSupply};
use lampsim_traits::PowerSource;

use crate::cli::JSON_MODE;

/// Build a fresh source instance from its config entry.
fn make_supply(entry: &SourceEntry) -> Box<dyn PowerSource + Send> {
    match entry.kind {
        SourceKind::Grid => Box::new(GridSupply::new(entry.voltage, entry.max_amperage)),
        SourceKind::Reserve => {
            // Config::validate guarantees reserve_wh is present here.
            let wh = entry.reserve_wh.unwrap_or(0.0);
            let supply = ReserveSupply::new(entry.voltage, entry.max_amperage, wh);
            match entry.draw_hours {
                Some(h) => Box::new(supply.with_draw_hours(h)),
                None => Box::new(supply),
            }
        }
    }
}

pub fn run_lamps(cfg: &Config, catalog: &[CatalogRow], repeat: u32) -> eyre::Result<()> {
    let json = *JSON_MODE.get().unwrap_or(&false);
    let sources: HashMap<&str, &SourceEntry> =
        cfg.sources.iter().map(|s| (s.name.as_str(), s)).collect();

    // One shared instance per named source, created lazily on first use.
    let mut shared: HashMap<String, SharedPower> = HashMap::new();
    let mut lamps: Vec<Lamp> = Vec::new();

    for entry in &cfg.lamps {
        let src = sources.get(entry.source.as_str()).ok_or_else(|| {
            eyre::eyre!("lamp '{}': unknown source '{}'", entry.name, entry.source)
        })?;
        let ratings = lampsim_config::resolve_ratings(entry, catalog)
            .wrap_err_with(|| format!("resolving ratings for lamp '{}'", entry.name))?;
        let profile = LampProfile::from(ratings);

        let builder = Lamp::builder()
            .with_name(&entry.name)
            .with_profile(profile);
        let lamp = match entry.wiring {
            Wiring::Shared => {
                let handle = shared
                    .entry(entry.source.clone())
                    .or_insert_with(|| SharedPower::new(make_supply(src)));
                builder.with_power(handle.clone()).build()?
            }
            Wiring::Injected => builder.with_power(make_supply(src)).build()?,
            Wiring::PerCall => {
                let params = (*src).clone();
                builder
                    .with_power(PerCallPower::new(move || make_supply(&params)))
                    .build()?
            }
        };
        tracing::debug!(
            lamp = %entry.name,
            source = %entry.source,
            wiring = ?entry.wiring,
            "lamp wired"
        );
        lamps.push(lamp);
    }

    let mut results = Vec::new();
    for attempt in 1..=repeat {
        for lamp in &mut lamps {
            let status = lamp.turn_on()?;
            let lumens = match &status {
                LampStatus::Lit { lumens } => Some(*lumens),
                LampStatus::Dark(_) => None,
            };
            if json {
                results.push(serde_json::json!({
                    "lamp": lamp.name(),
                    "attempt": attempt,
                    "lit": status.is_lit(),
                    "lumens": lumens,
                    "volts": lamp.last_sample().map(|s| s.volts()),
                    "amps": lamp.last_sample().map(|s| s.amps()),
                }));
            } else {
                match &status {
                    LampStatus::Lit { lumens } => {
                        println!("{} turned on and produced {lumens} lumens.", lamp.name());
                    }
                    LampStatus::Dark(reason) => {
                        let why = match reason {
                            DarkReason::BurnedOut => "it has burned out",
                            DarkReason::InsufficientCurrent => "not enough power",
                        };
                        println!("{} stayed dark ({why}).", lamp.name());
                    }
                }
            }
        }
    }

    if json {
        println!("{}", serde_json::json!({ "results": results }));
    }
    Ok(())
}
