#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schemas and lamp-catalog parsing for the lamp simulation.
//!
//! - `Config` and sub-structs are deserialized from TOML and validated.
//! - The lamp-catalog CSV loader enforces headers and reports row-indexed
//!   errors, so a bad catalog fails loudly instead of lighting the wrong lamp.

use serde::Deserialize;

/// Electrical/photometric ratings for one lamp type.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Ratings {
    pub amps_needed: f64,
    pub max_voltage: f64,
    pub lumens: f64,
}

/// How a lamp obtains its power source.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Wiring {
    /// One shared instance per named source; a blow affects every lamp on it.
    #[default]
    Shared,
    /// A fresh, isolated instance built from the named source's parameters.
    Injected,
    /// A brand-new instance per request. Masks the fault latch; kept as the
    /// anti-pattern demonstration.
    PerCall,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Grid,
    Reserve,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceEntry {
    pub name: String,
    #[serde(default)]
    pub kind: SourceKind,
    pub voltage: f64,
    pub max_amperage: f64,
    /// Reserve capacity in watt-hours; required when kind = "reserve".
    pub reserve_wh: Option<f64>,
    /// Nominal draw interval per request, in hours (reserve only).
    pub draw_hours: Option<f64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LampEntry {
    pub name: String,
    /// Name of the `[[source]]` entry this lamp draws from.
    pub source: String,
    #[serde(default)]
    pub wiring: Wiring,
    /// Named catalog profile; mutually exclusive with the inline ratings.
    pub profile: Option<String>,
    pub amps_needed: Option<f64>,
    pub max_voltage: Option<f64>,
    pub lumens: Option<f64>,
}

impl LampEntry {
    /// The inline ratings, when all three fields are present.
    pub fn inline_ratings(&self) -> Option<Ratings> {
        match (self.amps_needed, self.max_voltage, self.lumens) {
            (Some(amps_needed), Some(max_voltage), Some(lumens)) => Some(Ratings {
                amps_needed,
                max_voltage,
                lumens,
            }),
            _ => None,
        }
    }

    fn has_partial_ratings(&self) -> bool {
        let given = [self.amps_needed, self.max_voltage, self.lumens]
            .iter()
            .filter(|v| v.is_some())
            .count();
        given > 0 && given < 3
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (JSON lines)
    pub level: Option<String>, // "info","debug"
    /// Log rotation policy: "never" | "daily" | "hourly" (default: never)
    pub rotation: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default, rename = "source")]
    pub sources: Vec<SourceEntry>,
    #[serde(default, rename = "lamp")]
    pub lamps: Vec<LampEntry>,
    #[serde(default)]
    pub logging: Logging,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        // Sources
        let mut names = std::collections::HashSet::new();
        for src in &self.sources {
            if src.name.is_empty() {
                eyre::bail!("source.name must not be empty");
            }
            if !names.insert(src.name.as_str()) {
                eyre::bail!("duplicate source name '{}'", src.name);
            }
            if !(src.voltage.is_finite() && src.voltage > 0.0) {
                eyre::bail!("source '{}': voltage must be > 0", src.name);
            }
            if !(src.max_amperage.is_finite() && src.max_amperage > 0.0) {
                eyre::bail!("source '{}': max_amperage must be > 0", src.name);
            }
            match src.kind {
                SourceKind::Reserve => {
                    let Some(wh) = src.reserve_wh else {
                        eyre::bail!("source '{}': reserve_wh is required for kind = \"reserve\"", src.name);
                    };
                    if !(wh.is_finite() && wh > 0.0) {
                        eyre::bail!("source '{}': reserve_wh must be > 0", src.name);
                    }
                    if let Some(h) = src.draw_hours
                        && !(h.is_finite() && h > 0.0)
                    {
                        eyre::bail!("source '{}': draw_hours must be > 0", src.name);
                    }
                }
                SourceKind::Grid => {
                    if src.reserve_wh.is_some() || src.draw_hours.is_some() {
                        eyre::bail!(
                            "source '{}': reserve_wh/draw_hours only apply to kind = \"reserve\"",
                            src.name
                        );
                    }
                }
            }
        }

        // Lamps
        let mut lamp_names = std::collections::HashSet::new();
        for lamp in &self.lamps {
            if lamp.name.is_empty() {
                eyre::bail!("lamp.name must not be empty");
            }
            if !lamp_names.insert(lamp.name.as_str()) {
                eyre::bail!("duplicate lamp name '{}'", lamp.name);
            }
            if !names.contains(lamp.source.as_str()) {
                eyre::bail!("lamp '{}': unknown source '{}'", lamp.name, lamp.source);
            }
            if lamp.has_partial_ratings() {
                eyre::bail!(
                    "lamp '{}': amps_needed, max_voltage and lumens must be given together",
                    lamp.name
                );
            }
            match (&lamp.profile, lamp.inline_ratings()) {
                (Some(_), Some(_)) => eyre::bail!(
                    "lamp '{}': give either a catalog profile or inline ratings, not both",
                    lamp.name
                ),
                (None, None) => eyre::bail!(
                    "lamp '{}': needs a catalog profile or inline ratings",
                    lamp.name
                ),
                (None, Some(r)) => validate_ratings(&lamp.name, &r)?,
                (Some(_), None) => {}
            }
        }

        // Logging
        if let Some(rot) = self.logging.rotation.as_deref()
            && !matches!(rot, "never" | "daily" | "hourly")
        {
            eyre::bail!("logging.rotation must be one of never|daily|hourly");
        }

        Ok(())
    }
}

fn validate_ratings(lamp: &str, r: &Ratings) -> eyre::Result<()> {
    if !(r.amps_needed.is_finite() && r.amps_needed >= 0.0) {
        eyre::bail!("lamp '{lamp}': amps_needed must be finite and >= 0");
    }
    if !(r.max_voltage.is_finite() && r.max_voltage > 0.0) {
        eyre::bail!("lamp '{lamp}': max_voltage must be > 0");
    }
    if !(r.lumens.is_finite() && r.lumens >= 0.0) {
        eyre::bail!("lamp '{lamp}': lumens must be finite and >= 0");
    }
    Ok(())
}

/// Lamp-catalog CSV schema.
///
/// Expected headers:
/// name,amps_needed,max_voltage,lumens
///
/// Example:
/// name,amps_needed,max_voltage,lumens
/// floor,15.0,120.0,30.0
/// high-output,1500.0,120.0,9001.0
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogRow {
    pub name: String,
    pub amps_needed: f64,
    pub max_voltage: f64,
    pub lumens: f64,
}

impl CatalogRow {
    pub fn ratings(&self) -> Ratings {
        Ratings {
            amps_needed: self.amps_needed,
            max_voltage: self.max_voltage,
            lumens: self.lumens,
        }
    }
}

pub fn load_catalog_csv(path: &std::path::Path) -> eyre::Result<Vec<CatalogRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| eyre::eyre!("open lamp catalog CSV {:?}: {}", path, e))?;

    // Enforce exact headers
    let headers = rdr
        .headers()
        .map_err(|e| eyre::eyre!("read CSV headers {:?}: {}", path, e))?
        .clone();
    let expected = ["name", "amps_needed", "max_voltage", "lumens"];
    let actual: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
    if actual != expected {
        eyre::bail!(
            "lamp catalog CSV must have headers 'name,amps_needed,max_voltage,lumens', got: {}",
            actual.join(",")
        );
    }

    let mut rows: Vec<CatalogRow> = Vec::new();
    for (idx, rec) in rdr.deserialize::<CatalogRow>().enumerate() {
        match rec {
            Ok(row) => {
                if rows.iter().any(|r| r.name == row.name) {
                    eyre::bail!("duplicate catalog entry '{}' at CSV row {}", row.name, idx + 2);
                }
                validate_ratings(&row.name, &row.ratings())
                    .map_err(|e| eyre::eyre!("invalid CSV row {}: {}", idx + 2, e))?;
                rows.push(row);
            }
            Err(e) => {
                eyre::bail!("invalid CSV row {}: {}", idx + 2, e);
            }
        }
    }

    Ok(rows)
}

/// Resolve the effective ratings for a lamp entry, consulting the catalog
/// when the entry references a named profile.
pub fn resolve_ratings(entry: &LampEntry, catalog: &[CatalogRow]) -> eyre::Result<Ratings> {
    if let Some(r) = entry.inline_ratings() {
        return Ok(r);
    }
    let Some(profile) = entry.profile.as_deref() else {
        eyre::bail!(
            "lamp '{}': needs a catalog profile or inline ratings",
            entry.name
        );
    };
    catalog
        .iter()
        .find(|row| row.name == profile)
        .map(CatalogRow::ratings)
        .ok_or_else(|| eyre::eyre!("lamp '{}': unknown catalog profile '{}'", entry.name, profile))
}
