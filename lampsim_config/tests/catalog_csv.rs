use std::fs::File;
use std::io::Write;

use lampsim_config::{LampEntry, Wiring, load_catalog_csv, resolve_ratings};
use rstest::rstest;
use tempfile::tempdir;

fn write_csv(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = File::create(&path).expect("create csv");
    f.write_all(body.as_bytes()).expect("write csv");
    path
}

#[rstest]
fn loads_well_formed_catalog() {
    let dir = tempdir().expect("tempdir");
    let path = write_csv(
        &dir,
        "catalog.csv",
        "name,amps_needed,max_voltage,lumens\nfloor,15.0,120.0,30.0\nhigh-output,1500.0,120.0,9001.0\n",
    );
    let rows = load_catalog_csv(&path).expect("load catalog");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "floor");
    assert!((rows[1].lumens - 9001.0).abs() < 1e-9);
}

#[rstest]
fn rejects_wrong_headers() {
    let dir = tempdir().expect("tempdir");
    let path = write_csv(&dir, "catalog.csv", "lamp,amps,volts,lm\nfloor,15,120,30\n");
    let err = load_catalog_csv(&path).expect_err("should reject headers");
    assert!(
        format!("{err}").contains("must have headers 'name,amps_needed,max_voltage,lumens'"),
        "unexpected error: {err}"
    );
}

#[rstest]
fn rejects_malformed_row_with_index() {
    let dir = tempdir().expect("tempdir");
    let path = write_csv(
        &dir,
        "catalog.csv",
        "name,amps_needed,max_voltage,lumens\nfloor,fifteen,120.0,30.0\n",
    );
    let err = load_catalog_csv(&path).expect_err("should reject bad row");
    assert!(format!("{err}").contains("invalid CSV row 2"));
}

#[rstest]
fn rejects_duplicate_catalog_names() {
    let dir = tempdir().expect("tempdir");
    let path = write_csv(
        &dir,
        "catalog.csv",
        "name,amps_needed,max_voltage,lumens\nfloor,15.0,120.0,30.0\nfloor,20.0,120.0,40.0\n",
    );
    let err = load_catalog_csv(&path).expect_err("should reject duplicate");
    assert!(format!("{err}").contains("duplicate catalog entry 'floor'"));
}

#[rstest]
fn rejects_negative_ratings_in_catalog() {
    let dir = tempdir().expect("tempdir");
    let path = write_csv(
        &dir,
        "catalog.csv",
        "name,amps_needed,max_voltage,lumens\nfloor,-1.0,120.0,30.0\n",
    );
    let err = load_catalog_csv(&path).expect_err("should reject negative amps");
    assert!(format!("{err}").contains("amps_needed must be finite and >= 0"));
}

fn entry(profile: Option<&str>) -> LampEntry {
    LampEntry {
        name: "the lamp".into(),
        source: "mains".into(),
        wiring: Wiring::Shared,
        profile: profile.map(String::from),
        amps_needed: None,
        max_voltage: None,
        lumens: None,
    }
}

#[test]
fn resolves_ratings_from_catalog() {
    let dir = tempdir().expect("tempdir");
    let path = write_csv(
        &dir,
        "catalog.csv",
        "name,amps_needed,max_voltage,lumens\nfloor,15.0,120.0,30.0\n",
    );
    let catalog = load_catalog_csv(&path).expect("load catalog");
    let r = resolve_ratings(&entry(Some("floor")), &catalog).expect("resolve");
    assert_eq!(r.amps_needed, 15.0);
    assert_eq!(r.lumens, 30.0);
}

#[test]
fn unknown_profile_is_an_error() {
    let err = resolve_ratings(&entry(Some("chandelier")), &[]).expect_err("should fail");
    assert!(format!("{err}").contains("unknown catalog profile 'chandelier'"));
}

#[test]
fn inline_ratings_take_no_catalog() {
    let mut e = entry(None);
    e.amps_needed = Some(15.0);
    e.max_voltage = Some(120.0);
    e.lumens = Some(30.0);
    let r = resolve_ratings(&e, &[]).expect("resolve inline");
    assert_eq!(r.max_voltage, 120.0);
}
