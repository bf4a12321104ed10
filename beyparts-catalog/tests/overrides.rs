use beyparts_catalog::{OverrideError, Overrides, load_overrides};
use std::fs;
use tempfile::TempDir;

#[test]
fn load_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.json");
    fs::write(
        &path,
        r#"{ "xoverSystem": { "dragoon": "UX" }, "bitShort": { "gear ball": "G" } }"#,
    )
    .unwrap();

    let overrides = load_overrides(&path).unwrap();
    assert_eq!(overrides.xover_system("dragoon"), Some("UX"));
    assert_eq!(overrides.bit_short("gear ball"), Some("G"));
}

#[test]
fn missing_file_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = load_overrides(&tmp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, OverrideError::Io { .. }));
}

#[test]
fn malformed_file_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.json");
    fs::write(&path, "{ \"bitShort\": ").unwrap();
    let err = load_overrides(&path).unwrap_err();
    assert!(matches!(err, OverrideError::Parse { .. }));
}

#[test]
fn load_or_default_swallows_errors() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(
        Overrides::load_or_default(&tmp.path().join("nope.json")),
        Overrides::default()
    );

    let bad = tmp.path().join("bad.json");
    fs::write(&bad, "[1, 2, 3]").unwrap();
    assert!(Overrides::load_or_default(&bad).is_empty());
}

#[test]
fn load_or_default_reads_valid_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.json");
    fs::write(&path, r#"{ "chipShort": { "dran": "D" } }"#).unwrap();
    assert_eq!(
        Overrides::load_or_default(&path).chip_short("dran"),
        Some("D")
    );
}
