use super::*;

#[test]
fn test_full_document() {
    let overrides = Overrides::from_json(
        r#"{
            "xoverSystem": { "dragoon": "UX" },
            "bladeConfig": { "hells_scythe": "standard" },
            "assistShort": { "slash": "S" },
            "chipShort": { "dran": "Dr" },
            "bitShort": { "gear ball": "GB" }
        }"#,
    )
    .unwrap();
    assert_eq!(overrides.xover_system("dragoon"), Some("UX"));
    assert_eq!(overrides.blade_config("hells_scythe"), Some("standard"));
    assert_eq!(overrides.assist_short("slash"), Some("S"));
    assert_eq!(overrides.chip_short("dran"), Some("Dr"));
    assert_eq!(overrides.bit_short("Gear Ball"), Some("GB"));
}

#[test]
fn test_missing_keys_default_to_empty() {
    let overrides = Overrides::from_json(r#"{ "chipShort": { "dran": "D" } }"#).unwrap();
    assert!(overrides.xover_system.is_empty());
    assert!(overrides.blade_config.is_empty());
    assert!(overrides.assist_short.is_empty());
    assert!(overrides.bit_short.is_empty());
    assert_eq!(overrides.chip_short.len(), 1);
}

#[test]
fn test_null_key_is_empty() {
    let overrides = Overrides::from_json(r#"{ "bitShort": null }"#).unwrap();
    assert!(overrides.is_empty());
}

#[test]
fn test_unknown_keys_ignored() {
    let overrides = Overrides::from_json(r#"{ "comment": "curated by hand" }"#).unwrap();
    assert!(overrides.is_empty());
}

#[test]
fn test_top_level_must_be_object() {
    assert!(Overrides::from_json("[]").is_err());
    assert!(Overrides::from_json("\"bitShort\"").is_err());
}

#[test]
fn test_malformed_json() {
    assert!(Overrides::from_json("{ not json").is_err());
}

#[test]
fn test_blade_lookups_use_raw_stem() {
    let overrides = Overrides::from_json(r#"{ "bladeConfig": { "Hells_Scythe": "standard" } }"#)
        .unwrap();
    assert_eq!(overrides.blade_config("Hells_Scythe"), Some("standard"));
    assert_eq!(overrides.blade_config("hells_scythe"), None);
}

#[test]
fn test_empty_system_override_kept() {
    let overrides = Overrides::from_json(r#"{ "xoverSystem": { "wizard": "" } }"#).unwrap();
    assert_eq!(overrides.xover_system("wizard"), Some(""));
}

#[test]
fn test_short_lookups_lowercase_key() {
    let overrides = Overrides::from_json(r#"{ "assistShort": { "slash": "S" } }"#).unwrap();
    assert_eq!(overrides.assist_short("SLASH"), Some("S"));
}
