use beyparts_catalog::{
    BladeCategory, BladeConfig, BladeSystem, Entry, Manifest, Parts, RatchetType, SCHEMA_VERSION,
    SummaryReport,
};

fn blade() -> Entry {
    Entry::new("dran-sword-bx", "Dran Sword", "Dran Sword", "blade/bx/dran_sword.webp")
        .with_blade_tags(BladeSystem::Bx, BladeConfig::Integrated, BladeCategory::Canon)
}

#[test]
fn blade_entry_field_order() {
    let json = serde_json::to_string(&blade()).unwrap();
    assert_eq!(
        json,
        r#"{"id":"dran-sword-bx","name":"Dran Sword","short":"Dran Sword","system":"BX","config":"integrated","category":"canon","path":"blade/bx/dran_sword.webp","aliases":[]}"#
    );
}

#[test]
fn ratchet_entry_uses_type_key() {
    let entry = Entry::new("1-60", "1-60", "1-60", "rachet/standard/1-60.webp")
        .with_ratchet_type(RatchetType::Standard);
    let json = serde_json::to_string(&entry).unwrap();
    assert_eq!(
        json,
        r#"{"id":"1-60","name":"1-60","short":"1-60","type":"standard","path":"rachet/standard/1-60.webp","aliases":[]}"#
    );
}

#[test]
fn plain_entry_omits_category_fields() {
    let entry = Entry::new("dran-chip", "Dran Chip", "Dran", "blade/chip/dran.webp");
    let value = serde_json::to_value(&entry).unwrap();
    let obj = value.as_object().unwrap();
    assert!(!obj.contains_key("system"));
    assert!(!obj.contains_key("config"));
    assert!(!obj.contains_key("category"));
    assert!(!obj.contains_key("type"));
}

#[test]
fn override_system_serialized_verbatim() {
    let system = BladeSystem::from("bx");
    assert_eq!(system, BladeSystem::Other("bx".to_string()));
    assert_eq!(serde_json::to_string(&system).unwrap(), r#""bx""#);
    assert_eq!(BladeSystem::from("UX"), BladeSystem::Ux);
}

#[test]
fn canonical_system_codes() {
    assert_eq!(BladeSystem::Bx.code(), "bx");
    assert_eq!(BladeSystem::Cx.code(), "cx");
}

#[test]
fn config_round_trips_unknown_values() {
    let config: BladeConfig = serde_json::from_str(r#""hybrid""#).unwrap();
    assert_eq!(config.as_str(), "hybrid");
    let config: BladeConfig = serde_json::from_str(r#""standard""#).unwrap();
    assert_eq!(config, BladeConfig::Standard);
}

#[test]
fn manifest_key_order() {
    let manifest = Manifest {
        schema: SCHEMA_VERSION,
        version: "2026-10-15+0".to_string(),
        parts: Parts::default(),
    };
    let json = serde_json::to_string(&manifest).unwrap();
    assert_eq!(
        json,
        r#"{"schema":1,"version":"2026-10-15+0","parts":{"blade":[],"rachet":[],"bit":[],"chip":[],"assist":[]}}"#
    );
}

#[test]
fn summary_counts() {
    let mut parts = Parts::default();
    parts.blade.push(blade());
    parts.blade.push(blade());
    parts
        .chip
        .push(Entry::new("dran-chip", "Dran Chip", "Dran", "blade/chip/dran.webp"));

    let summary = parts.summary();
    assert_eq!(summary.blades, 2);
    assert_eq!(summary.chips, 1);
    assert_eq!(summary.rachets, 0);
    assert_eq!(parts.total(), 3);

    let json = serde_json::to_string(&SummaryReport { summary }).unwrap();
    assert_eq!(
        json,
        r#"{"summary":{"blades":2,"rachets":0,"bits":0,"chips":1,"assists":0}}"#
    );
}
