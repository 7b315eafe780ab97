use tf2_schema_catalog::{CatalogIndex, RawCatalog, SchemaError};

const FIXTURE: &str = include_str!("../../testdata/schema.json");

fn fixture() -> CatalogIndex {
    let raw: RawCatalog = serde_json::from_str(FIXTURE).unwrap();
    CatalogIndex::build(raw).unwrap()
}

fn fixture_value() -> serde_json::Value {
    serde_json::from_str(FIXTURE).unwrap()
}

fn build_from(value: serde_json::Value) -> Result<CatalogIndex, SchemaError> {
    let raw: RawCatalog = serde_json::from_value(value).unwrap();
    CatalogIndex::build(raw)
}

#[test]
fn defindex_lookup_on_unsorted_items() {
    let index = fixture();
    // 30474 comes first in the fixture, ahead of much smaller defindexes.
    assert_eq!(index.items()[0].defindex, 30474);
    assert_eq!(index.item_by_defindex(30474).unwrap().item_name, "Nostromo Napalmer");
    assert_eq!(index.item_by_defindex(18).unwrap().item_name, "Rocket Launcher");
    assert_eq!(index.item_by_defindex(20003).unwrap().item_name, "Fabricator");
    assert!(index.item_by_defindex(99999).is_none());
}

#[test]
fn every_item_is_found_by_defindex() {
    let index = fixture();
    for item in index.items() {
        assert_eq!(
            index.item_by_defindex(item.defindex).map(|found| found.defindex),
            Some(item.defindex)
        );
    }
}

#[test]
fn name_lookup_is_case_insensitive() {
    let index = fixture();
    assert_eq!(index.item_by_name("black box").unwrap().defindex, 228);
    assert_eq!(index.item_by_name("BLACK BOX").unwrap().defindex, 228);
    assert!(index.item_by_name("The Black Box").is_none());
}

#[test]
fn name_lookup_skips_stock_quality() {
    let index = fixture();
    assert_eq!(index.item_by_name("Rocket Launcher").unwrap().defindex, 205);
}

#[test]
fn name_lookup_skips_deprecated_name_tag() {
    let index = fixture();
    assert_eq!(index.item_by_name("Name Tag").unwrap().defindex, 5020);
}

#[test]
fn shared_display_name_resolves_to_first_entry() {
    let index = fixture();
    assert_eq!(index.item_by_name("Mann Co. Supply Crate").unwrap().defindex, 5022);
    assert_eq!(index.item_by_name("Kit").unwrap().defindex, 6523);
}

#[test]
fn lenient_lookup_fixes_article() {
    let index = fixture();
    assert_eq!(index.item_by_name_lenient("The Team Captain").unwrap().defindex, 378);
    assert_eq!(
        index.item_by_name_lenient("Mann of the Seven Sees").unwrap().defindex,
        30319
    );
}

#[test]
fn internal_name_lookup() {
    let index = fixture();
    assert_eq!(index.item_by_internal_name("paintkit 200").unwrap().defindex, 16200);
    assert_eq!(
        index.item_by_internal_name("Team Captain Strangifier").unwrap().defindex,
        6536
    );
}

#[test]
fn quality_lookups() {
    let index = fixture();
    assert_eq!(index.quality_name(11), Some("Strange"));
    assert_eq!(index.quality_id_by_name("collector's"), Some(14));
    assert_eq!(index.quality_id_by_name("Decorated Weapon"), Some(15));
    assert_eq!(index.quality_name(99), None);
}

#[test]
fn effect_lookups() {
    let index = fixture();
    assert_eq!(index.effect_name(13), Some("Burning Flames"));
    assert_eq!(index.effect_name(3001), Some("Showstopper"));
    assert_eq!(index.effect_id_by_name("energy orb"), Some(704));
    assert_eq!(index.effect_name(1), None);
    let effects = index.unusual_effects();
    assert_eq!(effects.first(), Some(&(4, "Community Sparkle")));
    assert_eq!(effects.len(), 12);
}

#[test]
fn skin_lookups() {
    let index = fixture();
    assert_eq!(index.skin_name(200), Some("Hot Rod"));
    assert_eq!(index.skin_id_by_name("woodsy widowmaker mk.ii"), Some(202));
    let ids: Vec<u32> = index.skins().keys().copied().collect();
    assert_eq!(ids, vec![102, 200, 201, 202, 300]);
}

#[test]
fn attribute_lookup() {
    let index = fixture();
    assert_eq!(
        index.attribute_by_defindex(187).unwrap().name,
        "set supply crate series"
    );
    assert!(index.attribute_by_defindex(1).is_none());
}

#[test]
fn crate_series_from_item_and_static_table() {
    let index = fixture();
    let series = |defindex| index.crate_series(index.item_by_defindex(defindex).unwrap());
    assert_eq!(series(5022), Some(1));
    assert_eq!(series(5045), Some(3));
    assert_eq!(series(5734), Some(82));
    assert_eq!(series(5739), Some(89));
    assert_eq!(series(5068), None);
}

#[test]
fn missing_tables_are_malformed() {
    for table in [
        "items",
        "qualities",
        "qualityNames",
        "attribute_controlled_attached_particles",
        "paintkits",
        "kill_eater_score_types",
    ] {
        let mut value = fixture_value();
        value["raw"]["schema"].as_object_mut().unwrap().remove(table);
        let err = build_from(value).unwrap_err();
        assert!(
            matches!(&err, SchemaError::MalformedCatalog(msg) if msg.contains(table)),
            "{table}: {err}"
        );
    }
}

#[test]
fn quality_without_display_name_is_malformed() {
    let mut value = fixture_value();
    value["raw"]["schema"]["qualityNames"]
        .as_object_mut()
        .unwrap()
        .remove("strange");
    assert!(matches!(build_from(value), Err(SchemaError::MalformedCatalog(_))));
}

#[test]
fn non_numeric_paintkit_is_skipped() {
    let mut value = fixture_value();
    value["raw"]["schema"]["paintkits"]["bogus"] = "Nope".into();
    let index = build_from(value).unwrap();
    assert_eq!(index.skins().len(), 6);
}

#[test]
fn missing_items_game_is_tolerated() {
    let mut value = fixture_value();
    value["raw"].as_object_mut().unwrap().remove("items_game");
    let index = build_from(value).unwrap();
    let munition = index.item_by_defindex(5734).unwrap();
    assert_eq!(index.crate_series(munition), None);
}

#[test]
fn item_for_attributes() {
    let index = fixture();
    let attrs = tf2_schema_core::Attributes::item(228, 6);
    assert_eq!(index.item_for(&attrs).unwrap().item_name, "Black Box");
    assert!(index.item_for(&tf2_schema_core::Attributes::new()).is_none());
}
