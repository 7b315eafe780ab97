use tf2_schema_catalog::{CatalogIndex, RawCatalog};
use tf2_schema_core::{Attributes, KillstreakTier, Wear, quality};
use tf2_schema_names::{FormatOptions, format_name, format_name_with};

const FIXTURE: &str = include_str!("../../testdata/schema.json");

fn fixture() -> CatalogIndex {
    let raw: RawCatalog = serde_json::from_str(FIXTURE).unwrap();
    CatalogIndex::build(raw).unwrap()
}

fn name(index: &CatalogIndex, attributes: Attributes) -> String {
    format_name(index, &attributes).unwrap()
}

#[test]
fn proper_name_article() {
    let index = fixture();
    assert_eq!(name(&index, Attributes::item(228, quality::UNIQUE)), "The Black Box");
    let plain = format_name_with(
        &index,
        &Attributes::item(228, quality::UNIQUE),
        FormatOptions { proper_name: false },
    );
    assert_eq!(plain.as_deref(), Some("Black Box"));
}

#[test]
fn article_only_when_nothing_precedes() {
    let index = fixture();
    assert_eq!(name(&index, Attributes::item(228, quality::STRANGE)), "Strange Black Box");
    // Already part of the display name.
    assert_eq!(
        name(&index, Attributes::item(30319, quality::UNIQUE)),
        "The Mann of the Seven Sees"
    );
}

#[test]
fn unknown_defindex_formats_to_none() {
    let index = fixture();
    assert_eq!(format_name(&index, &Attributes::item(99999, quality::UNIQUE)), None);
    assert_eq!(format_name(&index, &Attributes::new()), None);
}

#[test]
fn unknown_target_formats_to_none() {
    let index = fixture();
    let mut kit = Attributes::item(6527, quality::UNIQUE).with_killstreak(KillstreakTier::Basic);
    kit.target = Some(99999);
    assert_eq!(format_name(&index, &kit), None);
}

#[test]
fn tradability_prefixes() {
    let index = fixture();
    let a = Attributes::item(228, quality::UNIQUE).untradable().uncraftable();
    assert_eq!(name(&index, a), "Non-Tradable Non-Craftable Black Box");
}

#[test]
fn unusual_label_hidden_by_effect() {
    let index = fixture();
    assert_eq!(
        name(&index, Attributes::item(378, quality::UNUSUAL).with_effect(13)),
        "Burning Flames Team Captain"
    );
    assert_eq!(
        name(&index, Attributes::item(378, quality::UNUSUAL)),
        "Unusual Team Captain"
    );
}

#[test]
fn intrinsic_unusual_always_shows_quality() {
    let index = fixture();
    assert_eq!(
        name(&index, Attributes::item(266, quality::UNUSUAL).with_effect(13)),
        "Unusual Burning Flames Horseless Headless Horsemann's Headtaker"
    );
}

#[test]
fn elevated_quality_comes_first() {
    let index = fixture();
    assert_eq!(
        name(
            &index,
            Attributes::item(378, quality::UNUSUAL)
                .with_effect(13)
                .with_quality2(quality::STRANGE)
        ),
        "Strange Burning Flames Team Captain"
    );
    assert_eq!(
        name(
            &index,
            Attributes::item(228, quality::GENUINE).with_quality2(quality::STRANGE)
        ),
        "Strange Genuine Black Box"
    );
}

#[test]
fn skin_and_wear() {
    let index = fixture();
    assert_eq!(
        name(
            &index,
            Attributes::item(205, quality::STRANGE).with_skin(200, Wear::FactoryNew)
        ),
        "Strange Hot Rod | Rocket Launcher (Factory New)"
    );
    assert_eq!(
        name(
            &index,
            Attributes::item(205, quality::DECORATED).with_skin(200, Wear::WellWorn)
        ),
        "Hot Rod | Rocket Launcher (Well-Worn)"
    );
    assert_eq!(
        name(
            &index,
            Attributes::item(205, quality::STRANGE)
                .with_effect(701)
                .with_skin(200, Wear::FieldTested)
        ),
        "Strange Hot Hot Rod | Rocket Launcher (Field-Tested)"
    );
}

#[test]
fn modifier_order() {
    let index = fixture();
    let mut a = Attributes::item(205, quality::STRANGE)
        .with_killstreak(KillstreakTier::Professional);
    a.australium = true;
    a.festivized = true;
    assert_eq!(
        name(&index, a),
        "Strange Festivized Professional Killstreak Australium Rocket Launcher"
    );
}

#[test]
fn kit_fabricator() {
    let index = fixture();
    let mut a = Attributes::item(20003, quality::UNIQUE)
        .with_killstreak(KillstreakTier::Professional);
    a.target = Some(593);
    a.output = Some(6526);
    a.output_quality = Some(quality::UNIQUE);
    assert_eq!(
        name(&index, a.clone()),
        "Professional Killstreak Third Degree Kit Fabricator"
    );

    a.output_quality = Some(quality::STRANGE);
    assert_eq!(
        name(&index, a),
        "Strange Professional Killstreak Third Degree Kit Fabricator"
    );
}

#[test]
fn killstreak_kit_and_strangifier() {
    let index = fixture();
    let mut kit = Attributes::item(6540, quality::UNIQUE).with_killstreak(KillstreakTier::Basic);
    kit.target = Some(127);
    assert_eq!(name(&index, kit), "Killstreak Direct Hit Kit");

    let mut strangifier = Attributes::item(6536, quality::UNIQUE);
    strangifier.target = Some(378);
    assert_eq!(name(&index, strangifier), "Team Captain Strangifier");
}

#[test]
fn crate_series_suffix() {
    let index = fixture();
    let mut a = Attributes::item(5041, quality::UNIQUE);
    a.crate_series = Some(17);
    assert_eq!(name(&index, a), "Mann Co. Supply Crate #17");
}

#[test]
fn craft_number_prefix() {
    let index = fixture();
    let mut a = Attributes::item(378, quality::UNIQUE);
    a.craft_number = Some(3);
    assert_eq!(name(&index, a), "#3 The Team Captain");
}

#[test]
fn paint_suffix_from_catalog_or_table() {
    let index = fixture();
    let mut a = Attributes::item(378, quality::UNIQUE);
    a.paint = Some(12073019);
    assert_eq!(name(&index, a.clone()), "The Team Captain (Paint: Team Spirit)");

    // Not sold as a paint can in this catalog.
    a.paint = Some(16738740);
    assert_eq!(name(&index, a.clone()), "The Team Captain (Paint: Pink as Hell)");

    a.paint = Some(1);
    assert_eq!(name(&index, a), "The Team Captain");
}

#[test]
fn vintage_item_named_vintage() {
    let index = fixture();
    assert_eq!(name(&index, Attributes::item(229, quality::UNIQUE)), "Vintage Tyrolean");
    assert_eq!(
        name(&index, Attributes::item(229, quality::VINTAGE)),
        "Vintage Vintage Tyrolean"
    );
}
