use tf2_schema_catalog::{CatalogIndex, RawCatalog};
use tf2_schema_core::Attributes;
use tf2_schema_names::{
    IdentifierCodec, format_name, identifier_from_name, name_from_identifier, parse_name,
};

const FIXTURE: &str = include_str!("../../testdata/schema.json");

fn fixture() -> CatalogIndex {
    let raw: RawCatalog = serde_json::from_str(FIXTURE).unwrap();
    CatalogIndex::build(raw).unwrap()
}

/// Names the formatter produces verbatim.
const CANONICAL: &[&str] = &[
    "The Black Box",
    "Strange Black Box",
    "Non-Craftable Strange Black Box",
    "Strange Genuine Black Box",
    "Festivized Black Box",
    "Specialized Killstreak Black Box",
    "Strange Australium Rocket Launcher",
    "Strange Hot Rod | Rocket Launcher (Factory New)",
    "Strange Hot Hot Rod | Rocket Launcher (Field-Tested)",
    "Hot Rod | War Paint (Battle Scarred)",
    "Hot Black Box (Minimal Wear)",
    "Burning Flames Team Captain",
    "Strange Burning Flames Team Captain",
    "Community Sparkle Team Captain",
    "Unusual Horseless Headless Horsemann's Headtaker",
    "Vintage Tyrolean",
    "Vintage Vintage Tyrolean",
    "Professional Killstreak Third Degree Kit Fabricator",
    "Killstreak Direct Hit Kit",
    "Team Captain Strangifier",
    "Strangifier",
    "Mann Co. Supply Crate #17",
    "Salvaged Mann Co. Supply Crate #30",
    "Mann Co. Supply Munition #82",
    "Mann Co. Supply Crate Key",
    "#3 The Team Captain",
    "The Team Captain (Paint: Team Spirit)",
    "Strange Part: Scouts Killed",
    "The Mann of the Seven Sees",
];

/// Accepted spellings that normalize to a different canonical name.
const VARIANTS: &[(&str, &str)] = &[
    ("Black Box", "The Black Box"),
    ("Black Box (Field-Tested)", "The Black Box (Field-Tested)"),
    ("Uncraftable Strange Black Box", "Non-Craftable Strange Black Box"),
    ("Unusual Burning Flames Team Captain", "Burning Flames Team Captain"),
    ("Mann Co. Supply Crate", "Mann Co. Supply Crate #1"),
    ("Mann Co. Supply Crate Series #17", "Mann Co. Supply Crate #17"),
    ("Mann Co. Director's Cut Reel", "Mann Co. Director's Cut Reel #89"),
    ("Mann of the Seven Sees", "The Mann of the Seven Sees"),
];

#[test]
fn canonical_names_survive_a_round_trip() {
    let index = fixture();
    for &name in CANONICAL {
        let attributes = parse_name(&index, name);
        assert!(attributes.is_resolved(), "{name}");
        assert_eq!(format_name(&index, &attributes).as_deref(), Some(name));
    }
}

#[test]
fn variants_normalize_to_canonical() {
    let index = fixture();
    for &(variant, canonical) in VARIANTS {
        let attributes = parse_name(&index, variant);
        assert_eq!(
            format_name(&index, &attributes).as_deref(),
            Some(canonical),
            "{variant}"
        );
    }
}

#[test]
fn formatting_is_idempotent_through_the_parser() {
    let index = fixture();
    let names = CANONICAL
        .iter()
        .copied()
        .chain(VARIANTS.iter().map(|&(variant, _)| variant));
    for name in names {
        let once = format_name(&index, &parse_name(&index, name)).unwrap();
        let twice = format_name(&index, &parse_name(&index, &once)).unwrap();
        assert_eq!(once, twice, "{name}");
    }
}

/// Identifier codec that serializes the whole attribute record as JSON.
struct JsonCodec;

impl IdentifierCodec for JsonCodec {
    fn encode(&self, attributes: &Attributes) -> String {
        serde_json::to_string(attributes).unwrap_or_default()
    }

    fn decode(&self, identifier: &str) -> Option<Attributes> {
        serde_json::from_str(identifier).ok()
    }
}

#[test]
fn name_to_identifier_and_back() {
    let index = fixture();
    for &name in CANONICAL {
        let identifier = identifier_from_name(&index, &JsonCodec, name).unwrap();
        assert_eq!(
            name_from_identifier(&index, &JsonCodec, &identifier).as_deref(),
            Some(name)
        );
    }
}

#[test]
fn unresolved_name_has_no_identifier() {
    let index = fixture();
    assert_eq!(identifier_from_name(&index, &JsonCodec, "Completely Made Up Hat"), None);
}

#[test]
fn undecodable_identifier_has_no_name() {
    let index = fixture();
    assert_eq!(name_from_identifier(&index, &JsonCodec, "not json"), None);
    assert_eq!(
        name_from_identifier(&index, &JsonCodec, r#"{"defindex":99999,"quality":6}"#),
        None
    );
}

#[test]
fn identifier_uses_wire_field_names() {
    let index = fixture();
    let identifier = identifier_from_name(
        &index,
        &JsonCodec,
        "Strange Hot Rod | Rocket Launcher (Factory New)",
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&identifier).unwrap();
    assert_eq!(value["defindex"], 205);
    assert_eq!(value["quality"], 11);
    assert_eq!(value["paintkit"], 200);
    assert_eq!(value["wear"], 1);
}
