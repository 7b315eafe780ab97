//! Fixed vocabularies and defindex tables used by the parser and formatter.
//!
//! All matching vocabularies are lowercase; the parser works on a lowercased
//! buffer.

// ── Paint colors ────────────────────────────────────────────────────────────

/// Paint display name → primary decimal color.
pub const PAINTS: &[(&str, u32)] = &[
    ("Indubitably Green", 7511618),
    ("Zepheniah's Greed", 4345659),
    ("Noble Hatter's Violet", 5322826),
    ("Color No. 216-190-216", 14204632),
    ("A Deep Commitment to Purple", 8208497),
    ("Mann Co. Orange", 13595446),
    ("Muskelmannbraun", 10843461),
    ("Peculiarly Drab Tincture", 12955537),
    ("Radigan Conagher Brown", 6901050),
    ("Ye Olde Rustic Colour", 8154199),
    ("Australium Gold", 15185211),
    ("Aged Moustache Grey", 8289918),
    ("An Extraordinary Abundance of Tinge", 15132390),
    ("A Distinctive Lack of Hue", 1315860),
    ("Team Spirit", 12073019),
    ("Pink as Hell", 16738740),
    ("A Color Similar to Slate", 3100495),
    ("Drably Olive", 8421376),
    ("The Bitter Taste of Defeat and Lime", 3329330),
    ("The Color of a Gentlemann's Business Pants", 15787660),
    ("Dark Salmon Injustice", 15308410),
    ("Operator's Overalls", 4732984),
    ("Waterlogged Lab Coat", 11049612),
    ("Balaclavas Are Forever", 3874595),
    ("An Air of Debonair", 6637376),
    ("The Value of Teamwork", 8400928),
    ("Cream Spirit", 12807213),
    ("A Mann's Mint", 12377523),
    ("After Eight", 2960676),
];

pub fn paint_decimal(name: &str) -> Option<u32> {
    PAINTS
        .iter()
        .find(|(paint, _)| paint.eq_ignore_ascii_case(name))
        .map(|&(_, decimal)| decimal)
}

pub fn paint_name(decimal: u32) -> Option<&'static str> {
    PAINTS
        .iter()
        .find(|&&(_, d)| d == decimal)
        .map(|&(name, _)| name)
}

// ── Atomic name families ────────────────────────────────────────────────────

/// Item families whose full name is looked up as-is, modifiers and all.
pub const ATOMIC_FAMILIES: &[&str] = &[
    "strange part",
    "strange cosmetic part",
    "strange filter",
    "strange count transfer tool",
    "strange bacon grease",
];

// ── Qualities ───────────────────────────────────────────────────────────────

/// Item names that begin with a quality word without carrying that quality.
pub const QUALITY_EXCEPTIONS: &[&str] = &[
    "haunted ghosts",
    "haunted phantasm jr",
    "haunted phantasm",
    "haunted metal scrap",
    "haunted hat",
    "unusual cap",
    "vintage tyrolean",
    "vintage merryweather",
    "haunted kraken",
    "haunted forever!",
    "haunted cremation",
    "haunted wick",
];

// ── Unusual effects ─────────────────────────────────────────────────────────

/// Effect id written on items without promoting them to Unusual.
pub const NON_PROMOTING_EFFECT: u32 = 4;

/// Effect → substrings in which the effect name is part of something else.
pub const EFFECT_FALSE_POSITIVES: &[(&str, &[&str])] = &[
    ("stardust", &["starduster"]),
    ("smoking", &["smoking jacket", "smoking skid lid"]),
    ("atomic", &["subatomic", "bonk! atomic punch", "atomic accolade"]),
    ("spellbound", &["taunt:", "shred alert"]),
    ("accursed", &["accursed apparition"]),
    ("haunted", &["haunted kraken"]),
    ("frostbite", &["frostbite bonnet"]),
    ("cool", &["cooling", "cool breeze"]),
];

/// Effect → substrings at least one of which must be present.
pub const EFFECT_REQUIRED_CONTEXT: &[(&str, &[&str])] =
    &[("showstopper", &["taunt: ", "shred alert"])];

/// Effects that share their name with a skin and are skipped on worn items.
pub const UNWORN_ONLY_EFFECTS: &[&str] = &["haunted ghosts", "pumpkin patch", "stardust"];

/// Weapon-only effects, which only ever appear on worn items.
pub const WORN_ONLY_EFFECTS: &[&str] = &["hot", "isotope", "cool", "energy orb"];

// ── Skins ───────────────────────────────────────────────────────────────────

/// Skin names that are also complete item names.
pub const SKIN_FALSE_POSITIVES: &[&str] = &["balloonicorn", "smissmas sweater"];

// ── Crafting tools ──────────────────────────────────────────────────────────

pub const SPECIALIZED_FABRICATOR: u32 = 20002;
pub const PROFESSIONAL_FABRICATOR: u32 = 20003;

pub const BASIC_KIT: u32 = 6527;
pub const SPECIALIZED_KIT: u32 = 6523;
pub const PROFESSIONAL_KIT: u32 = 6526;

pub const GENERIC_STRANGIFIER: u32 = 6522;

// ── Crates ──────────────────────────────────────────────────────────────────

pub const SALVAGED_CRATE: u32 = 5068;

/// Supply crate defindex → the series it is used for.
pub const CRATE_SERIES_GROUPS: &[(u32, &[u32])] = &[
    (
        5022,
        &[1, 3, 7, 12, 13, 18, 19, 23, 26, 31, 34, 39, 43, 47, 54, 57, 75],
    ),
    (
        5041,
        &[2, 4, 8, 11, 14, 17, 20, 24, 27, 32, 37, 42, 44, 49, 56, 71, 76],
    ),
    (
        5045,
        &[5, 9, 10, 15, 16, 21, 25, 28, 29, 33, 38, 41, 45, 55, 59, 77],
    ),
];

/// Munition series → defindex.
pub const MUNITION_SERIES: &[(u32, u32)] = &[
    (82, 5734),
    (83, 5735),
    (84, 5742),
    (85, 5752),
    (90, 5781),
    (91, 5802),
    (92, 5803),
    (103, 5859),
];

pub fn crate_for_series(series: u32) -> Option<u32> {
    CRATE_SERIES_GROUPS
        .iter()
        .find(|(_, group)| group.contains(&series))
        .map(|&(defindex, _)| defindex)
}

pub fn munition_for_series(series: u32) -> Option<u32> {
    MUNITION_SERIES
        .iter()
        .find(|&&(s, _)| s == series)
        .map(|&(_, defindex)| defindex)
}
