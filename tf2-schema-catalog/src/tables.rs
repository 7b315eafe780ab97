//! Fixed inclusion/exclusion tables applied when deriving catalog views.

/// Display name of the deprecated tag duplicate skipped by name lookup.
pub const DUPLICATE_NAME_TAG: (&str, u32) = ("Name Tag", 2093);

/// Attribute carrying a supply crate's series number.
pub const CRATE_SERIES_ATTRIBUTE: &str = "set supply crate series";

/// Weapons with Unique intrinsic quality and the weapon craft class that are
/// nonetheless not part of the regular crafting pool.
pub const EXCLUDED_CRAFT_WEAPONS: &[u32] = &[
    266,   // Horseless Headless Horsemann's Headtaker
    452,   // Three-Rune Blade
    466,   // Maul
    474,   // Conscientious Objector
    572,   // Unarmed Combat
    574,   // Wanga Prick
    587,   // Apoco-Fists
    638,   // Sharp Dresser
    735,   // Sapper
    736,   // Sapper
    737,   // Construction PDA
    851,   // AWPer Hand
    880,   // Freedom Staff
    933,   // Ap-Sap
    939,   // Bat Outta Hell
    947,   // Quäckenbirdt
    1013,  // Ham Shank
    1152,  // Grappling Hook
    30474, // Nostromo Napalmer
];

/// Jungle Inferno weapons traded as craftable although missing from the pool.
pub const EXTRA_CRAFTABLE_TRADING_WEAPONS: &[u32] = &[1178, 1179, 1180, 1181, 1190];

/// Weapons that never exist in a non-craftable state.
pub const NEVER_UNCRAFTABLE_WEAPONS: &[u32] = &[
    348, // Sharpened Volcano Fragment
    349, // Sun-on-a-Stick
];

/// Score types that are built into items rather than sold as strange parts.
pub const BUILT_IN_SCORE_TYPES: &[&str] = &[
    "Ubers",
    "Kill Assists",
    "Sentry Kills",
    "Sodden Victims",
    "Spies Shocked",
    "Heads Taken",
    "Humiliations",
    "Gifts Given",
    "Deaths Feigned",
    "Buildings Sapped",
    "Tickle Fights Won",
    "Opponents Flattened",
    "Food Items Eaten",
    "Banners Deployed",
    "Seconds Cloaked",
    "Health Dispensed to Teammates",
    "Teammates Teleported",
    "KillEaterEvent_UniquePlayerKills",
    "Points Scored",
    "Double Donks",
    "Teammates Whipped",
    "Wrangled Sentry Kills",
    "Carnival Kills",
    "Carnival Underworld Kills",
    "Carnival Games Won",
    "Contracts Completed",
    "Contract Points",
    "Contract Bonus Points",
    "Times Performed",
    "Kills and Assists during Invasion Event",
    "Kills and Assists on 2Fort Invasion",
    "Kills and Assists on Probed",
    "Kills and Assists on Byre",
    "Kills and Assists on Watergate",
    "Souls Collected",
    "Merasmissions Completed",
    "Halloween Transmutes Performed",
    "Power Up Canteens Used",
    "Contract Points Earned",
    "Contract Points Contributed To Friends",
];

/// Score type codes that duplicate the base "Kills" counter.
pub const EXCLUDED_SCORE_TYPE_CODES: &[u32] = &[0, 97];
