use serde::{Deserialize, Serialize};

/// Exterior condition of a skinned weapon or war paint.
///
/// Serialized as the tier number (1 = Factory New … 5 = Battle Scarred).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Wear {
    FactoryNew = 1,
    MinimalWear = 2,
    FieldTested = 3,
    WellWorn = 4,
    BattleScarred = 5,
}

/// All wear tiers, best condition first.
const ALL_WEARS: &[Wear] = &[
    Wear::FactoryNew,
    Wear::MinimalWear,
    Wear::FieldTested,
    Wear::WellWorn,
    Wear::BattleScarred,
];

impl Wear {
    pub fn all() -> &'static [Wear] {
        ALL_WEARS
    }

    /// Tier number used by identifiers.
    pub fn tier(self) -> u8 {
        self as u8
    }

    pub fn from_tier(tier: u8) -> Option<Self> {
        ALL_WEARS.iter().copied().find(|w| w.tier() == tier)
    }

    /// Display label as it appears inside the trailing parentheses.
    pub fn label(self) -> &'static str {
        match self {
            Self::FactoryNew => "Factory New",
            Self::MinimalWear => "Minimal Wear",
            Self::FieldTested => "Field-Tested",
            Self::WellWorn => "Well-Worn",
            Self::BattleScarred => "Battle Scarred",
        }
    }
}

impl TryFrom<u8> for Wear {
    type Error = String;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        Self::from_tier(tier).ok_or_else(|| format!("invalid wear tier {tier}"))
    }
}

impl From<Wear> for u8 {
    fn from(wear: Wear) -> Self {
        wear.tier()
    }
}

impl std::fmt::Display for Wear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[path = "tests/wear_tests.rs"]
mod tests;
