use serde::{Deserialize, Serialize};

/// Killstreak enhancement applied to a weapon or kit.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum KillstreakTier {
    #[default]
    None = 0,
    Basic = 1,
    Specialized = 2,
    Professional = 3,
}

impl KillstreakTier {
    pub fn tier(self) -> u8 {
        self as u8
    }

    pub fn from_tier(tier: u8) -> Option<Self> {
        match tier {
            0 => Some(Self::None),
            1 => Some(Self::Basic),
            2 => Some(Self::Specialized),
            3 => Some(Self::Professional),
            _ => None,
        }
    }

    pub fn is_none(self) -> bool {
        self == Self::None
    }

    /// Name prefix written before the item, `None` for untiered items.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Basic => Some("Killstreak"),
            Self::Specialized => Some("Specialized Killstreak"),
            Self::Professional => Some("Professional Killstreak"),
        }
    }
}

impl TryFrom<u8> for KillstreakTier {
    type Error = String;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        Self::from_tier(tier).ok_or_else(|| format!("invalid killstreak tier {tier}"))
    }
}

impl From<KillstreakTier> for u8 {
    fn from(tier: KillstreakTier) -> Self {
        tier.tier()
    }
}
