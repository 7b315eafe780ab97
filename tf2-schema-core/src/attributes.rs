use serde::{Deserialize, Serialize};

use crate::killstreak::KillstreakTier;
use crate::wear::Wear;

/// Structured description of a tradable item.
///
/// This is the parser's output and the formatter's input. It is also the
/// exact shape an identifier codec encodes and decodes; field names on the
/// wire follow the community identifier conventions (`paintkit`,
/// `crateseries`, `outputQuality`, ...).
///
/// A parse result whose `defindex` is `None` means the name could not be
/// resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    /// Catalog item definition index.
    pub defindex: Option<u32>,
    /// Effective quality used for lookups.
    pub quality: Option<u32>,
    /// Elevated quality label shown ahead of the primary one (e.g. Strange Unusual).
    pub quality2: Option<u32>,
    pub craftable: bool,
    pub tradable: bool,
    pub killstreak: KillstreakTier,
    pub australium: bool,
    #[serde(rename = "festive")]
    pub festivized: bool,
    /// Unusual effect id.
    pub effect: Option<u32>,
    /// Skin (paintkit) id. Always accompanied by `wear`.
    #[serde(rename = "paintkit")]
    pub skin: Option<u32>,
    pub wear: Option<Wear>,
    /// Paint color as a decimal RGB value.
    pub paint: Option<u32>,
    #[serde(rename = "crateseries")]
    pub crate_series: Option<u32>,
    #[serde(rename = "craftnumber")]
    pub craft_number: Option<u32>,
    /// Base item a kit, strangifier, or fabricator applies to.
    pub target: Option<u32>,
    /// Item produced by a crafting recipe tool.
    pub output: Option<u32>,
    #[serde(rename = "outputQuality")]
    pub output_quality: Option<u32>,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            defindex: None,
            quality: None,
            quality2: None,
            craftable: true,
            tradable: true,
            killstreak: KillstreakTier::None,
            australium: false,
            festivized: false,
            effect: None,
            skin: None,
            wear: None,
            paint: None,
            crate_series: None,
            craft_number: None,
            target: None,
            output: None,
            output_quality: None,
        }
    }
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain item of the given definition and quality.
    pub fn item(defindex: u32, quality: u32) -> Self {
        Self {
            defindex: Some(defindex),
            quality: Some(quality),
            ..Self::default()
        }
    }

    /// Whether the name this record came from resolved to a catalog item.
    pub fn is_resolved(&self) -> bool {
        self.defindex.is_some()
    }

    pub fn with_quality2(mut self, quality: u32) -> Self {
        self.quality2 = Some(quality);
        self
    }

    pub fn with_effect(mut self, effect: u32) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn with_skin(mut self, skin: u32, wear: Wear) -> Self {
        self.skin = Some(skin);
        self.wear = Some(wear);
        self
    }

    pub fn with_killstreak(mut self, tier: KillstreakTier) -> Self {
        self.killstreak = tier;
        self
    }

    pub fn uncraftable(mut self) -> Self {
        self.craftable = false;
        self
    }

    pub fn untradable(mut self) -> Self {
        self.tradable = false;
        self
    }
}

#[cfg(test)]
#[path = "tests/attributes_tests.rs"]
mod tests;
