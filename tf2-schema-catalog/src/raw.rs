//! Raw catalog shape as delivered by a [`CatalogSource`](crate::CatalogSource).
//!
//! These types mirror the publisher's schema JSON closely. The top-level
//! tables are optional at the serde level so that a missing table surfaces
//! as a [`SchemaError::MalformedCatalog`](crate::SchemaError) when the index
//! is built, naming the field, rather than as an opaque deserialize error.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// A persisted catalog snapshot: version marker, creation time, raw data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub version: Option<String>,
    /// Snapshot creation time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub time: Option<i64>,
    pub raw: RawSchemaBundle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSchemaBundle {
    pub schema: RawSchema,
    /// Supplementary per-item static attributes (`items_game`).
    #[serde(default)]
    pub items_game: Option<ItemsGame>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSchema {
    #[serde(default)]
    pub items: Option<Vec<CatalogItem>>,
    /// Quality key → quality id.
    #[serde(default)]
    pub qualities: Option<BTreeMap<String, u32>>,
    /// Quality key → display name.
    #[serde(default, rename = "qualityNames")]
    pub quality_names: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub attribute_controlled_attached_particles: Option<Vec<Particle>>,
    /// Paintkit id (as a string key) → skin name.
    #[serde(default)]
    pub paintkits: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub kill_eater_score_types: Option<Vec<ScoreType>>,
    #[serde(default)]
    pub attributes: Vec<AttributeDefinition>,
}

/// One item definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub defindex: u32,
    /// Internal (non-localized) name.
    #[serde(default)]
    pub name: String,
    /// Display name.
    pub item_name: String,
    #[serde(default)]
    pub item_class: String,
    /// Intrinsic quality the item drops with.
    #[serde(default)]
    pub item_quality: u32,
    #[serde(default)]
    pub craft_class: String,
    #[serde(default)]
    pub used_by_classes: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<ItemAttribute>,
    #[serde(default)]
    pub capabilities: BTreeMap<String, bool>,
    /// Item takes a leading "The" in its full name.
    #[serde(default)]
    pub proper_name: bool,
}

impl CatalogItem {
    pub fn is_paintable(&self) -> bool {
        self.capabilities.get("paintable").copied().unwrap_or(false)
    }

    pub fn is_supply_crate(&self) -> bool {
        self.item_class == "supply_crate"
    }

    /// Value of the first attribute with the given name.
    pub fn attribute_value(&self, name: &str) -> Option<f64> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value)
    }
}

/// An attribute attached to an item definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAttribute {
    pub name: String,
    #[serde(default)]
    pub class: String,
    pub value: f64,
}

/// An unusual particle effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Particle {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub system: String,
}

/// A strange-part score type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreType {
    #[serde(rename = "type")]
    pub code: u32,
    pub type_name: String,
}

/// An attribute definition from the schema's attribute table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    pub defindex: u32,
    pub name: String,
    #[serde(default)]
    pub attribute_class: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemsGame {
    /// Keyed by defindex as a string.
    #[serde(default)]
    pub items: HashMap<String, ItemsGameEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemsGameEntry {
    #[serde(default)]
    pub static_attrs: HashMap<String, StaticAttr>,
}

/// A static attribute value, either bare or wrapped in an object with `value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StaticAttr {
    Keyed { value: serde_json::Value },
    Bare(serde_json::Value),
}

impl StaticAttr {
    /// Interpret the value as an unsigned integer (accepting numeric strings).
    pub fn as_u32(&self) -> Option<u32> {
        let value = match self {
            Self::Keyed { value } | Self::Bare(value) => value,
        };
        match value {
            serde_json::Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().map(|f| f as u64))
                .and_then(|n| u32::try_from(n).ok()),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
