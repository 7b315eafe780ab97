//! Read-only derived views over a catalog snapshot.
//!
//! These are query conveniences for trading tools (paint tables, strange-part
//! tables, crafting weapon pools). They are not used by name conversion,
//! except for the paint-can lookups the formatter relies on.

use std::collections::BTreeMap;

use tf2_schema_core::{TfClass, quality};

use crate::error::SchemaError;
use crate::index::CatalogIndex;
use crate::raw::CatalogItem;
use crate::tables::{
    BUILT_IN_SCORE_TYPES, EXCLUDED_CRAFT_WEAPONS, EXCLUDED_SCORE_TYPE_CODES,
    EXTRA_CRAFTABLE_TRADING_WEAPONS, NEVER_UNCRAFTABLE_WEAPONS,
};

/// Minimal identifier for a Unique weapon, optionally non-craftable.
fn weapon_identifier(defindex: u32, craftable: bool) -> String {
    if craftable {
        format!("{defindex};{}", quality::UNIQUE)
    } else {
        format!("{defindex};{};uncraftable", quality::UNIQUE)
    }
}

impl CatalogIndex {
    /// Paint cans: items whose internal name mentions "Paint Can", except the
    /// bare "Paint Can" itself.
    pub fn paint_cans(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items()
            .iter()
            .filter(|item| item.name.contains("Paint Can") && item.name != "Paint Can")
    }

    /// Display name of the paint can applying the given decimal color.
    pub fn paint_name_by_decimal(&self, decimal: u32) -> Option<&str> {
        let wanted = f64::from(decimal);
        self.paint_cans()
            .find(|paint| paint.attributes.iter().any(|attr| attr.value == wanted))
            .map(|paint| paint.item_name.as_str())
    }

    /// Primary decimal color of the paint can with the given display name.
    pub fn paint_decimal_by_name(&self, name: &str) -> Option<u32> {
        self.paint_cans()
            .find(|paint| paint.item_name.eq_ignore_ascii_case(name))
            .and_then(|paint| paint.attributes.first())
            .map(|attr| attr.value as u32)
    }

    /// Paint display name → primary decimal color.
    pub fn paints(&self) -> BTreeMap<String, u32> {
        let mut paints = BTreeMap::new();
        for paint in self.paint_cans() {
            match paint.attributes.first() {
                Some(attr) => {
                    paints.insert(paint.item_name.clone(), attr.value as u32);
                }
                None => log::warn!("Paint can {} has no color attribute", paint.defindex),
            }
        }
        paints
    }

    /// Defindexes of every paintable item.
    pub fn paintable_defindexes(&self) -> Vec<u32> {
        self.items()
            .iter()
            .filter(|item| item.is_paintable())
            .map(|item| item.defindex)
            .collect()
    }

    /// Strange-part label → score type code, excluding built-in counters.
    pub fn strange_parts(&self) -> BTreeMap<String, u32> {
        self.score_types()
            .iter()
            .filter(|part| {
                !BUILT_IN_SCORE_TYPES.contains(&part.type_name.as_str())
                    && !EXCLUDED_SCORE_TYPE_CODES.contains(&part.code)
            })
            .map(|part| (part.type_name.clone(), part.code))
            .collect()
    }

    /// Unique-quality weapons in the regular crafting pool.
    pub fn craftable_weapons(&self) -> Vec<&CatalogItem> {
        self.items()
            .iter()
            .filter(|item| {
                !EXCLUDED_CRAFT_WEAPONS.contains(&item.defindex)
                    && item.item_quality == quality::UNIQUE
                    && item.craft_class == "weapon"
            })
            .collect()
    }

    /// Identifiers of the crafting-pool weapons usable by `class`.
    ///
    /// `class` must be one of the nine class names, spelled exactly as the
    /// catalog does ("Scout", "Soldier", ...).
    pub fn weapons_for_crafting_by_class(&self, class: &str) -> Result<Vec<String>, SchemaError> {
        let class: TfClass = class.parse()?;
        Ok(self
            .craftable_weapons()
            .into_iter()
            .filter(|item| item.used_by_classes.iter().any(|c| c == class.name()))
            .map(|item| weapon_identifier(item.defindex, true))
            .collect())
    }

    /// Identifiers of craftable weapons for trading, including the Jungle
    /// Inferno weapons missing from the pool.
    pub fn craftable_weapons_for_trading(&self) -> Vec<String> {
        self.craftable_weapons()
            .into_iter()
            .map(|item| item.defindex)
            .chain(EXTRA_CRAFTABLE_TRADING_WEAPONS.iter().copied())
            .map(|defindex| weapon_identifier(defindex, true))
            .collect()
    }

    /// Identifiers of non-craftable weapons for trading.
    pub fn uncraftable_weapons_for_trading(&self) -> Vec<String> {
        self.craftable_weapons()
            .into_iter()
            .filter(|item| !NEVER_UNCRAFTABLE_WEAPONS.contains(&item.defindex))
            .map(|item| weapon_identifier(item.defindex, false))
            .collect()
    }
}
