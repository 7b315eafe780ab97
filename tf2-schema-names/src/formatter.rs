//! Canonical display names from attributes.
//!
//! The output is a fixed-order concatenation of whichever segments the
//! attributes call for. It is not a strict inverse of the parser: several
//! accepted spellings collapse onto the same attributes, and this produces
//! the one the parser reads back unchanged.

use tf2_schema_catalog::CatalogIndex;
use tf2_schema_core::{Attributes, quality};

use crate::tables::paint_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Write a leading "The" for items flagged with a proper name.
    pub proper_name: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { proper_name: true }
    }
}

/// Format with default options.
pub fn format_name(index: &CatalogIndex, attributes: &Attributes) -> Option<String> {
    format_name_with(index, attributes, FormatOptions::default())
}

/// Build the display name for `attributes`.
///
/// Returns `None` when the defindex, or a target or output item it refers
/// to, is not in the catalog.
pub fn format_name_with(
    index: &CatalogIndex,
    attributes: &Attributes,
    options: FormatOptions,
) -> Option<String> {
    let item = index.item_for(attributes)?;
    let mut name = String::new();

    if !attributes.tradable {
        name.push_str("Non-Tradable ");
    }
    if !attributes.craftable {
        name.push_str("Non-Craftable ");
    }

    if let Some(elevated) = attributes.quality2.and_then(|id| index.quality_name(id)) {
        push_word(&mut name, elevated);
    }
    if let Some(id) = attributes.quality
        && shows_primary_quality(id, attributes, item.item_quality)
        && let Some(label) = index.quality_name(id)
    {
        push_word(&mut name, label);
    }

    if let Some(effect) = attributes.effect.and_then(|id| index.effect_name(id)) {
        push_word(&mut name, effect);
    }
    if attributes.festivized {
        name.push_str("Festivized ");
    }
    if let Some(label) = attributes.killstreak.label() {
        push_word(&mut name, label);
    }
    if let Some(target) = attributes.target {
        push_word(&mut name, &index.item_by_defindex(target)?.item_name);
    }
    if let Some(output_quality) = attributes.output_quality
        && output_quality != quality::UNIQUE
        && let Some(label) = index.quality_name(output_quality)
    {
        name.insert_str(0, &format!("{label} "));
    }
    if let Some(output) = attributes.output {
        push_word(&mut name, &index.item_by_defindex(output)?.item_name);
    }
    if attributes.australium {
        name.push_str("Australium ");
    }
    if let Some(skin) = attributes.skin.and_then(|id| index.skin_name(id)) {
        name.push_str(skin);
        name.push_str(" | ");
    }

    if options.proper_name && name.is_empty() && item.proper_name {
        name.push_str("The ");
    }
    name.push_str(&item.item_name);

    if let Some(wear) = attributes.wear {
        name.push_str(&format!(" ({})", wear.label()));
    }
    if let Some(series) = attributes.crate_series {
        name.push_str(&format!(" #{series}"));
    }
    if let Some(number) = attributes.craft_number {
        name.insert_str(0, &format!("#{number} "));
    }
    if let Some(paint) = attributes.paint {
        match index.paint_name_by_decimal(paint).or_else(|| paint_name(paint)) {
            Some(label) => name.push_str(&format!(" (Paint: {label})")),
            None => log::warn!("No paint name for color {paint}"),
        }
    }

    Some(name)
}

/// Unique and Decorated are never spelled out, nor is Unusual when an effect
/// names it, except on items that only ever exist as Unusual.
fn shows_primary_quality(id: u32, attributes: &Attributes, intrinsic: u32) -> bool {
    let implied = match id {
        quality::UNIQUE | quality::DECORATED => true,
        quality::UNUSUAL => attributes.effect.is_some(),
        _ => false,
    };
    !implied || intrinsic == quality::UNUSUAL
}

fn push_word(name: &mut String, word: &str) {
    name.push_str(word);
    name.push(' ');
}
