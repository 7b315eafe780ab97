//! Immutable, indexed view of one catalog snapshot.
//!
//! A `CatalogIndex` is built once from a [`RawCatalog`] and never mutated.
//! Refreshing the catalog means building a new index and swapping it in
//! wholesale (see [`CatalogHandle`](crate::CatalogHandle)).

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};

use crate::error::SchemaError;
use crate::raw::{AttributeDefinition, CatalogItem, ItemsGame, Particle, RawCatalog, ScoreType};
use crate::search::bounded_search;
use crate::tables::{CRATE_SERIES_ATTRIBUTE, DUPLICATE_NAME_TAG};
use tf2_schema_core::{Attributes, quality};

/// A quality id and its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityEntry {
    pub id: u32,
    pub name: String,
}

/// Indexed catalog snapshot.
#[derive(Debug)]
pub struct CatalogIndex {
    version: Option<String>,
    created_at: DateTime<Utc>,
    /// Items in catalog order (not guaranteed sorted by defindex).
    items: Vec<CatalogItem>,
    attributes: Vec<AttributeDefinition>,
    /// Sorted by id.
    qualities: Vec<QualityEntry>,
    /// Effects in catalog order.
    effects: Vec<Particle>,
    skins: BTreeMap<u32, String>,
    score_types: Vec<ScoreType>,
    /// Lowercase display name → item position, after the duplicate policy.
    by_name: HashMap<String, usize>,
    /// Lowercase internal name → item position.
    by_internal_name: HashMap<String, usize>,
    /// Lowercase display names that themselves begin with "the ".
    article_names: HashSet<String>,
    /// Crate series from the supplementary static attribute table.
    static_crate_series: HashMap<u32, u32>,
}

impl CatalogIndex {
    /// Validate a raw snapshot and build the index.
    ///
    /// Missing quality, effect, paintkit, or score-type tables, or a missing
    /// item list, fail here rather than surfacing later as silent lookup
    /// misses.
    pub fn build(raw: RawCatalog) -> Result<Self, SchemaError> {
        let created_at = match raw.time {
            Some(ms) => DateTime::from_timestamp_millis(ms)
                .ok_or_else(|| SchemaError::malformed(format!("invalid snapshot time {ms}")))?,
            None => Utc::now(),
        };

        let schema = raw.raw.schema;
        let items = schema
            .items
            .ok_or_else(|| SchemaError::malformed("schema.items is missing"))?;
        let quality_ids = schema
            .qualities
            .ok_or_else(|| SchemaError::malformed("schema.qualities is missing"))?;
        let quality_names = schema
            .quality_names
            .ok_or_else(|| SchemaError::malformed("schema.qualityNames is missing"))?;
        let effects = schema.attribute_controlled_attached_particles.ok_or_else(|| {
            SchemaError::malformed("schema.attribute_controlled_attached_particles is missing")
        })?;
        let paintkits = schema
            .paintkits
            .ok_or_else(|| SchemaError::malformed("schema.paintkits is missing"))?;
        let score_types = schema
            .kill_eater_score_types
            .ok_or_else(|| SchemaError::malformed("schema.kill_eater_score_types is missing"))?;

        let mut qualities = Vec::with_capacity(quality_ids.len());
        for (key, id) in &quality_ids {
            let name = quality_names.get(key).ok_or_else(|| {
                SchemaError::malformed(format!("quality '{key}' has no display name"))
            })?;
            qualities.push(QualityEntry {
                id: *id,
                name: name.clone(),
            });
        }
        qualities.sort_by_key(|q| q.id);

        let mut skins = BTreeMap::new();
        for (id, name) in paintkits {
            match id.parse::<u32>() {
                Ok(id) => {
                    skins.insert(id, name);
                }
                Err(_) => log::warn!("Skipping paintkit with non-numeric id '{id}'"),
            }
        }

        let by_name = build_name_index(&items);
        let mut by_internal_name = HashMap::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            by_internal_name.entry(item.name.to_lowercase()).or_insert(i);
        }

        let article_names = items
            .iter()
            .map(|item| item.item_name.to_lowercase())
            .filter(|name| name.starts_with("the "))
            .collect();

        let static_crate_series = raw
            .raw
            .items_game
            .as_ref()
            .map(static_series_table)
            .unwrap_or_default();

        log::debug!(
            "Built catalog index {}: {} items, {} qualities, {} effects, {} skins",
            raw.version.as_deref().unwrap_or("(unversioned)"),
            items.len(),
            qualities.len(),
            effects.len(),
            skins.len()
        );

        Ok(Self {
            version: raw.version,
            created_at,
            items,
            attributes: schema.attributes,
            qualities,
            effects,
            skins,
            score_types,
            by_name,
            by_internal_name,
            article_names,
            static_crate_series,
        })
    }

    // ── Snapshot metadata ───────────────────────────────────────────────────

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// True when the snapshot is older than `max_age` at `now`.
    pub fn is_stale(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        now.signed_duration_since(self.created_at) > max_age
    }

    // ── Items ───────────────────────────────────────────────────────────────

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn item_by_defindex(&self, defindex: u32) -> Option<&CatalogItem> {
        bounded_search(&self.items, defindex, |item| item.defindex)
    }

    /// The item an attribute record refers to.
    pub fn item_for(&self, attributes: &Attributes) -> Option<&CatalogItem> {
        attributes
            .defindex
            .and_then(|defindex| self.item_by_defindex(defindex))
    }

    /// Case-insensitive exact display-name lookup.
    ///
    /// The deprecated "Name Tag" duplicate and stock-quality entries are
    /// never returned; the first remaining item with the name wins.
    pub fn item_by_name(&self, name: &str) -> Option<&CatalogItem> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&i| &self.items[i])
    }

    /// Like [`item_by_name`](Self::item_by_name), but tolerant of a missing
    /// or superfluous leading "The".
    pub fn item_by_name_lenient(&self, name: &str) -> Option<&CatalogItem> {
        self.item_by_name(&self.normalize_article(name))
    }

    /// Case-insensitive exact internal-name lookup.
    pub fn item_by_internal_name(&self, name: &str) -> Option<&CatalogItem> {
        self.by_internal_name
            .get(&name.to_lowercase())
            .map(|&i| &self.items[i])
    }

    /// First item whose lowercase internal name starts with `prefix` and ends
    /// with `suffix` (both given in lowercase).
    pub fn item_by_internal_affixes(&self, prefix: &str, suffix: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| {
            let name = item.name.to_lowercase();
            name.starts_with(prefix) && name.ends_with(suffix)
        })
    }

    /// Lowercase `name` and fix its leading article against the catalog.
    ///
    /// A leading "the " is dropped unless some display name really begins
    /// with it; a missing one is added when only the prefixed form exists.
    pub fn normalize_article(&self, name: &str) -> String {
        let lower = name.trim().to_lowercase();
        match lower.strip_prefix("the ") {
            Some(rest) if !self.article_names.contains(&lower) => rest.to_string(),
            Some(_) => lower,
            None => {
                let prefixed = format!("the {lower}");
                if self.article_names.contains(&prefixed) {
                    prefixed
                } else {
                    lower
                }
            }
        }
    }

    /// Whether some display name begins with a real "The" (lowercase input).
    pub fn requires_article(&self, lowercase_name: &str) -> bool {
        self.article_names.contains(lowercase_name)
    }

    /// Series number of a supply crate: the item's own attribute first, then
    /// the supplementary static attribute table.
    pub fn crate_series(&self, item: &CatalogItem) -> Option<u32> {
        item.attribute_value(CRATE_SERIES_ATTRIBUTE)
            .filter(|v| *v >= 0.0)
            .map(|v| v as u32)
            .or_else(|| self.static_crate_series.get(&item.defindex).copied())
    }

    // ── Attributes ──────────────────────────────────────────────────────────

    pub fn attribute_by_defindex(&self, defindex: u32) -> Option<&AttributeDefinition> {
        bounded_search(&self.attributes, defindex, |attr| attr.defindex)
    }

    // ── Qualities ───────────────────────────────────────────────────────────

    pub fn qualities(&self) -> &[QualityEntry] {
        &self.qualities
    }

    pub fn quality_name(&self, id: u32) -> Option<&str> {
        self.qualities
            .iter()
            .find(|q| q.id == id)
            .map(|q| q.name.as_str())
    }

    pub fn quality_id_by_name(&self, name: &str) -> Option<u32> {
        self.qualities
            .iter()
            .find(|q| q.name.eq_ignore_ascii_case(name))
            .map(|q| q.id)
    }

    // ── Unusual effects ─────────────────────────────────────────────────────

    pub fn effects(&self) -> &[Particle] {
        &self.effects
    }

    /// `(id, name)` pairs for every unusual effect.
    pub fn unusual_effects(&self) -> Vec<(u32, &str)> {
        self.effects
            .iter()
            .map(|effect| (effect.id, effect.name.as_str()))
            .collect()
    }

    pub fn effect_name(&self, id: u32) -> Option<&str> {
        bounded_search(&self.effects, id, |effect| effect.id).map(|effect| effect.name.as_str())
    }

    pub fn effect_id_by_name(&self, name: &str) -> Option<u32> {
        self.effects
            .iter()
            .find(|effect| effect.name.eq_ignore_ascii_case(name))
            .map(|effect| effect.id)
    }

    // ── Skins ───────────────────────────────────────────────────────────────

    /// Skin id → name, ordered by id.
    pub fn skins(&self) -> &BTreeMap<u32, String> {
        &self.skins
    }

    pub fn skin_name(&self, id: u32) -> Option<&str> {
        self.skins.get(&id).map(String::as_str)
    }

    pub fn skin_id_by_name(&self, name: &str) -> Option<u32> {
        self.skins
            .iter()
            .find(|(_, skin)| skin.eq_ignore_ascii_case(name))
            .map(|(&id, _)| id)
    }

    // ── Score types ─────────────────────────────────────────────────────────

    pub fn score_types(&self) -> &[ScoreType] {
        &self.score_types
    }
}

fn is_name_lookup_excluded(item: &CatalogItem) -> bool {
    let (tag_name, tag_defindex) = DUPLICATE_NAME_TAG;
    (item.item_name == tag_name && item.defindex == tag_defindex)
        || item.item_quality == quality::NORMAL
}

fn build_name_index(items: &[CatalogItem]) -> HashMap<String, usize> {
    let mut by_name: HashMap<String, usize> = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        if is_name_lookup_excluded(item) {
            continue;
        }
        let key = item.item_name.to_lowercase();
        if let Some(&first) = by_name.get(&key) {
            log::trace!(
                "Display name '{}' shared by {} and {}; keeping {}",
                item.item_name,
                items[first].defindex,
                item.defindex,
                items[first].defindex
            );
            continue;
        }
        by_name.insert(key, i);
    }
    by_name
}

fn static_series_table(items_game: &ItemsGame) -> HashMap<u32, u32> {
    let mut table = HashMap::new();
    for (key, entry) in &items_game.items {
        let Some(attr) = entry.static_attrs.get(CRATE_SERIES_ATTRIBUTE) else {
            continue;
        };
        match (key.parse::<u32>(), attr.as_u32()) {
            (Ok(defindex), Some(series)) => {
                table.insert(defindex, series);
            }
            _ => log::warn!("Ignoring unparsable crate series static attribute for item '{key}'"),
        }
    }
    table
}

#[cfg(test)]
#[path = "tests/index_tests.rs"]
mod tests;
