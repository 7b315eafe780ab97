//! The parse rules, in the order they run.
//!
//! Order is load-bearing: modifiers are stripped before the vocabularies that
//! would otherwise mistake them for part of an effect, skin, or item name.

use std::ops::ControlFlow::{self, Break, Continue};

use tf2_schema_catalog::CatalogIndex;
use tf2_schema_core::{Attributes, KillstreakTier, Wear, quality};

use super::Pass;
use super::text::{collapse, find_word, remove_span, strip_first, strip_leading_word, strip_word, word_spans};
use crate::tables::{
    ATOMIC_FAMILIES, BASIC_KIT, EFFECT_FALSE_POSITIVES, EFFECT_REQUIRED_CONTEXT,
    GENERIC_STRANGIFIER, NON_PROMOTING_EFFECT, PROFESSIONAL_FABRICATOR, PROFESSIONAL_KIT,
    QUALITY_EXCEPTIONS, SALVAGED_CRATE, SKIN_FALSE_POSITIVES, SPECIALIZED_FABRICATOR,
    SPECIALIZED_KIT, UNWORN_ONLY_EFFECTS, WORN_ONLY_EFFECTS, crate_for_series,
    munition_for_series, paint_decimal,
};

type Step = ControlFlow<Attributes, Pass>;

pub(super) struct Rule {
    pub name: &'static str,
    pub apply: fn(&CatalogIndex, Pass) -> Step,
}

pub(super) const RULES: &[Rule] = &[
    Rule { name: "category", apply: category },
    Rule { name: "wear", apply: wear },
    Rule { name: "strange", apply: strange },
    Rule { name: "craftability", apply: craftability },
    Rule { name: "killstreak", apply: killstreak },
    Rule { name: "australium", apply: australium },
    Rule { name: "festivized", apply: festivized },
    Rule { name: "quality", apply: primary_quality },
    Rule { name: "effect", apply: effect },
    Rule { name: "skin", apply: skin },
    Rule { name: "kit fabricator", apply: kit_fabricator },
    Rule { name: "paint", apply: paint },
    Rule { name: "strangifier", apply: strangifier },
    Rule { name: "killstreak kit", apply: killstreak_kit },
    Rule { name: "resolved", apply: already_resolved },
    Rule { name: "war paint", apply: war_paint },
    Rule { name: "crate", apply: crate_series },
    Rule { name: "craft number", apply: craft_number },
    Rule { name: "article", apply: article },
    Rule { name: "lookup", apply: lookup },
];

// ── Modifiers ───────────────────────────────────────────────────────────────

/// Strange parts, filters and the like are looked up by their full name.
fn category(index: &CatalogIndex, pass: Pass) -> Step {
    if !ATOMIC_FAMILIES.iter().any(|family| pass.name.contains(family)) {
        return Continue(pass);
    }
    let mut item = pass.item;
    if let Some(found) = index.item_by_name(&pass.name) {
        item.defindex = Some(found.defindex);
        item.quality = Some(found.item_quality);
    }
    Break(item)
}

fn wear(_index: &CatalogIndex, mut pass: Pass) -> Step {
    for &wear in Wear::all() {
        let label = format!("({})", wear.label().to_lowercase());
        if let Some(rest) = strip_first(&pass.name, &label) {
            pass.name = rest;
            pass.item.wear = Some(wear);
            break;
        }
    }
    Continue(pass)
}

/// On a worn item "Strange" is an elevated label next to the skin's quality.
fn strange(_index: &CatalogIndex, mut pass: Pass) -> Step {
    if let Some(rest) = strip_word(&pass.name, "strange") {
        pass.name = rest;
        if pass.item.wear.is_some() {
            pass.item.quality2 = Some(quality::STRANGE);
        } else {
            pass.item.quality = Some(quality::STRANGE);
        }
    }
    Continue(pass)
}

fn craftability(_index: &CatalogIndex, mut pass: Pass) -> Step {
    let mut name = pass.name.replace("uncraftable", "non-craftable");
    for synonym in ["untradeable", "untradable", "non-tradeable"] {
        name = name.replace(synonym, "non-tradable");
    }
    if let Some(rest) = strip_first(&name, "non-craftable") {
        name = rest;
        pass.item.craftable = false;
    }
    if let Some(rest) = strip_first(&name, "non-tradable") {
        name = rest;
        pass.item.tradable = false;
    }
    pass.name = name;
    Continue(pass)
}

fn killstreak(_index: &CatalogIndex, mut pass: Pass) -> Step {
    // Longest label first: each lower tier's label is contained in the next.
    let tiers = [
        KillstreakTier::Professional,
        KillstreakTier::Specialized,
        KillstreakTier::Basic,
    ];
    for tier in tiers {
        let Some(label) = tier.label() else {
            continue;
        };
        if let Some(rest) = strip_first(&pass.name, &label.to_lowercase()) {
            pass.name = rest;
            pass.item.killstreak = tier;
            break;
        }
    }
    Continue(pass)
}

fn australium(_index: &CatalogIndex, mut pass: Pass) -> Step {
    if !pass.name.contains("australium gold") {
        if let Some(rest) = strip_word(&pass.name, "australium") {
            pass.name = rest;
            pass.item.australium = true;
        }
    }
    Continue(pass)
}

fn festivized(_index: &CatalogIndex, mut pass: Pass) -> Step {
    if !pass.name.contains("festivized formation")
        && let Some(rest) = strip_word(&pass.name, "festivized")
    {
        pass.name = rest;
        pass.item.festivized = true;
    }
    Continue(pass)
}

/// Only a quality word at the very start counts, and a quality already set
/// (Strange) moves to the elevated slot.
fn primary_quality(index: &CatalogIndex, mut pass: Pass) -> Step {
    if QUALITY_EXCEPTIONS
        .iter()
        .any(|exception| pass.name.starts_with(exception))
    {
        return Continue(pass);
    }
    for entry in index.qualities() {
        let word = entry.name.to_lowercase();
        if let Some(rest) = strip_leading_word(&pass.name, &word) {
            pass.name = rest;
            pass.item.quality2 = pass.item.quality2.or(pass.item.quality);
            pass.item.quality = Some(entry.id);
            break;
        }
    }
    Continue(pass)
}

fn effect(index: &CatalogIndex, mut pass: Pass) -> Step {
    let worn = pass.item.wear.is_some();
    let skin_spans = if worn {
        skin_spans(index, &pass.name)
    } else {
        Vec::new()
    };

    for particle in index.effects() {
        let effect = particle.name.to_lowercase();
        if effect_excluded(&pass.name, &effect, worn) {
            continue;
        }
        // An occurrence inside a skin name ("hot" in "hot rod") is not the effect.
        let Some(start) = word_spans(&pass.name, &effect)
            .into_iter()
            .map(|(start, _)| start)
            .find(|&start| {
                let end = start + effect.len();
                !skin_spans.iter().any(|&(s, e)| s <= start && end <= e)
            })
        else {
            continue;
        };

        pass.name = remove_span(&pass.name, start, effect.len());
        pass.item.effect = Some(particle.id);
        if particle.id != NON_PROMOTING_EFFECT && pass.item.quality != Some(quality::UNUSUAL) {
            pass.item.quality2 = pass.item.quality2.or(pass.item.quality);
            pass.item.quality = Some(quality::UNUSUAL);
        }
        break;
    }
    Continue(pass)
}

fn skin_spans(index: &CatalogIndex, name: &str) -> Vec<(usize, usize)> {
    index
        .skins()
        .values()
        .flat_map(|skin| word_spans(name, &skin.to_lowercase()))
        .collect()
}

fn guard_list(
    table: &'static [(&'static str, &'static [&'static str])],
    effect: &str,
) -> Option<&'static [&'static str]> {
    table
        .iter()
        .find(|(name, _)| *name == effect)
        .map(|&(_, substrings)| substrings)
}

fn effect_excluded(name: &str, effect: &str, worn: bool) -> bool {
    if guard_list(EFFECT_FALSE_POSITIVES, effect)
        .is_some_and(|substrings| substrings.iter().any(|s| name.contains(s)))
    {
        return true;
    }
    if guard_list(EFFECT_REQUIRED_CONTEXT, effect)
        .is_some_and(|contexts| !contexts.iter().any(|s| name.contains(s)))
    {
        return true;
    }
    (worn && UNWORN_ONLY_EFFECTS.contains(&effect)) || (!worn && WORN_ONLY_EFFECTS.contains(&effect))
}

fn skin(index: &CatalogIndex, mut pass: Pass) -> Step {
    if pass.item.wear.is_none() {
        return Continue(pass);
    }
    for (&id, skin) in index.skins() {
        let skin = skin.to_lowercase();
        if pass.name.contains(&format!("{skin} mk.ii")) {
            continue;
        }
        let Some(start) = find_word(&pass.name, &skin) else {
            continue;
        };
        let after = pass.name[start + skin.len()..].trim_start();
        let (tail, separated) = match after.strip_prefix('|') {
            Some(tail) => (tail, true),
            None => (after, false),
        };
        if SKIN_FALSE_POSITIVES.contains(&skin.as_str()) && !separated {
            continue;
        }
        let rest = collapse(&format!("{} {}", &pass.name[..start], tail));
        if rest.is_empty() {
            continue;
        }

        pass.name = rest;
        pass.item.skin = Some(id);
        if pass.item.quality2 == Some(quality::STRANGE) {
            pass.item.quality = Some(quality::STRANGE);
            pass.item.quality2 = None;
        } else if pass.item.effect.is_none() {
            pass.item.quality = Some(quality::DECORATED);
        }
        break;
    }
    Continue(pass)
}

fn paint(_index: &CatalogIndex, mut pass: Pass) -> Step {
    const OPEN: &str = "(paint: ";
    let Some(start) = pass.name.find(OPEN) else {
        return Continue(pass);
    };
    let Some(close) = pass.name[start..].find(')') else {
        return Continue(pass);
    };
    let label = pass.name[start + OPEN.len()..start + close].trim();
    match paint_decimal(label) {
        Some(decimal) => pass.item.paint = Some(decimal),
        None => log::debug!("Unknown paint '{label}'"),
    }
    pass.name = remove_span(&pass.name, start, close + 1);
    Continue(pass)
}

// ── Crafting tools ──────────────────────────────────────────────────────────

fn default_quality(index: &CatalogIndex, item: &mut Attributes, defindex: u32) {
    if item.quality.is_none() {
        let intrinsic = index
            .item_by_defindex(defindex)
            .map_or(quality::UNIQUE, |found| found.item_quality);
        item.quality = Some(intrinsic);
    }
}

fn unresolved(mut item: Attributes) -> Step {
    item.defindex = None;
    Break(item)
}

fn kit_fabricator(index: &CatalogIndex, pass: Pass) -> Step {
    let tier = pass.item.killstreak;
    if tier <= KillstreakTier::Basic {
        return Continue(pass);
    }
    let Some(rest) = strip_first(&pass.name, "kit fabricator") else {
        return Continue(pass);
    };

    let mut item = pass.item;
    let Some(target) = index.item_by_name_lenient(&rest) else {
        return unresolved(item);
    };
    let (tool, kit) = if tier == KillstreakTier::Professional {
        (PROFESSIONAL_FABRICATOR, PROFESSIONAL_KIT)
    } else {
        (SPECIALIZED_FABRICATOR, SPECIALIZED_KIT)
    };
    item.defindex = Some(tool);
    item.target = Some(target.defindex);
    item.output = Some(kit);
    item.output_quality = Some(quality::UNIQUE);
    default_quality(index, &mut item, tool);
    Break(item)
}

fn strangifier(index: &CatalogIndex, pass: Pass) -> Step {
    let Some(rest) = strip_word(&pass.name, "strangifier") else {
        return Continue(pass);
    };

    let mut item = pass.item;
    let defindex = if rest.is_empty() {
        GENERIC_STRANGIFIER
    } else {
        let Some(target) = index.item_by_name_lenient(&rest) else {
            return unresolved(item);
        };
        item.target = Some(target.defindex);
        index
            .item_by_internal_affixes(&target.item_name.to_lowercase(), "strangifier")
            .map_or(GENERIC_STRANGIFIER, |found| found.defindex)
    };
    item.defindex = Some(defindex);
    default_quality(index, &mut item, defindex);
    Break(item)
}

fn kit_for_tier(tier: KillstreakTier) -> u32 {
    match tier {
        KillstreakTier::Specialized => SPECIALIZED_KIT,
        KillstreakTier::Professional => PROFESSIONAL_KIT,
        _ => BASIC_KIT,
    }
}

fn killstreak_kit(index: &CatalogIndex, pass: Pass) -> Step {
    let tier = pass.item.killstreak;
    if tier.is_none() {
        return Continue(pass);
    }
    let Some(rest) = strip_word(&pass.name, "kit") else {
        return Continue(pass);
    };

    let mut item = pass.item;
    let defindex = if rest.is_empty() {
        kit_for_tier(tier)
    } else {
        let Some(target) = index.item_by_name_lenient(&rest) else {
            return unresolved(item);
        };
        item.target = Some(target.defindex);
        if tier == KillstreakTier::Basic {
            let prefix = format!("killstreak {}", target.item_name.to_lowercase());
            index
                .item_by_internal_affixes(&prefix, "kit")
                .map_or(BASIC_KIT, |found| found.defindex)
        } else {
            kit_for_tier(tier)
        }
    };
    item.defindex = Some(defindex);
    default_quality(index, &mut item, defindex);
    Break(item)
}

fn already_resolved(_index: &CatalogIndex, pass: Pass) -> Step {
    if pass.item.is_resolved() {
        Break(pass.item)
    } else {
        Continue(pass)
    }
}

// ── Base item ───────────────────────────────────────────────────────────────

/// The war paint item for a skin, as opposed to a weapon wearing that skin.
fn war_paint(index: &CatalogIndex, pass: Pass) -> Step {
    let Some(skin) = pass.item.skin else {
        return Continue(pass);
    };
    if !pass.name.contains("war paint") {
        return Continue(pass);
    }
    let mut item = pass.item;
    if let Some(found) = index.item_by_internal_name(&format!("paintkit {skin}")) {
        item.defindex = Some(found.defindex);
        item.quality = item.quality.or(Some(quality::DECORATED));
    }
    Break(item)
}

fn series_after(name: &str, prefixes: &[&str]) -> Option<u32> {
    prefixes
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .and_then(|rest| rest.trim().parse().ok())
}

fn crate_series(_index: &CatalogIndex, pass: Pass) -> Step {
    let name = pass.name.as_str();
    let (defindex, series) =
        if let Some(series) = series_after(name, &["salvaged mann co. supply crate #"]) {
            (Some(SALVAGED_CRATE), series)
        } else if let Some(series) = series_after(
            name,
            &["mann co. supply crate series #", "mann co. supply crate #"],
        ) {
            (crate_for_series(series), series)
        } else if let Some(series) = series_after(
            name,
            &["mann co. supply munition series #", "mann co. supply munition #"],
        ) {
            (munition_for_series(series), series)
        } else {
            return Continue(pass);
        };

    let mut item = pass.item;
    item.defindex = defindex;
    item.crate_series = Some(series);
    item.quality = Some(quality::UNIQUE);
    Break(item)
}

fn craft_number(_index: &CatalogIndex, mut pass: Pass) -> Step {
    let found = pass.name.split(' ').enumerate().find_map(|(position, token)| {
        token
            .strip_prefix('#')
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<u32>().ok())
            .map(|number| (position, number))
    });
    if let Some((position, number)) = found {
        pass.name = pass
            .name
            .split(' ')
            .enumerate()
            .filter(|&(i, _)| i != position)
            .map(|(_, token)| token)
            .collect::<Vec<_>>()
            .join(" ");
        pass.craft_number = Some(number);
    }
    Continue(pass)
}

fn article(index: &CatalogIndex, mut pass: Pass) -> Step {
    pass.name = index.normalize_article(&pass.name);
    Continue(pass)
}

fn lookup(index: &CatalogIndex, pass: Pass) -> Step {
    let mut item = pass.item;
    let Some(found) = index.item_by_name(&pass.name) else {
        return Break(item);
    };
    item.defindex = Some(found.defindex);
    item.quality = item.quality.or(Some(found.item_quality));
    if found.is_supply_crate() {
        item.crate_series = index.crate_series(found);
    } else {
        item.craft_number = pass.craft_number;
    }
    Break(item)
}
