//! Heuristic display-name parser.
//!
//! Item names have no formal grammar. Modifiers are optional, appear in a
//! loose order, and collide with each other and with base item names, so the
//! name is decomposed by an ordered list of rules. Each rule
//! looks for one small vocabulary in the working buffer, and on a hit strips
//! the matched text and records fields on the accumulating [`Attributes`].
//! The first match within a rule wins and nothing is ever revisited.
//!
//! A rule either hands the pass on to the next rule or settles the result
//! early (crafting tools, crates, and the final catalog lookup all do).

mod rules;
pub mod text;

use std::ops::ControlFlow;

use tf2_schema_catalog::CatalogIndex;
use tf2_schema_core::Attributes;

use self::rules::RULES;

/// Working state threaded through the rules.
#[derive(Debug, Clone)]
pub(crate) struct Pass {
    /// Lowercase, whitespace-collapsed remainder of the name.
    pub name: String,
    pub item: Attributes,
    /// Collector craft number, only kept if the name resolves to a non-crate.
    pub craft_number: Option<u32>,
}

impl Pass {
    fn new(name: &str) -> Self {
        Self {
            name: text::collapse(&name.to_lowercase()),
            item: Attributes::default(),
            craft_number: None,
        }
    }
}

/// Parse a display name into attributes.
///
/// Never fails: a record whose `defindex` is `None` means the name did not
/// resolve against the catalog. Other fields may still be filled in.
pub fn parse_name(index: &CatalogIndex, name: &str) -> Attributes {
    let flow = RULES.iter().try_fold(Pass::new(name), |pass, rule| {
        let before = pass.name.len();
        let flow = (rule.apply)(index, pass);
        match &flow {
            ControlFlow::Continue(next) if next.name.len() != before => {
                log::trace!("{}: '{}' -> '{}'", rule.name, name, next.name);
            }
            ControlFlow::Break(item) => {
                log::trace!("{}: '{}' settled as {:?}", rule.name, name, item.defindex);
            }
            ControlFlow::Continue(_) => {}
        }
        flow
    });

    let item = match flow {
        ControlFlow::Break(item) => item,
        ControlFlow::Continue(pass) => pass.item,
    };
    if !item.is_resolved() {
        log::debug!("Could not resolve item name '{name}'");
    }
    item
}
