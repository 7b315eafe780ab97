//! Shared item attribute types for TF2 schema name conversion.
//!
//! This crate holds the payload that flows between the name parser, the name
//! formatter, and whatever identifier codec sits outside them. It knows
//! nothing about the catalog itself.

pub mod attributes;
pub mod class;
pub mod killstreak;
pub mod quality;
pub mod wear;

pub use attributes::Attributes;
pub use class::{ClassParseError, TfClass};
pub use killstreak::KillstreakTier;
pub use wear::Wear;
