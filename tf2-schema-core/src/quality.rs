//! Well-known item quality ids.
//!
//! The catalog owns the full id↔name table; these are the ids the parser and
//! formatter branch on directly.

pub const NORMAL: u32 = 0;
pub const GENUINE: u32 = 1;
pub const VINTAGE: u32 = 3;
pub const UNUSUAL: u32 = 5;
pub const UNIQUE: u32 = 6;
pub const COMMUNITY: u32 = 7;
pub const VALVE: u32 = 8;
pub const SELF_MADE: u32 = 9;
pub const STRANGE: u32 = 11;
pub const HAUNTED: u32 = 13;
pub const COLLECTORS: u32 = 14;
pub const DECORATED: u32 = 15;
