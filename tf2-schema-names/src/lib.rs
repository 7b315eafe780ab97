//! Conversion between TF2 item display names and structured [`Attributes`].
//!
//! [`parse_name`] decomposes a free-form display name against a catalog
//! snapshot; [`format_name`] rebuilds the canonical display name. Neither
//! touches anything but the [`CatalogIndex`] passed in.

pub mod codec;
pub mod formatter;
pub mod parser;
pub mod tables;

pub use codec::{IdentifierCodec, identifier_from_name, name_from_identifier};
pub use formatter::{FormatOptions, format_name, format_name_with};
pub use parser::parse_name;

pub use tf2_schema_catalog::CatalogIndex;
pub use tf2_schema_core::Attributes;
