//! The name ⇄ identifier control flow.
//!
//! The compact identifier grammar belongs to whoever implements
//! [`IdentifierCodec`]; this module only wires a codec to the parser and
//! formatter.

use tf2_schema_catalog::CatalogIndex;
use tf2_schema_core::Attributes;

use crate::formatter::format_name;
use crate::parser::parse_name;

/// Encodes attributes to, and decodes them from, a compact identifier.
pub trait IdentifierCodec {
    fn encode(&self, attributes: &Attributes) -> String;

    /// `None` if `identifier` is not well-formed.
    fn decode(&self, identifier: &str) -> Option<Attributes>;
}

/// Parse `name` and encode it; `None` if the name does not resolve.
pub fn identifier_from_name(
    index: &CatalogIndex,
    codec: &dyn IdentifierCodec,
    name: &str,
) -> Option<String> {
    let attributes = parse_name(index, name);
    attributes
        .is_resolved()
        .then(|| codec.encode(&attributes))
}

/// Decode `identifier` and format it as a display name.
pub fn name_from_identifier(
    index: &CatalogIndex,
    codec: &dyn IdentifierCodec,
    identifier: &str,
) -> Option<String> {
    let attributes = codec.decode(identifier)?;
    format_name(index, &attributes)
}
