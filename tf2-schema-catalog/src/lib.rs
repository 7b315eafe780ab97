//! Catalog ("schema") snapshot indexing for TF2 item name conversion.
//!
//! Builds an immutable [`CatalogIndex`] from a raw snapshot and exposes the
//! item, quality, effect, skin, and paint lookups the name parser and
//! formatter depend on, plus derived trading views.

pub mod error;
pub mod index;
pub mod raw;
pub mod search;
pub mod settings;
pub mod snapshot;
pub mod tables;
pub mod views;

pub use error::SchemaError;
pub use index::{CatalogIndex, QualityEntry};
pub use raw::{CatalogItem, Particle, RawCatalog, RawSchema, RawSchemaBundle, ScoreType};
pub use settings::{Settings, load_settings, resolve_snapshot_path, save_settings, settings_path};
pub use snapshot::{CatalogHandle, CatalogSource, SnapshotFile, default_snapshot_path};
