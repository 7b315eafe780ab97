//! Catalog snapshot lifecycle: sources, on-disk persistence, atomic swap.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::error::SchemaError;
use crate::index::CatalogIndex;
use crate::raw::RawCatalog;

/// Anything that can produce a raw catalog snapshot.
///
/// Network fetching, pagination, and retries live behind implementations of
/// this trait; the index only ever sees a complete [`RawCatalog`].
pub trait CatalogSource {
    fn fetch(&self) -> Result<RawCatalog, SchemaError>;
}

/// Default location of the persisted snapshot: `~/.cache/tf2-schema/schema.json`.
pub fn default_snapshot_path() -> Result<PathBuf, SchemaError> {
    let base = dirs::cache_dir()
        .ok_or_else(|| SchemaError::source_failed("Could not determine cache directory"))?;
    Ok(base.join("tf2-schema").join("schema.json"))
}

/// A snapshot persisted as JSON on disk.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the snapshot, replacing any previous file atomically.
    pub fn save(&self, raw: &RawCatalog) -> Result<(), SchemaError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let serialized = serde_json::to_string(raw)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serialized)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("Saved catalog snapshot to {}", self.path.display());
        Ok(())
    }
}

impl CatalogSource for SnapshotFile {
    fn fetch(&self) -> Result<RawCatalog, SchemaError> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Shared holder of the current catalog snapshot.
///
/// Readers take an `Arc` to the current index and keep using it for as long
/// as they like; a refresh builds a complete new index first and only then
/// swaps the pointer, so no reader ever sees a half-updated catalog.
#[derive(Debug, Clone)]
pub struct CatalogHandle {
    current: Arc<RwLock<Arc<CatalogIndex>>>,
}

impl CatalogHandle {
    pub fn new(index: CatalogIndex) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(index))),
        }
    }

    /// Fetch from `source` and build the first snapshot.
    pub fn load(source: &dyn CatalogSource) -> Result<Self, SchemaError> {
        Ok(Self::new(CatalogIndex::build(source.fetch()?)?))
    }

    /// The snapshot as of this call.
    pub fn current(&self) -> Arc<CatalogIndex> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Replace the current snapshot wholesale.
    pub fn replace(&self, index: CatalogIndex) {
        let next = Arc::new(index);
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        log::info!(
            "Replacing catalog snapshot {} with {}",
            guard.version().unwrap_or("(unversioned)"),
            next.version().unwrap_or("(unversioned)")
        );
        *guard = next;
    }

    /// Fetch and build a new snapshot, swapping it in only on success.
    ///
    /// On failure the previous snapshot stays current.
    pub fn refresh(&self, source: &dyn CatalogSource) -> Result<Arc<CatalogIndex>, SchemaError> {
        let index = CatalogIndex::build(source.fetch()?)?;
        self.replace(index);
        Ok(self.current())
    }

    /// Like [`refresh`](Self::refresh), also persisting the fetched raw
    /// snapshot once it has been validated.
    pub fn refresh_and_save(
        &self,
        source: &dyn CatalogSource,
        cache: &SnapshotFile,
    ) -> Result<Arc<CatalogIndex>, SchemaError> {
        let raw = source.fetch()?;
        let index = CatalogIndex::build(raw.clone())?;
        cache.save(&raw)?;
        self.replace(index);
        Ok(self.current())
    }
}
