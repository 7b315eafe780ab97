use tf2_schema_core::ClassParseError;

/// Errors raised while building, loading, or querying a catalog snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings parse error: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("Settings serialize error: {0}")]
    SettingsWrite(#[from] toml::ser::Error),

    #[error("Malformed catalog: {0}")]
    MalformedCatalog(String),

    #[error(transparent)]
    InvalidClass(#[from] ClassParseError),

    #[error("Catalog source failed: {0}")]
    Source(String),
}

impl SchemaError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedCatalog(msg.into())
    }

    pub fn source_failed(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }
}
