//! Settings persistence.
//!
//! The store is an injected dependency: one record per widget id, read
//! whole, written whole, deleted whole. Implementations only need those
//! three operations; per-field default fallback is layered on top by the
//! controller.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing::debug;

use dashwidget_forms::Value;

/// One widget's persisted settings: field id to value.
pub type SettingsRecord = HashMap<String, Value>;

/// Store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure in a file-backed store.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend-specific failure.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Key-value persistence scoped by widget id.
///
/// Methods take `&self` so one store can back a whole dashboard; the
/// provided implementations guard their state internally.
pub trait SettingsStore: Send + Sync {
    /// Reads the record for a widget, `None` when nothing was saved yet.
    fn get(&self, widget_id: &str) -> Result<Option<SettingsRecord>>;

    /// Writes a widget's record, replacing any existing one.
    fn set(&self, widget_id: &str, record: SettingsRecord) -> Result<()>;

    /// Deletes a widget's record entirely.
    fn delete(&self, widget_id: &str) -> Result<()>;
}

/// In-memory store for tests and single-process dashboards.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, SettingsRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, widget_id: &str) -> Result<Option<SettingsRecord>> {
        let records = self
            .records
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(records.get(widget_id).cloned())
    }

    fn set(&self, widget_id: &str, record: SettingsRecord) -> Result<()> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        records.insert(widget_id.to_string(), record);
        Ok(())
    }

    fn delete(&self, widget_id: &str) -> Result<()> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        records.remove(widget_id);
        Ok(())
    }
}

/// JSON-file-backed store.
///
/// All widgets share one file holding a map of widget id to record. The
/// file is re-read on every access; callers own any caching. Records use
/// the plain JSON value shapes, so files written by older scalar-boolean
/// versions still load (see `Value::as_bool`).
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over the given file path.
    ///
    /// The file is created on first write; a missing file reads as empty.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<HashMap<String, SettingsRecord>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(HashMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, records: &HashMap<String, SettingsRecord>) -> Result<()> {
        let contents = serde_json::to_string_pretty(records)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, widget_id: &str) -> Result<Option<SettingsRecord>> {
        Ok(self.load()?.remove(widget_id))
    }

    fn set(&self, widget_id: &str, record: SettingsRecord) -> Result<()> {
        let mut records = self.load()?;
        records.insert(widget_id.to_string(), record);
        debug!(widget = widget_id, path = %self.path.display(), "Writing settings record");
        self.save(&records)
    }

    fn delete(&self, widget_id: &str) -> Result<()> {
        let mut records = self.load()?;
        if records.remove(widget_id).is_some() {
            debug!(widget = widget_id, "Deleting settings record");
            self.save(&records)?;
        }
        Ok(())
    }
}
