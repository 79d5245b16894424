//! JSON file-based local store.
//!
//! This module provides a small key/value store with the same shape as a
//! browser's local storage: string keys mapped to JSON values, all kept in one
//! file. Writes use an atomic write-to-temp + rename so a crash never leaves a
//! half-written file behind.
//!
//! The search-result cache lives under the [`SEARCH_RESULTS_KEY`] key.

use crate::domain::error::{DirectoryError, Result};
use crate::storage::backend::ResultCache;
use crate::storage::models::CachedSearch;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Key under which the active search result list is stored.
pub const SEARCH_RESULTS_KEY: &str = "searchResults";

/// Current on-disk format version.
const STORE_VERSION: u32 = 1;

/// Top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    /// Format version for future migrations.
    version: u32,

    #[serde(default)]
    items: BTreeMap<String, Value>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            items: BTreeMap::new(),
        }
    }
}

/// File-backed key/value store.
///
/// The whole map is held in memory and written back on every mutation, which
/// is fine for the handful of keys the client uses.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "items": {
///     "searchResults": {
///       "query": "fintech",
///       "company_ids": ["Nium", "Aspire"],
///       "stored_at": 1700000000
///     }
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonStore {
    file_path: PathBuf,
    data: StoreData,
    dirty: bool,
}

impl JsonStore {
    /// Opens the store at `file_path`, creating parent directories as needed.
    ///
    /// A missing file yields an empty store; nothing is written until the
    /// first mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but is not valid store JSON
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use portfolio_directory::storage::JsonStore;
    ///
    /// let store = JsonStore::open("/tmp/local-storage.json")?;
    /// assert!(store.get_item("searchResults").is_none());
    /// # Ok::<(), portfolio_directory::DirectoryError>(())
    /// ```
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        tracing::debug!(path = ?file_path, "opening local store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no existing store, starting empty");
            StoreData::default()
        };

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Returns the raw value stored under `key`.
    #[must_use]
    pub fn get_item(&self, key: &str) -> Option<&Value> {
        self.data.items.get(key)
    }

    /// Stores `value` under `key` and persists the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn set_item(&mut self, key: &str, value: Value) -> Result<()> {
        self.data.items.insert(key.to_string(), value);
        self.dirty = true;
        self.save_to_file()
    }

    /// Removes `key` and persists the store. Missing keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn remove_item(&mut self, key: &str) -> Result<()> {
        if self.data.items.remove(key).is_some() {
            self.dirty = true;
        }
        self.save_to_file()
    }

    fn load_from_file(path: &Path) -> Result<StoreData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StoreData = serde_json::from_str(&contents)
            .map_err(|e| DirectoryError::Storage(format!("failed to parse store JSON: {e}")))?;

        tracing::debug!(version = data.version, keys = data.items.len(), "loaded local store");
        Ok(data)
    }

    /// Writes the store to disk via a temporary file and rename.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| DirectoryError::Storage(format!("failed to serialize store: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "local store saved");
        Ok(())
    }
}

impl ResultCache for JsonStore {
    fn get(&self) -> Result<Option<CachedSearch>> {
        let Some(value) = self.get_item(SEARCH_RESULTS_KEY) else {
            return Ok(None);
        };

        serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| DirectoryError::Storage(format!("corrupt search cache entry: {e}")))
    }

    fn set(&mut self, entry: &CachedSearch) -> Result<()> {
        let _span = tracing::debug_span!("store_search_results",
            query = %entry.query,
            count = entry.company_ids.len()
        )
        .entered();

        let value = serde_json::to_value(entry)
            .map_err(|e| DirectoryError::Storage(format!("failed to encode search cache: {e}")))?;
        self.set_item(SEARCH_RESULTS_KEY, value)
    }

    fn clear(&mut self) -> Result<()> {
        tracing::debug!("clearing search cache");
        self.remove_item(SEARCH_RESULTS_KEY)
    }
}

impl Drop for JsonStore {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty store on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save store on drop");
            }
        }
    }
}
