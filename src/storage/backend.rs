//! Result cache abstraction.
//!
//! This module defines the [`ResultCache`] trait that abstracts over where the
//! semantic-search result list lives. The search controller is the only
//! writer; everything else reads the controller's in-memory copy.
//!
//! # Implementations
//!
//! - [`crate::storage::JsonStore`]: file-backed key/value store, survives restarts
//! - [`crate::storage::MemoryResultCache`]: in-process only, used by tests and
//!   when persistence is disabled

use crate::domain::error::Result;
use crate::storage::models::CachedSearch;

/// Storage for the single active search-result entry.
///
/// The trait is deliberately tiny: one entry, three operations. Implementations
/// must make `set` followed by `get` observe the value just written.
///
/// # Examples
///
/// ```
/// use portfolio_directory::storage::{CachedSearch, MemoryResultCache, ResultCache};
///
/// let mut cache = MemoryResultCache::default();
/// cache.set(&CachedSearch::new("fintech", vec!["Nium".into()]))?;
/// assert_eq!(cache.get()?.map(|e| e.query), Some("fintech".to_string()));
///
/// cache.clear()?;
/// assert!(cache.get()?.is_none());
/// # Ok::<(), portfolio_directory::DirectoryError>(())
/// ```
pub trait ResultCache: Send + std::fmt::Debug {
    /// Returns the stored entry, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read or decoded.
    fn get(&self) -> Result<Option<CachedSearch>>;

    /// Replaces the stored entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be persisted.
    fn set(&mut self, entry: &CachedSearch) -> Result<()>;

    /// Removes the stored entry. Clearing an empty cache is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal cannot be persisted.
    fn clear(&mut self) -> Result<()>;
}
