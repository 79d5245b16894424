//! In-memory result cache.

use crate::domain::error::Result;
use crate::storage::backend::ResultCache;
use crate::storage::models::CachedSearch;

/// Result cache that lives only as long as the process.
///
/// Used when `persist_cache = false` and as the test double for
/// [`ResultCache`].
#[derive(Debug, Default, Clone)]
pub struct MemoryResultCache {
    entry: Option<CachedSearch>,
}

impl MemoryResultCache {
    /// Creates a cache pre-seeded with an entry.
    #[must_use]
    pub fn with_entry(entry: CachedSearch) -> Self {
        Self { entry: Some(entry) }
    }
}

impl ResultCache for MemoryResultCache {
    fn get(&self) -> Result<Option<CachedSearch>> {
        Ok(self.entry.clone())
    }

    fn set(&mut self, entry: &CachedSearch) -> Result<()> {
        self.entry = Some(entry.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entry = None;
        Ok(())
    }
}
