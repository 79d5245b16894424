//! Semantic search state and its persisted result cache.

use super::modes::SearchPhase;
use crate::storage::{CachedSearch, ResultCache};

/// Turns committed queries into a cached identifier list.
///
/// The controller is the only writer of the [`ResultCache`]. Readers use
/// [`SearchController::company_ids`], which returns the in-memory copy written
/// alongside the cache, never a fresh read of the store.
#[derive(Debug)]
pub struct SearchController {
    phase: SearchPhase,
    cache: Box<dyn ResultCache>,
}

impl SearchController {
    #[must_use]
    pub fn new(cache: Box<dyn ResultCache>) -> Self {
        Self {
            phase: SearchPhase::Idle,
            cache,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    /// Returns `true` unless the controller is `Idle`.
    ///
    /// Pagination controls are suppressed while this holds.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self.phase, SearchPhase::Idle)
    }

    /// Cached identifiers when `Populated`.
    #[must_use]
    pub fn company_ids(&self) -> Option<&[String]> {
        match &self.phase {
            SearchPhase::Populated { company_ids, .. } => Some(company_ids),
            _ => None,
        }
    }

    /// Commits `query`, entering `Searching`.
    ///
    /// Returns the trimmed query to send, or `None` if it was blank, in which
    /// case the controller is cleared instead.
    pub fn commit(&mut self, query: &str) -> Option<String> {
        let query = query.trim();
        if query.is_empty() {
            self.clear();
            return None;
        }

        tracing::debug!(query = %query, "search committed");
        self.phase = SearchPhase::Searching {
            query: query.to_string(),
        };
        Some(query.to_string())
    }

    /// Restores `Populated` from the cache if it holds results for `query`.
    pub fn restore(&mut self, query: &str) -> bool {
        let query = query.trim();
        match self.cache.get() {
            Ok(Some(entry)) if entry.query == query => {
                tracing::debug!(query = %query, count = entry.company_ids.len(), "restored cached search");
                self.phase = SearchPhase::Populated {
                    query: entry.query,
                    company_ids: entry.company_ids,
                };
                true
            }
            Ok(_) => false,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read search cache");
                false
            }
        }
    }

    /// Records a successful search and writes the cache.
    ///
    /// A cache write failure is logged; the in-memory results are still used.
    pub fn complete(&mut self, query: &str, company_ids: Vec<String>) {
        if let Err(e) = self.cache.set(&CachedSearch::new(query, company_ids.clone())) {
            tracing::warn!(error = %e, "failed to persist search results");
        }
        self.phase = SearchPhase::Populated {
            query: query.to_string(),
            company_ids,
        };
    }

    /// Records a failed search and drops any cached results.
    pub fn fail(&mut self, query: &str) {
        self.clear_cache();
        self.phase = SearchPhase::Failed {
            query: query.to_string(),
        };
    }

    /// Returns to `Idle` and removes the persisted entry.
    pub fn clear(&mut self) {
        self.clear_cache();
        self.phase = SearchPhase::Idle;
    }

    fn clear_cache(&mut self) {
        if let Err(e) = self.cache.clear() {
            tracing::warn!(error = %e, "failed to clear search cache");
        }
    }
}
