//! Storage record models for the result cache.
//!
//! These types are the persisted representation of a committed search. They
//! are kept separate from the search state machine so that the on-disk format
//! can evolve independently.

use serde::{Deserialize, Serialize};

/// The identifier list matched by the most recent committed search.
///
/// `company_ids` is stored in the backend's relevance order and must never be
/// re-sorted on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedSearch {
    /// The committed query that produced these results.
    pub query: String,

    /// Matched company names, most relevant first.
    pub company_ids: Vec<String>,

    /// Unix timestamp of when the search completed.
    pub stored_at: i64,
}

impl CachedSearch {
    /// Creates a cache record stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use portfolio_directory::storage::CachedSearch;
    ///
    /// let entry = CachedSearch::new("fintech", vec!["Nium".to_string()]);
    /// assert_eq!(entry.query, "fintech");
    /// assert_eq!(entry.company_ids, vec!["Nium"]);
    /// ```
    pub fn new(query: impl Into<String>, company_ids: Vec<String>) -> Self {
        Self {
            query: query.into(),
            company_ids,
            stored_at: chrono::Utc::now().timestamp(),
        }
    }
}
