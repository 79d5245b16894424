//! State machine types for the search controller and the active view.
//!
//! # Search phases
//!
//! ```text
//!            commit(q)                 completed
//!   Idle ───────────────▶ Searching ───────────────▶ Populated
//!    ▲                      │  ▲                        │
//!    │                failed│  │commit(q')              │
//!    │                      ▼  │                        │
//!    └──────── clear ───── Failed ◀─────────────────────┘
//! ```
//!
//! Clearing returns to `Idle` from every phase, and a new commit re-enters
//! `Searching` from every phase.

use crate::domain::Company;

/// Phase of the semantic search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// No query committed; the plain listing is shown.
    #[default]
    Idle,

    /// A search request is in flight.
    Searching { query: String },

    /// Results are cached for `query`.
    Populated {
        query: String,

        /// Matched company names in relevance order.
        company_ids: Vec<String>,
    },

    /// The last search attempt errored; no results are cached.
    Failed { query: String },
}

impl SearchPhase {
    /// The committed query, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Searching { query } | Self::Populated { query, .. } | Self::Failed { query } => {
                Some(query)
            }
        }
    }
}

/// Which screen is shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// The company grid.
    #[default]
    Directory,

    /// A single company, keyed by display name.
    Detail(DetailState),
}

/// Progress of a company detail lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading { name: String },
    Found(Box<Company>),
    NotFound { name: String },
}

impl DetailState {
    /// Name the lookup was started for.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Loading { name } | Self::NotFound { name } => name,
            Self::Found(company) => &company.name,
        }
    }
}
