//! Storage layer for client-local state.
//!
//! The only state the client persists is the result list of the active
//! semantic search. It is kept behind the [`ResultCache`] trait so the search
//! controller can be handed either a file-backed store or an in-memory one.
//!
//! # Modules
//!
//! - `backend`: the [`ResultCache`] trait
//! - `json`: file-backed local key/value store
//! - `memory`: in-memory cache
//! - `models`: persisted record types

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::ResultCache;
pub use json::{JsonStore, SEARCH_RESULTS_KEY};
pub use memory::MemoryResultCache;
pub use models::CachedSearch;
