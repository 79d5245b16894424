//! REST boundary of the directory client.
//!
//! - `client`: the [`DirectoryApi`] trait and its reqwest implementation
//! - `query`: listing parameters and response payload types

pub mod client;
pub mod query;

pub use client::{DirectoryApi, HttpDirectoryApi};
pub use query::{CompanyPage, ListingQuery};
