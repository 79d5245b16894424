//! Domain layer for the directory client.
//!
//! This module contains the core domain types, independent of HTTP, storage,
//! or terminal concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`company`]: Company model, reference-list options, placeholder logos
//! - [`filter`]: Filter selection value type
//!
//! # Examples
//!
//! ```
//! use portfolio_directory::domain::{CountryId, FilterSelection};
//!
//! let mut filters = FilterSelection::default();
//! filters.toggle_country(CountryId(5));
//! assert!(!filters.is_empty());
//! ```

pub mod company;
pub mod error;
pub mod filter;

pub use company::{Company, CountryId, CountryOption, SectorId, SectorOption};
pub use error::{DirectoryError, Result};
pub use filter::FilterSelection;
