//! Error types for the directory client.
//!
//! This module defines the centralized error type [`DirectoryError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.
//!
//! None of these errors is fatal to the running client: the worker converts
//! them into failure responses and the event handler degrades to an empty or
//! stale listing.

use thiserror::Error;

/// The main error type for directory client operations.
///
/// Network, payload, and storage failures all funnel into this enum. The
/// three backend failure classes (transport, non-2xx status, malformed
/// payload) are kept as distinct variants so they can be logged precisely,
/// even though callers treat them identically.
///
/// # Examples
///
/// ```
/// use portfolio_directory::DirectoryError;
///
/// fn validate_page_size(size: usize) -> Result<(), DirectoryError> {
///     if size == 0 {
///         return Err(DirectoryError::Config("page_size must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status code.
    #[error("HTTP {status} from {url}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Request URL, including query string.
        url: String,
    },

    /// The response body did not have the expected shape.
    ///
    /// Covers JSON syntax errors as well as missing required fields such as
    /// `results` on a listing page or `company` on a search response.
    #[error("Unexpected payload: {0}")]
    Payload(String),

    /// Local result-cache storage failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for directory client operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;
