//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where persisted state and traces live, and how big the terminal
//! is.

pub mod paths;

pub use paths::{data_dir, expand_tilde, terminal_size};
