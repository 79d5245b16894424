//! Terminal rendering layer with component-based architecture.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Cursor positioning, truncation, wrapping
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, CLEAR_SCREEN};
pub use theme::Theme;
pub use viewmodel::{
    CompanyCard, DetailView, EmptyState, FilterChip, FilterKind, FooterInfo, HeaderInfo,
    PageButton, PaginationBar, ScrollInfo, SearchBarInfo, UIViewModel,
};
