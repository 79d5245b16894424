//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They carry no
//! business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use portfolio_directory::ui::viewmodel::{FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Portfolio Companies ".to_string() },
//!     search_bar: SearchBarInfo { query: String::new(), searching: false },
//!     filter_chips: vec![],
//!     cards: vec![],
//!     scroll: None,
//!     pagination: None,
//!     loading: true,
//!     empty_state: None,
//!     detail: None,
//!     footer: FooterInfo { keybindings: "quit".to_string(), notice: None },
//! };
//! assert!(vm.cards.is_empty());
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Committed query line. Always shown on the directory screen.
    pub search_bar: SearchBarInfo,

    /// Active filters, in selection order.
    pub filter_chips: Vec<FilterChip>,

    /// Companies that fit on screen, from the scroll position on.
    pub cards: Vec<CompanyCard>,

    /// Position in the loaded companies when they do not all fit.
    pub scroll: Option<ScrollInfo>,

    /// Page controls. `None` while a search is active.
    pub pagination: Option<PaginationBar>,

    /// Whether a fetch for the current state is outstanding.
    pub loading: bool,

    /// Shown instead of the grid when there is nothing to list.
    pub empty_state: Option<EmptyState>,

    /// Replaces the directory screen when a company is open.
    pub detail: Option<DetailView>,

    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command help text.
    pub keybindings: String,

    /// Problem shown ahead of the help text.
    pub notice: Option<String>,
}

/// Visible slice of the company list, 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollInfo {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Committed query, empty when idle.
    pub query: String,

    /// A search request is in flight.
    pub searching: bool,
}

/// Which filter dimension a chip belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Country,
    Sector,
}

/// One active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub kind: FilterKind,
    pub label: String,
}

/// One company in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyCard {
    /// 1-based position, used by the `open` command.
    pub index: usize,
    pub name: String,

    /// Description cut to the available width.
    pub description: String,

    /// Headquarters country name, or empty if unknown.
    pub country: String,

    /// Sector names joined for display.
    pub sectors: String,

    pub logo_url: String,
}

/// Page controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationBar {
    pub pages: Vec<PageButton>,

    /// Standalone last-page button, preceded by an ellipsis.
    pub last_page: Option<usize>,

    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// A single page-number button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub is_current: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// The company detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Loading {
        name: String,
    },
    Found {
        name: String,
        status: Option<String>,
        country: String,
        sectors: String,
        description: String,
        logo_url: String,

        /// `(label, url)` pairs for present links.
        links: Vec<(String, String)>,
    },
    NotFound {
        name: String,
    },
}
