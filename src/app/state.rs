//! Application state and view model computation.
//!
//! [`AppState`] is the directory view: it composes [`FilterState`],
//! [`SearchController`] and [`PaginationController`], owns the shared
//! [`RequestTracker`], and is the only place that builds company fetches.
//!
//! # Example
//!
//! ```rust
//! use portfolio_directory::app::AppState;
//! use portfolio_directory::storage::MemoryResultCache;
//! use portfolio_directory::ui::Theme;
//!
//! let state = AppState::new(Theme::default(), Box::new(MemoryResultCache::default()));
//! let viewmodel = state.compute_viewmodel(32, 100);
//! assert!(viewmodel.cards.is_empty());
//! ```

use super::filter_state::FilterState;
use super::modes::{DetailState, SearchPhase, ViewMode};
use super::pagination::PaginationController;
use super::requests::RequestTracker;
use super::search::SearchController;
use crate::domain::{Company, CountryId, CountryOption, SectorId, SectorOption};
use crate::infrastructure::paths::DEFAULT_ROWS;
use crate::storage::ResultCache;
use crate::ui::components::{CARD_HEIGHT, DIRECTORY_CHROME_ROWS};
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CompanyCard, DetailView, EmptyState, FilterChip, FilterKind, FooterInfo, HeaderInfo,
    PageButton, PaginationBar, ScrollInfo, SearchBarInfo, UIViewModel,
};
use crate::worker::WorkerMessage;

const DIRECTORY_HELP: &str = "search <q> · search · country <name> · sector <name> · clear · \
                              next · prev · page <n> · up · down · open <n> · refresh · quit";
const DETAIL_HELP: &str = "back: return to directory · quit";
const FILTERS_UNAVAILABLE: &str = "filters unavailable, `refresh` to retry";

/// Cards that fit in a terminal of `rows` rows. Never zero.
#[must_use]
pub const fn cards_per_screen(rows: usize) -> usize {
    let fit = rows.saturating_sub(DIRECTORY_CHROME_ROWS) / CARD_HEIGHT;
    if fit == 0 {
        1
    } else {
        fit
    }
}

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Companies of the current page, or all search matches.
    pub companies: Vec<Company>,

    /// `main-offices/` reference list.
    pub countries: Vec<CountryOption>,

    /// `tech-sectors/` reference list.
    pub sectors: Vec<SectorOption>,

    pub filters: FilterState,
    pub search: SearchController,
    pub pagination: PaginationController,
    pub requests: RequestTracker,
    pub view: ViewMode,
    pub theme: Theme,

    /// Index of the first card on screen.
    pub scroll: usize,

    /// Terminal height the scroll step is measured against.
    pub viewport_rows: usize,

    /// The last reference-list load failed; filter commands are rejected.
    pub filter_options_failed: bool,
}

impl AppState {
    /// Creates an empty directory state.
    ///
    /// # Parameters
    ///
    /// * `theme` - Color scheme for UI rendering
    /// * `cache` - Store for the active search's result list
    #[must_use]
    pub fn new(theme: Theme, cache: Box<dyn ResultCache>) -> Self {
        Self {
            companies: Vec::new(),
            countries: Vec::new(),
            sectors: Vec::new(),
            filters: FilterState::default(),
            search: SearchController::new(cache),
            pagination: PaginationController::new(),
            requests: RequestTracker::default(),
            view: ViewMode::Directory,
            theme,
            scroll: 0,
            viewport_rows: DEFAULT_ROWS,
            filter_options_failed: false,
        }
    }

    /// Replaces the grid contents and scrolls back to the top.
    pub fn replace_companies(&mut self, companies: Vec<Company>) {
        self.companies = companies;
        self.scroll = 0;
    }

    /// Largest scroll position that still fills the screen.
    #[must_use]
    pub fn max_scroll(&self) -> usize {
        self.companies
            .len()
            .saturating_sub(cards_per_screen(self.viewport_rows))
    }

    /// Whether a fetch for the current state is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.requests.is_loading()
    }

    /// Whether reference lists have been loaded.
    #[must_use]
    pub fn has_filter_options(&self) -> bool {
        !self.countries.is_empty() || !self.sectors.is_empty()
    }

    #[must_use]
    pub fn knows_country(&self, id: CountryId) -> bool {
        self.countries.iter().any(|c| c.id == id)
    }

    #[must_use]
    pub fn knows_sector(&self, id: SectorId) -> bool {
        self.sectors.iter().any(|s| s.id == id)
    }

    /// Builds the fetch for the current state, issuing a new request id.
    ///
    /// - `Idle`: one listing page under the current filters (branch B).
    /// - `Populated`: one lookup per cached id under the current filters
    ///   (branch A). An empty id list needs no request; the grid is emptied
    ///   and any in-flight fetch is abandoned.
    /// - `Searching` / `Failed`: nothing to fetch.
    pub fn fetch_current(&mut self) -> Option<WorkerMessage> {
        let filters = self.filters.selection().clone();

        if let Some(ids) = self.search.company_ids() {
            if ids.is_empty() {
                self.requests.abandon();
                self.replace_companies(Vec::new());
                return None;
            }
            let ids = ids.to_vec();
            let request_id = self.requests.issue();
            tracing::debug!(request_id, ids = ids.len(), "fetching search results");
            return Some(WorkerMessage::fetch_page(request_id, 1, filters, Some(ids)));
        }

        if self.search.is_active() {
            return None;
        }

        let request_id = self.requests.issue();
        let page = self.pagination.current_page();
        tracing::debug!(request_id, page, "fetching listing page");
        Some(WorkerMessage::fetch_page(request_id, page, filters, None))
    }

    /// Starts a semantic search, superseding any outstanding fetch.
    pub fn start_search(&mut self, query: &str) -> Option<WorkerMessage> {
        let query = self.search.commit(query)?;
        let request_id = self.requests.issue();
        tracing::debug!(request_id, query = %query, "starting semantic search");
        Some(WorkerMessage::search(request_id, query))
    }

    fn country_name(&self, id: CountryId) -> String {
        self.countries
            .iter()
            .find(|c| c.id == id)
            .map_or_else(|| format!("#{id}"), |c| c.hq_name.clone())
    }

    fn sector_name(&self, id: SectorId) -> String {
        self.sectors
            .iter()
            .find(|s| s.id == id)
            .map_or_else(|| format!("#{id}"), |s| s.sector_name.clone())
    }

    fn sector_names(&self, ids: &[SectorId]) -> String {
        ids.iter()
            .map(|id| self.sector_name(*id))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Computes a renderable view model for a `rows` × `cols` terminal.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let detail = match &self.view {
            ViewMode::Directory => None,
            ViewMode::Detail(state) => Some(self.compute_detail(state)),
        };

        let max_cards = cards_per_screen(rows);
        let first = self.scroll.min(self.companies.len().saturating_sub(max_cards));
        let description_width = cols.saturating_sub(6);

        let cards: Vec<CompanyCard> = self
            .companies
            .iter()
            .enumerate()
            .skip(first)
            .take(max_cards)
            .map(|(i, company)| CompanyCard {
                index: i + 1,
                name: company.name.clone(),
                description: truncate(company.description.trim(), description_width),
                country: company
                    .headquarters
                    .map(|id| self.country_name(id))
                    .unwrap_or_default(),
                sectors: self.sector_names(&company.sectors),
                logo_url: company.logo_url(),
            })
            .collect();

        let scroll = (self.companies.len() > cards.len()).then(|| ScrollInfo {
            first: first + 1,
            last: first + cards.len(),
            total: self.companies.len(),
        });

        let loading = self.is_loading();
        let empty_state = (!loading && self.companies.is_empty()).then(|| self.compute_empty_state());

        UIViewModel {
            header: self.compute_header(),
            search_bar: SearchBarInfo {
                query: self.search.phase().query().unwrap_or_default().to_string(),
                searching: matches!(self.search.phase(), SearchPhase::Searching { .. }),
            },
            filter_chips: self.compute_chips(),
            cards,
            scroll,
            pagination: self.compute_pagination(),
            loading,
            empty_state,
            detail,
            footer: FooterInfo {
                keybindings: match self.view {
                    ViewMode::Directory => DIRECTORY_HELP.to_string(),
                    ViewMode::Detail(_) => DETAIL_HELP.to_string(),
                },
                notice: (self.filter_options_failed && self.view == ViewMode::Directory)
                    .then(|| FILTERS_UNAVAILABLE.to_string()),
            },
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match (&self.view, self.search.phase()) {
            (ViewMode::Detail(state), _) => format!(" {} ", state.name()),
            (ViewMode::Directory, SearchPhase::Populated { company_ids, .. }) => {
                format!(" Portfolio Companies ({} matches) ", company_ids.len())
            }
            (ViewMode::Directory, SearchPhase::Idle) if self.pagination.total_pages() > 0 => format!(
                " Portfolio Companies (page {} of {}) ",
                self.pagination.current_page(),
                self.pagination.total_pages()
            ),
            (ViewMode::Directory, _) => " Portfolio Companies ".to_string(),
        };
        HeaderInfo { title }
    }

    fn compute_chips(&self) -> Vec<FilterChip> {
        let selection = self.filters.selection();
        let countries = selection.countries.iter().map(|id| FilterChip {
            kind: FilterKind::Country,
            label: self.country_name(*id),
        });
        let sectors = selection.sectors.iter().map(|id| FilterChip {
            kind: FilterKind::Sector,
            label: self.sector_name(*id),
        });
        countries.chain(sectors).collect()
    }

    /// Page controls, suppressed entirely while a search is active.
    fn compute_pagination(&self) -> Option<PaginationBar> {
        if self.search.is_active() || self.pagination.total_pages() == 0 {
            return None;
        }

        let current = self.pagination.current_page();
        let total = self.pagination.total_pages();
        let window = self.pagination.window();
        let loading = self.is_loading();

        Some(PaginationBar {
            pages: window
                .pages()
                .map(|number| PageButton {
                    number,
                    is_current: number == current,
                })
                .collect(),
            last_page: window.last_page,
            prev_enabled: current > 1 && !loading,
            next_enabled: current < total && !loading,
        })
    }

    fn compute_empty_state(&self) -> EmptyState {
        match self.search.phase() {
            SearchPhase::Populated { query, .. } => EmptyState {
                message: "No companies found".to_string(),
                subtitle: format!("Nothing matches \"{query}\" with the current filters."),
            },
            _ if !self.filters.selection().is_empty() => EmptyState {
                message: "No companies found".to_string(),
                subtitle: "Try removing a filter or `clear`.".to_string(),
            },
            _ => EmptyState {
                message: "No companies to show".to_string(),
                subtitle: "Type `refresh` to try again.".to_string(),
            },
        }
    }

    fn compute_detail(&self, state: &DetailState) -> DetailView {
        match state {
            DetailState::Loading { name } => DetailView::Loading { name: name.clone() },
            DetailState::NotFound { name } => DetailView::NotFound { name: name.clone() },
            DetailState::Found(company) => DetailView::Found {
                name: company.name.clone(),
                status: company.status.clone().filter(|s| !s.is_empty()),
                country: company
                    .headquarters
                    .map(|id| self.country_name(id))
                    .unwrap_or_default(),
                sectors: self.sector_names(&company.sectors),
                description: company.description.clone(),
                logo_url: company.logo_url(),
                links: company
                    .links()
                    .into_iter()
                    .map(|(label, url)| (label.to_string(), url.to_string()))
                    .collect(),
            },
        }
    }
}
