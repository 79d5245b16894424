//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only entry point that mutates [`AppState`]. It
//! turns user commands and worker responses into state changes plus the
//! side effects the runtime must perform.
//!
//! # Event Types
//!
//! - **Routing**: `Navigate`, `OpenCompany`, `CloseDetail`
//! - **Search**: `CommitSearch`, `ClearSearch`
//! - **Filters**: `ToggleCountry`, `ToggleSector`, `ClearFilters`
//! - **Pagination**: `NextPage`, `PreviousPage`, `GoToPage`
//! - **Scrolling**: `ScrollDown`, `ScrollUp`, `Resize`
//! - **System**: `Refresh`, `Quit`, `WorkerResponse`
//!
//! # Example
//!
//! ```rust
//! use portfolio_directory::app::{handle_event, AppState, Event};
//! use portfolio_directory::storage::MemoryResultCache;
//! use portfolio_directory::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), Box::new(MemoryResultCache::default()));
//! let (render, actions) = handle_event(&mut state, &Event::Navigate { query: None })?;
//! assert!(render);
//! assert_eq!(actions.len(), 2); // reference lists + first listing page
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::{DetailState, SearchPhase, ViewMode};
use super::state::cards_per_screen;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{CountryId, SectorId};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user commands or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Opens the directory route, optionally pre-seeded with a query.
    ///
    /// Filters and pagination start fresh, as on a page mount.
    Navigate { query: Option<String> },

    /// Commits a free-text query. A blank query behaves like `ClearSearch`.
    CommitSearch(String),

    /// Drops the committed query and returns to the plain listing.
    ClearSearch,

    ToggleCountry(CountryId),
    ToggleSector(SectorId),
    ClearFilters,

    NextPage,
    PreviousPage,

    /// Jumps to a 1-based page number.
    GoToPage(usize),

    /// Moves the grid one screen further down the loaded companies.
    ScrollDown,
    ScrollUp,

    /// The terminal now has `rows` rows.
    Resize { rows: usize },

    /// Re-issues the fetch for the current state.
    Refresh,

    /// Opens the detail view for a company, keyed by display name.
    OpenCompany { name: String },

    /// Returns from the detail view to the directory.
    CloseDetail,

    Quit,

    /// Wraps a response from a worker task.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Actions are executed in order by the runtime.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the runtime contract stable for
/// handlers that may touch storage directly.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Navigate { query } => {
            state.view = ViewMode::Directory;
            state.filters.clear();
            state.pagination.reset();
            state.scroll = 0;

            let mut actions = Vec::new();
            if !state.has_filter_options() {
                actions.push(Action::PostToWorker(WorkerMessage::load_filter_options()));
            }

            let query = query.as_deref().map(str::trim).unwrap_or_default();
            if query.is_empty() {
                state.search.clear();
                actions.extend(fetch(state));
            } else if state.search.restore(query) {
                actions.extend(fetch(state));
            } else {
                actions.extend(start_search(state, query));
            }
            Ok((true, actions))
        }

        Event::CommitSearch(query) => {
            state.pagination.reset();
            let actions = match start_search(state, query) {
                Some(action) => vec![action],
                None => fetch(state).into_iter().collect(),
            };
            Ok((true, actions))
        }

        Event::ClearSearch => {
            state.search.clear();
            state.pagination.reset();
            Ok((true, fetch(state).into_iter().collect()))
        }

        Event::ToggleCountry(id) => {
            if !state.knows_country(*id) {
                tracing::debug!(country = %id, "ignoring unknown country");
                return Ok((false, vec![]));
            }
            state.filters.toggle_country(*id);
            Ok((true, after_filter_change(state)))
        }

        Event::ToggleSector(id) => {
            if !state.knows_sector(*id) {
                tracing::debug!(sector = %id, "ignoring unknown sector");
                return Ok((false, vec![]));
            }
            state.filters.toggle_sector(*id);
            Ok((true, after_filter_change(state)))
        }

        Event::ClearFilters => {
            state.filters.clear();
            Ok((true, after_filter_change(state)))
        }

        Event::NextPage => {
            if state.search.is_active() || state.is_loading() || !state.pagination.next() {
                return Ok((false, vec![]));
            }
            Ok((true, fetch(state).into_iter().collect()))
        }

        Event::PreviousPage => {
            if state.search.is_active() || state.is_loading() || !state.pagination.previous() {
                return Ok((false, vec![]));
            }
            Ok((true, fetch(state).into_iter().collect()))
        }

        Event::GoToPage(page) => {
            if state.search.is_active() || !state.pagination.go_to(*page) {
                return Ok((false, vec![]));
            }
            Ok((true, fetch(state).into_iter().collect()))
        }

        Event::ScrollDown => {
            let step = cards_per_screen(state.viewport_rows);
            let target = (state.scroll + step).min(state.max_scroll());
            Ok((scroll_to(state, target), vec![]))
        }

        Event::ScrollUp => {
            let step = cards_per_screen(state.viewport_rows);
            let target = state.scroll.min(state.max_scroll()).saturating_sub(step);
            Ok((scroll_to(state, target), vec![]))
        }

        Event::Resize { rows } => {
            state.viewport_rows = *rows;
            state.scroll = state.scroll.min(state.max_scroll());
            Ok((true, vec![]))
        }

        Event::Refresh => {
            let mut actions = Vec::new();
            if !state.has_filter_options() {
                actions.push(Action::PostToWorker(WorkerMessage::load_filter_options()));
            }
            if let SearchPhase::Failed { query } = state.search.phase() {
                let query = query.clone();
                actions.extend(start_search(state, &query));
            } else {
                actions.extend(fetch(state));
            }
            Ok((true, actions))
        }

        Event::OpenCompany { name } => {
            tracing::debug!(company = %name, "opening company detail");
            state.view = ViewMode::Detail(DetailState::Loading { name: name.clone() });
            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::lookup_company(name.clone()))],
            ))
        }

        Event::CloseDetail => {
            if state.view == ViewMode::Directory {
                return Ok((false, vec![]));
            }
            state.view = ViewMode::Directory;
            Ok((true, vec![]))
        }

        Event::Quit => Ok((false, vec![Action::Quit])),

        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::PageLoaded {
            request_id,
            companies,
            total_pages,
        } => {
            if !state.requests.settle(*request_id) {
                return Ok((false, vec![]));
            }
            tracing::debug!(request_id, count = companies.len(), total_pages = ?total_pages, "page loaded");
            state.replace_companies(companies.clone());

            if let Some(total) = total_pages {
                if state.pagination.set_total(*total) {
                    return Ok((true, fetch(state).into_iter().collect()));
                }
            }
            Ok((true, vec![]))
        }

        WorkerResponse::PageFailed { request_id, message } => {
            if !state.requests.settle(*request_id) {
                return Ok((false, vec![]));
            }
            tracing::warn!(request_id, error = %message, "showing empty listing after failed fetch");
            state.replace_companies(Vec::new());
            Ok((true, vec![]))
        }

        WorkerResponse::SearchCompleted {
            request_id,
            query,
            company_ids,
        } => {
            if !state.requests.settle(*request_id) {
                return Ok((false, vec![]));
            }
            tracing::debug!(request_id, query = %query, matches = company_ids.len(), "search completed");
            state.search.complete(query, company_ids.clone());
            state.pagination.reset();
            Ok((true, fetch(state).into_iter().collect()))
        }

        WorkerResponse::SearchFailed {
            request_id,
            query,
            message,
        } => {
            if !state.requests.settle(*request_id) {
                return Ok((false, vec![]));
            }
            tracing::warn!(request_id, query = %query, error = %message, "search failed");
            state.search.fail(query);
            state.replace_companies(Vec::new());
            Ok((true, vec![]))
        }

        WorkerResponse::FilterOptionsLoaded { countries, sectors } => {
            tracing::debug!(countries = countries.len(), sectors = sectors.len(), "reference lists loaded");
            state.filter_options_failed = false;
            state.countries.clone_from(countries);
            state.sectors.clone_from(sectors);

            let country_ids: Vec<CountryId> = countries.iter().map(|c| c.id).collect();
            let sector_ids: Vec<SectorId> = sectors.iter().map(|s| s.id).collect();
            if state.filters.retain_known(&country_ids, &sector_ids) {
                return Ok((true, after_filter_change(state)));
            }
            Ok((true, vec![]))
        }

        WorkerResponse::CompanyFound { company } => {
            if !awaiting_detail(state, &company.name) {
                return Ok((false, vec![]));
            }
            state.view = ViewMode::Detail(DetailState::Found(Box::new(company.clone())));
            Ok((true, vec![]))
        }

        WorkerResponse::CompanyNotFound { name } => {
            if !awaiting_detail(state, name) {
                return Ok((false, vec![]));
            }
            state.view = ViewMode::Detail(DetailState::NotFound { name: name.clone() });
            Ok((true, vec![]))
        }

        WorkerResponse::FilterOptionsFailed { message } => {
            tracing::warn!(error = %message, "filters unavailable until refresh");
            state.filter_options_failed = true;
            Ok((true, vec![]))
        }
    }
}

/// Resets to page 1 and refetches after the filter selection changed.
///
/// With no committed query any stale search entry is dropped first. While a
/// search is in flight or has failed there is nothing to refetch yet.
fn after_filter_change(state: &mut AppState) -> Vec<Action> {
    state.pagination.reset();
    match state.search.phase() {
        SearchPhase::Idle => {
            state.search.clear();
            fetch(state).into_iter().collect()
        }
        SearchPhase::Populated { .. } => fetch(state).into_iter().collect(),
        SearchPhase::Searching { .. } | SearchPhase::Failed { .. } => vec![],
    }
}

/// Moves the grid to `target`. Returns `false` if it was already there.
fn scroll_to(state: &mut AppState, target: usize) -> bool {
    if target == state.scroll {
        return false;
    }
    state.scroll = target;
    true
}

fn fetch(state: &mut AppState) -> Option<Action> {
    state.fetch_current().map(Action::PostToWorker)
}

fn start_search(state: &mut AppState, query: &str) -> Option<Action> {
    state.start_search(query).map(Action::PostToWorker)
}

fn awaiting_detail(state: &AppState, name: &str) -> bool {
    matches!(&state.view, ViewMode::Detail(DetailState::Loading { name: pending }) if pending == name)
}
