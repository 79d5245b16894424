//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the terminal runtime (main.rs) and the
//! domain/storage/worker layers. It holds every piece of client state and is
//! the only place that decides which backend fetch to issue.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filter_state`]: Observable filter selection
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`input`]: Command-line parsing into events
//! - [`modes`]: Search phase and view mode state machine types
//! - [`pagination`]: Page tracking and the visible page-button window
//! - [`requests`]: Last-request-wins sequencing
//! - [`search`]: Semantic search controller and result cache ownership
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use portfolio_directory::app::{handle_event, AppState, Event};
//! use portfolio_directory::storage::MemoryResultCache;
//! use portfolio_directory::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), Box::new(MemoryResultCache::default()));
//! let (_, actions) = handle_event(&mut state, &Event::CommitSearch("fintech".into()))?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod actions;
pub mod filter_state;
pub mod handler;
pub mod input;
pub mod modes;
pub mod pagination;
pub mod requests;
pub mod search;
pub mod state;

pub use actions::Action;
pub use filter_state::FilterState;
pub use handler::{handle_event, Event};
pub use input::parse_command;
pub use modes::{DetailState, SearchPhase, ViewMode};
pub use pagination::{compute_visible_window, PageWindow, PaginationController, WINDOW_SIZE};
pub use requests::RequestTracker;
pub use search::SearchController;
pub use state::{cards_per_screen, AppState};
