//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to component renderers, which draw
//!    into one frame string
//!
//! # Example
//!
//! ```rust
//! use portfolio_directory::app::AppState;
//! use portfolio_directory::storage::MemoryResultCache;
//! use portfolio_directory::ui::{render, Theme};
//!
//! let state = AppState::new(Theme::default(), Box::new(MemoryResultCache::default()));
//! let frame = render(&state, 32, 100);
//! assert!(frame.contains("Portfolio Companies"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Renders the UI for `state` into a frame string.
///
/// The frame starts with a screen clear and positions every line absolutely,
/// so writing it to stdout replaces whatever was drawn before.
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::from(CLEAR_SCREEN);

    match &vm.detail {
        Some(detail) => components::render_detail_screen(&mut out, vm, detail, theme, cols, rows),
        None => components::render_directory(&mut out, vm, theme, cols, rows),
    }

    out
}
