//! Composable UI component renderers.
//!
//! # Components
//!
//! - `header`: Title bar
//! - `footer`: Command help line
//! - `search`: Committed query box
//! - `filters`: Active filter chips
//! - `grid`: Company cards
//! - `pagination`: Prev/Next and page-number buttons
//! - `empty`: Empty state and loading indicator
//! - `detail`: Single-company screen
//!
//! # Layout Modes
//!
//! - [`render_directory`]: Header + Search + Filters + Grid + Pagination + Footer
//! - [`render_detail_screen`]: Header + Detail + Footer

mod detail;
mod empty;
mod filters;
mod footer;
mod grid;
mod header;
mod pagination;
mod search;

pub use grid::CARD_HEIGHT;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailView, UIViewModel};

use detail::render_detail;
use empty::{render_empty_state, render_loading};
use filters::render_filter_chips;
use footer::render_footer;
use grid::{render_cards, render_scroll_status};
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;

/// Rows taken by everything on the directory screen except the cards:
/// blank, header, border, search box (3), chips, blank, pagination, border,
/// footer.
pub const DIRECTORY_CHROME_ROWS: usize = 12;

/// Renders a horizontal border line at `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders the directory screen.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Filter chips]
/// [Cards | Loading | Empty state]
/// [Blank padding]
/// [Pagination, scroll position on the right]
/// [Border]
/// [Footer]
/// ```
pub fn render_directory(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    current_row = render_search_bar(out, current_row, &vm.search_bar, theme, cols);
    current_row = render_filter_chips(out, current_row, &vm.filter_chips, theme, cols);
    current_row += 1;

    if vm.loading {
        render_loading(out, current_row + 1, theme, cols);
    } else if let Some(empty) = &vm.empty_state {
        render_empty_state(out, current_row + 1, empty, theme, cols);
    } else {
        render_cards(out, current_row, &vm.cards, theme, cols);
    }

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);

    if let Some(bar) = &vm.pagination {
        render_pagination(out, border_row.saturating_sub(1), bar, theme);
    }
    if let Some(scroll) = vm.scroll.as_ref().filter(|_| !vm.loading) {
        render_scroll_status(out, border_row.saturating_sub(1), scroll, theme, cols);
    }
    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}

/// Renders the company detail screen.
pub fn render_detail_screen(
    out: &mut String,
    vm: &UIViewModel,
    detail: &DetailView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);

    render_detail(out, current_row, border_row, detail, theme, cols);
    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}
