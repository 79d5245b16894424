//! Empty and loading state renderers.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting at `row`.
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    centered(out, row, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);

    let dim = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    centered(out, row + 1, &empty.subtitle, &dim, cols);

    row + 2
}

/// Renders the loading indicator centered at `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_loading(out: &mut String, row: usize, theme: &Theme, cols: usize) -> usize {
    centered(out, row, "Loading…", &Theme::fg(&theme.colors.loading_fg), cols);
    row + 1
}

pub(super) fn centered(out: &mut String, row: usize, text: &str, style: &str, cols: usize) {
    let len = display_width(text);
    let padding = (cols.saturating_sub(len)) / 2;

    position_cursor(out, row, 1);
    out.push_str(style);
    out.push_str(&" ".repeat(padding));
    out.push_str(text);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + len)));
    out.push_str(Theme::reset());
}
