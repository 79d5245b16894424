//! Pagination bar renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationBar;

/// Renders `‹ Prev  1 2 [3] 4 5 … 45  Next ›` at `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_pagination(out: &mut String, row: usize, bar: &PaginationBar, theme: &Theme) -> usize {
    position_cursor(out, row, 1);
    out.push(' ');

    push_control(out, "‹ Prev", bar.prev_enabled, theme);
    out.push_str("  ");

    for button in &bar.pages {
        if button.is_current {
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.page_current_fg));
            out.push_str(&Theme::bg(&theme.colors.page_current_bg));
            out.push_str(&format!(" {} ", button.number));
        } else {
            out.push_str(&Theme::fg(&theme.colors.page_fg));
            out.push_str(&format!(" {} ", button.number));
        }
        out.push_str(Theme::reset());
    }

    if let Some(last) = bar.last_page {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(" … ");
        out.push_str(&Theme::fg(&theme.colors.page_fg));
        out.push_str(&format!(" {last} "));
        out.push_str(Theme::reset());
    }

    out.push_str("  ");
    push_control(out, "Next ›", bar.next_enabled, theme);

    row + 1
}

fn push_control(out: &mut String, label: &str, enabled: bool, theme: &Theme) {
    let color = if enabled {
        &theme.colors.page_fg
    } else {
        &theme.colors.disabled_fg
    };
    out.push_str(&Theme::fg(color));
    out.push_str(label);
    out.push_str(Theme::reset());
}
