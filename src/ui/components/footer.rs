//! Footer component renderer.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the command help line centered at `row`.
///
/// A notice, if any, leads the line in the error color. Text wider than the
/// terminal is truncated so the layout never wraps.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(out: &mut String, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let notice = footer
        .notice
        .as_deref()
        .map(|notice| truncate(&format!("{notice} · "), cols))
        .unwrap_or_default();
    let notice_len = display_width(&notice);
    let help_text = truncate(&footer.keybindings, cols.saturating_sub(notice_len));
    let text_len = notice_len + display_width(&help_text);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(out, row, 1);
    out.push_str(&" ".repeat(padding));
    out.push_str(&Theme::fg(&theme.colors.error_fg));
    out.push_str(&notice);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&help_text);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + text_len)));
    out.push_str(Theme::reset());
    row + 1
}
