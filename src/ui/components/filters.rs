//! Filter chip row.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FilterChip, FilterKind};

/// Renders active filters as chips on one line, or a dim hint when none.
///
/// Chips that do not fit are summarized as `+N`.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_filter_chips(out: &mut String, row: usize, chips: &[FilterChip], theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push(' ');

    if chips.is_empty() {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str("No filters. Use `country <name>` or `sector <name>`.");
        out.push_str(Theme::reset());
        return row + 1;
    }

    let mut used = 1;
    for (shown, chip) in chips.iter().enumerate() {
        let prefix = match chip.kind {
            FilterKind::Country => "HQ",
            FilterKind::Sector => "#",
        };
        let text = format!(" {prefix} {} ", chip.label);
        let width = display_width(&text) + 1;
        let remaining = chips.len() - shown;

        if used + width + 4 > cols {
            out.push_str(&Theme::fg(&theme.colors.text_dim));
            out.push_str(&format!("+{remaining}"));
            out.push_str(Theme::reset());
            break;
        }

        out.push_str(&Theme::fg(&theme.colors.chip_fg));
        out.push_str(&Theme::bg(&theme.colors.chip_bg));
        out.push_str(&text);
        out.push_str(Theme::reset());
        out.push(' ');
        used += width;
    }

    row + 1
}
