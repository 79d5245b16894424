//! Company grid renderer.
//!
//! Each card takes three lines:
//!
//! ```text
//!  [1] Nium                                      Singapore · Fintech
//!      Global payments infrastructure for banks and businesses…
//!      https://dummyimage.com/150x150/3A7BC8/ffffff?text=N
//! ```

use crate::ui::helpers::{display_width, pad_to, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CompanyCard, ScrollInfo};

/// Terminal rows used by one card.
pub const CARD_HEIGHT: usize = 3;

/// Width of the `[n] ` gutter.
const GUTTER: usize = 5;

/// Renders all cards starting at `row`.
///
/// # Returns
///
/// The next available row position.
pub fn render_cards(out: &mut String, row: usize, cards: &[CompanyCard], theme: &Theme, cols: usize) -> usize {
    cards
        .iter()
        .fold(row, |current, card| render_card(out, current, card, theme, cols))
}

fn render_card(out: &mut String, row: usize, card: &CompanyCard, theme: &Theme, cols: usize) -> usize {
    let body_width = cols.saturating_sub(GUTTER + 1);

    let tags = match (card.country.is_empty(), card.sectors.is_empty()) {
        (false, false) => format!("{} · {}", card.country, card.sectors),
        (false, true) => card.country.clone(),
        (true, false) => card.sectors.clone(),
        (true, true) => String::new(),
    };
    let tags = truncate(&tags, body_width / 2);
    let name_width = body_width.saturating_sub(display_width(&tags) + 1);

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    pad_to(out, &format!(" [{}]", card.index), GUTTER);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.card_title_fg));
    pad_to(out, &truncate(&card.name, name_width), name_width + 1);
    out.push_str(Theme::reset());
    out.push_str(&Theme::fg(&theme.colors.tag_fg));
    out.push_str(&tags);
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    out.push_str(&" ".repeat(GUTTER));
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&card.description);
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    out.push_str(&" ".repeat(GUTTER));
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&truncate(&card.logo_url, body_width));
    out.push_str(Theme::reset());

    row + CARD_HEIGHT
}

/// Renders `7-10 of 10 · up/down to scroll` right-aligned at `row`.
pub fn render_scroll_status(out: &mut String, row: usize, scroll: &ScrollInfo, theme: &Theme, cols: usize) {
    let text = format!(
        "{}-{} of {} · up/down to scroll ",
        scroll.first, scroll.last, scroll.total
    );
    let text = truncate(&text, cols);

    position_cursor(out, row, cols.saturating_sub(display_width(&text)) + 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&text);
    out.push_str(Theme::reset());
}
