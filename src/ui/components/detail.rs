//! Company detail screen renderer.

use super::empty::{centered, render_loading};
use crate::ui::helpers::{position_cursor, truncate, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

/// Renders the detail body starting at `row`, stopping before `max_row`.
///
/// # Returns
///
/// The next available row position.
pub fn render_detail(
    out: &mut String,
    row: usize,
    max_row: usize,
    detail: &DetailView,
    theme: &Theme,
    cols: usize,
) -> usize {
    match detail {
        DetailView::Loading { .. } => render_loading(out, row + 1, theme, cols),

        DetailView::NotFound { name } => {
            let heading = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.error_fg));
            centered(out, row + 1, "Company Not Found", &heading, cols);

            let dim = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
            centered(out, row + 2, &format!("No company named \"{name}\"."), &dim, cols);
            centered(out, row + 3, "Type `back` to return to the directory.", &dim, cols);
            row + 4
        }

        DetailView::Found {
            name,
            status,
            country,
            sectors,
            description,
            logo_url,
            links,
        } => {
            let width = cols.saturating_sub(4);
            let mut current = row + 1;

            field(out, current, "", &format!("{}{name}", Theme::bold()), &theme.colors.card_title_fg);
            current += 2;

            if let Some(status) = status {
                field(out, current, "Status", status, &theme.colors.text_normal);
                current += 1;
            }
            if !country.is_empty() {
                field(out, current, "HQ", country, &theme.colors.tag_fg);
                current += 1;
            }
            if !sectors.is_empty() {
                field(out, current, "Sectors", &truncate(sectors, width.saturating_sub(10)), &theme.colors.tag_fg);
                current += 1;
            }
            field(out, current, "Logo", &truncate(logo_url, width.saturating_sub(10)), &theme.colors.text_dim);
            current += 2;

            let room_for_links = links.len() + 1;
            let description_lines = max_row.saturating_sub(current + room_for_links).max(1);
            for line in wrap(description, width, description_lines) {
                position_cursor(out, current, 3);
                out.push_str(&Theme::fg(&theme.colors.text_normal));
                out.push_str(&line);
                out.push_str(Theme::reset());
                current += 1;
            }
            current += 1;

            for (label, url) in links {
                if current >= max_row {
                    break;
                }
                field(out, current, label, &truncate(url, width.saturating_sub(10)), &theme.colors.text_dim);
                current += 1;
            }

            current
        }
    }
}

fn field(out: &mut String, row: usize, label: &str, value: &str, color: &str) {
    position_cursor(out, row, 3);
    if !label.is_empty() {
        out.push_str(Theme::bold());
        out.push_str(&format!("{label:<9}"));
        out.push_str(Theme::reset());
    }
    out.push_str(&Theme::fg(color));
    out.push_str(value);
    out.push_str(Theme::reset());
}
