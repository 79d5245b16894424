//! Shared rendering utilities.
//!
//! Components draw into a `String` frame with absolute cursor positioning;
//! the runtime writes the finished frame to stdout in one go.

use std::fmt::Write;

/// Appends an ANSI cursor move to `row`, `col` (both 1-indexed).
///
/// # Example
///
/// ```rust
/// use portfolio_directory::ui::helpers::position_cursor;
///
/// let mut frame = String::new();
/// position_cursor(&mut frame, 5, 1);
/// assert_eq!(frame, "\u{1b}[5;1H");
/// ```
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    let _ = write!(out, "\u{1b}[{row};{col}H");
}

/// Number of terminal cells `text` occupies, counted in chars.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` chars, ending in `…` when shortened.
///
/// # Example
///
/// ```rust
/// use portfolio_directory::ui::helpers::truncate;
///
/// assert_eq!(truncate("Global payments", 8), "Global …");
/// assert_eq!(truncate("Nium", 8), "Nium");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Appends `text` and pads with spaces up to `width` cells.
pub fn pad_to(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    out.push_str(&" ".repeat(width.saturating_sub(display_width(text))));
}

/// Greedy word wrap to `width`, keeping at most `max_lines` lines.
///
/// The last kept line is truncated with `…` if text remains.
#[must_use]
pub fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            display_width(word)
        } else {
            display_width(&current) + 1 + display_width(word)
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let shortened = truncate(&format!("{last} …"), width);
            *last = shortened;
        }
    }
    lines
        .into_iter()
        .map(|line| truncate(&line, width))
        .collect()
}
