//! Page tracking and the page-number button window.

/// Number of page buttons in a window away from the ends.
pub const WINDOW_SIZE: usize = 5;

/// The page-number buttons to show.
///
/// `start..end` is a zero-based, half-open index range, so the pages shown are
/// `start + 1 ..= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,

    /// Standalone "last page" button shown after an ellipsis.
    pub last_page: Option<usize>,
}

impl PageWindow {
    /// Page numbers inside the window, 1-based.
    pub fn pages(&self) -> impl Iterator<Item = usize> {
        self.start + 1..=self.end
    }

    #[must_use]
    pub const fn has_ellipsis(&self) -> bool {
        self.last_page.is_some()
    }
}

/// Computes which page buttons to show.
///
/// - On page 1: the first `window_size` pages.
/// - Within `window_size - 1` of the end: the last `window_size + 1` pages.
/// - Otherwise: two pages before the current one and two after.
///
/// An ellipsis and a "last page" button follow the window when the current
/// page is past the first and at least `window_size` pages from the end.
///
/// # Examples
///
/// ```
/// use portfolio_directory::app::pagination::compute_visible_window;
///
/// let window = compute_visible_window(4, 10, 5);
/// assert_eq!(window.pages().collect::<Vec<_>>(), vec![3, 4, 5, 6, 7]);
/// assert_eq!(window.last_page, Some(10));
///
/// let window = compute_visible_window(6, 10, 5);
/// assert_eq!(window.pages().collect::<Vec<_>>(), vec![5, 6, 7, 8, 9, 10]);
/// assert!(!window.has_ellipsis());
/// ```
#[must_use]
pub fn compute_visible_window(current: usize, total: usize, window_size: usize) -> PageWindow {
    let before = window_size / 2;
    let after = window_size - before;

    let (start, end) = if current <= 1 {
        (0, window_size.min(total))
    } else if current >= total.saturating_sub(window_size - 1) {
        (total.saturating_sub(window_size + 1), total)
    } else {
        (current.saturating_sub(before), (current + after).min(total))
    };

    let last_page = (current > 1 && current + window_size <= total).then_some(total);

    PageWindow {
        start,
        end,
        last_page,
    }
}

/// Current page and page count of the plain listing.
///
/// Invariant: `1 <= current <= total` whenever `total > 0`.
///
/// The page count comes from the worker, which knows the listing page size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationController {
    current: usize,
    total: usize,
}

impl Default for PaginationController {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationController {
    #[must_use]
    pub const fn new() -> Self {
        Self { current: 1, total: 0 }
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total
    }

    /// Returns to page 1.
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Advances one page. Returns `false` at the last page.
    pub fn next(&mut self) -> bool {
        if self.current < self.total {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Goes back one page. Returns `false` on page 1.
    pub fn previous(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps to `page`. Returns `false` if it is out of range or already current.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total.max(1) || page == self.current {
            return false;
        }
        self.current = page;
        true
    }

    /// Records a freshly computed page count.
    ///
    /// Returns `true` if the current page had to be clamped down.
    pub fn set_total(&mut self, total: usize) -> bool {
        self.total = total;
        if total > 0 && self.current > total {
            tracing::debug!(from = self.current, to = total, "clamping current page");
            self.current = total;
            return true;
        }
        false
    }

    /// Button window for the current position.
    #[must_use]
    pub fn window(&self) -> PageWindow {
        compute_visible_window(self.current, self.total, WINDOW_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(current: usize, total: usize) -> (Vec<usize>, Option<usize>) {
        let w = compute_visible_window(current, total, WINDOW_SIZE);
        (w.pages().collect(), w.last_page)
    }

    #[test]
    fn first_page_shows_first_five() {
        assert_eq!(pages(1, 10), (vec![1, 2, 3, 4, 5], None));
        assert_eq!(pages(1, 3), (vec![1, 2, 3], None));
        assert_eq!(pages(1, 0), (vec![], None));
    }

    #[test]
    fn near_end_shows_last_six() {
        assert_eq!(pages(6, 10), (vec![5, 6, 7, 8, 9, 10], None));
        assert_eq!(pages(10, 10), (vec![5, 6, 7, 8, 9, 10], None));
        assert_eq!(pages(2, 4), (vec![1, 2, 3, 4], None));
    }

    #[test]
    fn middle_shows_window_with_last_button() {
        assert_eq!(pages(4, 10), (vec![3, 4, 5, 6, 7], Some(10)));
        assert_eq!(pages(5, 10), (vec![4, 5, 6, 7, 8], Some(10)));
        assert_eq!(pages(2, 45), (vec![1, 2, 3, 4, 5], Some(45)));
    }

    #[test]
    fn next_and_previous_clamp() {
        let mut p = PaginationController::default();
        p.set_total(2);
        assert!(!p.previous());
        assert!(p.next());
        assert!(!p.next());
        assert_eq!(p.current_page(), 2);
        assert!(p.previous());
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn shrinking_total_clamps_current() {
        let mut p = PaginationController::default();
        p.set_total(10);
        assert!(p.go_to(8));
        assert!(p.set_total(3));
        assert_eq!(p.current_page(), 3);
        assert!(!p.set_total(0));
        assert_eq!(p.current_page(), 3);
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut p = PaginationController::default();
        p.set_total(5);
        assert!(!p.go_to(0));
        assert!(!p.go_to(6));
        assert!(!p.go_to(1));
        assert!(p.go_to(5));
    }
}
