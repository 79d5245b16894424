//! Last-request-wins bookkeeping for listing and search fetches.

/// Hands out request ids and decides which response may be applied.
///
/// One tracker is shared by every trigger that refreshes the grid: filter
/// toggles, page changes, search commits and the branch A fetch that follows a
/// search. Only the most recently issued request is ever accepted, so a late
/// answer to a superseded request is dropped regardless of arrival order.
///
/// # Examples
///
/// ```
/// use portfolio_directory::app::RequestTracker;
///
/// let mut tracker = RequestTracker::default();
/// let first = tracker.issue();
/// let second = tracker.issue();
///
/// assert!(!tracker.settle(first));
/// assert!(tracker.settle(second));
/// assert!(!tracker.is_loading());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTracker {
    last_issued: u64,
    outstanding: Option<u64>,
}

impl RequestTracker {
    /// Issues a new id and marks it as the only acceptable response.
    pub fn issue(&mut self) -> u64 {
        self.last_issued += 1;
        self.outstanding = Some(self.last_issued);
        tracing::trace!(request_id = self.last_issued, "request issued");
        self.last_issued
    }

    /// Accepts the response for `request_id` if it is the outstanding one.
    ///
    /// Returns `false` for superseded or already settled ids.
    pub fn settle(&mut self, request_id: u64) -> bool {
        if self.outstanding == Some(request_id) {
            self.outstanding = None;
            true
        } else {
            tracing::debug!(
                request_id,
                latest = self.last_issued,
                "discarding superseded response"
            );
            false
        }
    }

    /// Forgets the outstanding request without issuing a new one.
    ///
    /// Used when the current state needs no fetch at all, so that whatever is
    /// still in flight is discarded on arrival.
    pub fn abandon(&mut self) {
        self.outstanding = None;
    }

    /// Returns `true` while a request is awaiting its response.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.outstanding.is_some()
    }
}
