//! Fetch → apply → reapply sequencing for one mounted view.
//!
//! A view fetches its assignments once. The first accepted non-empty result
//! is applied exactly once automatically and starts the mutation watcher;
//! from then on the watcher reapplies the same list on every structural DOM
//! change and never triggers a refetch. After unmount every late result and
//! every watcher callback is refused.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::assignment::StyleAssignment;

/// What the caller should do with a fetch result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Apply the stored list now and start watching the view root.
    ApplyAndWatch,
    /// Nothing to apply; the view stays unstyled and no watcher is started.
    Unstyled,
    /// The view is gone or a result was already accepted. Drop it.
    Discarded,
}

#[derive(Debug, Default)]
pub struct StyleSession {
    assignments: Vec<StyleAssignment>,
    fetched: bool,
    watching: bool,
    unmounted: bool,
}

impl StyleSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result of the view's style fetch.
    pub fn accept_fetch(&mut self, assignments: Vec<StyleAssignment>) -> FetchOutcome {
        if self.unmounted || self.fetched {
            return FetchOutcome::Discarded;
        }
        self.fetched = true;
        if assignments.is_empty() {
            return FetchOutcome::Unstyled;
        }
        self.assignments = assignments;
        self.watching = true;
        FetchOutcome::ApplyAndWatch
    }

    /// Last accepted list.
    #[must_use]
    pub fn assignments(&self) -> &[StyleAssignment] {
        &self.assignments
    }

    /// List to reapply after a DOM change, or `None` when the watcher
    /// should do nothing.
    #[must_use]
    pub fn reapply_list(&self) -> Option<&[StyleAssignment]> {
        (self.watching && !self.unmounted).then_some(self.assignments.as_slice())
    }

    #[must_use]
    pub fn is_fetched(&self) -> bool {
        self.fetched
    }

    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.watching && !self.unmounted
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        !self.unmounted
    }

    pub fn unmount(&mut self) {
        self.unmounted = true;
        self.watching = false;
    }
}
