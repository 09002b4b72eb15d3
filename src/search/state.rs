//! Observable state of a search session.

use crate::github::pagination::{PerPage, total_pages};
use crate::github::Repository;

/// Coarse phase of a search session, derived from [`SearchState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Nothing searched yet, or the session was cleared.
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request succeeded.
    Loaded,
    /// The latest request failed.
    Failed,
}

/// Snapshot of one search session.
///
/// An empty `query` always comes with no items and a zero total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Committed search terms, trimmed. Empty when idle or after a failure.
    pub query: String,
    /// Committed page (1-based).
    pub page: u32,
    /// Page size for the next request.
    pub per_page: PerPage,
    /// Repositories on the committed page.
    pub items: Vec<Repository>,
    /// Matches across all pages.
    pub total_count: u64,
    /// A request is in flight.
    pub loading: bool,
    /// Message of the latest failure.
    pub error: Option<String>,
}

impl SearchState {
    /// Idle state with the given page size.
    #[must_use]
    pub const fn idle(per_page: PerPage) -> Self {
        Self {
            query: String::new(),
            page: 1,
            per_page,
            items: Vec::new(),
            total_count: 0,
            loading: false,
            error: None,
        }
    }

    /// Derives the session phase.
    #[must_use]
    pub const fn status(&self) -> SearchStatus {
        if self.loading {
            SearchStatus::Loading
        } else if self.error.is_some() {
            SearchStatus::Failed
        } else if self.query.is_empty() {
            SearchStatus::Idle
        } else {
            SearchStatus::Loaded
        }
    }

    /// Pages available for the committed total, at least one.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        total_pages(self.total_count, self.per_page)
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::idle(PerPage::default())
    }
}
