//! Observable state of one repository detail view.

use crate::github::pagination::{PerPage, total_pages};
use crate::github::{IssuePage, IssueState, Repository};
use crate::stats::IssueStats;

use super::lane::Lane;

/// Filter and pagination of the issue listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueFilterState {
    /// State filter.
    pub state: IssueState,
    /// Page (1-based).
    pub page: u32,
    /// Page size.
    pub per_page: PerPage,
}

impl Default for IssueFilterState {
    fn default() -> Self {
        Self {
            state: IssueState::All,
            page: 1,
            per_page: PerPage::default(),
        }
    }
}

/// Snapshot of the three lanes plus the active filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailState {
    /// Repository metadata.
    pub repository: Lane<Repository>,
    /// Current issue page.
    pub issues: Lane<IssuePage>,
    /// Open/closed counts.
    pub stats: Lane<IssueStats>,
    /// Active filter.
    pub filter: IssueFilterState,
}

impl DetailState {
    /// Item total for pagination under the active filter.
    ///
    /// The issue listing reports no total, so this comes from the statistics
    /// lane: open, closed, or their sum for `all`. Zero until stats load.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.stats
            .value()
            .map_or(0, |stats| stats.total_for(self.filter.state))
    }

    /// Pages available under the active filter, at least one.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        total_pages(self.total_count(), self.filter.per_page)
    }
}
