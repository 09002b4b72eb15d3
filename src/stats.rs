//! Open/closed issue statistics for one repository.
//!
//! The issue listing endpoint reports no total, so pagination over issues is
//! driven by these counts instead. Both counts come from the issue search,
//! one leg per state, fetched concurrently and joined.

use tracing::debug;

use crate::github::{ExplorerError, IssueState, RepositoryGateway, RepositoryLocator};

/// Issue counts split by state. Derived on every read, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IssueStats {
    /// Open issues.
    pub open: u64,
    /// Closed issues.
    pub closed: u64,
}

impl IssueStats {
    /// Open plus closed.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.open.saturating_add(self.closed)
    }

    /// Item total for a listing filtered by `state`.
    ///
    /// ```
    /// use repo_explorer::{IssueState, IssueStats};
    ///
    /// let stats = IssueStats { open: 7, closed: 93 };
    /// assert_eq!(stats.total_for(IssueState::Open), 7);
    /// assert_eq!(stats.total_for(IssueState::Closed), 93);
    /// assert_eq!(stats.total_for(IssueState::All), 100);
    /// ```
    #[must_use]
    pub const fn total_for(&self, state: IssueState) -> u64 {
        match state {
            IssueState::Open => self.open,
            IssueState::Closed => self.closed,
            IssueState::All => self.total(),
        }
    }
}

/// Computes [`IssueStats`] through a gateway.
///
/// The aggregator only reads, so one instance may serve several callers
/// concurrently.
pub struct IssueStatistics<'client, Gateway>
where
    Gateway: RepositoryGateway + ?Sized,
{
    client: &'client Gateway,
}

impl<'client, Gateway> IssueStatistics<'client, Gateway>
where
    Gateway: RepositoryGateway + ?Sized,
{
    /// Create a new statistics aggregator.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Counts open and closed issues for `locator`.
    ///
    /// Both legs always run to completion. A zero count is a valid result.
    ///
    /// # Errors
    ///
    /// Fails when either leg fails, with that leg's error. When both fail the
    /// open leg's error is reported.
    pub async fn get_issue_stats(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<IssueStats, ExplorerError> {
        let (open, closed) = tokio::join!(
            self.client.count_issues(locator, IssueState::Open),
            self.client.count_issues(locator, IssueState::Closed),
        );
        let stats = IssueStats {
            open: open?,
            closed: closed?,
        };
        debug!(
            repository = %locator,
            open = stats.open,
            closed = stats.closed,
            "issue statistics loaded"
        );
        Ok(stats)
    }
}
