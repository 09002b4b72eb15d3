//! Drives the three lanes of one repository detail view.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::freshness::{RequestToken, TokenCounter};
use crate::github::{
    IssueState, ListIssuesParams, PerPage, RepositoryGateway, RepositoryLocator,
};
use crate::stats::IssueStatistics;

use super::state::{DetailState, IssueFilterState};

#[derive(Debug, Default)]
struct View {
    state: DetailState,
    metadata_tokens: TokenCounter,
    listing_tokens: TokenCounter,
}

/// Repository detail orchestrator for a single `owner/name`.
///
/// Metadata is one lane. The issue page and the statistics are two more
/// lanes that always refetch together, whenever the filter or page changes.
/// Each lane commits and fails on its own, and a filter or page change
/// supersedes listing requests still in flight.
///
/// A new repository identity means a new orchestrator.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
///
/// use repo_explorer::{
///     IssueState, OctocrabRepositoryGateway, PersonalAccessToken, RepositoryDetail,
///     RepositoryLocator,
/// };
///
/// let token = PersonalAccessToken::new("ghp_example")?;
/// let gateway = Arc::new(OctocrabRepositoryGateway::for_token(&token, "https://api.github.com")?);
/// let detail = RepositoryDetail::new(gateway, RepositoryLocator::parse("octo/repo")?);
/// detail.load().await;
/// detail.set_state_filter(IssueState::Open).await;
/// println!("{} open issues", detail.total_count());
/// ```
pub struct RepositoryDetail<Gateway>
where
    Gateway: RepositoryGateway + ?Sized,
{
    gateway: Arc<Gateway>,
    locator: RepositoryLocator,
    view: Arc<Mutex<View>>,
}

impl<Gateway> Clone for RepositoryDetail<Gateway>
where
    Gateway: RepositoryGateway + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            locator: self.locator.clone(),
            view: Arc::clone(&self.view),
        }
    }
}

impl<Gateway> RepositoryDetail<Gateway>
where
    Gateway: RepositoryGateway + ?Sized,
{
    /// Creates an unloaded view showing all issues, ten per page.
    #[must_use]
    pub fn new(gateway: Arc<Gateway>, locator: RepositoryLocator) -> Self {
        Self {
            gateway,
            locator,
            view: Arc::new(Mutex::new(View::default())),
        }
    }

    /// Sets the initial filter.
    #[must_use]
    pub fn with_filter(self, filter: IssueFilterState) -> Self {
        self.lock().state.filter = IssueFilterState {
            page: filter.page.max(1),
            ..filter
        };
        self
    }

    /// Repository shown by this view.
    #[must_use]
    pub const fn locator(&self) -> &RepositoryLocator {
        &self.locator
    }

    /// Copy of the current view state.
    #[must_use]
    pub fn snapshot(&self) -> DetailState {
        self.lock().state.clone()
    }

    /// Active filter.
    #[must_use]
    pub fn filter(&self) -> IssueFilterState {
        self.lock().state.filter
    }

    /// Issue total under the active filter, derived from the stats lane.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.lock().state.total_count()
    }

    /// Pages available under the active filter, at least one.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.lock().state.total_pages()
    }

    /// Loads every lane concurrently.
    pub async fn load(&self) {
        tokio::join!(self.load_repository(), self.load_issues());
    }

    /// Fetches repository metadata into the first lane.
    pub async fn load_repository(&self) {
        let token = {
            let mut view = self.lock();
            view.state.repository.begin();
            view.metadata_tokens.issue()
        };

        let outcome = self.gateway.repository(&self.locator).await;

        let mut view = self.lock();
        if !view.metadata_tokens.is_current(token) {
            debug!(repository = %self.locator, "discarding superseded repository metadata");
            return;
        }
        match outcome {
            Ok(repository) => view.state.repository.succeed(repository),
            Err(error) => {
                debug!(repository = %self.locator, %error, "repository metadata failed");
                view.state.repository.fail(error.to_string());
            }
        }
    }

    /// Refetches the issue page and statistics for the active filter.
    ///
    /// Both lanes start together and each commits as soon as its own request
    /// completes.
    pub async fn load_issues(&self) {
        let (token, filter) = {
            let mut view = self.lock();
            view.state.issues.begin();
            view.state.stats.begin();
            (view.listing_tokens.issue(), view.state.filter)
        };

        tokio::join!(
            self.fetch_issue_page(token, filter),
            self.fetch_stats(token),
        );
    }

    /// Switches the state filter and returns to the first page.
    pub async fn set_state_filter(&self, state: IssueState) {
        self.update_filter(|filter| {
            filter.state = state;
            filter.page = 1;
        });
        self.load_issues().await;
    }

    /// Moves to `page`. Page zero is read as page one.
    pub async fn set_page(&self, page: u32) {
        self.update_filter(|filter| filter.page = page.max(1));
        self.load_issues().await;
    }

    /// Changes the page size and returns to the first page.
    pub async fn set_per_page(&self, per_page: PerPage) {
        self.update_filter(|filter| {
            filter.per_page = per_page;
            filter.page = 1;
        });
        self.load_issues().await;
    }

    async fn fetch_issue_page(&self, token: RequestToken, filter: IssueFilterState) {
        let params = ListIssuesParams {
            state: filter.state,
            page: filter.page,
            per_page: filter.per_page.get(),
        };
        let outcome = self.gateway.list_issues(&self.locator, &params).await;

        let mut view = self.lock();
        if !view.listing_tokens.is_current(token) {
            debug!(
                repository = %self.locator,
                token = token.value(),
                "discarding superseded issue page"
            );
            return;
        }
        match outcome {
            Ok(page) => {
                debug!(
                    repository = %self.locator,
                    state = %filter.state,
                    page = filter.page,
                    items = page.items.len(),
                    "issue page committed"
                );
                view.state.issues.succeed(page);
            }
            Err(error) => {
                debug!(repository = %self.locator, %error, "issue page failed");
                view.state.issues.fail(error.to_string());
            }
        }
    }

    async fn fetch_stats(&self, token: RequestToken) {
        let outcome = IssueStatistics::new(self.gateway.as_ref())
            .get_issue_stats(&self.locator)
            .await;

        let mut view = self.lock();
        if !view.listing_tokens.is_current(token) {
            debug!(
                repository = %self.locator,
                token = token.value(),
                "discarding superseded issue statistics"
            );
            return;
        }
        match outcome {
            Ok(stats) => view.state.stats.succeed(stats),
            Err(error) => {
                debug!(repository = %self.locator, %error, "issue statistics failed");
                view.state.stats.fail(error.to_string());
            }
        }
    }

    fn update_filter(&self, change: impl FnOnce(&mut IssueFilterState)) {
        change(&mut self.lock().state.filter);
    }

    fn lock(&self) -> MutexGuard<'_, View> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
