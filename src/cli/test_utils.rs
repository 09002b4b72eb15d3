//! Shared test utilities for CLI tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use repo_explorer::github::ListIssuesParams;
use repo_explorer::{
    ExplorerError, IssuePage, IssueState, Repository, RepositoryGateway, RepositoryLocator,
    SearchQuery, SearchResult,
};

type Slot<T> = Arc<Mutex<Option<Result<T, ExplorerError>>>>;

/// A gateway that records its inputs and returns preconfigured responses.
///
/// Clones share recordings, so a test keeps one clone while the code under
/// test owns another.
#[derive(Clone, Default)]
pub struct StubGateway {
    /// Every search query received.
    pub searches: Arc<Mutex<Vec<SearchQuery>>>,
    /// Every issue listing request received.
    pub listings: Arc<Mutex<Vec<ListIssuesParams>>>,
    /// Response to the next search (consumed on first call).
    pub search_response: Slot<SearchResult<Repository>>,
    /// Response to the next repository lookup (consumed on first call).
    pub repository_response: Slot<Repository>,
    /// Response to the next issue listing (consumed on first call).
    pub issues_response: Slot<IssuePage>,
    /// Open and closed issue counts.
    pub counts: (u64, u64),
}

impl StubGateway {
    /// Stub answering searches with `response`.
    pub fn searching(response: Result<SearchResult<Repository>, ExplorerError>) -> Self {
        Self {
            search_response: Arc::new(Mutex::new(Some(response))),
            ..Self::default()
        }
    }

    /// Stub answering the detail lanes.
    pub fn detail(
        repository: Result<Repository, ExplorerError>,
        issues: Result<IssuePage, ExplorerError>,
        counts: (u64, u64),
    ) -> Self {
        Self {
            repository_response: Arc::new(Mutex::new(Some(repository))),
            issues_response: Arc::new(Mutex::new(Some(issues))),
            counts,
            ..Self::default()
        }
    }
}

fn take<T>(slot: &Slot<T>) -> Result<T, ExplorerError> {
    slot.lock()
        .expect("response mutex should be available")
        .take()
        .expect("response should only be consumed once")
}

#[async_trait]
impl RepositoryGateway for StubGateway {
    async fn search_repositories(
        &self,
        query: &SearchQuery,
    ) -> Result<SearchResult<Repository>, ExplorerError> {
        self.searches
            .lock()
            .expect("searches mutex should be available")
            .push(query.clone());
        take(&self.search_response)
    }

    async fn repository(&self, _locator: &RepositoryLocator) -> Result<Repository, ExplorerError> {
        take(&self.repository_response)
    }

    async fn list_issues(
        &self,
        _locator: &RepositoryLocator,
        params: &ListIssuesParams,
    ) -> Result<IssuePage, ExplorerError> {
        self.listings
            .lock()
            .expect("listings mutex should be available")
            .push(*params);
        take(&self.issues_response)
    }

    async fn count_issues(
        &self,
        _locator: &RepositoryLocator,
        state: IssueState,
    ) -> Result<u64, ExplorerError> {
        Ok(match state {
            IssueState::Open => self.counts.0,
            IssueState::Closed => self.counts.1,
            IssueState::All => self.counts.0 + self.counts.1,
        })
    }
}
