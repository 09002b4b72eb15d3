//! Gateway for the GitHub REST endpoints the explorer consumes.
//!
//! The trait-based design lets the orchestrators run against mocks in tests
//! while the Octocrab implementation handles real HTTP requests. Every call
//! is a single request: nothing here retries, caches or deduplicates.

mod client;
mod error_mapping;
mod http_utils;
mod repository;

pub use repository::{
    DEFAULT_API_BASE, IssuePage, ListIssuesParams, OctocrabRepositoryGateway, SearchQuery,
    SearchSort, SortOrder,
};

use async_trait::async_trait;

use crate::github::error::ExplorerError;
use crate::github::locator::RepositoryLocator;
use crate::github::models::{IssueState, Repository, SearchResult};

/// Read operations against the repository-hosting API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryGateway: Send + Sync {
    /// Searches repositories; the total is independent of the page fetched.
    async fn search_repositories(
        &self,
        query: &SearchQuery,
    ) -> Result<SearchResult<Repository>, ExplorerError>;

    /// Fetches one repository's metadata.
    async fn repository(&self, locator: &RepositoryLocator) -> Result<Repository, ExplorerError>;

    /// Lists one page of a repository's issues. No total is reported.
    async fn list_issues(
        &self,
        locator: &RepositoryLocator,
        params: &ListIssuesParams,
    ) -> Result<IssuePage, ExplorerError>;

    /// Counts a repository's issues in `state` through the issue search.
    async fn count_issues(
        &self,
        locator: &RepositoryLocator,
        state: IssueState,
    ) -> Result<u64, ExplorerError>;
}
