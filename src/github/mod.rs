//! GitHub API gateway adapter.
//!
//! This module builds authenticated requests against the GitHub REST API and
//! normalises responses into typed snapshots or classified
//! [`ExplorerError`]s, so callers never see Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod pagination;
pub mod rate_limit;

pub use error::ExplorerError;
pub use gateway::{
    DEFAULT_API_BASE, IssuePage, ListIssuesParams, OctocrabRepositoryGateway, RepositoryGateway,
    SearchQuery, SearchSort, SortOrder,
};
pub use locator::{PersonalAccessToken, RepositoryLocator, RepositoryName, RepositoryOwner};
pub use models::{
    Account, Issue, IssueState, IssueStatus, Label, Repository, SearchResult,
};
pub use pagination::{PageInfo, PerPage};
pub use rate_limit::RateLimitInfo;

#[cfg(test)]
pub use gateway::MockRepositoryGateway;
