//! Repository search and issue exploration over the GitHub REST API.
//!
//! The library wraps Octocrab behind a [`RepositoryGateway`] trait and builds
//! two orchestrators on top of it:
//!
//! - [`SearchStore`] runs a repository search session where only the most
//!   recently issued search may commit its results.
//! - [`RepositoryDetail`] shows one repository with a page of its issues and
//!   open/closed counts, each loading and failing independently.
//!
//! Failures are classified into [`ExplorerError`], whose rendered message is
//! what the orchestrators store for display.

pub mod config;
pub mod detail;
pub mod freshness;
pub mod github;
pub mod search;
pub mod stats;

pub use config::{ExplorerConfig, OperationMode};
pub use detail::{DetailState, IssueFilterState, Lane, RepositoryDetail};
pub use github::{
    ExplorerError, Issue, IssuePage, IssueState, OctocrabRepositoryGateway, PerPage,
    PersonalAccessToken, RateLimitInfo, Repository, RepositoryGateway, RepositoryLocator,
    SearchQuery, SearchResult, SearchSort,
};
pub use search::{SearchLocation, SearchState, SearchStatus, SearchStore};
pub use stats::{IssueStatistics, IssueStats};
