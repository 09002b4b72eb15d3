//! Octocrab-backed implementation of [`RepositoryGateway`].

use async_trait::async_trait;
use http::header::LINK;
use octocrab::Octocrab;

use crate::github::error::ExplorerError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
use crate::github::models::{
    ApiIssue, ApiRepository, ApiSearchCount, ApiSearchResult, Issue, IssueState, Repository,
    SearchResult,
};
use crate::github::pagination::{PageInfo, validate_pagination_params};

use super::RepositoryGateway;
use super::client::{build_octocrab_client, get_json};
use super::http_utils::{header_to_string, path_with_query};

mod types;

pub use types::{IssuePage, ListIssuesParams, SearchQuery, SearchSort, SortOrder};

/// Public GitHub API base.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Octocrab-backed repository gateway.
pub struct OctocrabRepositoryGateway {
    client: Octocrab,
}

impl OctocrabRepositoryGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an authenticated Octocrab client for `api_base`.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::InvalidUrl` when the base URI cannot be parsed or
    /// `ExplorerError::Configuration` when Octocrab fails to construct a client.
    pub fn for_token(token: &PersonalAccessToken, api_base: &str) -> Result<Self, ExplorerError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }
}

/// Issue search qualifiers for one repository and state.
pub(crate) fn issue_count_query(locator: &RepositoryLocator, state: IssueState) -> String {
    let mut query = format!("repo:{} is:issue", locator.full_name());
    if let Some(value) = state.query_value() {
        query.push_str(" state:");
        query.push_str(value);
    }
    query
}

#[async_trait]
impl RepositoryGateway for OctocrabRepositoryGateway {
    async fn search_repositories(
        &self,
        query: &SearchQuery,
    ) -> Result<SearchResult<Repository>, ExplorerError> {
        validate_pagination_params(query.page, query.per_page)?;

        let page = query.page.to_string();
        let per_page = query.per_page.to_string();
        let path = path_with_query(
            "/search/repositories",
            &[
                ("q", query.text.as_str()),
                ("sort", query.sort.as_str()),
                ("order", query.order.as_str()),
                ("page", page.as_str()),
                ("per_page", per_page.as_str()),
            ],
        );

        let response =
            get_json::<ApiSearchResult<ApiRepository>>(&self.client, "search repositories", &path)
                .await?;
        Ok(response.value.into())
    }

    async fn repository(&self, locator: &RepositoryLocator) -> Result<Repository, ExplorerError> {
        let operation = format!("repository {locator}");
        let response =
            get_json::<ApiRepository>(&self.client, &operation, &locator.repository_path()).await?;
        Ok(response.value.into())
    }

    async fn list_issues(
        &self,
        locator: &RepositoryLocator,
        params: &ListIssuesParams,
    ) -> Result<IssuePage, ExplorerError> {
        validate_pagination_params(params.page, params.per_page)?;

        let page = params.page.to_string();
        let per_page = params.per_page.to_string();
        let mut query_params = vec![("page", page.as_str()), ("per_page", per_page.as_str())];
        if let Some(state) = params.state.query_value() {
            query_params.push(("state", state));
        }
        let path = path_with_query(&locator.issues_path(), &query_params);

        let operation = format!("issues for {locator}");
        let response = get_json::<Vec<ApiIssue>>(&self.client, &operation, &path).await?;

        let link = header_to_string(response.headers.get(LINK));
        let page_info = PageInfo::from_link_header(params.page, params.per_page, link.as_deref());

        Ok(IssuePage {
            items: response.value.into_iter().map(Issue::from).collect(),
            page_info,
        })
    }

    async fn count_issues(
        &self,
        locator: &RepositoryLocator,
        state: IssueState,
    ) -> Result<u64, ExplorerError> {
        let query = issue_count_query(locator, state);
        let path = path_with_query("/search/issues", &[("q", query.as_str()), ("per_page", "1")]);

        let operation = format!("{state} issue count for {locator}");
        let response = get_json::<ApiSearchCount>(&self.client, &operation, &path).await?;
        Ok(response.value.total_count)
    }
}
