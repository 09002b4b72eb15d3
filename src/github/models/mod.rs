//! Data models for repositories, issues and search results.
//!
//! Types prefixed with `Api` are internal deserialisation targets that convert
//! into the public snapshot types. Snapshots are immutable values: nothing in
//! the crate mutates a [`Repository`] or [`Issue`] after it is decoded.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::error::ExplorerError;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// A user or organisation account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    /// Login handle.
    pub login: String,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// Profile page URL.
    pub html_url: Option<String>,
}

/// Read-only snapshot of a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repository {
    /// Stable GitHub identifier.
    pub id: u64,
    /// Short name, e.g. `hello-world`.
    pub name: String,
    /// `owner/name`.
    pub full_name: String,
    /// Web page URL.
    pub html_url: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Star count, the default search ordering.
    pub stargazers_count: u64,
    /// Fork count.
    pub forks_count: u64,
    /// Open issues plus open pull requests, as GitHub reports it.
    pub open_issues_count: u64,
    /// Watcher count.
    pub watchers_count: u64,
    /// Primary language.
    pub language: Option<String>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Owning account.
    pub owner: Account,
}

/// Issue label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    /// Label identifier.
    pub id: u64,
    /// Label name.
    pub name: String,
    /// Display colour as a six digit hex string without `#`.
    pub color: String,
    /// Optional description.
    pub description: Option<String>,
}

/// State of an individual issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    /// Still open.
    #[default]
    Open,
    /// Closed.
    Closed,
}

impl IssueStatus {
    /// Returns the API value for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// Issue state filter for listing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IssueState {
    /// All issues regardless of state.
    #[default]
    All,
    /// Only open issues.
    Open,
    /// Only closed issues.
    Closed,
}

impl IssueState {
    /// Returns the API parameter value for this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Returns the `state` query value, or `None` when the filter is omitted.
    #[must_use]
    pub const fn query_value(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Open | Self::Closed => Some(self.as_str()),
        }
    }
}

impl FromStr for IssueState {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            other => Err(ExplorerError::Configuration {
                message: format!("issue state must be all, open or closed, got {other}"),
            }),
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only snapshot of an issue.
///
/// The owning repository is known from the request that produced the issue;
/// no back-reference is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Issue {
    /// Stable GitHub identifier.
    pub id: u64,
    /// Repository-scoped number.
    pub number: u64,
    /// Title.
    pub title: String,
    /// Open or closed.
    pub state: IssueStatus,
    /// Web page URL.
    pub html_url: Option<String>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Author account.
    pub author: Option<Account>,
    /// Markdown body.
    pub body: Option<String>,
    /// Attached labels.
    pub labels: Vec<Label>,
    /// Comment count.
    pub comments: u64,
    /// True when GitHub lists a pull request through the issues endpoint.
    pub is_pull_request: bool,
}

/// One page of a search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<T> {
    /// Matches across all pages, independent of the page fetched.
    pub total_count: u64,
    /// GitHub gave up before finding every match.
    pub incomplete_results: bool,
    /// Items on the fetched page.
    pub items: Vec<T>,
}

impl<T> Default for SearchResult<T> {
    fn default() -> Self {
        Self {
            total_count: 0,
            incomplete_results: false,
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiAccount {
    pub(crate) login: String,
    pub(crate) avatar_url: Option<String>,
    pub(crate) html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepository {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) full_name: String,
    pub(crate) html_url: Option<String>,
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) stargazers_count: u64,
    #[serde(default)]
    pub(crate) forks_count: u64,
    #[serde(default)]
    pub(crate) open_issues_count: u64,
    #[serde(default)]
    pub(crate) watchers_count: u64,
    pub(crate) language: Option<String>,
    pub(crate) created_at: Option<DateTime<Utc>>,
    pub(crate) updated_at: Option<DateTime<Utc>>,
    pub(crate) owner: ApiAccount,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiLabel {
    pub(crate) id: u64,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) color: String,
    pub(crate) description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiIssue {
    pub(crate) id: u64,
    pub(crate) number: u64,
    pub(crate) title: String,
    pub(crate) state: IssueStatus,
    pub(crate) html_url: Option<String>,
    pub(crate) created_at: Option<DateTime<Utc>>,
    pub(crate) updated_at: Option<DateTime<Utc>>,
    pub(crate) user: Option<ApiAccount>,
    pub(crate) body: Option<String>,
    #[serde(default)]
    pub(crate) labels: Vec<ApiLabel>,
    #[serde(default)]
    pub(crate) comments: u64,
    pub(crate) pull_request: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiSearchResult<T> {
    pub(crate) total_count: u64,
    #[serde(default)]
    pub(crate) incomplete_results: bool,
    #[serde(default = "Vec::new")]
    pub(crate) items: Vec<T>,
}

/// Search response read only for its total.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiSearchCount {
    pub(crate) total_count: u64,
}

impl From<ApiAccount> for Account {
    fn from(value: ApiAccount) -> Self {
        Self {
            login: value.login,
            avatar_url: value.avatar_url,
            html_url: value.html_url,
        }
    }
}

impl From<ApiRepository> for Repository {
    fn from(value: ApiRepository) -> Self {
        Self {
            id: value.id,
            name: value.name,
            full_name: value.full_name,
            html_url: value.html_url,
            description: value.description,
            stargazers_count: value.stargazers_count,
            forks_count: value.forks_count,
            open_issues_count: value.open_issues_count,
            watchers_count: value.watchers_count,
            language: value.language,
            created_at: value.created_at,
            updated_at: value.updated_at,
            owner: value.owner.into(),
        }
    }
}

impl From<ApiLabel> for Label {
    fn from(value: ApiLabel) -> Self {
        Self {
            id: value.id,
            name: value.name,
            color: value.color,
            description: value.description.filter(|text| !text.is_empty()),
        }
    }
}

impl From<ApiIssue> for Issue {
    fn from(value: ApiIssue) -> Self {
        Self {
            id: value.id,
            number: value.number,
            title: value.title,
            state: value.state,
            html_url: value.html_url,
            created_at: value.created_at,
            updated_at: value.updated_at,
            author: value.user.map(Account::from),
            body: value.body,
            labels: value.labels.into_iter().map(Label::from).collect(),
            comments: value.comments,
            is_pull_request: value.pull_request.is_some(),
        }
    }
}

impl<A, T> From<ApiSearchResult<A>> for SearchResult<T>
where
    A: Into<T>,
{
    fn from(value: ApiSearchResult<A>) -> Self {
        Self {
            total_count: value.total_count,
            incomplete_results: value.incomplete_results,
            items: value.items.into_iter().map(Into::into).collect(),
        }
    }
}
