//! Public parameter and result types for repository gateway operations.

use crate::github::models::{Issue, IssueState};
use crate::github::pagination::{PageInfo, PerPage};

/// Search ordering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchSort {
    /// Star count, the popularity metric.
    #[default]
    Stars,
    /// Fork count.
    Forks,
    /// Most recently updated.
    Updated,
}

impl SearchSort {
    /// Returns the API parameter value for this key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stars => "stars",
            Self::Forks => "forks",
            Self::Updated => "updated",
        }
    }
}

impl std::str::FromStr for SearchSort {
    type Err = crate::github::error::ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stars" => Ok(Self::Stars),
            "forks" => Ok(Self::Forks),
            "updated" => Ok(Self::Updated),
            other => Err(crate::github::error::ExplorerError::Configuration {
                message: format!("sort must be stars, forks or updated, got {other}"),
            }),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Largest first.
    #[default]
    Desc,
    /// Smallest first.
    Asc,
}

impl SortOrder {
    /// Returns the API parameter value for this direction.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Desc => "desc",
            Self::Asc => "asc",
        }
    }
}

/// Parameters for a repository search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Raw search terms, including any qualifiers such as `language:rust`.
    pub text: String,
    /// Page number to fetch (1-based).
    pub page: u32,
    /// Items per page.
    pub per_page: u8,
    /// Ordering key.
    pub sort: SearchSort,
    /// Ordering direction.
    pub order: SortOrder,
}

impl SearchQuery {
    /// Builds a query ordered by stars, most popular first.
    #[must_use]
    pub fn new(text: impl Into<String>, page: u32, per_page: PerPage) -> Self {
        Self {
            text: text.into(),
            page,
            per_page: per_page.get(),
            sort: SearchSort::default(),
            order: SortOrder::default(),
        }
    }

    /// Overrides the ordering key.
    #[must_use]
    pub const fn with_sort(mut self, sort: SearchSort) -> Self {
        self.sort = sort;
        self
    }

    /// Overrides the ordering direction.
    #[must_use]
    pub const fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }
}

/// Parameters for listing a repository's issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListIssuesParams {
    /// State filter. `All` omits the filter from the request.
    pub state: IssueState,
    /// Page number to fetch (1-based).
    pub page: u32,
    /// Items per page.
    pub per_page: u8,
}

impl Default for ListIssuesParams {
    fn default() -> Self {
        Self {
            state: IssueState::All,
            page: 1,
            per_page: PerPage::default().get(),
        }
    }
}

/// One page of a repository's issues.
///
/// The listing endpoint reports no item total. Callers needing one must
/// derive it elsewhere (see [`crate::stats`]).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IssuePage {
    /// Issues on this page.
    pub items: Vec<Issue>,
    /// Pagination state from the `Link` header.
    pub page_info: PageInfo,
}
