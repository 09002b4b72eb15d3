//! Application configuration loaded from CLI, environment, and files.
//!
//! Values merge with `ortho_config`'s layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.repo-explorer.toml` in current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `REPO_EXPLORER_*`, plus `GITHUB_TOKEN` for
//!    the token
//! 4. **Command-line arguments** – `--query`/`-q`, `--owner`/`-o`,
//!    `--repo`/`-r`, and so on
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! api_url = "https://api.github.com"
//! per_page = 20
//! issue_state = "open"
//! sort = "stars"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::{
    DEFAULT_API_BASE, ExplorerError, IssueState, PerPage, PersonalAccessToken, RepositoryLocator,
    SearchSort,
};

/// What one invocation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Show one page of repository search results.
    Search,
    /// Show one repository with a page of its issues.
    Repository,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `REPO_EXPLORER_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `REPO_EXPLORER_QUERY` or `--query`: Repository search terms
/// - `REPO_EXPLORER_OWNER` / `REPO_EXPLORER_REPO`: Repository to inspect
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use repo_explorer::ExplorerConfig;
///
/// let config = ExplorerConfig::load().expect("failed to load configuration");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REPO_EXPLORER",
    discovery(
        dotfile_name = ".repo-explorer.toml",
        config_file_name = "repo-explorer.toml",
        app_name = "repo-explorer"
    )
)]
pub struct ExplorerConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `REPO_EXPLORER_TOKEN` or `GITHUB_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Base URL of the GitHub REST API.
    #[ortho_config(cli_short = 'a')]
    pub api_url: String,

    /// Repository search terms, qualifiers included.
    ///
    /// Can be provided via:
    /// - CLI: `--query <TERMS>` or `-q <TERMS>`
    /// - Environment: `REPO_EXPLORER_QUERY`
    #[ortho_config(cli_short = 'q')]
    pub query: Option<String>,

    /// Page to show (1-based).
    #[ortho_config(cli_short = 'p')]
    pub page: u32,

    /// Page size: 10, 20 or 50.
    #[ortho_config(cli_short = 'n')]
    pub per_page: u8,

    /// Repository owner (e.g., "octocat").
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository name, or `owner/name`, or a repository URL.
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Issue state filter: all, open or closed.
    #[ortho_config(cli_short = 's')]
    pub issue_state: String,

    /// Search ordering: stars, forks or updated.
    #[ortho_config(cli_short = 'S')]
    pub sort: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: DEFAULT_API_BASE.to_owned(),
            query: None,
            page: 1,
            per_page: PerPage::default().get(),
            owner: None,
            repo: None,
            issue_state: IssueState::default().as_str().to_owned(),
            sort: SearchSort::default().as_str().to_owned(),
        }
    }
}

impl ExplorerConfig {
    /// Resolves the token from configuration or the `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::MissingToken`] when no source provides a
    /// non-blank value.
    pub fn resolve_token(&self) -> Result<PersonalAccessToken, ExplorerError> {
        let value = self
            .token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(ExplorerError::MissingToken)?;
        PersonalAccessToken::new(value)
    }

    /// Determines what to do from the configured fields.
    ///
    /// A repository takes precedence over a query.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Configuration`] when neither a repository nor
    /// a query is configured.
    pub fn operation_mode(&self) -> Result<OperationMode, ExplorerError> {
        if self.repo.is_some() {
            Ok(OperationMode::Repository)
        } else if self.query.as_deref().is_some_and(|query| !query.trim().is_empty()) {
            Ok(OperationMode::Search)
        } else {
            Err(ExplorerError::Configuration {
                message: "nothing to do: pass --query <TERMS> or --owner <OWNER> --repo <REPO>"
                    .to_owned(),
            })
        }
    }

    /// Returns the search terms or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Configuration`] when no query is configured.
    pub fn require_query(&self) -> Result<&str, ExplorerError> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|query| !query.is_empty())
            .ok_or_else(|| ExplorerError::Configuration {
                message: "search terms are required (use --query or -q)".to_owned(),
            })
    }

    /// Resolves the repository to inspect.
    ///
    /// `repo` may be a bare name paired with `owner`, or carry the owner
    /// itself as `owner/name` or a repository URL.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Configuration`] when `repo` is missing, or
    /// the locator error when the pair does not name a repository.
    pub fn require_locator(&self) -> Result<RepositoryLocator, ExplorerError> {
        match (&self.owner, &self.repo) {
            (Some(owner), Some(repo)) => RepositoryLocator::from_owner_repo(owner, repo),
            (None, Some(repo)) => RepositoryLocator::parse(repo),
            (_, None) => Err(ExplorerError::Configuration {
                message: "repository name is required (use --repo or -r)".to_owned(),
            }),
        }
    }

    /// Validated page size.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::InvalidPagination`] for sizes other than 10,
    /// 20 or 50.
    pub fn per_page(&self) -> Result<PerPage, ExplorerError> {
        PerPage::try_from(self.per_page)
    }

    /// Parsed issue state filter.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Configuration`] for unknown states.
    pub fn issue_state(&self) -> Result<IssueState, ExplorerError> {
        self.issue_state.parse()
    }

    /// Parsed search ordering.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Configuration`] for unknown keys.
    pub fn sort(&self) -> Result<SearchSort, ExplorerError> {
        self.sort.parse()
    }
}

#[cfg(test)]
mod tests;
