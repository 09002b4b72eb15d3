//! Identity wrappers for repositories and credentials.

use std::fmt;

use url::Url;

use super::error::ExplorerError;

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, ExplorerError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.contains('/') {
            return Err(ExplorerError::InvalidRepository {
                input: value.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, ExplorerError> {
        let trimmed = value.trim().trim_end_matches(".git");
        if trimmed.is_empty() || trimmed.contains('/') {
            return Err(ExplorerError::InvalidRepository {
                input: value.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Personal access token wrapper enforcing presence.
///
/// The `Debug` form is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ExplorerError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ExplorerError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PersonalAccessToken(***)")
    }
}

/// Identifies one repository by owner and name.
///
/// # Example
///
/// ```
/// use repo_explorer::RepositoryLocator;
///
/// let from_slug = RepositoryLocator::parse("octo/repo").expect("slug should parse");
/// let from_url = RepositoryLocator::parse("https://github.com/octo/repo")
///     .expect("URL should parse");
/// assert_eq!(from_slug, from_url);
/// assert_eq!(from_slug.full_name(), "octo/repo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryLocator {
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a repository locator from owner and repository name strings.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::InvalidRepository` when owner or repo is empty.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, ExplorerError> {
        Ok(Self {
            owner: RepositoryOwner::new(owner)?,
            repository: RepositoryName::new(repo)?,
        })
    }

    /// Parses `owner/name` or a repository web URL such as
    /// `https://github.com/owner/name`.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::InvalidUrl` when a URL cannot be parsed and
    /// `ExplorerError::InvalidRepository` when the path is not `/owner/name`.
    pub fn parse(input: &str) -> Result<Self, ExplorerError> {
        let trimmed = input.trim();
        if !trimmed.contains("://") {
            let (owner, repo) =
                trimmed
                    .split_once('/')
                    .ok_or_else(|| ExplorerError::InvalidRepository {
                        input: input.to_owned(),
                    })?;
            return Self::from_owner_repo(owner, repo);
        }

        let parsed =
            Url::parse(trimmed).map_err(|error| ExplorerError::InvalidUrl(error.to_string()))?;
        let mut segments = parsed
            .path_segments()
            .ok_or_else(|| ExplorerError::InvalidRepository {
                input: input.to_owned(),
            })?;
        let owner = segments.next().unwrap_or_default();
        let repo = segments.next().unwrap_or_default();
        Self::from_owner_repo(owner, repo)
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// `owner/name` form used by search qualifiers.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.as_str(), self.repository.as_str())
    }

    pub(crate) fn repository_path(&self) -> String {
        format!(
            "/repos/{}/{}",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }

    pub(crate) fn issues_path(&self) -> String {
        format!("{}/issues", self.repository_path())
    }
}

impl fmt::Display for RepositoryLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner.as_str(), self.repository.as_str())
    }
}
