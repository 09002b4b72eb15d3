//! Error types exposed by the GitHub gateway and the orchestrators.

use thiserror::Error;

use super::rate_limit::RateLimitInfo;

/// Errors surfaced while validating input or communicating with GitHub.
///
/// The rendered message of each variant is what the orchestrators commit into
/// their observable `error` fields, so the wording is user-facing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExplorerError {
    /// The authentication token was missing.
    #[error("GitHub token is missing. Set GITHUB_TOKEN or pass --token.")]
    MissingToken,

    /// A URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// An owner/name pair could not be resolved.
    #[error("repository must be given as owner/name: {input}")]
    InvalidRepository {
        /// The rejected input.
        input: String,
    },

    /// Invalid pagination parameters.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },

    /// GitHub refused the request because the quota is exhausted.
    #[error("GitHub API rate limit exceeded. Please try again later.{}", reset_suffix(.rate_limit.as_ref()))]
    RateLimited {
        /// Rate limit headers captured from the rejected response.
        rate_limit: Option<RateLimitInfo>,
        /// Message returned by GitHub.
        message: String,
    },

    /// The requested resource does not exist.
    #[error("{resource} not found")]
    NotFound {
        /// Human description of what was requested.
        resource: String,
    },

    /// GitHub answered with a non-success status.
    #[error("GitHub API error: {status} - {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message from the response body, or the status reason.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// GitHub answered, but the body could not be decoded.
    #[error("GitHub returned a malformed response: {message}")]
    MalformedResponse {
        /// Decoder error detail.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl ExplorerError {
    /// Returns true for the rate limit classification.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

fn reset_suffix(rate_limit: Option<&RateLimitInfo>) -> String {
    rate_limit.map_or_else(String::new, |info| {
        format!(" (resets at {})", info.reset_at())
    })
}
