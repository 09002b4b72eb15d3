//! Classification of GitHub responses and transport failures.

use http::{HeaderMap, StatusCode};

use crate::github::error::ExplorerError;
use crate::github::rate_limit::{RateLimitInfo, quota_exhausted};

use super::http_utils::extract_github_message;

/// Maps a non-success response onto the error taxonomy.
///
/// A 403 counts as a rate limit only when the remaining-quota header reads
/// zero; other 403s stay ordinary HTTP errors.
pub(super) fn classify_response(
    operation: &str,
    status: StatusCode,
    headers: &HeaderMap,
    body: &str,
) -> Result<(), ExplorerError> {
    if status.is_success() {
        return Ok(());
    }

    let message = extract_github_message(body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_owned());

    let error = if status == StatusCode::FORBIDDEN && quota_exhausted(headers) {
        ExplorerError::RateLimited {
            rate_limit: RateLimitInfo::from_headers(headers),
            message,
        }
    } else if status == StatusCode::NOT_FOUND {
        ExplorerError::NotFound {
            resource: operation.to_owned(),
        }
    } else {
        ExplorerError::Http {
            status: status.as_u16(),
            message,
        }
    };

    tracing::warn!(operation, %status, "GitHub request failed: {error}");
    Err(error)
}

/// Maps an Octocrab failure that happened before a status was available.
pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> ExplorerError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return ExplorerError::Http {
            status: source.status_code.as_u16(),
            message: source.message.clone(),
        };
    }

    tracing::warn!(operation, "transport failure talking to GitHub: {error}");
    ExplorerError::Network {
        message: format!("{operation} failed: {error}"),
    }
}
