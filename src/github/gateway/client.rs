//! Octocrab client construction and raw JSON requests.
//!
//! Requests go through Octocrab's raw `_get` so the status line and headers
//! stay visible to [`classify_response`](super::error_mapping::classify_response);
//! the typed helpers would fold a rate-limited 403 into a generic error.

use http::header::ACCEPT;
use http::{HeaderMap, Uri};
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;
use serde::de::DeserializeOwned;

use crate::github::error::ExplorerError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::{classify_response, map_octocrab_error};

/// Media type requested on every call.
pub(super) const GITHUB_V3_JSON: &str = "application/vnd.github.v3+json";

/// Builds an Octocrab client for the given token and API base URL.
///
/// Octocrab's retry middleware is switched off: a failed call surfaces once.
///
/// # Errors
///
/// Returns `ExplorerError::InvalidUrl` when the base URI cannot be parsed or
/// `ExplorerError::Configuration` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &str,
) -> Result<Octocrab, ExplorerError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| ExplorerError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .add_header(ACCEPT, GITHUB_V3_JSON.to_owned())
        .add_retry_config(RetryConfig::None)
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| ExplorerError::Configuration {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| ExplorerError::Configuration {
            message: format!("build client failed: {error}"),
        })
}

/// Decoded body plus the response headers it arrived with.
pub(super) struct JsonResponse<T> {
    pub(super) value: T,
    pub(super) headers: HeaderMap,
}

/// Performs a GET against `path_and_query`, classifies the status and decodes
/// the JSON body.
pub(super) async fn get_json<T: DeserializeOwned>(
    client: &Octocrab,
    operation: &str,
    path_and_query: &str,
) -> Result<JsonResponse<T>, ExplorerError> {
    let uri: Uri = path_and_query
        .parse::<Uri>()
        .map_err(|error| ExplorerError::InvalidUrl(error.to_string()))?;

    tracing::debug!(operation, %uri, "requesting GitHub");

    let response = client
        ._get(uri)
        .await
        .map_err(|error| map_octocrab_error(operation, &error))?;

    let status = response.status();
    let headers = response.headers().clone();
    let body = client
        .body_to_string(response)
        .await
        .map_err(|error| map_octocrab_error(operation, &error))?;

    classify_response(operation, status, &headers, &body)?;

    let value = serde_json::from_str::<T>(&body).map_err(|error| {
        ExplorerError::MalformedResponse {
            message: format!("{operation} response deserialisation failed: {error}"),
        }
    })?;

    Ok(JsonResponse { value, headers })
}
