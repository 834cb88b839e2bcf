//! Octocrab client construction for the notifications gateway.

use http::Uri;
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;

use crate::github::error::TriageError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the given token and API base URL.
///
/// Octocrab's retry layer is disabled: every call is sent exactly once and a
/// failure is reported to the caller as is.
///
/// # Errors
///
/// Returns `TriageError::InvalidUrl` when the base URI cannot be parsed or
/// `TriageError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &str,
) -> Result<Octocrab, TriageError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| TriageError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| TriageError::Api {
            message: format!("build client failed: {error}"),
        })?
        .add_retry_config(RetryConfig::None)
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
