//! Error mapping from Octocrab and raw HTTP failures into [`TriageError`].

use http::StatusCode;

use crate::github::error::TriageError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Rate limiting is reported as 403 or 429 with a message or documentation
/// link naming the rate limit.
pub(super) fn is_rate_limit_response(
    status: StatusCode,
    message: &str,
    documentation_url: Option<&str>,
) -> bool {
    let is_rate_limit_status = matches!(
        status,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    );

    let message_indicates_rate_limit = message.to_lowercase().contains("rate limit")
        || documentation_url.is_some_and(|url| url.contains("rate-limit"));

    is_rate_limit_status && message_indicates_rate_limit
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> TriageError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return map_status(
            operation,
            source.status_code,
            &source.message,
            source.documentation_url.as_deref(),
        );
    }

    if is_network_error(error) {
        return TriageError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    TriageError::Api {
        message: format!("{operation} failed: {error}"),
    }
}

pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> TriageError {
    let message = maybe_message.unwrap_or_else(|| "unknown error".to_owned());
    map_status(operation, status, &message, None)
}

fn map_status(
    operation: &str,
    status: StatusCode,
    message: &str,
    documentation_url: Option<&str>,
) -> TriageError {
    if is_rate_limit_response(status, message, documentation_url) {
        TriageError::RateLimitExceeded {
            message: format!("{operation} failed: {message}"),
        }
    } else if is_auth_failure(status) {
        TriageError::Authentication {
            message: format!("{operation} failed: GitHub returned {status} {message}"),
        }
    } else {
        TriageError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}
