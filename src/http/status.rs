//! Translation of reqwest failures into [`UpdateError::Network`] messages.

use reqwest::StatusCode;

use crate::error::UpdateError;

/// Describes a non-success status returned by the release host.
pub(crate) fn describe_status(status: StatusCode) -> String {
    match status {
        StatusCode::UNAUTHORIZED => {
            "Authentication failed (HTTP 401). Check your GITHUB_TOKEN.".to_string()
        }
        StatusCode::FORBIDDEN => {
            "Access forbidden (HTTP 403). The API rate limit may be exceeded; set GITHUB_TOKEN or try again later.".to_string()
        }
        StatusCode::TOO_MANY_REQUESTS => {
            "Rate limit exceeded (HTTP 429). Try again later.".to_string()
        }
        StatusCode::NOT_FOUND => "The requested resource was not found (HTTP 404)".to_string(),
        s if s.is_server_error() => format!("Release host error (HTTP {})", s.as_u16()),
        s => format!("Unexpected response (HTTP {})", s.as_u16()),
    }
}

/// Converts a reqwest error into a network error, naming the status when one exists.
pub(crate) fn network_error(url: &str, error: reqwest::Error) -> UpdateError {
    match error.status() {
        Some(status) => UpdateError::Network(format!("{}: {}", url, describe_status(status))),
        None => UpdateError::Network(format!("{}: {}", url, error)),
    }
}
