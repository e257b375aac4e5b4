//! Error taxonomy for a single update attempt.
//!
//! Every variant terminates the attempt. None of them is retried or
//! recovered locally; `main` prints the diagnostic and exits non-zero.

/// Errors surfaced by the update pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    /// Transport failure or non-success status from the release host
    Network(String),
    /// The release metadata could not be parsed or lacks required fields
    MetadataFormat(String),
    /// No release asset carries the platform-specific binary name
    AssetNotFound(String),
    /// The downloaded binary could not be written to disk
    Write(String),
}

impl std::fmt::Display for UpdateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateError::Network(msg) => write!(f, "Network error: {}", msg),
            UpdateError::MetadataFormat(msg) => {
                write!(f, "Malformed release metadata: {}", msg)
            }
            UpdateError::AssetNotFound(name) => {
                write!(f, "No download found: the latest release has no '{}' asset", name)
            }
            UpdateError::Write(msg) => write!(f, "Failed to write update: {}", msg),
        }
    }
}

impl std::error::Error for UpdateError {}

/// Returns the [`UpdateError`] carried by an anyhow error, if any.
pub fn update_error(e: &anyhow::Error) -> Option<&UpdateError> {
    e.downcast_ref::<UpdateError>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_error_display() {
        let err = UpdateError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = UpdateError::MetadataFormat("missing field `tag_name`".to_string());
        assert!(err.to_string().contains("tag_name"));

        let err = UpdateError::AssetNotFound("achievements_enhanced".to_string());
        assert!(err.to_string().starts_with("No download found"));
        assert!(err.to_string().contains("'achievements_enhanced'"));

        let err = UpdateError::Write("permission denied".to_string());
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_update_error_survives_anyhow_context() {
        use anyhow::Context;

        let result: anyhow::Result<()> =
            Err(UpdateError::Write("disk full".to_string())).context("installing update");
        let err = result.unwrap_err();

        assert_eq!(
            update_error(&err),
            Some(&UpdateError::Write("disk full".to_string()))
        );
    }

    #[test]
    fn test_update_error_absent_for_plain_errors() {
        let err = anyhow::anyhow!("something else");
        assert!(update_error(&err).is_none());
    }
}
