//! Error types for feed image rewriting
//!
//! The transformation core never fails: malformed markup, unresolved images and
//! missing renditions are ordinary branches. Errors only surface at the
//! boundaries, when settings are validated or collaborator data is loaded.

use thiserror::Error;

use crate::utils::{MAX_MAX_WIDTH, MIN_MAX_WIDTH};

/// Result type alias for boundary operations
pub type FeedResult<T> = Result<T, FeedError>;

/// Error types for settings validation and collaborator loading
#[derive(Debug, Error)]
pub enum FeedError {
    /// Maximum image width outside the accepted range
    #[error("Image width {0} is outside the accepted range {MIN_MAX_WIDTH}..={MAX_MAX_WIDTH}")]
    MaxWidthOutOfRange(i64),

    /// Upload base URL unusable for matching managed assets
    #[error("Invalid upload base URL '{url}': {reason}")]
    InvalidUploadBase { url: String, reason: String },

    /// Two manifest entries claim the same attachment id
    #[error("Duplicate attachment id {0} in media manifest")]
    DuplicateAttachment(u64),

    /// JSON decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FeedError {
    /// Check whether the error came from user-provided settings rather than
    /// from collaborator data
    #[must_use]
    pub fn is_settings_error(&self) -> bool {
        matches!(self, FeedError::MaxWidthOutOfRange(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_names_bounds() {
        let message = FeedError::MaxWidthOutOfRange(950).to_string();
        assert!(message.contains("950"));
        assert!(message.contains("200..=900"));
    }

    #[test]
    fn test_settings_error_classification() {
        assert!(FeedError::MaxWidthOutOfRange(10).is_settings_error());
        assert!(!FeedError::DuplicateAttachment(4).is_settings_error());
    }
}
