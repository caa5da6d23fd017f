use thiserror::Error;

/// Errors raised while configuring a classifier.
///
/// Classification itself never fails; these only surface when a custom
/// vocabulary is loaded or validated.
#[derive(Debug, Error)]
pub enum ShirabeError {
    /// A vocabulary table is empty or contains an unusable marker.
    #[error("invalid vocabulary table `{table}`: {reason}")]
    InvalidVocabulary {
        /// Name of the offending table.
        table: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// Vocabulary JSON could not be decoded.
    #[error("malformed vocabulary document: {0}")]
    VocabularyFormat(#[from] serde_json::Error),

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),
}

/// Result type alias for Shirabe operations.
pub type Result<T> = std::result::Result<T, ShirabeError>;
