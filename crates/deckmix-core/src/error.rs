//! Error types for the deckmix application.

use thiserror::Error;

/// Reasons a mixing request can fail.
///
/// Every validation variant carries enough context for the caller to show an
/// actionable message; `InsufficientCards` carries the maximum available count
/// so an input control can be clamped to it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MixError {
    /// No deck was selected
    #[error("Select at least one deck to mix cards from")]
    NoDecksSelected,

    /// Requested card count is zero or negative
    #[error("Card count must be at least 1 (got {requested})")]
    InvalidCount { requested: i64 },

    /// The selected decks hold no cards at all
    #[error("The selected decks do not contain any cards")]
    EmptyDecks,

    /// More cards were requested than the selected decks hold
    #[error("Requested {requested} cards but only {max_available} available")]
    InsufficientCards { requested: i64, max_available: usize },

    /// Anything that went wrong after validation passed
    #[error("Failed to mix cards: {0}")]
    Unexpected(String),
}

impl MixError {
    /// Returns the maximum available card count for `InsufficientCards`.
    pub fn max_available(&self) -> Option<usize> {
        match self {
            Self::InsufficientCards { max_available, .. } => Some(*max_available),
            _ => None,
        }
    }

    /// Whether this is one of the expected validation outcomes.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Unexpected(_))
    }
}

/// A shared error type for the entire deckmix workspace.
#[derive(Error, Debug, Clone)]
pub enum DeckmixError {
    /// Mixing request was rejected or failed
    #[error(transparent)]
    Mix(#[from] MixError),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Data access error (document store layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DeckmixError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error came from mixing validation or sampling
    pub fn as_mix_error(&self) -> Option<&MixError> {
        match self {
            Self::Mix(err) => Some(err),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for DeckmixError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for DeckmixError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, DeckmixError>`.
pub type Result<T> = std::result::Result<T, DeckmixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_cards_message_names_both_counts() {
        let err = MixError::InsufficientCards {
            requested: 12,
            max_available: 8,
        };
        assert_eq!(err.to_string(), "Requested 12 cards but only 8 available");
        assert_eq!(err.max_available(), Some(8));
    }

    #[test]
    fn test_validation_messages_are_distinct() {
        let messages = [
            MixError::NoDecksSelected.to_string(),
            MixError::InvalidCount { requested: 0 }.to_string(),
            MixError::EmptyDecks.to_string(),
            MixError::Unexpected("boom".to_string()).to_string(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert!(!MixError::Unexpected("boom".into()).is_validation());
        assert!(MixError::EmptyDecks.is_validation());
    }

    #[test]
    fn test_mix_error_converts_into_deckmix_error() {
        let err: DeckmixError = MixError::EmptyDecks.into();
        assert_eq!(err.as_mix_error(), Some(&MixError::EmptyDecks));
        assert_eq!(err.to_string(), MixError::EmptyDecks.to_string());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DeckmixError = io.into();
        match err {
            DeckmixError::Io { message } => assert!(message.contains("denied")),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DeckmixError = parse.into();
        match err {
            DeckmixError::Serialization { format, .. } => assert_eq!(format, "JSON"),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
