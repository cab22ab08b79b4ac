//! Error types for the quiz session engine

use crate::session::SessionStatus;
use thiserror::Error;

/// Main error type for the quiz session engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Position {index} is out of range for a session of {len} questions")]
    OutOfRange { index: i64, len: usize },

    #[error("Option {option} is not valid for a question with {available} options")]
    InvalidOption { option: usize, available: usize },

    #[error("Operation not allowed while the session is {status}")]
    InvalidState { status: SessionStatus },
}

impl QuizError {
    /// Whether this error was raised while setting a session up, rather than
    /// by misuse of a running one.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            QuizError::Configuration(_) | QuizError::Deserialization(_)
        )
    }
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        QuizError::Deserialization(err.to_string())
    }
}

/// Result type alias for the quiz session engine
pub type Result<T> = std::result::Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = QuizError::OutOfRange { index: -1, len: 45 };
        assert_eq!(
            err.to_string(),
            "Position -1 is out of range for a session of 45 questions"
        );
    }

    #[test]
    fn test_is_configuration() {
        assert!(QuizError::Configuration("empty".into()).is_configuration());
        assert!(QuizError::Deserialization("eof".into()).is_configuration());
        assert!(!QuizError::InvalidOption {
            option: 4,
            available: 4
        }
        .is_configuration());
    }
}
