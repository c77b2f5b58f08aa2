//! Error types shared by the collaborators of the matcher

use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaqError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Knowledge base load timed out after {0:?}")]
    LoadTimeout(Duration),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FaqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FaqError::Store("connection refused".to_string());
        assert_eq!(err.to_string(), "Store error: connection refused");

        let err = FaqError::LoadTimeout(Duration::from_millis(250));
        assert_eq!(err.to_string(), "Knowledge base load timed out after 250ms");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: FaqError = io.into();
        assert!(matches!(err, FaqError::Io(_)));
    }
}
