use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Location text failed the zip code format check; nothing was fetched.
    InvalidLocationFormat,
    /// One of the concurrent plant data calls rejected.
    RetrievalFailure,
    /// Calculator or tracker input was non-numeric or not positive.
    ValidationFailure,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code:?}: {message}")]
pub struct BloomError {
    pub code: ErrorCode,
    pub message: String,
}

impl BloomError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_location(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidLocationFormat, message)
    }

    pub fn retrieval(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RetrievalFailure, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailure, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_and_message() {
        let err = BloomError::validation("area must be positive");
        assert_eq!(err.to_string(), "ValidationFailure: area must be positive");
    }

    #[test]
    fn serializes_code_in_snake_case() {
        let err = BloomError::invalid_location("bad zip");
        let json = serde_json::to_value(&err).expect("serialize");
        assert_eq!(json["code"], "invalid_location_format");
        assert_eq!(json["message"], "bad zip");
    }
}
