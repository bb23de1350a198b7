//! LLM error types

use thiserror::Error;

/// Errors that can occur during LLM operations
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Missing API key: set the {0} environment variable")]
    MissingApiKey(String),

    #[error("Malformed completion payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LlmError {
    /// Upstream message without the status prefix, for user-facing notices
    pub fn upstream_message(&self) -> String {
        match self {
            LlmError::ApiError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status when the service answered with an error
    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = LlmError::ApiError {
            status: 401,
            message: "Incorrect API key provided".to_string(),
        };
        assert_eq!(err.to_string(), "API error 401: Incorrect API key provided");
        assert_eq!(err.upstream_message(), "Incorrect API key provided");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_other_errors_have_no_status() {
        let err = LlmError::InvalidResponse("no choices".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.upstream_message(), "Invalid response: no choices");
    }

    #[test]
    fn test_malformed_payload_display() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = LlmError::from(source);
        assert!(err.to_string().starts_with("Malformed completion payload: "));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_missing_api_key_names_variable() {
        let err = LlmError::MissingApiKey("OPENAI_API_KEY".to_string());
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }
}
