use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API responded with status {status}")]
    StatusError { status: u16 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ResumeError {
    /// Whether the error happened while talking to the resume endpoint.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            ResumeError::ApiError(_)
                | ResumeError::StatusError { .. }
                | ResumeError::SerializationError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ResumeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ResumeError::StatusError { status: 503 };
        assert_eq!(err.to_string(), "API responded with status 503");
        assert!(err.is_fetch_error());
    }

    #[test]
    fn test_config_error_is_not_fetch_error() {
        let err = ResumeError::InvalidConfigValueError {
            field: "api.base_url".to_string(),
            value: "nope".to_string(),
            reason: "Invalid URL format".to_string(),
        };
        assert!(!err.is_fetch_error());
        assert!(err.to_string().contains("api.base_url"));
    }
}
