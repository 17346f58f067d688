use crate::errors::categories::{
    AuthenticationError, ConfigurationError, NetworkError, RateLimitError, ServerError,
    ValidationError,
};
use thiserror::Error;

pub type MerlinResult<T> = Result<T, MerlinError>;

#[derive(Error, Debug)]
pub enum MerlinError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Rate limit error: {0}")]
    RateLimit(#[from] RateLimitError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    #[error("Request error: {status_code} - {message}")]
    Request {
        status_code: u16,
        message: String,
        error_type: Option<String>,
        error_code: Option<String>,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl MerlinError {
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            MerlinError::RateLimit(_)
                | MerlinError::Network(_)
                | MerlinError::Server(ServerError::ServiceUnavailable(_))
                | MerlinError::Server(ServerError::InternalError(_))
        )
    }

    pub fn is_configuration_error(&self) -> bool {
        matches!(self, MerlinError::Configuration(_))
    }

    pub fn is_authentication_error(&self) -> bool {
        matches!(self, MerlinError::Authentication(_))
    }

    pub fn error_code(&self) -> Option<&str> {
        match self {
            MerlinError::Request { error_code, .. } => error_code.as_deref(),
            _ => None,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            MerlinError::Request { status_code, .. } => Some(*status_code),
            MerlinError::Authentication(_) => Some(401),
            MerlinError::RateLimit(_) => Some(429),
            MerlinError::Server(ServerError::InternalError(_)) => Some(500),
            MerlinError::Server(ServerError::ServiceUnavailable(_)) => Some(503),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MerlinError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MerlinError::Network(NetworkError::ConnectionTimeout(err.to_string()))
        } else if err.is_connect() {
            MerlinError::Network(NetworkError::ConnectionFailed(err.to_string()))
        } else {
            MerlinError::Network(NetworkError::RequestFailed(err.to_string()))
        }
    }
}

impl From<serde_json::Error> for MerlinError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            MerlinError::Deserialization(err.to_string())
        } else {
            MerlinError::Serialization(err.to_string())
        }
    }
}

impl From<url::ParseError> for MerlinError {
    fn from(err: url::ParseError) -> Self {
        MerlinError::Configuration(ConfigurationError::InvalidBaseUrl(err.to_string()))
    }
}

impl From<http::header::InvalidHeaderValue> for MerlinError {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        MerlinError::Configuration(ConfigurationError::InvalidHeaderValue(err.to_string()))
    }
}
