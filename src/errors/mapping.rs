use crate::errors::{
    AuthenticationError, MerlinError, RateLimitError, ServerError, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Error body shape returned by the OpenAI API and forwarded unchanged by the
/// Merlin gateway.
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub code: Option<String>,
    pub param: Option<String>,
}

pub struct ErrorMapper;

impl ErrorMapper {
    /// Maps an HTTP status code and optional error body to a MerlinError.
    pub fn map_status_code(
        status_code: u16,
        error_response: Option<ApiErrorResponse>,
    ) -> MerlinError {
        let error_detail = error_response.map(|r| r.error);
        let message = error_detail
            .as_ref()
            .map(|d| d.message.clone())
            .unwrap_or_else(|| format!("HTTP error: {}", status_code));
        let error_type = error_detail.as_ref().and_then(|d| d.error_type.clone());
        let error_code = error_detail.as_ref().and_then(|d| d.code.clone());

        match status_code {
            400 => MerlinError::Validation(ValidationError::InvalidRequest(message)),
            401 => {
                if message.contains("expired") {
                    MerlinError::Authentication(AuthenticationError::ExpiredApiKey(message))
                } else {
                    MerlinError::Authentication(AuthenticationError::InvalidApiKey(message))
                }
            }
            403 => {
                if message.contains("permission") {
                    MerlinError::Authentication(AuthenticationError::InsufficientPermissions(
                        message,
                    ))
                } else {
                    MerlinError::Authentication(AuthenticationError::Unauthorized(message))
                }
            }
            429 => MerlinError::RateLimit(RateLimitError::RateLimitExceeded { message }),
            500 => MerlinError::Server(ServerError::InternalError(message)),
            502 => MerlinError::Server(ServerError::BadGateway(message)),
            503 => MerlinError::Server(ServerError::ServiceUnavailable(message)),
            504 => MerlinError::Server(ServerError::GatewayTimeout(message)),
            _ => MerlinError::Request {
                status_code,
                message,
                error_type,
                error_code,
            },
        }
    }

    /// Extracts the Retry-After header value in seconds, if present.
    pub fn extract_retry_after(headers: &http::HeaderMap) -> Option<u64> {
        headers
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
    }
}
