use crate::errors::{ApiErrorResponse, ErrorMapper, MerlinError, MerlinResult, RateLimitError};
use reqwest::Response;

pub(crate) struct ResponseParser;

impl ResponseParser {
    pub(crate) async fn parse_json(response: Response) -> MerlinResult<serde_json::Value> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            serde_json::from_slice(&body).map_err(|e| {
                MerlinError::Deserialization(format!(
                    "failed to deserialize response: {}. Body: {}",
                    e,
                    String::from_utf8_lossy(&body)
                ))
            })
        } else {
            let headers = response.headers().clone();
            let error_response: Option<ApiErrorResponse> = response.json().await.ok();

            let mut error = ErrorMapper::map_status_code(status.as_u16(), error_response);

            if let Some(retry_after) = ErrorMapper::extract_retry_after(&headers) {
                if let MerlinError::RateLimit(ref mut rate_limit_error) = error {
                    *rate_limit_error = RateLimitError::TooManyRequests {
                        message: "Too many requests".to_string(),
                        retry_after_secs: Some(retry_after),
                    };
                }
            }

            Err(error)
        }
    }
}
