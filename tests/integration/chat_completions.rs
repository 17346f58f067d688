//! Integration tests for chat completions through the facade.

use crate::{
    chat_response_body, error_response, setup_mock_server, success_response, test_client,
};
use merlin_gateway::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::Mock;

#[tokio::test]
async fn test_chat_completion_success() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(success_response(chat_response_body()))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, GatewayConfig::new("mk-test"));

    let request = ChatCompletionRequest::new("gpt-4", vec![ChatMessage::user("Test message")]);
    let response = client.chat().create(request).await.unwrap();

    assert_eq!(response.id, "chatcmpl-integration-123");
    assert_eq!(
        response.choices[0].message.content.as_deref(),
        Some("Integration test response")
    );
    assert_eq!(response.usage.unwrap().total_tokens, 15);
}

#[tokio::test]
async fn test_chat_completion_authentication_error() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(error_response(
            401,
            json!({
                "error": {
                    "message": "Incorrect API key provided",
                    "type": "invalid_request_error",
                    "code": "invalid_api_key",
                    "param": null
                }
            }),
        ))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, GatewayConfig::new("mk-test"));

    let request = ChatCompletionRequest::new("gpt-4", vec![ChatMessage::user("Test message")]);
    let error = client.chat().create(request).await.unwrap_err();

    assert!(error.is_authentication_error());
    assert_eq!(error.status_code(), Some(401));
}

#[tokio::test]
async fn test_chat_completion_rate_limit_with_retry_after() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            error_response(
                429,
                json!({
                    "error": {
                        "message": "Rate limit reached",
                        "type": "tokens",
                        "code": null,
                        "param": null
                    }
                }),
            )
            .insert_header("retry-after", "20"),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, GatewayConfig::new("mk-test"));

    let request = ChatCompletionRequest::new("gpt-4", vec![ChatMessage::user("Test message")]);
    let error = client.chat().create(request).await.unwrap_err();

    match error {
        MerlinError::RateLimit(rate_limit) => {
            assert_eq!(rate_limit.retry_after(), Some(20));
        }
        other => panic!("expected rate limit error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_chat_completion_malformed_body() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(success_response(json!({"unexpected": "shape"})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, GatewayConfig::new("mk-test"));

    let request = ChatCompletionRequest::new("gpt-4", vec![ChatMessage::user("Test message")]);
    let error = client.chat().create(request).await.unwrap_err();

    assert!(matches!(error, MerlinError::Deserialization(_)));
}
