//! Verifies the derived x-merlin-* headers reach the wire.

use crate::{chat_response_body, setup_mock_server, success_response, test_client};
use merlin_gateway::prelude::*;
use url::Url;
use wiremock::matchers::{header, headers, method, path, query_param};
use wiremock::Mock;

#[tokio::test]
async fn test_routing_headers_forwarded() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("x-merlin-key", "mk-secret-key"))
        .and(headers(
            "x-merlin-fallback-models",
            vec!["gpt-4", "gpt-3.5-turbo"],
        ))
        .and(header("x-merlin-retries", "5"))
        .and(header("authorization", "Bearer sk-test-api-key"))
        .respond_with(success_response(chat_response_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = GatewayConfig::new("mk-secret-key")
        .with_max_retries(5)
        .with_fallback_models(["gpt-4", "gpt-3.5-turbo"]);
    let client = test_client(&mock_server, gateway);

    let request = ChatCompletionRequest::new("gpt-4", vec![ChatMessage::user("Hello")]);
    let result = client.chat().create(request).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_routing_header_defaults() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("x-merlin-fallback-models", ""))
        .and(header("x-merlin-retries", "2"))
        .respond_with(success_response(chat_response_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, GatewayConfig::new("mk-secret-key"));

    let request = ChatCompletionRequest::new("gpt-4", vec![ChatMessage::user("Hello")]);
    let result = client.chat().create(request).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_caller_headers_and_query_forwarded() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("x-request-source", "integration-test"))
        .and(header("x-merlin-key", "mk-secret-key"))
        .and(query_param("api-version", "2024-01"))
        .respond_with(success_response(chat_response_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut default_headers = http::HeaderMap::new();
    default_headers.insert(
        "x-request-source",
        http::HeaderValue::from_static("integration-test"),
    );

    let options = MerlinOptions::new()
        .with_api_key("sk-test-api-key")
        .with_base_url(Url::parse(&mock_server.uri()).unwrap())
        .with_default_headers(default_headers)
        .with_query_param("api-version", "2024-01")
        .with_gateway(GatewayConfig::new("mk-secret-key"));
    let client = MerlinClient::with_env(options, &MapEnv::new()).unwrap();

    let request = ChatCompletionRequest::new("gpt-4", vec![ChatMessage::user("Hello")]);
    let result = client.chat().create(request).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_placeholder_key_sent_when_gateway_only() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-undefined"))
        .and(header("x-merlin-key", "mk-secret-key"))
        .respond_with(success_response(chat_response_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = MerlinOptions::new()
        .with_base_url(Url::parse(&mock_server.uri()).unwrap())
        .with_gateway(GatewayConfig::new("mk-secret-key"));
    let client = MerlinClient::with_env(options, &MapEnv::new()).unwrap();

    let request = ChatCompletionRequest::new("gpt-4", vec![ChatMessage::user("Hello")]);
    let result = client.chat().create(request).await;

    assert!(result.is_ok());
}
