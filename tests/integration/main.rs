//! Integration tests using WireMock.
//!
//! These verify the full facade path: credential resolution, routing-header
//! injection, request serialization and error mapping against a mock HTTP
//! server.

mod chat_completions;
mod gateway_headers;
mod images;

use merlin_gateway::prelude::*;
use url::Url;
use wiremock::{MockServer, ResponseTemplate};

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Builds a client against the mock server with both credentials set.
pub fn test_client(server: &MockServer, gateway: GatewayConfig) -> MerlinClient {
    let options = MerlinOptions::new()
        .with_api_key("sk-test-api-key")
        .with_base_url(Url::parse(&server.uri()).unwrap())
        .with_gateway(gateway);

    MerlinClient::with_env(options, &MapEnv::new()).unwrap()
}

pub fn success_response(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

pub fn error_response(status: u16, error_body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(error_body)
}

pub fn chat_response_body() -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-integration-123",
        "object": "chat.completion",
        "created": 1677652288,
        "model": "gpt-4-0613",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": "Integration test response"
            },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 10,
            "completion_tokens": 5,
            "total_tokens": 15
        }
    })
}
