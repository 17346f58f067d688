//! Integration tests for image generation through the facade.

use crate::{error_response, setup_mock_server, success_response, test_client};
use merlin_gateway::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::Mock;

#[tokio::test]
async fn test_image_generation_success() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/images/generations"))
        .and(header("x-merlin-key", "mk-test"))
        .and(body_partial_json(json!({"prompt": "A lighthouse at dusk"})))
        .respond_with(success_response(json!({
            "created": 1677652288,
            "data": [{"url": "https://example.com/lighthouse.png"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, GatewayConfig::new("mk-test"));

    let request = ImageGenerationRequest::new("A lighthouse at dusk").with_model("dall-e-3");
    let response = client.images().generate(request).await.unwrap();

    assert_eq!(response.data.len(), 1);
    assert_eq!(
        response.data[0].url.as_deref(),
        Some("https://example.com/lighthouse.png")
    );
}

#[tokio::test]
async fn test_image_generation_server_error() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/images/generations"))
        .respond_with(error_response(
            500,
            json!({
                "error": {
                    "message": "The server had an error",
                    "type": "server_error",
                    "code": null,
                    "param": null
                }
            }),
        ))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, GatewayConfig::new("mk-test"));

    let request = ImageGenerationRequest::new("A lighthouse at dusk");
    let error = client.images().generate(request).await.unwrap_err();

    assert!(error.is_retryable());
    assert_eq!(error.status_code(), Some(500));
}
