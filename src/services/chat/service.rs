use crate::auth::AuthProvider;
use crate::errors::MerlinResult;
use crate::services::chat::{ChatCompletionRequest, ChatCompletionResponse};
use crate::transport::HttpTransport;
use http::{HeaderMap, Method};
use std::sync::Arc;

/// Chat completions sub-resource, constructed by the facade.
pub struct ChatService {
    transport: Arc<dyn HttpTransport>,
    auth: Arc<dyn AuthProvider>,
}

impl ChatService {
    pub(crate) fn new(transport: Arc<dyn HttpTransport>, auth: Arc<dyn AuthProvider>) -> Self {
        Self { transport, auth }
    }

    pub async fn create(
        &self,
        request: ChatCompletionRequest,
    ) -> MerlinResult<ChatCompletionResponse> {
        let mut headers = HeaderMap::new();
        self.auth.authenticate(&mut headers).await?;

        let body = serde_json::to_value(&request)?;
        let response = self
            .transport
            .request_json(Method::POST, "/chat/completions", Some(body), headers)
            .await?;

        Ok(serde_json::from_value(response)?)
    }
}
