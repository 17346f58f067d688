use crate::auth::AuthProvider;
use crate::errors::MerlinResult;
use crate::services::images::{ImageGenerationRequest, ImageResponse};
use crate::transport::HttpTransport;
use http::{HeaderMap, Method};
use std::sync::Arc;

/// Image generation sub-resource, constructed by the facade.
pub struct ImageService {
    transport: Arc<dyn HttpTransport>,
    auth: Arc<dyn AuthProvider>,
}

impl ImageService {
    pub(crate) fn new(transport: Arc<dyn HttpTransport>, auth: Arc<dyn AuthProvider>) -> Self {
        Self { transport, auth }
    }

    pub async fn generate(&self, request: ImageGenerationRequest) -> MerlinResult<ImageResponse> {
        let mut headers = HeaderMap::new();
        self.auth.authenticate(&mut headers).await?;

        let body = serde_json::to_value(&request)?;
        let response = self
            .transport
            .request_json(Method::POST, "/images/generations", Some(body), headers)
            .await?;

        Ok(serde_json::from_value(response)?)
    }
}
