mod http_transport;
mod response_parser;

pub use http_transport::ReqwestTransport;
pub(crate) use response_parser::ResponseParser;

use crate::errors::MerlinResult;
use async_trait::async_trait;
use http::{HeaderMap, Method};

/// Low-level HTTP transport the services delegate to.
///
/// Works on JSON values so the trait stays object safe; the services
/// serialize and deserialize their typed requests at the edges.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        headers: HeaderMap,
    ) -> MerlinResult<serde_json::Value>;
}
