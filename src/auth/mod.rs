mod api_key;

pub use api_key::ApiKeyAuth;

use crate::errors::MerlinResult;
use async_trait::async_trait;
use http::HeaderMap;

/// Trait for authentication providers.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Authenticates the request by adding the appropriate headers.
    async fn authenticate(&self, headers: &mut HeaderMap) -> MerlinResult<()>;
}
