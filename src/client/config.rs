use http::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

use crate::errors::MerlinResult;

/// Default base URL for the OpenAI API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default request timeout (10 minutes).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Retry count forwarded to the gateway when none is configured.
pub const DEFAULT_GATEWAY_RETRIES: u32 = 2;

/// Placeholder primary key substituted when only the gateway key is set.
/// Satisfies the provider's own key-presence validation; requests carrying it
/// are only useful for gateway-routed models.
pub const PLACEHOLDER_API_KEY: &str = "sk-undefined";

/// Header carrying the gateway credential.
pub const HEADER_GATEWAY_KEY: &str = "x-merlin-key";

/// Header carrying the comma-joined fallback model list.
pub const HEADER_FALLBACK_MODELS: &str = "x-merlin-fallback-models";

/// Header carrying the gateway-side retry count.
pub const HEADER_RETRIES: &str = "x-merlin-retries";

/// Routing configuration for the Merlin gateway.
///
/// Immutable after construction; the facade stores it and derives the three
/// `x-merlin-*` headers from it.
#[derive(Clone)]
pub struct GatewayConfig {
    gateway_key: SecretString,
    max_retries: Option<u32>,
    fallback_models: Option<Vec<String>>,
}

impl GatewayConfig {
    /// Creates a gateway configuration from the gateway credential.
    pub fn new(gateway_key: impl Into<String>) -> Self {
        Self {
            gateway_key: SecretString::new(gateway_key.into()),
            max_retries: None,
            fallback_models: None,
        }
    }

    /// Sets the gateway-side retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Sets the ordered fallback model list used for gateway-side failover.
    pub fn with_fallback_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallback_models = Some(models.into_iter().map(Into::into).collect());
        self
    }

    pub fn gateway_key(&self) -> &str {
        self.gateway_key.expose_secret()
    }

    pub fn max_retries(&self) -> Option<u32> {
        self.max_retries
    }

    pub fn fallback_models(&self) -> Option<&[String]> {
        self.fallback_models.as_deref()
    }

    /// Inserts the derived routing headers into `headers`.
    ///
    /// `x-merlin-fallback-models` is always present (empty string when no
    /// fallbacks are configured) and `x-merlin-retries` defaults to "2".
    pub(crate) fn apply_routing_headers(&self, headers: &mut HeaderMap) -> MerlinResult<()> {
        headers.insert(
            HEADER_GATEWAY_KEY,
            HeaderValue::from_str(self.gateway_key.expose_secret())?,
        );

        let fallback = self
            .fallback_models
            .as_deref()
            .map(|models| models.join(","))
            .unwrap_or_default();
        headers.insert(HEADER_FALLBACK_MODELS, HeaderValue::from_str(&fallback)?);

        let retries = self.max_retries.unwrap_or(DEFAULT_GATEWAY_RETRIES);
        headers.insert(HEADER_RETRIES, HeaderValue::from_str(&retries.to_string())?);

        Ok(())
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("gateway_key", &"[REDACTED]")
            .field("max_retries", &self.max_retries)
            .field("fallback_models", &self.fallback_models)
            .finish()
    }
}

/// Fully resolved client configuration handed to the transport.
///
/// Produced by [`MerlinClient`](crate::client::MerlinClient) construction;
/// `default_headers` already contains the merged caller headers plus the
/// routing headers.
#[derive(Clone)]
pub(crate) struct ClientConfig {
    pub(crate) api_key: SecretString,
    pub(crate) organization: Option<String>,
    pub(crate) base_url: Url,
    pub(crate) timeout: Duration,
    pub(crate) proxy: Option<Url>,
    pub(crate) user_agent: String,
    pub(crate) default_headers: HeaderMap,
    pub(crate) default_query: Vec<(String, String)>,
    pub(crate) http_client: Option<reqwest::Client>,
}

pub(crate) fn default_user_agent() -> String {
    format!("merlin-gateway/{}", env!("CARGO_PKG_VERSION"))
}
