use http::HeaderMap;
use std::time::Duration;
use url::Url;

use crate::client::GatewayConfig;

/// Construction options for [`MerlinClient`](crate::client::MerlinClient).
///
/// Everything is optional except the gateway configuration, which
/// construction rejects when absent. Unset credentials fall back to the
/// `OPENAI_API_KEY` and `OPENAI_ORG_ID` environment variables.
#[derive(Clone, Default)]
pub struct MerlinOptions {
    pub api_key: Option<String>,
    pub organization: Option<String>,
    pub base_url: Option<Url>,
    pub timeout: Option<Duration>,
    /// Retry count for the underlying client. Carried as configuration only;
    /// this crate implements no retry loop (gateway-side retries are driven
    /// by [`GatewayConfig::with_max_retries`]).
    pub max_retries: Option<u32>,
    pub proxy: Option<Url>,
    /// Pre-built HTTP client, replacing the one the transport would build.
    pub http_client: Option<reqwest::Client>,
    pub default_headers: HeaderMap,
    pub default_query: Vec<(String, String)>,
    /// Client-side use risks exposing credentials; off by default.
    pub dangerously_allow_browser: bool,
    pub gateway: Option<GatewayConfig>,
}

impl MerlinOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    pub fn with_proxy(mut self, proxy: Url) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn with_default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = headers;
        self
    }

    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_query.push((name.into(), value.into()));
        self
    }

    pub fn dangerously_allow_browser(mut self, allow: bool) -> Self {
        self.dangerously_allow_browser = allow;
        self
    }

    pub fn with_gateway(mut self, gateway: GatewayConfig) -> Self {
        self.gateway = Some(gateway);
        self
    }
}

impl std::fmt::Debug for MerlinOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MerlinOptions")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("organization", &self.organization)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("proxy", &self.proxy)
            .field("default_headers", &self.default_headers)
            .field("default_query", &self.default_query)
            .field("dangerously_allow_browser", &self.dangerously_allow_browser)
            .field("gateway", &self.gateway)
            .finish()
    }
}
