use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use url::Url;

use crate::auth::{ApiKeyAuth, AuthProvider};
use crate::client::config::{
    default_user_agent, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, PLACEHOLDER_API_KEY,
};
use crate::client::{GatewayConfig, MerlinOptions};
use crate::env::{EnvProvider, ProcessEnv};
use crate::errors::{ConfigurationError, MerlinError, MerlinResult};
use crate::services::chat::ChatService;
use crate::services::images::ImageService;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Client facade for the Merlin gateway.
///
/// Resolves the primary (OpenAI) and secondary (gateway) credentials,
/// validates the configuration, injects the `x-merlin-*` routing headers
/// into every outgoing request, and exposes the chat and images services
/// built at construction time.
pub struct MerlinClient {
    api_key: SecretString,
    organization: Option<String>,
    base_url: Url,
    max_retries: Option<u32>,
    gateway: GatewayConfig,
    chat: ChatService,
    images: ImageService,
}

impl MerlinClient {
    /// Constructs a client, resolving credential fallbacks from the process
    /// environment (`OPENAI_API_KEY`, `OPENAI_ORG_ID`).
    pub fn new(options: MerlinOptions) -> MerlinResult<Self> {
        Self::with_env(options, &ProcessEnv)
    }

    /// Constructs a client with an explicit environment provider.
    pub fn with_env(options: MerlinOptions, env: &dyn EnvProvider) -> MerlinResult<Self> {
        Self::build(options, env, running_in_browser())
    }

    fn build(
        options: MerlinOptions,
        env: &dyn EnvProvider,
        in_browser: bool,
    ) -> MerlinResult<Self> {
        let MerlinOptions {
            api_key,
            organization,
            base_url,
            timeout,
            max_retries,
            proxy,
            http_client,
            default_headers,
            default_query,
            dangerously_allow_browser,
            gateway,
        } = options;

        let api_key = api_key.or_else(|| env.var("OPENAI_API_KEY"));
        let organization = organization.or_else(|| env.var("OPENAI_ORG_ID"));

        if api_key.is_none() && gateway.is_none() {
            return Err(MerlinError::Configuration(
                ConfigurationError::MissingApiKey(
                    "the OPENAI_API_KEY environment variable is missing or empty and no \
                     Merlin gateway key was provided; set one of them, or pass an api_key \
                     option to MerlinClient"
                        .to_string(),
                ),
            ));
        }

        let api_key = match api_key {
            Some(key) => key,
            None => {
                tracing::warn!(
                    "only the Merlin gateway key is set; OpenAI features such as \
                     fine-tuning or the Assistants API will not work"
                );
                PLACEHOLDER_API_KEY.to_string()
            }
        };

        if in_browser && !dangerously_allow_browser {
            return Err(MerlinError::Configuration(
                ConfigurationError::BrowserEnvironment(
                    "running in a browser-like environment is disabled by default, as it \
                     risks exposing the API credentials; set dangerously_allow_browser \
                     if appropriate mitigations are in place"
                        .to_string(),
                ),
            ));
        }

        let gateway = gateway.ok_or_else(|| {
            MerlinError::Configuration(ConfigurationError::MissingGatewayConfig(
                "Merlin config is missing".to_string(),
            ))
        })?;

        let base_url = match base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut merged_headers = default_headers;
        gateway.apply_routing_headers(&mut merged_headers)?;

        let config = ClientConfig {
            api_key: SecretString::new(api_key),
            organization: organization.clone(),
            base_url: base_url.clone(),
            timeout: timeout.unwrap_or(DEFAULT_TIMEOUT),
            proxy,
            user_agent: default_user_agent(),
            default_headers: merged_headers,
            default_query,
            http_client,
        };

        let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new(&config)?);

        let mut api_key_auth = ApiKeyAuth::from_secret(config.api_key.clone());
        if let Some(org) = &organization {
            api_key_auth = api_key_auth.with_organization(org.clone());
        }
        let auth: Arc<dyn AuthProvider> = Arc::new(api_key_auth);

        let chat = ChatService::new(Arc::clone(&transport), Arc::clone(&auth));
        let images = ImageService::new(transport, auth);

        Ok(Self {
            api_key: config.api_key,
            organization,
            base_url,
            max_retries,
            gateway,
            chat,
            images,
        })
    }

    /// Chat completions routed through the gateway.
    pub fn chat(&self) -> &ChatService {
        &self.chat
    }

    /// Image generation routed through the gateway.
    pub fn images(&self) -> &ImageService {
        &self.images
    }

    /// The gateway configuration this client was constructed with.
    pub fn gateway_config(&self) -> &GatewayConfig {
        &self.gateway
    }

    /// The resolved primary key. Equals [`PLACEHOLDER_API_KEY`] when only the
    /// gateway key was configured.
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The underlying client's retry count, kept as configuration only; no
    /// retry loop runs in this crate.
    pub fn max_retries(&self) -> Option<u32> {
        self.max_retries
    }
}

impl std::fmt::Debug for MerlinClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MerlinClient")
            .field("api_key", &"[REDACTED]")
            .field("organization", &self.organization)
            .field("base_url", &self.base_url.as_str())
            .field("gateway", &self.gateway)
            .finish()
    }
}

/// Browser-like environments (wasm in a web page) expose credentials to the
/// page; construction refuses them unless explicitly overridden.
fn running_in_browser() -> bool {
    cfg!(target_arch = "wasm32")
}
