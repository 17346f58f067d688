mod config;
mod facade;
mod options;

pub use config::{
    GatewayConfig, DEFAULT_BASE_URL, DEFAULT_GATEWAY_RETRIES, DEFAULT_TIMEOUT,
    HEADER_FALLBACK_MODELS, HEADER_GATEWAY_KEY, HEADER_RETRIES, PLACEHOLDER_API_KEY,
};
pub use facade::MerlinClient;
pub use options::MerlinOptions;

pub(crate) use config::ClientConfig;
