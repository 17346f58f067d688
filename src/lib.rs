pub mod auth;
pub mod client;
pub mod env;
pub mod errors;
pub mod services;
pub mod transport;


pub use client::{
    GatewayConfig, MerlinClient, MerlinOptions, DEFAULT_BASE_URL, DEFAULT_GATEWAY_RETRIES,
    DEFAULT_TIMEOUT, HEADER_FALLBACK_MODELS, HEADER_GATEWAY_KEY, HEADER_RETRIES,
    PLACEHOLDER_API_KEY,
};
pub use env::{EnvProvider, MapEnv, ProcessEnv};
pub use errors::{MerlinError, MerlinResult};

pub use services::{
    chat::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatService},
    images::{ImageGenerationRequest, ImageResponse, ImageService},
};

pub mod prelude {
    pub use crate::client::{GatewayConfig, MerlinClient, MerlinOptions};
    pub use crate::env::{EnvProvider, MapEnv, ProcessEnv};
    pub use crate::errors::{MerlinError, MerlinResult};
    pub use crate::services::chat::{ChatCompletionRequest, ChatMessage};
    pub use crate::services::images::ImageGenerationRequest;
}
