mod categories;
mod error;
mod mapping;

pub use categories::{
    AuthenticationError, ConfigurationError, NetworkError, RateLimitError, ServerError,
    ValidationError,
};
pub use error::{MerlinError, MerlinResult};
pub use mapping::{ApiErrorDetail, ApiErrorResponse, ErrorMapper};
