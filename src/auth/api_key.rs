use crate::auth::AuthProvider;
use crate::errors::{AuthenticationError, MerlinError, MerlinResult};
use async_trait::async_trait;
use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};

/// Bearer authentication with the resolved primary key.
///
/// Carries the placeholder key when only the gateway credential was
/// configured; the gateway ignores it for routed models.
pub struct ApiKeyAuth {
    api_key: SecretString,
    organization: Option<String>,
}

impl ApiKeyAuth {
    /// Creates the provider from an existing secret.
    pub fn from_secret(api_key: SecretString) -> Self {
        Self {
            api_key,
            organization: None,
        }
    }

    /// Sets the organization ID sent alongside the key.
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }
}

#[async_trait]
impl AuthProvider for ApiKeyAuth {
    async fn authenticate(&self, headers: &mut HeaderMap) -> MerlinResult<()> {
        let auth_value = format!("Bearer {}", self.api_key.expose_secret());
        headers.insert(
            "Authorization",
            auth_value.parse().map_err(|_| {
                MerlinError::Authentication(AuthenticationError::InvalidApiKey(
                    "API key contains characters not valid in a header".to_string(),
                ))
            })?,
        );

        if let Some(organization) = &self.organization {
            headers.insert(
                "OpenAI-Organization",
                organization.parse().map_err(|_| {
                    MerlinError::Authentication(AuthenticationError::InvalidOrganizationId(
                        "organization ID contains characters not valid in a header".to_string(),
                    ))
                })?,
            );
        }

        Ok(())
    }
}

impl std::fmt::Debug for ApiKeyAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyAuth")
            .field("api_key", &"[REDACTED]")
            .field("organization", &self.organization)
            .finish()
    }
}
