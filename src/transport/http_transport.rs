use crate::client::ClientConfig;
use crate::errors::{MerlinResult, NetworkError};
use crate::transport::{HttpTransport, ResponseParser};
use async_trait::async_trait;
use http::{HeaderMap, Method};
use reqwest::Client;
use url::Url;

/// HTTP transport implementation using reqwest.
///
/// Owns the merged default headers (including the `x-merlin-*` routing
/// headers) and the default query parameters; both are applied to every
/// request.
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
    default_headers: HeaderMap,
    default_query: Vec<(String, String)>,
}

impl ReqwestTransport {
    pub(crate) fn new(config: &ClientConfig) -> MerlinResult<Self> {
        let client = match &config.http_client {
            Some(client) => client.clone(),
            None => {
                let mut builder = Client::builder()
                    .timeout(config.timeout)
                    .user_agent(&config.user_agent);

                if let Some(proxy_url) = &config.proxy {
                    builder = builder.proxy(reqwest::Proxy::all(proxy_url.as_str())?);
                }

                builder.build().map_err(|e| {
                    crate::errors::MerlinError::Network(NetworkError::ConnectionFailed(format!(
                        "failed to build HTTP client: {}",
                        e
                    )))
                })?
            }
        };

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            default_headers: config.default_headers.clone(),
            default_query: config.default_query.clone(),
        })
    }

    /// Builds a full URL from a path, appending the default query pairs.
    fn build_url(&self, path: &str) -> MerlinResult<Url> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let mut url = Url::parse(&joined)?;

        if !self.default_query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.default_query {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }

    /// Request-specific headers win over defaults.
    fn merge_headers(&self, request_headers: HeaderMap) -> HeaderMap {
        let mut headers = self.default_headers.clone();
        for (key, value) in request_headers.iter() {
            headers.insert(key.clone(), value.clone());
        }
        headers
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        headers: HeaderMap,
    ) -> MerlinResult<serde_json::Value> {
        let url = self.build_url(path)?;
        let merged_headers = self.merge_headers(headers);

        let mut request = self.client.request(method, url).headers(merged_headers);

        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        ResponseParser::parse_json(response).await
    }
}
