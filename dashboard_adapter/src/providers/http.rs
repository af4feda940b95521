use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::{
    errors::ConfigError,
    providers::{AnalyticsProvider, Endpoint, FetchCause},
};

/// Fetches analytics over HTTP from `<base_url><endpoint path>`.
///
/// Timeouts, retries and auth are left to the `reqwest::Client` handed in;
/// [`HttpProvider::new`] uses the client defaults.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: Client,
    base_url: String,
}

impl HttpProvider {
    /// Creates a provider for `base_url` with a default client.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let client = Client::builder().build()?;
        Self::with_client(client, base_url)
    }

    /// Creates a provider that sends its requests through `client`.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// The normalized base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `endpoint`. Joined by concatenation so a base URL with a
    /// path prefix (e.g. behind a reverse proxy) keeps that prefix.
    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

/// Validates that `raw` is an absolute http(s) URL and strips trailing slashes.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
        url: trimmed.to_string(),
        message: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl {
            url: trimmed.to_string(),
            message: format!("unsupported scheme `{}`", url.scheme()),
        });
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::InvalidBaseUrl {
            url: trimmed.to_string(),
            message: "base URL must not carry a query or fragment".to_string(),
        });
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

#[async_trait]
impl AnalyticsProvider for HttpProvider {
    async fn fetch_body(&self, endpoint: Endpoint) -> Result<String, FetchCause> {
        let response = self.client.get(self.url_for(endpoint)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(FetchCause::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}
