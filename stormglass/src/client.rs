use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::{ApiError, Error};

/// Production endpoint, API version 2: <https://docs.stormglass.io/#/?id=api-endpoint>.
pub const BASE_URL_V2: &str = "https://api.stormglass.io/v2";

/// Ceiling for a single request. There is no retry budget behind it: on
/// timeout the call fails once, permanently, for that invocation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Storm Glass API client.
///
/// The configuration is read-only after construction, so one client can be
/// shared freely across tasks; connection pooling is handled by the
/// underlying `reqwest` transport. Dropping the future returned by an
/// accessor aborts the in-flight call.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
    timeout: Duration,
}

impl Client {
    /// Creates a client for the production API with default transport settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: BASE_URL_V2.to_string(),
            api_key: api_key.into(),
            http: reqwest::Client::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Creates a client from the on-disk configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api_key = config.api_key.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "No API key configured.\n\
                 Hint: add `api_key = \"...\"` to the config file or use Client::new."
            )
        })?;

        let mut client = Self::new(api_key);
        if let Some(base_url) = &config.base_url {
            client.base_url = base_url.clone();
        }

        Ok(client)
    }

    /// Points the client at a different base URL (mock servers, staging).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replaces the underlying HTTP transport.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues one GET and decodes the response envelope.
    ///
    /// A status outside `[200, 400)` becomes [`Error::Api`], built from the
    /// error body; a success body that is not valid JSON for `T` becomes
    /// [`Error::Decode`]. Exactly one network call is made, with no retries.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!(url = %url, "sending request");

        let response = self
            .http
            .get(url)
            .timeout(self.timeout)
            .header(AUTHORIZATION, &self.api_key)
            .header(CONTENT_TYPE, JSON_UTF8)
            .header(ACCEPT, JSON_UTF8)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, bytes = body.len(), "received response");

        if !(200..400).contains(&status) {
            return Err(Error::Api(ApiError::from_body(status, &body)));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
