/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client dispatching signed form requests
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::time::Duration;

use chrono::Utc;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde::Serialize;
use tracing::{debug, error};

use crate::http::signature::RequestSigner;
use crate::http::{ApaczkaError, Result};

/// Base URL for the Apaczka v2 API
const API_BASE_URL: &str = "https://www.apaczka.pl/api/v2/";

/// Validity window stamped into every signed request, in seconds.
/// The gateway rejects requests whose `expires` lies in the past.
pub const REQUEST_VALIDITY_SECS: i64 = 30 * 60;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Credentials for signed requests
///
/// Issued per integration in the Apaczka panel. Both values are opaque
/// strings; the gateway is the authority on their validity.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub app_id: String,
    pub app_secret: String,
}

impl Credentials {
    /// Create credentials from an application id and shared secret
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: app_secret.into(),
        }
    }
}

/// Main HTTP client for the Apaczka v2 API
#[derive(Debug)]
pub struct ApaczkaClient {
    http_client: Client,
    base_url: Url,
    signer: RequestSigner,
}

impl ApaczkaClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(credentials, config, API_BASE_URL)
    }

    /// Create a new client against an explicit base URL
    ///
    /// Routes are joined onto the base, so its path must end with a trailing
    /// slash. Intended for tests against a mock endpoint.
    pub fn with_config_and_base_url(
        credentials: Credentials,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            return Err(ApaczkaError::Config(format!(
                "base URL path must end with a trailing slash: {base_url}"
            )));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            signer: RequestSigner::new(credentials),
        })
    }

    /// Request signer used by this client
    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// Build the full URL for a route
    fn endpoint_url(&self, route: &str) -> Result<Url> {
        Ok(self.base_url.join(route)?)
    }

    /// POST a payload-less signed request (the JSON `null` literal)
    pub(crate) async fn post_signed_empty(&self, route: &str) -> Result<String> {
        self.send_signed(route, "null".to_string()).await
    }

    /// Serialize `payload` and POST it as a signed request
    pub(crate) async fn post_signed<T: Serialize>(
        &self,
        route: &str,
        payload: &T,
    ) -> Result<String> {
        let payload_json = serde_json::to_string(payload)?;
        self.send_signed(route, payload_json).await
    }

    /// Dispatch one signed form request and return the raw response text
    ///
    /// Responses are not parsed here; callers receive the body as the gateway
    /// sent it. Transport faults and non-success statuses are logged once
    /// before they are returned.
    async fn send_signed(&self, route: &str, payload_json: String) -> Result<String> {
        let expires = Utc::now().timestamp() + REQUEST_VALIDITY_SECS;
        let body = self.signer.signed_body(route, &payload_json, expires);
        let url = self.endpoint_url(route)?;

        debug!(route, expires, "sending signed request");

        let response = match self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!(route, error = %e, "request failed before a response arrived");
                return Err(e.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(route, status = status.as_u16(), "request rejected by the gateway");
            return Err(ApaczkaError::api_error(status, message));
        }

        match response.text().await {
            Ok(text) => Ok(text),
            Err(e) => {
                error!(route, error = %e, "failed to read response body");
                Err(e.into())
            }
        }
    }
}
