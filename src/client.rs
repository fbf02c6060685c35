use std::fmt;
use std::time::Duration;

#[cfg(feature = "default-client")]
use std::sync::Arc;

#[cfg(feature = "default-client")]
use arc_swap::ArcSwap;
use http::{HeaderValue, StatusCode};
use log::debug;
#[cfg(feature = "default-client")]
use once_cell::sync::Lazy;
use reqwest::Client as ReqwestClient;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::api::{meter, relay};
use crate::models::health::HealthResponse;
use crate::{SocketError, SocketResult};

/// Address the socket firmware listens on out of the box.
pub const DEFAULT_BASE_URL: &str = "http://192.168.1.100:8080/";

/// Header the firmware checks when API key authentication is enabled.
pub const API_KEY_HEADER: &str = "X-API-Key";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[cfg(feature = "default-client")]
static SOCKET_CLIENT: Lazy<ArcSwap<SocketClient>> =
    Lazy::new(|| ArcSwap::new(Arc::new(SocketClient::default())));

/// Installs the process-wide client returned by [`instance`].
#[cfg(feature = "default-client")]
pub fn initialize(client: SocketClient) {
    SOCKET_CLIENT.store(Arc::new(client));
}

/// Returns the process-wide client.
///
/// Until [`initialize`] is called this is a client for [`DEFAULT_BASE_URL`]
/// without an API key.
#[cfg(feature = "default-client")]
pub fn instance() -> Arc<SocketClient> {
    SOCKET_CLIENT.load_full()
}

/// Builder for [`SocketClient`].
///
/// Everything is optional; an empty builder yields a client for
/// [`DEFAULT_BASE_URL`].
#[derive(Default)]
pub struct SocketClientBuilder {
    base_url: Option<String>,
    api_key: Option<SecretString>,
    api_key_env: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<ReqwestClient>,
}

impl SocketClientBuilder {
    /// Sets the device base URL, e.g. `http://192.168.1.100:8080/`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the API key sent in the `X-API-Key` header.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Reads the API key from an environment variable when the client is
    /// built. A missing variable is a configuration error.
    pub fn api_key_from_env(mut self, var_name: impl Into<String>) -> Self {
        self.api_key_env = Some(var_name.into());
        self
    }

    /// Sets the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets a custom reqwest client (e.g., for testing or custom middleware).
    /// Timeout and user agent are then left to that client.
    pub fn http_client(mut self, http_client: ReqwestClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> SocketResult<SocketClient> {
        let base_url = parse_base_url(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let api_key = match (self.api_key, self.api_key_env) {
            (Some(key), _) => Some(key),
            (None, Some(var_name)) => {
                let value = std::env::var(&var_name).map_err(|e| {
                    SocketError::Configuration(format!(
                        "Failed to read environment variable '{var_name}': {e}"
                    ))
                })?;
                Some(SecretString::from(value))
            }
            (None, None) => None,
        };

        let api_key = api_key
            .map(|key| {
                let key = key.expose_secret().trim();
                if key.is_empty() {
                    return Err(SocketError::Configuration("API key must not be empty".into()));
                }
                let mut value = HeaderValue::from_str(key).map_err(|e| {
                    SocketError::Configuration(format!("Invalid API key: {e}"))
                })?;
                value.set_sensitive(true);
                Ok(value)
            })
            .transpose()?;

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| concat!("powersocket-client/", env!("CARGO_PKG_VERSION")).to_string());

        let http_client = match self.http_client {
            Some(custom_client) => custom_client,
            None => ReqwestClient::builder()
                .timeout(timeout)
                .user_agent(user_agent.as_str())
                .build()
                .map_err(|e| {
                    SocketError::Configuration(format!("Failed to create HTTP client: {e}"))
                })?,
        };

        Ok(SocketClient {
            base_url,
            api_key,
            timeout,
            user_agent,
            http_client,
        })
    }
}

fn parse_base_url(raw: &str) -> SocketResult<Url> {
    let mut url = Url::parse(raw)
        .map_err(|e| SocketError::Configuration(format!("Invalid base URL: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(SocketError::Configuration(format!(
            "Invalid base URL: unsupported scheme '{}'",
            url.scheme()
        )));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(SocketError::Configuration(
            "Invalid base URL: must not include query or fragment".into(),
        ));
    }

    // Endpoint segments are appended to the path, so it has to be a directory.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Client for the power socket HTTP API.
///
/// Cloning is cheap: clones share the underlying connection pool.
#[derive(Clone)]
pub struct SocketClient {
    base_url: Url,
    api_key: Option<HeaderValue>,
    timeout: Duration,
    user_agent: String,
    http_client: ReqwestClient,
}

impl Default for SocketClient {
    fn default() -> Self {
        SocketClient {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("Failed to parse default URL"),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("powersocket-client/", env!("CARGO_PKG_VERSION")).to_string(),
            http_client: ReqwestClient::new(),
        }
    }
}

impl fmt::Debug for SocketClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SocketClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("api_key", &self.api_key.is_some())
            .finish()
    }
}

impl SocketClient {
    pub fn builder() -> SocketClientBuilder {
        SocketClientBuilder::default()
    }

    /// Base URL every endpoint path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Relay switching and state.
    pub fn relay(&self) -> relay::RelayHandler {
        relay::RelayHandler::new(self.clone())
    }

    /// Power and energy readings.
    pub fn meter(&self) -> meter::MeterHandler {
        meter::MeterHandler::new(self.clone())
    }

    /// Checks that the device firmware is up (`GET /health`).
    pub async fn health(&self) -> SocketResult<HealthResponse> {
        self.get(&["health"]).await
    }

    /// Makes a raw GET request and returns the body as untyped JSON.
    ///
    /// Useful for firmware endpoints without a typed binding, such as
    /// `/sensor/config`. `endpoint` is a path relative to the base URL and
    /// must not contain a query string or fragment.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use powersocket_client::{SocketClient, SocketResult};
    /// # #[tokio::main]
    /// # async fn main() -> SocketResult<()> {
    /// let client = SocketClient::builder().base_url("http://192.168.1.100:8080").build()?;
    /// let config = client.raw_get("/sensor/config").await?;
    /// println!("{config}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn raw_get(&self, endpoint: &str) -> SocketResult<Value> {
        if endpoint.contains(['?', '#']) {
            return Err(SocketError::InvalidEndpoint(format!(
                "endpoint must not include query or fragment: {endpoint}"
            )));
        }

        let segments: Vec<&str> = endpoint.split('/').filter(|s| !s.is_empty()).collect();
        self.get(&segments).await
    }

    /// Issues `GET <base_url>/<segments...>` and parses the JSON body.
    ///
    /// Each segment is percent-encoded on its own, so a `/` inside a segment
    /// never adds a path level.
    pub(crate) async fn get<R>(&self, segments: &[&str]) -> SocketResult<R>
    where
        R: DeserializeOwned,
    {
        let url = self.endpoint_url(segments)?;
        debug!("GET {url}");

        let mut request = self.http_client.get(url.clone());
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key.clone());
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(SocketError::Unauthorized);
        }

        let body = response.text().await?;
        debug!("GET {url} -> {status}");

        if !status.is_success() {
            return Err(SocketError::Status { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn endpoint_url(&self, segments: &[&str]) -> SocketResult<Url> {
        if segments.is_empty() {
            return Err(SocketError::InvalidEndpoint("endpoint must not be empty".into()));
        }
        if let Some(bad) = segments.iter().find(|s| s.trim().is_empty()) {
            return Err(SocketError::InvalidEndpoint(format!(
                "path segment must not be blank: {bad:?}"
            )));
        }
        // `.` and `..` (also as `%2e`) are resolved by the URL parser instead of being encoded.
        if let Some(bad) = segments.iter().find(|s| is_dot_segment(s)) {
            return Err(SocketError::InvalidEndpoint(format!(
                "path segment must not be a dot segment: {bad:?}"
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SocketError::InvalidEndpoint("base URL cannot have a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn is_dot_segment(segment: &str) -> bool {
    let normalized = segment.trim().to_ascii_lowercase().replace("%2e", ".");
    matches!(normalized.as_str(), "." | "..")
}
