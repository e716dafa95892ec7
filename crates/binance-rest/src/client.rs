//! Main REST client implementation

use crate::endpoints::{SubAccountEndpoints, WalletEndpoints};
use crate::error::{RestError, RestResult};
use crate::params::Params;
use crate::transport::{ReqwestTransport, SignedRequest, Transport, TransportError};
use binance_auth::{AuthError, Credentials, API_KEY_ENV, SECRET_KEY_ENV};
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Production REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_USER_AGENT: &str = concat!("binance-rest/", env!("CARGO_PKG_VERSION"));

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "BINANCE_BASE_URL";
/// Environment variable overriding the timeout, in seconds
pub const TIMEOUT_ENV: &str = "BINANCE_TIMEOUT_SECS";
/// Environment variable setting a default `recvWindow`, in milliseconds
pub const RECV_WINDOW_ENV: &str = "BINANCE_RECV_WINDOW";

/// Binance REST API client
///
/// Every request goes through [`BinanceRestClient::execute`], which stamps a
/// fresh `timestamp`, signs the query string and returns the raw response
/// body. The client is cheap to clone; clones share the same transport.
///
/// # Example
///
/// ```no_run
/// use binance_rest::{BinanceRestClient, Credentials, Params};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = BinanceRestClient::new(Credentials::from_env()?)?;
///
///     let body = client
///         .sub_account()
///         .list(Params::new().with("page", 1).with("limit", 10))
///         .await?;
///     println!("{}", String::from_utf8_lossy(&body));
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BinanceRestClient {
    transport: Arc<dyn Transport>,
    credentials: Credentials,
    base_url: String,
    recv_window: Option<u64>,
}

impl BinanceRestClient {
    /// Create a client for the production endpoint with default settings
    pub fn new(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new(credentials))
    }

    /// Create a client with custom configuration
    ///
    /// # Errors
    /// Returns `RestError::Transport` if the HTTP client cannot be built.
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let user_agent = config
            .user_agent
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT);
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs), user_agent)?;

        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client that sends requests through the given transport
    ///
    /// The configured timeout and user agent are the transport's concern and
    /// are ignored here.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();

        info!(base_url = %base_url, "Created Binance REST client");

        Self {
            transport,
            credentials: config.credentials,
            base_url,
            recv_window: config.recv_window,
        }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// API key sent with every request
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Default `recvWindow`, if configured
    pub fn recv_window(&self) -> Option<u64> {
        self.recv_window
    }

    /// Get sub-account endpoints
    pub fn sub_account(&self) -> SubAccountEndpoints<'_> {
        SubAccountEndpoints::new(self)
    }

    /// Get wallet endpoints
    pub fn wallet(&self) -> WalletEndpoints<'_> {
        WalletEndpoints::new(self)
    }

    /// Build the signed request for `params` at a given timestamp
    ///
    /// `timestamp` overwrites any caller-supplied value. The default
    /// `recvWindow` is added only when the caller did not set one.
    ///
    /// # Errors
    /// Returns `RestError::Transport` with `TransportError::InvalidRequest`
    /// if the parameters cannot be URL-encoded.
    pub fn sign_request(
        &self,
        method: Method,
        path: &str,
        mut params: Params,
        timestamp_ms: i64,
    ) -> RestResult<SignedRequest> {
        params.insert("timestamp", timestamp_ms);
        if let Some(recv_window) = self.recv_window {
            if !params.contains_key("recvWindow") {
                params.insert("recvWindow", recv_window);
            }
        }

        let query = params
            .to_query_string()
            .map_err(|e| TransportError::InvalidRequest(format!("cannot encode parameters: {}", e)))?;
        let signature = self.credentials.sign(&query);

        Ok(SignedRequest {
            method,
            url: format!("{}{}?{}&signature={}", self.base_url, path, query, signature),
            api_key: self.credentials.api_key().to_string(),
        })
    }

    /// Sign and send a request, returning the raw response body
    ///
    /// # Errors
    /// - `RestError::Transport` if the request could not be built or sent
    /// - `RestError::Api` if the response status is anything but 200
    #[instrument(skip(self, params))]
    pub async fn execute(&self, method: Method, path: &str, params: Params) -> RestResult<Vec<u8>> {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let request = self.sign_request(method, path, params, timestamp)?;

        debug!("Sending signed request to {}", path);
        let response = self.transport.send(request).await?;
        debug!(status = response.status, "Response received");

        if response.status != 200 {
            return Err(RestError::Api {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        Ok(response.body)
    }
}

impl std::fmt::Debug for BinanceRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceRestClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("recv_window", &self.recv_window)
            .finish_non_exhaustive()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials
    pub credentials: Credentials,
    /// Base URL, without trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Default `recvWindow` in milliseconds
    pub recv_window: Option<u64>,
}

impl ClientConfig {
    /// Create a configuration with default settings
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            recv_window: None,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Credentials come from `BINANCE_API_KEY` and `BINANCE_SECRET_KEY`.
    /// `BINANCE_BASE_URL`, `BINANCE_TIMEOUT_SECS` and `BINANCE_RECV_WINDOW`
    /// are optional overrides.
    pub fn from_env() -> RestResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through a variable lookup function
    pub fn from_lookup<F>(lookup: F) -> RestResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key =
            lookup(API_KEY_ENV).ok_or_else(|| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let secret_key = lookup(SECRET_KEY_ENV)
            .ok_or_else(|| AuthError::EnvVarNotSet(SECRET_KEY_ENV.to_string()))?;

        let mut config = Self::new(Credentials::new(api_key, secret_key)?);

        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.is_empty()) {
            config = config.with_base_url(base_url);
        }
        if let Some(timeout) = lookup(TIMEOUT_ENV) {
            config.timeout_secs = parse_env_number(TIMEOUT_ENV, &timeout)?;
        }
        if let Some(recv_window) = lookup(RECV_WINDOW_ENV) {
            config.recv_window = Some(parse_env_number(RECV_WINDOW_ENV, &recv_window)?);
        }

        Ok(config)
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set default `recvWindow`
    pub fn with_recv_window(mut self, millis: u64) -> Self {
        self.recv_window = Some(millis);
        self
    }
}

fn parse_env_number(name: &str, value: &str) -> RestResult<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| RestError::InvalidConfig(format!("{} must be a positive integer, got {:?}", name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use std::collections::HashMap;

    const GOLDEN_SIGNATURE: &str =
        "34fb1f1545f65728f638cef3efc88f57bd4c9f79a7b88e001ca2bfed99896f6e";

    fn credentials() -> Credentials {
        Credentials::new("test_key", "test_secret").unwrap()
    }

    fn mock_client(config: ClientConfig) -> (BinanceRestClient, Arc<MockTransport>) {
        let transport = Arc::new(MockTransport::new());
        let client = BinanceRestClient::with_transport(config, transport.clone());
        (client, transport)
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new(credentials())
            .with_base_url("https://testnet.binance.vision")
            .with_timeout(60)
            .with_user_agent("test-agent")
            .with_recv_window(5000);

        assert_eq!(config.base_url, "https://testnet.binance.vision");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
        assert_eq!(config.recv_window, Some(5000));
    }

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::new(credentials());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.is_none());
        assert!(config.recv_window.is_none());
    }

    #[test]
    fn test_sign_request_golden() {
        let (client, _) = mock_client(ClientConfig::new(credentials()));
        let params = Params::new().with("asset", "BTC").with("amount", 1.5);

        let request = client
            .sign_request(Method::POST, "/sapi/v1/sub-account/transfer/subToMaster", params, 1700000000000)
            .unwrap();

        assert_eq!(
            request.url,
            format!(
                "https://api.binance.com/sapi/v1/sub-account/transfer/subToMaster?amount=1.5&asset=BTC&timestamp=1700000000000&signature={}",
                GOLDEN_SIGNATURE
            )
        );
        assert_eq!(request.api_key, "test_key");
        assert_eq!(request.method, Method::POST);
    }

    #[test]
    fn test_sign_request_overwrites_timestamp() {
        let (client, _) = mock_client(ClientConfig::new(credentials()));
        let params = Params::new().with("timestamp", 1i64).with("page", 1);

        let request = client.sign_request(Method::GET, "/x", params, 1700000000000).unwrap();
        assert_eq!(request.query().unwrap().matches("timestamp=").count(), 1);
        assert!(request.url.contains("timestamp=1700000000000"));
    }

    #[test]
    fn test_sign_request_recv_window() {
        let (client, _) = mock_client(ClientConfig::new(credentials()).with_recv_window(5000));

        let request = client.sign_request(Method::GET, "/x", Params::new(), 1).unwrap();
        assert!(request.url.contains("recvWindow=5000"));

        let explicit = Params::new().with("recvWindow", 10000);
        let request = client.sign_request(Method::GET, "/x", explicit, 1).unwrap();
        assert!(request.url.contains("recvWindow=10000"));
        assert!(!request.url.contains("recvWindow=5000"));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let (client, _) =
            mock_client(ClientConfig::new(credentials()).with_base_url("https://mock.test/"));
        assert_eq!(client.base_url(), "https://mock.test");

        let request = client.sign_request(Method::GET, "/sapi/v1/x", Params::new(), 1).unwrap();
        assert!(request.url.starts_with("https://mock.test/sapi/v1/x?timestamp=1&signature="));
    }

    #[tokio::test]
    async fn test_execute_returns_body_on_200() {
        let (client, transport) = mock_client(ClientConfig::new(credentials()));
        transport.push_response(200, r#"{"subAccounts":[]}"#);

        let body = client
            .execute(Method::GET, "/sapi/v1/sub-account/list", Params::new().with("page", 1))
            .await
            .unwrap();

        assert_eq!(body, br#"{"subAccounts":[]}"#);
        assert_eq!(transport.request_count(), 1);

        let request = transport.last_request().unwrap();
        let signature = request.signature().unwrap();
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[tokio::test]
    async fn test_execute_non_200_is_api_error() {
        let (client, transport) = mock_client(ClientConfig::new(credentials()));
        transport.push_response(418, "I'm a teapot");

        let err = client.execute(Method::GET, "/x", Params::new()).await.unwrap_err();
        match err {
            RestError::Api { status, body } => {
                assert_eq!(status, 418);
                assert_eq!(body, "I'm a teapot");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_execute_201_is_api_error() {
        let (client, transport) = mock_client(ClientConfig::new(credentials()));
        transport.push_response(201, "{}");

        let err = client.execute(Method::POST, "/x", Params::new()).await.unwrap_err();
        assert_eq!(err.status(), Some(201));
    }

    #[tokio::test]
    async fn test_execute_transport_error() {
        let (client, transport) = mock_client(ClientConfig::new(credentials()));
        transport.push_error(TransportError::Connection("refused".into()));

        let err = client.execute(Method::GET, "/x", Params::new()).await.unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (API_KEY_ENV, "env_key"),
            (SECRET_KEY_ENV, "env_secret"),
            (BASE_URL_ENV, "https://testnet.binance.vision/"),
            (TIMEOUT_ENV, "10"),
            (RECV_WINDOW_ENV, "6000"),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.credentials.api_key(), "env_key");
        assert_eq!(config.base_url, "https://testnet.binance.vision/");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.recv_window, Some(6000));
    }

    #[test]
    fn test_from_lookup_missing_secret() {
        let err = ClientConfig::from_lookup(|k| (k == API_KEY_ENV).then(|| "key".to_string()))
            .unwrap_err();
        assert!(matches!(err, RestError::Auth(AuthError::EnvVarNotSet(ref v)) if v == SECRET_KEY_ENV));
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let err = ClientConfig::from_lookup(|k| match k {
            API_KEY_ENV => Some("key".to_string()),
            SECRET_KEY_ENV => Some("secret".to_string()),
            TIMEOUT_ENV => Some("soon".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, RestError::InvalidConfig(_)));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let (client, _) = mock_client(ClientConfig::new(credentials()));
        let debug = format!("{:?}", client);
        assert!(!debug.contains("test_secret"));
        assert!(debug.contains("api.binance.com"));
    }
}
