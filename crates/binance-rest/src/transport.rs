//! HTTP transport abstraction
//!
//! The signed-request pipeline hands a fully built [`SignedRequest`] to a
//! [`Transport`] and gets back the status code and raw body. Keeping the
//! network behind a trait lets tests observe exactly what would be sent
//! without opening a socket.

use async_trait::async_trait;
use reqwest::{Client, Method};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Header carrying the API key on every signed request
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Transport layer errors
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request could not be constructed (query serialization, URL parsing)
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The HTTP client failed (DNS, connect, TLS, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection failed for a reason not reported by the HTTP client
    #[error("connection failed: {0}")]
    Connection(String),
}

impl TransportError {
    /// Check if the request exceeded the client timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// Check if the connection could not be established
    pub fn is_connect(&self) -> bool {
        match self {
            Self::Http(e) => e.is_connect(),
            Self::Connection(_) => true,
            Self::InvalidRequest(_) => false,
        }
    }
}

/// A signed request ready to be sent
///
/// All parameters, including `timestamp` and `signature`, are already in the
/// URL's query string. The request never carries a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// HTTP verb
    pub method: Method,
    /// Full URL: base + path + `?` + query + `&signature=`
    pub url: String,
    /// Value for the `X-MBX-APIKEY` header
    pub api_key: String,
}

impl SignedRequest {
    /// The query string portion of the URL
    pub fn query(&self) -> Option<&str> {
        self.url.split_once('?').map(|(_, query)| query)
    }

    /// The signature appended to the query string
    pub fn signature(&self) -> Option<&str> {
        self.query()?
            .rsplit_once("&signature=")
            .map(|(_, signature)| signature)
    }
}

/// Raw HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, unmodified
    pub body: Vec<u8>,
}

/// Trait for HTTP transport abstraction
///
/// Implementations must be safe to share between tasks; the client holds one
/// transport behind an `Arc` and may issue concurrent requests through it.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a signed request and return the raw response
    async fn send(&self, request: SignedRequest) -> Result<TransportResponse, TransportError>;
}

/// Real HTTP transport using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with a whole-request timeout and user agent
    ///
    /// # Errors
    /// Returns `TransportError::Http` if the HTTP client cannot be built.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip_all, fields(method = %request.method))]
    async fn send(&self, request: SignedRequest) -> Result<TransportResponse, TransportError> {
        let url = reqwest::Url::parse(&request.url)
            .map_err(|e| TransportError::InvalidRequest(format!("malformed URL: {}", e)))?;

        let response = self
            .client
            .request(request.method, url)
            .header(API_KEY_HEADER, request.api_key)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(status, len = body.len(), "HTTP response received");

        Ok(TransportResponse { status, body })
    }
}

/// Mock transport for testing
///
/// Returns queued responses in order and records every request it receives.
/// When the queue is empty it answers `200` with an empty JSON object.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: parking_lot::Mutex<std::collections::VecDeque<Result<TransportResponse, TransportError>>>,
    requests: parking_lot::Mutex<Vec<SignedRequest>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response
    pub fn push_response(&self, status: u16, body: impl Into<Vec<u8>>) {
        self.responses.lock().push_back(Ok(TransportResponse {
            status,
            body: body.into(),
        }));
    }

    /// Queue a transport failure
    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().push_back(Err(error));
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<SignedRequest> {
        self.requests.lock().clone()
    }

    /// The most recent request
    pub fn last_request(&self) -> Option<SignedRequest> {
        self.requests.lock().last().cloned()
    }

    /// Number of requests received
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: SignedRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().push(request);
        self.responses.lock().pop_front().unwrap_or_else(|| {
            Ok(TransportResponse {
                status: 200,
                body: b"{}".to_vec(),
            })
        })
    }
}
