//! Error types for REST API operations

use binance_auth::AuthError;
use binance_types::BinanceApiError;

use crate::transport::TransportError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// A required parameter was missing; no request was sent
    #[error("required parameter {parameter} is {reason}")]
    Validation {
        /// Parameter name as sent to the API
        parameter: String,
        /// `"empty"` or `"nil"`
        reason: &'static str,
    },

    /// Request construction or network I/O failed
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// API returned a non-200 status
    #[error("API error (status {status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Credentials could not be resolved
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl RestError {
    /// Create a validation error for a missing parameter
    pub fn validation(parameter: impl Into<String>, reason: &'static str) -> Self {
        Self::Validation {
            parameter: parameter.into(),
            reason,
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Decode the Binance error body of an API error
    ///
    /// Returns `None` for other variants, or if the body is not a Binance
    /// `{"code":..,"msg":..}` object.
    pub fn api_error(&self) -> Option<BinanceApiError> {
        match self {
            Self::Api { body, .. } => BinanceApiError::parse(body),
            _ => None,
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
