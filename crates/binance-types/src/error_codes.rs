//! Binance API error bodies and error code catalogue
//!
//! Binance reports failures as a JSON body of the form
//! `{"code": -1102, "msg": "..."}` alongside a non-200 HTTP status.
//! This module models that body and classifies the well-known codes.

use serde::{Deserialize, Serialize};

/// Binance error code categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// -10xx: server or network issues
    Server,
    /// -11xx: malformed or invalid request
    Request,
    /// Key, signature or permission problems
    Auth,
    /// Codes outside the known ranges
    Unknown,
}

/// Error body returned by the Binance REST API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinanceApiError {
    /// Numeric error code (negative)
    pub code: i64,
    /// Error message
    pub msg: String,
}

impl BinanceApiError {
    /// Parse an error body. Returns `None` if the body is not a Binance error object.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// The known error code, if recognized
    pub fn error_code(&self) -> Option<BinanceErrorCode> {
        BinanceErrorCode::from_code(self.code)
    }

    /// Category of this error
    pub fn category(&self) -> ErrorCategory {
        match self.error_code() {
            Some(code) => code.category(),
            None => ErrorCategory::from_raw(self.code),
        }
    }

    /// Check if this is an authentication-related error
    pub fn is_auth_error(&self) -> bool {
        self.error_code().is_some_and(|c| c.is_auth_error())
    }

    /// Check if this is a rate limit error
    pub fn is_rate_limit(&self) -> bool {
        self.error_code().is_some_and(|c| c.is_rate_limit())
    }
}

impl std::fmt::Display for BinanceApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Binance error {}: {}", self.code, self.msg)
    }
}

impl ErrorCategory {
    fn from_raw(code: i64) -> Self {
        match code {
            -1099..=-1000 => Self::Server,
            -1199..=-1100 => Self::Request,
            _ => Self::Unknown,
        }
    }
}

/// Well-known Binance error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinanceErrorCode {
    // === 10xx: General server or network issues ===
    /// -1000 UNKNOWN
    Unknown,
    /// -1001 DISCONNECTED
    Disconnected,
    /// -1002 UNAUTHORIZED
    Unauthorized,
    /// -1003 TOO_MANY_REQUESTS
    TooManyRequests,
    /// -1006 UNEXPECTED_RESP
    UnexpectedResponse,
    /// -1007 TIMEOUT
    Timeout,
    /// -1015 TOO_MANY_ORDERS
    TooManyOrders,
    /// -1016 SERVICE_SHUTTING_DOWN
    ServiceShuttingDown,
    /// -1021 INVALID_TIMESTAMP
    InvalidTimestamp,
    /// -1022 INVALID_SIGNATURE
    InvalidSignature,

    // === 11xx: Request issues ===
    /// -1100 ILLEGAL_CHARS
    IllegalChars,
    /// -1101 TOO_MANY_PARAMETERS
    TooManyParameters,
    /// -1102 MANDATORY_PARAM_EMPTY_OR_MALFORMED
    MandatoryParamEmptyOrMalformed,
    /// -1103 UNKNOWN_PARAM
    UnknownParam,
    /// -1104 UNREAD_PARAMETERS
    UnreadParameters,
    /// -1105 PARAM_EMPTY
    ParamEmpty,
    /// -1106 PARAM_NOT_REQUIRED
    ParamNotRequired,
    /// -1111 BAD_PRECISION
    BadPrecision,
    /// -1121 BAD_SYMBOL
    BadSymbol,
    /// -1128 OPTIONAL_PARAMS_BAD_COMBO
    OptionalParamsBadCombo,
    /// -1130 INVALID_PARAMETER
    InvalidParameter,

    // === 20xx: Key issues ===
    /// -2014 BAD_API_KEY_FMT
    BadApiKeyFormat,
    /// -2015 REJECTED_MBX_KEY
    RejectedApiKey,
}

impl BinanceErrorCode {
    /// Look up a known error code
    pub fn from_code(code: i64) -> Option<Self> {
        let known = match code {
            -1000 => Self::Unknown,
            -1001 => Self::Disconnected,
            -1002 => Self::Unauthorized,
            -1003 => Self::TooManyRequests,
            -1006 => Self::UnexpectedResponse,
            -1007 => Self::Timeout,
            -1015 => Self::TooManyOrders,
            -1016 => Self::ServiceShuttingDown,
            -1021 => Self::InvalidTimestamp,
            -1022 => Self::InvalidSignature,
            -1100 => Self::IllegalChars,
            -1101 => Self::TooManyParameters,
            -1102 => Self::MandatoryParamEmptyOrMalformed,
            -1103 => Self::UnknownParam,
            -1104 => Self::UnreadParameters,
            -1105 => Self::ParamEmpty,
            -1106 => Self::ParamNotRequired,
            -1111 => Self::BadPrecision,
            -1121 => Self::BadSymbol,
            -1128 => Self::OptionalParamsBadCombo,
            -1130 => Self::InvalidParameter,
            -2014 => Self::BadApiKeyFormat,
            -2015 => Self::RejectedApiKey,
            _ => return None,
        };
        Some(known)
    }

    /// Numeric code as returned by the API
    pub fn code(&self) -> i64 {
        match self {
            Self::Unknown => -1000,
            Self::Disconnected => -1001,
            Self::Unauthorized => -1002,
            Self::TooManyRequests => -1003,
            Self::UnexpectedResponse => -1006,
            Self::Timeout => -1007,
            Self::TooManyOrders => -1015,
            Self::ServiceShuttingDown => -1016,
            Self::InvalidTimestamp => -1021,
            Self::InvalidSignature => -1022,
            Self::IllegalChars => -1100,
            Self::TooManyParameters => -1101,
            Self::MandatoryParamEmptyOrMalformed => -1102,
            Self::UnknownParam => -1103,
            Self::UnreadParameters => -1104,
            Self::ParamEmpty => -1105,
            Self::ParamNotRequired => -1106,
            Self::BadPrecision => -1111,
            Self::BadSymbol => -1121,
            Self::OptionalParamsBadCombo => -1128,
            Self::InvalidParameter => -1130,
            Self::BadApiKeyFormat => -2014,
            Self::RejectedApiKey => -2015,
        }
    }

    /// Get the category of this error
    pub fn category(&self) -> ErrorCategory {
        if self.is_auth_error() {
            ErrorCategory::Auth
        } else {
            ErrorCategory::from_raw(self.code())
        }
    }

    /// Get a human-readable description of this error
    pub fn description(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown error while processing the request",
            Self::Disconnected => "Internal error; unable to process your request",
            Self::Unauthorized => "Not authorized to execute this request",
            Self::TooManyRequests => "Too many requests; request weight exceeded",
            Self::UnexpectedResponse => "Unexpected response from the message bus",
            Self::Timeout => "Timeout waiting for response from backend server",
            Self::TooManyOrders => "Too many new orders",
            Self::ServiceShuttingDown => "This service is no longer available",
            Self::InvalidTimestamp => "Timestamp outside of the receive window",
            Self::InvalidSignature => "Signature for this request is not valid",
            Self::IllegalChars => "Illegal characters found in a parameter",
            Self::TooManyParameters => "Too many parameters sent for this endpoint",
            Self::MandatoryParamEmptyOrMalformed => {
                "A mandatory parameter was not sent, was empty or malformed"
            }
            Self::UnknownParam => "An unknown parameter was sent",
            Self::UnreadParameters => "Not all sent parameters were read",
            Self::ParamEmpty => "A parameter was empty",
            Self::ParamNotRequired => "A parameter was sent when not required",
            Self::BadPrecision => "Precision is over the maximum defined for this asset",
            Self::BadSymbol => "Invalid symbol",
            Self::OptionalParamsBadCombo => "Combination of optional parameters invalid",
            Self::InvalidParameter => "Invalid data sent for a parameter",
            Self::BadApiKeyFormat => "API key format invalid",
            Self::RejectedApiKey => "Invalid API key, IP, or permissions for action",
        }
    }

    /// Check if this is an authentication-related error
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized
                | Self::InvalidSignature
                | Self::BadApiKeyFormat
                | Self::RejectedApiKey
        )
    }

    /// Check if this is a rate limit error
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::TooManyRequests | Self::TooManyOrders)
    }

    /// Check if the local clock or receive window caused the rejection
    pub fn is_timestamp_error(&self) -> bool {
        matches!(self, Self::InvalidTimestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_body() {
        let err = BinanceApiError::parse(r#"{"code":-1102,"msg":"bad param"}"#).unwrap();
        assert_eq!(err.code, -1102);
        assert_eq!(err.msg, "bad param");
        assert_eq!(
            err.error_code(),
            Some(BinanceErrorCode::MandatoryParamEmptyOrMalformed)
        );
        assert_eq!(err.category(), ErrorCategory::Request);
    }

    #[test]
    fn test_parse_non_error_body() {
        assert!(BinanceApiError::parse("<html>502 Bad Gateway</html>").is_none());
        assert!(BinanceApiError::parse(r#"{"subAccounts":[]}"#).is_none());
    }

    #[test]
    fn test_code_roundtrip() {
        for code in [-1000, -1003, -1021, -1022, -1102, -1130, -2014, -2015] {
            let known = BinanceErrorCode::from_code(code).unwrap();
            assert_eq!(known.code(), code);
        }
        assert_eq!(BinanceErrorCode::from_code(-9999), None);
    }

    #[test]
    fn test_auth_errors() {
        let err = BinanceApiError {
            code: -2015,
            msg: "Invalid API-key, IP, or permissions for action.".into(),
        };
        assert!(err.is_auth_error());
        assert_eq!(err.category(), ErrorCategory::Auth);
        assert!(!err.is_rate_limit());
    }

    #[test]
    fn test_rate_limit_and_timestamp() {
        assert!(BinanceErrorCode::TooManyRequests.is_rate_limit());
        assert!(BinanceErrorCode::InvalidTimestamp.is_timestamp_error());
        assert_eq!(BinanceErrorCode::InvalidTimestamp.category(), ErrorCategory::Server);
    }

    #[test]
    fn test_unknown_code_category_from_range() {
        let err = BinanceApiError {
            code: -1199,
            msg: "new request error".into(),
        };
        assert_eq!(err.error_code(), None);
        assert_eq!(err.category(), ErrorCategory::Request);

        let err = BinanceApiError {
            code: -12022,
            msg: "sub-account error".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Unknown);
    }

    #[test]
    fn test_display() {
        let err = BinanceApiError {
            code: -1021,
            msg: "Timestamp for this request is outside of the recvWindow.".into(),
        };
        assert!(err.to_string().contains("-1021"));
    }
}
