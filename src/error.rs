//! Error types for the Binance client library.

use serde::Deserialize;
use thiserror::Error;

/// The main error type for all Binance client operations.
#[derive(Error, Debug)]
pub enum BinanceError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Binance API returned an error
    #[error("Binance API error: {0}")]
    Api(ApiError),

    /// Response body did not match the expected JSON shape
    #[error("Failed to decode response: {source}. Body: {}", String::from_utf8_lossy(.body))]
    Decode {
        /// The underlying JSON error
        source: serde_json::Error,
        /// The raw response body
        body: Vec<u8>,
    },

    /// Non-success status without a Binance error body
    #[error("HTTP {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body as text
        body: String,
    },

    /// Request parameters could not be encoded
    #[error("Failed to encode parameters: {0}")]
    Encode(String),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Missing required credentials
    #[error("Missing credentials: API key and secret required for authenticated endpoints")]
    MissingCredentials,
}

impl BinanceError {
    /// Whether the request failed before a response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::HttpMiddleware(_))
    }

    /// The Binance API error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// The raw response body of a decode failure, lossily converted to text.
    pub fn body_text(&self) -> Option<String> {
        match self {
            Self::Decode { body, .. } => Some(String::from_utf8_lossy(body).into_owned()),
            Self::UnexpectedStatus { body, .. } => Some(body.clone()),
            _ => None,
        }
    }
}

/// Error returned by Binance in the response body.
///
/// Binance reports failures as `{"code": -1121, "msg": "Invalid symbol."}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// Numeric error code (negative for request errors)
    pub code: i64,
    /// Human-readable error message
    #[serde(rename = "msg")]
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "code={}, msg={}", self.code, self.message)
    }
}

impl ApiError {
    /// Create a new API error from code and message.
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        matches!(
            self.code,
            error_codes::TOO_MANY_REQUESTS | error_codes::TOO_MANY_ORDERS
        )
    }

    /// Check if the request timestamp fell outside the receive window.
    pub fn is_timestamp_outside_recv_window(&self) -> bool {
        self.code == error_codes::INVALID_TIMESTAMP
    }

    /// Check if this is an invalid signature error.
    pub fn is_invalid_signature(&self) -> bool {
        self.code == error_codes::INVALID_SIGNATURE
    }

    /// Check if the API key was rejected.
    pub fn is_invalid_key(&self) -> bool {
        matches!(
            self.code,
            error_codes::BAD_API_KEY_FMT | error_codes::REJECTED_MBX_KEY
        )
    }
}

/// Known Binance error codes for pattern matching.
pub mod error_codes {
    /// An unknown error occurred while processing the request.
    pub const UNKNOWN: i64 = -1000;
    /// Internal error; unable to process the request.
    pub const DISCONNECTED: i64 = -1001;
    /// Not authorized to execute this request.
    pub const UNAUTHORIZED: i64 = -1002;
    /// Too much request weight used.
    pub const TOO_MANY_REQUESTS: i64 = -1003;
    /// Timeout waiting for response from the backend.
    pub const TIMEOUT: i64 = -1007;
    /// Too many new orders.
    pub const TOO_MANY_ORDERS: i64 = -1015;
    /// Timestamp outside of recvWindow.
    pub const INVALID_TIMESTAMP: i64 = -1021;
    /// Signature for this request is not valid.
    pub const INVALID_SIGNATURE: i64 = -1022;
    /// A mandatory parameter was not sent.
    pub const MANDATORY_PARAM_EMPTY_OR_MALFORMED: i64 = -1102;
    /// Invalid symbol.
    pub const BAD_SYMBOL: i64 = -1121;
    /// API-key format invalid.
    pub const BAD_API_KEY_FMT: i64 = -2014;
    /// Invalid API-key, IP, or permissions for action.
    pub const REJECTED_MBX_KEY: i64 = -2015;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_from_body() {
        let error: ApiError =
            serde_json::from_str(r#"{"code":-1022,"msg":"Signature for this request is not valid."}"#)
                .unwrap();
        assert_eq!(error.code, -1022);
        assert_eq!(error.message, "Signature for this request is not valid.");
        assert!(error.is_invalid_signature());
        assert!(!error.is_rate_limit());
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new(-1121, "Invalid symbol.");
        assert_eq!(error.to_string(), "code=-1121, msg=Invalid symbol.");
    }

    #[test]
    fn test_decode_error_keeps_body() {
        let source = serde_json::from_slice::<ApiError>(b"{not json").unwrap_err();
        let error = BinanceError::Decode {
            source,
            body: b"{not json".to_vec(),
        };
        assert_eq!(error.body_text().as_deref(), Some("{not json"));
        assert!(error.to_string().contains("{not json"));
        assert!(!error.is_transport());
    }
}
