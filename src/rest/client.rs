//! Binance REST API client and request dispatcher.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::{Credentials, CredentialsProvider, SystemTimestamp, TimestampProvider, sign_query};
use crate::error::{ApiError, BinanceError};
use crate::rest::endpoints::{
    API_KEY_HEADER, FUTURES_BASE_URL, FUTURES_TESTNET_URL, SPOT_BASE_URL, SPOT_TESTNET_URL,
};
use crate::rest::request::{ApiHost, Request, SecurityType};

/// The Binance REST API client.
///
/// Every endpoint service borrows a client and hands it a [`Request`].
/// The client is the only place that knows how to authenticate: it injects
/// `timestamp` and `recvWindow`, signs, attaches the API key header, sends,
/// and turns error bodies into [`BinanceError::Api`].
///
/// The client is cheap to clone and safe to share across tasks.
///
/// # Example
///
/// ```rust,no_run
/// use binance_api_client::rest::BinanceClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = BinanceClient::new();
///     let time = client.server_time().send().await?;
///     println!("Server time: {}", time.server_time.unix_timestamp());
///     Ok(())
/// }
/// ```
///
/// For signed endpoints, provide credentials:
///
/// ```rust,no_run
/// use binance_api_client::rest::BinanceClient;
/// use binance_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
///     let client = BinanceClient::builder()
///         .credentials(credentials)
///         .recv_window(5_000)
///         .build();
///
///     let details = client.asset_detail().asset("BTC").send().await?;
///     println!("{:?}", details.get("BTC"));
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BinanceClient {
    http_client: ClientWithMiddleware,
    spot_base_url: String,
    futures_base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Arc<dyn TimestampProvider>,
    recv_window: Option<u64>,
}

impl BinanceClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`BinanceClient::builder()`] to configure credentials.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> BinanceClientBuilder {
        BinanceClientBuilder::new()
    }

    /// Base URL used for the given host.
    pub fn base_url(&self, host: ApiHost) -> &str {
        match host {
            ApiHost::Spot => &self.spot_base_url,
            ApiHost::Futures => &self.futures_base_url,
        }
    }

    /// Send a request and decode the JSON response into `T`.
    pub async fn call<T>(&self, request: Request) -> Result<T, BinanceError>
    where
        T: DeserializeOwned,
    {
        let body = self.call_api(request).await?;
        decode_body(body)
    }

    /// Send a request and return the raw response body.
    ///
    /// Signed requests get a `timestamp` unless the caller set one, the
    /// client's default `recvWindow` unless the caller set one, and a
    /// trailing `signature` over the encoded parameters.
    pub async fn call_api(&self, mut request: Request) -> Result<Vec<u8>, BinanceError> {
        let credentials = if request.security().requires_api_key() {
            Some(
                self.credentials
                    .as_ref()
                    .ok_or(BinanceError::MissingCredentials)?
                    .get_credentials(),
            )
        } else {
            None
        };

        let payload = match (request.security(), credentials) {
            (SecurityType::Signed, Some(creds)) => self.signed_payload(&mut request, creds)?,
            _ => request.params().encode()?,
        };

        let base_url = self.base_url(request.host()).trim_end_matches('/');
        let mut url = Url::parse(&format!("{}{}", base_url, request.endpoint()))?;
        if !request.sends_body() && !payload.is_empty() {
            url.set_query(Some(&payload));
        }

        tracing::debug!(
            method = %request.method(),
            endpoint = request.endpoint(),
            security = ?request.security(),
            "sending request"
        );

        let mut builder = self.http_client.request(request.method().clone(), url);
        if let Some(creds) = credentials {
            builder = builder.header(API_KEY_HEADER, creds.api_key_header()?);
        }
        if request.sends_body() {
            builder = builder
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(payload);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        if !status.is_success() {
            return Err(error_from_status(status.as_u16(), request.endpoint(), body));
        }

        Ok(body)
    }

    /// Inject `timestamp`/`recvWindow` and return the encoded, signed parameters.
    ///
    /// The signature is always computed here, so a caller-set `signature`
    /// is dropped before encoding.
    fn signed_payload(
        &self,
        request: &mut Request,
        credentials: &Credentials,
    ) -> Result<String, BinanceError> {
        let params = request.params_mut();
        if params.remove("signature").is_some() {
            tracing::debug!("ignoring caller-supplied signature parameter");
        }
        if !params.contains("timestamp") {
            params.set("timestamp", self.timestamp_provider.timestamp_millis());
        }
        if !params.contains("recvWindow") {
            params.set_opt("recvWindow", self.recv_window);
        }

        let query = params.encode()?;
        let signature = sign_query(credentials, &query)?;
        Ok(format!("{query}&signature={signature}"))
    }
}

/// Decode a JSON body, keeping the raw bytes on failure.
pub(crate) fn decode_body<T>(body: Vec<u8>) -> Result<T, BinanceError>
where
    T: DeserializeOwned,
{
    match serde_json::from_slice(&body) {
        Ok(value) => Ok(value),
        Err(source) => Err(BinanceError::Decode { source, body }),
    }
}

/// Map a non-success response to an error.
fn error_from_status(status: u16, endpoint: &str, body: Vec<u8>) -> BinanceError {
    match serde_json::from_slice::<ApiError>(&body) {
        Ok(api_error) => {
            tracing::warn!(
                status,
                endpoint,
                code = api_error.code,
                msg = %api_error.message,
                "Binance API error"
            );
            BinanceError::Api(api_error)
        }
        Err(_) => BinanceError::UnexpectedStatus {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        },
    }
}

impl Default for BinanceClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BinanceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceClient")
            .field("spot_base_url", &self.spot_base_url)
            .field("futures_base_url", &self.futures_base_url)
            .field("has_credentials", &self.credentials.is_some())
            .field("recv_window", &self.recv_window)
            .finish()
    }
}

/// Builder for [`BinanceClient`].
pub struct BinanceClientBuilder {
    spot_base_url: String,
    futures_base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Option<Arc<dyn TimestampProvider>>,
    recv_window: Option<u64>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    max_retries: u32,
}

impl BinanceClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            spot_base_url: SPOT_BASE_URL.to_string(),
            futures_base_url: FUTURES_BASE_URL.to_string(),
            credentials: None,
            timestamp_provider: None,
            recv_window: None,
            user_agent: None,
            timeout: None,
            max_retries: 0,
        }
    }

    /// Set the spot base URL (useful for testnets or a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.spot_base_url = url.into();
        self
    }

    /// Set the futures base URL.
    pub fn futures_base_url(mut self, url: impl Into<String>) -> Self {
        self.futures_base_url = url.into();
        self
    }

    /// Point both hosts at the Binance testnets.
    ///
    /// ```rust
    /// use binance_api_client::rest::{ApiHost, BinanceClient};
    /// use binance_api_client::rest::endpoints::{FUTURES_TESTNET_URL, SPOT_TESTNET_URL};
    ///
    /// let client = BinanceClient::builder().testnet().build();
    /// assert_eq!(client.base_url(ApiHost::Spot), SPOT_TESTNET_URL);
    /// assert_eq!(client.base_url(ApiHost::Futures), FUTURES_TESTNET_URL);
    /// ```
    pub fn testnet(mut self) -> Self {
        self.spot_base_url = SPOT_TESTNET_URL.to_string();
        self.futures_base_url = FUTURES_TESTNET_URL.to_string();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom timestamp provider for signed requests.
    pub fn timestamp_provider(mut self, provider: Arc<dyn TimestampProvider>) -> Self {
        self.timestamp_provider = Some(provider);
        self
    }

    /// Default `recvWindow` in milliseconds for signed requests.
    ///
    /// A `recvWindow` set on an individual request takes precedence.
    pub fn recv_window(mut self, millis: u64) -> Self {
        self.recv_window = Some(millis);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a total timeout for each HTTP request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Retry transient failures up to `retries` times.
    ///
    /// Defaults to 0, in which case no retry layer is installed.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client.
    pub fn build(self) -> BinanceClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("binance-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("binance-api-client"));
        headers.insert(USER_AGENT, header_value);

        let mut reqwest_builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            reqwest_builder = reqwest_builder.timeout(timeout);
        }
        let reqwest_client = reqwest_builder
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let mut middleware = ClientBuilder::new(reqwest_client).with(TracingMiddleware::default());
        if self.max_retries > 0 {
            let retry_policy =
                ExponentialBackoff::builder().build_with_max_retries(self.max_retries);
            middleware = middleware.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }

        let timestamp_provider = self
            .timestamp_provider
            .unwrap_or_else(|| Arc::new(SystemTimestamp));

        BinanceClient {
            http_client: middleware.build(),
            spot_base_url: self.spot_base_url,
            futures_base_url: self.futures_base_url,
            credentials: self.credentials,
            timestamp_provider,
            recv_window: self.recv_window,
        }
    }
}

impl Default for BinanceClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_base_urls() {
        let client = BinanceClient::new();
        assert_eq!(client.base_url(ApiHost::Spot), SPOT_BASE_URL);
        assert_eq!(client.base_url(ApiHost::Futures), FUTURES_BASE_URL);
    }

    #[test]
    fn test_testnet_base_urls() {
        let client = BinanceClient::builder().testnet().build();
        assert_eq!(client.base_url(ApiHost::Spot), SPOT_TESTNET_URL);
        assert_eq!(client.base_url(ApiHost::Futures), FUTURES_TESTNET_URL);
    }

    struct FixedTimestamp(u64);

    impl TimestampProvider for FixedTimestamp {
        fn timestamp_millis(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn test_signed_payload_replaces_caller_signature() {
        let client = BinanceClient::builder()
            .timestamp_provider(Arc::new(FixedTimestamp(1_700_000_000_000)))
            .build();
        let credentials = Credentials::new("key", "secret");
        let mut request = Request::new(
            reqwest::Method::GET,
            ApiHost::Spot,
            "/sapi/v1/asset/assetDetail",
            SecurityType::Signed,
        )
        .param("signature", "abc")
        .param("asset", "BTC");

        let payload = client.signed_payload(&mut request, &credentials).unwrap();
        let expected = sign_query(&credentials, "asset=BTC&timestamp=1700000000000").unwrap();
        assert_eq!(
            payload,
            format!("asset=BTC&timestamp=1700000000000&signature={expected}")
        );
        assert_eq!(payload.matches("signature=").count(), 1);
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client = BinanceClient::builder()
            .credentials(Arc::new(crate::auth::StaticCredentials::new("key", "secret")))
            .build();
        let debug_str = format!("{:?}", client);
        assert!(debug_str.contains("has_credentials: true"));
        assert!(!debug_str.contains("secret"));
    }

    #[test]
    fn test_decode_body_generic() {
        let map: HashMap<String, u32> = decode_body(br#"{"a":1}"#.to_vec()).unwrap();
        assert_eq!(map["a"], 1);

        let list: Vec<u32> = decode_body(b"[1,2,3]".to_vec()).unwrap();
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_body_keeps_bytes() {
        let err = decode_body::<Vec<u32>>(b"[1,2,".to_vec()).unwrap_err();
        match err {
            BinanceError::Decode { body, .. } => assert_eq!(body, b"[1,2,".to_vec()),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_from_status_api_body() {
        let err = error_from_status(
            400,
            "/sapi/v1/asset/assetDetail",
            br#"{"code":-1121,"msg":"Invalid symbol."}"#.to_vec(),
        );
        let api = err.api_error().unwrap();
        assert_eq!(api.code, -1121);
        assert_eq!(api.message, "Invalid symbol.");
    }

    #[test]
    fn test_error_from_status_other_body() {
        let err = error_from_status(502, "/api/v3/ping", b"Bad Gateway".to_vec());
        match err {
            BinanceError::UnexpectedStatus { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "Bad Gateway");
            }
            other => panic!("expected unexpected status, got {other:?}"),
        }
    }
}
