//! Request descriptors and parameter encoding.

use std::collections::BTreeMap;

use reqwest::Method;

use crate::error::BinanceError;

/// How an endpoint authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityType {
    /// Public endpoint, sent as-is.
    None,
    /// Requires the `X-MBX-APIKEY` header but no signature.
    ApiKey,
    /// Requires the API key header, a `timestamp` and an HMAC `signature`.
    Signed,
}

impl SecurityType {
    /// Whether the API key header is attached.
    pub fn requires_api_key(self) -> bool {
        !matches!(self, SecurityType::None)
    }
}

/// Which Binance REST host an endpoint lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiHost {
    /// Spot, wallet and `/sapi` endpoints (`api.binance.com`).
    Spot,
    /// USDⓈ-M futures endpoints (`fapi.binance.com`).
    Futures,
}

/// Request parameters keyed by name.
///
/// Keys are unique and kept in lexicographic order, so encoding the same
/// parameters always yields the same string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl ToString) {
        self.0.insert(name.into(), value.to_string());
    }

    /// Set a parameter only if a value is present.
    pub fn set_opt<V: ToString>(&mut self, name: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.set(name, value);
        }
    }

    /// Get the value of a parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Whether a parameter is set.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Remove a parameter, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode as a URL query string in key order.
    pub fn encode(&self) -> Result<String, BinanceError> {
        serde_urlencoded::to_string(&self.0).map_err(|e| BinanceError::Encode(e.to_string()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.set(name, value);
        }
        params
    }
}

/// A single outbound API call.
///
/// Endpoint services build one of these per call and hand it to
/// [`BinanceClient::call`](crate::rest::BinanceClient::call).
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    host: ApiHost,
    endpoint: String,
    security: SecurityType,
    params: Params,
}

impl Request {
    /// Create a request with no parameters.
    pub fn new(
        method: Method,
        host: ApiHost,
        endpoint: impl Into<String>,
        security: SecurityType,
    ) -> Self {
        Self {
            method,
            host,
            endpoint: endpoint.into(),
            security,
            params: Params::new(),
        }
    }

    /// Add a parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.set(name, value);
        self
    }

    /// Add a parameter if a value is present.
    pub fn param_opt<V: ToString>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.params.set_opt(name, value);
        self
    }

    /// Set a parameter in place.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl ToString) {
        self.params.set(name, value);
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Host the endpoint lives on.
    pub fn host(&self) -> ApiHost {
        self.host
    }

    /// Endpoint path (e.g. `/sapi/v1/asset/assetDetail`).
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Security type.
    pub fn security(&self) -> SecurityType {
        self.security
    }

    /// Request parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    pub(crate) fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    /// Whether parameters travel in the body rather than the query string.
    pub fn sends_body(&self) -> bool {
        self.method == Method::POST || self.method == Method::PUT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let mut params = Params::new();
        params.set("asset", "BTC");
        params.set("asset", "ETH");

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("asset"), Some("ETH"));
    }

    #[test]
    fn test_encode_is_sorted_and_deterministic() {
        let mut a = Params::new();
        a.set("timestamp", 1700000000000u64);
        a.set("asset", "BTC");
        a.set("limit", 5);

        let b: Params = [("limit", "5"), ("asset", "BTC"), ("timestamp", "1700000000000")]
            .into_iter()
            .collect();

        let encoded = a.encode().unwrap();
        assert_eq!(encoded, "asset=BTC&limit=5&timestamp=1700000000000");
        assert_eq!(encoded, a.encode().unwrap());
        assert_eq!(encoded, b.encode().unwrap());
    }

    #[test]
    fn test_encode_escapes_values() {
        let params: Params = [("note", "a b&c=d")].into_iter().collect();
        assert_eq!(params.encode().unwrap(), "note=a+b%26c%3Dd");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(Params::new().encode().unwrap(), "");
    }

    #[test]
    fn test_set_opt_skips_none() {
        let mut params = Params::new();
        params.set_opt("startTime", None::<i64>);
        params.set_opt("limit", Some(10));

        assert!(!params.contains("startTime"));
        assert_eq!(params.get("limit"), Some("10"));
    }

    #[test]
    fn test_request_builder() {
        let request = Request::new(
            Method::GET,
            ApiHost::Spot,
            "/sapi/v1/asset/assetDetail",
            SecurityType::Signed,
        )
        .param("asset", "BTC")
        .param_opt("recvWindow", None::<u64>);

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.host(), ApiHost::Spot);
        assert_eq!(request.endpoint(), "/sapi/v1/asset/assetDetail");
        assert_eq!(request.security(), SecurityType::Signed);
        assert_eq!(request.params().get("asset"), Some("BTC"));
        assert_eq!(request.params().len(), 1);
        assert!(!request.sends_body());
    }

    #[test]
    fn test_security_type_api_key() {
        assert!(!SecurityType::None.requires_api_key());
        assert!(SecurityType::ApiKey.requires_api_key());
        assert!(SecurityType::Signed.requires_api_key());
    }
}
