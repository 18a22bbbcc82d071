//! User data stream endpoints (API key only).
//!
//! A listen key is valid for 60 minutes after creation or the last
//! keepalive.

use reqwest::Method;
use serde::Deserialize;

use crate::error::BinanceError;
use crate::rest::endpoints::spot;
use crate::rest::{ApiHost, BinanceClient, Request, SecurityType};

/// Listen key for a user data stream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenKey {
    /// The listen key.
    pub listen_key: String,
}

impl BinanceClient {
    /// Start a new user data stream.
    pub fn start_user_stream(&self) -> StartUserStreamService<'_> {
        StartUserStreamService { client: self }
    }

    /// Extend the validity of a listen key by 60 minutes.
    pub fn keepalive_user_stream(
        &self,
        listen_key: impl Into<String>,
    ) -> KeepaliveUserStreamService<'_> {
        KeepaliveUserStreamService {
            client: self,
            listen_key: listen_key.into(),
        }
    }

    /// Close a user data stream.
    pub fn close_user_stream(&self, listen_key: impl Into<String>) -> CloseUserStreamService<'_> {
        CloseUserStreamService {
            client: self,
            listen_key: listen_key.into(),
        }
    }
}

/// `POST /api/v3/userDataStream`
#[derive(Debug, Clone)]
pub struct StartUserStreamService<'a> {
    client: &'a BinanceClient,
}

impl StartUserStreamService<'_> {
    /// Build the request descriptor.
    pub fn request(&self) -> Request {
        Request::new(
            Method::POST,
            ApiHost::Spot,
            spot::USER_DATA_STREAM,
            SecurityType::ApiKey,
        )
    }

    /// Send the request.
    pub async fn send(&self) -> Result<ListenKey, BinanceError> {
        self.client.call(self.request()).await
    }
}

/// `PUT /api/v3/userDataStream`
#[derive(Debug, Clone)]
pub struct KeepaliveUserStreamService<'a> {
    client: &'a BinanceClient,
    listen_key: String,
}

impl KeepaliveUserStreamService<'_> {
    /// Build the request descriptor.
    pub fn request(&self) -> Request {
        Request::new(
            Method::PUT,
            ApiHost::Spot,
            spot::USER_DATA_STREAM,
            SecurityType::ApiKey,
        )
        .param("listenKey", &self.listen_key)
    }

    /// Send the request.
    pub async fn send(&self) -> Result<(), BinanceError> {
        self.client.call_api(self.request()).await?;
        Ok(())
    }
}

/// `DELETE /api/v3/userDataStream`
#[derive(Debug, Clone)]
pub struct CloseUserStreamService<'a> {
    client: &'a BinanceClient,
    listen_key: String,
}

impl CloseUserStreamService<'_> {
    /// Build the request descriptor.
    pub fn request(&self) -> Request {
        Request::new(
            Method::DELETE,
            ApiHost::Spot,
            spot::USER_DATA_STREAM,
            SecurityType::ApiKey,
        )
        .param("listenKey", &self.listen_key)
    }

    /// Send the request.
    pub async fn send(&self) -> Result<(), BinanceError> {
        self.client.call_api(self.request()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keepalive_puts_listen_key_in_body() {
        let client = BinanceClient::new();
        let request = client
            .keepalive_user_stream("pqia91ma19a5s61cv6a81va65sdf19v8a65a1")
            .request();

        assert_eq!(request.method(), &Method::PUT);
        assert_eq!(request.security(), SecurityType::ApiKey);
        assert!(request.sends_body());
        assert_eq!(
            request.params().get("listenKey"),
            Some("pqia91ma19a5s61cv6a81va65sdf19v8a65a1")
        );
    }

    #[test]
    fn test_close_uses_query_string() {
        let client = BinanceClient::new();
        let request = client.close_user_stream("abc").request();

        assert_eq!(request.method(), &Method::DELETE);
        assert!(!request.sends_body());
    }
}
