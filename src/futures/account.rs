//! Futures account and general endpoints.

use reqwest::Method;

use super::FuturesAccount;
use crate::error::BinanceError;
use crate::rest::endpoints::futures;
use crate::rest::{ApiHost, BinanceClient, Request, SecurityType};
use crate::types::ServerTime;

impl BinanceClient {
    /// Fetch futures account information.
    pub fn futures_account(&self) -> GetFuturesAccountService<'_> {
        GetFuturesAccountService {
            client: self,
            recv_window: None,
        }
    }

    /// Fetch the futures server time.
    pub fn futures_server_time(&self) -> FuturesServerTimeService<'_> {
        FuturesServerTimeService { client: self }
    }
}

/// `GET /fapi/v2/account`
#[derive(Debug, Clone)]
pub struct GetFuturesAccountService<'a> {
    client: &'a BinanceClient,
    recv_window: Option<u64>,
}

impl GetFuturesAccountService<'_> {
    /// Receive window in milliseconds.
    pub fn recv_window(mut self, millis: u64) -> Self {
        self.recv_window = Some(millis);
        self
    }

    /// Build the request descriptor.
    pub fn request(&self) -> Request {
        Request::new(
            Method::GET,
            ApiHost::Futures,
            futures::ACCOUNT,
            SecurityType::Signed,
        )
        .param_opt("recvWindow", self.recv_window)
    }

    /// Send the request.
    pub async fn send(&self) -> Result<FuturesAccount, BinanceError> {
        self.client.call(self.request()).await
    }
}

/// `GET /fapi/v1/time`
#[derive(Debug, Clone)]
pub struct FuturesServerTimeService<'a> {
    client: &'a BinanceClient,
}

impl FuturesServerTimeService<'_> {
    /// Build the request descriptor.
    pub fn request(&self) -> Request {
        Request::new(Method::GET, ApiHost::Futures, futures::TIME, SecurityType::None)
    }

    /// Send the request.
    pub async fn send(&self) -> Result<ServerTime, BinanceError> {
        self.client.call(self.request()).await
    }
}
