//! Account endpoints (signed).

mod types;

pub use types::*;

use reqwest::Method;

use crate::error::BinanceError;
use crate::rest::endpoints::spot;
use crate::rest::{ApiHost, BinanceClient, Request, SecurityType};
use crate::types::{Account, AccountType};

impl BinanceClient {
    /// Fetch spot account information and balances.
    pub fn account(&self) -> GetAccountService<'_> {
        GetAccountService {
            client: self,
            recv_window: None,
        }
    }

    /// Fetch daily snapshots of a wallet.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use binance_api_client::rest::BinanceClient;
    /// use binance_api_client::types::AccountType;
    ///
    /// # async fn run(client: &BinanceClient) -> Result<(), binance_api_client::BinanceError> {
    /// let snapshot = client
    ///     .account_snapshot(AccountType::Spot)
    ///     .limit(7)
    ///     .send()
    ///     .await?;
    /// for day in &snapshot.snapshots {
    ///     println!("{}: {:?}", day.update_time, day.data.total_asset_of_btc);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn account_snapshot(&self, account_type: AccountType) -> GetAccountSnapshotService<'_> {
        GetAccountSnapshotService {
            client: self,
            account_type,
            start_time: None,
            end_time: None,
            limit: None,
            recv_window: None,
        }
    }

    /// Fetch the account status.
    pub fn account_status(&self) -> GetAccountStatusService<'_> {
        GetAccountStatusService {
            client: self,
            recv_window: None,
        }
    }

    /// Fetch the API trading status.
    pub fn api_trading_status(&self) -> GetApiTradingStatusService<'_> {
        GetApiTradingStatusService {
            client: self,
            recv_window: None,
        }
    }

    /// Fetch the permissions of the configured API key.
    pub fn api_restrictions(&self) -> GetApiRestrictionsService<'_> {
        GetApiRestrictionsService {
            client: self,
            recv_window: None,
        }
    }
}

/// `GET /api/v3/account`
#[derive(Debug, Clone)]
pub struct GetAccountService<'a> {
    client: &'a BinanceClient,
    recv_window: Option<u64>,
}

impl GetAccountService<'_> {
    /// Receive window in milliseconds.
    pub fn recv_window(mut self, millis: u64) -> Self {
        self.recv_window = Some(millis);
        self
    }

    /// Build the request descriptor.
    pub fn request(&self) -> Request {
        Request::new(Method::GET, ApiHost::Spot, spot::ACCOUNT, SecurityType::Signed)
            .param_opt("recvWindow", self.recv_window)
    }

    /// Send the request.
    pub async fn send(&self) -> Result<Account, BinanceError> {
        self.client.call(self.request()).await
    }
}

/// `GET /sapi/v1/accountSnapshot`
#[derive(Debug, Clone)]
pub struct GetAccountSnapshotService<'a> {
    client: &'a BinanceClient,
    account_type: AccountType,
    start_time: Option<i64>,
    end_time: Option<i64>,
    limit: Option<u32>,
    recv_window: Option<u64>,
}

impl GetAccountSnapshotService<'_> {
    /// Wallet to snapshot.
    pub fn account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = account_type;
        self
    }

    /// Start time in milliseconds.
    pub fn start_time(mut self, millis: i64) -> Self {
        self.start_time = Some(millis);
        self
    }

    /// End time in milliseconds.
    pub fn end_time(mut self, millis: i64) -> Self {
        self.end_time = Some(millis);
        self
    }

    /// Number of days (server default 7, range 7..=30).
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Receive window in milliseconds.
    pub fn recv_window(mut self, millis: u64) -> Self {
        self.recv_window = Some(millis);
        self
    }

    /// Build the request descriptor.
    pub fn request(&self) -> Request {
        Request::new(
            Method::GET,
            ApiHost::Spot,
            spot::ACCOUNT_SNAPSHOT,
            SecurityType::Signed,
        )
        .param("type", self.account_type)
        .param_opt("startTime", self.start_time)
        .param_opt("endTime", self.end_time)
        .param_opt("limit", self.limit)
        .param_opt("recvWindow", self.recv_window)
    }

    /// Send the request.
    pub async fn send(&self) -> Result<Snapshot, BinanceError> {
        self.client.call(self.request()).await
    }
}

/// `GET /sapi/v1/account/status`
#[derive(Debug, Clone)]
pub struct GetAccountStatusService<'a> {
    client: &'a BinanceClient,
    recv_window: Option<u64>,
}

impl GetAccountStatusService<'_> {
    /// Receive window in milliseconds.
    pub fn recv_window(mut self, millis: u64) -> Self {
        self.recv_window = Some(millis);
        self
    }

    /// Build the request descriptor.
    pub fn request(&self) -> Request {
        Request::new(
            Method::GET,
            ApiHost::Spot,
            spot::ACCOUNT_STATUS,
            SecurityType::Signed,
        )
        .param_opt("recvWindow", self.recv_window)
    }

    /// Send the request.
    pub async fn send(&self) -> Result<AccountStatus, BinanceError> {
        self.client.call(self.request()).await
    }
}

/// `GET /sapi/v1/account/apiTradingStatus`
#[derive(Debug, Clone)]
pub struct GetApiTradingStatusService<'a> {
    client: &'a BinanceClient,
    recv_window: Option<u64>,
}

impl GetApiTradingStatusService<'_> {
    /// Receive window in milliseconds.
    pub fn recv_window(mut self, millis: u64) -> Self {
        self.recv_window = Some(millis);
        self
    }

    /// Build the request descriptor.
    pub fn request(&self) -> Request {
        Request::new(
            Method::GET,
            ApiHost::Spot,
            spot::API_TRADING_STATUS,
            SecurityType::Signed,
        )
        .param_opt("recvWindow", self.recv_window)
    }

    /// Send the request.
    pub async fn send(&self) -> Result<ApiTradingStatusResponse, BinanceError> {
        self.client.call(self.request()).await
    }
}

/// `GET /sapi/v1/account/apiRestrictions`
#[derive(Debug, Clone)]
pub struct GetApiRestrictionsService<'a> {
    client: &'a BinanceClient,
    recv_window: Option<u64>,
}

impl GetApiRestrictionsService<'_> {
    /// Receive window in milliseconds.
    pub fn recv_window(mut self, millis: u64) -> Self {
        self.recv_window = Some(millis);
        self
    }

    /// Build the request descriptor.
    pub fn request(&self) -> Request {
        Request::new(
            Method::GET,
            ApiHost::Spot,
            spot::API_RESTRICTIONS,
            SecurityType::Signed,
        )
        .param_opt("recvWindow", self.recv_window)
    }

    /// Send the request.
    pub async fn send(&self) -> Result<ApiRestrictions, BinanceError> {
        self.client.call(self.request()).await
    }
}
