//! Wallet endpoints (signed).
//!
//! Asset details, funding wallet balances and per-network coin configuration.

mod types;

pub use types::*;

use std::collections::HashMap;

use reqwest::Method;

use crate::error::BinanceError;
use crate::rest::endpoints::spot;
use crate::rest::{ApiHost, BinanceClient, Request, SecurityType};

impl BinanceClient {
    /// Fetch deposit/withdrawal details of supported assets.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use binance_api_client::rest::BinanceClient;
    /// use binance_api_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = BinanceClient::builder().credentials(credentials).build();
    ///
    ///     let details = client.asset_detail().asset("BTC").send().await?;
    ///     if let Some(btc) = details.get("BTC") {
    ///         println!("withdraw fee: {}", btc.withdraw_fee);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn asset_detail(&self) -> GetAssetDetailService<'_> {
        GetAssetDetailService {
            client: self,
            asset: None,
            recv_window: None,
        }
    }

    /// Fetch funding wallet balances.
    pub fn funding_asset(&self) -> GetFundingAssetService<'_> {
        GetFundingAssetService {
            client: self,
            asset: None,
            need_btc_valuation: None,
            recv_window: None,
            timestamp: None,
        }
    }

    /// Fetch wallet information of all coins.
    pub fn all_coins(&self) -> GetAllCoinsService<'_> {
        GetAllCoinsService {
            client: self,
            recv_window: None,
        }
    }
}

/// `GET /sapi/v1/asset/assetDetail`
#[derive(Debug, Clone)]
pub struct GetAssetDetailService<'a> {
    client: &'a BinanceClient,
    asset: Option<String>,
    recv_window: Option<u64>,
}

impl GetAssetDetailService<'_> {
    /// Restrict to one asset.
    pub fn asset(mut self, asset: impl Into<String>) -> Self {
        self.asset = Some(asset.into());
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
            spot::ASSET_DETAIL,
            SecurityType::Signed,
        )
        .param_opt("asset", self.asset.as_deref())
        .param_opt("recvWindow", self.recv_window)
    }

    /// Send the request. Details are keyed by asset symbol.
    pub async fn send(&self) -> Result<HashMap<String, AssetDetail>, BinanceError> {
        self.client.call(self.request()).await
    }
}

/// `POST /sapi/v1/asset/get-funding-asset`
#[derive(Debug, Clone)]
pub struct GetFundingAssetService<'a> {
    client: &'a BinanceClient,
    asset: Option<String>,
    need_btc_valuation: Option<bool>,
    recv_window: Option<u64>,
    timestamp: Option<u64>,
}

impl GetFundingAssetService<'_> {
    /// Restrict to one asset.
    pub fn asset(mut self, asset: impl Into<String>) -> Self {
        self.asset = Some(asset.into());
        self
    }

    /// Include the BTC valuation of each balance.
    pub fn need_btc_valuation(mut self, need: bool) -> Self {
        self.need_btc_valuation = Some(need);
        self
    }

    /// Receive window in milliseconds.
    pub fn recv_window(mut self, millis: u64) -> Self {
        self.recv_window = Some(millis);
        self
    }

    /// Explicit request timestamp in milliseconds; defaults to now.
    pub fn timestamp(mut self, millis: u64) -> Self {
        self.timestamp = Some(millis);
        self
    }

    /// Build the request descriptor.
    pub fn request(&self) -> Request {
        Request::new(
            Method::POST,
            ApiHost::Spot,
            spot::FUNDING_ASSET,
            SecurityType::Signed,
        )
        .param_opt("asset", self.asset.as_deref())
        .param_opt("needBtcValuation", self.need_btc_valuation)
        .param_opt("recvWindow", self.recv_window)
        .param_opt("timestamp", self.timestamp)
    }

    /// Send the request.
    pub async fn send(&self) -> Result<Vec<FundingAsset>, BinanceError> {
        self.client.call(self.request()).await
    }
}

/// `GET /sapi/v1/capital/config/getall`
#[derive(Debug, Clone)]
pub struct GetAllCoinsService<'a> {
    client: &'a BinanceClient,
    recv_window: Option<u64>,
}

impl GetAllCoinsService<'_> {
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
            spot::ALL_COINS,
            SecurityType::Signed,
        )
        .param_opt("recvWindow", self.recv_window)
    }

    /// Send the request.
    pub async fn send(&self) -> Result<Vec<CoinInfo>, BinanceError> {
        self.client.call(self.request()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_detail_request() {
        let client = BinanceClient::new();
        let request = client.asset_detail().asset("BTC").request();

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.endpoint(), "/sapi/v1/asset/assetDetail");
        assert_eq!(request.security(), SecurityType::Signed);
        assert_eq!(request.params().encode().unwrap(), "asset=BTC");
    }

    #[test]
    fn test_funding_asset_recv_window_key() {
        let client = BinanceClient::new();
        let request = client
            .funding_asset()
            .need_btc_valuation(true)
            .recv_window(5000)
            .request();

        // The receive window must not leak into needBtcValuation.
        assert_eq!(request.params().get("recvWindow"), Some("5000"));
        assert_eq!(request.params().get("needBtcValuation"), Some("true"));
        assert_eq!(request.method(), &Method::POST);
        assert!(request.sends_body());
    }

    #[test]
    fn test_funding_asset_timestamp_optional() {
        let client = BinanceClient::new();
        assert!(!client.funding_asset().request().params().contains("timestamp"));

        let request = client.funding_asset().timestamp(1_700_000_000_000).request();
        assert_eq!(request.params().get("timestamp"), Some("1700000000000"));
    }

    #[test]
    fn test_asset_detail_deserialize() {
        let json = r#"{
            "CTR": {
                "minWithdrawAmount": "70.00000000",
                "depositStatus": false,
                "withdrawFee": 35,
                "withdrawStatus": true,
                "depositTip": "Delisted, Deposit Suspended"
            },
            "SKY": {
                "minWithdrawAmount": "0.02000000",
                "depositStatus": true,
                "withdrawFee": "0.01",
                "withdrawStatus": true
            }
        }"#;

        let details: HashMap<String, AssetDetail> = serde_json::from_str(json).unwrap();
        let ctr = &details["CTR"];
        assert_eq!(ctr.withdraw_fee.to_string(), "35");
        assert!(!ctr.deposit_status);
        assert_eq!(ctr.deposit_tip.as_deref(), Some("Delisted, Deposit Suspended"));
        assert!(details["SKY"].deposit_tip.is_none());
    }
}
