//! Binance REST API endpoint constants.

/// Base URL for the Binance spot REST API.
pub const SPOT_BASE_URL: &str = "https://api.binance.com";

/// Base URL for the Binance USDⓈ-M futures REST API.
pub const FUTURES_BASE_URL: &str = "https://fapi.binance.com";

/// Base URL for the Binance spot testnet.
pub const SPOT_TESTNET_URL: &str = "https://testnet.binance.vision";

/// Base URL for the Binance USDⓈ-M futures testnet.
pub const FUTURES_TESTNET_URL: &str = "https://testnet.binancefuture.com";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Spot host endpoints.
pub mod spot {
    /// Test connectivity.
    pub const PING: &str = "/api/v3/ping";
    /// Get server time.
    pub const TIME: &str = "/api/v3/time";
    /// Get account information.
    pub const ACCOUNT: &str = "/api/v3/account";
    /// Start, keep alive or close a user data stream.
    pub const USER_DATA_STREAM: &str = "/api/v3/userDataStream";

    /// Get asset details.
    pub const ASSET_DETAIL: &str = "/sapi/v1/asset/assetDetail";
    /// Get funding wallet balances.
    pub const FUNDING_ASSET: &str = "/sapi/v1/asset/get-funding-asset";
    /// Get information of all coins.
    pub const ALL_COINS: &str = "/sapi/v1/capital/config/getall";
    /// Get daily account snapshots.
    pub const ACCOUNT_SNAPSHOT: &str = "/sapi/v1/accountSnapshot";
    /// Get account status.
    pub const ACCOUNT_STATUS: &str = "/sapi/v1/account/status";
    /// Get API trading status.
    pub const API_TRADING_STATUS: &str = "/sapi/v1/account/apiTradingStatus";
    /// Get API key permissions.
    pub const API_RESTRICTIONS: &str = "/sapi/v1/account/apiRestrictions";
}

/// USDⓈ-M futures host endpoints.
pub mod futures {
    /// Get server time.
    pub const TIME: &str = "/fapi/v1/time";
    /// Get account information.
    pub const ACCOUNT: &str = "/fapi/v2/account";
}
