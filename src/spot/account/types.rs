//! Types for account endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_with::{TimestampMilliSeconds, serde_as};
use time::OffsetDateTime;

use crate::types::AccountType;
use crate::types::serde_helpers::optional_decimal;

/// Daily account snapshots.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    /// Status code (200 on success).
    pub code: i64,
    /// Status message (empty on success).
    #[serde(default)]
    pub msg: String,
    /// Snapshots, one per day.
    #[serde(rename = "snapshotVos", default)]
    pub snapshots: Vec<SnapshotVo>,
}

/// One daily snapshot.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotVo {
    /// Wallet the snapshot belongs to.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Snapshot time.
    #[serde_as(as = "TimestampMilliSeconds<i64>")]
    pub update_time: OffsetDateTime,
    /// Snapshot contents.
    pub data: SnapshotData,
}

/// Snapshot contents; which fields are present depends on the wallet type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotData {
    /// Margin level (margin).
    #[serde(deserialize_with = "optional_decimal::deserialize", default)]
    pub margin_level: Option<Decimal>,
    /// Total assets in BTC (spot, margin).
    #[serde(deserialize_with = "optional_decimal::deserialize", default)]
    pub total_asset_of_btc: Option<Decimal>,
    /// Total liabilities in BTC (margin).
    #[serde(deserialize_with = "optional_decimal::deserialize", default)]
    pub total_liability_of_btc: Option<Decimal>,
    /// Total net assets in BTC (margin).
    #[serde(deserialize_with = "optional_decimal::deserialize", default)]
    pub total_net_asset_of_btc: Option<Decimal>,
    /// Balances (spot).
    #[serde(default)]
    pub balances: Vec<SnapshotBalance>,
    /// User assets (margin).
    #[serde(default)]
    pub user_assets: Vec<SnapshotUserAsset>,
    /// Assets (futures).
    #[serde(default)]
    pub assets: Vec<SnapshotAsset>,
    /// Positions (futures).
    #[serde(rename = "position", default)]
    pub positions: Vec<SnapshotPosition>,
}

/// Spot balance in a snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotBalance {
    /// Asset symbol.
    pub asset: String,
    /// Available amount.
    pub free: Decimal,
    /// Locked amount.
    pub locked: Decimal,
}

/// Margin asset in a snapshot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotUserAsset {
    /// Asset symbol.
    pub asset: String,
    /// Borrowed amount.
    pub borrowed: Decimal,
    /// Available amount.
    pub free: Decimal,
    /// Accrued interest.
    pub interest: Decimal,
    /// Locked amount.
    pub locked: Decimal,
    /// Net asset amount.
    pub net_asset: Decimal,
}

/// Futures asset in a snapshot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotAsset {
    /// Asset symbol.
    pub asset: String,
    /// Margin balance.
    pub margin_balance: Decimal,
    /// Wallet balance.
    pub wallet_balance: Decimal,
}

/// Futures position in a snapshot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotPosition {
    /// Entry price.
    pub entry_price: Decimal,
    /// Mark price.
    pub mark_price: Decimal,
    /// Position size (negative for short).
    pub position_amt: Decimal,
    /// Contract symbol.
    pub symbol: String,
    /// Unrealized profit.
    pub un_realized_profit: Decimal,
}

/// Account status.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountStatus {
    /// Status text, `"Normal"` for a healthy account.
    pub data: String,
}

impl AccountStatus {
    /// Whether the account status is normal.
    pub fn is_normal(&self) -> bool {
        self.data.eq_ignore_ascii_case("normal")
    }
}

/// API trading status response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiTradingStatusResponse {
    /// Trading status.
    pub data: ApiTradingStatus,
}

/// API trading status.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTradingStatus {
    /// Whether API trading is locked.
    pub is_locked: bool,
    /// Seconds until recovery when locked.
    #[serde(default)]
    pub planned_recover_time: i64,
    /// Thresholds that trigger a lock.
    pub trigger_condition: TriggerCondition,
    /// Last update time.
    #[serde_as(as = "TimestampMilliSeconds<i64>")]
    pub update_time: OffsetDateTime,
}

/// Thresholds for API trading locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TriggerCondition {
    /// GTC cancellation ratio threshold.
    #[serde(rename = "GCR")]
    pub gcr: i64,
    /// IOC/FOK expiration ratio threshold.
    #[serde(rename = "IFER")]
    pub ifer: i64,
    /// Unfilled ratio threshold.
    #[serde(rename = "UFR")]
    pub ufr: i64,
}

/// Permissions of the API key.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRestrictions {
    /// Whether access is restricted to trusted IPs.
    pub ip_restrict: bool,
    /// Key creation time.
    #[serde_as(as = "TimestampMilliSeconds<i64>")]
    pub create_time: OffsetDateTime,
    /// Withdrawals permitted.
    #[serde(default)]
    pub enable_withdrawals: bool,
    /// Internal transfers permitted.
    #[serde(default)]
    pub enable_internal_transfer: bool,
    /// Universal transfers permitted.
    #[serde(default)]
    pub permits_universal_transfer: bool,
    /// European options permitted.
    #[serde(default)]
    pub enable_vanilla_options: bool,
    /// Read access permitted.
    #[serde(default)]
    pub enable_reading: bool,
    /// Futures trading permitted.
    #[serde(default)]
    pub enable_futures: bool,
    /// Margin trading permitted.
    #[serde(default)]
    pub enable_margin: bool,
    /// Spot and margin trading permitted.
    #[serde(default)]
    pub enable_spot_and_margin_trading: bool,
    /// Expiry of the trading authority in ms, 0 if none.
    #[serde(default)]
    pub trading_authority_expiration_time: i64,
}
