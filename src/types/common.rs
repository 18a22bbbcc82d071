//! Common domain types shared by spot and futures endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{TimestampMilliSeconds, serde_as};
use time::OffsetDateTime;

/// Wallet type for account snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    /// Spot wallet
    #[serde(alias = "spot")]
    Spot,
    /// Cross margin wallet
    #[serde(alias = "margin")]
    Margin,
    /// USDⓈ-M futures wallet
    #[serde(alias = "futures")]
    Futures,
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Spot => write!(f, "SPOT"),
            AccountType::Margin => write!(f, "MARGIN"),
            AccountType::Futures => write!(f, "FUTURES"),
        }
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SPOT" => Ok(AccountType::Spot),
            "MARGIN" => Ok(AccountType::Margin),
            "FUTURES" => Ok(AccountType::Futures),
            other => Err(format!("unknown account type: {other}")),
        }
    }
}

/// Server time response.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    /// Current server time.
    #[serde_as(as = "TimestampMilliSeconds<i64>")]
    pub server_time: OffsetDateTime,
}

/// Spot account information from `/api/v3/account`.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Maker commission in basis points.
    #[serde(default)]
    pub maker_commission: i64,
    /// Taker commission in basis points.
    #[serde(default)]
    pub taker_commission: i64,
    /// Buyer commission in basis points.
    #[serde(default)]
    pub buyer_commission: i64,
    /// Seller commission in basis points.
    #[serde(default)]
    pub seller_commission: i64,
    /// Whether trading is enabled.
    #[serde(default)]
    pub can_trade: bool,
    /// Whether withdrawals are enabled.
    #[serde(default)]
    pub can_withdraw: bool,
    /// Whether deposits are enabled.
    #[serde(default)]
    pub can_deposit: bool,
    /// Last update time.
    #[serde_as(as = "TimestampMilliSeconds<i64>")]
    pub update_time: OffsetDateTime,
    /// Account type (e.g. `SPOT`).
    #[serde(default)]
    pub account_type: String,
    /// Asset balances.
    #[serde(default)]
    pub balances: Vec<Balance>,
    /// Account permissions.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Account {
    /// Balance of a single asset, if held.
    pub fn balance(&self, asset: &str) -> Option<&Balance> {
        self.balances.iter().find(|b| b.asset == asset)
    }
}

/// Balance of a single asset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Balance {
    /// Asset symbol.
    pub asset: String,
    /// Available amount.
    pub free: Decimal,
    /// Amount locked in open orders.
    pub locked: Decimal,
}

impl Balance {
    /// Free plus locked.
    pub fn total(&self) -> Decimal {
        self.free + self.locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_account_type_serde() {
        assert_eq!(
            serde_json::to_string(&AccountType::Spot).unwrap(),
            "\"SPOT\""
        );
        let parsed: AccountType = serde_json::from_str("\"FUTURES\"").unwrap();
        assert_eq!(parsed, AccountType::Futures);
        // Snapshot responses use lowercase.
        let parsed: AccountType = serde_json::from_str("\"margin\"").unwrap();
        assert_eq!(parsed, AccountType::Margin);
    }

    #[test]
    fn test_account_type_display_parse() {
        assert_eq!(AccountType::Margin.to_string(), "MARGIN");
        assert_eq!("margin".parse::<AccountType>().unwrap(), AccountType::Margin);
        assert!("swap".parse::<AccountType>().is_err());
    }

    #[test]
    fn test_server_time_deserialize() {
        let time: ServerTime = serde_json::from_str(r#"{"serverTime":1499827319559}"#).unwrap();
        assert_eq!(time.server_time, datetime!(2017-07-12 02:41:59.559 UTC));
    }

    #[test]
    fn test_account_deserialize() {
        let json = r#"{
            "makerCommission": 15,
            "takerCommission": 15,
            "buyerCommission": 0,
            "sellerCommission": 0,
            "canTrade": true,
            "canWithdraw": true,
            "canDeposit": true,
            "updateTime": 123456789,
            "accountType": "SPOT",
            "balances": [
                {"asset": "BTC", "free": "4723846.89208129", "locked": "0.00000000"},
                {"asset": "LTC", "free": "4763368.68006011", "locked": "1.00000000"}
            ],
            "permissions": ["SPOT"],
            "uid": 354937868
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.maker_commission, 15);
        assert!(account.can_trade);
        assert_eq!(account.update_time.unix_timestamp(), 123456);
        assert_eq!(account.account_type, "SPOT");
        assert_eq!(account.balances.len(), 2);
        assert_eq!(account.permissions, vec!["SPOT".to_string()]);

        let ltc = account.balance("LTC").unwrap();
        assert_eq!(ltc.total(), "4763369.68006011".parse::<Decimal>().unwrap());
        assert!(account.balance("ETH").is_none());
    }
}
