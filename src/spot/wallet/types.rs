//! Types for wallet endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::serde_helpers::{empty_string_as_none, optional_decimal, string_or_number};

/// Deposit and withdrawal details of an asset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDetail {
    /// Minimum withdrawal amount.
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub min_withdraw_amount: Decimal,
    /// Whether deposits are enabled.
    pub deposit_status: bool,
    /// Withdrawal fee.
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub withdraw_fee: Decimal,
    /// Whether withdrawals are enabled.
    pub withdraw_status: bool,
    /// Reason deposits are suspended, if any.
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub deposit_tip: Option<String>,
}

/// Funding wallet balance of an asset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingAsset {
    /// Asset symbol.
    pub asset: String,
    /// Available amount.
    pub free: Decimal,
    /// Locked amount.
    pub locked: Decimal,
    /// Frozen amount.
    pub freeze: Decimal,
    /// Amount being withdrawn.
    pub withdrawing: Decimal,
    /// BTC valuation, present when requested.
    #[serde(deserialize_with = "optional_decimal::deserialize", default)]
    pub btc_valuation: Option<Decimal>,
}

/// Wallet information of a coin, including its supported networks.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinInfo {
    /// Coin symbol.
    pub coin: String,
    /// Whether deposits are enabled on any network.
    pub deposit_all_enable: bool,
    /// Available amount.
    pub free: Decimal,
    /// Frozen amount.
    pub freeze: Decimal,
    /// Amount in IPO subscription.
    pub ipoing: Decimal,
    /// Amount locked for IPO.
    #[serde(deserialize_with = "optional_decimal::deserialize", default)]
    pub ipoable: Option<Decimal>,
    /// Whether the coin is a fiat currency.
    #[serde(alias = "is_legal_money", default)]
    pub is_legal_money: bool,
    /// Locked amount.
    pub locked: Decimal,
    /// Full coin name.
    pub name: String,
    /// Amount in storage.
    pub storage: Decimal,
    /// Whether the coin is tradable.
    pub trading: bool,
    /// Whether withdrawals are enabled on any network.
    pub withdraw_all_enable: bool,
    /// Amount being withdrawn.
    pub withdrawing: Decimal,
    /// Supported networks.
    #[serde(default)]
    pub network_list: Vec<CoinNetwork>,
}

impl CoinInfo {
    /// The default network for this coin, if flagged.
    pub fn default_network(&self) -> Option<&CoinNetwork> {
        self.network_list.iter().find(|n| n.is_default)
    }
}

/// Deposit and withdrawal settings of a coin on one network.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinNetwork {
    /// Regex matching valid addresses.
    #[serde(default)]
    pub address_regex: String,
    /// Coin symbol.
    pub coin: String,
    /// Message shown when deposits are disabled.
    #[serde(default)]
    pub deposit_desc: String,
    /// Whether deposits are enabled.
    pub deposit_enable: bool,
    /// Whether this is the default network.
    pub is_default: bool,
    /// Regex matching valid memos.
    #[serde(default)]
    pub memo_regex: String,
    /// Confirmations required to credit a deposit.
    pub min_confirm: u32,
    /// Network display name.
    pub name: String,
    /// Network identifier.
    pub network: String,
    /// Whether the deposit address can be reset.
    #[serde(default)]
    pub reset_address_status: bool,
    /// Special instructions.
    #[serde(default)]
    pub special_tips: Option<String>,
    /// Confirmations required to unlock a deposit for withdrawal.
    pub un_lock_confirm: u32,
    /// Message shown when withdrawals are disabled.
    #[serde(default)]
    pub withdraw_desc: String,
    /// Whether withdrawals are enabled.
    pub withdraw_enable: bool,
    /// Withdrawal fee.
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub withdraw_fee: Decimal,
    /// Withdrawal amount step.
    #[serde(deserialize_with = "optional_decimal::deserialize", default)]
    pub withdraw_integer_multiple: Option<Decimal>,
    /// Maximum withdrawal amount.
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub withdraw_max: Decimal,
    /// Minimum withdrawal amount.
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub withdraw_min: Decimal,
    /// Whether the memo is required (same address for all users).
    #[serde(default)]
    pub same_address: bool,
}
