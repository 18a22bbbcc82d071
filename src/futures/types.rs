//! USDⓈ-M futures account types.
//!
//! Amounts are decimal strings. Fields that only some account modes send
//! (multi-assets, hedge mode) default when absent.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_with::{TimestampMilliSeconds, serde_as};
use time::OffsetDateTime;

/// Side of a futures position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionSide {
    /// One-way mode
    #[default]
    Both,
    /// Hedge mode, long leg
    Long,
    /// Hedge mode, short leg
    Short,
}

/// Futures account information from `/fapi/v2/account`.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesAccount {
    /// Commission tier.
    #[serde(default)]
    pub fee_tier: u32,
    /// Whether trading is enabled.
    #[serde(default)]
    pub can_trade: bool,
    /// Whether deposits are enabled.
    #[serde(default)]
    pub can_deposit: bool,
    /// Whether withdrawals are enabled.
    #[serde(default)]
    pub can_withdraw: bool,
    /// Last update time (epoch when unused).
    #[serde_as(as = "TimestampMilliSeconds<i64>")]
    pub update_time: OffsetDateTime,
    /// Whether multi-assets margin mode is on.
    #[serde(default)]
    pub multi_assets_margin: bool,
    #[serde(default)]
    pub total_initial_margin: Decimal,
    #[serde(default)]
    pub total_maint_margin: Decimal,
    #[serde(default)]
    pub total_wallet_balance: Decimal,
    #[serde(default)]
    pub total_unrealized_profit: Decimal,
    #[serde(default)]
    pub total_margin_balance: Decimal,
    #[serde(default)]
    pub total_position_initial_margin: Decimal,
    #[serde(default)]
    pub total_open_order_initial_margin: Decimal,
    #[serde(default)]
    pub total_cross_wallet_balance: Decimal,
    #[serde(default)]
    pub total_cross_un_pnl: Decimal,
    #[serde(default)]
    pub available_balance: Decimal,
    #[serde(default)]
    pub max_withdraw_amount: Decimal,
    /// Per-asset balances.
    #[serde(default)]
    pub assets: Vec<FuturesAsset>,
    /// Per-symbol positions, including empty ones.
    #[serde(default)]
    pub positions: Vec<FuturesPosition>,
}

impl FuturesAccount {
    /// Balance of a single margin asset.
    pub fn asset(&self, asset: &str) -> Option<&FuturesAsset> {
        self.assets.iter().find(|a| a.asset == asset)
    }

    /// Positions with a non-zero amount.
    pub fn open_positions(&self) -> impl Iterator<Item = &FuturesPosition> {
        self.positions.iter().filter(|p| !p.position_amt.is_zero())
    }
}

/// Margin asset balance in a futures account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesAsset {
    /// Asset symbol.
    pub asset: String,
    pub wallet_balance: Decimal,
    #[serde(default)]
    pub unrealized_profit: Decimal,
    #[serde(default)]
    pub margin_balance: Decimal,
    #[serde(default)]
    pub maint_margin: Decimal,
    #[serde(default)]
    pub initial_margin: Decimal,
    #[serde(default)]
    pub position_initial_margin: Decimal,
    #[serde(default)]
    pub open_order_initial_margin: Decimal,
    #[serde(default)]
    pub cross_wallet_balance: Decimal,
    #[serde(default)]
    pub cross_un_pnl: Decimal,
    #[serde(default)]
    pub available_balance: Decimal,
    #[serde(default)]
    pub max_withdraw_amount: Decimal,
    /// Whether the asset can be used as margin in multi-assets mode.
    #[serde(default)]
    pub margin_available: bool,
}

/// Position in a futures account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesPosition {
    /// Contract symbol.
    pub symbol: String,
    /// Signed position size; negative when short.
    pub position_amt: Decimal,
    #[serde(default)]
    pub entry_price: Decimal,
    #[serde(default)]
    pub unrealized_profit: Decimal,
    #[serde(default)]
    pub initial_margin: Decimal,
    #[serde(default)]
    pub maint_margin: Decimal,
    #[serde(default)]
    pub position_initial_margin: Decimal,
    #[serde(default)]
    pub open_order_initial_margin: Decimal,
    /// Current leverage.
    #[serde(default)]
    pub leverage: Decimal,
    /// Whether the position uses isolated margin.
    #[serde(default)]
    pub isolated: bool,
    #[serde(default)]
    pub max_notional: Decimal,
    #[serde(default)]
    pub position_side: PositionSide,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_futures_account_deserialize() {
        let json = r#"{
            "feeTier": 0,
            "canTrade": true,
            "canDeposit": true,
            "canWithdraw": true,
            "updateTime": 0,
            "multiAssetsMargin": false,
            "totalInitialMargin": "0.00000000",
            "totalMaintMargin": "0.00000000",
            "totalWalletBalance": "23.72469206",
            "totalUnrealizedProfit": "0.00000000",
            "totalMarginBalance": "23.72469206",
            "availableBalance": "23.72469206",
            "maxWithdrawAmount": "23.72469206",
            "assets": [{
                "asset": "USDT",
                "walletBalance": "23.72469206",
                "unrealizedProfit": "0.00000000",
                "marginBalance": "23.72469206",
                "maintMargin": "0.00000000",
                "initialMargin": "0.00000000",
                "availableBalance": "23.72469206",
                "maxWithdrawAmount": "23.72469206",
                "marginAvailable": true,
                "updateTime": 1625474304765
            }],
            "positions": [{
                "symbol": "BTCUSDT",
                "initialMargin": "0",
                "maintMargin": "0",
                "unrealizedProfit": "0.00000000",
                "leverage": "100",
                "isolated": true,
                "entryPrice": "0.00000",
                "maxNotional": "250000",
                "positionSide": "BOTH",
                "positionAmt": "0",
                "updateTime": 0
            }, {
                "symbol": "ETHUSDT",
                "leverage": "20",
                "isolated": false,
                "entryPrice": "1800.5",
                "positionSide": "LONG",
                "positionAmt": "-0.5"
            }]
        }"#;

        let account: FuturesAccount = serde_json::from_str(json).unwrap();
        assert!(account.can_trade);
        assert_eq!(account.update_time, OffsetDateTime::UNIX_EPOCH);
        assert_eq!(account.total_wallet_balance.to_string(), "23.72469206");
        assert_eq!(account.total_cross_un_pnl, Decimal::ZERO);

        let usdt = account.asset("USDT").unwrap();
        assert!(usdt.margin_available);
        assert!(account.asset("BTC").is_none());

        assert_eq!(account.positions.len(), 2);
        assert_eq!(account.positions[0].leverage, Decimal::from(100));
        let open: Vec<_> = account.open_positions().collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].symbol, "ETHUSDT");
        assert_eq!(open[0].position_side, PositionSide::Long);
    }
}
