//! Binance USDⓈ-M futures host endpoints.
//!
//! These services talk to the futures base URL configured with
//! [`BinanceClientBuilder::futures_base_url`](crate::rest::BinanceClientBuilder::futures_base_url).
//! Wallet-level endpoints such as account snapshots live under `/sapi` on the
//! spot host and are found in [`crate::spot::account`].

mod account;
mod types;

pub use account::{FuturesServerTimeService, GetFuturesAccountService};
pub use types::{FuturesAccount, FuturesAsset, FuturesPosition, PositionSide};
