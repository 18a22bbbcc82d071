//! Binance spot host endpoints.
//!
//! Services are created from a [`BinanceClient`](crate::rest::BinanceClient),
//! configured with chained setters and sent with `send()`:
//!
//! - [`wallet`] - asset details, funding wallet, coin configuration
//! - [`account`] - account information, snapshots, status and API key permissions
//! - [`general`] - connectivity and server time
//! - [`user_stream`] - listen keys for user data streams

pub mod account;
pub mod general;
pub mod user_stream;
pub mod wallet;

pub use account::{
    GetAccountService, GetAccountSnapshotService, GetAccountStatusService,
    GetApiRestrictionsService, GetApiTradingStatusService,
};
pub use general::{PingService, ServerTimeService};
pub use user_stream::{
    CloseUserStreamService, KeepaliveUserStreamService, ListenKey, StartUserStreamService,
};
pub use wallet::{GetAllCoinsService, GetAssetDetailService, GetFundingAssetService};
