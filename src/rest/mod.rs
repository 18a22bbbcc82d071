//! Shared REST machinery: request descriptors, signing and dispatch.
//!
//! Endpoint services in [`crate::spot`] and [`crate::futures`] build a
//! [`Request`] and hand it to [`BinanceClient::call`], which signs it
//! according to its [`SecurityType`], sends it and decodes the response.
//!
//! The same machinery is available for endpoints this crate does not wrap:
//!
//! ```rust,no_run
//! use binance_api_client::rest::{ApiHost, BinanceClient, Request, SecurityType};
//! use reqwest::Method;
//!
//! # async fn run(client: &BinanceClient) -> Result<(), binance_api_client::BinanceError> {
//! let request = Request::new(
//!     Method::GET,
//!     ApiHost::Spot,
//!     "/sapi/v1/capital/deposit/hisrec",
//!     SecurityType::Signed,
//! )
//! .param("coin", "USDT");
//! let deposits: serde_json::Value = client.call(request).await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod endpoints;
mod request;

pub use client::{BinanceClient, BinanceClientBuilder};
pub use request::{ApiHost, Params, Request, SecurityType};
