//! # Binance API Client
//!
//! An async Rust client library for the Binance spot and USDⓈ-M futures
//! account and wallet REST APIs.
//!
//! ## Features
//!
//! - Signed (HMAC-SHA256), API-key and public requests from one dispatcher
//! - Fluent endpoint services: configure with setters, then `send()`
//! - Strong typing for all responses
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use binance_api_client::rest::BinanceClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BinanceClient::new();
//!     let time = client.server_time().send().await?;
//!     println!("Server time: {:?}", time);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod futures;
pub mod rest;
pub mod spot;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, BinanceError};
pub use rest::{BinanceClient, BinanceClientBuilder};
pub use types::common::{Account, AccountType, Balance};

/// Result type alias using BinanceError
pub type Result<T> = std::result::Result<T, BinanceError>;
