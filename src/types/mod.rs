//! Common types used across the Binance client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
