//! Authentication module for the Binance API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Millisecond timestamps for signed requests
//! - HMAC-SHA256 signature generation for signed requests

mod credentials;
mod signature;
mod timestamp;

pub use credentials::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};
pub use signature::sign_query;
pub use timestamp::{SystemTimestamp, TimestampProvider};
