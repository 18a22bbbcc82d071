//! Request timestamps for Binance signed endpoints.
//!
//! Signed requests carry a `timestamp` parameter in milliseconds since the
//! UNIX epoch. The server rejects requests whose timestamp falls outside
//! `recvWindow` of its own clock.

use time::OffsetDateTime;

/// Trait for providing the `timestamp` of signed requests.
pub trait TimestampProvider: Send + Sync {
    /// Current time in milliseconds since the UNIX epoch.
    fn timestamp_millis(&self) -> u64;
}

/// Timestamp provider backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimestamp;

impl TimestampProvider for SystemTimestamp {
    fn timestamp_millis(&self) -> u64 {
        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        u64::try_from(millis).unwrap_or_default()
    }
}
