//! HMAC-SHA256 signature generation for Binance signed endpoints.
//!
//! Binance `SIGNED` endpoints require a signature computed as:
//! ```text
//! hex(HMAC-SHA256(query_string, api_secret))
//! ```
//!
//! where `query_string` is the exact encoded parameter string sent with the
//! request. The result is appended as the final `signature` parameter.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::BinanceError;

type HmacSha256 = Hmac<Sha256>;

/// Sign an encoded parameter string.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret
/// * `query` - The canonical URL-encoded parameters, without `signature`
///
/// # Returns
///
/// Lowercase hex-encoded HMAC-SHA256 signature.
///
/// # Example
///
/// ```rust
/// use binance_api_client::auth::{Credentials, sign_query};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "api_secret");
/// let signature = sign_query(&credentials, "asset=BTC&timestamp=1499827319559")?;
/// assert_eq!(signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign_query(credentials: &Credentials, query: &str) -> Result<String, BinanceError> {
    let mut mac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| BinanceError::Auth(format!("Invalid HMAC key: {e}")))?;
    mac.update(query.as_bytes());
    Ok(const_hex::encode(mac.finalize().into_bytes()))
}
