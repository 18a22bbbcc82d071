//! API key and secret handling.

use std::sync::Arc;

use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

use crate::error::BinanceError;

/// Default environment variable holding the API key.
pub const API_KEY_VAR: &str = "BINANCE_API_KEY";
/// Default environment variable holding the API secret.
pub const API_SECRET_VAR: &str = "BINANCE_API_SECRET";

/// A Binance API key and its HMAC secret.
///
/// The secret never appears in `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    /// The API key, sent in the `X-MBX-APIKEY` header
    pub api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// The HMAC secret. Only the signer should need this.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }

    /// The API key as a header value, marked sensitive.
    pub fn api_key_header(&self) -> Result<HeaderValue, BinanceError> {
        let mut value = HeaderValue::from_str(&self.api_key)
            .map_err(|_| BinanceError::Auth("API key is not a valid header value".into()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Source of the credentials used for `API-KEY` and `SIGNED` endpoints.
///
/// The client asks the provider once per request, so an implementation
/// backed by a secrets manager can rotate keys without rebuilding the client.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

impl CredentialsProvider for Credentials {
    fn get_credentials(&self) -> &Credentials {
        self
    }
}

impl<P: CredentialsProvider + ?Sized> CredentialsProvider for Arc<P> {
    fn get_credentials(&self) -> &Credentials {
        (**self).get_credentials()
    }
}

/// Credentials fixed at construction.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key, api_secret),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials read once from the environment.
///
/// Defaults to `BINANCE_API_KEY` and `BINANCE_API_SECRET`.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Read the default variables.
    ///
    /// Fails with [`BinanceError::MissingCredentials`] if either is unset or empty.
    pub fn from_env() -> Result<Self, BinanceError> {
        Self::from_env_vars(API_KEY_VAR, API_SECRET_VAR)
    }

    /// Read custom variable names.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Result<Self, BinanceError> {
        let read = |name: &str| {
            std::env::var(name)
                .ok()
                .filter(|value| !value.is_empty())
                .ok_or(BinanceError::MissingCredentials)
        };

        Ok(Self {
            credentials: Credentials::new(read(key_var)?, read(secret_var)?),
        })
    }

    /// Like [`EnvCredentials::from_env`], returning `None` instead of an error.
    pub fn try_from_env() -> Option<Self> {
        Self::from_env().ok()
    }

    /// Like [`EnvCredentials::from_env_vars`], returning `None` instead of an error.
    pub fn try_from_env_vars(key_var: &str, secret_var: &str) -> Option<Self> {
        Self::from_env_vars(key_var, secret_var).ok()
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_secret() {
        let creds = Credentials::new("my_key", "super_secret");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("my_key"));
        assert!(!debug_str.contains("super_secret"));

        let provider = StaticCredentials::new("my_key", "super_secret");
        assert!(!format!("{:?}", provider).contains("super_secret"));
    }

    #[test]
    fn test_providers_share_credentials() {
        let provider = Arc::new(StaticCredentials::new("key", "secret"));
        let creds = provider.get_credentials();
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.expose_secret(), "secret");

        let shared: Arc<dyn CredentialsProvider> = Arc::new(Credentials::new("key2", "secret2"));
        assert_eq!(shared.get_credentials().api_key, "key2");
    }

    #[test]
    fn test_api_key_header() {
        let header = Credentials::new("abc123", "s").api_key_header().unwrap();
        assert_eq!(header, "abc123");
        assert!(header.is_sensitive());

        let err = Credentials::new("bad\nkey", "s").api_key_header().unwrap_err();
        assert!(matches!(err, BinanceError::Auth(_)));
    }

    #[test]
    fn test_env_credentials_missing_vars() {
        let result = EnvCredentials::from_env_vars(
            "BINANCE_TEST_UNSET_KEY_VAR",
            "BINANCE_TEST_UNSET_SECRET_VAR",
        );
        assert!(matches!(result, Err(BinanceError::MissingCredentials)));
        assert!(
            EnvCredentials::try_from_env_vars(
                "BINANCE_TEST_UNSET_KEY_VAR",
                "BINANCE_TEST_UNSET_SECRET_VAR"
            )
            .is_none()
        );
    }
}
