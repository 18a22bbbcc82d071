//! Custom serde helpers for Binance's loosely typed JSON.
//!
//! Binance mostly sends amounts as decimal strings, but a few endpoints send
//! bare JSON numbers or empty strings for the same kind of field.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

fn decimal_from_value<E: de::Error>(value: Value) -> Result<Option<Decimal>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s.trim().parse::<Decimal>().map(Some).map_err(de::Error::custom),
        Value::Number(n) => {
            let s = n.to_string();
            s.parse::<Decimal>()
                .or_else(|_| Decimal::from_scientific(&s))
                .map(Some)
                .map_err(de::Error::custom)
        }
        other => Err(de::Error::custom(format!(
            "expected a decimal string or number, got {other}"
        ))),
    }
}

/// Deserialize a decimal sent either as a string or as a JSON number.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use rust_decimal::Decimal;
/// use binance_api_client::types::serde_helpers::string_or_number;
///
/// #[derive(Deserialize, Debug)]
/// struct AssetDetail {
///     #[serde(deserialize_with = "string_or_number::deserialize")]
///     withdraw_fee: Decimal,
/// }
///
/// let detail: AssetDetail = serde_json::from_str(r#"{"withdraw_fee":0.0005}"#).unwrap();
/// assert_eq!(detail.withdraw_fee.to_string(), "0.0005");
///
/// let detail: AssetDetail = serde_json::from_str(r#"{"withdraw_fee":"35"}"#).unwrap();
/// assert_eq!(detail.withdraw_fee.to_string(), "35");
/// ```
pub mod string_or_number {
    use super::*;

    /// Deserialize a required decimal from a string or number.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decimal_from_value(value)?.ok_or_else(|| de::Error::custom("expected a decimal, got null"))
    }
}

/// Deserialize an optional decimal, mapping `null` and `""` to `None`.
///
/// Use together with `#[serde(default)]` so a missing field is also `None`.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use rust_decimal::Decimal;
/// use binance_api_client::types::serde_helpers::optional_decimal;
///
/// #[derive(Deserialize, Debug)]
/// struct Snapshot {
///     #[serde(deserialize_with = "optional_decimal::deserialize", default)]
///     margin_level: Option<Decimal>,
/// }
///
/// let s: Snapshot = serde_json::from_str(r#"{"margin_level":""}"#).unwrap();
/// assert!(s.margin_level.is_none());
///
/// let s: Snapshot = serde_json::from_str(r#"{}"#).unwrap();
/// assert!(s.margin_level.is_none());
///
/// let s: Snapshot = serde_json::from_str(r#"{"margin_level":"2748.02909813"}"#).unwrap();
/// assert_eq!(s.margin_level.unwrap().to_string(), "2748.02909813");
/// ```
pub mod optional_decimal {
    use super::*;

    /// Deserialize an optional decimal from a string, number, `""` or `null`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decimal_from_value(value)
    }
}

/// Helper for empty strings that should be deserialized as None.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use binance_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
///     deposit_tip: Option<String>,
/// }
///
/// let response: Response = serde_json::from_str(r#"{"deposit_tip":""}"#).unwrap();
/// assert!(response.deposit_tip.is_none());
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}
