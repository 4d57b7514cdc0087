//! Upstream price API adapters.
//!
//! Each provider knows how to build its HTTP request and where in its JSON
//! envelope the price and the 24h change live. Parsing the envelope into a
//! `PriceSample` is shared and lives in `service::price`.

pub mod birdeye;
pub mod coingecko;

pub use birdeye::BirdeyeProvider;
pub use coingecko::CoinGeckoProvider;

use serde_json::Value;

use crate::error::fetch::FetchError;

/// An upstream price API the fetcher can poll.
pub trait PriceProvider: Send + Sync {
    /// Human-readable provider name for logs.
    fn name(&self) -> &str;

    /// Builds the outbound price request, including auth and chain headers.
    fn request(&self, client: &reqwest::Client) -> reqwest::RequestBuilder;

    /// Key path to the USD price in the response body.
    fn price_path(&self) -> Vec<&str>;

    /// Key path to the 24h change (percent) in the response body.
    fn change_path(&self) -> Vec<&str>;
}

/// Follows a key path through nested JSON objects.
///
/// Returns `None` if any segment is missing or the final value is `null`.
pub fn lookup<'a>(body: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(body, |value, key| value.get(*key))
        .filter(|value| !value.is_null())
}

/// Reads a finite number from a JSON number or a numeric string.
///
/// # Arguments
/// - `field` - Logical field name, used in the error
/// - `value` - JSON value to read
///
/// # Returns
/// - `Ok(f64)` - The parsed number
/// - `Err(FetchError::MalformedValue)` - Not a number, or not finite
pub fn parse_number(field: &'static str, value: &Value) -> Result<f64, FetchError> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    number
        .filter(|n| n.is_finite())
        .ok_or_else(|| FetchError::MalformedValue {
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_follows_nested_path() {
        let body = json!({ "data": { "value": 1.5, "extra": true } });
        assert_eq!(lookup(&body, &["data", "value"]), Some(&json!(1.5)));
    }

    #[test]
    fn lookup_treats_null_as_missing() {
        let body = json!({ "data": { "value": null } });
        assert_eq!(lookup(&body, &["data", "value"]), None);
    }

    #[test]
    fn lookup_missing_intermediate_key() {
        let body = json!({ "success": false });
        assert_eq!(lookup(&body, &["data", "value"]), None);
    }

    #[test]
    fn parse_number_accepts_numeric_string() {
        assert_eq!(parse_number("price", &json!(" 142.25 ")), Ok(142.25));
    }

    #[test]
    fn parse_number_rejects_non_numeric() {
        let result = parse_number("price", &json!("n/a"));
        assert_eq!(
            result,
            Err(FetchError::MalformedValue {
                field: "price",
                value: "\"n/a\"".to_string(),
            })
        );
    }

    #[test]
    fn parse_number_rejects_non_finite_string() {
        assert!(parse_number("price", &json!("NaN")).is_err());
        assert!(parse_number("price", &json!("inf")).is_err());
    }

    #[test]
    fn parse_number_rejects_objects() {
        assert!(parse_number("change24h", &json!({ "value": 1 })).is_err());
    }
}
