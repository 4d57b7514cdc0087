//! Price API response body fixtures.

use serde_json::{json, Value};

/// Default test coin id for CoinGecko payloads.
pub const DEFAULT_COIN_ID: &str = "solana";

/// Creates a Birdeye `defi/price` response body.
///
/// The envelope carries the extra fields Birdeye actually sends (`updateUnixTime`,
/// `updateHumanTime`, `liquidity`) so parsers are exercised against unknown keys.
/// When `change_24h` is `None` the `priceChange24h` key is omitted entirely.
///
/// # Arguments
/// - `price` - Value for `data.value`
/// - `change_24h` - Value for `data.priceChange24h`
///
/// # Returns
/// - `String` - JSON response body
pub fn birdeye_body(price: f64, change_24h: Option<f64>) -> String {
    let mut data = json!({
        "value": price,
        "updateUnixTime": 1_751_900_000,
        "updateHumanTime": "2025-07-07T14:53:20",
        "liquidity": 8_123_456_789.12,
    });
    if let Some(change) = change_24h {
        data["priceChange24h"] = json!(change);
    }

    birdeye_envelope(data)
}

/// Wraps an arbitrary `data` value in Birdeye's `{ data, success }` envelope.
pub fn birdeye_envelope(data: Value) -> String {
    json!({ "data": data, "success": true }).to_string()
}

/// Creates a Birdeye error body as returned for an invalid API key.
pub fn birdeye_unauthorized_body() -> String {
    json!({ "success": false, "message": "Unauthorized" }).to_string()
}

/// Creates a CoinGecko `simple/price` response body for `DEFAULT_COIN_ID`.
///
/// # Arguments
/// - `price` - Value for `solana.usd`
/// - `change_24h` - Value for `solana.usd_24h_change`, omitted when `None`
pub fn coingecko_body(price: f64, change_24h: Option<f64>) -> String {
    let mut coin = json!({ "usd": price });
    if let Some(change) = change_24h {
        coin["usd_24h_change"] = json!(change);
    }

    json!({ DEFAULT_COIN_ID: coin }).to_string()
}
