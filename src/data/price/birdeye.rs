//! Birdeye `defi/price` adapter.

use super::PriceProvider;

const BIRDEYE_PRICE_URL: &str = "https://public-api.birdeye.so/defi/price";

/// Price provider backed by Birdeye's public API.
///
/// Response envelope: `{ "data": { "value": <price>, "priceChange24h": <pct> }, "success": true }`
pub struct BirdeyeProvider {
    api_key: String,
    token_address: String,
    chain: String,
}

impl BirdeyeProvider {
    /// # Arguments
    /// - `api_key` - Birdeye API key sent as `X-API-KEY`
    /// - `token_address` - Token mint address to price
    /// - `chain` - Chain selector sent as `x-chain` (e.g. `solana`)
    pub fn new(api_key: String, token_address: String, chain: String) -> Self {
        Self {
            api_key,
            token_address,
            chain,
        }
    }
}

impl PriceProvider for BirdeyeProvider {
    fn name(&self) -> &str {
        "Birdeye"
    }

    fn request(&self, client: &reqwest::Client) -> reqwest::RequestBuilder {
        client
            .get(BIRDEYE_PRICE_URL)
            .query(&[
                ("address", self.token_address.as_str()),
                ("ui_amount_mode", "raw"),
            ])
            .header("accept", "application/json")
            .header("x-chain", &self.chain)
            .header("X-API-KEY", &self.api_key)
    }

    fn price_path(&self) -> Vec<&str> {
        vec!["data", "value"]
    }

    fn change_path(&self) -> Vec<&str> {
        vec!["data", "priceChange24h"]
    }
}
