//! CoinGecko `simple/price` adapter.

use super::PriceProvider;

const COINGECKO_PRICE_URL: &str = "https://api.coingecko.com/api/v3/simple/price";

/// Price provider backed by CoinGecko's simple price endpoint.
///
/// Response envelope: `{ "<coin id>": { "usd": <price>, "usd_24h_change": <pct> } }`
pub struct CoinGeckoProvider {
    coin_id: String,
    api_key: Option<String>,
}

impl CoinGeckoProvider {
    /// # Arguments
    /// - `coin_id` - CoinGecko coin id (e.g. `solana`)
    /// - `api_key` - Optional demo API key sent as `x-cg-demo-api-key`
    pub fn new(coin_id: String, api_key: Option<String>) -> Self {
        Self { coin_id, api_key }
    }
}

impl PriceProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        "CoinGecko"
    }

    fn request(&self, client: &reqwest::Client) -> reqwest::RequestBuilder {
        let request = client
            .get(COINGECKO_PRICE_URL)
            .query(&[
                ("ids", self.coin_id.as_str()),
                ("vs_currencies", "usd"),
                ("include_24hr_change", "true"),
            ])
            .header("accept", "application/json");

        match &self.api_key {
            Some(key) => request.header("x-cg-demo-api-key", key),
            None => request,
        }
    }

    fn price_path(&self) -> Vec<&str> {
        vec![self.coin_id.as_str(), "usd"]
    }

    fn change_path(&self) -> Vec<&str> {
        vec![self.coin_id.as_str(), "usd_24h_change"]
    }
}
