//! Price fetching from the configured upstream provider.

use chrono::{DateTime, Utc};
use serde_json::Value;
use serenity::async_trait;

use crate::{
    data::price::{lookup, parse_number, PriceProvider},
    error::fetch::FetchError,
    model::price::PriceSample,
};

/// Source of price samples polled once per scheduler tick.
///
/// Implemented by `PriceFetcher`; the scheduler only depends on this trait.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetches the latest price sample. Never retries.
    async fn fetch(&self) -> Result<PriceSample, FetchError>;
}

/// Fetches prices from one upstream provider over HTTP.
pub struct PriceFetcher {
    http_client: reqwest::Client,
    provider: Box<dyn PriceProvider>,
}

impl PriceFetcher {
    /// Creates a new PriceFetcher.
    ///
    /// # Arguments
    /// - `http_client` - Shared reqwest client (carries the request timeout)
    /// - `provider` - Upstream provider adapter
    pub fn new(http_client: reqwest::Client, provider: Box<dyn PriceProvider>) -> Self {
        Self {
            http_client,
            provider,
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }
}

#[async_trait]
impl PriceSource for PriceFetcher {
    async fn fetch(&self) -> Result<PriceSample, FetchError> {
        let response = self
            .provider
            .request(&self.http_client)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        tracing::debug!("{} response: {} - {}", self.provider.name(), status, body);

        parse_price_response(self.provider.as_ref(), status, &body, Utc::now())
    }
}

fn transport_error(err: reqwest::Error) -> FetchError {
    FetchError::Transport {
        status: err.status().map(|s| s.as_u16()),
        body: err.to_string(),
    }
}

/// Parses a raw provider response into a price sample.
///
/// # Arguments
/// - `provider` - Provider whose key paths describe the envelope
/// - `status` - HTTP status code of the response
/// - `body` - Raw response body
/// - `fetched_at` - Timestamp recorded on the sample
///
/// # Returns
/// - `Ok(PriceSample)` - Price found; change is `None` if the provider omitted it
/// - `Err(FetchError::Transport)` - Non-success status or body is not JSON
/// - `Err(FetchError::MissingField)` - No price at the provider's price path
/// - `Err(FetchError::MalformedValue)` - Price or change is not a usable number,
///   or the price is negative
pub fn parse_price_response(
    provider: &dyn PriceProvider,
    status: u16,
    body: &str,
    fetched_at: DateTime<Utc>,
) -> Result<PriceSample, FetchError> {
    let transport = || FetchError::Transport {
        status: Some(status),
        body: body.to_string(),
    };

    if !(200..300).contains(&status) {
        return Err(transport());
    }

    let json: Value = serde_json::from_str(body).map_err(|_| transport())?;

    let price_value =
        lookup(&json, &provider.price_path()).ok_or(FetchError::MissingField("price"))?;
    let price = parse_number("price", price_value)?;
    if price < 0.0 {
        return Err(FetchError::MalformedValue {
            field: "price",
            value: price_value.to_string(),
        });
    }
    // -0.0 passes the sign check; store it as 0.0 so it never renders as "$-0"
    let price = price + 0.0;

    let change = match lookup(&json, &provider.change_path()) {
        Some(value) => Some(parse_number("change24h", value)?),
        None => {
            tracing::warn!("24h change not found in {} response", provider.name());
            None
        }
    };

    Ok(PriceSample::new(price, change, fetched_at))
}
