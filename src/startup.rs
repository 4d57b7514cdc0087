use std::time::Duration;

use tokio::task::JoinHandle;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::ProviderConfig,
    data::price::{BirdeyeProvider, CoinGeckoProvider, PriceProvider},
    error::AppError,
};

/// Upper bound for a single price request, so a hung upstream cannot stall a tick.
const PRICE_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Initializes the global tracing subscriber.
///
/// Honors `RUST_LOG` when set, otherwise logs this crate at `info` and
/// dependencies (serenity, reqwest) at `warn`.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pricebot=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Builds the HTTP client used for price requests.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client with request timeout and user agent set
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(PRICE_REQUEST_TIMEOUT)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Creates the price provider adapter selected in configuration.
pub fn setup_price_provider(config: &ProviderConfig) -> Box<dyn PriceProvider> {
    match config {
        ProviderConfig::Birdeye {
            api_key,
            token_address,
            chain,
        } => Box::new(BirdeyeProvider::new(
            api_key.clone(),
            token_address.clone(),
            chain.clone(),
        )),
        ProviderConfig::CoinGecko { coin_id, api_key } => {
            Box::new(CoinGeckoProvider::new(coin_id.clone(), api_key.clone()))
        }
    }
}

/// Resolves once the process receives Ctrl+C.
///
/// If the signal handler cannot be installed the error is logged and this
/// future never resolves, so the bot keeps running.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received, gracefully stopping");
}

/// Waits for the bot task and merges its result with the scheduler's.
///
/// A bot failure (e.g. rejected token) takes precedence, since it is what
/// stopped the scheduler.
///
/// # Returns
/// - `Ok(())` - Both the bot and the scheduler stopped cleanly
/// - `Err(AppError)` - The bot failed, or else the scheduler's error
/// - `Err(AppError::InternalError)` - The bot task panicked
pub async fn join_bot_task(
    bot_task: JoinHandle<Result<(), AppError>>,
    scheduler_result: Result<(), AppError>,
) -> Result<(), AppError> {
    match bot_task.await {
        Ok(bot_result) => bot_result?,
        Err(e) => {
            return Err(AppError::InternalError(format!(
                "Discord bot task failed: {}",
                e
            )))
        }
    }

    scheduler_result
}
