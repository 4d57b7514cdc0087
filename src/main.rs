mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::{
    config::Config, error::AppError, scheduler::price_sync, service::price::PriceFetcher,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let fetcher = PriceFetcher::new(http_client, startup::setup_price_provider(&config.provider));

    tracing::info!(
        "Starting price bot: {} price for {} guild(s)",
        fetcher.provider_name(),
        config.guild_ids.len()
    );

    let (bot_client, ready) = bot::start::init_bot(&config).await?;
    let shard_manager = bot_client.shard_manager.clone();

    let shutdown = CancellationToken::new();

    // Start Discord bot in a separate task; the scheduler stops if the bot does
    let bot_shutdown = shutdown.clone();
    let bot_task = tokio::spawn(async move {
        let result = bot::start::start_bot(bot_client).await;
        if let Err(e) = &result {
            tracing::error!("Discord bot error: {}", e);
        }
        bot_shutdown.cancel();
        result
    });

    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        startup::shutdown_signal().await;
        signal_shutdown.cancel();
    });

    let result = price_sync::start_scheduler(&config, ready, Arc::new(fetcher), shutdown).await;

    shard_manager.shutdown_all().await;

    startup::join_bot_task(bot_task, result).await
}
