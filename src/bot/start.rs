use serenity::all::{Client, Context, GatewayIntents};
use tokio::sync::watch;

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord bot client without connecting it.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
///
/// # Returns
/// - `Ok((Client, Receiver))` - The client, and a receiver that carries the
///   bot's `Context` once its cache is ready
/// - `Err(AppError::DiscordErr)` - Client construction failed (e.g. malformed token)
pub async fn init_bot(
    config: &Config,
) -> Result<(Client, watch::Receiver<Option<Context>>), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let (ready_tx, ready_rx) = watch::channel(None);

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler::new(ready_tx))
        .await?;

    Ok((client, ready_rx))
}

/// Connects the bot to Discord and runs it until its shards shut down.
///
/// Should be called from within a tokio::spawn task since it will block until
/// the bot shuts down.
///
/// # Returns
/// - `Ok(())` - The shards were shut down
/// - `Err(AppError::DiscordErr)` - Login or gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
