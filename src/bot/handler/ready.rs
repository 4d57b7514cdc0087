//! Ready event handlers for bot initialization.
//!
//! The `ready` event fires when the bot completes the gateway handshake, but
//! guilds only arrive in the cache afterwards through `GUILD_CREATE` events.
//! The price sync scheduler therefore waits for `cache_ready`, which fires
//! once every guild from the ready payload has been cached.

use serenity::all::{ActivityData, Context, GuildId, Ready};
use tokio::sync::watch;

/// Activity shown until the first price update lands.
const STARTING_ACTIVITY: &str = "Starting...";

/// Handles the ready event when the bot connects to Discord.
///
/// Logs the bot identity and shows a placeholder activity. A bot that is in no
/// guild never receives `cache_ready`, so readiness is published here instead.
///
/// # Arguments
/// - `ready_tx` - Readiness channel consumed by the scheduler
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ready_tx: &watch::Sender<Option<Context>>, ctx: Context, ready: Ready) {
    tracing::info!("Logged in as {}", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching(STARTING_ACTIVITY)));

    if ready.guilds.is_empty() {
        tracing::warn!("Bot is not a member of any guild");
        ready_tx.send_replace(Some(ctx));
    }
}

/// Handles the cache_ready event once all guilds are cached.
///
/// # Arguments
/// - `ready_tx` - Readiness channel consumed by the scheduler
/// - `ctx` - Discord context handed to the scheduler
/// - `guilds` - Ids of the guilds now in the cache
pub async fn handle_cache_ready(
    ready_tx: &watch::Sender<Option<Context>>,
    ctx: Context,
    guilds: Vec<GuildId>,
) {
    tracing::info!("Discord cache ready with {} guild(s)", guilds.len());

    ready_tx.send_replace(Some(ctx));
}
