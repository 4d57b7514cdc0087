use serenity::all::{Context, EventHandler, GuildId, Ready};
use serenity::async_trait;
use tokio::sync::watch;

pub mod ready;

/// Discord bot event handler
pub struct Handler {
    /// Publishes the context once the cache is ready
    pub ready_tx: watch::Sender<Option<Context>>,
}

impl Handler {
    pub fn new(ready_tx: watch::Sender<Option<Context>>) -> Self {
        Self { ready_tx }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.ready_tx, ctx, ready).await;
    }

    /// Called once every guild from the ready payload has been cached
    async fn cache_ready(&self, ctx: Context, guilds: Vec<GuildId>) {
        ready::handle_cache_ready(&self.ready_tx, ctx, guilds).await;
    }
}
