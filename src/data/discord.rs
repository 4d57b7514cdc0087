//! Serenity-backed implementation of `GuildPlatform`.
//!
//! Guild and role lookups are served from the gateway cache populated by the
//! `GUILDS` intent. Membership falls back to the HTTP API when the member list
//! is not cached, and every mutation goes through the HTTP API.

use reqwest::StatusCode;
use serenity::{
    all::{ActivityData, Context, EditRole, GuildId, RoleId, UserId},
    async_trait,
};

use crate::{data::platform::GuildPlatform, error::AppError};

/// `GuildPlatform` over a connected serenity client context.
#[derive(Clone)]
pub struct SerenityPlatform {
    ctx: Context,
}

impl SerenityPlatform {
    /// Wraps the context handed out by the ready event.
    ///
    /// # Arguments
    /// - `ctx` - Serenity context with cache, HTTP client and shard messenger
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl GuildPlatform for SerenityPlatform {
    fn current_user_id(&self) -> u64 {
        self.ctx.cache.current_user().id.get()
    }

    fn has_guild(&self, guild_id: u64) -> bool {
        self.ctx.cache.guild(GuildId::new(guild_id)).is_some()
    }

    async fn is_member(&self, guild_id: u64, user_id: u64) -> Result<bool, AppError> {
        let guild_id = GuildId::new(guild_id);
        let user_id = UserId::new(user_id);

        // Cache guard must be released before awaiting the HTTP fallback
        let cached = self
            .ctx
            .cache
            .guild(guild_id)
            .is_some_and(|guild| guild.members.contains_key(&user_id));
        if cached {
            return Ok(true);
        }

        match self.ctx.http.get_member(guild_id, user_id).await {
            Ok(_) => Ok(true),
            Err(serenity::Error::Http(e)) if e.status_code() == Some(StatusCode::NOT_FOUND) => {
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_role_by_name(&self, guild_id: u64, name: &str) -> Result<Option<u64>, AppError> {
        let guild_id = GuildId::new(guild_id);

        let cached = self.ctx.cache.guild(guild_id).map(|guild| {
            guild
                .roles
                .values()
                .find(|role| role.name == name)
                .map(|role| role.id.get())
        });
        if let Some(role_id) = cached {
            return Ok(role_id);
        }

        let roles = self.ctx.http.get_guild_roles(guild_id).await?;

        Ok(roles
            .iter()
            .find(|role| role.name == name)
            .map(|role| role.id.get()))
    }

    async fn set_nickname(&self, guild_id: u64, nickname: &str) -> Result<(), AppError> {
        GuildId::new(guild_id)
            .edit_nickname(&self.ctx, Some(nickname))
            .await?;

        Ok(())
    }

    async fn set_role_color(
        &self,
        guild_id: u64,
        role_id: u64,
        color: u32,
    ) -> Result<(), AppError> {
        GuildId::new(guild_id)
            .edit_role(&self.ctx, RoleId::new(role_id), EditRole::new().colour(color))
            .await?;

        Ok(())
    }

    fn set_presence(&self, text: &str) {
        self.ctx.set_activity(Some(ActivityData::watching(text)));
    }
}
