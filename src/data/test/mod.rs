//! `GuildPlatform` adapter for the in-memory `FakeDiscord` from `test_utils`.

use serenity::async_trait;
use test_utils::discord::FakeDiscord;

use crate::{data::platform::GuildPlatform, error::AppError};

fn rejected(message: &'static str) -> AppError {
    serenity::Error::Other(message).into()
}

#[async_trait]
impl GuildPlatform for FakeDiscord {
    fn current_user_id(&self) -> u64 {
        self.bot_user_id()
    }

    fn has_guild(&self, guild_id: u64) -> bool {
        FakeDiscord::has_guild(self, guild_id)
    }

    async fn is_member(&self, guild_id: u64, user_id: u64) -> Result<bool, AppError> {
        Ok(FakeDiscord::is_member(self, guild_id, user_id))
    }

    async fn find_role_by_name(&self, guild_id: u64, name: &str) -> Result<Option<u64>, AppError> {
        Ok(self.find_role(guild_id, name))
    }

    async fn set_nickname(&self, guild_id: u64, nickname: &str) -> Result<(), AppError> {
        FakeDiscord::set_nickname(self, guild_id, nickname).map_err(rejected)
    }

    async fn set_role_color(
        &self,
        guild_id: u64,
        role_id: u64,
        color: u32,
    ) -> Result<(), AppError> {
        FakeDiscord::set_role_color(self, guild_id, role_id, color).map_err(rejected)
    }

    fn set_presence(&self, text: &str) {
        FakeDiscord::set_presence(self, text)
    }
}
