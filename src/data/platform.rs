//! Chat platform seam used by the guild reconciler.
//!
//! The reconciler never touches serenity types directly. Everything it needs
//! from the connected Discord session goes through `GuildPlatform`, which is
//! implemented over a serenity `Context` in `data::discord` and by an in-memory
//! fake in tests.

use serenity::async_trait;

use crate::error::AppError;

/// Operations the price sync loop performs against the connected chat session.
///
/// All ids are raw Discord snowflakes.
#[async_trait]
pub trait GuildPlatform: Send + Sync {
    /// Id of the bot's own user.
    fn current_user_id(&self) -> u64;

    /// Whether the guild is reachable by the bot session.
    fn has_guild(&self, guild_id: u64) -> bool;

    /// Whether `user_id` has a member entry in the guild.
    ///
    /// # Returns
    /// - `Ok(true)` - The user is a member
    /// - `Ok(false)` - The user is definitely not a member
    /// - `Err(AppError)` - Membership could not be determined
    async fn is_member(&self, guild_id: u64, user_id: u64) -> Result<bool, AppError>;

    /// Looks up a role by exact name, returning its id.
    async fn find_role_by_name(&self, guild_id: u64, name: &str) -> Result<Option<u64>, AppError>;

    /// Sets the bot's own nickname in the guild.
    async fn set_nickname(&self, guild_id: u64, nickname: &str) -> Result<(), AppError>;

    /// Sets a role's color to the given RGB value.
    async fn set_role_color(&self, guild_id: u64, role_id: u64, color: u32)
        -> Result<(), AppError>;

    /// Sets the process-wide "Watching ..." activity.
    ///
    /// The gateway queues presence updates, so this cannot fail.
    fn set_presence(&self, text: &str);
}
