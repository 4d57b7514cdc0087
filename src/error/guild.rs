use thiserror::Error;

/// Failure while reconciling a single guild target.
///
/// Target-level: each variant aborts only the affected step (or the remaining
/// steps) for one guild. Other targets in the same tick are unaffected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GuildError {
    /// The guild is not reachable by the bot session.
    #[error("Guild {guild_id} not found")]
    GuildNotFound { guild_id: u64 },

    /// The bot user has no member entry in the guild.
    #[error("Bot member not found in guild {guild_id}")]
    SelfNotMember { guild_id: u64 },

    /// Discord rejected the nickname change (missing permissions, etc.).
    #[error("Failed to update nickname in guild {guild_id}: {reason}")]
    NicknameUpdateFailed { guild_id: u64, reason: String },

    /// No role with the configured name exists in the guild.
    #[error("Role '{role_name}' not found in guild {guild_id}")]
    RoleNotFound { guild_id: u64, role_name: String },

    /// Discord rejected the role color change.
    #[error("Failed to update color of role '{role_name}' in guild {guild_id}: {reason}")]
    RoleUpdateFailed {
        guild_id: u64,
        role_name: String,
        reason: String,
    },
}

impl GuildError {
    /// Whether the error is expected configuration drift rather than a failure.
    ///
    /// A missing color role only means the guild opted out of recoloring, so it
    /// is logged at warning level.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::RoleNotFound { .. })
    }
}
