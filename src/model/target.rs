/// One guild the bot reconciles each tick, with the name of the role it recolors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildTarget {
    pub guild_id: u64,
    pub role_name: String,
}

impl GuildTarget {
    pub fn new(guild_id: u64, role_name: impl Into<String>) -> Self {
        Self {
            guild_id,
            role_name: role_name.into(),
        }
    }
}
