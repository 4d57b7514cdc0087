//! In-memory stand-in for a connected Discord session.
//!
//! `FakeDiscord` keeps real Serenity `Guild` objects (built with the factories
//! in `crate::serenity`) and mutates them the way Discord would when the bot
//! edits its nickname or a role color. Permission failures can be injected per
//! guild. It deliberately knows nothing about the bot's own traits; the bot
//! crate adapts it in its test modules.

use std::{
    collections::{HashMap, HashSet},
    sync::{Mutex, MutexGuard},
};

use serenity::all::{Colour, Guild, RoleId, UserId};

use crate::serenity::{create_test_guild, create_test_member, create_test_role};

/// Error message Discord returns when the bot lacks a permission.
pub const MISSING_PERMISSIONS: &str = "Missing Permissions";

#[derive(Default)]
struct FakeState {
    guilds: HashMap<u64, Guild>,
    deny_nickname: HashSet<u64>,
    deny_role_edit: HashSet<u64>,
    presence: Option<String>,
    nickname_edits: usize,
    role_edits: usize,
    presence_updates: usize,
}

/// In-memory Discord with one bot user and any number of guilds.
pub struct FakeDiscord {
    bot_user_id: u64,
    state: Mutex<FakeState>,
}

impl FakeDiscord {
    /// Creates an empty fake with the given bot user id.
    pub fn new(bot_user_id: u64) -> Self {
        Self {
            bot_user_id,
            state: Mutex::new(FakeState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().expect("fake discord state poisoned")
    }

    /// Adds a guild the bot is a member of.
    pub fn with_guild(self, guild_id: u64) -> Self {
        let mut guild = create_test_guild(guild_id, &format!("Guild {guild_id}"));
        let member = create_test_member(guild_id, self.bot_user_id, "pricebot");
        guild.members.insert(UserId::new(self.bot_user_id), member);

        self.state().guilds.insert(guild_id, guild);
        self
    }

    /// Adds a guild that is reachable but has no member entry for the bot.
    pub fn with_guild_without_bot(self, guild_id: u64) -> Self {
        let guild = create_test_guild(guild_id, &format!("Guild {guild_id}"));

        self.state().guilds.insert(guild_id, guild);
        self
    }

    /// Adds a role to an existing guild.
    ///
    /// # Panics
    /// - If the guild was not added first
    pub fn with_role(self, guild_id: u64, role_id: u64, name: &str, color: u32) -> Self {
        let role = create_test_role(guild_id, role_id, name, color);
        self.state()
            .guilds
            .get_mut(&guild_id)
            .expect("add the guild before its roles")
            .roles
            .insert(RoleId::new(role_id), role);
        self
    }

    /// Makes nickname edits in the guild fail with `MISSING_PERMISSIONS`.
    pub fn deny_nickname(self, guild_id: u64) -> Self {
        self.state().deny_nickname.insert(guild_id);
        self
    }

    /// Makes role edits in the guild fail with `MISSING_PERMISSIONS`.
    pub fn deny_role_edit(self, guild_id: u64) -> Self {
        self.state().deny_role_edit.insert(guild_id);
        self
    }

    pub fn bot_user_id(&self) -> u64 {
        self.bot_user_id
    }

    pub fn has_guild(&self, guild_id: u64) -> bool {
        self.state().guilds.contains_key(&guild_id)
    }

    pub fn is_member(&self, guild_id: u64, user_id: u64) -> bool {
        self.state()
            .guilds
            .get(&guild_id)
            .is_some_and(|guild| guild.members.contains_key(&UserId::new(user_id)))
    }

    pub fn find_role(&self, guild_id: u64, name: &str) -> Option<u64> {
        self.state().guilds.get(&guild_id).and_then(|guild| {
            guild
                .roles
                .values()
                .find(|role| role.name == name)
                .map(|role| role.id.get())
        })
    }

    /// Sets the bot's nickname, as `PATCH /guilds/{id}/members/@me` would.
    pub fn set_nickname(&self, guild_id: u64, nickname: &str) -> Result<(), &'static str> {
        let bot_user_id = UserId::new(self.bot_user_id);
        let mut state = self.state();
        if state.deny_nickname.contains(&guild_id) {
            return Err(MISSING_PERMISSIONS);
        }

        let member = state
            .guilds
            .get_mut(&guild_id)
            .and_then(|guild| guild.members.get_mut(&bot_user_id))
            .ok_or("Unknown Member")?;
        member.nick = Some(nickname.to_string());
        state.nickname_edits += 1;

        Ok(())
    }

    /// Sets a role color, as `PATCH /guilds/{id}/roles/{role}` would.
    pub fn set_role_color(&self, guild_id: u64, role_id: u64, color: u32) -> Result<(), &'static str> {
        let mut state = self.state();
        if state.deny_role_edit.contains(&guild_id) {
            return Err(MISSING_PERMISSIONS);
        }

        let role = state
            .guilds
            .get_mut(&guild_id)
            .and_then(|guild| guild.roles.get_mut(&RoleId::new(role_id)))
            .ok_or("Unknown Role")?;
        role.colour = Colour::new(color);
        state.role_edits += 1;

        Ok(())
    }

    pub fn set_presence(&self, text: &str) {
        let mut state = self.state();
        state.presence = Some(text.to_string());
        state.presence_updates += 1;
    }

    /// Current nickname of the bot in the guild.
    pub fn nickname(&self, guild_id: u64) -> Option<String> {
        self.state()
            .guilds
            .get(&guild_id)
            .and_then(|guild| guild.members.get(&UserId::new(self.bot_user_id)))
            .and_then(|member| member.nick.clone())
    }

    /// Current color of a role.
    pub fn role_color(&self, guild_id: u64, role_id: u64) -> Option<u32> {
        self.state()
            .guilds
            .get(&guild_id)
            .and_then(|guild| guild.roles.get(&RoleId::new(role_id)))
            .map(|role| role.colour.0)
    }

    pub fn presence(&self) -> Option<String> {
        self.state().presence.clone()
    }

    pub fn nickname_edits(&self) -> usize {
        self.state().nickname_edits
    }

    pub fn role_edits(&self) -> usize {
        self.state().role_edits
    }

    pub fn presence_updates(&self) -> usize {
        self.state().presence_updates
    }
}
