//! Discord bot integration.
//!
//! This module connects the bot to Discord's gateway and tells the price sync
//! scheduler when the session is usable. The bot does not react to any guild
//! events itself; it only needs a populated cache so the scheduler can resolve
//! guilds, its own member entry and roles.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and role data in the cache
//! - `GUILD_MEMBERS` - Member data for membership checks (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
