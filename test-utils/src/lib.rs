//! Pricebot Test Utils
//!
//! Provides shared testing utilities for the price bot. The bot talks to two
//! outside systems, Discord and an upstream price API, and this crate provides
//! stand-ins for both so tests never touch the network.
//!
//! # Overview
//!
//! - **serenity**: Factories for Serenity model objects (Guild, Role, Member)
//! - **discord**: `FakeDiscord`, an in-memory Discord built from those objects
//! - **fixture**: Upstream price API response bodies
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{discord::FakeDiscord, fixture};
//!
//! let discord = FakeDiscord::new(42)
//!     .with_guild(1001)
//!     .with_role(1001, 500, "PriceBotSolColor", 0);
//!
//! let body = fixture::price::birdeye_body(142.5, Some(3.2));
//! ```

pub mod discord;
pub mod fixture;
pub mod serenity;
