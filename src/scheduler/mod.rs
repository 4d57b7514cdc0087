//! Background jobs.
//!
//! - `price_sync` - Fetches the token price and reconciles every target guild
//!   on a fixed interval

pub mod price_sync;
