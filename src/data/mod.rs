//! External data access.
//!
//! This layer wraps the two outside systems the bot talks to: the upstream price
//! APIs (`price`) and the Discord session (`platform`, `discord`). Services only
//! depend on the traits declared here, so tests can swap in fakes.

pub mod discord;
pub mod platform;
pub mod price;

#[cfg(test)]
pub mod test;
