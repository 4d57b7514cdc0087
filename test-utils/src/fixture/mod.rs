//! Test fixtures providing upstream API payloads.
//!
//! Fixtures build the raw response bodies the price providers return, so parsing
//! can be tested against realistic envelopes without any network access.

pub mod price;
