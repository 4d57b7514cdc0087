//! Domain models for the price sync loop.
//!
//! These are plain data types passed between the price fetcher, the guild
//! reconciler, and the scheduler. None of them is persisted.

pub mod display;
pub mod price;
pub mod report;
pub mod target;
