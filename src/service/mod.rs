//! Business logic of the price sync loop.
//!
//! - `price` - Fetches a `PriceSample` from the configured provider
//! - `display` - Derives nickname, sentiment and presence text from a sample
//! - `reconcile` - Applies the derived display state to every guild target

pub mod display;
pub mod price;
pub mod reconcile;

#[cfg(test)]
mod test;
