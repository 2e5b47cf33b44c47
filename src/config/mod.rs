//! Configuration module for the quote-deck application.

mod debug;
mod market;
mod refresh;

// Re-export commonly used items
pub use debug::DF;
pub use market::{MARKET, MarketConfig, QuoteSeed};
pub use refresh::{REFRESH, RefreshConfig};
