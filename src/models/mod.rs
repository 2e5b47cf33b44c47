mod quote;
mod watchlist;

pub use quote::{DisplayedQuote, QuoteRecord};
pub use watchlist::Watchlist;
