use serde::{Deserialize, Serialize};

use crate::config::QuoteSeed;

/// One row of the embedded quote table. Immutable once seeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    /// Signed absolute change since previous close.
    pub change: f64,
    /// Signed percent change since previous close.
    pub change_percent: f64,
    pub volume: u64,
    pub market_cap: String,
}

impl QuoteRecord {
    pub(crate) fn from_seed(seed: &QuoteSeed) -> Self {
        Self {
            symbol: seed.symbol.to_string(),
            name: seed.name.to_string(),
            price: seed.price,
            change: seed.change,
            change_percent: seed.change_percent,
            volume: seed.volume,
            market_cap: seed.market_cap.to_string(),
        }
    }

    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }

    /// Derive the display form. Always fresh, never persisted.
    pub fn stamped(&self, stamp: &str) -> DisplayedQuote {
        DisplayedQuote {
            quote: self.clone(),
            last_updated: stamp.to_string(),
        }
    }
}

/// A [`QuoteRecord`] annotated with the wall-clock time it was refreshed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayedQuote {
    pub quote: QuoteRecord,
    pub last_updated: String,
}
