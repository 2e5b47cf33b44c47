use std::collections::HashMap;

use crate::config::MARKET;
use crate::models::QuoteRecord;

/// Read-only lookup table keyed by uppercase symbol.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    records: HashMap<String, QuoteRecord>,
}

impl QuoteStore {
    /// Build the store from the embedded `MARKET` table.
    pub fn from_market() -> Self {
        let records = MARKET
            .quotes
            .iter()
            .map(|seed| (seed.symbol.to_string(), QuoteRecord::from_seed(seed)))
            .collect();
        Self { records }
    }

    /// Case-insensitive lookup.
    pub fn lookup(&self, symbol: &str) -> Option<&QuoteRecord> {
        self.records.get(&symbol.trim().to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
