use std::time::Duration;

use anyhow::Result;

use crate::data::QuoteStore;
use crate::models::DisplayedQuote;
use crate::utils::clock_stamp_now;

/// The product of one refresh: resolved quotes plus the single stamp they
/// all share.
#[derive(Debug, Clone)]
pub struct RefreshBatch {
    pub quotes: Vec<DisplayedQuote>,
    pub stamp: String,
}

/// Resolve a symbol batch against the store after the simulated latency.
///
/// Input order is preserved; symbols without a record are dropped, never
/// reported. Every entry carries the same stamp.
pub async fn fetch_quotes(
    store: &QuoteStore,
    symbols: &[String],
    latency_ms: u64,
) -> Result<RefreshBatch> {
    tokio::time::sleep(Duration::from_millis(latency_ms)).await;

    let stamp = clock_stamp_now();
    let quotes = symbols
        .iter()
        .filter_map(|symbol| store.lookup(symbol))
        .map(|record| record.stamped(&stamp))
        .collect();

    Ok(RefreshBatch { quotes, stamp })
}
