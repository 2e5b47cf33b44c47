mod fetch;
mod store;

pub use {
    fetch::{RefreshBatch, fetch_quotes},
    store::QuoteStore,
};
