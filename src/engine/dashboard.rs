use serde::{Deserialize, Serialize};

use crate::config::DF;
use crate::data::{QuoteStore, RefreshBatch};
use crate::models::{DisplayedQuote, Watchlist};
use crate::utils::clock_stamp_now;

/// Banner text for a failed refresh. The displayed list is kept, so the
/// banner is the only signal the data is stale.
pub const FETCH_FAILED_MSG: &str = "Failed to fetch quote data. Please try again.";

fn unknown_symbol_msg(symbol: &str) -> String {
    format!("Stock symbol \"{symbol}\" not found")
}

/// Everything the panels render. Mutated only through [`DashboardAction`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardState {
    pub quotes: Vec<DisplayedQuote>,
    pub search_query: String,
    pub selected: Option<DisplayedQuote>,
    pub loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<String>,
    pub watchlist: Watchlist,
}

#[derive(Debug, Clone)]
pub enum DashboardAction {
    /// Submit the current search query (Enter or the search button).
    SubmitSearch,
    DismissError,
    CloseDetail,
    AddToWatchlist(String),
    RemoveFromWatchlist(String),
    RefreshStarted,
    /// Err carries the banner text, already user-facing.
    RefreshCompleted(Result<RefreshBatch, String>),
}

/// What the caller must do after an action; the reducer itself never talks
/// to the scheduler or the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Membership changed: restart the period and refresh now.
    WatchlistChanged,
}

impl DashboardState {
    pub fn new(watchlist: Watchlist) -> Self {
        Self {
            watchlist,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, action: DashboardAction, store: &QuoteStore) -> Effect {
        match action {
            DashboardAction::SubmitSearch => {
                self.submit_search(store);
                Effect::None
            }
            DashboardAction::DismissError => {
                self.error = None;
                Effect::None
            }
            DashboardAction::CloseDetail => {
                self.selected = None;
                Effect::None
            }
            DashboardAction::AddToWatchlist(symbol) => {
                if self.watchlist.add(&symbol) {
                    if DF.log_watchlist {
                        log::info!("watchlist: added {}", symbol.to_uppercase());
                    }
                    Effect::WatchlistChanged
                } else {
                    Effect::None
                }
            }
            DashboardAction::RemoveFromWatchlist(symbol) => {
                if self.watchlist.remove(&symbol) {
                    if DF.log_watchlist {
                        log::info!("watchlist: removed {}", symbol.to_uppercase());
                    }
                    Effect::WatchlistChanged
                } else {
                    Effect::None
                }
            }
            DashboardAction::RefreshStarted => {
                self.loading = true;
                self.error = None;
                Effect::None
            }
            DashboardAction::RefreshCompleted(Ok(batch)) => {
                self.loading = false;
                self.quotes = batch.quotes;
                self.last_updated = Some(batch.stamp);
                Effect::None
            }
            DashboardAction::RefreshCompleted(Err(message)) => {
                // Prior quotes stay on screen; the banner marks them stale.
                self.loading = false;
                self.error = Some(message);
                Effect::None
            }
        }
    }

    fn submit_search(&mut self, store: &QuoteStore) {
        let query = self.search_query.trim();
        if query.is_empty() {
            return;
        }

        let symbol = query.to_uppercase();
        match store.lookup(&symbol) {
            Some(record) => {
                if DF.log_search {
                    log::info!("search hit: {}", symbol);
                }
                self.selected = Some(record.stamped(&clock_stamp_now()));
                self.search_query.clear();
            }
            None => {
                if DF.log_search {
                    log::info!("search miss: {}", symbol);
                }
                // Query and any prior selection stay put.
                self.error = Some(unknown_symbol_msg(&symbol));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> (DashboardState, QuoteStore) {
        let watchlist = Watchlist::new(["AAPL", "GOOGL"]);
        (DashboardState::new(watchlist), QuoteStore::from_market())
    }

    fn batch_for(store: &QuoteStore, symbols: &[&str], stamp: &str) -> RefreshBatch {
        RefreshBatch {
            quotes: symbols
                .iter()
                .filter_map(|s| store.lookup(s))
                .map(|r| r.stamped(stamp))
                .collect(),
            stamp: stamp.to_string(),
        }
    }

    #[test]
    fn search_is_case_insensitive() {
        let (mut lower, store) = state();
        lower.search_query = "aapl".to_string();
        lower.apply(DashboardAction::SubmitSearch, &store);

        let (mut upper, _) = state();
        upper.search_query = "AAPL".to_string();
        upper.apply(DashboardAction::SubmitSearch, &store);

        let lower_hit = lower.selected.expect("lowercase query resolves");
        let upper_hit = upper.selected.expect("uppercase query resolves");
        assert_eq!(lower_hit.quote, upper_hit.quote);
        assert_eq!(lower_hit.quote.symbol, "AAPL");
    }

    #[test]
    fn search_hit_clears_query() {
        let (mut s, store) = state();
        s.search_query = "msft".to_string();
        s.apply(DashboardAction::SubmitSearch, &store);
        assert!(s.search_query.is_empty());
        assert!(s.error.is_none());
    }

    #[test]
    fn search_miss_names_symbol_and_keeps_selection() {
        let (mut s, store) = state();
        s.search_query = "aapl".to_string();
        s.apply(DashboardAction::SubmitSearch, &store);
        let prior = s.selected.clone().expect("AAPL resolves");

        s.search_query = "zzzz".to_string();
        s.apply(DashboardAction::SubmitSearch, &store);

        let error = s.error.expect("miss sets the banner");
        assert!(error.contains("ZZZZ"), "banner names the symbol: {error}");
        assert_eq!(s.selected, Some(prior));
        assert_eq!(s.search_query, "zzzz");
    }

    #[test]
    fn blank_search_is_noop() {
        let (mut s, store) = state();
        s.search_query = "   ".to_string();
        s.apply(DashboardAction::SubmitSearch, &store);
        assert!(s.error.is_none());
        assert!(s.selected.is_none());
    }

    #[test]
    fn add_duplicate_is_not_a_watchlist_change() {
        let (mut s, store) = state();
        let effect = s.apply(DashboardAction::AddToWatchlist("AAPL".into()), &store);
        assert_eq!(effect, Effect::None);
        assert_eq!(s.watchlist.symbols(), ["AAPL", "GOOGL"]);
    }

    #[test]
    fn add_new_symbol_reports_change() {
        let (mut s, store) = state();
        let effect = s.apply(DashboardAction::AddToWatchlist("TSLA".into()), &store);
        assert_eq!(effect, Effect::WatchlistChanged);
        assert_eq!(s.watchlist.symbols(), ["AAPL", "GOOGL", "TSLA"]);
    }

    #[test]
    fn remove_absent_symbol_is_noop() {
        let (mut s, store) = state();
        let effect = s.apply(DashboardAction::RemoveFromWatchlist("ZZZZ".into()), &store);
        assert_eq!(effect, Effect::None);
        assert_eq!(s.watchlist.len(), 2);
    }

    #[test]
    fn refresh_started_sets_loading_and_clears_error() {
        let (mut s, store) = state();
        s.error = Some("old banner".into());
        s.apply(DashboardAction::RefreshStarted, &store);
        assert!(s.loading);
        assert!(s.error.is_none());
    }

    #[test]
    fn successful_refresh_replaces_quotes_and_stamp() {
        let (mut s, store) = state();
        s.apply(DashboardAction::RefreshStarted, &store);
        let batch = batch_for(&store, &["AAPL", "GOOGL"], "10:00:00");
        s.apply(DashboardAction::RefreshCompleted(Ok(batch)), &store);

        assert!(!s.loading);
        assert_eq!(s.last_updated.as_deref(), Some("10:00:00"));
        let shown: Vec<&str> = s.quotes.iter().map(|q| q.quote.symbol.as_str()).collect();
        assert_eq!(shown, ["AAPL", "GOOGL"]);
        assert_eq!(s.quotes[0].quote.price, 178.25);
        assert_eq!(s.quotes[1].quote.price, 138.45);
        assert!(s.quotes.iter().all(|q| q.last_updated == "10:00:00"));
    }

    #[test]
    fn failed_refresh_keeps_prior_quotes() {
        let (mut s, store) = state();
        let batch = batch_for(&store, &["AAPL"], "10:00:00");
        s.apply(DashboardAction::RefreshCompleted(Ok(batch)), &store);

        s.apply(DashboardAction::RefreshStarted, &store);
        s.apply(
            DashboardAction::RefreshCompleted(Err(FETCH_FAILED_MSG.to_string())),
            &store,
        );

        assert!(!s.loading);
        assert_eq!(s.error.as_deref(), Some(FETCH_FAILED_MSG));
        assert_eq!(s.quotes.len(), 1, "stale quotes stay visible");
        assert_eq!(s.last_updated.as_deref(), Some("10:00:00"));
    }

    #[test]
    fn dismiss_error_clears_banner_only() {
        let (mut s, store) = state();
        s.error = Some("banner".into());
        s.selected = store.lookup("AAPL").map(|r| r.stamped("10:00:00"));
        s.apply(DashboardAction::DismissError, &store);
        assert!(s.error.is_none());
        assert!(s.selected.is_some());
    }

    #[test]
    fn close_detail_clears_selection() {
        let (mut s, store) = state();
        s.selected = store.lookup("AAPL").map(|r| r.stamped("10:00:00"));
        s.apply(DashboardAction::CloseDetail, &store);
        assert!(s.selected.is_none());
    }
}
