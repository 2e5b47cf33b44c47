use std::sync::mpsc::{self, Receiver, Sender};

use super::dashboard::{DashboardAction, DashboardState, Effect, FETCH_FAILED_MSG};
use super::messages::{JobRequest, JobResult, RefreshIntent};
use super::scheduler::RefreshScheduler;
use super::worker::spawn_worker_thread;

use crate::config::DF;
use crate::data::QuoteStore;
use crate::models::Watchlist;

/// Owns the view state, the scheduler, and the channels to the fetch
/// worker. The UI thread drives it: `dispatch` for user actions, `update`
/// once per frame to drain results and fire the deadline.
pub struct QuoteEngine {
    store: QuoteStore,
    pub state: DashboardState,
    scheduler: RefreshScheduler,
    job_tx: Sender<JobRequest>,
    result_rx: Receiver<JobResult>,
}

impl QuoteEngine {
    pub fn new(watchlist: Watchlist, period_secs: u64, latency_ms: u64, now_ms: i64) -> Self {
        let store = QuoteStore::from_market();

        let (job_tx, job_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        spawn_worker_thread(store.clone(), latency_ms, job_rx, result_tx);

        let mut engine = Self {
            store,
            state: DashboardState::new(watchlist),
            scheduler: RefreshScheduler::new(period_secs),
            job_tx,
            result_rx,
        };
        engine.request_refresh(RefreshIntent::Startup, now_ms);
        engine
    }

    /// Frame tick: apply finished jobs in arrival order (last write wins),
    /// then fire the deadline if it has passed.
    pub fn update(&mut self, now_ms: i64) {
        while let Ok(JobResult::Refreshed { outcome, intent }) = self.result_rx.try_recv() {
            self.scheduler.on_refresh_completed();
            let result = outcome.map_err(|err| {
                log::error!("refresh ({intent}) failed: {err:#}");
                FETCH_FAILED_MSG.to_string()
            });
            if DF.log_refresh {
                log::info!(
                    "refresh ({intent}) completed: {}",
                    if result.is_ok() { "ok" } else { "error" }
                );
            }
            self.state
                .apply(DashboardAction::RefreshCompleted(result), &self.store);
        }

        if self.scheduler.is_due(now_ms) {
            self.request_refresh(RefreshIntent::Deadline, now_ms);
        }
    }

    pub fn dispatch(&mut self, action: DashboardAction, now_ms: i64) {
        if self.state.apply(action, &self.store) == Effect::WatchlistChanged {
            self.request_refresh(RefreshIntent::WatchlistChange, now_ms);
        }
    }

    pub fn request_refresh(&mut self, intent: RefreshIntent, now_ms: i64) {
        let symbols = self.state.watchlist.symbols().to_vec();
        if DF.log_refresh {
            log::info!("refresh ({intent}) requested for {} symbols", symbols.len());
        }

        let job = JobRequest::Refresh { symbols, intent };
        if self.job_tx.send(job).is_ok() {
            self.scheduler.on_refresh_started(now_ms);
            self.state.apply(DashboardAction::RefreshStarted, &self.store);
        } else {
            // Worker is gone; surface it like any other fetch failure.
            log::error!("fetch worker unavailable, dropping refresh ({intent})");
            self.state.apply(
                DashboardAction::RefreshCompleted(Err(FETCH_FAILED_MSG.to_string())),
                &self.store,
            );
        }
    }

    /// For repaint scheduling: how long until the deadline fires.
    pub fn millis_until_due(&self, now_ms: i64) -> Option<i64> {
        self.scheduler.millis_until_due(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    const PERIOD_SECS: u64 = 30;

    fn engine_with(watchlist: &[&str]) -> QuoteEngine {
        // Zero latency keeps these tests fast; the worker thread is real.
        QuoteEngine::new(Watchlist::new(watchlist.to_vec()), PERIOD_SECS, 0, 0)
    }

    fn drain_until_idle(engine: &mut QuoteEngine) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while engine.state.loading {
            assert!(Instant::now() < deadline, "refresh never completed");
            engine.update(0);
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn startup_refresh_populates_watchlist_quotes() {
        let mut engine = engine_with(&["AAPL", "GOOGL"]);
        assert!(engine.state.loading, "startup fires a refresh immediately");

        drain_until_idle(&mut engine);

        let shown: Vec<&str> = engine
            .state
            .quotes
            .iter()
            .map(|q| q.quote.symbol.as_str())
            .collect();
        assert_eq!(shown, ["AAPL", "GOOGL"]);
        let stamp = engine.state.last_updated.clone().expect("stamp set");
        assert!(engine.state.quotes.iter().all(|q| q.last_updated == stamp));
    }

    #[test]
    fn unknown_watchlist_symbols_are_dropped() {
        let mut engine = engine_with(&["MSFT", "ZZZZ", "TSLA"]);
        drain_until_idle(&mut engine);

        let shown: Vec<&str> = engine
            .state
            .quotes
            .iter()
            .map(|q| q.quote.symbol.as_str())
            .collect();
        assert_eq!(shown, ["MSFT", "TSLA"]);
        assert!(engine.state.error.is_none(), "misses are silent");
    }

    #[test]
    fn adding_symbol_triggers_refresh() {
        let mut engine = engine_with(&["AAPL"]);
        drain_until_idle(&mut engine);

        engine.dispatch(DashboardAction::AddToWatchlist("tsla".into()), 1_000);
        assert!(engine.state.loading, "membership change refreshes");
        drain_until_idle(&mut engine);

        let shown: Vec<&str> = engine
            .state
            .quotes
            .iter()
            .map(|q| q.quote.symbol.as_str())
            .collect();
        assert_eq!(shown, ["AAPL", "TSLA"]);
    }

    #[test]
    fn duplicate_add_does_not_refresh() {
        let mut engine = engine_with(&["AAPL"]);
        drain_until_idle(&mut engine);

        engine.dispatch(DashboardAction::AddToWatchlist("AAPL".into()), 1_000);
        assert!(!engine.state.loading);
    }

    #[test]
    fn deadline_fires_after_period() {
        let mut engine = engine_with(&["AAPL"]);
        drain_until_idle(&mut engine);

        let period_ms = PERIOD_SECS as i64 * 1000;
        engine.update(period_ms - 1);
        assert!(!engine.state.loading);
        engine.update(period_ms);
        assert!(engine.state.loading, "deadline refresh fired");
        drain_until_idle(&mut engine);
    }

    #[test]
    fn manual_refresh_restamps_quotes() {
        let mut engine = engine_with(&["AAPL"]);
        drain_until_idle(&mut engine);

        engine.request_refresh(RefreshIntent::Manual, 5_000);
        assert!(engine.state.loading);
        drain_until_idle(&mut engine);
        assert_eq!(engine.state.quotes.len(), 1);
    }
}
