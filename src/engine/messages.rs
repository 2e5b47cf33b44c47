use anyhow::Result;
use strum_macros::Display;

use crate::data::RefreshBatch;

/// Why a refresh fired. Logged for diagnostics; results apply in arrival
/// order regardless of intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RefreshIntent {
    Startup,
    Deadline,
    Manual,
    WatchlistChange,
}

/// UI -> worker.
#[derive(Debug)]
pub enum JobRequest {
    Refresh {
        symbols: Vec<String>,
        intent: RefreshIntent,
    },
}

/// Worker -> UI.
#[derive(Debug)]
pub enum JobResult {
    Refreshed {
        outcome: Result<RefreshBatch>,
        intent: RefreshIntent,
    },
}
