use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use tokio::runtime::Runtime;

use super::messages::{JobRequest, JobResult};

use crate::config::DF;
use crate::data::{QuoteStore, fetch_quotes};

/// Spawns the long-lived fetch thread. It owns its own tokio runtime so the
/// simulated latency never blocks the UI. The thread exits when the job
/// channel closes, which is how teardown cancels the refresh loop; a job
/// already in flight completes and its result goes unread.
pub fn spawn_worker_thread(
    store: QuoteStore,
    latency_ms: u64,
    rx: Receiver<JobRequest>,
    tx: Sender<JobResult>,
) {
    thread::spawn(move || {
        let rt = Runtime::new().expect("Failed to create runtime");

        if DF.log_worker {
            log::info!("fetch worker up (latency {}ms)", latency_ms);
        }

        while let Ok(req) = rx.recv() {
            match req {
                JobRequest::Refresh { symbols, intent } => {
                    let outcome = rt.block_on(fetch_quotes(&store, &symbols, latency_ms));
                    if tx.send(JobResult::Refreshed { outcome, intent }).is_err() {
                        // UI side dropped its receiver.
                        break;
                    }
                }
            }
        }

        if DF.log_worker {
            log::info!("fetch worker shutting down");
        }
    });
}
