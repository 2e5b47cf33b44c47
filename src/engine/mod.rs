mod core;
mod dashboard;
mod messages;
mod scheduler;
mod worker;

pub use {
    self::core::QuoteEngine,
    dashboard::{DashboardAction, DashboardState, Effect, FETCH_FAILED_MSG},
    messages::{JobRequest, JobResult, RefreshIntent},
    scheduler::{RefreshScheduler, SchedulerPhase},
};
