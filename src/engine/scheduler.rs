use strum_macros::Display;

use crate::config::DF;
use crate::utils::TimeUtils;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum SchedulerPhase {
    #[default]
    Idle,
    Refreshing,
}

/// Cancellable handle for the periodic refresh. Pure state machine over
/// caller-supplied timestamps, so the period logic is testable without a
/// clock.
///
/// The deadline restarts whenever a refresh starts, which covers the
/// "period restarts on watchlist change" rule: membership changes trigger
/// an immediate refresh. Completion returns to Idle regardless of outcome.
/// Nothing here enforces mutual exclusion; a manual trigger while
/// Refreshing is allowed and results apply last-write-wins.
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    phase: SchedulerPhase,
    period_ms: i64,
    next_due_ms: Option<i64>,
}

impl RefreshScheduler {
    pub fn new(period_secs: u64) -> Self {
        Self {
            phase: SchedulerPhase::Idle,
            period_ms: period_secs as i64 * TimeUtils::MS_IN_S,
            next_due_ms: None,
        }
    }

    pub fn phase(&self) -> SchedulerPhase {
        self.phase
    }

    /// True once the armed deadline has passed. Never true before the first
    /// refresh arms the period.
    pub fn is_due(&self, now_ms: i64) -> bool {
        self.next_due_ms.is_some_and(|due| now_ms >= due)
    }

    /// Milliseconds until the deadline, for repaint scheduling. Zero when
    /// already due.
    pub fn millis_until_due(&self, now_ms: i64) -> Option<i64> {
        self.next_due_ms.map(|due| (due - now_ms).max(0))
    }

    pub fn on_refresh_started(&mut self, now_ms: i64) {
        self.phase = SchedulerPhase::Refreshing;
        self.next_due_ms = Some(now_ms + self.period_ms);
        if DF.log_scheduler {
            log::info!(
                "scheduler: {}, next deadline in {}ms",
                self.phase,
                self.period_ms
            );
        }
    }

    /// Completion always returns to Idle, success or failure.
    pub fn on_refresh_completed(&mut self) {
        self.phase = SchedulerPhase::Idle;
        if DF.log_scheduler {
            log::info!("scheduler: {}", self.phase);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_000_000;

    #[test]
    fn not_due_before_first_refresh() {
        let scheduler = RefreshScheduler::new(30);
        assert_eq!(scheduler.phase(), SchedulerPhase::Idle);
        assert!(!scheduler.is_due(T0));
        assert!(!scheduler.is_due(T0 + 120_000));
    }

    #[test]
    fn due_exactly_at_period_boundary() {
        let mut scheduler = RefreshScheduler::new(30);
        scheduler.on_refresh_started(T0);
        assert!(!scheduler.is_due(T0 + 29_999));
        assert!(scheduler.is_due(T0 + 30_000));
        assert!(scheduler.is_due(T0 + 30_001));
    }

    #[test]
    fn starting_a_refresh_restarts_the_period() {
        let mut scheduler = RefreshScheduler::new(30);
        scheduler.on_refresh_started(T0);
        // A watchlist change 10s in fires a fresh refresh; the old deadline
        // must move, not fire at T0+30s.
        scheduler.on_refresh_started(T0 + 10_000);
        assert!(!scheduler.is_due(T0 + 30_000));
        assert!(scheduler.is_due(T0 + 40_000));
    }

    #[test]
    fn completion_returns_to_idle() {
        let mut scheduler = RefreshScheduler::new(30);
        scheduler.on_refresh_started(T0);
        assert_eq!(scheduler.phase(), SchedulerPhase::Refreshing);
        scheduler.on_refresh_completed();
        assert_eq!(scheduler.phase(), SchedulerPhase::Idle);
        // Deadline survives completion.
        assert!(scheduler.is_due(T0 + 30_000));
    }

    #[test]
    fn millis_until_due_clamps_at_zero() {
        let mut scheduler = RefreshScheduler::new(30);
        assert_eq!(scheduler.millis_until_due(T0), None);
        scheduler.on_refresh_started(T0);
        assert_eq!(scheduler.millis_until_due(T0 + 1_000), Some(29_000));
        assert_eq!(scheduler.millis_until_due(T0 + 90_000), Some(0));
    }
}
