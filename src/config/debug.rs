//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every refresh request with its intent, and every completion.
    pub log_refresh: bool,

    /// Log search hits and misses.
    pub log_search: bool,

    /// Log watchlist membership changes.
    pub log_watchlist: bool,

    /// Log scheduler phase transitions and deadline arming.
    pub log_scheduler: bool,

    /// Log fetch worker lifecycle (startup / shutdown).
    pub log_worker: bool,
}

pub const DF: LogFlags = LogFlags {
    log_refresh: true,
    log_watchlist: true,

    log_search: false,
    log_scheduler: false,
    log_worker: false,
};
