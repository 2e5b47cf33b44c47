pub struct RefreshConfig {
    /// Auto-refresh period. CLI `--refresh-secs` overrides.
    pub period_secs: u64,

    /// Simulated fetch latency. CLI `--latency-ms` overrides.
    pub latency_ms: u64,
}

pub const REFRESH: RefreshConfig = RefreshConfig {
    period_secs: 30,
    latency_ms: 1000,
};
