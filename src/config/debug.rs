//! Debugging feature flags.

pub struct LogFlags {
    /// Every published ticker snapshot (which token moved and by how much).
    pub log_ticker: bool,

    /// Fetch start/finish, cache hits and refreshes.
    pub log_fetch: bool,

    /// Category and sort changes going through the store.
    pub log_store: bool,

    /// Detail window open/close.
    pub log_selection: bool,

    /// Activate trace_time macro (scope-level timing)
    pub log_performance: bool,

    /// Flash highlights being set and expired.
    pub log_flash: bool,
}

pub const DF: LogFlags = LogFlags {
    log_selection: true,
    log_store: true,
    log_fetch: true,

    log_ticker: false,
    log_performance: false,
    log_flash: false,
};
