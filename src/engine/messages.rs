use {crate::domain::TokenRecord, std::sync::Arc};

/// Control messages for a running ticker.
#[derive(Debug, Clone)]
pub enum TickerCommand {
    /// Replace the working list (after a manual refresh) and publish it at once.
    Reseed(Arc<Vec<TokenRecord>>),
    /// Pause or resume price updates. The task keeps running while paused.
    Pause(bool),
    Shutdown,
}
