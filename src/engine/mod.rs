mod messages;
mod ticker;
mod worker;

pub use messages::TickerCommand;
pub use ticker::{TickOutcome, apply_tick};
pub use worker::{TickerHandle, run_ticker, spawn_ticker};
