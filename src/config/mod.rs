//! Compile-time configuration for the token table.

mod debug;
mod demo;
mod persistence;
mod ticker;

pub use debug::{DF, LogFlags};
pub use demo::{DEMO, DemoConfig};
pub use persistence::PERSISTENCE;
pub use ticker::{SimulationConfig, TICKER, TapeConfig, TickerConfig};
