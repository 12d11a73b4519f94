#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

pub use app::App;
pub use config::{DEMO, PERSISTENCE, SimulationConfig, TICKER};
pub use domain::{Category, ColumnSet, SortDirection, SortKey, SortSpec, TokenRecord};
pub use models::{UiAction, UiStore, derive_view};

use {clap::Parser, std::time::Duration};

/// Shortest tick interval accepted from the command line.
const MIN_TICK_MS: u64 = 50;

// CLI argument parsing
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Table layout and matching mock dataset
    #[arg(long, value_enum, default_value_t = ColumnSet::Compact)]
    pub columns: ColumnSet,

    /// Milliseconds between simulated price updates
    #[arg(long, default_value_t = TICKER.simulation.interval.as_millis() as u64)]
    pub tick_ms: u64,

    /// Simulated fetch latency of the mock source, in milliseconds
    #[arg(long, default_value_t = DEMO.latency.as_millis() as u64)]
    pub latency_ms: u64,

    /// Probability (0..=1) that a mock fetch fails
    #[arg(long, default_value_t = DEMO.fail_rate)]
    pub fail_rate: f64,

    /// Seed for the price simulation (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Runtime settings resolved from the command line.
#[derive(Debug, Clone, Copy)]
pub struct AppSettings {
    pub columns: ColumnSet,
    pub simulation: SimulationConfig,
    pub latency: Duration,
    pub fail_rate: f64,
    pub seed: Option<u64>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            columns: ColumnSet::default(),
            simulation: TICKER.simulation,
            latency: DEMO.latency,
            fail_rate: DEMO.fail_rate,
            seed: None,
        }
    }
}

impl From<&Cli> for AppSettings {
    fn from(cli: &Cli) -> Self {
        if cli.tick_ms < MIN_TICK_MS {
            log::warn!(
                "--tick-ms {} is below the minimum; using {} ms",
                cli.tick_ms,
                MIN_TICK_MS
            );
        }
        Self {
            columns: cli.columns,
            simulation: SimulationConfig {
                interval: Duration::from_millis(cli.tick_ms.max(MIN_TICK_MS)),
                ..TICKER.simulation
            },
            latency: Duration::from_millis(cli.latency_ms),
            fail_rate: cli.fail_rate.clamp(0.0, 1.0),
            seed: cli.seed,
        }
    }
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, AppSettings::from(&args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config() {
        let cli = Cli::parse_from(["token-discovery"]);
        let settings = AppSettings::from(&cli);
        assert_eq!(settings.columns, ColumnSet::Compact);
        assert_eq!(settings.simulation.interval, Duration::from_millis(2000));
        assert_eq!(settings.latency, Duration::from_millis(1000));
        assert_eq!(settings.fail_rate, 0.0);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "token-discovery",
            "--columns",
            "extended",
            "--tick-ms",
            "10",
            "--latency-ms",
            "0",
            "--fail-rate",
            "3.5",
            "--seed",
            "7",
        ]);
        let settings = AppSettings::from(&cli);
        assert_eq!(settings.columns, ColumnSet::Extended);
        assert_eq!(settings.simulation.interval, Duration::from_millis(MIN_TICK_MS));
        assert_eq!(settings.simulation.price_jitter, TICKER.simulation.price_jitter);
        assert!(settings.latency.is_zero());
        assert_eq!(settings.fail_rate, 1.0);
        assert_eq!(settings.seed, Some(7));
    }
}
