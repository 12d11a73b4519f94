use {
    super::provider::{TokenSource, parse_dataset},
    crate::{
        config::DEMO,
        domain::{ColumnSet, TokenRecord},
    },
    anyhow::{Result, bail},
    async_trait::async_trait,
    rand::Rng,
    std::time::Duration,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Serves an embedded dataset after a simulated network delay.
pub struct MockTokenSource {
    json: &'static str,
    latency: Duration,
    fail_rate: f64,
}

impl MockTokenSource {
    pub fn new(columns: ColumnSet) -> Self {
        Self {
            json: DEMO.dataset(columns),
            latency: DEMO.latency,
            fail_rate: DEMO.fail_rate,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Probability in [0, 1] that a fetch fails. Out-of-range values are clamped.
    pub fn with_fail_rate(mut self, fail_rate: f64) -> Self {
        self.fail_rate = fail_rate.clamp(0.0, 1.0);
        self
    }
}

#[async_trait]
impl TokenSource for MockTokenSource {
    async fn fetch_tokens(&self) -> Result<Vec<TokenRecord>> {
        #[cfg(debug_assertions)]
        if DF.log_fetch {
            log::info!("FETCH: mock source, {} ms latency", self.latency.as_millis());
        }

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let failed = self.fail_rate > 0.0 && rand::thread_rng().gen_bool(self.fail_rate);
        if failed {
            bail!("Mock token source failed (simulated network error)");
        }

        parse_dataset(self.json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn waits_out_the_latency() {
        let source = MockTokenSource::new(ColumnSet::Compact);
        let started = Instant::now();
        let tokens = source.fetch_tokens().await.unwrap();
        assert_eq!(tokens.len(), 9);
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn always_fails_at_rate_one() {
        let source = MockTokenSource::new(ColumnSet::Compact)
            .with_latency(Duration::ZERO)
            .with_fail_rate(1.0);
        assert!(source.fetch_tokens().await.is_err());
    }

    #[tokio::test]
    async fn extended_set_carries_extra_fields() {
        let source = MockTokenSource::new(ColumnSet::Extended).with_latency(Duration::ZERO);
        let tokens = source.fetch_tokens().await.unwrap();
        assert!(tokens.iter().all(|t| t.market_cap.is_some() && t.holders.is_some()));
    }
}
