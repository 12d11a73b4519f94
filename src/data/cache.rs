use {
    super::provider::TokenSource,
    crate::domain::TokenRecord,
    anyhow::{Context, Result},
    std::{
        sync::{Arc, Mutex, PoisonError},
        time::Duration,
    },
    tokio::time::Instant,
};

#[cfg(debug_assertions)]
use crate::config::DF;

struct CacheEntry {
    tokens: Arc<Vec<TokenRecord>>,
    fetched_at: Instant,
}

/// Query cache in front of a `TokenSource`. A result younger than the stale
/// time is served without fetching again.
pub struct CachedTokenSource {
    inner: Arc<dyn TokenSource>,
    stale_time: Duration,
    entry: Mutex<Option<CacheEntry>>,
}

impl CachedTokenSource {
    pub fn new(inner: Arc<dyn TokenSource>, stale_time: Duration) -> Self {
        Self {
            inner,
            stale_time,
            entry: Mutex::new(None),
        }
    }

    /// Cached list if still fresh, otherwise a new fetch.
    pub async fn load(&self) -> Result<Arc<Vec<TokenRecord>>> {
        if let Some(tokens) = self.fresh() {
            #[cfg(debug_assertions)]
            if DF.log_fetch {
                log::info!("FETCH: served {} tokens from cache", tokens.len());
            }
            return Ok(tokens);
        }
        self.refresh().await
    }

    /// Always fetches. On failure the previous entry is kept.
    pub async fn refresh(&self) -> Result<Arc<Vec<TokenRecord>>> {
        let tokens = Arc::new(
            self.inner
                .fetch_tokens()
                .await
                .context("Failed to fetch tokens")?,
        );

        *self.lock() = Some(CacheEntry {
            tokens: tokens.clone(),
            fetched_at: Instant::now(),
        });

        log::info!("Fetched {} tokens", tokens.len());
        Ok(tokens)
    }

    fn fresh(&self) -> Option<Arc<Vec<TokenRecord>>> {
        self.lock()
            .as_ref()
            .filter(|e| e.fetched_at.elapsed() < self.stale_time)
            .map(|e| e.tokens.clone())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<CacheEntry>> {
        self.entry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use anyhow::bail;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingSource {
        calls: AtomicUsize,
        fail: std::sync::atomic::AtomicBool,
    }

    #[async_trait]
    impl TokenSource for CountingSource {
        async fn fetch_tokens(&self) -> Result<Vec<TokenRecord>> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                bail!("offline");
            }
            Ok(vec![TokenRecord::new(
                format!("{n}"),
                "Token",
                Category::New,
            )])
        }
    }

    fn setup() -> (Arc<CountingSource>, CachedTokenSource) {
        let source = Arc::new(CountingSource::default());
        let cache = CachedTokenSource::new(source.clone(), Duration::from_secs(60));
        (source, cache)
    }

    #[tokio::test(start_paused = true)]
    async fn fresh_result_is_reused() {
        let (source, cache) = setup();
        let a = cache.load().await.unwrap();
        tokio::time::advance(Duration::from_secs(30)).await;
        let b = cache.load().await.unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_result_is_refetched() {
        let (source, cache) = setup();
        cache.load().await.unwrap();
        tokio::time::advance(Duration::from_secs(61)).await;
        let b = cache.load().await.unwrap();
        assert_eq!(b[0].id, "1");
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_bypasses_cache() {
        let (source, cache) = setup();
        cache.load().await.unwrap();
        let b = cache.refresh().await.unwrap();
        assert_eq!(b[0].id, "1");
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_refresh_keeps_last_good_list() {
        let (source, cache) = setup();
        let good = cache.load().await.unwrap();
        source.fail.store(true, Ordering::SeqCst);

        let err = cache.refresh().await.unwrap_err();
        assert!(format!("{:#}", err).contains("offline"));

        let served = cache.load().await.unwrap();
        assert!(Arc::ptr_eq(&good, &served));
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }
}
