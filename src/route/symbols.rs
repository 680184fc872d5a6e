//! Process-wide token symbol cache
//!
//! Symbols are enrichment only; a failed lookup must never block route
//! discovery, so failures are cached as the empty string and swallowed for the
//! process lifetime. The keyed domain (token addresses seen by one deployment)
//! is small and static, so entries are never evicted.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};

use crate::oracle::RoutingOracle;

/// Shared address -> symbol cache, keyed by lowercased address. An empty
/// string means "looked up, unknown" and is not retried.
#[derive(Clone, Default)]
pub struct SymbolCache {
    entries: Arc<Mutex<HashMap<String, Arc<OnceCell<String>>>>>,
}

impl SymbolCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the symbol for `address`, memoizing the result. Concurrent
    /// misses for the same key share one in-flight oracle call.
    pub async fn token_symbol(&self, oracle: &dyn RoutingOracle, address: &str) -> String {
        let key = address.to_lowercase();
        let cell = {
            let mut entries = self.entries.lock().await;
            Arc::clone(entries.entry(key).or_default())
        };

        cell.get_or_init(|| async {
            match oracle.symbol_of(address).await {
                Ok(symbol) => symbol,
                Err(err) => {
                    tracing::debug!(address, error = %err, "symbol lookup failed, caching unknown");
                    String::new()
                }
            }
        })
        .await
        .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{BestRoute, PopulatedTx};
    use anyhow::{bail, Result};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Oracle stub that only answers symbol lookups and counts them.
    struct CountingOracle {
        calls: AtomicUsize,
        fail: bool,
        delay: Duration,
    }

    impl CountingOracle {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
                delay: Duration::ZERO,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl RoutingOracle for CountingOracle {
        async fn fetch_pools(&self) -> Result<()> {
            Ok(())
        }

        async fn best_route_and_output(&self, _: &str, _: &str, _: &str) -> Result<BestRoute> {
            bail!("not under test")
        }

        async fn symbol_of(&self, _address: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            if self.fail {
                bail!("rpc unavailable");
            }
            Ok("DAI".to_string())
        }

        async fn populate_swap(&self, _: &str, _: &str, _: &str) -> Result<PopulatedTx> {
            bail!("not under test")
        }

        async fn has_allowance(&self, _: &str, _: &[&str], _: &[&str], _: &str) -> Result<bool> {
            bail!("not under test")
        }

        async fn populate_approve(&self, _: &str, _: &str, _: &str) -> Result<Vec<PopulatedTx>> {
            bail!("not under test")
        }
    }

    const DAI: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";

    #[tokio::test]
    async fn memoizes_case_insensitively() {
        let oracle = CountingOracle::new(false);
        let cache = SymbolCache::new();

        assert_eq!(cache.token_symbol(&oracle, DAI).await, "DAI");
        assert_eq!(cache.token_symbol(&oracle, &DAI.to_lowercase()).await, "DAI");
        assert_eq!(
            cache.token_symbol(&oracle, &DAI.to_uppercase()).await,
            "DAI"
        );
        assert_eq!(oracle.calls(), 1);
    }

    #[tokio::test]
    async fn failure_is_cached_and_not_retried() {
        let oracle = CountingOracle::new(true);
        let cache = SymbolCache::new();

        assert_eq!(cache.token_symbol(&oracle, DAI).await, "");
        assert_eq!(cache.token_symbol(&oracle, DAI).await, "");
        assert_eq!(oracle.calls(), 1);
    }

    #[tokio::test]
    async fn concurrent_misses_share_one_call() {
        let mut oracle = CountingOracle::new(false);
        oracle.delay = Duration::from_millis(20);
        let cache = SymbolCache::new();

        let lowercased = DAI.to_lowercase();
        let (a, b) = tokio::join!(
            cache.token_symbol(&oracle, DAI),
            cache.token_symbol(&oracle, &lowercased),
        );
        assert_eq!(a, "DAI");
        assert_eq!(b, "DAI");
        assert_eq!(oracle.calls(), 1);
    }
}
