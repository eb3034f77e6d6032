//! Coin id resolution — cache, single-flight gate, fallback chain.

use super::{select_from_search, AssetQuery};
use crate::error::HttpError;
use crate::http::GeckoHttp;
use crate::shared::CoinId;

use async_lock::{Mutex, RwLock};

use super::wire::SearchCoin;

/// Source of search results and existence probes.
///
/// `GeckoHttp` is the production implementation; tests substitute a mock to
/// exercise the resolution policy without a network.
#[allow(async_fn_in_trait)]
pub trait CoinSource {
    async fn search_coins(&self, query: &str) -> Result<Vec<SearchCoin>, HttpError>;

    /// Existence probe. Infallible: transport failures count as "no".
    async fn probe_coin(&self, id: &CoinId) -> bool;
}

impl CoinSource for GeckoHttp {
    async fn search_coins(&self, query: &str) -> Result<Vec<SearchCoin>, HttpError> {
        Ok(self.search(query).await?.coins)
    }

    async fn probe_coin(&self, id: &CoinId) -> bool {
        self.coin_exists(id).await
    }
}

/// Resolves and caches the provider id for the tracked asset.
///
/// Resolution never fails: when every strategy is exhausted the first
/// configured candidate is returned unverified. That availability-over-
/// correctness choice is deliberate (a wrong id surfaces as a quote failure
/// one call later, which the status line already handles) but it can mask a
/// real outage, so exhaustion is logged at `warn`.
pub struct CoinResolver {
    asset: AssetQuery,
    /// Override id; authoritative, bypasses cache and network entirely.
    forced: Option<CoinId>,
    cache: RwLock<Option<CoinId>>,
    /// Single-flight gate: one in-flight resolution per process. No timeout —
    /// if resolution hangs, waiters hang with it; the per-request HTTP
    /// timeout bounds the realistic window.
    gate: Mutex<()>,
}

impl CoinResolver {
    pub fn new(asset: AssetQuery, forced: Option<CoinId>) -> Self {
        Self {
            asset,
            forced,
            cache: RwLock::new(None),
            gate: Mutex::new(()),
        }
    }

    /// The resolved id, fetching it on first use.
    ///
    /// Order: forced override → cache → single-flight search/probe chain.
    /// Concurrent callers during the first resolution wait on the gate and
    /// reuse its result; the cache is written at most once per process.
    pub async fn resolve<S: CoinSource>(&self, source: &S) -> CoinId {
        if let Some(forced) = &self.forced {
            return forced.clone();
        }

        if let Some(id) = self.cache.read().await.clone() {
            return id;
        }

        let _flight = self.gate.lock().await;

        // Another caller may have finished while this one waited.
        if let Some(id) = self.cache.read().await.clone() {
            return id;
        }

        let id = self.resolve_uncached(source).await;
        *self.cache.write().await = Some(id.clone());
        id
    }

    async fn resolve_uncached<S: CoinSource>(&self, source: &S) -> CoinId {
        // 1) Keyword search. Failures here are non-fatal.
        match source.search_coins(self.asset.search_term()).await {
            Ok(coins) => {
                if let Some(id) = select_from_search(&coins, &self.asset) {
                    tracing::debug!(%id, "resolved coin id via search");
                    return id;
                }
                tracing::debug!("search returned no usable match");
            }
            Err(e) => {
                tracing::debug!(error = %e, "coin search failed, probing candidates");
            }
        }

        // 2) Ordered candidate probing.
        for id in &self.asset.candidates {
            if source.probe_coin(id).await {
                tracing::debug!(%id, "resolved coin id via candidate probe");
                return id.clone();
            }
        }

        // 3) Soft-fail: first candidate, unverified.
        let fallback = self
            .asset
            .candidates
            .first()
            .cloned()
            .unwrap_or_else(|| CoinId::new(&self.asset.symbol));
        tracing::warn!(%fallback, "resolution exhausted; returning unverified candidate");
        fallback
    }
}
