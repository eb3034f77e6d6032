//! High-level client — `WidgetClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder, the shared resolver state, and the accessor
//! methods. All configuration is immutable after `build()`.

use crate::domain::coin::client::Coins;
use crate::domain::coin::resolver::CoinResolver;
use crate::domain::coin::AssetQuery;
use crate::domain::price::client::Prices;
use crate::error::WidgetError;
use crate::http::client::DEFAULT_TIMEOUT;
use crate::http::GeckoHttp;
use crate::network::ApiMode;
use crate::shared::CoinId;

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::price::client::Prices as PricesClient;

/// The primary entry point for provider access.
///
/// Holds the HTTP client and the process-lifetime resolver cache. Cloning is
/// cheap and clones share both. All fetch methods take `&self`; nothing
/// guards against overlapping invocations of the same operation — the
/// surrounding refresh logic owns that policy.
pub struct WidgetClient {
    pub(crate) http: GeckoHttp,
    pub(crate) resolver: Arc<CoinResolver>,
    pub(crate) currency: String,
}

impl WidgetClient {
    pub fn builder() -> WidgetClientBuilder {
        WidgetClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn prices(&self) -> Prices<'_> {
        Prices { client: self }
    }

    /// Quote currency every price is expressed in.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// `/ping` self-test returning a human-readable diagnostic report.
    pub async fn ping(&self) -> Result<String, WidgetError> {
        Ok(self.http.ping().await?)
    }
}

impl Clone for WidgetClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            resolver: self.resolver.clone(),
            currency: self.currency.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct WidgetClientBuilder {
    mode: ApiMode,
    api_key: Option<String>,
    currency: String,
    asset: AssetQuery,
    forced_id: Option<CoinId>,
    timeout: Duration,
}

impl Default for WidgetClientBuilder {
    fn default() -> Self {
        Self {
            mode: ApiMode::Demo,
            api_key: None,
            currency: "eur".to_string(),
            asset: AssetQuery::default(),
            forced_id: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl WidgetClientBuilder {
    pub fn mode(mut self, mode: ApiMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn currency(mut self, currency: &str) -> Self {
        self.currency = currency.to_lowercase();
        self
    }

    pub fn asset(mut self, asset: AssetQuery) -> Self {
        self.asset = asset;
        self
    }

    /// Skip resolution entirely and use this id as-is. Useful for tests and
    /// for pinning the id when the search index misbehaves.
    pub fn forced_id(mut self, id: CoinId) -> Self {
        self.forced_id = Some(id);
        self
    }

    /// Per-request timeout. There is no timeout on the resolver gate.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> WidgetClient {
        WidgetClient {
            http: GeckoHttp::new(self.mode, self.api_key.as_deref(), self.timeout),
            resolver: Arc::new(CoinResolver::new(self.asset, self.forced_id)),
            currency: self.currency,
        }
    }
}
