//! Coins sub-client — identifier resolution against the live provider.

use crate::client::WidgetClient;
use crate::shared::CoinId;

/// Sub-client for coin identifier operations.
pub struct Coins<'a> {
    pub(crate) client: &'a WidgetClient,
}

impl<'a> Coins<'a> {
    /// The provider id of the tracked asset.
    ///
    /// First call resolves over the network (unless a forced id is
    /// configured); later calls return the process-lifetime cached value.
    /// Never fails — see [`CoinResolver`](super::CoinResolver) for the
    /// soft-fail semantics.
    pub async fn resolve(&self) -> CoinId {
        self.client.resolver.resolve(&self.client.http).await
    }

    /// Existence probe for an arbitrary id.
    pub async fn exists(&self, id: &CoinId) -> bool {
        self.client.http.coin_exists(id).await
    }
}
