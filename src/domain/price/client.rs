//! Prices sub-client — current quote and historical series.

use super::{wire, PricePoint};
use crate::client::WidgetClient;
use crate::error::WidgetError;

use rust_decimal::Decimal;

/// Sub-client for price operations.
///
/// Both operations resolve the coin id first (cached after the first call)
/// and use the client's configured currency.
pub struct Prices<'a> {
    pub(crate) client: &'a WidgetClient,
}

impl<'a> Prices<'a> {
    /// Current price of one unit of the tracked asset.
    pub async fn current(&self) -> Result<Decimal, WidgetError> {
        let id = self.client.resolver.resolve(&self.client.http).await;
        let body = self
            .client
            .http
            .simple_price_raw(&id, &self.client.currency)
            .await?;
        wire::parse_quote(&body, &id, &self.client.currency)
    }

    /// Historical prices over the horizon, in provider order.
    ///
    /// A horizon of one day uses the provider's implicit fine-grained
    /// resolution; longer horizons request daily candles.
    pub async fn history(&self, horizon_days: u32) -> Result<Vec<PricePoint>, WidgetError> {
        let id = self.client.resolver.resolve(&self.client.http).await;
        let body = self
            .client
            .http
            .market_chart_raw(&id, &self.client.currency, horizon_days)
            .await?;
        wire::parse_market_chart(&body)
    }
}
