//! Low-level HTTP client — `GeckoHttp`.
//!
//! One method per CoinGecko endpoint. Endpoints with a stable shape return
//! wire types; the two price endpoints return the raw body because their
//! resilient parsing (in `domain::price::wire`) needs it for diagnostics.
//! Internal to the crate — `WidgetClient` wraps this.
//!
//! No retries anywhere: a failed request surfaces as an error and the only
//! recovery path is caller-initiated re-invocation.

use crate::domain::coin::wire::SearchResponse;
use crate::error::HttpError;
use crate::network::ApiMode;
use crate::shared::CoinId;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// User-Agent sent on every request.
const USER_AGENT: &str = concat!("coinwatch/", env!("CARGO_PKG_VERSION"));

/// Default per-request timeout. Each request carries its own timeout; there
/// is no timeout on any lock waiting above this layer.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Low-level HTTP client for the CoinGecko REST API.
pub struct GeckoHttp {
    base_url: String,
    header_name: &'static str,
    /// Sanitized API key. NEVER logged.
    api_key: Option<String>,
    client: Client,
}

impl GeckoHttp {
    pub fn new(mode: ApiMode, api_key: Option<&str>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(4)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: mode.base_url().to_string(),
            header_name: mode.api_key_header(),
            api_key: api_key.map(sanitize_key).filter(|k| !k.is_empty()),
            client,
        }
    }

    // ── Search ───────────────────────────────────────────────────────────

    pub async fn search(&self, query: &str) -> Result<SearchResponse, HttpError> {
        let url = format!(
            "{}/search?query={}",
            self.base_url,
            urlencoding::encode(query)
        );
        self.get_json(&url).await
    }

    // ── Existence probe ──────────────────────────────────────────────────

    /// Lightweight existence check: HTTP 200 iff the coin id exists.
    ///
    /// Transport failures count as "does not exist" — the probe chain is a
    /// fallback path and must not abort resolution.
    pub async fn coin_exists(&self, id: &CoinId) -> bool {
        let url = format!(
            "{}/coins/{}?localization=false&tickers=false&market_data=false\
             &community_data=false&developer_data=false&sparkline=false",
            self.base_url,
            urlencoding::encode(id.as_str())
        );
        match self.request(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                tracing::debug!(%id, error = %e, "existence probe failed");
                false
            }
        }
    }

    // ── Current price ────────────────────────────────────────────────────

    /// Raw `/simple/price` body. The provider may echo a different id than
    /// requested, so parsing happens upstream against the raw text.
    pub async fn simple_price_raw(
        &self,
        id: &CoinId,
        currency: &str,
    ) -> Result<String, HttpError> {
        let url = format!(
            "{}/simple/price?ids={}&vs_currencies={}",
            self.base_url,
            urlencoding::encode(id.as_str()),
            urlencoding::encode(currency)
        );
        self.get_text(&url).await
    }

    // ── History ──────────────────────────────────────────────────────────

    /// Raw `/coins/{id}/market_chart` body.
    pub async fn market_chart_raw(
        &self,
        id: &CoinId,
        currency: &str,
        horizon_days: u32,
    ) -> Result<String, HttpError> {
        let url = self.market_chart_url(id, currency, horizon_days);
        self.get_text(&url).await
    }

    /// Horizon ≤ 1 day relies on the provider's implicit fine-grained
    /// resolution; anything longer requests explicit daily candles.
    fn market_chart_url(&self, id: &CoinId, currency: &str, horizon_days: u32) -> String {
        let mut url = format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}",
            self.base_url,
            urlencoding::encode(id.as_str()),
            urlencoding::encode(currency),
            horizon_days
        );
        if horizon_days > 1 {
            url.push_str("&interval=daily");
        }
        url
    }

    // ── Self-test ────────────────────────────────────────────────────────

    /// `/ping` diagnostic. Reports base URL, header name, status and body
    /// regardless of the status code.
    pub async fn ping(&self) -> Result<String, HttpError> {
        let url = format!("{}/ping", self.base_url);
        let resp = self.request(&url).send().await?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Ok(format!(
            "Base: {}\nHeader: {}\nStatus: {} {}\nBody: {}",
            self.base_url,
            self.header_name,
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            body
        ))
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let mut req = self.client.get(url);
        if let Some(key) = &self.api_key {
            req = req.header(self.header_name, key);
        }
        req
    }

    async fn do_get(&self, url: &str) -> Result<reqwest::Response, HttpError> {
        let resp = self.request(url).send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let reason = status.canonical_reason().unwrap_or("").to_string();
        let body = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), url, "request rejected");
        Err(HttpError::Status {
            status: status.as_u16(),
            reason,
            body,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        Ok(self.do_get(url).await?.json::<T>().await?)
    }

    async fn get_text(&self, url: &str) -> Result<String, HttpError> {
        Ok(self.do_get(url).await?.text().await?)
    }
}

impl Clone for GeckoHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            header_name: self.header_name,
            api_key: self.api_key.clone(),
            client: self.client.clone(),
        }
    }
}

/// Strip non-ASCII characters and surrounding whitespace from a pasted key.
/// Keys copied out of dashboards routinely pick up invisible characters that
/// make the header value invalid.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .filter(char::is_ascii)
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_http() -> GeckoHttp {
        GeckoHttp::new(ApiMode::Demo, None, DEFAULT_TIMEOUT)
    }

    #[test]
    fn test_sanitize_key_strips_non_ascii_and_whitespace() {
        assert_eq!(sanitize_key("  cg_demo_abc\u{200b}123 "), "cg_demo_abc123");
        assert_eq!(sanitize_key("\u{feff}"), "");
    }

    #[test]
    fn test_market_chart_url_omits_interval_for_one_day() {
        let url = demo_http().market_chart_url(&CoinId::new("tars-ai"), "eur", 1);
        assert!(url.ends_with("/coins/tars-ai/market_chart?vs_currency=eur&days=1"));
        assert!(!url.contains("interval"));
    }

    #[test]
    fn test_market_chart_url_requests_daily_interval_beyond_one_day() {
        let url = demo_http().market_chart_url(&CoinId::new("tars-ai"), "eur", 7);
        assert!(url.contains("days=7"));
        assert!(url.ends_with("&interval=daily"));
    }

    #[test]
    fn test_coin_id_is_percent_encoded() {
        let url = demo_http().market_chart_url(&CoinId::new("a b"), "eur", 1);
        assert!(url.contains("/coins/a%20b/"));
    }
}
