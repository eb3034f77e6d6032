//! Coin domain — identifier resolution for the tracked asset.
//!
//! The provider addresses coins by an opaque id that is not derivable from
//! the ticker symbol. `AssetQuery` describes how to find that id; the
//! resolver (behind the `http` feature) runs the search → probe → fallback
//! chain and caches the winner for the process lifetime.

pub mod wire;

#[cfg(feature = "http")]
pub mod client;
#[cfg(feature = "http")]
pub mod resolver;

#[cfg(feature = "http")]
pub use resolver::{CoinResolver, CoinSource};

use crate::shared::CoinId;
use wire::SearchCoin;

/// How to locate the tracked asset at the provider.
///
/// Immutable configuration, passed at construction time.
#[derive(Debug, Clone)]
pub struct AssetQuery {
    /// Ticker symbol; search hits must match it exactly (case-insensitive).
    pub symbol: String,
    /// Keyword the display name of the preferred hit must contain
    /// (case-insensitive). Disambiguates symbol collisions.
    pub name_keyword: String,
    /// Ordered candidate ids probed when search yields nothing usable.
    pub candidates: Vec<CoinId>,
}

impl AssetQuery {
    pub fn new(
        symbol: impl Into<String>,
        name_keyword: impl Into<String>,
        candidates: impl IntoIterator<Item = CoinId>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name_keyword: name_keyword.into(),
            candidates: candidates.into_iter().collect(),
        }
    }

    /// Term sent to the search endpoint.
    pub fn search_term(&self) -> &str {
        &self.symbol
    }
}

/// The asset the widget was originally built for: TARS AI (TAI).
impl Default for AssetQuery {
    fn default() -> Self {
        Self::new(
            "tai",
            "tars",
            ["tars-ai", "tars-protocol", "tars"].map(CoinId::from),
        )
    }
}

/// Pick the best id out of a search result set.
///
/// Prefers an entry whose symbol matches exactly (case-insensitive) and
/// whose name contains the keyword; otherwise the first entry with the
/// exact symbol match alone. `None` when nothing usable came back.
pub fn select_from_search(coins: &[SearchCoin], asset: &AssetQuery) -> Option<CoinId> {
    let symbol_matches = |c: &&SearchCoin| {
        c.symbol
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case(&asset.symbol))
    };
    let keyword = asset.name_keyword.to_lowercase();

    let preferred = coins.iter().filter(symbol_matches).find(|c| {
        c.name
            .as_deref()
            .is_some_and(|n| n.to_lowercase().contains(&keyword))
    });
    if let Some(id) = preferred.and_then(|c| c.id.as_deref()) {
        return Some(CoinId::new(id));
    }

    coins
        .iter()
        .find(symbol_matches)
        .and_then(|c| c.id.as_deref())
        .map(CoinId::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(id: &str, symbol: &str, name: &str) -> SearchCoin {
        SearchCoin {
            id: Some(id.to_string()),
            symbol: Some(symbol.to_string()),
            name: Some(name.to_string()),
        }
    }

    fn tai() -> AssetQuery {
        AssetQuery::default()
    }

    #[test]
    fn test_prefers_symbol_and_name_keyword_match() {
        let coins = vec![
            coin("other-tai", "TAI", "Something Else"),
            coin("tars-ai", "tai", "TARS AI"),
        ];
        assert_eq!(
            select_from_search(&coins, &tai()),
            Some(CoinId::new("tars-ai"))
        );
    }

    #[test]
    fn test_falls_back_to_first_exact_symbol_match() {
        let coins = vec![
            coin("unrelated", "btc", "Bitcoin"),
            coin("other-tai", "TAI", "Totally Different"),
            coin("later-tai", "tai", "Also Different"),
        ];
        assert_eq!(
            select_from_search(&coins, &tai()),
            Some(CoinId::new("other-tai"))
        );
    }

    #[test]
    fn test_no_symbol_match_yields_none() {
        let coins = vec![coin("bitcoin", "btc", "Bitcoin")];
        assert_eq!(select_from_search(&coins, &tai()), None);
    }

    #[test]
    fn test_tolerates_missing_fields() {
        let coins = vec![
            SearchCoin {
                id: None,
                symbol: Some("tai".into()),
                name: Some("TARS AI".into()),
            },
            SearchCoin {
                id: Some("tars-ai".into()),
                symbol: None,
                name: None,
            },
        ];
        // The preferred hit has no id and the fallback takes the first
        // symbol match as-is, so nothing usable comes out.
        assert_eq!(select_from_search(&coins, &tai()), None);
    }

    #[test]
    fn test_empty_result_set_yields_none() {
        assert_eq!(select_from_search(&[], &tai()), None);
    }
}
