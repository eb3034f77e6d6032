//! Wire types for the `/search` endpoint.

use serde::Deserialize;

/// `GET /search?query=...` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub coins: Vec<SearchCoin>,
}

/// One search hit. Every field is optional — the provider omits fields for
/// delisted or partially indexed coins and a missing field must not sink the
/// whole result set.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchCoin {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_tolerates_sparse_hits() {
        let resp: SearchResponse = serde_json::from_str(
            r#"{"coins":[{"id":"tars-ai","symbol":"tai","name":"TARS AI"},{"symbol":"tai"}]}"#,
        )
        .unwrap();
        assert_eq!(resp.coins.len(), 2);
        assert_eq!(resp.coins[0].id.as_deref(), Some("tars-ai"));
        assert!(resp.coins[1].id.is_none());
    }

    #[test]
    fn test_search_response_without_coins_key_is_empty() {
        let resp: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.coins.is_empty());
    }
}
