//! Provider base URLs and operating modes.

/// Demo-tier REST API base URL.
pub const DEMO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Pro-tier REST API base URL.
pub const PRO_API_URL: &str = "https://pro-api.coingecko.com/api/v3";

/// CoinGecko operating mode.
///
/// The mode picks both the base URL and the name of the API-key header,
/// which differ between the demo and pro tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiMode {
    /// Demo/sandbox tier (`x-cg-demo-api-key`).
    #[default]
    Demo,
    /// Pro tier (`x-cg-pro-api-key`).
    Pro,
}

impl ApiMode {
    pub fn base_url(&self) -> &'static str {
        match self {
            ApiMode::Demo => DEMO_API_URL,
            ApiMode::Pro => PRO_API_URL,
        }
    }

    pub fn api_key_header(&self) -> &'static str {
        match self {
            ApiMode::Demo => "x-cg-demo-api-key",
            ApiMode::Pro => "x-cg-pro-api-key",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selects_url_and_header_together() {
        assert_eq!(ApiMode::Demo.base_url(), DEMO_API_URL);
        assert_eq!(ApiMode::Demo.api_key_header(), "x-cg-demo-api-key");
        assert_eq!(ApiMode::Pro.base_url(), PRO_API_URL);
        assert_eq!(ApiMode::Pro.api_key_header(), "x-cg-pro-api-key");
    }

    #[test]
    fn test_default_mode_is_demo() {
        assert_eq!(ApiMode::default(), ApiMode::Demo);
    }
}
