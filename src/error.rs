//! Unified crate error types.

use thiserror::Error;

/// Top-level crate error.
#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Transport failure (connection refused, DNS, timeout, TLS).
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status. Carries the full body for diagnostics.
    #[error("HTTP {status} {reason}: {body}")]
    Status {
        status: u16,
        reason: String,
        body: String,
    },
}

/// The response parsed as JSON but matched none of the expected shapes.
///
/// Variants carry the raw body and the observed top-level keys so a failure
/// can be diagnosed from the status line alone.
#[derive(Error, Debug)]
pub enum ParseError {
    /// `/simple/price` returned neither the requested id nor any key
    /// carrying the requested currency.
    #[error("quote response has no '{expected_id}' key and no '{currency}' field under any of {keys:?}; body: {body}")]
    QuoteShape {
        expected_id: String,
        currency: String,
        keys: Vec<String>,
        body: String,
    },

    /// A response decoded as JSON but with an unusable structure.
    #[error("unexpected JSON shape: {detail}; body: {body}")]
    UnexpectedShape { detail: String, body: String },
}
