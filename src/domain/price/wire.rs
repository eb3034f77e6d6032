//! Wire parsing for the two price endpoints.
//!
//! `/simple/price` is parsed resiliently: the provider sometimes answers
//! under a different (aliased) id than the one requested, so the document is
//! walked as dynamic JSON instead of a fixed struct. `/coins/{id}/market_chart`
//! has a stable shape but its diagnostics also want the raw body, so both
//! parsers take the body text.

use super::PricePoint;
use crate::error::{ParseError, WidgetError};
use crate::shared::CoinId;

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

/// Extract the quoted price from a `/simple/price` body.
///
/// Branches, in order:
/// 1. the requested id with a nested currency field,
/// 2. a single top-level field (the provider substituted its canonical id),
/// 3. any top-level field carrying the requested currency,
/// 4. a diagnostic error listing every returned key and the raw body.
pub fn parse_quote(body: &str, expected_id: &CoinId, currency: &str) -> Result<Decimal, WidgetError> {
    let root: Value = serde_json::from_str(body)?;
    let Some(obj) = root.as_object() else {
        return Err(ParseError::UnexpectedShape {
            detail: "quote root is not an object".into(),
            body: body.into(),
        }
        .into());
    };

    if let Some(price) = obj.get(expected_id.as_str()).and_then(|node| node.get(currency)) {
        return decimal_from_json(price, body);
    }

    if obj.len() == 1 {
        if let Some(price) = obj.values().next().and_then(|node| node.get(currency)) {
            tracing::debug!(
                expected = %expected_id,
                got = %obj.keys().next().map(String::as_str).unwrap_or(""),
                "provider answered under an aliased id"
            );
            return decimal_from_json(price, body);
        }
    }

    for node in obj.values() {
        if let Some(price) = node.get(currency) {
            return decimal_from_json(price, body);
        }
    }

    Err(ParseError::QuoteShape {
        expected_id: expected_id.to_string(),
        currency: currency.to_string(),
        keys: obj.keys().cloned().collect(),
        body: body.into(),
    }
    .into())
}

#[derive(Debug, Deserialize)]
struct MarketChartResponse {
    prices: Vec<(f64, serde_json::Number)>,
}

/// Parse a `market_chart` body into price points, preserving provider order.
/// Timestamps arrive as Unix milliseconds and convert to local wall-clock.
pub fn parse_market_chart(body: &str) -> Result<Vec<PricePoint>, WidgetError> {
    let resp: MarketChartResponse = serde_json::from_str(body)?;

    let mut points = Vec::with_capacity(resp.prices.len());
    for (ts_ms, price) in resp.prices {
        let time = DateTime::from_timestamp_millis(ts_ms as i64)
            .ok_or_else(|| ParseError::UnexpectedShape {
                detail: format!("timestamp {ts_ms} out of range"),
                body: body.into(),
            })?
            .with_timezone(&Local);
        points.push(PricePoint {
            time,
            price: decimal_from_number(&price, body)?,
        });
    }
    Ok(points)
}

fn decimal_from_json(value: &Value, body: &str) -> Result<Decimal, WidgetError> {
    match value {
        Value::Number(n) => decimal_from_number(n, body),
        other => Err(ParseError::UnexpectedShape {
            detail: format!("price is not a number: {other}"),
            body: body.into(),
        }
        .into()),
    }
}

/// JSON numbers render either plainly (`1.23`) or in scientific notation
/// (`1e-7`, common for micro-cap prices); accept both.
fn decimal_from_number(n: &serde_json::Number, body: &str) -> Result<Decimal, WidgetError> {
    let text = n.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|e| {
            ParseError::UnexpectedShape {
                detail: format!("price {text} is not a decimal: {e}"),
                body: body.into(),
            }
            .into()
        })
}
