//! Value domain — converting price samples into holding values.
//!
//! Pure arithmetic, no I/O, no error path. No rounding is applied anywhere;
//! rounding and currency formatting are presentation concerns.

use crate::domain::price::PricePoint;

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::Serialize;

/// The tracked position: how much of the asset is held and the fee taken on
/// a hypothetical sale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Holding {
    pub quantity: Decimal,
    /// Fee in percent, e.g. `1.49` for 1.49%.
    pub fee_percent: Decimal,
}

impl Holding {
    pub fn new(quantity: Decimal, fee_percent: Decimal) -> Self {
        Self {
            quantity,
            fee_percent,
        }
    }

    /// Gross and net value of the holding at one price.
    pub fn value_of(&self, price: Decimal) -> HoldingValue {
        let gross = self.quantity * price;
        let net = gross * (Decimal::ONE - self.fee_percent / Decimal::ONE_HUNDRED);
        HoldingValue { gross, net }
    }
}

/// Monetary value of the holding at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoldingValue {
    pub gross: Decimal,
    pub net: Decimal,
}

/// One sample of the holding-value series, aligned 1:1 with its source
/// [`PricePoint`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuePoint {
    pub time: DateTime<Local>,
    pub gross: Decimal,
    pub net: Decimal,
}

/// Convert a price series into a value series. Length- and order-preserving.
pub fn to_value_series(prices: &[PricePoint], holding: &Holding) -> Vec<ValuePoint> {
    prices
        .iter()
        .map(|p| {
            let HoldingValue { gross, net } = holding.value_of(p.price);
            ValuePoint {
                time: p.time,
                gross,
                net,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn price_at(minute: u32, price: &str) -> PricePoint {
        PricePoint {
            time: Local.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap(),
            price: dec(price),
        }
    }

    #[test]
    fn test_gross_and_net_for_reference_holding() {
        // 30000 units at €2.00 with a 1.49% fee.
        let value = Holding::new(dec("30000"), dec("1.49")).value_of(dec("2.00"));
        assert_eq!(value.gross, dec("60000.00"));
        assert_eq!(value.net, dec("59106.0000"));
    }

    #[test]
    fn test_zero_fee_keeps_net_equal_to_gross() {
        let value = Holding::new(dec("10"), Decimal::ZERO).value_of(dec("3.5"));
        assert_eq!(value.gross, value.net);
    }

    #[test]
    fn test_full_fee_zeroes_net() {
        let value = Holding::new(dec("10"), dec("100")).value_of(dec("3.5"));
        assert_eq!(value.net, Decimal::ZERO);
    }

    #[test]
    fn test_net_never_exceeds_gross() {
        let holding = Holding::new(dec("123.456"), dec("0.1"));
        for price in ["0", "0.00001", "1", "250.75"] {
            let v = holding.value_of(dec(price));
            assert!(v.net <= v.gross, "net {} > gross {}", v.net, v.gross);
        }
    }

    #[test]
    fn test_series_preserves_length_and_order() {
        let prices = vec![
            price_at(0, "2.00"),
            price_at(1, "1.50"),
            price_at(2, "1.75"),
        ];
        let series = to_value_series(&prices, &Holding::new(dec("30000"), dec("1.49")));

        assert_eq!(series.len(), prices.len());
        for (vp, pp) in series.iter().zip(&prices) {
            assert_eq!(vp.time, pp.time);
        }
        assert_eq!(series[0].gross, dec("60000.00"));
        assert_eq!(series[0].net, dec("59106.0000"));
    }

    #[test]
    fn test_empty_series_transforms_to_empty() {
        let series = to_value_series(&[], &Holding::new(dec("1"), dec("1")));
        assert!(series.is_empty());
    }
}
