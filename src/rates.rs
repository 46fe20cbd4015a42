//! Static exchange rate table and conversion helpers.
//!
//! Rates are hand-authored mock data keyed `"FROM-TO"`. A missing pair
//! converts at 1:1 - the lookup is a read-only collaborator and never an
//! error source.

use std::collections::HashMap;

use lazy_static::lazy_static;
use tracing::debug;

use crate::utils::format::round_to_cents;

lazy_static! {
    // Mock exchange rates - in a real deployment these would come from a
    // market data feed.
    static ref EXCHANGE_RATES: HashMap<&'static str, f64> = {
        let mut rates = HashMap::new();
        rates.insert("USD-CDF", 2000.0);
        rates.insert("USD-EUR", 0.85);
        rates.insert("USD-GBP", 0.73);
        rates.insert("CDF-USD", 0.0005);
        rates.insert("CDF-EUR", 0.000425);
        rates.insert("CDF-GBP", 0.000365);
        rates.insert("EUR-USD", 1.18);
        rates.insert("EUR-CDF", 2353.0);
        rates.insert("EUR-GBP", 0.86);
        rates.insert("GBP-USD", 1.37);
        rates.insert("GBP-CDF", 2740.0);
        rates.insert("GBP-EUR", 1.16);
        rates
    };
}

/// Multiplier applied when converting `from` into `to`. Same currency and
/// unknown pairs both resolve to 1.
pub fn exchange_rate(from: &str, to: &str) -> f64 {
    if from == to {
        return 1.0;
    }
    let key = format!("{}-{}", from, to);
    match EXCHANGE_RATES.get(key.as_str()) {
        Some(rate) => *rate,
        None => {
            debug!("no rate entry for {}, falling back to 1", key);
            1.0
        }
    }
}

/// Convert an amount between currencies, rounded to cents.
pub fn convert(amount: f64, from: &str, to: &str) -> f64 {
    round_to_cents(amount * exchange_rate(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup() {
        assert_eq!(exchange_rate("USD", "CDF"), 2000.0);
        assert_eq!(exchange_rate("CDF", "USD"), 0.0005);
        assert_eq!(exchange_rate("GBP", "EUR"), 1.16);
    }

    #[test]
    fn test_same_currency_is_identity() {
        assert_eq!(exchange_rate("USD", "USD"), 1.0);
        assert_eq!(exchange_rate("XYZ", "XYZ"), 1.0);
    }

    #[test]
    fn test_unknown_pair_falls_back_to_one() {
        assert_eq!(exchange_rate("USD", "RWF"), 1.0);
        assert_eq!(exchange_rate("ABC", "DEF"), 1.0);
    }

    #[test]
    fn test_convert_rounds_to_cents() {
        assert_eq!(convert(100.0, "USD", "CDF"), 200000.0);
        assert_eq!(convert(100000.0, "CDF", "USD"), 50.0);
        assert_eq!(convert(33.33, "USD", "EUR"), 28.33);
    }
}
