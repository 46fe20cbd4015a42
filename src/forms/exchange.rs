//! Bidirectional currency exchange form.
//!
//! Two amount fields stay in sync through the rate table. The side the user
//! last edited is authoritative; the other side is always derived from it,
//! so recomputation is one-directional and needs no re-entrancy guard.

use crate::rates;
use crate::utils::format::format_amount_input;

/// Which amount field the user is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveField {
    Origin,
    Destination,
}

#[derive(Debug, Clone)]
pub struct ExchangeForm {
    origin_amount: String,
    destination_amount: String,
    origin_currency: String,
    destination_currency: String,
    active: ActiveField,
}

impl Default for ExchangeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ExchangeForm {
    pub fn new() -> Self {
        ExchangeForm {
            origin_amount: String::new(),
            destination_amount: String::new(),
            origin_currency: "USD".to_string(),
            destination_currency: "CDF".to_string(),
            active: ActiveField::Origin,
        }
    }

    pub fn origin_amount(&self) -> &str {
        &self.origin_amount
    }

    pub fn destination_amount(&self) -> &str {
        &self.destination_amount
    }

    pub fn origin_currency(&self) -> &str {
        &self.origin_currency
    }

    pub fn destination_currency(&self) -> &str {
        &self.destination_currency
    }

    pub fn active(&self) -> ActiveField {
        self.active
    }

    /// Current origin → destination multiplier, for display.
    pub fn rate(&self) -> f64 {
        rates::exchange_rate(&self.origin_currency, &self.destination_currency)
    }

    /// User typed into the origin field: normalize it and derive the
    /// destination amount. A non-numeric origin clears the destination.
    pub fn edit_origin_amount(&mut self, raw: &str) {
        self.active = ActiveField::Origin;
        self.origin_amount = format_amount_input(raw);
        self.recompute();
    }

    /// User typed into the destination field: derive the origin amount from
    /// the reverse table entry.
    pub fn edit_destination_amount(&mut self, raw: &str) {
        self.active = ActiveField::Destination;
        self.destination_amount = format_amount_input(raw);
        self.recompute();
    }

    pub fn set_origin_currency(&mut self, code: &str) {
        self.origin_currency = code.to_uppercase();
        self.rederive_destination();
    }

    pub fn set_destination_currency(&mut self, code: &str) {
        self.destination_currency = code.to_uppercase();
        self.rederive_destination();
    }

    pub fn reset(&mut self) {
        *self = ExchangeForm::new();
    }

    fn recompute(&mut self) {
        match self.active {
            ActiveField::Origin => match parse_amount(&self.origin_amount) {
                Some(value) => {
                    self.destination_amount = format!("{:.2}", value * self.rate());
                }
                None => self.destination_amount.clear(),
            },
            ActiveField::Destination => match parse_amount(&self.destination_amount) {
                Some(value) => {
                    let reverse =
                        rates::exchange_rate(&self.destination_currency, &self.origin_currency);
                    self.origin_amount = format!("{:.2}", value * reverse);
                }
                None => self.origin_amount.clear(),
            },
        }
    }

    // A currency change always re-derives the destination from the origin
    // amount; without an origin amount both fields go blank.
    fn rederive_destination(&mut self) {
        self.active = ActiveField::Origin;
        match parse_amount(&self.origin_amount) {
            Some(value) => {
                self.destination_amount = format!("{:.2}", value * self.rate());
            }
            None => {
                self.origin_amount.clear();
                self.destination_amount.clear();
            }
        }
    }
}

fn parse_amount(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_origin_derives_destination() {
        let mut form = ExchangeForm::new();
        form.edit_origin_amount("100");
        assert_eq!(form.origin_amount(), "100");
        assert_eq!(form.destination_amount(), "200000.00");
    }

    #[test]
    fn test_editing_destination_derives_origin() {
        let mut form = ExchangeForm::new();
        form.edit_destination_amount("100000.00");
        assert_eq!(form.origin_amount(), "50.00");
        assert_eq!(form.active(), ActiveField::Destination);
    }

    #[test]
    fn test_non_numeric_input_clears_paired_field() {
        let mut form = ExchangeForm::new();
        form.edit_origin_amount("100");
        assert!(!form.destination_amount().is_empty());

        form.edit_origin_amount("");
        assert!(form.destination_amount().is_empty());

        form.edit_destination_amount("...");
        assert!(form.origin_amount().is_empty());
    }

    #[test]
    fn test_input_is_normalized_before_conversion() {
        let mut form = ExchangeForm::new();
        form.edit_origin_amount("ab12.345");
        assert_eq!(form.origin_amount(), "12.34");
        assert_eq!(form.destination_amount(), "24680.00");
    }

    #[test]
    fn test_currency_change_rederives_destination() {
        let mut form = ExchangeForm::new();
        form.edit_origin_amount("100");
        form.set_destination_currency("EUR");
        assert_eq!(form.destination_amount(), "85.00");

        form.set_origin_currency("GBP");
        assert_eq!(form.destination_amount(), "116.00");
    }

    #[test]
    fn test_currency_change_without_origin_blanks_fields() {
        let mut form = ExchangeForm::new();
        form.edit_destination_amount("100");
        form.edit_destination_amount("");
        form.set_destination_currency("EUR");
        assert!(form.origin_amount().is_empty());
        assert!(form.destination_amount().is_empty());
    }

    #[test]
    fn test_unknown_pair_converts_one_to_one() {
        let mut form = ExchangeForm::new();
        form.set_destination_currency("RWF");
        form.edit_origin_amount("250");
        assert_eq!(form.destination_amount(), "250.00");
    }

    #[test]
    fn test_round_trip_scenario() {
        let mut form = ExchangeForm::new();
        form.edit_origin_amount("100");
        assert_eq!(form.destination_amount(), "200000.00");

        form.edit_destination_amount("100000.00");
        assert_eq!(form.origin_amount(), "50.00");
    }
}
