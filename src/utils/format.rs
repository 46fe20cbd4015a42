//! Amount and display formatting helpers.

use crate::models::currency;

/// Formats raw amount input into a well-formed decimal string: strips
/// everything but digits and `.`, keeps only the first decimal point and
/// truncates the fraction to 2 digits. Idempotent.
pub fn format_amount_input(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut parts = cleaned.split('.');
    let whole = parts.next().unwrap_or("").to_string();
    let rest: Vec<&str> = parts.collect();
    if rest.is_empty() {
        return whole;
    }

    let mut fraction: String = rest.concat();
    fraction.truncate(2);
    format!("{}.{}", whole, fraction)
}

/// Rounds to 2 decimal places, half away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Renders an amount with thousands grouping and the currency attached the
/// way the app displays it: known symbols prefix (`$1,500.44`), everything
/// else gets the code as a suffix (`3,000,880.00 CDF`).
pub fn format_money(amount: f64, code: &str) -> String {
    let cents = round_to_cents(amount.abs());
    let whole = cents.trunc() as u64;
    let fraction = ((cents - cents.trunc()) * 100.0).round() as u64;
    let sign = if amount < 0.0 { "-" } else { "" };
    let body = format!("{}.{:02}", group_thousands(whole), fraction);

    match currency::find(code).and_then(|c| c.symbol) {
        Some(symbol) => format!("{}{}{}", sign, symbol, body),
        None => format!("{}{} {}", sign, body, code),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Masks a card number down to its last four digits.
pub fn mask_card_number(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(|c| c.is_ascii_digit()).collect();
    let last_four: String = digits
        .iter()
        .skip(digits.len().saturating_sub(4))
        .collect();
    format!("**** **** **** {}", last_four)
}

/// Uppercase initials for an avatar, one letter per name part.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_input_strips_non_numeric() {
        assert_eq!(format_amount_input("ab12.345"), "12.34");
        assert_eq!(format_amount_input("$1,000"), "1000");
    }

    #[test]
    fn test_format_amount_input_collapses_decimal_points() {
        assert_eq!(format_amount_input("12.34.56"), "12.34");
        assert_eq!(format_amount_input("1.2.3.4"), "1.23");
    }

    #[test]
    fn test_format_amount_input_truncates_fraction() {
        assert_eq!(format_amount_input("12.345"), "12.34");
        assert_eq!(format_amount_input("0.999"), "0.99");
    }

    #[test]
    fn test_format_amount_input_is_idempotent() {
        for raw in ["12.34.56", "ab12.345", "100", "12.", ".", "", "0.5"] {
            let once = format_amount_input(raw);
            assert_eq!(format_amount_input(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(1.006), 1.01);
        assert_eq!(round_to_cents(49.999), 50.0);
        assert_eq!(round_to_cents(200000.0), 200000.0);
    }

    #[test]
    fn test_format_money_symbol_and_code() {
        assert_eq!(format_money(1500.44, "USD"), "$1,500.44");
        assert_eq!(format_money(3000880.0, "CDF"), "3,000,880.00 CDF");
        assert_eq!(format_money(-45.99, "USD"), "-$45.99");
        assert_eq!(format_money(12.0, "XYZ"), "12.00 XYZ");
    }

    #[test]
    fn test_mask_card_number() {
        assert_eq!(
            mask_card_number("4532 1234 5678 9012"),
            "**** **** **** 9012"
        );
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("jane smith"), "JS");
        assert_eq!(initials("Plato"), "P");
    }
}
