//! Form input validators shared by every flow.
//!
//! Every validator returns a [`ValidationResult`] instead of an error: the
//! caller inspects `is_valid` and shows `error` inline, it never propagates.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::Receiver;

/// Outcome of a single field validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        ValidationResult {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(message: &str) -> Self {
        ValidationResult {
            is_valid: false,
            error: Some(message.to_string()),
        }
    }

    /// The error message, or an empty string when the field is valid.
    pub fn message(&self) -> &str {
        self.error.as_deref().unwrap_or("")
    }
}

/// Largest amount accepted by any money field.
pub const MAX_AMOUNT: f64 = 999_999_999.99;

lazy_static! {
    // E.164-ish: optional +, no leading zero, 2 to 15 digits total.
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[1-9]\d{1,14}$").unwrap();
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Validates amount input for positive numbers and proper decimal formatting.
pub fn validate_amount(amount: &str) -> ValidationResult {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return ValidationResult::invalid("Amount is required");
    }

    // At most one decimal point, checked before parsing so the message
    // stays specific ("12.34.56" is a format problem, not a number problem).
    let parts: Vec<&str> = trimmed.split('.').collect();
    if parts.len() > 2 {
        return ValidationResult::invalid("Invalid decimal format");
    }

    let value: f64 = match trimmed.parse() {
        Ok(v) => v,
        Err(_) => return ValidationResult::invalid("Please enter a valid number"),
    };
    if value.is_nan() {
        return ValidationResult::invalid("Please enter a valid number");
    }

    if value <= 0.0 {
        return ValidationResult::invalid("Amount must be greater than 0");
    }

    if parts.len() == 2 && parts[1].len() > 2 {
        return ValidationResult::invalid("Maximum 2 decimal places allowed");
    }

    if value > MAX_AMOUNT {
        return ValidationResult::invalid("Amount is too large");
    }

    ValidationResult::valid()
}

/// Validates currency selection. Any non-empty token passes; the rate table
/// decides what an unknown code is worth.
pub fn validate_currency(currency: &str) -> ValidationResult {
    if currency.trim().is_empty() {
        return ValidationResult::invalid("Please select a currency");
    }
    ValidationResult::valid()
}

/// Validates that two currencies are different for exchange.
pub fn validate_currency_exchange(from_currency: &str, to_currency: &str) -> ValidationResult {
    let from_validation = validate_currency(from_currency);
    if !from_validation.is_valid {
        return from_validation;
    }

    let to_validation = validate_currency(to_currency);
    if !to_validation.is_valid {
        return to_validation;
    }

    if from_currency == to_currency {
        return ValidationResult::invalid("Please select different currencies for exchange");
    }

    ValidationResult::valid()
}

/// Validates receiver selection for send money.
pub fn validate_receiver(receiver: Option<&Receiver>) -> ValidationResult {
    let receiver = match receiver {
        Some(r) => r,
        None => return ValidationResult::invalid("Please select a receiver"),
    };

    if receiver.name.trim().is_empty() {
        return ValidationResult::invalid("Receiver name is required");
    }

    if receiver.phone.trim().is_empty() {
        return ValidationResult::invalid("Receiver phone is required");
    }

    ValidationResult::valid()
}

/// Validates a phone number after stripping whitespace.
pub fn validate_phone_number(phone: &str) -> ValidationResult {
    if phone.trim().is_empty() {
        return ValidationResult::invalid("Phone number is required");
    }

    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    if !PHONE_REGEX.is_match(&compact) {
        return ValidationResult::invalid("Please enter a valid phone number");
    }

    ValidationResult::valid()
}

/// Validates an email address.
pub fn validate_email(email: &str) -> ValidationResult {
    if email.trim().is_empty() {
        return ValidationResult::invalid("Email is required");
    }

    if !EMAIL_REGEX.is_match(email.trim()) {
        return ValidationResult::invalid("Please enter a valid email address");
    }

    ValidationResult::valid()
}

/// Validates a one-time password: exactly six digits.
pub fn validate_otp(code: &str) -> ValidationResult {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return ValidationResult::invalid("OTP code is required");
    }

    if trimmed.len() != 6 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::invalid("Please enter the 6-digit code");
    }

    ValidationResult::valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receiver(name: &str, phone: &str) -> Receiver {
        Receiver {
            id: "1".to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn test_valid_amounts() {
        assert!(validate_amount("100").is_valid);
        assert!(validate_amount("0.01").is_valid);
        assert!(validate_amount("  42.5  ").is_valid);
        assert!(validate_amount("999999999.99").is_valid);
    }

    #[test]
    fn test_empty_amount_is_required() {
        let result = validate_amount("");
        assert!(!result.is_valid);
        assert_eq!(result.message(), "Amount is required");

        let result = validate_amount("   ");
        assert!(!result.is_valid);
        assert_eq!(result.message(), "Amount is required");
    }

    #[test]
    fn test_non_numeric_amount() {
        let result = validate_amount("abc");
        assert!(!result.is_valid);
        assert_eq!(result.message(), "Please enter a valid number");
    }

    #[test]
    fn test_negative_and_zero_amounts() {
        let result = validate_amount("-5");
        assert!(!result.is_valid);
        assert_eq!(result.message(), "Amount must be greater than 0");

        let result = validate_amount("0");
        assert!(!result.is_valid);
        assert_eq!(result.message(), "Amount must be greater than 0");
    }

    #[test]
    fn test_multiple_decimal_points() {
        let result = validate_amount("12.34.56");
        assert!(!result.is_valid);
        assert_eq!(result.message(), "Invalid decimal format");
    }

    #[test]
    fn test_too_many_decimal_places() {
        let result = validate_amount("12.345");
        assert!(!result.is_valid);
        assert_eq!(result.message(), "Maximum 2 decimal places allowed");
    }

    #[test]
    fn test_amount_too_large() {
        let result = validate_amount("1000000000");
        assert!(!result.is_valid);
        assert_eq!(result.message(), "Amount is too large");
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(!validate_amount("NaN").is_valid);
    }

    #[test]
    fn test_currency_validation() {
        assert!(validate_currency("USD").is_valid);
        assert!(validate_currency("XYZ").is_valid);
        assert!(!validate_currency("").is_valid);
        assert!(!validate_currency("  ").is_valid);
    }

    #[test]
    fn test_currency_exchange_rejects_same_pair() {
        let result = validate_currency_exchange("USD", "USD");
        assert!(!result.is_valid);
        assert_eq!(
            result.message(),
            "Please select different currencies for exchange"
        );
    }

    #[test]
    fn test_currency_exchange_accepts_distinct_pair() {
        assert!(validate_currency_exchange("USD", "CDF").is_valid);
        assert!(validate_currency_exchange("EUR", "GBP").is_valid);
    }

    #[test]
    fn test_currency_exchange_requires_both_sides() {
        assert!(!validate_currency_exchange("", "CDF").is_valid);
        assert!(!validate_currency_exchange("USD", " ").is_valid);
    }

    #[test]
    fn test_receiver_validation() {
        assert!(!validate_receiver(None).is_valid);

        let missing_name = receiver("", "1");
        let result = validate_receiver(Some(&missing_name));
        assert!(!result.is_valid);
        assert_eq!(result.message(), "Receiver name is required");

        let missing_phone = receiver("A", "");
        let result = validate_receiver(Some(&missing_phone));
        assert!(!result.is_valid);
        assert_eq!(result.message(), "Receiver phone is required");

        let ok = receiver("A", "1");
        assert!(validate_receiver(Some(&ok)).is_valid);
    }

    #[test]
    fn test_phone_number_validation() {
        assert!(validate_phone_number("+243 123 456 789").is_valid);
        assert!(validate_phone_number("12345678").is_valid);
        assert!(!validate_phone_number("").is_valid);
        assert!(!validate_phone_number("0123").is_valid);
        assert!(!validate_phone_number("+0 000").is_valid);
        assert!(!validate_phone_number("phone").is_valid);
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("john.doe@example.com").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("not-an-email").is_valid);
        assert!(!validate_email("a@b").is_valid);
        assert!(!validate_email("a b@c.com").is_valid);
    }

    #[test]
    fn test_otp_validation() {
        assert!(validate_otp("123456").is_valid);
        assert!(!validate_otp("").is_valid);
        assert!(!validate_otp("12345").is_valid);
        assert!(!validate_otp("1234567").is_valid);
        assert!(!validate_otp("12a456").is_valid);
    }
}
