//! Phone number validation

use once_cell::sync::Lazy;
use regex::Regex;

// Optional leading '+', 9 to 11 characters in total
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\+[0-9]{8,10}|[0-9]{9,11})$").unwrap());

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

pub fn validate_phone(value: &str) -> Result<(), String> {
    if is_valid_phone(value) {
        Ok(())
    } else {
        Err("Phone must be 9 to 11 digits.".to_string())
    }
}
