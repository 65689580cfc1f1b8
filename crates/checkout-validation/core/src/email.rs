//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::string::char_len;

/// Longest address the checkout form accepts
pub const MAX_EMAIL_LENGTH: usize = 320;

/// `local@domain.tld`: word runs joined by single `.` or `-`, ending in a
/// 2-3 character top-level label.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_]+(?:[.-]?[A-Za-z0-9_]+)*@[A-Za-z0-9_]+(?:[.-]?[A-Za-z0-9_]+)*(?:\.[A-Za-z0-9_]{2,3})+$",
    )
    .unwrap()
});

/// Validates the conventional email shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Email rule: shape first, then length. The length message wins when both fail.
pub fn validate_email(value: &str) -> Result<(), String> {
    let mut result = Ok(());

    if !is_valid_email(value) {
        result = Err("Email is invalid".to_string());
    }
    if char_len(value) > MAX_EMAIL_LENGTH {
        result = Err(format!(
            "Email must not be longer than {} characters",
            MAX_EMAIL_LENGTH
        ));
    }

    result
}
