//! ZIP code validation

use crate::string::{char_len, is_digits};

pub const MIN_ZIP_LENGTH: usize = 5;
pub const MAX_ZIP_LENGTH: usize = 9;

/// ZIP rule. Every check runs in order and the last failure is reported, so
/// a length problem hides a non-digit one.
pub fn validate_zip_code(value: &str) -> Result<(), String> {
    let mut result = Ok(());
    let len = char_len(value);

    if !is_digits(value) {
        result = Err("ZIP code should contain only numbers".to_string());
    }
    if len < MIN_ZIP_LENGTH {
        result = Err(format!(
            "ZIP code must not be shorter than {} symbols",
            MIN_ZIP_LENGTH
        ));
    }
    if len > MAX_ZIP_LENGTH {
        result = Err(format!(
            "ZIP code must not be longer than {} symbols",
            MAX_ZIP_LENGTH
        ));
    }

    result
}
