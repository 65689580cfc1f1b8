//! String validation functions

/// Number of characters in `s`, the unit every length rule is measured in.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// True when `s` is non-empty and made of ASCII digits only
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Blank after trimming whitespace
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
