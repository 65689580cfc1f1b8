//! Expiration date autoformat (`MM/YYYY`)
//!
//! The formatter keeps the raw value seen at the last keydown and uses it on
//! the following input event to tell typing forward from deleting.

pub const EXPIRY_SEPARATOR: char = '/';

/// Whether a keydown may reach the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDecision {
    Accept,
    Reject,
}

impl KeyDecision {
    pub fn is_rejected(self) -> bool {
        self == KeyDecision::Reject
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExpiryFormatter {
    previous: String,
}

impl ExpiryFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value captured at the last keydown
    pub fn previous(&self) -> &str {
        &self.previous
    }

    /// Records `current` as the previous value and filters the key: single
    /// ASCII digits and the keys in `pass_through` are accepted.
    pub fn key_down<S: AsRef<str>>(
        &mut self,
        current: &str,
        key: &str,
        pass_through: &[S],
    ) -> KeyDecision {
        self.previous = current.to_string();

        let is_digit = key.len() == 1 && key.bytes().all(|b| b.is_ascii_digit());
        if is_digit || pass_through.iter().any(|k| k.as_ref() == key) {
            KeyDecision::Accept
        } else {
            KeyDecision::Reject
        }
    }

    /// New field value after an input event, `None` when it stays as is.
    ///
    /// - `MM/` collapses back to `MM` (separator left dangling after a delete,
    ///   or typed by hand right after the month)
    /// - reaching two characters while typing forward appends the separator
    pub fn format(&self, value: &str) -> Option<String> {
        let chars: Vec<char> = value.chars().collect();

        if chars.len() == 3 && chars[2] == EXPIRY_SEPARATOR {
            return Some(chars[..2].iter().collect());
        }

        if chars.len() == 2 && self.previous.chars().count() < chars.len() {
            let mut formatted = value.to_string();
            formatted.push(EXPIRY_SEPARATOR);
            return Some(formatted);
        }

        None
    }
}
