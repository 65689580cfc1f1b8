//! Credit card checks used by the card fields
//!
//! Number validity, brand lookup, expiration date and security code, backed
//! by `cc_validator`. The validator consumes them through [`CardCapabilities`]
//! so a different card library can be plugged in.

pub mod cvv;
pub mod expiry;

use chrono::NaiveDate;

pub use cc_validator::CardBrand;
pub use cvv::is_security_code_valid;
pub use expiry::{is_expiration_date_valid, is_expiration_date_valid_on};

/// Lowercase identifier of a brand, used to build brand icon class names
/// (`Visa` -> `visa`, `Diners Club` -> `dinersclub`)
pub fn brand_slug(brand: CardBrand) -> String {
    brand
        .name()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Brand of a valid card number. Spaces and dashes are ignored.
pub fn brand_from_card_number(number: &str) -> Option<CardBrand> {
    cc_validator::validate(number).ok().map(|card| card.brand())
}

/// 12-19 digits, passing Luhn and belonging to a known brand
pub fn is_card_number_valid(number: &str) -> bool {
    cc_validator::is_valid(number)
}

/// Card checks the form validator depends on
pub trait CardCapabilities {
    fn is_card_number_valid(&self, number: &str) -> bool;

    fn is_expiration_date_valid(&self, month: &str, year: &str) -> bool;

    fn is_security_code_valid(&self, card_number: &str, code: &str) -> bool;

    fn brand_from_card_number(&self, number: &str) -> Option<CardBrand>;
}

/// The built-in card checks. Expiration compares against the local clock
/// unless a date is pinned.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCards {
    today: Option<NaiveDate>,
}

impl StandardCards {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate expiration dates as if today were `today`
    pub fn pinned(today: NaiveDate) -> Self {
        Self { today: Some(today) }
    }
}

impl CardCapabilities for StandardCards {
    fn is_card_number_valid(&self, number: &str) -> bool {
        is_card_number_valid(number)
    }

    fn is_expiration_date_valid(&self, month: &str, year: &str) -> bool {
        match self.today {
            Some(today) => is_expiration_date_valid_on(month, year, today),
            None => is_expiration_date_valid(month, year),
        }
    }

    fn is_security_code_valid(&self, card_number: &str, code: &str) -> bool {
        is_security_code_valid(card_number, code)
    }

    fn brand_from_card_number(&self, number: &str) -> Option<CardBrand> {
        brand_from_card_number(number)
    }
}
