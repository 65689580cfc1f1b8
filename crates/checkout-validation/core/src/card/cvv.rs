//! Security code (CVV/CVC) checks

use cc_validator::cvv;

/// The code must match the length the card's brand prints. For an
/// unrecognized card number both 3 and 4 digit codes pass.
pub fn is_security_code_valid(card_number: &str, code: &str) -> bool {
    match super::brand_from_card_number(card_number) {
        Some(brand) => cvv::validate_cvv_for_brand(code, brand).is_ok(),
        None => cvv::validate_cvv(code).is_ok(),
    }
}
