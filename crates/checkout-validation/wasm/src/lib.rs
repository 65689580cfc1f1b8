//! Checkout Validation WASM
//!
//! WebAssembly bindings for the checkout form validator.
//! Attaches the validator to a checkout form in the page and exposes the
//! field and card checks to JavaScript.

use std::cell::RefCell;
use std::rc::Rc;

use checkout_validation::card;
use checkout_validation::{
    FieldRole, FormHost, FormValidator, RuleContext, StandardCards, ValidatorConfig,
};
use wasm_bindgen::prelude::*;

mod browser;
mod listeners;

pub use browser::BrowserForm;

use listeners::{Listener, SharedValidator};

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Handle to an attached checkout form. Listeners stay registered until
/// `detach()` is called.
#[wasm_bindgen]
pub struct CheckoutForm {
    validator: SharedValidator,
    _listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl CheckoutForm {
    /// Removes every listener registered by `attachCheckoutForm`
    pub fn detach(self) {}

    /// Names of the fields currently showing an error
    #[wasm_bindgen(js_name = invalidFields)]
    pub fn invalid_fields(&self) -> Vec<String> {
        let Ok(v) = self.validator.try_borrow() else {
            return Vec::new();
        };
        let host = v.host();
        host.tracked_fields()
            .iter()
            .filter(|field| host.has_annotation(field))
            .filter_map(|field| host.name_of(field))
            .collect()
    }
}

fn parse_options(options: JsValue) -> Result<ValidatorConfig, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(ValidatorConfig::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse options: {}", e)))
}

/// Attach the validator to the checkout form in the current document
///
/// # Example (JavaScript)
/// ```javascript
/// const checkout = attachCheckoutForm({
///     submit: { confirmation_path: '/thank-you.html' },
/// });
/// ```
#[wasm_bindgen(js_name = attachCheckoutForm)]
pub fn attach_checkout_form(options: JsValue) -> Result<CheckoutForm, JsValue> {
    let config = parse_options(options)?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let to_js = |e: checkout_validation::FormError| JsValue::from_str(&e.to_string());

    let host = BrowserForm::attach(window, &config).map_err(to_js)?;
    let form = host.form().clone();
    let fields = host.tracked_fields();
    let category = host.category();
    let expiry = host
        .field_named(FieldRole::CardData.as_str())
        .ok_or_else(|| to_js(checkout_validation::FormError::missing_field("card_data")))?;

    let validator = FormValidator::new(host, config).map_err(to_js)?;
    let validator: SharedValidator = Rc::new(RefCell::new(validator));
    let listeners = listeners::register(&validator, &form, fields, category, expiry)?;

    Ok(CheckoutForm {
        validator,
        _listeners: listeners,
    })
}

/// Validate one field value by its `name`
///
/// Returns the error message, or `undefined` when the value passes or the
/// name has no rule.
///
/// # Example (JavaScript)
/// ```javascript
/// validateField('zip_code', '1234');              // "ZIP code must not be shorter than 5 symbols"
/// validateField('card_cvv', '123', '4111111111111111'); // undefined
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(name: &str, value: &str, card_number: Option<String>) -> Option<String> {
    let role = FieldRole::from_name(name)?;
    let cards = StandardCards::new();
    let ctx = RuleContext::new(card_number.as_deref().unwrap_or_default(), &cards);
    role.validate(value, &ctx).err()
}

/// Lowercase brand of a card number (`visa`, `mastercard`, ...)
#[wasm_bindgen(js_name = cardBrand)]
pub fn card_brand(number: &str) -> Option<String> {
    card::brand_from_card_number(number).map(card::brand_slug)
}

#[wasm_bindgen(js_name = isCardNumberValid)]
pub fn is_card_number_valid_js(number: &str) -> bool {
    card::is_card_number_valid(number)
}

#[wasm_bindgen(js_name = isExpirationDateValid)]
pub fn is_expiration_date_valid_js(month: &str, year: &str) -> bool {
    card::is_expiration_date_valid(month, year)
}

#[wasm_bindgen(js_name = isSecurityCodeValid)]
pub fn is_security_code_valid_js(card_number: &str, code: &str) -> bool {
    card::is_security_code_valid(card_number, code)
}
