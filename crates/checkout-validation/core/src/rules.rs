//! Field roles and their validation rules
//!
//! Every checkout field is identified by its `name` attribute. Each role maps
//! to a pure [`Rule`], so rules can be exercised without any form around them.

use serde::{Deserialize, Serialize};

use crate::card::CardCapabilities;
use crate::string::char_len;
use crate::{email, phone, zip};

pub const MAX_NAME_LENGTH: usize = 50;
pub const MAX_ADDRESS_LENGTH: usize = 255;
pub const MAX_CITY_LENGTH: usize = 50;

/// `MM/YYYY`
pub const EXPIRY_LENGTH: usize = 7;

/// What a rule may look at besides the field's own value
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    /// Current value of the card number field, needed by the security code rule
    pub card_number: &'a str,
    pub cards: &'a dyn CardCapabilities,
}

impl<'a> RuleContext<'a> {
    pub fn new(card_number: &'a str, cards: &'a dyn CardCapabilities) -> Self {
        Self { card_number, cards }
    }
}

/// A rule returns the message to show, or `Ok(())`
pub type Rule = fn(&str, &RuleContext<'_>) -> Result<(), String>;

/// Semantic role of a checkout field, taken from its `name` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    Name,
    Email,
    Phone,
    Address,
    City,
    ZipCode,
    CardNumber,
    CardData,
    CardCvv,
}

impl FieldRole {
    pub const ALL: [FieldRole; 9] = [
        FieldRole::Name,
        FieldRole::Email,
        FieldRole::Phone,
        FieldRole::Address,
        FieldRole::City,
        FieldRole::ZipCode,
        FieldRole::CardNumber,
        FieldRole::CardData,
        FieldRole::CardCvv,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == name)
    }

    /// The `name` attribute carried by fields in this role
    pub fn as_str(self) -> &'static str {
        match self {
            FieldRole::Name => "name",
            FieldRole::Email => "email",
            FieldRole::Phone => "phone",
            FieldRole::Address => "address",
            FieldRole::City => "city",
            FieldRole::ZipCode => "zip_code",
            FieldRole::CardNumber => "card_number",
            FieldRole::CardData => "card_data",
            FieldRole::CardCvv => "card_cvv",
        }
    }

    pub fn rule(self) -> Rule {
        match self {
            FieldRole::Name => validate_name,
            FieldRole::Email => validate_email,
            FieldRole::Phone => validate_phone,
            FieldRole::Address => validate_address,
            FieldRole::City => validate_city,
            FieldRole::ZipCode => validate_zip_code,
            FieldRole::CardNumber => validate_card_number,
            FieldRole::CardData => validate_card_expiry,
            FieldRole::CardCvv => validate_card_cvv,
        }
    }

    pub fn validate(self, value: &str, ctx: &RuleContext<'_>) -> Result<(), String> {
        (self.rule())(value, ctx)
    }
}

impl std::fmt::Display for FieldRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn limit(value: &str, max: usize, message: String) -> Result<(), String> {
    if char_len(value) <= max {
        Ok(())
    } else {
        Err(message)
    }
}

fn validate_name(value: &str, _ctx: &RuleContext<'_>) -> Result<(), String> {
    limit(
        value,
        MAX_NAME_LENGTH,
        format!("Name must not be longer than {} characters", MAX_NAME_LENGTH),
    )
}

fn validate_email(value: &str, _ctx: &RuleContext<'_>) -> Result<(), String> {
    email::validate_email(value)
}

fn validate_phone(value: &str, _ctx: &RuleContext<'_>) -> Result<(), String> {
    phone::validate_phone(value)
}

fn validate_address(value: &str, _ctx: &RuleContext<'_>) -> Result<(), String> {
    limit(
        value,
        MAX_ADDRESS_LENGTH,
        format!(
            "Address must not be longer than {} characters",
            MAX_ADDRESS_LENGTH
        ),
    )
}

fn validate_city(value: &str, _ctx: &RuleContext<'_>) -> Result<(), String> {
    limit(
        value,
        MAX_CITY_LENGTH,
        format!(
            "City name must not be longer than {} characters",
            MAX_CITY_LENGTH
        ),
    )
}

fn validate_zip_code(value: &str, _ctx: &RuleContext<'_>) -> Result<(), String> {
    zip::validate_zip_code(value)
}

fn validate_card_number(value: &str, ctx: &RuleContext<'_>) -> Result<(), String> {
    if ctx.cards.is_card_number_valid(value) {
        Ok(())
    } else {
        Err("Invalid card number".to_string())
    }
}

/// Splits `MM/YYYY` into month (chars 0-1) and year (chars 3-6). Shorter
/// input yields shorter parts.
pub fn split_expiry(value: &str) -> (String, String) {
    let month = value.chars().take(2).collect();
    let year = value.chars().skip(3).take(4).collect();
    (month, year)
}

fn validate_card_expiry(value: &str, ctx: &RuleContext<'_>) -> Result<(), String> {
    let mut result = Ok(());

    if char_len(value) != EXPIRY_LENGTH {
        result = Err("Card expiration date should be 6 digits".to_string());
    }

    let (month, year) = split_expiry(value);
    if !ctx.cards.is_expiration_date_valid(&month, &year) {
        result = Err("Card expiration date is invalid".to_string());
    }

    result
}

fn validate_card_cvv(value: &str, ctx: &RuleContext<'_>) -> Result<(), String> {
    if ctx.cards.is_security_code_valid(ctx.card_number, value) {
        Ok(())
    } else {
        Err("CVC is invalid".to_string())
    }
}
