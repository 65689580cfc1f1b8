//! Checkout form validator
//!
//! Reacts to the form's events: clears annotations on focus, checks a field
//! when focus leaves it, autoformats the expiration date and gates submission.
//! All state lives in the instance, so several forms can be validated side by
//! side.

use tracing::{debug, info};

use crate::autoformat::{ExpiryFormatter, KeyDecision};
use crate::card::{brand_slug, CardCapabilities, StandardCards};
use crate::config::ValidatorConfig;
use crate::error::FormError;
use crate::host::FormHost;
use crate::rules::{FieldRole, RuleContext};
use crate::string::is_blank;

/// Result of a submit event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field shows an annotation; nothing happened
    Blocked { fields: Vec<String> },
    /// Every field passed; the page was sent to `url`
    Redirected { url: String },
}

impl SubmitOutcome {
    pub fn is_redirected(&self) -> bool {
        matches!(self, SubmitOutcome::Redirected { .. })
    }
}

pub struct FormValidator<H: FormHost, C = StandardCards> {
    host: H,
    cards: C,
    config: ValidatorConfig,
    fields: Vec<H::Field>,
    card_number: H::Field,
    expiry: H::Field,
    formatter: ExpiryFormatter,
}

impl<H: FormHost> FormValidator<H, StandardCards> {
    pub fn new(host: H, config: ValidatorConfig) -> Result<Self, FormError> {
        Self::with_cards(host, config, StandardCards::new())
    }
}

impl<H: FormHost, C: CardCapabilities> FormValidator<H, C> {
    /// Snapshots the tracked fields and resolves the card number and
    /// expiration fields, which must exist.
    pub fn with_cards(host: H, config: ValidatorConfig, cards: C) -> Result<Self, FormError> {
        let fields = host.tracked_fields();
        let card_number = host
            .field_named(FieldRole::CardNumber.as_str())
            .ok_or_else(|| FormError::missing_field(FieldRole::CardNumber.as_str()))?;
        let expiry = host
            .field_named(FieldRole::CardData.as_str())
            .ok_or_else(|| FormError::missing_field(FieldRole::CardData.as_str()))?;

        debug!(fields = fields.len(), "checkout validator attached");

        Ok(Self {
            host,
            cards,
            config,
            fields,
            card_number,
            expiry,
            formatter: ExpiryFormatter::new(),
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Field focused: drop its annotation so the user starts clean
    pub fn on_focus(&mut self, field: &H::Field) {
        self.host.clear_annotation(field);
    }

    /// Category selector changed: same as focus
    pub fn on_category_change(&mut self, field: &H::Field) {
        self.host.clear_annotation(field);
    }

    /// Focus left a field: run its rule and show or clear the annotation.
    /// Returns the failure message, `None` when the field passed or has no rule.
    pub fn on_blur(&mut self, field: &H::Field) -> Option<String> {
        let name = self.host.name_of(field)?;
        let role = FieldRole::from_name(&name)?;
        let value = self.host.value_of(field);

        match self.check(role, &value) {
            Ok(()) => {
                if role == FieldRole::CardNumber {
                    self.show_brand(&value);
                }
                self.host.clear_annotation(field);
                None
            }
            Err(message) => {
                if role == FieldRole::CardNumber {
                    self.clear_brand();
                }
                debug!(field = %name, %message, "field failed validation");
                self.host.annotate(field, &message);
                Some(message)
            }
        }
    }

    /// Keydown in the expiration field. The host must cancel the key when
    /// this returns [`KeyDecision::Reject`].
    pub fn on_expiry_keydown(&mut self, key: &str) -> KeyDecision {
        let current = self.host.value_of(&self.expiry);
        self.formatter
            .key_down(&current, key, &self.config.expiry.pass_through_keys)
    }

    /// Input in the expiration field: moves the value toward `MM/YYYY`
    pub fn on_expiry_input(&mut self) {
        let value = self.host.value_of(&self.expiry);
        if let Some(formatted) = self.formatter.format(&value) {
            self.host.set_value(&self.expiry, &formatted);
        }
    }

    /// Submit: annotate empty required fields, then either block or send the
    /// page to the confirmation URL.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        let default_message = self.config.annotation.default_message.clone();

        for field in self.fields.clone() {
            if self.host.is_placeholder_selected(&field) || is_blank(&self.host.value_of(&field)) {
                self.host.annotate(&field, &default_message);
            } else if self.config.submit.revalidate {
                self.on_blur(&field);
            }
        }

        let blocked: Vec<String> = self
            .fields
            .iter()
            .filter(|field| self.host.has_annotation(field))
            .map(|field| self.host.name_of(field).unwrap_or_default())
            .collect();

        if !blocked.is_empty() {
            debug!(fields = ?blocked, "checkout submission blocked");
            return SubmitOutcome::Blocked { fields: blocked };
        }

        let url = self.config.submit.confirmation_url(&self.host.origin());
        self.host.clear_persisted_state();
        self.host.navigate(&url);
        self.host.hide_summary(&self.config.submit.hidden_class);

        info!(%url, "checkout form submitted");
        SubmitOutcome::Redirected { url }
    }

    fn check(&self, role: FieldRole, value: &str) -> Result<(), String> {
        let card_number = self.host.value_of(&self.card_number);
        let ctx = RuleContext::new(&card_number, &self.cards);
        role.validate(value, &ctx)
    }

    fn show_brand(&mut self, number: &str) {
        let class = self
            .cards
            .brand_from_card_number(number)
            .and_then(|brand| self.config.brand.icon_class(&brand_slug(brand)));

        debug!(class = ?class, "card brand indicator");
        self.host.replace_prefixed_class(
            &self.card_number,
            &self.config.brand.class_prefix,
            class.as_deref(),
        );
    }

    fn clear_brand(&mut self) {
        self.host
            .replace_prefixed_class(&self.card_number, &self.config.brand.class_prefix, None);
    }
}
