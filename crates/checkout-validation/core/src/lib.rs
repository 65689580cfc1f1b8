//! Checkout Validation Core
//!
//! Field rules, card checks and the form validator for the checkout form.
//! The validator drives any [`FormHost`]: the WASM crate provides a browser
//! host, [`MemoryForm`] keeps everything in memory for tests.

pub mod autoformat;
pub mod card;
pub mod config;
pub mod email;
pub mod error;
pub mod host;
pub mod memory;
pub mod phone;
pub mod rules;
pub mod string;
pub mod validator;
pub mod zip;

pub use autoformat::{ExpiryFormatter, KeyDecision};
pub use card::{CardBrand, CardCapabilities, StandardCards};
pub use config::ValidatorConfig;
pub use error::FormError;
pub use host::FormHost;
pub use memory::MemoryForm;
pub use rules::{FieldRole, Rule, RuleContext};
pub use validator::{FormValidator, SubmitOutcome};
