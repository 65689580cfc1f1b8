//! Errors raised while wiring a validator to a form

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// No element matched a configured selector
    #[error("no element matches selector `{selector}`")]
    MissingElement { selector: String },

    /// The form has no field with this `name`
    #[error("form has no field named `{name}`")]
    MissingField { name: String },

    /// A DOM call failed or returned an element of the wrong kind
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl FormError {
    pub fn missing_element(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }

    pub fn missing_field(name: impl Into<String>) -> Self {
        Self::MissingField { name: name.into() }
    }
}
