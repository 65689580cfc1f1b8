// File: src/config.rs
// Purpose: Validator configuration (selectors, class names, submit target)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Validator configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub selectors: SelectorConfig,

    #[serde(default)]
    pub annotation: AnnotationConfig,

    #[serde(default)]
    pub brand: BrandConfig,

    #[serde(default)]
    pub submit: SubmitConfig,

    #[serde(default)]
    pub expiry: ExpiryConfig,
}

/// CSS selectors used to find the form parts in a document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectorConfig {
    #[serde(default = "default_form_selector")]
    pub form: String,

    /// Tracked fields, looked up inside the form
    #[serde(default = "default_field_selector")]
    pub field: String,

    /// Category selector, looked up inside the form
    #[serde(default = "default_category_selector")]
    pub category: String,

    /// Order summary table, looked up in the whole document
    #[serde(default = "default_summary_selector")]
    pub summary: String,
}

/// Inline error message element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnnotationConfig {
    /// Full `class` attribute of a new annotation
    #[serde(default = "default_annotation_class")]
    pub class: String,

    /// Class used to find an existing annotation
    #[serde(default = "default_annotation_marker")]
    pub marker: String,

    /// Message for required fields left empty
    #[serde(default = "default_required_message")]
    pub default_message: String,
}

/// Card brand icon classes on the card number field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandConfig {
    /// Every class containing this token is treated as a brand icon
    #[serde(default = "default_brand_prefix")]
    pub class_prefix: String,

    /// Brand slugs that have an icon
    #[serde(default = "default_brand_icons")]
    pub icons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitConfig {
    /// Path appended to the page origin after a successful submit
    #[serde(default = "default_confirmation_path")]
    pub confirmation_path: String,

    /// Class added to the summary table on success
    #[serde(default = "default_hidden_class")]
    pub hidden_class: String,

    /// Run every field rule again on submit, not only the required check
    #[serde(default = "default_false")]
    pub revalidate: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpiryConfig {
    /// Non-digit keys the expiration field lets through
    #[serde(default = "default_pass_through_keys")]
    pub pass_through_keys: Vec<String>,
}

// Default values
fn default_form_selector() -> String {
    ".js_form".to_string()
}

fn default_field_selector() -> String {
    ".js_input".to_string()
}

fn default_category_selector() -> String {
    ".js_select".to_string()
}

fn default_summary_selector() -> String {
    ".js_product-table".to_string()
}

fn default_annotation_class() -> String {
    "error-span js_error-span".to_string()
}

fn default_annotation_marker() -> String {
    "js_error-span".to_string()
}

fn default_required_message() -> String {
    "Please fill out the field above".to_string()
}

fn default_brand_prefix() -> String {
    "js-card".to_string()
}

fn default_brand_icons() -> Vec<String> {
    vec![
        "mastercard".to_string(),
        "visa".to_string(),
        "discover".to_string(),
    ]
}

fn default_confirmation_path() -> String {
    "/thank-you.html".to_string()
}

fn default_hidden_class() -> String {
    "hidden".to_string()
}

fn default_pass_through_keys() -> Vec<String> {
    vec!["Backspace".to_string()]
}

fn default_false() -> bool {
    false
}

// Default implementations
impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            form: default_form_selector(),
            field: default_field_selector(),
            category: default_category_selector(),
            summary: default_summary_selector(),
        }
    }
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            class: default_annotation_class(),
            marker: default_annotation_marker(),
            default_message: default_required_message(),
        }
    }
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            class_prefix: default_brand_prefix(),
            icons: default_brand_icons(),
        }
    }
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            confirmation_path: default_confirmation_path(),
            hidden_class: default_hidden_class(),
            revalidate: false,
        }
    }
}

impl Default for ExpiryConfig {
    fn default() -> Self {
        Self {
            pass_through_keys: default_pass_through_keys(),
        }
    }
}

impl BrandConfig {
    /// Icon class for a brand slug, `None` when the brand has no icon
    pub fn icon_class(&self, slug: &str) -> Option<String> {
        self.icons
            .iter()
            .any(|icon| icon.eq_ignore_ascii_case(slug))
            .then(|| format!("{}_{}", self.class_prefix, slug.to_ascii_lowercase()))
    }
}

impl SubmitConfig {
    /// Confirmation page URL for a page origin such as `https://shop.test`
    pub fn confirmation_url(&self, origin: &str) -> String {
        let origin = origin.trim_end_matches('/');
        if self.confirmation_path.starts_with('/') {
            format!("{}{}", origin, self.confirmation_path)
        } else {
            format!("{}/{}", origin, self.confirmation_path)
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Parse configuration from TOML text. Empty text yields the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ValidatorConfig = toml::from_str(content)?;
        Ok(config)
    }
}
