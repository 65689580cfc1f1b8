//! The document surface the validator drives
//!
//! A host owns the form's fields and the page around it. The browser host
//! lives in the WASM crate; [`crate::MemoryForm`] keeps everything in memory.

pub trait FormHost {
    /// Handle to one field
    type Field: Clone;

    /// Fields taking part in required checks, in document order
    fn tracked_fields(&self) -> Vec<Self::Field>;

    /// First field whose `name` attribute equals `name`
    fn field_named(&self, name: &str) -> Option<Self::Field>;

    fn name_of(&self, field: &Self::Field) -> Option<String>;

    fn value_of(&self, field: &Self::Field) -> String;

    fn set_value(&mut self, field: &Self::Field, value: &str);

    /// True for a selection control still on its placeholder (first) option
    fn is_placeholder_selected(&self, field: &Self::Field) -> bool;

    fn has_annotation(&self, field: &Self::Field) -> bool;

    /// Shows `message` next to the field, replacing any existing annotation
    fn annotate(&mut self, field: &Self::Field, message: &str);

    fn clear_annotation(&mut self, field: &Self::Field);

    /// Removes every class containing `prefix`, then adds `class` if given
    fn replace_prefixed_class(&mut self, field: &Self::Field, prefix: &str, class: Option<&str>);

    /// Adds `class` to the order summary table, if the page has one
    fn hide_summary(&mut self, class: &str);

    /// Clears locally persisted state (local storage in a browser)
    fn clear_persisted_state(&mut self);

    /// Origin of the current page, e.g. `https://shop.test`
    fn origin(&self) -> String;

    fn navigate(&mut self, url: &str);
}
