//! In-memory form host
//!
//! Models just enough of a checkout page for the validator: labelled fields,
//! a summary table, local storage and the current location.

use std::collections::{BTreeMap, BTreeSet};

use crate::host::FormHost;

/// Index of a field in [`MemoryForm`]
pub type FieldId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Input,
    Select { options: Vec<String>, selected: usize },
}

#[derive(Debug, Clone)]
pub struct MemoryField {
    pub name: Option<String>,
    pub control: Control,
    pub value: String,
    /// Wrapped in a `label`; annotations need one
    pub labelled: bool,
    pub tracked: bool,
    pub annotation: Option<String>,
    pub classes: BTreeSet<String>,
}

impl MemoryField {
    fn new(name: Option<&str>, control: Control) -> Self {
        let value = match &control {
            Control::Input => String::new(),
            Control::Select { options, selected } => {
                options.get(*selected).cloned().unwrap_or_default()
            }
        };

        Self {
            name: name.map(str::to_string),
            control,
            value,
            labelled: true,
            tracked: true,
            annotation: None,
            classes: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MemoryForm {
    origin: String,
    fields: Vec<MemoryField>,
    summary_classes: Option<BTreeSet<String>>,
    storage: BTreeMap<String, String>,
    location: Option<String>,
}

impl MemoryForm {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            fields: Vec::new(),
            summary_classes: Some(BTreeSet::new()),
            storage: BTreeMap::new(),
            location: None,
        }
    }

    /// The full checkout form: contact and shipping fields, a category
    /// selector with a placeholder and the three card fields.
    pub fn checkout(origin: impl Into<String>) -> Self {
        Self::new(origin)
            .with_input("name")
            .with_input("email")
            .with_input("phone")
            .with_input("address")
            .with_input("city")
            .with_input("zip_code")
            .with_select("category", &["Choose a category", "Books", "Music"])
            .with_input("card_number")
            .with_input("card_data")
            .with_input("card_cvv")
    }

    pub fn with_input(mut self, name: &str) -> Self {
        self.fields.push(MemoryField::new(Some(name), Control::Input));
        self
    }

    /// Adds a select whose first option is the placeholder
    pub fn with_select(mut self, name: &str, options: &[&str]) -> Self {
        let control = Control::Select {
            options: options.iter().map(|o| o.to_string()).collect(),
            selected: 0,
        };
        self.fields.push(MemoryField::new(Some(name), control));
        self
    }

    /// Adds a field outside the tracked set (e.g. a newsletter checkbox)
    pub fn with_untracked_input(mut self, name: &str) -> Self {
        let mut field = MemoryField::new(Some(name), Control::Input);
        field.tracked = false;
        self.fields.push(field);
        self
    }

    pub fn without_summary(mut self) -> Self {
        self.summary_classes = None;
        self
    }

    pub fn field(&self, id: FieldId) -> Option<&MemoryField> {
        self.fields.get(id)
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut MemoryField> {
        self.fields.get_mut(id)
    }

    pub fn id_of(&self, name: &str) -> Option<FieldId> {
        self.fields
            .iter()
            .position(|f| f.name.as_deref() == Some(name))
    }

    /// Replaces a field's value, as typing or pasting would
    pub fn type_into(&mut self, name: &str, value: &str) {
        if let Some(field) = self.id_of(name).and_then(|id| self.fields.get_mut(id)) {
            field.value = value.to_string();
        }
    }

    /// Selects an option by index
    pub fn select(&mut self, name: &str, index: usize) {
        if let Some(field) = self.id_of(name).and_then(|id| self.fields.get_mut(id)) {
            if let Control::Select { options, selected } = &mut field.control {
                if let Some(option) = options.get(index) {
                    *selected = index;
                    field.value = option.clone();
                }
            }
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.id_of(name)
            .and_then(|id| self.fields.get(id))
            .map(|f| f.value.as_str())
    }

    pub fn annotation(&self, name: &str) -> Option<&str> {
        self.id_of(name)
            .and_then(|id| self.fields.get(id))
            .and_then(|f| f.annotation.as_deref())
    }

    /// Names of every field currently showing an annotation
    pub fn annotated_fields(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| f.annotation.is_some())
            .filter_map(|f| f.name.clone())
            .collect()
    }

    pub fn classes(&self, name: &str) -> Vec<String> {
        self.id_of(name)
            .and_then(|id| self.fields.get(id))
            .map(|f| f.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn add_class(&mut self, name: &str, class: &str) {
        if let Some(field) = self.id_of(name).and_then(|id| self.fields.get_mut(id)) {
            field.classes.insert(class.to_string());
        }
    }

    pub fn summary_classes(&self) -> Option<&BTreeSet<String>> {
        self.summary_classes.as_ref()
    }

    pub fn storage(&self) -> &BTreeMap<String, String> {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.storage
    }

    /// URL the page navigated to, if any
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl FormHost for MemoryForm {
    type Field = FieldId;

    fn tracked_fields(&self) -> Vec<FieldId> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.tracked)
            .map(|(id, _)| id)
            .collect()
    }

    fn field_named(&self, name: &str) -> Option<FieldId> {
        self.id_of(name)
    }

    fn name_of(&self, field: &FieldId) -> Option<String> {
        self.fields.get(*field).and_then(|f| f.name.clone())
    }

    fn value_of(&self, field: &FieldId) -> String {
        self.fields
            .get(*field)
            .map(|f| f.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&mut self, field: &FieldId, value: &str) {
        if let Some(f) = self.fields.get_mut(*field) {
            f.value = value.to_string();
        }
    }

    fn is_placeholder_selected(&self, field: &FieldId) -> bool {
        matches!(
            self.fields.get(*field).map(|f| &f.control),
            Some(Control::Select { selected: 0, .. })
        )
    }

    fn has_annotation(&self, field: &FieldId) -> bool {
        self.fields
            .get(*field)
            .map_or(false, |f| f.annotation.is_some())
    }

    fn annotate(&mut self, field: &FieldId, message: &str) {
        if let Some(f) = self.fields.get_mut(*field) {
            if f.labelled {
                f.annotation = Some(message.to_string());
            }
        }
    }

    fn clear_annotation(&mut self, field: &FieldId) {
        if let Some(f) = self.fields.get_mut(*field) {
            f.annotation = None;
        }
    }

    fn replace_prefixed_class(&mut self, field: &FieldId, prefix: &str, class: Option<&str>) {
        if let Some(f) = self.fields.get_mut(*field) {
            f.classes.retain(|c| !c.contains(prefix));
            if let Some(class) = class {
                f.classes.insert(class.to_string());
            }
        }
    }

    fn hide_summary(&mut self, class: &str) {
        if let Some(classes) = self.summary_classes.as_mut() {
            classes.insert(class.to_string());
        }
    }

    fn clear_persisted_state(&mut self) {
        self.storage.clear();
    }

    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn navigate(&mut self, url: &str) {
        self.location = Some(url.to_string());
    }
}
