//! Browser form host backed by `web-sys`
//!
//! DOM calls that fail inside an event handler are reported to the console
//! and otherwise ignored; a broken annotation must not break the page.

use checkout_validation::config::{AnnotationConfig, SelectorConfig};
use checkout_validation::{FormError, FormHost, ValidatorConfig};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    console, Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, Window,
};

pub(crate) fn dom_error(err: JsValue) -> FormError {
    FormError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

pub(crate) fn warn(context: &str, err: JsValue) {
    console::warn_2(&JsValue::from_str(context), &err);
}

pub struct BrowserForm {
    window: Window,
    document: Document,
    form: HtmlFormElement,
    fields: Vec<HtmlElement>,
    selectors: SelectorConfig,
    annotation: AnnotationConfig,
}

impl BrowserForm {
    /// Finds the form and its tracked fields in the window's document
    pub fn attach(window: Window, config: &ValidatorConfig) -> Result<Self, FormError> {
        let document = window
            .document()
            .ok_or_else(|| FormError::Dom("window has no document".to_string()))?;

        let form = document
            .query_selector(&config.selectors.form)
            .map_err(dom_error)?
            .ok_or_else(|| FormError::missing_element(&config.selectors.form))?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| {
                FormError::Dom(format!("`{}` is not a form", config.selectors.form))
            })?;

        let list = form
            .query_selector_all(&config.selectors.field)
            .map_err(dom_error)?;
        let fields = (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect();

        Ok(Self {
            window,
            document,
            form,
            fields,
            selectors: config.selectors.clone(),
            annotation: config.annotation.clone(),
        })
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    /// The category selector, if the form has one
    pub fn category(&self) -> Option<HtmlElement> {
        self.form
            .query_selector(&self.selectors.category)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn label_of(&self, field: &HtmlElement) -> Option<Element> {
        field.closest("label").ok().flatten()
    }

    fn existing_annotation(&self, label: &Element) -> Option<Element> {
        label
            .query_selector(&format!(".{}", self.annotation.marker))
            .ok()
            .flatten()
    }

    fn append_annotation(&self, label: &Element, message: &str) -> Result<(), JsValue> {
        let span = self.document.create_element("span")?;
        span.set_attribute("class", &self.annotation.class)?;
        span.set_text_content(Some(message));
        label.append_child(&span)?;
        Ok(())
    }
}

impl FormHost for BrowserForm {
    type Field = HtmlElement;

    fn tracked_fields(&self) -> Vec<HtmlElement> {
        self.fields.clone()
    }

    fn field_named(&self, name: &str) -> Option<HtmlElement> {
        self.form
            .query_selector(&format!("[name=\"{}\"]", name))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn name_of(&self, field: &HtmlElement) -> Option<String> {
        field.get_attribute("name")
    }

    fn value_of(&self, field: &HtmlElement) -> String {
        if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn set_value(&mut self, field: &HtmlElement, value: &str) {
        if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn is_placeholder_selected(&self, field: &HtmlElement) -> bool {
        field
            .dyn_ref::<HtmlSelectElement>()
            .map_or(false, |select| select.selected_index() == 0)
    }

    fn has_annotation(&self, field: &HtmlElement) -> bool {
        self.label_of(field)
            .and_then(|label| self.existing_annotation(&label))
            .is_some()
    }

    fn annotate(&mut self, field: &HtmlElement, message: &str) {
        // annotations live inside the label; an unlabelled field shows nothing
        let Some(label) = self.label_of(field) else {
            return;
        };

        if let Some(old) = self.existing_annotation(&label) {
            old.remove();
        }
        if let Err(err) = self.append_annotation(&label, message) {
            warn("checkout: failed to show field error", err);
        }
    }

    fn clear_annotation(&mut self, field: &HtmlElement) {
        if let Some(old) = self
            .label_of(field)
            .and_then(|label| self.existing_annotation(&label))
        {
            old.remove();
        }
    }

    fn replace_prefixed_class(&mut self, field: &HtmlElement, prefix: &str, class: Option<&str>) {
        let list = field.class_list();
        let stale: Vec<String> = (0..list.length())
            .filter_map(|i| list.item(i))
            .filter(|token| token.contains(prefix))
            .collect();

        for token in stale {
            if let Err(err) = list.remove_1(&token) {
                warn("checkout: failed to remove card class", err);
            }
        }
        if let Some(class) = class {
            if let Err(err) = list.add_1(class) {
                warn("checkout: failed to add card class", err);
            }
        }
    }

    fn hide_summary(&mut self, class: &str) {
        let summary = self
            .document
            .query_selector(&self.selectors.summary)
            .ok()
            .flatten();
        if let Some(summary) = summary {
            if let Err(err) = summary.class_list().add_1(class) {
                warn("checkout: failed to hide summary", err);
            }
        }
    }

    fn clear_persisted_state(&mut self) {
        match self.window.local_storage() {
            Ok(Some(storage)) => {
                if let Err(err) = storage.clear() {
                    warn("checkout: failed to clear local storage", err);
                }
            }
            Ok(None) => {}
            Err(err) => warn("checkout: local storage unavailable", err),
        }
    }

    fn origin(&self) -> String {
        self.window.location().origin().unwrap_or_default()
    }

    fn navigate(&mut self, url: &str) {
        if let Err(err) = self.window.location().set_href(url) {
            warn("checkout: navigation failed", err);
        }
    }
}
