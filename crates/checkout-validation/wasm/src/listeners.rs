//! DOM listener registration for an attached checkout form

use std::cell::RefCell;
use std::rc::Rc;

use checkout_validation::FormValidator;
use wasm_bindgen::prelude::*;
use web_sys::{console, Event, EventTarget, HtmlElement, KeyboardEvent};

use crate::browser::BrowserForm;

pub(crate) type SharedValidator = Rc<RefCell<FormValidator<BrowserForm>>>;

/// An event listener that unregisters itself when dropped
pub(crate) struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub(crate) fn add(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let callback = self.callback.as_ref().unchecked_ref();
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, callback);
    }
}

/// Runs `f` on the validator. Events are dispatched one at a time, so a
/// validator that is already borrowed means a handler re-entered; that event
/// is skipped.
fn with_validator(validator: &SharedValidator, f: impl FnOnce(&mut FormValidator<BrowserForm>)) {
    match validator.try_borrow_mut() {
        Ok(mut v) => f(&mut v),
        Err(_) => console::warn_1(&JsValue::from_str("checkout: validator busy, event skipped")),
    }
}

/// Wires every form event to the validator
pub(crate) fn register(
    validator: &SharedValidator,
    form: &EventTarget,
    fields: Vec<HtmlElement>,
    category: Option<HtmlElement>,
    expiry: HtmlElement,
) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::new();

    for field in fields {
        let v = Rc::clone(validator);
        let target = field.clone();
        listeners.push(Listener::add(&target, "focus", move |_| {
            with_validator(&v, |v| v.on_focus(&field));
        })?);
    }

    if let Some(category) = category {
        let v = Rc::clone(validator);
        let target = category.clone();
        listeners.push(Listener::add(&target, "change", move |_| {
            with_validator(&v, |v| v.on_category_change(&category));
        })?);
    }

    let v = Rc::clone(validator);
    listeners.push(Listener::add(form, "focusout", move |event: Event| {
        let target = event.target().and_then(|t| t.dyn_into::<HtmlElement>().ok());
        let Some(field) = target else {
            return;
        };
        with_validator(&v, |v| {
            v.on_blur(&field);
        });
    })?);

    let v = Rc::clone(validator);
    listeners.push(Listener::add(form, "submit", move |event: Event| {
        event.prevent_default();
        with_validator(&v, |v| {
            v.on_submit();
        });
    })?);

    let v = Rc::clone(validator);
    listeners.push(Listener::add(&expiry, "keydown", move |event: Event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        with_validator(&v, |v| {
            if v.on_expiry_keydown(&key).is_rejected() {
                event.prevent_default();
            }
        });
    })?);

    let v = Rc::clone(validator);
    listeners.push(Listener::add(&expiry, "input", move |_| {
        with_validator(&v, |v| v.on_expiry_input());
    })?);

    Ok(listeners)
}
