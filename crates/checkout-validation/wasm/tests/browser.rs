// Browser tests: attach to a real checkout form and drive it with DOM events
// Run with `wasm-pack test --headless --firefox`

use checkout_validation_wasm::attach_checkout_form;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{
    Element, Event, EventInit, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

const FORM: &str = r#"
<form class="js_form">
  <label>Name <input class="js_input" name="name"></label>
  <label>Email <input class="js_input" name="email"></label>
  <label>Phone <input class="js_input" name="phone"></label>
  <label>Address <input class="js_input" name="address"></label>
  <label>City <input class="js_input" name="city"></label>
  <label>ZIP <input class="js_input" name="zip_code"></label>
  <label>Category
    <select class="js_input js_select" name="category">
      <option>Choose a category</option>
      <option>Books</option>
    </select>
  </label>
  <label>Card <input class="js_input" name="card_number"></label>
  <label>Expires <input class="js_input" name="card_data"></label>
  <label>CVC <input class="js_input" name="card_cvv"></label>
</form>
"#;

fn mount() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_inner_html(FORM);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn input(root: &Element, name: &str) -> HtmlInputElement {
    root.query_selector(&format!("[name=\"{}\"]", name))
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap()
}

fn dispatch(target: &HtmlElement, kind: &str) {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

/// Dispatches a keydown and reports whether a listener cancelled it
fn press(target: &HtmlElement, key: &str) -> bool {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    target.dispatch_event(&event).unwrap();
    event.default_prevented()
}

fn error_text(root: &Element, name: &str) -> Option<String> {
    let label = input(root, name).closest("label").unwrap().unwrap();
    label
        .query_selector(".js_error-span")
        .unwrap()
        .and_then(|span| span.text_content())
}

#[wasm_bindgen_test]
fn blur_shows_error_and_focus_clears_it() {
    let root = mount();
    let checkout = attach_checkout_form(JsValue::UNDEFINED).unwrap();

    let email = input(&root, "email");
    email.set_value("not-an-email");
    dispatch(&email, "focusout");
    assert_eq!(error_text(&root, "email"), Some("Email is invalid".to_string()));
    assert_eq!(checkout.invalid_fields(), vec!["email".to_string()]);

    dispatch(&email, "focus");
    assert_eq!(error_text(&root, "email"), None);

    checkout.detach();
    root.remove();
}

#[wasm_bindgen_test]
fn empty_submit_is_blocked() {
    let root = mount();
    let checkout = attach_checkout_form(JsValue::UNDEFINED).unwrap();

    let form = root
        .query_selector(".js_form")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    dispatch(&form, "submit");

    assert_eq!(checkout.invalid_fields().len(), 10);
    assert_eq!(
        error_text(&root, "card_cvv"),
        Some("Please fill out the field above".to_string())
    );

    checkout.detach();
    root.remove();
}

#[wasm_bindgen_test]
fn expiry_rejects_non_digit_keys() {
    let root = mount();
    let checkout = attach_checkout_form(JsValue::UNDEFINED).unwrap();

    let expiry = input(&root, "card_data");
    assert!(press(&expiry, "/"));
    assert!(press(&expiry, "a"));
    assert!(!press(&expiry, "4"));
    assert!(!press(&expiry, "Backspace"));

    checkout.detach();
    root.remove();
}

#[wasm_bindgen_test]
fn expiry_input_appends_separator() {
    let root = mount();
    let checkout = attach_checkout_form(JsValue::UNDEFINED).unwrap();

    let expiry = input(&root, "card_data");
    press(&expiry, "2");
    expiry.set_value("12");
    dispatch(&expiry, "input");
    assert_eq!(expiry.value(), "12/");

    // deleting back over the separator leaves the bare month
    press(&expiry, "Backspace");
    dispatch(&expiry, "input");
    assert_eq!(expiry.value(), "12");

    checkout.detach();
    root.remove();
}

#[wasm_bindgen_test]
fn valid_card_number_shows_brand_class() {
    let root = mount();
    let checkout = attach_checkout_form(JsValue::UNDEFINED).unwrap();

    let card = input(&root, "card_number");
    card.class_list().add_1("js-card_mastercard").unwrap();
    card.set_value("4111111111111111");
    dispatch(&card, "focusout");

    let classes = card.class_list();
    assert!(classes.contains("js-card_visa"));
    assert!(!classes.contains("js-card_mastercard"));
    assert!(classes.contains("js_input"));
    assert_eq!(error_text(&root, "card_number"), None);

    card.set_value("4111111111111112");
    dispatch(&card, "focusout");
    assert!(!card.class_list().contains("js-card_visa"));
    assert_eq!(
        error_text(&root, "card_number"),
        Some("Invalid card number".to_string())
    );

    checkout.detach();
    root.remove();
}

#[wasm_bindgen_test]
fn missing_form_is_an_error() {
    assert!(attach_checkout_form(JsValue::UNDEFINED).is_err());
}
