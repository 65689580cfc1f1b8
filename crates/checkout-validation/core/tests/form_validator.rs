// Integration tests: the validator driving a complete in-memory checkout form

use checkout_validation::memory::FieldId;
use checkout_validation::{
    FormHost, FormValidator, KeyDecision, MemoryForm, StandardCards, SubmitOutcome,
    ValidatorConfig,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

const ORIGIN: &str = "https://shop.test";
const VISA: &str = "4111111111111111";
const REQUIRED: &str = "Please fill out the field above";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn validator() -> FormValidator<MemoryForm> {
    init_tracing();
    let cards = StandardCards::pinned(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
    FormValidator::with_cards(
        MemoryForm::checkout(ORIGIN),
        ValidatorConfig::default(),
        cards,
    )
    .unwrap()
}

fn id(v: &FormValidator<MemoryForm>, name: &str) -> FieldId {
    v.host().id_of(name).unwrap()
}

/// Types `value` and moves focus out, like a user would
fn fill(v: &mut FormValidator<MemoryForm>, name: &str, value: &str) -> Option<String> {
    let field = id(v, name);
    v.on_focus(&field);
    v.host_mut().type_into(name, value);
    v.on_blur(&field)
}

fn fill_valid(v: &mut FormValidator<MemoryForm>) {
    let values = [
        ("name", "Olena Petrenko"),
        ("email", "olena@example.com"),
        ("phone", "+380501234"),
        ("address", "12 Khreshchatyk St"),
        ("city", "Kyiv"),
        ("zip_code", "01001"),
        ("card_number", VISA),
        ("card_data", "04/2028"),
        ("card_cvv", "123"),
    ];
    for (name, value) in values {
        assert_eq!(fill(v, name, value), None, "{name} should pass");
    }
    v.host_mut().select("category", 1);
    let category = id(v, "category");
    v.on_category_change(&category);
}

#[test]
fn failed_blur_leaves_one_annotation_and_focus_removes_it() {
    let mut v = validator();

    assert_eq!(
        fill(&mut v, "email", "not-an-email"),
        Some("Email is invalid".to_string())
    );
    assert_eq!(v.host().annotated_fields(), vec!["email".to_string()]);

    // a second failure replaces the message instead of stacking
    let email = id(&v, "email");
    v.host_mut().type_into("email", "still wrong");
    v.on_blur(&email);
    assert_eq!(v.host().annotated_fields(), vec!["email".to_string()]);
    assert_eq!(v.host().annotation("email"), Some("Email is invalid"));

    v.on_focus(&email);
    assert!(v.host().annotated_fields().is_empty());
}

#[test]
fn zip_code_messages() {
    let mut v = validator();

    assert_eq!(
        fill(&mut v, "zip_code", "1234"),
        Some("ZIP code must not be shorter than 5 symbols".to_string())
    );
    assert_eq!(fill(&mut v, "zip_code", "12345"), None);
    assert_eq!(
        fill(&mut v, "zip_code", "1234567890"),
        Some("ZIP code must not be longer than 9 symbols".to_string())
    );
    assert_eq!(
        fill(&mut v, "zip_code", "12a45"),
        Some("ZIP code should contain only numbers".to_string())
    );
    assert_eq!(
        v.host().annotation("zip_code"),
        Some("ZIP code should contain only numbers")
    );
}

#[test]
fn expiry_autoformat_while_typing() {
    let mut v = validator();

    // "1", "2" typed forward -> "12/"
    for key in ["1", "2"] {
        assert_eq!(v.on_expiry_keydown(key), KeyDecision::Accept);
        let next = format!("{}{}", v.host().value("card_data").unwrap(), key);
        v.host_mut().type_into("card_data", &next);
        v.on_expiry_input();
    }
    assert_eq!(v.host().value("card_data"), Some("12/"));

    // a dangling separator collapses back to the month
    v.on_expiry_input();
    assert_eq!(v.host().value("card_data"), Some("12"));

    assert_eq!(v.on_expiry_keydown("/"), KeyDecision::Reject);
    assert_eq!(v.on_expiry_keydown("Backspace"), KeyDecision::Accept);
}

#[test]
fn expiry_typed_to_full_date_validates() {
    let mut v = validator();

    for key in ["0", "4", "2", "0", "2", "8"] {
        assert_eq!(v.on_expiry_keydown(key), KeyDecision::Accept);
        let next = format!("{}{}", v.host().value("card_data").unwrap(), key);
        v.host_mut().type_into("card_data", &next);
        v.on_expiry_input();
    }

    assert_eq!(v.host().value("card_data"), Some("04/2028"));
    let expiry = id(&v, "card_data");
    assert_eq!(v.on_blur(&expiry), None);
}

#[test]
fn card_number_brand_indicator() {
    let mut v = validator();
    v.host_mut().add_class("card_number", "input");

    assert_eq!(fill(&mut v, "card_number", VISA), None);
    assert_eq!(
        v.host().classes("card_number"),
        vec!["input".to_string(), "js-card_visa".to_string()]
    );

    assert_eq!(fill(&mut v, "card_number", "5555555555554444"), None);
    assert_eq!(
        v.host().classes("card_number"),
        vec!["input".to_string(), "js-card_mastercard".to_string()]
    );

    assert_eq!(
        fill(&mut v, "card_number", "4111111111111112"),
        Some("Invalid card number".to_string())
    );
    assert_eq!(v.host().classes("card_number"), vec!["input".to_string()]);
    assert_eq!(v.host().annotation("card_number"), Some("Invalid card number"));
}

#[test]
fn cvv_checked_against_current_card_number() {
    let mut v = validator();

    fill(&mut v, "card_number", "378282246310005");
    assert_eq!(
        fill(&mut v, "card_cvv", "123"),
        Some("CVC is invalid".to_string())
    );
    assert_eq!(fill(&mut v, "card_cvv", "1234"), None);
}

#[test]
fn successful_submission_redirects() {
    let mut v = validator();
    v.host_mut()
        .storage_mut()
        .insert("cart".to_string(), "[1,2,3]".to_string());
    fill_valid(&mut v);

    let outcome = v.on_submit();

    assert_eq!(
        outcome,
        SubmitOutcome::Redirected {
            url: "https://shop.test/thank-you.html".to_string()
        }
    );
    assert!(v.host().annotated_fields().is_empty());
    assert_eq!(v.host().location(), Some("https://shop.test/thank-you.html"));
    assert!(v.host().summary_classes().unwrap().contains("hidden"));
    assert!(v.host().storage().is_empty());
}

#[test]
fn placeholder_category_blocks_submission() {
    let mut v = validator();
    fill_valid(&mut v);
    v.host_mut().select("category", 0);

    let outcome = v.on_submit();

    assert_eq!(
        outcome,
        SubmitOutcome::Blocked {
            fields: vec!["category".to_string()]
        }
    );
    assert_eq!(v.host().annotation("category"), Some(REQUIRED));
    assert_eq!(v.host().location(), None);
    assert!(!v.host().summary_classes().unwrap().contains("hidden"));

    // changing the selection clears the annotation again
    v.host_mut().select("category", 2);
    let category = id(&v, "category");
    v.on_category_change(&category);
    assert!(v.on_submit().is_redirected());
}

#[test]
fn empty_form_annotates_every_field() {
    let mut v = validator();
    v.host_mut().type_into("city", "   ");

    let outcome = v.on_submit();

    let SubmitOutcome::Blocked { fields } = outcome else {
        panic!("empty form must not submit");
    };
    assert_eq!(fields.len(), 10);
    for name in &fields {
        assert_eq!(v.host().annotation(name), Some(REQUIRED));
    }
}

#[test]
fn blur_errors_survive_submission() {
    let mut v = validator();
    fill_valid(&mut v);
    fill(&mut v, "phone", "12");

    let outcome = v.on_submit();

    assert_eq!(
        outcome,
        SubmitOutcome::Blocked {
            fields: vec!["phone".to_string()]
        }
    );
    assert_eq!(
        v.host().annotation("phone"),
        Some("Phone must be 9 to 11 digits.")
    );
}

#[test]
fn custom_confirmation_path() {
    init_tracing();
    let config = ValidatorConfig::from_toml_str(
        r#"
        [submit]
        confirmation_path = "/order/complete"
        "#,
    )
    .unwrap();
    let cards = StandardCards::pinned(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
    let mut v =
        FormValidator::with_cards(MemoryForm::checkout(ORIGIN), config, cards).unwrap();
    fill_valid(&mut v);

    assert_eq!(
        v.on_submit(),
        SubmitOutcome::Redirected {
            url: "https://shop.test/order/complete".to_string()
        }
    );
}

#[test]
fn independent_forms_keep_separate_state() {
    let mut first = validator();
    let mut second = validator();

    first.on_expiry_keydown("1");
    first.host_mut().type_into("card_data", "1");
    second.on_expiry_keydown("1");
    second.host_mut().type_into("card_data", "12");
    second.on_expiry_input();

    // the first form's previous value is "" and it never saw "12"
    first.on_expiry_input();
    assert_eq!(first.host().value("card_data"), Some("1"));
    assert_eq!(second.host().value("card_data"), Some("12/"));

    fill(&mut first, "email", "bad");
    assert!(second.host().annotated_fields().is_empty());
    let field = id(&first, "email");
    assert!(first.host().has_annotation(&field));
}
