// Host-side tests for contact form validation and the simulated send.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod form {
    include!("../src/core/form.rs");
}

use form::*;

fn record(name: &str, subject: &str, message: &str) -> ContactFormRecord {
    ContactFormRecord {
        name: name.to_string(),
        email: String::new(),
        subject: subject.to_string(),
        message: message.to_string(),
    }
}

fn no_email_rules() -> ValidationRules {
    ValidationRules {
        collect_email: false,
        ..ValidationRules::default()
    }
}

fn filled_form(form: &mut ContactForm) {
    form.edit(Field::Name, "Ada");
    form.edit(Field::Email, "ada@example.com");
    form.edit(Field::Subject, "Hello");
    form.edit(Field::Message, "I would like to chat about a project.");
}

#[test]
fn empty_record_errors_on_every_required_field() {
    let v = ContactValidator::new(no_email_rules()).unwrap();
    let errors = v.validate(&record("", "", ""));
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[&Field::Name], "Name is required");
    assert_eq!(errors[&Field::Subject], "Subject is required");
    assert_eq!(errors[&Field::Message], "Message is required");
}

#[test]
fn whitespace_only_counts_as_empty() {
    let v = ContactValidator::new(no_email_rules()).unwrap();
    let errors = v.validate(&record("   ", "\t", " \n "));
    assert_eq!(errors.len(), 3);
}

#[test]
fn short_message_fails_length_rule() {
    let v = ContactValidator::new(no_email_rules()).unwrap();
    let errors = v.validate(&record("A", "B", "short"));
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[&Field::Message],
        "Message must be at least 10 characters"
    );
}

#[test]
fn length_rule_uses_trimmed_characters() {
    let v = ContactValidator::new(no_email_rules()).unwrap();
    // Nine characters padded with spaces
    assert!(v.validate(&record("A", "B", "   123456789   ")).contains_key(&Field::Message));
    // Ten multibyte characters
    assert!(v.validate(&record("A", "B", "éééééééééé")).is_empty());
}

#[test]
fn length_rule_can_be_disabled() {
    let rules = ValidationRules {
        collect_email: false,
        message_min_chars: None,
    };
    let v = ContactValidator::new(rules).unwrap();
    assert!(v.validate(&record("A", "B", "short")).is_empty());
}

#[test]
fn long_enough_record_is_valid() {
    let v = ContactValidator::new(no_email_rules()).unwrap();
    assert!(v.validate(&record("A", "B", "this is long enough")).is_empty());
}

#[test]
fn email_rules_when_collected() {
    let v = ContactValidator::new(ValidationRules::default()).unwrap();
    let mut r = record("A", "B", "this is long enough");

    assert_eq!(v.validate(&r)[&Field::Email], "Email is required");

    r.email = "not-an-email".to_string();
    assert_eq!(v.validate(&r)[&Field::Email], "Invalid email address");

    r.email = "someone@example".to_string();
    assert_eq!(v.validate(&r)[&Field::Email], "Invalid email address");

    r.email = "First.Last+tag@Sub.Example.ORG".to_string();
    assert!(v.validate(&r).is_empty());

    r.email = "   ".to_string();
    assert_eq!(v.validate(&r)[&Field::Email], "Email is required");
}

#[test]
fn padded_email_is_not_trimmed_before_matching() {
    let v = ContactValidator::new(ValidationRules::default()).unwrap();
    let mut r = record("A", "B", "this is long enough");
    r.email = " ada@example.com ".to_string();
    assert_eq!(
        v.validate(&r).get(&Field::Email).map(String::as_str),
        Some("Invalid email address")
    );
    r.email = "ada@example.com".to_string();
    assert!(v.validate(&r).is_empty());
}

#[test]
fn email_pattern_is_case_insensitive() {
    let v = ContactValidator::new(ValidationRules::default()).unwrap();
    assert!(v.is_valid_email("USER@EXAMPLE.COM"));
    assert!(v.is_valid_email("user@example.com"));
    assert!(!v.is_valid_email("user@example.c"));
    assert!(!v.is_valid_email("@example.com"));
}

#[test]
fn editing_clears_only_that_fields_error() {
    let mut form = ContactForm::new(ValidationRules::default()).unwrap();
    assert_eq!(form.submit(), SubmitOutcome::Rejected);
    assert_eq!(form.errors().len(), 4);

    form.edit(Field::Name, "A");
    assert!(form.error(Field::Name).is_none());
    assert!(form.error(Field::Email).is_some());
    assert!(form.error(Field::Subject).is_some());
    assert!(form.error(Field::Message).is_some());

    // Errors are not re-validated live
    form.edit(Field::Message, "x");
    assert!(form.error(Field::Message).is_none());
    assert_eq!(form.errors().len(), 2);
}

#[test]
fn rejected_submit_keeps_phase_idle() {
    let mut form = ContactForm::new(ValidationRules::default()).unwrap();
    form.edit(Field::Name, "A");
    assert_eq!(form.submit(), SubmitOutcome::Rejected);
    assert_eq!(form.phase(), SubmitPhase::Idle);
    assert_eq!(form.record().name, "A");
}

#[test]
fn simulated_send_lifecycle() {
    let mut form = ContactForm::new(ValidationRules::default()).unwrap();
    filled_form(&mut form);

    assert_eq!(form.submit(), SubmitOutcome::Sending);
    assert_eq!(form.phase(), SubmitPhase::Sending);
    assert!(form.errors().is_empty());

    // A second submit while in flight is ignored
    assert_eq!(form.submit(), SubmitOutcome::Busy);

    assert!(form.finish_send());
    assert_eq!(form.phase(), SubmitPhase::Idle);
    assert_eq!(form.record(), &ContactFormRecord::default());
    assert!(form
        .result_message()
        .unwrap()
        .starts_with("Your message has been sent successfully"));

    form.clear_result();
    assert!(form.result_message().is_none());
}

#[test]
fn finish_send_without_submit_is_ignored() {
    let mut form = ContactForm::new(ValidationRules::default()).unwrap();
    filled_form(&mut form);
    assert!(!form.finish_send());
    assert_eq!(form.record().name, "Ada");
    assert!(form.result_message().is_none());
}

#[test]
fn field_keys_round_trip() {
    for field in Field::ALL {
        assert_eq!(Field::from_key(field.key()), Some(field));
    }
    assert_eq!(Field::from_key("phone"), None);
}

#[test]
fn default_submit_timing() {
    let t = SubmitTiming::default();
    assert_eq!(t.send_delay.as_millis(), 1500);
    assert_eq!(t.success_ttl.as_millis(), 5000);
}
