//! Integration tests for the validation layer against the demo's rules.

use formkit::prelude::*;
use formkit::validation::Validatable;
use regex::Regex;

fn name_pattern() -> Regex {
    Regex::new(r"^[A-Za-z\s]{3,30}$").unwrap()
}

fn email_pattern() -> Regex {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
}

fn validate_name(field: &TextField) -> ValidationResult {
    Validator::new()
        .field(field, "name")
        .required("Name is required")
        .pattern(name_pattern(), "Name must be 3 to 30 letters")
        .validate()
}

fn password_charset() -> Regex {
    Regex::new(r"^[A-Za-z\d@$!%*?&]{8,}$").unwrap()
}

fn validate_password(field: &TextField) -> ValidationResult {
    Validator::new()
        .field(field, "password")
        .min_length(8, "At least 8 characters")
        .pattern(password_charset(), "Only letters, digits, and @$!%*?&")
        .contains_char(|c| c.is_ascii_lowercase(), "Needs a lowercase letter")
        .contains_char(|c| c.is_ascii_uppercase(), "Needs an uppercase letter")
        .contains_char(|c| c.is_ascii_digit(), "Needs a digit")
        .contains_char(|c| "@$!%*?&".contains(c), "Needs a special character")
        .validate()
}

#[test]
fn name_pattern_enforces_letters_and_length() {
    let field = TextField::new();

    field.set_value("Al");
    assert!(validate_name(&field).is_invalid());

    field.set_value("Alice");
    assert!(validate_name(&field).is_valid());

    field.set_value("Alice123");
    assert!(validate_name(&field).is_invalid());
}

#[test]
fn password_rules_compose_conjunctively() {
    let field = TextField::new();

    field.set_value("Passw0rd!");
    assert!(validate_password(&field).is_valid());

    for bad in ["password", "PASSWORD1!", "Pass1!", "Password!", "Passwords"] {
        field.set_value(bad);
        assert!(
            validate_password(&field).is_invalid(),
            "{bad:?} should fail"
        );
    }
}

#[test]
fn password_rejects_characters_outside_the_allowed_set() {
    let field = TextField::new();

    // Every class is present, but '#' and space are not in the charset.
    for bad in ["Passw0rd!#", "Pass w0rd!"] {
        field.set_value(bad);
        assert!(
            validate_password(&field).is_invalid(),
            "{bad:?} should fail"
        );
    }

    field.set_value("Passw0rd@$!");
    assert!(validate_password(&field).is_valid());
}

#[test]
fn email_pattern_rejects_spaces_and_missing_parts() {
    let field = TextField::new();
    let validate = |f: &TextField| {
        Validator::new()
            .field(f, "email")
            .pattern(email_pattern(), "Invalid email")
            .validate()
    };

    field.set_value("kunal@example.com");
    assert!(validate(&field).is_valid());

    for bad in ["kunal", "kunal@example", "ku nal@example.com", "@example.com"] {
        field.set_value(bad);
        assert!(validate(&field).is_invalid(), "{bad:?} should fail");
    }
}

#[test]
fn email_rule_accepts_valid_addresses() {
    let field = TextField::new();
    let validate = |f: &TextField| {
        Validator::new()
            .field(f, "email")
            .email("Invalid email")
            .validate()
    };

    field.set_value("user@example.com");
    assert!(validate(&field).is_valid());

    field.set_value("not-an-email");
    assert!(validate(&field).is_invalid());
}

#[test]
fn failure_pushes_first_error_into_the_widget() {
    let field = TextField::new();
    field.set_value("");

    let result = validate_name(&field);
    assert!(field.has_error());
    assert_eq!(field.error().as_deref(), Some("Name is required"));
    assert_eq!(
        result.first_error().map(|e| e.message.as_str()),
        Some("Name is required")
    );
}

#[test]
fn success_clears_a_previous_error() {
    let field = TextField::new();
    field.set_value("");
    validate_name(&field);
    assert!(field.has_error());

    field.set_value("Alice");
    assert!(validate_name(&field).is_valid());
    assert!(!field.has_error());
}

#[test]
fn first_invalid_widget_points_at_the_failing_field() {
    let name = TextField::new();
    let email = TextField::new();
    name.set_value("Alice");
    email.set_value("nope");

    let result = Validator::new()
        .field(&name, "name")
        .pattern(name_pattern(), "Invalid name")
        .field(&email, "email")
        .pattern(email_pattern(), "Invalid email")
        .validate();

    assert!(result.is_invalid());
    assert_eq!(result.errors().len(), 1);
    assert_eq!(
        result.first_invalid_widget(),
        Some(email.widget_id().as_str())
    );
    assert!(!name.has_error());
    assert!(email.has_error());
}
