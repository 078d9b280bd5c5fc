//! Integration tests for the TextField widget.

use celldom::{Key, KeyCombo};
use formkit::prelude::*;
use formkit::validation::Validatable;

fn type_str(field: &TextField, text: &str) {
    for c in text.chars() {
        field.on_key(&KeyCombo::key(Key::Char(c)));
    }
}

#[test]
fn typing_updates_value_and_emits_changed() {
    let field = TextField::new();
    type_str(&field, "hi");

    assert_eq!(field.value(), "hi");
    assert_eq!(
        field.take_events(),
        [FieldEvent::Changed, FieldEvent::Changed]
    );
    assert!(field.take_events().is_empty());
}

#[test]
fn backspace_and_delete_respect_char_boundaries() {
    let field = TextField::new();
    type_str(&field, "aé日");
    assert_eq!(field.value(), "aé日");

    field.on_key(&KeyCombo::key(Key::Backspace));
    assert_eq!(field.value(), "aé");
    field.on_key(&KeyCombo::key(Key::Backspace));
    assert_eq!(field.value(), "a");

    field.cursor_home();
    field.on_key(&KeyCombo::key(Key::Delete));
    assert_eq!(field.value(), "");
}

#[test]
fn cursor_moves_by_whole_chars() {
    let field = TextField::new();
    field.set_value("é日x");
    field.cursor_home();
    assert_eq!(field.cursor(), 0);

    field.cursor_right();
    assert_eq!(field.cursor(), 'é'.len_utf8());
    field.cursor_right();
    assert_eq!(field.cursor(), 'é'.len_utf8() + '日'.len_utf8());
    field.cursor_left();
    assert_eq!(field.cursor(), 'é'.len_utf8());
}

#[test]
fn clear_requires_clearable_and_content() {
    let plain = TextField::new();
    plain.set_value("keep");
    plain.take_events();
    assert_eq!(
        plain.on_key(&KeyCombo::key(Key::Char('u')).ctrl()),
        EventResult::Ignored
    );
    assert_eq!(plain.value(), "keep");

    let clearable = TextField::new().clearable();
    assert_eq!(
        clearable.on_key(&KeyCombo::key(Key::Char('u')).ctrl()),
        EventResult::Ignored
    );

    clearable.set_value("text");
    clearable.take_events();
    assert_eq!(
        clearable.on_key(&KeyCombo::key(Key::Char('u')).ctrl()),
        EventResult::Consumed
    );
    assert_eq!(clearable.value(), "");
    // Clearing goes through the same change path as typing.
    assert_eq!(clearable.take_events(), [FieldEvent::Changed]);
}

#[test]
fn reveal_toggle_is_maskable_only_and_leaves_value_alone() {
    let masked = TextField::new().kind(FieldKind::Maskable);
    masked.set_value("secret");
    assert!(!masked.revealed());

    assert_eq!(
        masked.on_key(&KeyCombo::key(Key::Char('t')).ctrl()),
        EventResult::Consumed
    );
    assert!(masked.revealed());
    assert_eq!(masked.value(), "secret");

    masked.on_key(&KeyCombo::key(Key::Char('t')).ctrl());
    assert!(!masked.revealed());

    let plain = TextField::new();
    assert_eq!(
        plain.on_key(&KeyCombo::key(Key::Char('t')).ctrl()),
        EventResult::Ignored
    );
}

#[test]
fn enter_emits_submitted() {
    let field = TextField::new();
    field.on_key(&KeyCombo::key(Key::Enter));
    assert_eq!(field.take_events(), [FieldEvent::Submitted]);
}

#[test]
fn disabled_field_ignores_everything() {
    let field = TextField::new().clearable().disabled();
    field.set_value("frozen");
    field.take_events();

    assert_eq!(
        field.on_key(&KeyCombo::key(Key::Char('x'))),
        EventResult::Ignored
    );
    assert_eq!(
        field.on_key(&KeyCombo::key(Key::Char('u')).ctrl()),
        EventResult::Ignored
    );
    assert_eq!(field.value(), "frozen");
    assert!(field.take_events().is_empty());
}

#[test]
fn message_prefers_error_while_invalid() {
    let field = TextField::new()
        .helper("3 to 30 letters")
        .error_message("Invalid name");

    assert_eq!(field.message(), Some(("3 to 30 letters".into(), false)));

    field.set_invalid(true);
    assert_eq!(field.message(), Some(("Invalid name".into(), true)));

    field.set_invalid(false);
    assert_eq!(field.message(), Some(("3 to 30 letters".into(), false)));
}

#[test]
fn editing_drops_stale_validator_error() {
    let field = TextField::new().error_message("Invalid name");
    field.set_error("Name is required");
    assert_eq!(field.message(), Some(("Name is required".into(), true)));

    // Typing invalidates the validator's message; while the field still
    // displays as invalid, its own static message takes over.
    field.on_key(&KeyCombo::key(Key::Char('A')));
    assert!(field.invalid());
    assert_eq!(field.message(), Some(("Invalid name".into(), true)));
}

#[test]
fn validator_error_overrides_static_message() {
    let field = TextField::new().error_message("Invalid name");
    field.set_error("Name is required");
    assert!(field.invalid());
    assert_eq!(field.message(), Some(("Name is required".into(), true)));

    field.clear_error();
    assert!(!field.invalid());
    assert_eq!(field.message(), None);
}

#[test]
fn height_accounts_for_label_variant_and_message() {
    let bare = TextField::new();
    assert_eq!(bare.height(), 3); // outlined by default

    let ghost = TextField::new().variant(Variant::Ghost);
    assert_eq!(ghost.height(), 1);

    let full = TextField::new()
        .label("Name")
        .helper("3 to 30 letters")
        .variant(Variant::Filled);
    assert_eq!(full.height(), 3); // label + row + helper
}
