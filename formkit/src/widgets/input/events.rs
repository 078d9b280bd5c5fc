//! Event handling for the TextField widget.

use celldom::{Key, KeyCombo};

use crate::widgets::events::{EventResult, WidgetEvents};

use super::state::{FieldEvent, FieldKind, TextField};

impl WidgetEvents for TextField {
    fn on_key(&self, key: &KeyCombo) -> EventResult {
        if self.is_disabled() {
            return EventResult::Ignored;
        }

        // Ctrl shortcuts first so they never fall through to text entry.
        if key.modifiers.ctrl {
            return match key.key {
                Key::Char('u') => {
                    if self.is_clearable() && !self.is_empty() {
                        self.clear();
                        EventResult::Consumed
                    } else {
                        EventResult::Ignored
                    }
                }
                Key::Char('t') => {
                    if self.field_kind() == FieldKind::Maskable {
                        self.toggle_reveal();
                        EventResult::Consumed
                    } else {
                        EventResult::Ignored
                    }
                }
                _ => EventResult::Ignored,
            };
        }

        match key.key {
            Key::Enter => {
                self.push_event(FieldEvent::Submitted);
                EventResult::Consumed
            }
            Key::Char(c) if !key.modifiers.alt => {
                self.insert_char(c);
                EventResult::Consumed
            }
            Key::Backspace => {
                self.delete_char_before();
                EventResult::Consumed
            }
            Key::Delete => {
                self.delete_char_at();
                EventResult::Consumed
            }
            Key::Left => {
                self.cursor_left();
                EventResult::Consumed
            }
            Key::Right => {
                self.cursor_right();
                EventResult::Consumed
            }
            Key::Home => {
                self.cursor_home();
                EventResult::Consumed
            }
            Key::End => {
                self.cursor_end();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
