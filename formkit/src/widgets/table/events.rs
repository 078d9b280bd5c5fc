//! Event handling for the Table widget.

use celldom::{Key, KeyCombo};

use crate::widgets::events::{EventResult, WidgetEvents};
use crate::widgets::selection::SelectionMode;

use super::row::TableRow;
use super::state::Table;

impl<T: TableRow> WidgetEvents for Table<T> {
    fn on_key(&self, key: &KeyCombo) -> EventResult {
        // Loading and empty tables are inert render states.
        if self.loading() || self.is_empty() {
            return EventResult::Ignored;
        }

        match key.key {
            Key::Up => {
                if self.cursor_up().is_some() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Key::Down => {
                if self.cursor_down().is_some() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Key::Home => {
                if self.cursor_first().is_some() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Key::End => {
                if self.cursor_last().is_some() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            // Header cursor: the keyboard analog of pointing at a column.
            Key::Left => {
                self.header_left();
                EventResult::Consumed
            }
            Key::Right => {
                self.header_right();
                EventResult::Consumed
            }
            Key::Enter | Key::Char('s') if !key.modifiers.ctrl => {
                self.toggle_sort_at_header();
                EventResult::Consumed
            }
            Key::Char(' ') if self.selection_mode() == SelectionMode::Multiple => {
                self.toggle_select_at_cursor();
                EventResult::Consumed
            }
            Key::Char('a') if key.modifiers.ctrl => {
                if self.selection_mode() == SelectionMode::Multiple {
                    self.select_all();
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Key::Escape if self.selection_mode() != SelectionMode::None => {
                self.deselect_all();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
