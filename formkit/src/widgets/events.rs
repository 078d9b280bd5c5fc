//! Widget event handling types and traits.
//!
//! Widgets handle their own key events and report state changes through
//! drainable per-widget event queues, keeping the page's event loop a
//! thin dispatcher.

use celldom::KeyCombo;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Trait for widgets that can handle key events.
///
/// The page dispatches keys to the focused widget through this trait;
/// a returned [`EventResult::Ignored`] lets the page treat the key as a
/// global keybind instead.
pub trait WidgetEvents {
    fn on_key(&self, key: &KeyCombo) -> EventResult;
}
