//! Text field state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::validation::{ErrorDisplay, Validatable};

/// Unique identifier for a TextField widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextFieldId(usize);

impl TextFieldId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TextFieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__field_{}", self.0)
    }
}

/// Whether the field's display can be masked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain text display.
    #[default]
    Plain,
    /// Masked display with a reveal toggle; the stored value is never
    /// altered by masking.
    Maskable,
}

/// Visual variant of the input row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// Surface-colored background, no border.
    Filled,
    /// Bordered box around the input row.
    #[default]
    Outlined,
    /// Underlined text only.
    Ghost,
}

/// Size token controlling input-row padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl FieldSize {
    /// Horizontal padding inside the input row.
    pub(super) fn pad(self) -> u16 {
        match self {
            Self::Sm => 1,
            Self::Md => 2,
            Self::Lg => 3,
        }
    }
}

/// State change notifications drained by the page after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// The value changed (keystroke edit or clear - same path).
    Changed,
    /// Enter was pressed inside the field.
    Submitted,
}

#[derive(Debug, Default)]
struct FieldInner {
    /// Current text value. Always a string, never a sentinel.
    value: String,
    /// Cursor position (byte offset).
    cursor: usize,
    label: Option<String>,
    placeholder: String,
    helper: Option<String>,
    /// Static error message shown while `invalid` is set.
    error_message: Option<String>,
    /// Dynamic error set by a validator; takes precedence over
    /// `error_message`.
    error_override: Option<String>,
    /// Display-only invalid flag, supplied by the caller. The field
    /// itself never evaluates a pattern.
    invalid: bool,
    kind: FieldKind,
    /// Local display flip for maskable fields.
    revealed: bool,
    variant: Variant,
    size: FieldSize,
    clearable: bool,
    disabled: bool,
    error_display: ErrorDisplay,
    events: Vec<FieldEvent>,
}

/// A labeled text input with validation display.
///
/// The field owns its edit buffer and cursor (a terminal input must),
/// but validity is pure display state pushed in from outside: the page
/// reads [`TextField::value`], applies its rules, and calls
/// [`TextField::set_invalid`] before rendering.
#[derive(Debug)]
pub struct TextField {
    id: TextFieldId,
    inner: Arc<RwLock<FieldInner>>,
    dirty: Arc<AtomicBool>,
}

impl TextField {
    /// Create a new empty field.
    pub fn new() -> Self {
        Self {
            id: TextFieldId::new(),
            inner: Arc::new(RwLock::new(FieldInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID for this field.
    pub fn id(&self) -> TextFieldId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Builder configuration
    // -------------------------------------------------------------------------

    pub fn label(self, label: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.label = Some(label.into());
        }
        self
    }

    pub fn placeholder(self, placeholder: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = placeholder.into();
        }
        self
    }

    pub fn helper(self, helper: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.helper = Some(helper.into());
        }
        self
    }

    pub fn error_message(self, msg: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_message = Some(msg.into());
        }
        self
    }

    pub fn kind(self, kind: FieldKind) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.kind = kind;
        }
        self
    }

    pub fn variant(self, variant: Variant) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.variant = variant;
        }
        self
    }

    pub fn size(self, size: FieldSize) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.size = size;
        }
        self
    }

    pub fn clearable(self) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.clearable = true;
        }
        self
    }

    pub fn disabled(self) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = true;
        }
        self
    }

    pub fn error_display(self, display: ErrorDisplay) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_display = display;
        }
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the current text value.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Check if the field is empty.
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    /// Get the cursor position (byte offset).
    pub fn cursor(&self) -> usize {
        self.inner.read().map(|guard| guard.cursor).unwrap_or(0)
    }

    pub fn label_text(&self) -> Option<String> {
        self.inner.read().ok().and_then(|g| g.label.clone())
    }

    pub fn placeholder_text(&self) -> String {
        self.inner
            .read()
            .map(|g| g.placeholder.clone())
            .unwrap_or_default()
    }

    pub fn helper_text(&self) -> Option<String> {
        self.inner.read().ok().and_then(|g| g.helper.clone())
    }

    pub fn field_kind(&self) -> FieldKind {
        self.inner.read().map(|g| g.kind).unwrap_or_default()
    }

    pub fn variant_token(&self) -> Variant {
        self.inner.read().map(|g| g.variant).unwrap_or_default()
    }

    pub fn size_token(&self) -> FieldSize {
        self.inner.read().map(|g| g.size).unwrap_or_default()
    }

    pub fn is_clearable(&self) -> bool {
        self.inner.read().map(|g| g.clearable).unwrap_or(false)
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.read().map(|g| g.disabled).unwrap_or(false)
    }

    /// Check the local reveal flip of a maskable field.
    pub fn revealed(&self) -> bool {
        self.inner.read().map(|g| g.revealed).unwrap_or(false)
    }

    /// Check the display-only invalid flag.
    pub fn invalid(&self) -> bool {
        self.inner.read().map(|g| g.invalid).unwrap_or(false)
    }

    /// Where validation messages are shown.
    pub fn display_mode(&self) -> ErrorDisplay {
        self.inner
            .read()
            .map(|g| g.error_display)
            .unwrap_or_default()
    }

    /// The message line under the field: the error message while
    /// invalid (if one exists), otherwise the helper text.
    /// The bool is true when the message is an error.
    pub fn message(&self) -> Option<(String, bool)> {
        self.inner.read().ok().and_then(|g| {
            if g.invalid {
                if let Some(msg) = g.error_override.clone().or_else(|| g.error_message.clone()) {
                    return Some((msg, true));
                }
            }
            g.helper.clone().map(|h| (h, false))
        })
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the text value.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            guard.cursor = guard.value.len();
            guard.error_override = None; // Auto-clear validator error on value change
            guard.events.push(FieldEvent::Changed);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the field through the normal change path, exactly as if
    /// the user had deleted every character.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value.clear();
            guard.cursor = 0;
            guard.error_override = None; // Auto-clear validator error on value change
            guard.events.push(FieldEvent::Changed);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the display-only invalid flag.
    pub fn set_invalid(&self, invalid: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.invalid != invalid
        {
            guard.invalid = invalid;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Flip masked display. A no-op for plain fields; never touches the
    /// stored value.
    pub fn toggle_reveal(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.kind == FieldKind::Maskable
        {
            guard.revealed = !guard.revealed;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Text manipulation (called on key events)
    // -------------------------------------------------------------------------

    /// Insert a character at the cursor position.
    pub fn insert_char(&self, c: char) {
        if let Ok(mut guard) = self.inner.write() {
            let cursor = guard.cursor;
            guard.value.insert(cursor, c);
            guard.cursor += c.len_utf8();
            guard.error_override = None; // Auto-clear validator error on value change
            guard.events.push(FieldEvent::Changed);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_char_before(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor > 0
        {
            let prev_cursor = guard.value[..guard.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            guard.value.remove(prev_cursor);
            guard.cursor = prev_cursor;
            guard.error_override = None; // Auto-clear validator error on value change
            guard.events.push(FieldEvent::Changed);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Delete the character at the cursor (delete key).
    pub fn delete_char_at(&self) {
        if let Ok(mut guard) = self.inner.write() {
            let cursor = guard.cursor;
            if cursor < guard.value.len() {
                guard.value.remove(cursor);
                guard.error_override = None; // Auto-clear validator error on value change
                guard.events.push(FieldEvent::Changed);
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Move cursor left.
    pub fn cursor_left(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor > 0
        {
            guard.cursor = guard.value[..guard.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move cursor right.
    pub fn cursor_right(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor < guard.value.len()
        {
            guard.cursor = guard.value[guard.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| guard.cursor + i)
                .unwrap_or(guard.value.len());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move cursor to start.
    pub fn cursor_home(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor != 0
        {
            guard.cursor = 0;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move cursor to end.
    pub fn cursor_end(&self) {
        if let Ok(mut guard) = self.inner.write() {
            let end = guard.value.len();
            if guard.cursor != end {
                guard.cursor = end;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    pub(super) fn push_event(&self, event: FieldEvent) {
        if let Ok(mut guard) = self.inner.write() {
            guard.events.push(event);
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Drain pending state-change notifications.
    pub fn take_events(&self) -> Vec<FieldEvent> {
        self.inner
            .write()
            .map(|mut g| std::mem::take(&mut g.events))
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the field state has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for TextField {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// Validatable implementation
// -----------------------------------------------------------------------------

impl Validatable for TextField {
    type Value = String;

    fn validation_value(&self) -> Self::Value {
        self.value()
    }

    fn set_error(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_override = Some(msg.into());
            guard.invalid = true;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write()
            && (guard.error_override.is_some() || guard.invalid)
        {
            guard.error_override = None;
            guard.invalid = false;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    fn has_error(&self) -> bool {
        self.invalid()
    }

    fn error(&self) -> Option<String> {
        self.inner.read().ok().and_then(|g| {
            if g.invalid {
                g.error_override.clone().or_else(|| g.error_message.clone())
            } else {
                None
            }
        })
    }

    fn widget_id(&self) -> String {
        self.id.to_string()
    }

    fn error_display(&self) -> ErrorDisplay {
        self.display_mode()
    }
}
