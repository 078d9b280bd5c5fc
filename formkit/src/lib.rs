//! Form widgets with self-managed state.
//!
//! `formkit` provides a validated text field and a sortable, selectable
//! table, plus the validation layer that keeps pattern policy out of
//! the widgets themselves. Widgets own their interaction state, report
//! changes through drainable event queues, and render into a `celldom`
//! buffer.

pub mod error;
pub mod theme;
pub mod validation;
pub mod widgets;

pub use error::FormkitError;
pub use theme::Theme;

pub mod prelude {
    pub use crate::error::FormkitError;
    pub use crate::theme::Theme;
    pub use crate::validation::{ValidationResult, Validator};
    pub use crate::widgets::events::{EventResult, WidgetEvents};
    pub use crate::widgets::input::{FieldEvent, FieldKind, FieldSize, TextField, Variant};
    pub use crate::widgets::selection::{Selection, SelectionMode};
    pub use crate::widgets::table::{
        Alignment, CellValue, Column, SortDirection, Table, TableEvent, TableRow,
    };
}
