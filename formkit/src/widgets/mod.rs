//! UI widgets with self-managed state.
//!
//! Each widget lives in its own module with:
//! - `state.rs` - the widget state type
//! - `events.rs` - key event handling
//! - `render.rs` - rendering into a celldom buffer
//! - `mod.rs` - public exports

pub mod events;
pub mod input;
pub mod selection;
pub mod table;

pub use events::{EventResult, WidgetEvents};
pub use input::{FieldEvent, FieldKind, FieldSize, TextField, TextFieldId, Variant};
pub use selection::{Selection, SelectionMode};
pub use table::{Alignment, CellValue, Column, SortDirection, Table, TableEvent, TableId, TableRow};
