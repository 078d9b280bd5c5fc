//! Text field widget - a labeled input with validation display and
//! visibility affordances.

pub mod events;
pub mod render;
mod state;

pub use state::{FieldEvent, FieldKind, FieldSize, TextField, TextFieldId, Variant};
