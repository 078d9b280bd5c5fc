//! Table widget - sortable columns and multi-row selection.

pub mod events;
pub mod render;
mod row;
mod state;

pub use row::{Alignment, CellValue, Column, SortDirection, TableRow};
pub use state::{Table, TableEvent, TableId};
