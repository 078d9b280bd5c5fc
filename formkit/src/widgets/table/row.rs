//! TableRow trait and Column types for table display.

use std::cmp::Ordering;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Sort direction for the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header indicator glyph.
    pub fn indicator(self) -> char {
        match self {
            Self::Ascending => '▲',
            Self::Descending => '▼',
        }
    }
}

/// A comparable cell value.
///
/// Sorting compares values of the same kind naturally (numeric or
/// lexicographic). Values of different kinds order by kind rank -
/// best-effort ordering, no type coercion - so a mixed column sorts
/// deterministically and never panics.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    fn rank(&self) -> u8 {
        match self {
            Self::Int(_) => 0,
            Self::Float(_) => 1,
            Self::Text(_) => 2,
        }
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Cell display text.
    pub fn display(&self) -> String {
        match self {
            Self::Int(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Text(v) => v.clone(),
        }
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// Column configuration.
///
/// Columns define the structure of the table: header text, width,
/// alignment, and whether the column is sortable.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("Name", 20).sortable(),
///     Column::new("Email", 28),
///     Column::new("Age", 6).sortable().align(Alignment::Right),
/// ];
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    /// Column header text
    pub header: String,
    /// Column width in terminal columns (fixed)
    pub width: u16,
    /// Horizontal alignment
    pub align: Alignment,
    /// Whether this column is sortable
    pub sortable: bool,
}

impl Column {
    /// Create a new column with explicit width.
    pub fn new(header: impl Into<String>, width: u16) -> Self {
        Self {
            header: header.into(),
            width,
            align: Alignment::Left,
            sortable: false,
        }
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Make the column sortable.
    ///
    /// Sortable columns show a sort indicator in the header and respond
    /// to sort toggling; non-sortable columns ignore it.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Trait for items that can be displayed as rows in a Table.
///
/// The table never interprets row fields directly; it reads them as
/// [`CellValue`]s through this trait, one per column.
pub trait TableRow: Send + Sync + Clone + 'static {
    /// Unique identifier for this row.
    ///
    /// Used for stable selection across reordering and row mutations.
    fn id(&self) -> String;

    /// The comparable/displayable value for a column.
    ///
    /// Returns `None` if the column index is out of bounds.
    fn cell(&self, column: usize) -> Option<CellValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_kind_orders_naturally() {
        assert_eq!(
            CellValue::Int(2).compare(&CellValue::Int(10)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Text("b".into()).compare(&CellValue::Text("a".into())),
            Ordering::Greater
        );
    }

    #[test]
    fn mixed_kinds_order_by_rank_without_panic() {
        assert_eq!(
            CellValue::Int(99).compare(&CellValue::Text("a".into())),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Float(f64::NAN).compare(&CellValue::Float(f64::NAN)),
            Ordering::Equal
        );
    }
}
