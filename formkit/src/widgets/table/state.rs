//! Table widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::widgets::selection::{Selection, SelectionMode};

use super::row::{Column, SortDirection, TableRow};

/// Unique identifier for a Table widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// State change notifications drained by the page after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// The selection set changed (toggle or prune).
    SelectionChange,
    /// The sort key or direction changed.
    SortChange,
}

/// Internal state for the Table widget.
#[derive(Debug)]
struct TableInner<T: TableRow> {
    /// Column definitions.
    columns: Vec<Column>,
    /// The rows, in caller-supplied order. Never reordered.
    rows: Vec<T>,
    /// Display order: indices into `rows`. Identity until a sort is set.
    view: Vec<usize>,
    /// Selection state (by row ID).
    selection: Selection,
    /// Selection mode.
    selection_mode: SelectionMode,
    /// Cursor position as an index into `view`.
    cursor: Option<usize>,
    /// Which header the header cursor is on.
    header_cursor: usize,
    /// Current sort state. Once set it never returns to `None`.
    sort: Option<(usize, SortDirection)>,
    /// Loading placeholder state; suppresses all interaction.
    loading: bool,
    /// Pending notifications.
    events: Vec<TableEvent>,
}

impl<T: TableRow> TableInner<T> {
    fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            view: Vec::new(),
            selection: Selection::new(),
            selection_mode: SelectionMode::None,
            cursor: None,
            header_cursor: 0,
            sort: None,
            loading: false,
            events: Vec::new(),
        }
    }

    fn all_ids(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.id()).collect()
    }

    /// Recompute `view` from `rows` and the current sort state.
    ///
    /// The sort is stable: rows with equal keys keep their relative
    /// order from `rows`.
    fn rebuild_view(&mut self) {
        self.view = (0..self.rows.len()).collect();
        if let Some((col, direction)) = self.sort {
            let rows = &self.rows;
            self.view.sort_by(|&a, &b| {
                let ord = match (rows[a].cell(col), rows[b].cell(col)) {
                    (Some(va), Some(vb)) => va.compare(&vb),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                };
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }
    }
}

/// A table widget with sortable columns and row selection.
///
/// `Table<T>` keeps the caller's row order untouched and derives a
/// sorted view over it. Selection is keyed by row ID, so it is
/// independent of the display order, and selected rows are always
/// reported in the original data order.
#[derive(Debug)]
pub struct Table<T: TableRow> {
    id: TableId,
    inner: Arc<RwLock<TableInner<T>>>,
    dirty: Arc<AtomicBool>,
}

impl<T: TableRow> Table<T> {
    /// Create a new table with column definitions.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner::new(columns))),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a table with initial rows.
    pub fn with_rows(columns: Vec<Column>, rows: Vec<T>) -> Self {
        let table = Self::new(columns);
        if let Ok(mut guard) = table.inner.write() {
            guard.rows = rows;
            guard.rebuild_view();
        }
        table
    }

    /// Set the selection mode.
    pub fn with_selection_mode(self, mode: SelectionMode) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.selection_mode = mode;
        }
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Column access
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.inner.read().map(|g| g.columns.len()).unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Row access
    // -------------------------------------------------------------------------

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all rows in the caller-supplied order.
    pub fn rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Get the rows in display order (sorted view).
    pub fn view_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.view.iter().map(|&i| g.rows[i].clone()).collect())
            .unwrap_or_default()
    }

    /// Replace all rows.
    ///
    /// The sorted view is rebuilt under the current sort state. Selected
    /// IDs that no longer exist are pruned; survivors stay selected.
    pub fn set_rows(&self, rows: Vec<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows = rows;
            guard.rebuild_view();
            let live = guard.all_ids();
            let pruned = guard.selection.prune(&live);
            if !pruned.is_empty() {
                log::debug!("pruned {} stale selected ids on row replacement", pruned.len());
                guard.events.push(TableEvent::SelectionChange);
            }
            if let Some(cursor) = guard.cursor
                && cursor >= guard.view.len()
            {
                guard.cursor = guard.view.len().checked_sub(1);
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// Check the loading flag.
    pub fn loading(&self) -> bool {
        self.inner.read().map(|g| g.loading).unwrap_or(false)
    }

    /// Set the loading flag. While loading the table renders a
    /// placeholder and ignores all interaction.
    pub fn set_loading(&self, loading: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.loading = loading;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    /// Get the current cursor position (index into the sorted view).
    pub fn cursor(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|g| g.cursor)
    }

    /// Get the row under the cursor.
    pub fn cursor_row(&self) -> Option<T> {
        self.inner.read().ok().and_then(|g| {
            g.cursor
                .and_then(|c| g.view.get(c))
                .map(|&i| g.rows[i].clone())
        })
    }

    /// Get the ID of the row under the cursor.
    pub fn cursor_id(&self) -> Option<String> {
        self.inner.read().ok().and_then(|g| {
            g.cursor
                .and_then(|c| g.view.get(c))
                .map(|&i| g.rows[i].id())
        })
    }

    /// Move cursor up. Returns `(previous, new)` if moved.
    pub fn cursor_up(&self) -> Option<(Option<usize>, usize)> {
        if let Ok(mut guard) = self.inner.write() {
            if guard.loading {
                return None;
            }
            let previous = guard.cursor;
            if let Some(cursor) = guard.cursor {
                if cursor > 0 {
                    guard.cursor = Some(cursor - 1);
                    self.dirty.store(true, Ordering::SeqCst);
                    return Some((previous, cursor - 1));
                }
            } else if !guard.view.is_empty() {
                guard.cursor = Some(0);
                self.dirty.store(true, Ordering::SeqCst);
                return Some((None, 0));
            }
        }
        None
    }

    /// Move cursor down. Returns `(previous, new)` if moved.
    pub fn cursor_down(&self) -> Option<(Option<usize>, usize)> {
        if let Ok(mut guard) = self.inner.write() {
            if guard.loading {
                return None;
            }
            let previous = guard.cursor;
            let max_index = guard.view.len().saturating_sub(1);
            if let Some(cursor) = guard.cursor {
                if cursor < max_index {
                    guard.cursor = Some(cursor + 1);
                    self.dirty.store(true, Ordering::SeqCst);
                    return Some((previous, cursor + 1));
                }
            } else if !guard.view.is_empty() {
                guard.cursor = Some(0);
                self.dirty.store(true, Ordering::SeqCst);
                return Some((None, 0));
            }
        }
        None
    }

    /// Move cursor to the first row.
    pub fn cursor_first(&self) -> Option<(Option<usize>, usize)> {
        if let Ok(mut guard) = self.inner.write()
            && !guard.loading
            && !guard.view.is_empty()
        {
            let previous = guard.cursor;
            guard.cursor = Some(0);
            self.dirty.store(true, Ordering::SeqCst);
            return Some((previous, 0));
        }
        None
    }

    /// Move cursor to the last row.
    pub fn cursor_last(&self) -> Option<(Option<usize>, usize)> {
        if let Ok(mut guard) = self.inner.write()
            && !guard.loading
            && !guard.view.is_empty()
        {
            let previous = guard.cursor;
            let last = guard.view.len() - 1;
            guard.cursor = Some(last);
            self.dirty.store(true, Ordering::SeqCst);
            return Some((previous, last));
        }
        None
    }

    // -------------------------------------------------------------------------
    // Header cursor
    // -------------------------------------------------------------------------

    /// Which header the header cursor is on.
    pub fn header_cursor(&self) -> usize {
        self.inner.read().map(|g| g.header_cursor).unwrap_or(0)
    }

    /// Move the header cursor left.
    pub fn header_left(&self) {
        if let Ok(mut guard) = self.inner.write()
            && !guard.loading
            && guard.header_cursor > 0
        {
            guard.header_cursor -= 1;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move the header cursor right.
    pub fn header_right(&self) {
        if let Ok(mut guard) = self.inner.write()
            && !guard.loading
            && guard.header_cursor + 1 < guard.columns.len()
        {
            guard.header_cursor += 1;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get the selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.inner
            .read()
            .map(|g| g.selection_mode)
            .unwrap_or_default()
    }

    /// Get all selected IDs (sorted for deterministic ordering).
    pub fn selected_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| {
                let mut ids: Vec<String> = g
                    .rows
                    .iter()
                    .map(|row| row.id())
                    .filter(|id| g.selection.is_selected(id))
                    .collect();
                ids.sort();
                ids
            })
            .unwrap_or_default()
    }

    /// Get all selected rows, in the original data order.
    ///
    /// Selection stores IDs, not positions, so the report is independent
    /// of the current sort.
    pub fn selected_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| {
                g.rows
                    .iter()
                    .filter(|row| g.selection.is_selected(&row.id()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Check if a row is selected by ID.
    pub fn is_selected(&self, id: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_selected(id))
            .unwrap_or(false)
    }

    /// Toggle selection of a row by ID.
    /// Returns (added IDs, removed IDs).
    pub fn toggle_select(&self, id: &str) -> (Vec<String>, Vec<String>) {
        if let Ok(mut guard) = self.inner.write()
            && !guard.loading
            && guard.selection_mode == SelectionMode::Multiple
        {
            let result = guard.selection.toggle(id);
            guard.events.push(TableEvent::SelectionChange);
            self.dirty.store(true, Ordering::SeqCst);
            return result;
        }
        (vec![], vec![])
    }

    /// Toggle selection of the row under the cursor.
    pub fn toggle_select_at_cursor(&self) -> (Vec<String>, Vec<String>) {
        if let Some(id) = self.cursor_id() {
            self.toggle_select(&id)
        } else {
            (vec![], vec![])
        }
    }

    /// Select all rows. Returns the IDs that were newly selected.
    pub fn select_all(&self) -> Vec<String> {
        if let Ok(mut guard) = self.inner.write()
            && !guard.loading
            && guard.selection_mode == SelectionMode::Multiple
            && !guard.rows.is_empty()
        {
            let all_ids = guard.all_ids();
            let added = guard.selection.select_all(&all_ids);
            if !added.is_empty() {
                guard.events.push(TableEvent::SelectionChange);
            }
            self.dirty.store(true, Ordering::SeqCst);
            return added;
        }
        vec![]
    }

    /// Clear all selection. Returns the IDs that were deselected.
    pub fn deselect_all(&self) -> Vec<String> {
        if let Ok(mut guard) = self.inner.write() {
            if guard.loading {
                return vec![];
            }
            let removed = guard.selection.clear();
            if !removed.is_empty() {
                guard.events.push(TableEvent::SelectionChange);
                self.dirty.store(true, Ordering::SeqCst);
            }
            return removed;
        }
        vec![]
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get current sort state.
    pub fn sort(&self) -> Option<(usize, SortDirection)> {
        self.inner.read().ok().and_then(|g| g.sort)
    }

    /// Toggle sort for a column.
    ///
    /// Toggling the active column flips its direction; toggling a
    /// different sortable column sorts it ascending. There is no path
    /// back to the unsorted state. Non-sortable columns are a no-op.
    /// Returns the new sort state if it changed.
    pub fn toggle_sort(&self, column_index: usize) -> Option<(usize, SortDirection)> {
        if let Ok(mut guard) = self.inner.write()
            && !guard.loading
            && column_index < guard.columns.len()
            && guard.columns[column_index].sortable
        {
            let new_sort = match guard.sort {
                Some((idx, direction)) if idx == column_index => {
                    (column_index, direction.flipped())
                }
                _ => (column_index, SortDirection::Ascending),
            };
            guard.sort = Some(new_sort);

            // Keep the cursor on the same row across the reorder.
            let cursor_target = guard.cursor.and_then(|c| guard.view.get(c)).copied();
            guard.rebuild_view();
            if let Some(target) = cursor_target {
                guard.cursor = guard.view.iter().position(|&i| i == target);
            }

            log::debug!("sort set to column {} {:?}", new_sort.0, new_sort.1);
            guard.events.push(TableEvent::SortChange);
            self.dirty.store(true, Ordering::SeqCst);
            return Some(new_sort);
        }
        None
    }

    /// Toggle sort on the column under the header cursor.
    pub fn toggle_sort_at_header(&self) -> Option<(usize, SortDirection)> {
        let index = self.header_cursor();
        self.toggle_sort(index)
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Drain pending state-change notifications.
    pub fn take_events(&self) -> Vec<TableEvent> {
        self.inner
            .write()
            .map(|mut g| std::mem::take(&mut g.events))
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the table has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T: TableRow> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: TableRow> Default for Table<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
