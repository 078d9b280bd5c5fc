//! Rendering logic for the Table widget.

use celldom::{Buffer, Rect, TextStyle, truncate_width};

use crate::theme::Theme;
use crate::widgets::selection::SelectionMode;

use super::row::{Alignment, TableRow};
use super::state::Table;

/// Width of the selection indicator column.
const SELECT_WIDTH: u16 = 4;

/// Selection indicator (checkbox).
fn selection_indicator(selected: bool) -> &'static str {
    if selected { "■ " } else { "□ " }
}

fn aligned(text: &str, width: usize, align: Alignment) -> String {
    let text = truncate_width(text, width);
    let pad = width.saturating_sub(celldom::str_width(text));
    match align {
        Alignment::Left => format!("{text}{}", " ".repeat(pad)),
        Alignment::Right => format!("{}{text}", " ".repeat(pad)),
        Alignment::Center => {
            let left = pad / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(pad - left))
        }
    }
}

impl<T: TableRow> Table<T> {
    /// Render the table into `rect`.
    ///
    /// Layout: one header row, then data rows in sorted-view order.
    /// Loading and empty states render a placeholder and nothing else.
    pub fn render(&self, buf: &mut Buffer, rect: Rect, theme: &Theme, focused: bool) {
        if rect.is_empty() {
            return;
        }

        if self.loading() {
            buf.draw_str(
                rect.left() + 1,
                rect.top(),
                "Loading...",
                theme.text_muted,
                theme.background,
                TextStyle::new().dim(),
                rect,
            );
            self.clear_dirty();
            return;
        }

        if self.is_empty() {
            buf.draw_str(
                rect.left() + 1,
                rect.top(),
                "No data available",
                theme.text_muted,
                theme.background,
                TextStyle::new().dim(),
                rect,
            );
            self.clear_dirty();
            return;
        }

        let columns = self.columns();
        let selectable = self.selection_mode() == SelectionMode::Multiple;
        let sort = self.sort();
        let header_cursor = self.header_cursor();

        // Header row.
        let mut x = rect.left();
        if selectable {
            buf.draw_str(
                x,
                rect.top(),
                &aligned("Sel", SELECT_WIDTH as usize, Alignment::Left),
                theme.text_muted,
                theme.surface,
                TextStyle::new().bold(),
                rect,
            );
            x += SELECT_WIDTH;
        }
        for (i, col) in columns.iter().enumerate() {
            let mut title = col.header.clone();
            if let Some((active, direction)) = sort
                && active == i
            {
                title.push(' ');
                title.push(direction.indicator());
            }
            let mut style = TextStyle::new().bold();
            if focused && i == header_cursor {
                style = style.underline();
            }
            let fg = if col.sortable {
                theme.text
            } else {
                theme.text_muted
            };
            buf.draw_str(
                x,
                rect.top(),
                &aligned(&title, col.width as usize, col.align),
                fg,
                theme.surface,
                style,
                rect,
            );
            x += col.width;
        }

        // Data rows, in sorted-view order.
        let cursor = self.cursor();
        for (row_index, row) in self.view_rows().iter().enumerate() {
            let y = rect.top() + 1 + row_index as u16;
            if y >= rect.bottom() {
                break;
            }
            let is_cursor = focused && cursor == Some(row_index);
            let is_selected = self.is_selected(&row.id());
            let (fg, bg) = if is_cursor {
                (theme.background, theme.cursor_row)
            } else if is_selected {
                (theme.background, theme.selected_row)
            } else {
                (theme.text, theme.background)
            };

            let mut x = rect.left();
            if selectable {
                buf.draw_str(
                    x,
                    y,
                    &aligned(
                        selection_indicator(is_selected),
                        SELECT_WIDTH as usize,
                        Alignment::Left,
                    ),
                    fg,
                    bg,
                    TextStyle::new(),
                    rect,
                );
                x += SELECT_WIDTH;
            }
            for (col_index, col) in columns.iter().enumerate() {
                let text = row
                    .cell(col_index)
                    .map(|v| v.display())
                    .unwrap_or_default();
                buf.draw_str(
                    x,
                    y,
                    &aligned(&text, col.width as usize, col.align),
                    fg,
                    bg,
                    TextStyle::new(),
                    rect,
                );
                x += col.width;
            }
        }

        self.clear_dirty();
    }

    /// Rows the table needs to render fully, including the header.
    pub fn height(&self) -> u16 {
        if self.loading() || self.is_empty() {
            1
        } else {
            1 + self.len() as u16
        }
    }
}
