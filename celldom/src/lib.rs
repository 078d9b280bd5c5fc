//! Cell-buffer terminal rendering for formkit.
//!
//! `celldom` owns the low-level terminal concerns: a grid of styled cells,
//! diff-based flushing against the previous frame, raw-mode setup/teardown,
//! and the translation of crossterm input into widget-friendly key events.

mod buffer;
mod cell;
mod event;
mod rect;
mod style;
mod terminal;
mod text;

pub use buffer::Buffer;
pub use cell::Cell;
pub use event::{Key, KeyCombo, Modifiers, TermEvent};
pub use rect::Rect;
pub use style::{Rgb, TextStyle};
pub use terminal::Terminal;
pub use text::{char_width, str_width, truncate_width};
