//! Rendering logic for the TextField widget.

use celldom::{Buffer, Rect, Rgb, TextStyle, str_width, truncate_width};

use crate::theme::Theme;
use crate::validation::ErrorDisplay;

use super::state::{FieldKind, TextField, Variant};

/// Clear affordance shown while a clearable field holds text.
const CLEAR_GLYPH: char = '✕';

fn reveal_glyph(revealed: bool) -> char {
    if revealed { '◉' } else { '◎' }
}

impl TextField {
    /// Rows the field needs to render fully: optional label, the input
    /// row (three rows when outlined), and an optional message row.
    pub fn height(&self) -> u16 {
        let label = u16::from(self.label_text().is_some());
        let input = if self.variant_token() == Variant::Outlined {
            3
        } else {
            1
        };
        let message =
            u16::from(self.message().is_some() && self.display_mode() == ErrorDisplay::Below);
        label + input + message
    }

    /// Render the field into `rect`.
    pub fn render(&self, buf: &mut Buffer, rect: Rect, theme: &Theme, focused: bool) {
        if rect.is_empty() {
            return;
        }

        let invalid = self.invalid();
        let disabled = self.is_disabled();
        let variant = self.variant_token();
        let mut y = rect.top();

        // Label row.
        if let Some(label) = self.label_text() {
            let fg = if invalid {
                theme.error
            } else if focused {
                theme.primary
            } else {
                theme.text
            };
            let style = if disabled {
                TextStyle::new().dim()
            } else {
                TextStyle::new()
            };
            buf.draw_str(rect.left(), y, &label, fg, theme.background, style, rect);
            y += 1;
        }

        // Input row (the bordered box spans three rows when outlined).
        let accent = if invalid {
            theme.error
        } else if focused {
            theme.primary
        } else {
            theme.text_muted
        };
        let inner = match variant {
            Variant::Outlined => {
                let boxed = Rect::new(rect.left(), y, rect.width, 3);
                draw_border(buf, boxed, accent, theme.background, rect);
                y += 3;
                boxed.shrink(1, 1 + self.size_token().pad(), 1, 1 + self.size_token().pad())
            }
            Variant::Filled => {
                let row = Rect::new(rect.left(), y, rect.width, 1);
                buf.fill(row, theme.surface);
                y += 1;
                row.shrink(0, self.size_token().pad(), 0, self.size_token().pad())
            }
            Variant::Ghost => {
                let row = Rect::new(rect.left(), y, rect.width, 1);
                y += 1;
                row.shrink(0, self.size_token().pad(), 0, self.size_token().pad())
            }
        };
        self.render_input_row(buf, inner, rect, theme, focused, accent);

        // Message row: error while invalid, helper otherwise.
        if self.display_mode() == ErrorDisplay::Below
            && let Some((message, is_error)) = self.message()
        {
            let (fg, style) = if is_error {
                (theme.error, TextStyle::new())
            } else {
                (theme.text_muted, TextStyle::new().dim())
            };
            buf.draw_str(rect.left(), y, &message, fg, theme.background, style, rect);
        }

        self.clear_dirty();
    }

    fn render_input_row(
        &self,
        buf: &mut Buffer,
        inner: Rect,
        clip: Rect,
        theme: &Theme,
        focused: bool,
        accent: Rgb,
    ) {
        if inner.is_empty() {
            return;
        }

        let variant = self.variant_token();
        let bg = if variant == Variant::Filled {
            theme.surface
        } else {
            theme.background
        };
        let base_style = if variant == Variant::Ghost {
            TextStyle::new().underline()
        } else {
            TextStyle::new()
        };

        let value = self.value();
        let masked = self.field_kind() == FieldKind::Maskable && !self.revealed();

        // Suffix affordances eat into the text budget from the right.
        let mut suffix = String::new();
        if self.field_kind() == FieldKind::Maskable {
            suffix.push(reveal_glyph(self.revealed()));
        }
        if self.is_clearable() && !value.is_empty() {
            if !suffix.is_empty() {
                suffix.push(' ');
            }
            suffix.push(CLEAR_GLYPH);
        }
        let suffix_width = if suffix.is_empty() {
            0
        } else {
            str_width(&suffix) + 1
        };
        let text_budget = (inner.width as usize).saturating_sub(suffix_width);

        let y = inner.top();
        if value.is_empty() {
            let placeholder = self.placeholder_text();
            buf.draw_str(
                inner.left(),
                y,
                truncate_width(&placeholder, text_budget),
                theme.text_muted,
                bg,
                base_style.dim(),
                clip,
            );
        } else {
            let display = if masked {
                "•".repeat(value.chars().count())
            } else {
                value.clone()
            };
            let fg = if self.is_disabled() {
                theme.text_muted
            } else {
                theme.text
            };
            buf.draw_str(
                inner.left(),
                y,
                truncate_width(&display, text_budget),
                fg,
                bg,
                base_style,
                clip,
            );
        }

        // Block cursor on the focused field.
        if focused && !self.is_disabled() {
            let cursor_col = if masked {
                value[..self.cursor()].chars().count()
            } else {
                str_width(&value[..self.cursor()])
            };
            if cursor_col < inner.width as usize {
                let x = inner.left() + cursor_col as u16;
                let under = buf.get(x, y).map(|c| c.char).unwrap_or(' ');
                buf.draw_str(
                    x,
                    y,
                    &under.to_string(),
                    theme.background,
                    accent,
                    base_style,
                    clip,
                );
            }
        }

        if !suffix.is_empty() {
            let x = inner.right().saturating_sub(str_width(&suffix) as u16);
            buf.draw_str(x, y, &suffix, theme.text_muted, bg, base_style, clip);
        }
    }
}

fn draw_border(buf: &mut Buffer, boxed: Rect, fg: Rgb, bg: Rgb, clip: Rect) {
    if boxed.width < 2 || boxed.height < 2 {
        return;
    }
    let horizontal = "─".repeat(boxed.width as usize - 2);
    let style = TextStyle::new();
    buf.draw_str(
        boxed.left(),
        boxed.top(),
        &format!("┌{horizontal}┐"),
        fg,
        bg,
        style,
        clip,
    );
    for y in boxed.top() + 1..boxed.bottom() - 1 {
        buf.draw_str(boxed.left(), y, "│", fg, bg, style, clip);
        buf.draw_str(boxed.right() - 1, y, "│", fg, bg, style, clip);
    }
    buf.draw_str(
        boxed.left(),
        boxed.bottom() - 1,
        &format!("└{horizontal}┘"),
        fg,
        bg,
        style,
        clip,
    );
}
