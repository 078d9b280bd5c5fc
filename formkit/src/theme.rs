//! Color roles shared by all widgets.
//!
//! A theme names the handful of colors widgets draw with; concrete
//! widgets never hard-code RGB values.

use celldom::Rgb;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    pub text_muted: Rgb,
    pub primary: Rgb,
    pub error: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    /// Background of the row under the cursor.
    pub cursor_row: Rgb,
    /// Background of selected rows.
    pub selected_row: Rgb,
}

impl Theme {
    /// The default dark scheme.
    pub fn dark() -> Self {
        Self {
            background: Rgb::hex(0x14141E),
            surface: Rgb::hex(0x222230),
            text: Rgb::hex(0xE6E6EC),
            text_muted: Rgb::hex(0x8C8C9E),
            primary: Rgb::hex(0x7AA2F7),
            error: Rgb::hex(0xE06C75),
            success: Rgb::hex(0x98C379),
            warning: Rgb::hex(0xE5C07B),
            cursor_row: Rgb::hex(0xA277FF),
            selected_row: Rgb::hex(0x6E5494),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
