use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a single character in terminal columns.
pub fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Display width of a string in terminal columns.
pub fn str_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to at most `max` terminal columns.
pub fn truncate_width(s: &str, max: usize) -> &str {
    let mut used = 0;
    for (i, c) in s.char_indices() {
        let w = char_width(c);
        if used + w > max {
            return &s[..i];
        }
        used += w;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_width("hello", 3), "hel");
        assert_eq!(truncate_width("hello", 10), "hello");
    }

    #[test]
    fn truncate_wide_glyphs() {
        // Each CJK glyph is two columns; an odd budget cannot split one.
        assert_eq!(truncate_width("日本語", 4), "日本");
        assert_eq!(truncate_width("日本語", 3), "日");
    }
}
