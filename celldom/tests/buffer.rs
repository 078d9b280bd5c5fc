//! Buffer drawing and diff tests.

use celldom::{Buffer, Rect, Rgb, TextStyle};

const FG: Rgb = Rgb::hex(0xE0E0E0);
const BG: Rgb = Rgb::hex(0x101010);

#[test]
fn draw_str_returns_next_column() {
    let mut buf = Buffer::new(20, 3);
    let next = buf.draw_str(2, 1, "abc", FG, BG, TextStyle::new(), buf.area());
    assert_eq!(next, 5);
    assert_eq!(buf.get(2, 1).unwrap().char, 'a');
    assert_eq!(buf.get(4, 1).unwrap().char, 'c');
}

#[test]
fn draw_str_clips_to_rect() {
    let mut buf = Buffer::new(20, 3);
    let clip = Rect::new(0, 0, 5, 3);
    buf.draw_str(3, 0, "hello", FG, BG, TextStyle::new(), clip);
    assert_eq!(buf.get(3, 0).unwrap().char, 'h');
    assert_eq!(buf.get(4, 0).unwrap().char, 'e');
    // Everything past the clip edge stays untouched.
    assert_eq!(buf.get(5, 0).unwrap().char, ' ');
}

#[test]
fn wide_glyphs_mark_continuation_cells() {
    let mut buf = Buffer::new(10, 1);
    let next = buf.draw_str(0, 0, "日x", FG, BG, TextStyle::new(), buf.area());
    assert_eq!(next, 3);
    assert_eq!(buf.get(0, 0).unwrap().char, '日');
    assert!(buf.get(1, 0).unwrap().wide_continuation);
    assert_eq!(buf.get(2, 0).unwrap().char, 'x');
}

#[test]
fn wide_glyph_never_straddles_the_clip_edge() {
    let mut buf = Buffer::new(10, 1);
    let clip = Rect::new(0, 0, 3, 1);
    buf.draw_str(0, 0, "日本", FG, BG, TextStyle::new(), clip);
    assert_eq!(buf.get(0, 0).unwrap().char, '日');
    // The second glyph needs columns 2..4 and column 3 is outside.
    assert_eq!(buf.get(2, 0).unwrap().char, ' ');
}

#[test]
fn diff_reports_only_changed_cells() {
    let old = Buffer::new(8, 2);
    let mut new = Buffer::new(8, 2);
    new.draw_str(1, 1, "ab", FG, BG, TextStyle::new(), new.area());

    let changed: Vec<(u16, u16, char)> = new.diff(&old).map(|(x, y, c)| (x, y, c.char)).collect();
    assert_eq!(changed, [(1, 1, 'a'), (2, 1, 'b')]);
}

#[test]
fn identical_buffers_have_empty_diff() {
    let a = Buffer::new(4, 4);
    let b = a.clone();
    assert_eq!(a.diff(&b).count(), 0);
}
