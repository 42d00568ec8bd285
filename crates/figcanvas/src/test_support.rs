//! Test support utilities for figcanvas.
//!
//! Builders for small in-memory `.flf` buffers so tests exercise the real
//! parser instead of poking font internals. Not part of the stable API.

use crate::figlet::FigFont;

/// Build a parseable `.flf` buffer with the given height and layout
/// fields. Every required ASCII codepoint gets a one-column hardblank
/// placeholder unless overridden in `glyphs`; override rows must match
/// `height`.
pub fn font_source(
    height: usize,
    old_layout: i32,
    full_layout: Option<u32>,
    glyphs: &[(char, &[&str])],
) -> String {
    let mut out = match full_layout {
        Some(full) => format!("flf2a$ {height} {height} 24 {old_layout} 1 0 {full}\n"),
        None => format!("flf2a$ {height} {height} 24 {old_layout} 1\n"),
    };
    out.push_str("figcanvas test fixture\n");
    for cp in 32u8..=126 {
        let ch = cp as char;
        let rows = glyphs.iter().find(|(g, _)| *g == ch).map(|(_, rows)| *rows);
        for i in 0..height {
            match rows {
                Some(rows) => out.push_str(rows[i]),
                None => out.push('$'),
            }
            out.push_str(if i + 1 == height { "@@" } else { "@" });
            out.push('\n');
        }
    }
    out
}

/// Parse a fixture built by [`font_source`].
pub fn font(
    height: usize,
    old_layout: i32,
    full_layout: Option<u32>,
    glyphs: &[(char, &[&str])],
) -> FigFont {
    FigFont::from_bytes(font_source(height, old_layout, full_layout, glyphs).as_bytes())
        .expect("test fixture font must parse")
}
