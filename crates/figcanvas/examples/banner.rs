//! Render a banner with the bundled fixture font and print it as ANSI.

use figcanvas::{export, render_colored, Canvas, FigFont};

fn main() {
    let source = include_str!("../tests/fonts/small.flf");
    let font = FigFont::from_bytes(source.as_bytes()).expect("fixture font parses");
    let mut canvas = Canvas::default();
    render_colored(&mut canvas, &font, "FIGCANVAS");
    let out = export(&canvas, "ansi").expect("ansi is a known format");
    print!("{}", String::from_utf8_lossy(&out));
}
