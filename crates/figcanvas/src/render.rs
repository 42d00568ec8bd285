//! Glyph compositing onto a canvas.

use crate::canvas::Canvas;
use crate::color::ColorCycle;
use crate::figlet::FigFont;
use crate::glyph::Glyph;
use crate::smush::{smush_pair, LayoutMode};

/// One render pass: a cursor plus the accumulated glyph rows for one line
/// of text.
///
/// The accumulation buffer keeps hardblanks verbatim so glyph-edge
/// smushing can tell them apart from real spaces; the canvas only ever
/// sees them translated to spaces. Create a fresh renderer per pass.
pub struct FigRenderer<'f> {
    font: &'f FigFont,
    lines: Vec<Vec<char>>,
    x: usize,
    missing_advance: usize,
}

impl<'f> FigRenderer<'f> {
    pub fn new(font: &'f FigFont) -> Self {
        let missing_advance = font
            .glyph(' ')
            .map(Glyph::width)
            .filter(|w| *w > 0)
            .unwrap_or(1);
        Self {
            font,
            lines: vec![Vec::new(); font.height()],
            x: 0,
            missing_advance,
        }
    }

    /// Cursor advance used for codepoints the font has no glyph for.
    /// Defaults to the width of the font's space glyph.
    pub fn with_missing_advance(mut self, width: usize) -> Self {
        self.missing_advance = width;
        self
    }

    /// Column where the next glyph will be placed (before any overlap).
    pub fn cursor(&self) -> usize {
        self.x
    }

    pub fn put_str(&mut self, canvas: &mut Canvas, text: &str) {
        for ch in text.chars() {
            self.put_char(canvas, ch);
        }
    }

    /// Composite one codepoint's glyph at the cursor, merging its leading
    /// edge with the trailing edge already on the line per the font's
    /// layout rules, and advance the cursor by the glyph width minus the
    /// overlap. A codepoint with no glyph advances the cursor by the
    /// configured default width and writes nothing.
    pub fn put_char(&mut self, canvas: &mut Canvas, ch: char) {
        let font = self.font;
        let Some(glyph) = font.glyph(ch) else {
            for row in &mut self.lines {
                row.extend(std::iter::repeat(' ').take(self.missing_advance));
            }
            self.x += self.missing_advance;
            return;
        };

        let overlap = self.overlap_for(glyph);
        let start = self.x - overlap;
        let hardblank = font.hard_blank_char();
        let rules = font.header().horizontal_smushing();
        let direction = font.header().print_direction();

        for (y, glyph_row) in glyph.rows().enumerate() {
            let row = &mut self.lines[y];
            for (j, gc) in glyph_row.chars().enumerate() {
                let t = start + j;
                if t < row.len() {
                    let existing = row[t];
                    let merged = if existing == ' ' {
                        gc
                    } else if gc == ' ' {
                        existing
                    } else {
                        smush_pair(existing, gc, hardblank, rules, direction).unwrap_or(gc)
                    };
                    if merged != existing {
                        row[t] = merged;
                        canvas.put_char(t, y, displayed(merged, hardblank));
                    }
                } else {
                    row.push(gc);
                    canvas.put_char(t, y, displayed(gc, hardblank));
                }
            }
        }
        self.x = start + glyph.width();
    }

    /// The largest offset at which the new glyph's edge can share columns
    /// with the line without any row pair colliding unresolvably. Zero
    /// when the font's layout disables smushing, and zero when no
    /// positive offset resolves (that glyph pair falls back to pure
    /// kerning).
    fn overlap_for(&self, glyph: &Glyph) -> usize {
        if self.font.header().horiz_layout() != LayoutMode::Smushing {
            return 0;
        }
        let hardblank = self.font.hard_blank_char();
        let rules = self.font.header().horizontal_smushing();
        let direction = self.font.header().print_direction();
        let max = glyph.width().min(self.x);
        for overlap in (1..=max).rev() {
            let fits = glyph.rows().enumerate().all(|(y, glyph_row)| {
                let row = &self.lines[y];
                glyph_row.chars().take(overlap).enumerate().all(|(j, gc)| {
                    let t = self.x - overlap + j;
                    let existing = if t < row.len() { row[t] } else { ' ' };
                    existing == ' '
                        || gc == ' '
                        || smush_pair(existing, gc, hardblank, rules, direction).is_some()
                })
            });
            if fits {
                return overlap;
            }
        }
        0
    }
}

fn displayed(ch: char, hardblank: char) -> char {
    if ch == hardblank {
        ' '
    } else {
        ch
    }
}

/// Render `text` the way the original web demo does: one palette step and
/// one `set_color` per codepoint, drawn or not, then composite the glyph.
pub fn render_colored(canvas: &mut Canvas, font: &FigFont, text: &str) {
    let mut renderer = FigRenderer::new(font);
    let mut cycle = ColorCycle::default();
    for ch in text.chars() {
        let (fg, bg) = cycle.advance();
        canvas.set_color(fg, bg);
        renderer.put_char(canvas, ch);
    }
}
