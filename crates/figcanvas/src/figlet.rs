//! FIGlet (`.flf`) font parsing.
//!
//! A font definition is a `flf2a` header line, a comment block, the 95
//! required ASCII glyphs, the seven German glyphs, and any number of
//! code-tagged glyphs. Parsing performs no I/O; callers hand in the raw
//! buffer. A `.flf` wrapped in a ZIP archive is unwrapped transparently.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Cursor, Read};
use std::str::SplitWhitespace;

use zip::ZipArchive;

use crate::error::{FontError, Result};
use crate::glyph::Glyph;
use crate::smush::{HorizontalSmushing, LayoutMode, VerticalSmushing};

const SIGNATURE: &str = "flf2a";

/// Codepoints the FIGfont standard requires after the ASCII range
/// (Ä Ö Ü ä ö ü ß).
const DEUTSCH_CODEPOINTS: [u32; 7] = [196, 214, 220, 228, 246, 252, 223];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PrintDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Parsed `flf2a` header line plus the comment block that follows it.
#[derive(Clone, Debug)]
pub struct Header {
    hard_blank: char,
    height: usize,
    baseline: usize,
    max_length: usize,
    old_layout: i32,
    comment: String,
    print_direction: PrintDirection,
    full_layout: Option<u32>,
    codetag_count: Option<usize>,
    horiz_layout: LayoutMode,
    horizontal_smushing: HorizontalSmushing,
    vert_layout: LayoutMode,
    vertical_smushing: VerticalSmushing,
}

impl Header {
    /// Read the header line and its declared comment lines.
    pub fn read<R: BufRead>(reader: &mut R) -> Result<Self> {
        let Some(line) = read_trimmed_line(reader)? else {
            return Err(FontError::MalformedHeader("empty font data".into()));
        };
        let (mut header, comment_lines) = Self::parse_line(&line)?;
        let mut comment = String::new();
        for i in 0..comment_lines {
            let Some(line) = read_trimmed_line(reader)? else {
                return Err(FontError::MalformedHeader(format!(
                    "comment block truncated after {i} of {comment_lines} lines"
                )));
            };
            if i > 0 {
                comment.push('\n');
            }
            comment.push_str(&line);
        }
        header.comment = comment;
        Ok(header)
    }

    fn parse_line(line: &str) -> Result<(Self, usize)> {
        let mut parts = line.split_whitespace();
        let signature = parts
            .next()
            .ok_or_else(|| FontError::MalformedHeader("blank header line".into()))?;
        if !signature.starts_with(SIGNATURE) {
            return Err(FontError::MalformedHeader(format!(
                "missing {SIGNATURE} signature"
            )));
        }
        let hard_blank = signature
            .chars()
            .nth(SIGNATURE.len())
            .ok_or_else(|| FontError::MalformedHeader("missing hard blank character".into()))?;

        let height: usize = numeric_field(&mut parts, "height")?;
        if height == 0 {
            return Err(FontError::MalformedHeader("height must be at least 1".into()));
        }
        let baseline: usize = numeric_field(&mut parts, "baseline")?;
        let max_length: usize = numeric_field(&mut parts, "max length")?;
        let old_layout: i32 = numeric_field(&mut parts, "old layout")?;
        if !(-1..=63).contains(&old_layout) {
            return Err(FontError::InvalidLayout(old_layout));
        }
        let comment_lines: usize = numeric_field(&mut parts, "comment line count")?;

        let print_direction = match parts.next() {
            None => PrintDirection::LeftToRight,
            Some("0") => PrintDirection::LeftToRight,
            Some("1") => PrintDirection::RightToLeft,
            Some(other) => {
                return Err(FontError::MalformedHeader(format!(
                    "invalid print direction {other:?}"
                )))
            }
        };
        let full_layout = match parts.next() {
            None => None,
            Some(token) => {
                let value: i32 = token.parse().map_err(|_| {
                    FontError::MalformedHeader(format!("unparsable full layout {token:?}"))
                })?;
                if !(0..=32767).contains(&value) {
                    return Err(FontError::InvalidLayout(value));
                }
                Some(value as u32)
            }
        };
        let codetag_count = match parts.next() {
            None => None,
            Some(token) => Some(token.parse().map_err(|_| {
                FontError::MalformedHeader(format!("unparsable codetag count {token:?}"))
            })?),
        };

        let (horiz_layout, horizontal_smushing) = horizontal_layout(old_layout, full_layout);
        let (vert_layout, vertical_smushing) = vertical_layout(full_layout);

        Ok((
            Self {
                hard_blank,
                height,
                baseline,
                max_length,
                old_layout,
                comment: String::new(),
                print_direction,
                full_layout,
                codetag_count,
                horiz_layout,
                horizontal_smushing,
                vert_layout,
                vertical_smushing,
            },
            comment_lines,
        ))
    }

    pub fn hard_blank_char(&self) -> char {
        self.hard_blank
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn baseline(&self) -> usize {
        self.baseline
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn old_layout(&self) -> i32 {
        self.old_layout
    }

    pub fn full_layout(&self) -> Option<u32> {
        self.full_layout
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn print_direction(&self) -> PrintDirection {
        self.print_direction
    }

    pub fn horiz_layout(&self) -> LayoutMode {
        self.horiz_layout
    }

    pub fn horizontal_smushing(&self) -> HorizontalSmushing {
        self.horizontal_smushing
    }

    pub fn vert_layout(&self) -> LayoutMode {
        self.vert_layout
    }

    pub fn vertical_smushing(&self) -> VerticalSmushing {
        self.vertical_smushing
    }

    pub fn codetag_count(&self) -> Option<usize> {
        self.codetag_count
    }
}

fn numeric_field<T: std::str::FromStr>(parts: &mut SplitWhitespace, name: &str) -> Result<T> {
    let token = parts
        .next()
        .ok_or_else(|| FontError::MalformedHeader(format!("missing {name}")))?;
    token
        .parse()
        .map_err(|_| FontError::MalformedHeader(format!("unparsable {name} {token:?}")))
}

/// Derive the horizontal layout from the full-layout bits when present,
/// otherwise from the old layout code (-1 full, 0 fitting, >0 smushing
/// with the code's rule bits).
fn horizontal_layout(old_layout: i32, full_layout: Option<u32>) -> (LayoutMode, HorizontalSmushing) {
    match full_layout {
        Some(full) => {
            let rules = HorizontalSmushing::from_bits_truncate(full & 63);
            let mode = if full & 128 != 0 {
                LayoutMode::Smushing
            } else if full & 64 != 0 {
                LayoutMode::Fitting
            } else {
                LayoutMode::Full
            };
            (mode, rules)
        }
        None => match old_layout {
            -1 => (LayoutMode::Full, HorizontalSmushing::NONE),
            0 => (LayoutMode::Fitting, HorizontalSmushing::NONE),
            code => (
                LayoutMode::Smushing,
                HorizontalSmushing::from_bits_truncate(code as u32),
            ),
        },
    }
}

fn vertical_layout(full_layout: Option<u32>) -> (LayoutMode, VerticalSmushing) {
    match full_layout {
        Some(full) => {
            let rules = VerticalSmushing::from_bits_truncate((full >> 8) & 31);
            let mode = if full & 16384 != 0 {
                LayoutMode::Smushing
            } else if full & 8192 != 0 {
                LayoutMode::Fitting
            } else {
                LayoutMode::Full
            };
            (mode, rules)
        }
        None => (LayoutMode::Full, VerticalSmushing::NONE),
    }
}

/// An immutable FIGlet font: header metadata plus the codepoint → glyph
/// table. Safe to share between concurrent render passes.
#[derive(Clone, Debug)]
pub struct FigFont {
    header: Header,
    glyphs: HashMap<char, Glyph>,
}

impl FigFont {
    /// Parse a font from raw bytes. Accepts a plain `.flf` buffer or a
    /// ZIP archive containing one; bare gzip streams are rejected rather
    /// than pulling in a second decompression crate.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() >= 2 && bytes[0] == 0x1F && bytes[1] == 0x8B {
            return Err(FontError::MalformedHeader(
                "gzip compressed fonts are not supported; provide a plain or zipped .flf".into(),
            ));
        }
        if bytes.len() >= 4 && &bytes[0..4] == b"PK\x03\x04" {
            let content = unzip_flf(bytes)?;
            return Self::parse(&content);
        }
        let content = std::str::from_utf8(bytes)
            .map_err(|e| FontError::MalformedHeader(format!("font data is not valid UTF-8: {e}")))?;
        Self::parse(content)
    }

    fn parse(content: &str) -> Result<Self> {
        let mut reader = BufReader::new(content.as_bytes());
        let header = Header::read(&mut reader)?;
        let mut glyphs = HashMap::new();
        let mut ended = false;

        // Required ASCII range. A clean end of input at a glyph boundary
        // ends the load; partial fonts keep the glyphs they define.
        for cp in 32u32..=126 {
            match read_glyph(&mut reader, &header, cp)? {
                None => {
                    ended = true;
                    break;
                }
                Some(glyph) => {
                    if glyph.width() == 0 {
                        return Err(FontError::TruncatedGlyph { codepoint: cp });
                    }
                    // Codepoints in this range are always valid chars.
                    if let Some(ch) = char::from_u32(cp) {
                        glyphs.insert(ch, glyph);
                    }
                }
            }
        }

        if !ended {
            for cp in DEUTSCH_CODEPOINTS {
                match read_glyph(&mut reader, &header, cp)? {
                    None => {
                        ended = true;
                        break;
                    }
                    Some(glyph) => {
                        if glyph.width() > 0 {
                            if let Some(ch) = char::from_u32(cp) {
                                glyphs.insert(ch, glyph);
                            }
                        }
                    }
                }
            }
        }

        if !ended {
            // Code-tagged glyphs until end of input. An unparsable tag
            // line ends the load (trailing junk in the wild).
            while let Some(tag_line) = read_trimmed_line(&mut reader)? {
                let Some(code) = parse_codetag(&tag_line) else {
                    break;
                };
                let Some(glyph) = read_glyph(&mut reader, &header, code)? else {
                    return Err(FontError::TruncatedGlyph { codepoint: code });
                };
                if glyph.width() > 0 {
                    if let Some(ch) = char::from_u32(code) {
                        glyphs.insert(ch, glyph);
                    }
                }
            }
        }

        Ok(Self { header, glyphs })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn height(&self) -> usize {
        self.header.height
    }

    pub fn hard_blank_char(&self) -> char {
        self.header.hard_blank
    }

    /// The glyph for a codepoint. Absent codepoints are a recoverable
    /// condition; the compositor skips them and advances the cursor.
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn has_char(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}

fn unzip_flf(bytes: &[u8]) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| FontError::MalformedHeader(format!("zip open error: {e}")))?;
    for i in 0..archive.len() {
        let mut file = archive
            .by_index(i)
            .map_err(|e| FontError::MalformedHeader(format!("zip entry error: {e}")))?;
        if file.name().ends_with(".flf") {
            let mut buf = String::new();
            file.read_to_string(&mut buf)
                .map_err(|e| FontError::MalformedHeader(format!("zip read error: {e}")))?;
            return Ok(buf);
        }
    }
    Err(FontError::MalformedHeader(
        "zip archive contains no .flf entry".into(),
    ))
}

/// Read one glyph's rows, stripping the trailing endmark run from each
/// line. `Ok(None)` on clean end of input before the first row.
fn read_glyph<R: BufRead>(reader: &mut R, header: &Header, codepoint: u32) -> Result<Option<Glyph>> {
    let mut rows = Vec::with_capacity(header.height);
    for i in 0..header.height {
        let Some(line) = read_trimmed_line(reader)? else {
            if i == 0 {
                return Ok(None);
            }
            return Err(FontError::TruncatedGlyph { codepoint });
        };
        rows.push(strip_endmark(&line));
    }
    Ok(Some(Glyph::new(rows)))
}

/// Glyph lines end in a run of an endmark character (one mid-glyph, two
/// on the glyph's last line by convention; any repeat count is stripped).
fn strip_endmark(line: &str) -> String {
    match line.chars().last() {
        Some(end) => line.trim_end_matches(end).to_string(),
        None => String::new(),
    }
}

/// Code tags are `<code> <comment>` lines; codes may be decimal, hex
/// (`0x`), or octal (leading zero).
fn parse_codetag(line: &str) -> Option<u32> {
    let token = line.split_whitespace().next()?;
    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16).ok();
    }
    if token.len() > 1 && token.starts_with('0') {
        return u32::from_str_radix(&token[1..], 8).ok();
    }
    token.parse().ok()
}

fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let n = reader
        .read_line(&mut line)
        .map_err(|e| FontError::MalformedHeader(format!("read error: {e}")))?;
    if n == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
