//! Canvas serialization to textual formats.
//!
//! Exporters only read the canvas; exporting the same canvas twice yields
//! byte-identical output.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::canvas::Canvas;
use crate::color::AnsiColor;
use crate::error::ExportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Colored HTML3 table, one `<td>` per run of same-colored cells.
    Html3,
    /// 16-color SGR escape sequences.
    Ansi,
    /// Characters only.
    Text,
}

static FORMATS: Lazy<HashMap<&'static str, ExportFormat>> = Lazy::new(|| {
    HashMap::from([
        ("html3", ExportFormat::Html3),
        ("ansi", ExportFormat::Ansi),
        ("text", ExportFormat::Text),
        ("utf8", ExportFormat::Text),
    ])
});

impl ExportFormat {
    pub fn by_name(name: &str) -> Result<Self, ExportError> {
        FORMATS
            .get(name)
            .copied()
            .ok_or_else(|| ExportError::UnsupportedFormat(name.to_string()))
    }

    /// Recognized format names, sorted.
    pub fn names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = FORMATS.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn export(self, canvas: &Canvas) -> Vec<u8> {
        match self {
            ExportFormat::Html3 => html3(canvas),
            ExportFormat::Ansi => ansi(canvas),
            ExportFormat::Text => text(canvas),
        }
    }
}

/// Serialize `canvas` in the named format.
pub fn export(canvas: &Canvas, format: &str) -> Result<Vec<u8>, ExportError> {
    Ok(ExportFormat::by_name(format)?.export(canvas))
}

fn fg_hex(color: AnsiColor) -> String {
    // The default foreground renders as light gray, like a terminal.
    let (r, g, b) = color.rgb().unwrap_or((0xAA, 0xAA, 0xAA));
    format!("{r:02x}{g:02x}{b:02x}")
}

/// `None` leaves the cell background unpainted (transparent); the default
/// background renders as black.
fn bg_hex(color: AnsiColor) -> Option<String> {
    match color {
        AnsiColor::Transparent => None,
        other => {
            let (r, g, b) = other.rgb().unwrap_or((0x00, 0x00, 0x00));
            Some(format!("{r:02x}{g:02x}{b:02x}"))
        }
    }
}

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        ' ' => out.push_str("&nbsp;"),
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        _ => out.push(ch),
    }
}

fn html3(canvas: &Canvas) -> Vec<u8> {
    let mut out = String::new();
    out.push_str(&format!(
        "<table cols='{}' rows='{}' border='0' cellpadding='0' cellspacing='0'>\n",
        canvas.width(),
        canvas.height()
    ));
    for row in canvas.rows() {
        out.push_str("<tr>");
        let mut x = 0;
        while x < row.len() {
            let first = row[x];
            let mut end = x + 1;
            while end < row.len() && row[end].fg == first.fg && row[end].bg == first.bg {
                end += 1;
            }
            match bg_hex(first.bg) {
                Some(bg) => out.push_str(&format!("<td bgcolor=\"#{bg}\">")),
                None => out.push_str("<td>"),
            }
            out.push_str(&format!("<font color=\"#{}\">", fg_hex(first.fg)));
            for cell in &row[x..end] {
                push_escaped(&mut out, cell.ch);
            }
            out.push_str("</font></td>");
            x = end;
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");
    out.into_bytes()
}

// CGA palette order differs from the SGR code order.
const SGR_ORDER: [u8; 8] = [0, 4, 2, 6, 1, 5, 3, 7];

fn sgr_fg(color: AnsiColor) -> u8 {
    match color.index() {
        Some(i) if i < 8 => 30 + SGR_ORDER[i as usize],
        Some(i) => 90 + SGR_ORDER[(i - 8) as usize],
        None => 39,
    }
}

fn sgr_bg(color: AnsiColor) -> u8 {
    match color.index() {
        Some(i) if i < 8 => 40 + SGR_ORDER[i as usize],
        Some(i) => 100 + SGR_ORDER[(i - 8) as usize],
        None => 49,
    }
}

fn ansi(canvas: &Canvas) -> Vec<u8> {
    let mut out = String::new();
    for row in canvas.rows() {
        let mut current: Option<(AnsiColor, AnsiColor)> = None;
        for cell in row {
            if current != Some((cell.fg, cell.bg)) {
                out.push_str(&format!("\x1b[0;{};{}m", sgr_fg(cell.fg), sgr_bg(cell.bg)));
                current = Some((cell.fg, cell.bg));
            }
            out.push(cell.ch);
        }
        out.push_str("\x1b[0m\n");
    }
    out.into_bytes()
}

fn text(canvas: &Canvas) -> Vec<u8> {
    let mut out = String::new();
    for row in canvas.rows() {
        for cell in row {
            out.push(cell.ch);
        }
        out.push('\n');
    }
    out.into_bytes()
}
