//! The 16-color ANSI palette shared by the canvas and the exporters.

/// A named palette color. The sixteen CGA colors in palette order, plus
/// the two attribute pseudo-colors `Default` and `Transparent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnsiColor {
    Black,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Brown,
    LightGray,
    DarkGray,
    LightBlue,
    LightGreen,
    LightCyan,
    LightRed,
    LightMagenta,
    Yellow,
    White,
    /// The output medium's default color.
    Default,
    /// No color at all; exporters that support it leave the cell
    /// background unpainted.
    Transparent,
}

impl AnsiColor {
    /// Palette lookup by index (0-15).
    pub const fn from_index(index: u8) -> Option<AnsiColor> {
        Some(match index {
            0 => AnsiColor::Black,
            1 => AnsiColor::Blue,
            2 => AnsiColor::Green,
            3 => AnsiColor::Cyan,
            4 => AnsiColor::Red,
            5 => AnsiColor::Magenta,
            6 => AnsiColor::Brown,
            7 => AnsiColor::LightGray,
            8 => AnsiColor::DarkGray,
            9 => AnsiColor::LightBlue,
            10 => AnsiColor::LightGreen,
            11 => AnsiColor::LightCyan,
            12 => AnsiColor::LightRed,
            13 => AnsiColor::LightMagenta,
            14 => AnsiColor::Yellow,
            15 => AnsiColor::White,
            _ => return None,
        })
    }

    /// Palette index (0-15), or `None` for the pseudo-colors.
    pub const fn index(self) -> Option<u8> {
        Some(match self {
            AnsiColor::Black => 0,
            AnsiColor::Blue => 1,
            AnsiColor::Green => 2,
            AnsiColor::Cyan => 3,
            AnsiColor::Red => 4,
            AnsiColor::Magenta => 5,
            AnsiColor::Brown => 6,
            AnsiColor::LightGray => 7,
            AnsiColor::DarkGray => 8,
            AnsiColor::LightBlue => 9,
            AnsiColor::LightGreen => 10,
            AnsiColor::LightCyan => 11,
            AnsiColor::LightRed => 12,
            AnsiColor::LightMagenta => 13,
            AnsiColor::Yellow => 14,
            AnsiColor::White => 15,
            AnsiColor::Default | AnsiColor::Transparent => return None,
        })
    }

    /// CGA palette value, or `None` for the pseudo-colors.
    pub const fn rgb(self) -> Option<(u8, u8, u8)> {
        Some(match self {
            AnsiColor::Black => (0x00, 0x00, 0x00),
            AnsiColor::Blue => (0x00, 0x00, 0xAA),
            AnsiColor::Green => (0x00, 0xAA, 0x00),
            AnsiColor::Cyan => (0x00, 0xAA, 0xAA),
            AnsiColor::Red => (0xAA, 0x00, 0x00),
            AnsiColor::Magenta => (0xAA, 0x00, 0xAA),
            AnsiColor::Brown => (0xAA, 0x55, 0x00),
            AnsiColor::LightGray => (0xAA, 0xAA, 0xAA),
            AnsiColor::DarkGray => (0x55, 0x55, 0x55),
            AnsiColor::LightBlue => (0x55, 0x55, 0xFF),
            AnsiColor::LightGreen => (0x55, 0xFF, 0x55),
            AnsiColor::LightCyan => (0x55, 0xFF, 0xFF),
            AnsiColor::LightRed => (0xFF, 0x55, 0x55),
            AnsiColor::LightMagenta => (0xFF, 0x55, 0xFF),
            AnsiColor::Yellow => (0xFF, 0xFF, 0x55),
            AnsiColor::White => (0xFF, 0xFF, 0xFF),
            AnsiColor::Default | AnsiColor::Transparent => return None,
        })
    }

    /// Color lookup by name, for command-line arguments.
    pub fn from_name(name: &str) -> Option<AnsiColor> {
        Some(match name.to_ascii_lowercase().as_str() {
            "black" => AnsiColor::Black,
            "blue" => AnsiColor::Blue,
            "green" => AnsiColor::Green,
            "cyan" => AnsiColor::Cyan,
            "red" => AnsiColor::Red,
            "magenta" => AnsiColor::Magenta,
            "brown" => AnsiColor::Brown,
            "lightgray" | "lightgrey" => AnsiColor::LightGray,
            "darkgray" | "darkgrey" => AnsiColor::DarkGray,
            "lightblue" => AnsiColor::LightBlue,
            "lightgreen" => AnsiColor::LightGreen,
            "lightcyan" => AnsiColor::LightCyan,
            "lightred" => AnsiColor::LightRed,
            "lightmagenta" => AnsiColor::LightMagenta,
            "yellow" => AnsiColor::Yellow,
            "white" => AnsiColor::White,
            "default" => AnsiColor::Default,
            "transparent" => AnsiColor::Transparent,
            _ => return None,
        })
    }
}

/// Per-glyph foreground cycling over the 13 mid-palette colors
/// (Blue through LightMagenta) on a fixed background.
///
/// The step advances once per codepoint whether or not a glyph was drawn
/// for it.
#[derive(Clone, Debug)]
pub struct ColorCycle {
    bg: AnsiColor,
    step: usize,
}

impl ColorCycle {
    pub fn new(bg: AnsiColor) -> Self {
        Self { bg, step: 0 }
    }

    /// Step the cycle and return the (foreground, background) pair for
    /// the next glyph.
    pub fn advance(&mut self) -> (AnsiColor, AnsiColor) {
        self.step += 1;
        let fg = AnsiColor::from_index((1 + self.step % 13) as u8).unwrap_or(AnsiColor::Blue);
        (fg, self.bg)
    }
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new(AnsiColor::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cycle_starts_at_green_and_wraps_after_thirteen() {
        let mut cycle = ColorCycle::default();
        let first: Vec<AnsiColor> = (0..14).map(|_| cycle.advance().0).collect();
        assert_eq!(first[0], AnsiColor::Green);
        assert_eq!(first[1], AnsiColor::Cyan);
        assert_eq!(first[11], AnsiColor::LightMagenta);
        assert_eq!(first[12], AnsiColor::Blue);
        assert_eq!(first[13], AnsiColor::Green);
    }

    #[test]
    fn cycle_background_is_constant() {
        let mut cycle = ColorCycle::new(AnsiColor::Black);
        for _ in 0..20 {
            assert_eq!(cycle.advance().1, AnsiColor::Black);
        }
    }

    #[test]
    fn index_round_trip() {
        for i in 0..16 {
            let color = AnsiColor::from_index(i).unwrap();
            assert_eq!(color.index(), Some(i));
        }
        assert_eq!(AnsiColor::from_index(16), None);
        assert_eq!(AnsiColor::Transparent.index(), None);
    }
}
