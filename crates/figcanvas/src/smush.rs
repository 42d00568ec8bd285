//! Horizontal layout rules: the classic FIGlet smushing decision table.

use bitflags::bitflags;

use crate::figlet::PrintDirection;

/// How adjacent glyphs are laid out horizontally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// Glyphs keep their full width.
    Full,
    /// Glyphs are moved together until they touch (no column merging).
    Fitting,
    /// Glyph edges may share columns, merged by the smushing rules.
    Smushing,
}

bitflags! {
    /// Horizontal smushing rules, in header bit order. The bit order is
    /// also the evaluation priority.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct HorizontalSmushing: u32 {
        const NONE = 0;
        const EQUAL_CHARACTER = 1;
        const UNDERSCORE = 2;
        const HIERARCHY = 4;
        const OPPOSITE_PAIR = 8;
        const BIG_X = 16;
        const HARD_BLANK = 32;
    }
}

bitflags! {
    /// Vertical smushing rules (header bits 256-4096, shifted down).
    /// Parsed and reported; the renderer composes one text row per pass.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct VerticalSmushing: u32 {
        const NONE = 0;
        const EQUAL_CHARACTER = 1;
        const UNDERSCORE = 2;
        const HIERARCHY = 4;
        const HORIZONTAL_LINE = 8;
        const VERTICAL_LINE = 16;
    }
}

/// Character class ladder for the hierarchy rule; a higher class wins.
fn hierarchy_class(ch: char) -> Option<u8> {
    match ch {
        '|' => Some(1),
        '/' | '\\' => Some(2),
        '[' | ']' => Some(3),
        '{' | '}' => Some(4),
        '(' | ')' => Some(5),
        '<' | '>' => Some(6),
        _ => None,
    }
}

const UNDERSCORE_REPLACERS: &str = "|/\\[]{}()<>";

/// Try to merge the pair of characters that collide when two glyph edges
/// overlap. Returns the merged character, or `None` when the pair cannot
/// be resolved under the enabled rules.
///
/// A space on either side resolves trivially. With an empty rule set the
/// merge is universal: the later glyph's character wins (the earlier one
/// under right-to-left printing), except that a hardblank loses to any
/// visible character. With rules enabled, hardblanks only merge with each
/// other, and only under [`HorizontalSmushing::HARD_BLANK`].
pub fn smush_pair(
    l: char,
    r: char,
    hardblank: char,
    rules: HorizontalSmushing,
    direction: PrintDirection,
) -> Option<char> {
    if l == ' ' {
        return Some(r);
    }
    if r == ' ' {
        return Some(l);
    }
    if rules.is_empty() {
        if l == hardblank {
            return Some(r);
        }
        if r == hardblank {
            return Some(l);
        }
        return Some(match direction {
            PrintDirection::LeftToRight => r,
            PrintDirection::RightToLeft => l,
        });
    }
    if rules.contains(HorizontalSmushing::HARD_BLANK) && l == hardblank && r == hardblank {
        return Some(l);
    }
    if l == hardblank || r == hardblank {
        return None;
    }
    if rules.contains(HorizontalSmushing::EQUAL_CHARACTER) && l == r {
        return Some(l);
    }
    if rules.contains(HorizontalSmushing::UNDERSCORE) {
        if l == '_' && UNDERSCORE_REPLACERS.contains(r) {
            return Some(r);
        }
        if r == '_' && UNDERSCORE_REPLACERS.contains(l) {
            return Some(l);
        }
    }
    if rules.contains(HorizontalSmushing::HIERARCHY) {
        if let (Some(cl), Some(cr)) = (hierarchy_class(l), hierarchy_class(r)) {
            if cl != cr {
                return Some(if cl > cr { l } else { r });
            }
        }
    }
    if rules.contains(HorizontalSmushing::OPPOSITE_PAIR) {
        if matches!(
            (l, r),
            ('[', ']') | (']', '[') | ('{', '}') | ('}', '{') | ('(', ')') | (')', '(')
        ) {
            return Some('|');
        }
    }
    if rules.contains(HorizontalSmushing::BIG_X) {
        match (l, r) {
            ('/', '\\') => return Some('|'),
            ('\\', '/') => return Some('Y'),
            ('>', '<') => return Some('X'),
            _ => {}
        }
    }
    None
}
