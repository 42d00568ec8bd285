use std::io::{BufReader, Write};

use figcanvas::figlet::{FigFont, Header, PrintDirection};
use figcanvas::smush::{HorizontalSmushing, LayoutMode, VerticalSmushing};
use figcanvas::test_support;
use figcanvas::FontError;
use pretty_assertions::assert_eq;

#[test]
fn header_with_codetag() {
    let input = "flf2a$ 6 5 20 15 0 0 143 229";
    let mut reader = BufReader::new(input.as_bytes());
    let header = Header::read(&mut reader).unwrap();
    assert_eq!(header.hard_blank_char(), '$');
    assert_eq!(header.height(), 6);
    assert_eq!(header.baseline(), 5);
    assert_eq!(header.max_length(), 20);
    assert_eq!(header.comment(), "");
    assert_eq!(header.print_direction(), PrintDirection::LeftToRight);

    assert_eq!(header.horiz_layout(), LayoutMode::Smushing);
    assert_eq!(
        header.horizontal_smushing(),
        HorizontalSmushing::EQUAL_CHARACTER
            | HorizontalSmushing::UNDERSCORE
            | HorizontalSmushing::HIERARCHY
            | HorizontalSmushing::OPPOSITE_PAIR
    );

    assert_eq!(header.vert_layout(), LayoutMode::Full);
    assert_eq!(header.vertical_smushing(), VerticalSmushing::NONE);

    assert_eq!(header.codetag_count(), Some(229));
}

#[test]
fn header_no_codetag() {
    let input = "flf2a$ 6 5 20 15 0 0 143";
    let mut reader: BufReader<&[u8]> = BufReader::new(input.as_bytes());
    let header = Header::read(&mut reader).unwrap();
    assert_eq!(header.horiz_layout(), LayoutMode::Smushing);
    assert_eq!(
        header.horizontal_smushing(),
        HorizontalSmushing::EQUAL_CHARACTER
            | HorizontalSmushing::UNDERSCORE
            | HorizontalSmushing::HIERARCHY
            | HorizontalSmushing::OPPOSITE_PAIR
    );
    assert_eq!(header.codetag_count(), None);
}

#[test]
fn header_layout_derived_from_old_layout() {
    let input = "flf2a$ 6 5 20 15 0 0";
    let mut reader = BufReader::new(input.as_bytes());
    let header = Header::read(&mut reader).unwrap();
    assert_eq!(header.horiz_layout(), LayoutMode::Smushing);
    assert_eq!(
        header.horizontal_smushing(),
        HorizontalSmushing::EQUAL_CHARACTER
            | HorizontalSmushing::UNDERSCORE
            | HorizontalSmushing::HIERARCHY
            | HorizontalSmushing::OPPOSITE_PAIR
    );
    assert_eq!(header.vert_layout(), LayoutMode::Full);
    assert_eq!(header.vertical_smushing(), VerticalSmushing::NONE);

    let mut reader = BufReader::new("flf2a$ 6 5 20 -1 0".as_bytes());
    let header = Header::read(&mut reader).unwrap();
    assert_eq!(header.horiz_layout(), LayoutMode::Full);
    assert_eq!(header.horizontal_smushing(), HorizontalSmushing::NONE);

    let mut reader = BufReader::new("flf2a$ 6 5 20 0 0".as_bytes());
    let header = Header::read(&mut reader).unwrap();
    assert_eq!(header.horiz_layout(), LayoutMode::Fitting);
}

#[test]
fn header_comments() {
    let input = "flf2a$ 6 5 20 15 3 0 143 229\nfoo\nbar\nbaz";
    let mut reader = BufReader::new(input.as_bytes());
    let header = Header::read(&mut reader).unwrap();
    assert_eq!(header.comment(), "foo\nbar\nbaz");
}

#[test]
fn header_rejects_bad_input() {
    for input in ["", "TheDraw FONTS file", "flf2a", "flf2a$ x 5 20 0 0", "flf2a$ 0 0 20 0 0"] {
        let mut reader = BufReader::new(input.as_bytes());
        assert!(
            matches!(Header::read(&mut reader), Err(FontError::MalformedHeader(_))),
            "accepted {input:?}"
        );
    }
}

#[test]
fn header_rejects_out_of_range_layouts() {
    let mut reader = BufReader::new("flf2a$ 6 5 20 64 0".as_bytes());
    assert!(matches!(
        Header::read(&mut reader),
        Err(FontError::InvalidLayout(64))
    ));

    let mut reader = BufReader::new("flf2a$ 6 5 20 15 0 0 40000".as_bytes());
    assert!(matches!(
        Header::read(&mut reader),
        Err(FontError::InvalidLayout(40000))
    ));
}

#[test]
fn every_required_codepoint_gets_a_full_height_glyph() {
    let font = test_support::font(3, -1, None, &[('A', &[" A ", "A A", "AAA"])]);
    for cp in 32u32..=126 {
        let ch = char::from_u32(cp).unwrap();
        let glyph = font.glyph(ch).unwrap_or_else(|| panic!("missing {ch:?}"));
        assert_eq!(glyph.height(), 3);
    }
    assert_eq!(font.glyph_count(), 95);
    assert_eq!(font.glyph('A').unwrap().width(), 3);
}

#[test]
fn truncated_glyph_is_reported() {
    let mut source = test_support::font_source(3, -1, None, &[]);
    // Chop the buffer mid-glyph: drop the last line of the last glyph.
    source.truncate(source.trim_end().rfind('\n').unwrap() + 1);
    let err = FigFont::from_bytes(source.as_bytes()).unwrap_err();
    assert!(matches!(err, FontError::TruncatedGlyph { codepoint: 126 }));
}

#[test]
fn partial_font_keeps_parsed_glyphs() {
    let full = test_support::font_source(2, -1, None, &[]);
    // Keep header + comment + the first three glyphs (space, '!', '"').
    let prefix: String = full.lines().take(2 + 3 * 2).map(|l| format!("{l}\n")).collect();
    let font = FigFont::from_bytes(prefix.as_bytes()).unwrap();
    assert_eq!(font.glyph_count(), 3);
    assert!(font.has_char('!'));
    assert!(!font.has_char('#'));
}

#[test]
fn codetagged_glyphs_are_loaded() {
    let mut source = test_support::font_source(2, -1, None, &[]);
    // German block, then one tagged glyph.
    for _ in 0..7 {
        source.push_str("$@\n$@@\n");
    }
    source.push_str("0x2500 BOX DRAWINGS LIGHT HORIZONTAL\n--@\n--@@\n");
    let font = FigFont::from_bytes(source.as_bytes()).unwrap();
    assert!(font.has_char('Ä'));
    assert!(font.has_char('\u{2500}'));
    assert_eq!(font.glyph('\u{2500}').unwrap().width(), 2);
}

#[test]
fn zero_width_optional_glyphs_are_skipped() {
    let mut source = test_support::font_source(2, -1, None, &[]);
    // German glyphs stubbed out with bare endmarks.
    for _ in 0..7 {
        source.push_str("@\n@@\n");
    }
    let font = FigFont::from_bytes(source.as_bytes()).unwrap();
    assert!(!font.has_char('Ä'));
    assert!(!font.has_char('ß'));
    assert_eq!(font.glyph_count(), 95);
}

#[test]
fn zipped_font_equals_plain() {
    let source = test_support::font_source(3, 15, None, &[('A', &[" A ", "A A", "AAA"])]);
    let plain = FigFont::from_bytes(source.as_bytes()).unwrap();

    let mut buf = Vec::new();
    {
        let mut writer = zip::ZipWriter::new(std::io::Cursor::new(&mut buf));
        writer
            .start_file("fixture.flf", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(source.as_bytes()).unwrap();
        writer.finish().unwrap();
    }
    let zipped = FigFont::from_bytes(&buf).unwrap();

    assert_eq!(plain.glyph_count(), zipped.glyph_count());
    assert_eq!(plain.header().height(), zipped.header().height());
    assert_eq!(plain.glyph('A'), zipped.glyph('A'));
}

#[test]
fn gzip_font_is_rejected() {
    let err = FigFont::from_bytes(&[0x1F, 0x8B, 0x08, 0x00]).unwrap_err();
    assert!(matches!(err, FontError::MalformedHeader(_)));
}
