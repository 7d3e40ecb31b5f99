use crate::SourceBuffer;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn bump_moves_forward_one_column() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.bump();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
    assert_eq!((cursor.line(), cursor.col()), (1, 2));
}

#[test]
fn bump_through_entire_source() {
    let buf = SourceBuffer::new("hi");
    let mut cursor = buf.cursor();
    cursor.bump();
    cursor.bump();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn bump_at_eof_is_noop() {
    let buf = SourceBuffer::new("x");
    let mut cursor = buf.cursor();
    cursor.bump();
    cursor.bump();
    cursor.bump();
    assert_eq!(cursor.pos(), 1);
    assert_eq!((cursor.line(), cursor.col()), (1, 2));
}

#[test]
fn peek_returns_next_byte() {
    let buf = SourceBuffer::new("''");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), b'\'');
}

#[test]
fn peek_near_end_returns_sentinel() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.bump();
    assert_eq!(cursor.peek(), 0);
}

// === Line/Column Tracking ===

#[test]
fn newline_starts_next_line() {
    let buf = SourceBuffer::new("a\nb");
    let mut cursor = buf.cursor();
    cursor.bump();
    assert_eq!((cursor.line(), cursor.col()), (1, 2));
    cursor.bump();
    assert_eq!((cursor.line(), cursor.col()), (2, 1));
    cursor.bump();
    assert_eq!((cursor.line(), cursor.col()), (2, 2));
}

#[test]
fn carriage_return_is_an_ordinary_column() {
    let buf = SourceBuffer::new("\r\nx");
    let mut cursor = buf.cursor();
    cursor.bump();
    assert_eq!((cursor.line(), cursor.col()), (1, 2));
    cursor.bump();
    assert_eq!((cursor.line(), cursor.col()), (2, 1));
}

#[test]
fn multibyte_char_is_one_column() {
    let buf = SourceBuffer::new("ä€😀x");
    let mut cursor = buf.cursor();
    cursor.bump();
    assert_eq!(cursor.pos(), 2);
    cursor.bump();
    assert_eq!(cursor.pos(), 5);
    cursor.bump();
    assert_eq!(cursor.pos(), 9);
    assert_eq!(cursor.col(), 4);
    assert_eq!(cursor.current(), b'x');
}

// === Character Decoding ===

#[test]
fn current_char_ascii() {
    let buf = SourceBuffer::new("Q");
    assert_eq!(buf.cursor().current_char(), 'Q');
}

#[test]
fn current_char_multibyte() {
    let buf = SourceBuffer::new("Ωx");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current_char(), 'Ω');
    cursor.bump();
    assert_eq!(cursor.current_char(), 'x');
}

#[test]
fn current_char_at_eof_is_nul() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.cursor().current_char(), '\0');
}

#[test]
fn utf8_widths() {
    use crate::Cursor;
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(Cursor::utf8_char_width(0x80), 1);
}

// === EOF Detection ===

#[test]
fn empty_source_is_eof() {
    let buf = SourceBuffer::new("");
    assert!(buf.cursor().is_eof());
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("\0x");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    cursor.bump();
    assert_eq!(cursor.current(), b'x');
}

// === Eat While ===

#[test]
fn eat_while_ascii_digits() {
    let buf = SourceBuffer::new("12345abc");
    let mut cursor = buf.cursor();
    cursor.eat_while_ascii(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.col(), 6);
}

#[test]
fn eat_while_ascii_stops_at_sentinel() {
    let buf = SourceBuffer::new("999");
    let mut cursor = buf.cursor();
    cursor.eat_while_ascii(|b| b.is_ascii_digit());
    assert!(cursor.is_eof());
}

#[test]
fn eat_while_char_tracks_newlines() {
    let buf = SourceBuffer::new(" \n\t\n  x");
    let mut cursor = buf.cursor();
    cursor.eat_while_char(char::is_whitespace);
    assert_eq!(cursor.current(), b'x');
    assert_eq!((cursor.line(), cursor.col()), (3, 3));
}

#[test]
fn eat_while_char_stops_at_eof_even_if_pred_accepts_nul() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.eat_while_char(|_| true);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 2);
}

// === Slicing ===

#[test]
fn slice_from_start() {
    let buf = SourceBuffer::new("Width = 100");
    let mut cursor = buf.cursor();
    cursor.eat_while_char(char::is_alphabetic);
    assert_eq!(cursor.slice_from(0), "Width");
    assert_eq!(cursor.rest(), " = 100");
}

#[test]
fn slice_multibyte_boundaries() {
    let buf = SourceBuffer::new("Größe");
    let mut cursor = buf.cursor();
    cursor.eat_while_char(char::is_alphabetic);
    assert_eq!(cursor.slice_from(0), "Größe");
    assert_eq!(cursor.col(), 6);
}

// === Find / Advance Over ===

#[test]
fn find_reports_distance_without_moving() {
    let buf = SourceBuffer::new("AB}CD}");
    let cursor = buf.cursor();
    assert_eq!(cursor.find(b'}'), Some(2));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn find_does_not_search_padding() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.cursor().find(0), None);
}

#[test]
fn advance_over_single_line() {
    let buf = SourceBuffer::new("0A1B}");
    let mut cursor = buf.cursor();
    cursor.advance_over(4);
    assert_eq!(cursor.current(), b'}');
    assert_eq!((cursor.line(), cursor.col()), (1, 5));
}

#[test]
fn advance_over_multiple_lines() {
    let buf = SourceBuffer::new("AB\nCDEF\n  12}");
    let mut cursor = buf.cursor();
    cursor.advance_over(12);
    assert_eq!(cursor.current(), b'}');
    assert_eq!((cursor.line(), cursor.col()), (3, 5));
}

#[test]
fn advance_over_matches_per_char_bumps() {
    let source = "x\nÄÖ\r\n😀 y\nzz";
    let buf = SourceBuffer::new(source);
    let mut fast = buf.cursor();
    let mut slow = buf.cursor();
    fast.advance_over(source.len());
    while !slow.is_eof() {
        slow.bump();
    }
    assert_eq!(fast.pos(), slow.pos());
    assert_eq!((fast.line(), fast.col()), (slow.line(), slow.col()));
}

#[test]
fn advance_over_zero_is_noop() {
    let buf = SourceBuffer::new("}");
    let mut cursor = buf.cursor();
    cursor.advance_over(0);
    assert_eq!(cursor.pos(), 0);
    assert_eq!((cursor.line(), cursor.col()), (1, 1));
}

// === String Delimiter Skip ===

#[test]
fn skip_to_string_delim_finds_quote() {
    let buf = SourceBuffer::new("abc'def");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), b'\'');
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.col(), 4);
}

#[test]
fn skip_to_string_delim_stops_at_newline() {
    let buf = SourceBuffer::new("ab\ncd'");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), b'\n');
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.line(), 1);
}

#[test]
fn skip_to_string_delim_eof() {
    let buf = SourceBuffer::new("no closing quote");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), 0);
    assert!(cursor.is_eof());
    assert_eq!(cursor.col(), 17);
}
