//! Hand-written DFM tokenizer producing positioned [`Token`]s.
//!
//! The tokenizer operates on a sentinel-terminated [`Cursor`] and never
//! allocates. It does not unescape strings, parse numbers or check nesting;
//! those belong to the parser.
//!
//! # Design
//!
//! Main dispatch is on the current byte. ASCII classes are decided by the
//! byte alone; a non-ASCII lead byte is decoded to a full character and
//! classified as whitespace, letter or illegal. Each arm calls a focused
//! method that advances the cursor and returns the [`TokenKind`]; the token's
//! text and position come from a cursor snapshot taken before dispatch.
//!
//! Error conditions are token kinds (`Illegal`) or `None`, never `Err`.

use tracing::trace;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::SourceBuffer;

/// Scanner over one [`SourceBuffer`].
///
/// Produces one token per [`next_token()`](Self::next_token) call. Both
/// operations take `&mut self`; scanning the same buffer concurrently needs
/// one tokenizer per thread.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer at the start of `source` (line 1, column 1).
    pub fn new(source: &'a SourceBuffer) -> Self {
        Self {
            cursor: source.cursor(),
        }
    }

    /// Produce the next token.
    ///
    /// Returns a zero-length `Eof` token when the input is exhausted, and the
    /// same `Eof` (same position) on every later call.
    #[inline]
    pub fn next_token(&mut self) -> Token<'a> {
        let start = self.cursor;
        let kind = match self.cursor.current() {
            0 if self.cursor.is_eof() => TokenKind::Eof,
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'[' => self.single(TokenKind::LeftBracket),
            b']' => self.single(TokenKind::RightBracket),
            b'(' => self.single(TokenKind::LeftParen),
            b')' => self.single(TokenKind::RightParen),
            b'{' => self.single(TokenKind::LeftBrace),
            b'}' => self.single(TokenKind::RightBrace),
            b'<' => self.single(TokenKind::Less),
            b'>' => self.single(TokenKind::Greater),
            b'=' => self.single(TokenKind::Equal),
            b':' => self.single(TokenKind::Colon),
            b'.' => self.single(TokenKind::Dot),
            b',' => self.single(TokenKind::Comma),
            b'\'' => self.string(),
            b'#' => self.character(),
            b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C => self.whitespace(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.word(),
            b'0'..=b'9' => self.number(),
            0x80..=0xFF => self.non_ascii(),
            _ => self.illegal(),
        };
        Token {
            kind,
            text: self.cursor.slice_from(start.pos()),
            line: start.line(),
            col: start.col(),
            offset: start.pos(),
        }
    }

    /// Skip an opaque blob up to the next `}` in one step.
    ///
    /// Call right after the parser has consumed a `{` token whose content it
    /// knows to be hex-encoded binary data:
    ///
    /// ```text
    /// Picture.Data = {
    ///   07544269746D6170
    ///   36100000424D3610}
    /// ```
    ///
    /// Tokenizing such a blob would yield interleaved words, integers and
    /// whitespace the parser then has to glue back together. Instead this
    /// returns the raw text strictly between the cursor and the `}`, leaving
    /// the cursor on the `}` so the next [`next_token()`](Self::next_token)
    /// yields `RightBrace`. Line and column advance exactly as if the blob had
    /// been tokenized.
    ///
    /// Returns `None` when no `}` follows; the tokenizer's position is then
    /// unchanged and the parser can fall back to ordinary tokens or report
    /// the missing brace itself.
    pub fn skip_to_closing_brace(&mut self) -> Option<&'a str> {
        let Some(len) = self.cursor.find(b'}') else {
            trace!(
                offset = self.cursor.pos(),
                line = self.cursor.line(),
                "no closing brace after blob start"
            );
            return None;
        };
        let start = self.cursor.pos();
        let first_line = self.cursor.line();
        self.cursor.advance_over(len);
        trace!(
            offset = start,
            len,
            lines = self.cursor.line() - first_line,
            "skipped binary blob"
        );
        Some(self.cursor.slice_from(start))
    }

    /// Line and column of the next character to be scanned.
    pub fn position(&self) -> (u32, u32) {
        (self.cursor.line(), self.cursor.col())
    }

    /// Byte offset of the next character to be scanned.
    pub fn offset(&self) -> usize {
        self.cursor.pos()
    }

    /// Returns `true` once every input character has been consumed.
    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    // ─── Symbols ───────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given kind.
    #[inline]
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.bump_ascii();
        kind
    }

    // ─── Trivia ────────────────────────────────────────────────────

    fn whitespace(&mut self) -> TokenKind {
        self.cursor.eat_while_char(char::is_whitespace);
        TokenKind::Whitespace
    }

    // ─── Words ─────────────────────────────────────────────────────

    fn word(&mut self) -> TokenKind {
        self.cursor.bump(); // first char, already classified
        self.cursor.eat_while_char(is_word_continue);
        TokenKind::Word
    }

    /// Non-ASCII lead byte: classify the decoded character. Non-ASCII
    /// digits never start a number; only letters start a word.
    fn non_ascii(&mut self) -> TokenKind {
        let c = self.cursor.current_char();
        if c.is_whitespace() {
            self.whitespace()
        } else if is_letter(c) {
            self.word()
        } else {
            self.illegal()
        }
    }

    // ─── Literals ──────────────────────────────────────────────────

    /// `'...'` with `''` as an escaped quote.
    ///
    /// An unterminated literal runs to EOF and is still a `String`; the
    /// parser sees the missing quote when it unescapes the text.
    fn string(&mut self) -> TokenKind {
        self.cursor.bump_ascii(); // opening '\''
        loop {
            match self.cursor.skip_to_string_delim() {
                b'\'' => {
                    if self.cursor.peek() == b'\'' {
                        // `''` escape
                        self.cursor.bump_ascii();
                        self.cursor.bump_ascii();
                    } else {
                        self.cursor.bump_ascii(); // closing '\''
                        return TokenKind::String;
                    }
                }
                b'\n' => self.cursor.bump(),
                _ => return TokenKind::String, // EOF
            }
        }
    }

    /// `#` followed by any number of decimal digits, including none.
    fn character(&mut self) -> TokenKind {
        self.cursor.bump_ascii(); // '#'
        self.eat_digits();
        TokenKind::Character
    }

    /// Digits, then an optional `.` fraction, then an optional exponent.
    ///
    /// A `.` after the integer part always makes a float, even with no
    /// fraction digits: `123.Left` scans as `123.` then `Left`. The exponent
    /// is checked independently of the fraction, and its digits are optional
    /// too (`1e` is a float).
    fn number(&mut self) -> TokenKind {
        let mut kind = TokenKind::Integer;
        self.eat_digits();
        if self.cursor.current() == b'.' {
            self.cursor.bump_ascii();
            self.eat_digits();
            kind = TokenKind::Float;
        }
        if matches!(self.cursor.current(), b'e' | b'E') {
            self.cursor.bump_ascii();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.bump_ascii();
            }
            self.eat_digits();
            kind = TokenKind::Float;
        }
        kind
    }

    #[inline]
    fn eat_digits(&mut self) {
        self.cursor.eat_while_ascii(|b| b.is_ascii_digit());
    }

    // ─── Error tokens ──────────────────────────────────────────────

    /// Consume exactly one character; scanning resumes after it.
    fn illegal(&mut self) -> TokenKind {
        self.cursor.bump();
        TokenKind::Illegal
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let tok = self.next_token();
        if tok.kind == TokenKind::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Returns `true` if `c` is a letter (general category `L*`).
#[inline]
fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Returns `true` if `c` may continue a word: `_`, a letter, or a decimal
/// digit (general category `Nd`). Letter-like numbers (`Ⅻ`), superscripts
/// and combining marks end the word.
#[inline]
fn is_word_continue(c: char) -> bool {
    if c.is_ascii() {
        return c == '_' || c.is_ascii_alphanumeric();
    }
    is_letter(c) || get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Convenience function: tokenize a whole buffer.
///
/// Returns every token except the final `Eof`. Callers that need the brace
/// skip must drive a [`Tokenizer`] directly.
pub fn tokenize(source: &SourceBuffer) -> Vec<Token<'_>> {
    let tokens: Vec<Token<'_>> = Tokenizer::new(source).collect();
    trace!(tokens = tokens.len(), bytes = source.len(), "tokenized");
    tokens
}
