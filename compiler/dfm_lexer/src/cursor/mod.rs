//! Position-tracking cursor over a sentinel-terminated buffer.
//!
//! The cursor reads the buffer byte-by-byte for ASCII dispatch and decodes a
//! full UTF-8 code point whenever classification needs one, so multi-byte
//! characters are never split. Every advance keeps the 1-based line and column
//! in step with the byte position: `\n` starts a new line, any other character
//! moves one column right.
//!
//! EOF is detected when the current byte equals the sentinel (`0x00`) and the
//! position has reached the source length. A NUL at `pos < source_len` is an
//! interior NUL, which the tokenizer reports as an illegal character.

/// Saturating `usize` to `u32` conversion for line/column arithmetic.
///
/// A form would need more than four billion characters on one line to reach
/// the cap.
fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Cursor over a sentinel-terminated byte buffer with line/column tracking.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`]: the tokenizer snapshots it at the start of each
/// token to recover the token's start position and text.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and all later bytes are `0x00`. `pos` always
/// sits on a UTF-8 character boundary within `0..=source_len`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: usize,
    /// Length of the form text (excludes sentinel and padding).
    source_len: usize,
    /// 1-based line of the character at `pos`.
    line: u32,
    /// 1-based column (in characters) of the character at `pos`.
    col: u32,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0, line 1, column 1.
    ///
    /// # Contract
    ///
    /// `buf[source_len]` must be `0x00`, as must every byte after it. This is
    /// guaranteed by `SourceBuffer::new()`.
    pub(crate) fn new(buf: &'a [u8], source_len: usize) -> Self {
        debug_assert!(
            source_len < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
            line: 1,
            col: 1,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at EOF (the sentinel). Interior NULs also return
    /// `0x00`; use [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe at any position: the sentinel and padding guarantee a valid read.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos + 1]
    }

    /// Decode the full character starting at the current position.
    ///
    /// Returns `'\0'` at EOF.
    pub fn current_char(&self) -> char {
        let b = self.current();
        if b.is_ascii() {
            return char::from(b);
        }
        let end = (self.pos + Self::utf8_char_width(b)).min(self.source_len);
        self.slice(self.pos, end)
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// 1-based line of the current position.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the current position, counted in characters.
    #[inline]
    pub fn col(&self) -> u32 {
        self.col
    }

    /// Length of the form text in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Returns the form text from the current position to EOF.
    pub fn rest(&self) -> &'a str {
        self.slice(self.pos, self.source_len)
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source content and on UTF-8
    /// character boundaries. Positions produced by this cursor always do,
    /// since it only ever moves by whole characters.
    #[allow(
        unsafe_code,
        reason = "from_utf8_unchecked on a buffer copied from &str, sliced on char boundaries"
    )]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        let bytes = &self.buf[start..end];
        debug_assert!(std::str::from_utf8(bytes).is_ok());
        // SAFETY: The buffer was copied from a `&str`, and every position the
        // cursor reaches is a character boundary of that string.
        unsafe { std::str::from_utf8_unchecked(bytes) }
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one ASCII byte that is known not to be `\n`.
    ///
    /// Used by the tokenizer after it has dispatched on the current byte.
    #[inline]
    pub fn bump_ascii(&mut self) {
        debug_assert!(self.current().is_ascii() && self.current() != b'\n');
        debug_assert!(!self.is_eof(), "bump_ascii past EOF");
        self.pos += 1;
        self.col += 1;
    }

    /// Advance past one full character, updating line and column.
    ///
    /// Does nothing at EOF.
    pub fn bump(&mut self) {
        if self.is_eof() {
            return;
        }
        let b = self.current();
        if b == b'\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        self.pos += Self::utf8_char_width(b);
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred` must only accept ASCII bytes other than `\n` and `0x00`. The
    /// sentinel then terminates the loop on its own.
    #[inline]
    pub fn eat_while_ascii(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            debug_assert!(self.current().is_ascii() && self.current() != b'\n');
            self.pos += 1;
            self.col += 1;
        }
    }

    /// Advance while `pred` returns `true` for the current character.
    ///
    /// ASCII bytes are classified without decoding; multi-byte characters are
    /// decoded once each. Stops at EOF regardless of `pred`.
    pub fn eat_while_char(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.current_char()) {
            self.bump();
        }
    }

    /// Find the first occurrence of `byte` at or after the current position.
    ///
    /// Returns the distance from the current position, without moving.
    /// Only searches the source content, never the sentinel or padding.
    pub fn find(&self, byte: u8) -> Option<usize> {
        memchr::memchr(byte, &self.buf[self.pos..self.source_len])
    }

    /// Advance `len` bytes in one step, updating line and column as if each
    /// character had been consumed individually.
    ///
    /// Newlines are counted with `memchr`; only the characters after the last
    /// newline are counted for the column.
    ///
    /// # Contract
    ///
    /// `pos + len` must be a character boundary within the source.
    pub fn advance_over(&mut self, len: usize) {
        let skipped = self.slice(self.pos, self.pos + len);
        let bytes = skipped.as_bytes();
        match memchr::memrchr(b'\n', bytes) {
            Some(last) => {
                let newlines = memchr::memchr_iter(b'\n', bytes).count();
                self.line = self.line.saturating_add(saturating_u32(newlines));
                let tail = &skipped[last + 1..];
                self.col = saturating_u32(tail.chars().count()).saturating_add(1);
            }
            None => {
                self.col = self
                    .col
                    .saturating_add(saturating_u32(skipped.chars().count()));
            }
        }
        self.pos += len;
    }

    /// Advance past ordinary string-literal content to the next interesting
    /// byte. Returns the byte found, or `0` at EOF.
    ///
    /// Interesting bytes inside a string literal: `'` (close or escape) and
    /// `\n` (line tracking). `memchr2` skips the run in between.
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let buf = self.buf;
        let remaining = &buf[self.pos..self.source_len];
        match memchr::memchr2(b'\'', b'\n', remaining) {
            Some(off) => {
                self.advance_over(off);
                self.current()
            }
            None => {
                self.advance_over(remaining.len());
                0
            }
        }
    }
}

#[cfg(test)]
mod tests;
