//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the form text, so the
//! cursor can read the current byte without checking bounds first. The total
//! buffer size is rounded up to the next 64-byte boundary for cache-line
//! alignment, which also gives `peek()` safe padding near the end.
//!
//! A form file may contain a literal NUL character. The cursor tells it apart
//! from the sentinel by comparing its position against the source length, so
//! an interior NUL still becomes a one-character `Illegal` token.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Owned copy of a form's text, laid out for the [`Tokenizer`](crate::Tokenizer).
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// A buffer is immutable once built. Any number of tokenizers may borrow the
/// same buffer, each with its own cursor.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the form text (excludes sentinel and padding).
    source_len: usize,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Decoding the file container (code page, BOM handling) is the caller's
    /// job; this takes already-decoded text.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to the next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1).next_multiple_of(CACHE_LINE);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        Self { buf, source_len }
    }

    /// Returns the form text bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len]
    }

    /// Returns the full buffer including sentinel and cache-line padding.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel (`0x00`).
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] at byte 0, line 1, column 1.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the form text in bytes.
    pub fn len(&self) -> usize {
        self.source_len
    }

    /// Returns `true` if the form text is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
