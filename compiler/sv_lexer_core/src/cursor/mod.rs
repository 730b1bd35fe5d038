//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position
//! has reached or exceeded the source length.
//!
//! # Embedded Null Bytes
//!
//! SystemVerilog sources may contain NUL characters. A null at
//! `pos < source_len` is an embedded null (the lexer reports it and moves
//! on); a null at `pos >= source_len` is the sentinel (EOF).

/// Returns the earliest (minimum) of two optional positions.
///
/// Used by the memchr-based scanning methods to combine results from
/// separate memchr calls when we need to search for more bytes than
/// `memchr3` supports.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Byte cursor over sentinel-terminated source text.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor) or
/// [`SourceView::cursor()`](crate::SourceView::cursor). The cursor is
/// [`Copy`], so saving and restoring a position is a plain assignment.
///
/// # Invariant
///
/// `buf` is `text` followed by at least one `0x00` byte. Reads past the end
/// of `buf` also yield `0x00`, so lookahead never panics.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The source content, used for slicing lexemes.
    text: &'a [u8],
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    ///
    /// `buf` must start with `text` and continue with the sentinel.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source buffers reject text longer than u32::MAX - 1"
    )]
    pub(crate) fn new(text: &'a [u8], buf: &'a [u8]) -> Self {
        debug_assert!(text.len() < buf.len(), "sentinel must be within buffer bounds");
        debug_assert!(buf[text.len()] == 0, "sentinel byte must be 0x00");
        Self {
            text,
            buf,
            pos: 0,
            source_len: text.len() as u32,
        }
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.buf.get(index).copied().unwrap_or(0)
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` when at EOF (the sentinel byte). Embedded null bytes
    /// also return `0x00`; use [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos as usize)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos as usize + 1)
    }

    /// Returns the byte `n` positions ahead of current.
    #[inline]
    pub fn peek_n(&self, n: u32) -> u8 {
        self.byte_at(self.pos as usize + n as usize)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached EOF.
    ///
    /// EOF is when the current byte is the sentinel (`0x00`) and the
    /// position is at or past the source length.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len && self.current() == 0
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Move the cursor to `pos`.
    ///
    /// Used to back up when a lexeme turns out shorter than the lookahead
    /// that was consumed (a real literal missing its exponent digits).
    #[inline]
    pub fn reset_to(&mut self, pos: u32) {
        debug_assert!(pos <= self.source_len, "reset past end of source");
        self.pos = pos;
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract the source bytes in `start..end`.
    ///
    /// The end is clamped to the source length; an out-of-range start
    /// yields an empty slice.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.text
            .get(start as usize..end.min(self.source_len) as usize)
            .unwrap_or_default()
    }

    /// Extract the source bytes from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// The rest of the source content from the current position.
    pub fn rest(&self) -> &'a [u8] {
        self.slice(self.pos, self.source_len)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// `pred(0)` must return `false`, otherwise the loop stops only once
    /// the cursor leaves the buffer.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while (self.pos as usize) < self.buf.len() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Length of the well-formed UTF-8 character at the cursor, or `None`
    /// if the bytes there are not one (a stray continuation byte, a
    /// truncated sequence, an overlong encoding).
    pub fn utf8_len(&self) -> Option<u32> {
        let width = Self::utf8_char_width(self.current());
        let bytes = self.slice(self.pos, self.pos.saturating_add(width));
        match std::str::from_utf8(bytes) {
            Ok(s) if s.len() == width as usize => Some(width),
            _ => None,
        }
    }

    /// Advance the cursor past one UTF-8 character, or a single byte if
    /// the bytes at the cursor are not valid UTF-8.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = self.utf8_len().unwrap_or(1);
        self.advance_n(width);
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets within the source fit in u32"
    )]
    fn jump(&mut self, found: Option<usize>) -> u8 {
        if let Some(off) = found {
            self.pos += off as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }

    fn remaining(&self) -> &'a [u8] {
        self.text.get(self.pos as usize..).unwrap_or_default()
    }

    /// Advance to the next `\n` or `\r` byte, or EOF.
    ///
    /// Used by the line comment scanner. The line ending itself is left for
    /// the caller to consume as end-of-line trivia.
    pub fn eat_until_newline_or_eof(&mut self) {
        let found = memchr::memchr2(b'\n', b'\r', self.remaining());
        self.jump(found);
    }

    /// Advance past ordinary string content to the next interesting byte.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// "Interesting" bytes for strings: `"`, `\`, `\n`, `\r`, and NUL
    /// (the caller checks [`is_eof()`](Self::is_eof) to tell an embedded
    /// null from the end).
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = self.remaining();
        let primary = memchr::memchr3(b'"', b'\\', b'\n', remaining);
        let secondary = memchr::memchr2(b'\r', 0, remaining);
        self.jump(earliest_of(primary, secondary))
    }

    /// Advance to the next `*` or `/` inside a block comment.
    /// Returns the byte found, or 0 for EOF.
    pub fn skip_to_block_comment_delim(&mut self) -> u8 {
        let found = memchr::memchr2(b'*', b'/', self.remaining());
        self.jump(found)
    }
}
