//! Sentinel-terminated source text.
//!
//! The scanner relies on a `0x00` sentinel byte after the source content so
//! it can detect EOF without explicit bounds checks. The stored text is
//! rounded up to the next 64-byte boundary with zero padding, which also
//! keeps short lookahead past the end inside the allocation.
//!
//! The text is raw bytes. Files with invalid UTF-8 are lexed like any
//! other; the lexer reports the offending sequences.
//!
//! A NUL byte is not necessarily EOF: source files may contain embedded
//! NULs. The cursor tells them apart by position (see [`Cursor::is_eof`]).
//!
//! [`Cursor::is_eof`]: crate::Cursor::is_eof

use crate::{BufferId, Cursor, SourceLocation};

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Error creating a [`SourceBuffer`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SourceBufferError {
    /// Offsets are 32-bit; larger sources cannot be addressed.
    #[error("source text is {len} bytes; the limit is {} bytes", u32::MAX - 1)]
    TooLarge { len: usize },
}

/// Copy `text` and append the `0x00` sentinel plus cache-line padding.
///
/// Use [`SourceView::from_padded`] to scan the result.
pub fn padded_source(text: &[u8]) -> Vec<u8> {
    // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
    let padded_len = (text.len() + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);
    let mut buf = Vec::with_capacity(padded_len);
    buf.extend_from_slice(text);
    buf.resize(padded_len, 0);
    buf
}

/// Owned, sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    id: BufferId,
    /// `text` followed by the sentinel and padding.
    buf: Vec<u8>,
    source_len: u32,
}

impl SourceBuffer {
    /// Create a buffer holding a copy of `text`.
    ///
    /// # Panics
    ///
    /// Panics if `text` is longer than `u32::MAX - 1` bytes. Use
    /// [`try_new`](Self::try_new) for untrusted input sizes.
    pub fn new(id: BufferId, text: impl AsRef<[u8]>) -> Self {
        Self::try_new(id, text).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Create a buffer, rejecting sources too large for 32-bit offsets.
    pub fn try_new(id: BufferId, text: impl AsRef<[u8]>) -> Result<Self, SourceBufferError> {
        let text = text.as_ref();
        // One offset value is reserved for the sentinel position.
        let source_len = u32::try_from(text.len())
            .ok()
            .filter(|&len| len < u32::MAX)
            .ok_or(SourceBufferError::TooLarge { len: text.len() })?;
        Ok(Self {
            id,
            buf: padded_source(text),
            source_len,
        })
    }

    /// The id this buffer was created with.
    pub fn id(&self) -> BufferId {
        self.id
    }

    /// The source text (without sentinel or padding).
    pub fn text(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Borrow the buffer as a scannable view starting at offset 0.
    pub fn view(&self) -> SourceView<'_> {
        SourceView {
            id: self.id,
            base: 0,
            text: self.text(),
            padded: &self.buf,
        }
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        self.view().cursor()
    }
}

/// Borrowed sentinel-terminated text.
///
/// Carries the buffer id and a base offset so that positions inside the
/// view map back onto locations of the buffer the text was taken from.
/// A view over a piece of a token (when a macro splits it) uses the
/// token's buffer id and offset as its base.
#[derive(Clone, Copy, Debug)]
pub struct SourceView<'a> {
    id: BufferId,
    base: u32,
    text: &'a [u8],
    padded: &'a [u8],
}

impl<'a> SourceView<'a> {
    /// Build a view over text produced by [`padded_source`].
    ///
    /// `padded` must start with the `source_len` bytes of content followed
    /// by at least one NUL byte, and every byte after the content must be
    /// NUL. Returns `None` when that does not hold.
    pub fn from_padded(
        id: BufferId,
        base: u32,
        padded: &'a [u8],
        source_len: u32,
    ) -> Option<Self> {
        let len = source_len as usize;
        let text = padded.get(..len)?;
        let tail = padded.get(len..)?;
        if tail.is_empty() || tail.iter().any(|&b| b != 0) {
            return None;
        }
        Some(SourceView {
            id,
            base,
            text,
            padded,
        })
    }

    /// Id of the buffer the text belongs to.
    pub fn id(&self) -> BufferId {
        self.id
    }

    /// Offset of the first byte of the view inside its buffer.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// The scanned text (without sentinel or padding).
    pub fn text(&self) -> &'a [u8] {
        self.text
    }

    /// Length of the scanned text in bytes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "views are built from buffers whose length fits u32"
    )]
    pub fn len(&self) -> u32 {
        self.text.len() as u32
    }

    /// Returns `true` if the view holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Location of byte `pos` of the view.
    #[inline]
    pub fn location(&self, pos: u32) -> SourceLocation {
        SourceLocation::new(self.id, self.base + pos)
    }

    /// Create a [`Cursor`] positioned at byte 0 of the view.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor::new(self.text, self.padded)
    }
}
