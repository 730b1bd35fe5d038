//! Opaque source positions.
//!
//! A location is a `(buffer, byte offset)` pair. Nothing here knows about
//! lines or columns; resolving those is the source manager's job.

use std::fmt;

/// Identifies one source buffer.
///
/// Ids are handed out by whoever owns the buffers. [`BufferId::PLACEHOLDER`]
/// is reserved for text that does not live in any real buffer, such as the
/// scratch text built while pasting macro tokens.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug, Default)]
#[repr(transparent)]
pub struct BufferId(u32);

impl BufferId {
    /// Id for text that belongs to no real buffer.
    pub const PLACEHOLDER: BufferId = BufferId(0);

    /// Create an id from a raw value.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        BufferId(raw)
    }

    /// Get the raw value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns `true` for [`BufferId::PLACEHOLDER`].
    #[inline]
    pub const fn is_placeholder(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A byte position inside one buffer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug, Default)]
pub struct SourceLocation {
    buffer: BufferId,
    offset: u32,
}

// Compile-time assertion: locations stay two words small.
const _: () = assert!(size_of::<SourceLocation>() == 8);

impl SourceLocation {
    /// Create a location.
    #[inline]
    pub const fn new(buffer: BufferId, offset: u32) -> Self {
        SourceLocation { buffer, offset }
    }

    /// The buffer this location points into.
    #[inline]
    pub const fn buffer(self) -> BufferId {
        self.buffer
    }

    /// Byte offset from the start of the buffer.
    #[inline]
    pub const fn offset(self) -> u32 {
        self.offset
    }

    /// The location `delta` bytes further into the same buffer.
    #[inline]
    #[must_use]
    pub const fn advanced(self, delta: u32) -> Self {
        SourceLocation {
            buffer: self.buffer,
            offset: self.offset + delta,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.buffer, self.offset)
    }
}

/// A half-open `[start, end)` range inside one buffer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SourceRange {
    start: SourceLocation,
    end: SourceLocation,
}

impl SourceRange {
    /// Create a range from two locations in the same buffer.
    #[inline]
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        debug_assert_eq!(
            start.buffer, end.buffer,
            "range endpoints must share a buffer"
        );
        debug_assert!(start.offset <= end.offset, "range start exceeds end");
        SourceRange { start, end }
    }

    /// Create the range of `len` bytes starting at `start`.
    #[inline]
    pub const fn with_len(start: SourceLocation, len: u32) -> Self {
        SourceRange {
            start,
            end: start.advanced(len),
        }
    }

    /// First location inside the range.
    #[inline]
    pub const fn start(self) -> SourceLocation {
        self.start
    }

    /// First location past the range.
    #[inline]
    pub const fn end(self) -> SourceLocation {
        self.end
    }

    /// Length of the range in bytes.
    #[inline]
    pub const fn len(self) -> u32 {
        self.end.offset - self.start.offset
    }

    /// Check if the range is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Returns `true` when `other` begins exactly where `self` ends.
    #[inline]
    pub fn touches(self, other: SourceRange) -> bool {
        self.end == other.start
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}..{}",
            self.start.buffer, self.start.offset, self.end.offset
        )
    }
}
