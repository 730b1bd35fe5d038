//! Ownership of source buffers and mapping of locations back to them.
//!
//! The lexer itself only needs [`SourceResolver`], used by
//! [`split_tokens`](crate::split_tokens) to find the original text of a
//! token. [`SourceManager`] is the concrete implementation used by drivers.

use memchr::memchr_iter;
use rustc_hash::FxHashMap;
use sv_lexer_core::{BufferId, SourceBuffer, SourceBufferError, SourceLocation};
use tracing::debug;

/// Read access to buffer text and location remapping.
pub trait SourceResolver {
    /// The text of `buffer`, if it is known.
    fn source_text(&self, buffer: BufferId) -> Option<&[u8]>;

    /// Map a location in a copied buffer to the location it was copied
    /// from. Locations in original buffers map to themselves.
    fn original_location(&self, location: SourceLocation) -> SourceLocation {
        location
    }
}

/// Owns every loaded buffer and hands out their ids.
#[derive(Default)]
pub struct SourceManager {
    buffers: FxHashMap<BufferId, SourceBuffer>,
    /// Offset of the first byte of each line, per buffer.
    line_starts: FxHashMap<BufferId, Vec<u32>>,
    /// Copied buffers and the location their first byte came from.
    copies: FxHashMap<BufferId, SourceLocation>,
    next_id: u32,
}

impl SourceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `text` as a new buffer.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source buffers reject text longer than u32::MAX - 1"
    )]
    pub fn assign_text(&mut self, text: impl AsRef<[u8]>) -> Result<BufferId, SourceBufferError> {
        let text = text.as_ref();
        self.next_id += 1;
        let id = BufferId::new(self.next_id);
        let buffer = SourceBuffer::try_new(id, text)?;
        let line_starts: Vec<u32> = std::iter::once(0)
            .chain(memchr_iter(b'\n', text).map(|p| p as u32 + 1))
            .collect();
        debug!(
            buffer = %id,
            len = buffer.len(),
            lines = line_starts.len(),
            "assigned source buffer"
        );
        self.buffers.insert(id, buffer);
        self.line_starts.insert(id, line_starts);
        Ok(id)
    }

    /// Load `text` as a copy of the source starting at `origin`, such as a
    /// macro body expanded elsewhere.
    pub fn assign_copy(
        &mut self,
        text: impl AsRef<[u8]>,
        origin: SourceLocation,
    ) -> Result<BufferId, SourceBufferError> {
        let id = self.assign_text(text)?;
        self.copies.insert(id, origin);
        Ok(id)
    }

    /// The buffer with the given id.
    pub fn buffer(&self, id: BufferId) -> Option<&SourceBuffer> {
        self.buffers.get(&id)
    }

    /// 1-based line and column (in bytes) of `location`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count and offsets are bounded by the u32 buffer length"
    )]
    pub fn line_column(&self, location: SourceLocation) -> Option<(u32, u32)> {
        let len = self.buffer(location.buffer())?.len();
        let starts = self.line_starts.get(&location.buffer())?;
        let offset = location.offset().min(len);
        // Lines whose start is at or before `offset`; the first always is.
        let line = starts.partition_point(|&start| start <= offset);
        let line_start = starts.get(line.wrapping_sub(1)).copied().unwrap_or(0);
        Some((line as u32, offset - line_start + 1))
    }
}

impl SourceResolver for SourceManager {
    fn source_text(&self, buffer: BufferId) -> Option<&[u8]> {
        self.buffer(buffer).map(SourceBuffer::text)
    }

    fn original_location(&self, location: SourceLocation) -> SourceLocation {
        let mut location = location;
        while let Some(origin) = self.copies.get(&location.buffer()) {
            location = origin.advanced(location.offset());
        }
        location
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one() {
        let mut sm = SourceManager::new();
        let a = sm.assign_text("a").ok();
        let b = sm.assign_text("b").ok();
        assert_eq!(a, Some(BufferId::new(1)));
        assert_eq!(b, Some(BufferId::new(2)));
        assert_eq!(sm.source_text(BufferId::new(2)), Some(&b"b"[..]));
        assert_eq!(sm.source_text(BufferId::new(9)), None);
    }

    #[test]
    fn line_column() {
        let mut sm = SourceManager::new();
        let id = sm.assign_text("ab\ncd\n\nx").unwrap();
        assert_eq!(sm.line_column(SourceLocation::new(id, 0)), Some((1, 1)));
        assert_eq!(sm.line_column(SourceLocation::new(id, 4)), Some((2, 2)));
        assert_eq!(sm.line_column(SourceLocation::new(id, 7)), Some((4, 1)));
        assert_eq!(sm.line_column(SourceLocation::new(BufferId::new(5), 0)), None);
    }

    #[test]
    fn line_column_many_lines() {
        let mut sm = SourceManager::new();
        let text = "wire w;\n".repeat(50_000);
        let id = sm.assign_text(&text).unwrap();
        assert_eq!(sm.line_column(SourceLocation::new(id, 8)), Some((2, 1)));
        assert_eq!(
            sm.line_column(SourceLocation::new(id, 8 * 49_999 + 5)),
            Some((50_000, 6))
        );
        // Past the end clamps to the final, empty line.
        assert_eq!(
            sm.line_column(SourceLocation::new(id, u32::MAX)),
            Some((50_001, 1))
        );
    }

    #[test]
    fn line_column_carriage_returns() {
        let mut sm = SourceManager::new();
        let id = sm.assign_text(b"a\r\nb\rc").unwrap();
        assert_eq!(sm.line_column(SourceLocation::new(id, 3)), Some((2, 1)));
        assert_eq!(sm.line_column(SourceLocation::new(id, 5)), Some((2, 3)));
    }

    #[test]
    fn copies_map_to_origin() {
        let mut sm = SourceManager::new();
        let file = sm.assign_text("`define M foo+bar\nM").unwrap();
        let body = sm
            .assign_copy("foo+bar", SourceLocation::new(file, 10))
            .unwrap();
        let nested = sm
            .assign_copy("bar", SourceLocation::new(body, 4))
            .unwrap();

        let loc = sm.original_location(SourceLocation::new(nested, 1));
        assert_eq!(loc, SourceLocation::new(file, 15));
        let plain = SourceLocation::new(file, 3);
        assert_eq!(sm.original_location(plain), plain);
    }
}
