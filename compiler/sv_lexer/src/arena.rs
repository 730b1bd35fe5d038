//! Arena-backed source views for re-lexing synthesized text.

use bumpalo::Bump;
use sv_lexer_core::{padded_source, BufferId, SourceView};

/// Copy `text` into the arena with a sentinel and return a view of it.
///
/// Positions in the view map to `buffer` starting at `base`, so tokens
/// lexed from pasted or split text keep locations in the original buffer.
pub(crate) fn alloc_view<'a>(
    arena: &'a Bump,
    buffer: BufferId,
    base: u32,
    text: &[u8],
) -> SourceView<'a> {
    let Ok(len) = u32::try_from(text.len()) else {
        unreachable!("token text longer than any source buffer");
    };
    let padded = arena.alloc_slice_copy(&padded_source(text));
    match SourceView::from_padded(buffer, base, padded, len) {
        Some(view) => view,
        None => unreachable!("padded_source always appends a sentinel"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_keeps_base_and_text() {
        let arena = Bump::new();
        let view = alloc_view(&arena, BufferId::new(4), 100, b"a+b");
        assert_eq!(view.text(), b"a+b");
        assert_eq!(view.location(2).offset(), 102);
        assert_eq!(view.id(), BufferId::new(4));
        assert!(!view.cursor().is_eof());
    }
}
