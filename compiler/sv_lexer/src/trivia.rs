//! Trivia: the source text between tokens.

use sv_lexer_core::{SourceLocation, SourceRange};

/// Kind of a trivia piece.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TriviaKind {
    /// Spaces, tabs, vertical tabs, form feeds, or a leading byte-order mark.
    Whitespace,
    /// `\n`, `\r\n` or a lone `\r`.
    EndOfLine,
    /// `//` up to (not including) the line break.
    LineComment,
    /// `/* ... */`, possibly unterminated.
    BlockComment,
    /// Text skipped by conditional compilation. Built by the preprocessor.
    DisabledText,
    /// A backslash immediately followed by a line break.
    LineContinuation,
}

/// One piece of trivia attached to the token that follows it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Trivia<'a> {
    pub kind: TriviaKind,
    pub location: SourceLocation,
    /// The source bytes of the piece.
    pub raw: &'a [u8],
}

impl<'a> Trivia<'a> {
    /// Create a trivia piece.
    pub fn new(kind: TriviaKind, location: SourceLocation, raw: &'a [u8]) -> Self {
        Trivia {
            kind,
            location,
            raw,
        }
    }

    /// The source range covered by this piece.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "trivia text comes from a buffer whose length fits u32"
    )]
    pub fn range(&self) -> SourceRange {
        SourceRange::with_len(self.location, self.raw.len() as u32)
    }
}
