//! Token primitives for macro expansion.
//!
//! Each primitive re-lexes or synthesizes text in the arena and returns
//! tokens that borrow it for `'a`, exactly like tokens read from a buffer.
//! Synthesized tokens carry [`TokenFlags::SYNTHESIZED`].

use bumpalo::Bump;
use smallvec::SmallVec;
use sv_diagnostic::{DiagCode, Diagnostics};
use sv_lexer_core::SourceLocation;
use tracing::debug;

use crate::arena::alloc_view;
use crate::{
    KeywordVersion, Lexer, LexerOptions, SourceResolver, Token, TokenFlags, TokenKind,
    TokenValue, Trivia, TriviaKind,
};

/// Paste two tokens together (`` a``b ``).
///
/// The raw texts are joined without separator and re-lexed. The result
/// keeps `left`'s location and trivia. If the joined text is not exactly
/// one clean token, a `MalformedConcatenation` diagnostic is reported and
/// an `Unknown` token holding the joined text is returned.
pub fn concatenate_tokens<'a>(
    arena: &'a Bump,
    diagnostics: &mut Diagnostics,
    left: Token<'a>,
    right: Token<'a>,
    version: KeywordVersion,
) -> Token<'a> {
    let mut joined = Vec::with_capacity(left.raw.len() + right.raw.len());
    joined.extend_from_slice(left.raw);
    joined.extend_from_slice(right.raw);
    let view = alloc_view(
        arena,
        left.location.buffer(),
        left.location.offset(),
        &joined,
    );

    if !left.raw.is_empty() && !right.raw.is_empty() {
        let mut scratch = Diagnostics::new();
        let mut lexer = Lexer::from_view(view, arena, &mut scratch, LexerOptions::default());
        let first = lexer.produce_token(version);
        let second = lexer.produce_token(version);
        if scratch.is_empty()
            && first.trivia.is_empty()
            && second.is_eof()
            && second.trivia.is_empty()
        {
            let mut flags = TokenFlags::SYNTHESIZED;
            if left.is_line_start() {
                flags |= TokenFlags::LINE_START;
            }
            return Token {
                flags,
                trivia: left.trivia,
                ..first
            };
        }
    }

    debug!(left = %left, right = %right, "malformed token concatenation");
    diagnostics.add(DiagCode::MalformedConcatenation, left.location);
    Token {
        kind: TokenKind::Unknown,
        flags: TokenFlags::HAS_ERROR | TokenFlags::SYNTHESIZED,
        location: left.location,
        raw: view.text(),
        trivia: left.trivia,
        value: TokenValue::None,
    }
}

/// Turn a run of tokens into one string literal (`` `"...`" ``).
///
/// The string's value is the raw text of each token. Unless
/// `no_whitespace` is set, whitespace trivia between the tokens is kept
/// verbatim; the first token's own trivia never is. The result carries
/// `leading_trivia` and sits at `location`.
pub fn stringify<'a>(
    arena: &'a Bump,
    location: SourceLocation,
    leading_trivia: &[Trivia<'a>],
    tokens: &[Token<'a>],
    no_whitespace: bool,
) -> Token<'a> {
    let mut content = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 && !no_whitespace {
            for t in token.trivia.iter().filter(|t| t.kind == TriviaKind::Whitespace) {
                content.extend_from_slice(t.raw);
            }
        }
        content.extend_from_slice(token.raw);
    }

    let mut raw = Vec::with_capacity(content.len() + 2);
    raw.push(b'"');
    for &b in &content {
        if matches!(b, b'"' | b'\\') {
            raw.push(b'\\');
        }
        raw.push(b);
    }
    raw.push(b'"');

    let trivia: &'a [Trivia<'a>] = if leading_trivia.is_empty() {
        &[]
    } else {
        arena.alloc_slice_copy(leading_trivia)
    };
    Token {
        kind: TokenKind::StringLiteral,
        flags: TokenFlags::SYNTHESIZED,
        location,
        raw: arena.alloc_slice_copy(&raw),
        trivia,
        value: TokenValue::String(arena.alloc_slice_copy(&content)),
    }
}

/// Re-lex `token` as two pieces split at byte `offset` of its raw text,
/// appending the resulting tokens to `out`.
///
/// The pieces are lexed from the original buffer text when `resolver` can
/// supply it, so locations point into that buffer. Output tokens cover the
/// original token's range exactly and contiguously; the first one carries
/// the original's leading trivia.
///
/// # Panics
///
/// Panics if `offset` is past the end of `token.raw` or falls inside a
/// UTF-8 sequence.
#[allow(
    clippy::cast_possible_truncation,
    reason = "offsets are bounded by the token's u32-sized buffer"
)]
pub fn split_tokens<'a>(
    arena: &'a Bump,
    diagnostics: &mut Diagnostics,
    resolver: &impl SourceResolver,
    token: Token<'a>,
    offset: usize,
    version: KeywordVersion,
    out: &mut Vec<Token<'a>>,
) {
    assert!(
        is_char_boundary(token.raw, offset),
        "split offset {offset} is outside token `{token}`"
    );

    let location = resolver.original_location(token.location);
    let start = location.offset() as usize;
    let text = resolver
        .source_text(location.buffer())
        .and_then(|src| src.get(start..start + token.raw.len()))
        .filter(|src| *src == token.raw)
        .unwrap_or(token.raw);

    let first_out = out.len();
    for (piece_start, piece) in [(0, &text[..offset]), (offset, &text[offset..])] {
        if piece.is_empty() {
            continue;
        }
        let view = alloc_view(
            arena,
            location.buffer(),
            location.offset() + piece_start as u32,
            piece,
        );
        let mut lexer = Lexer::from_view(view, arena, diagnostics, LexerOptions::default());
        loop {
            let mut piece_token = lexer.produce_token(version);
            piece_token.flags.remove(TokenFlags::LINE_START);
            if !piece_token.is_eof() {
                out.push(piece_token);
                continue;
            }
            if !piece_token.trivia.is_empty() {
                // Trailing trivia inside the piece; keep it on an empty token.
                piece_token.kind = TokenKind::Unknown;
                out.push(piece_token);
            }
            break;
        }
    }

    if let Some(first) = out.get_mut(first_out) {
        if !token.trivia.is_empty() {
            let mut trivia: SmallVec<[Trivia<'a>; 8]> = SmallVec::new();
            trivia.extend_from_slice(token.trivia);
            trivia.extend_from_slice(first.trivia);
            first.trivia = arena.alloc_slice_copy(&trivia);
        }
        if token.is_line_start() {
            first.flags |= TokenFlags::LINE_START;
        }
    }
}

/// `offset` is at most the length and not on a UTF-8 continuation byte.
fn is_char_boundary(bytes: &[u8], offset: usize) -> bool {
    match bytes.get(offset) {
        Some(&b) => !(0x80..0xC0).contains(&b),
        None => offset == bytes.len(),
    }
}
