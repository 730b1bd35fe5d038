use sv_lexer_core::{BufferId, SourceLocation};

use super::*;
use crate::TriviaKind;

fn loc(offset: u32) -> SourceLocation {
    SourceLocation::new(BufferId::new(1), offset)
}

// === Kinds ===

#[test]
fn fixed_text_for_punctuation() {
    assert_eq!(TokenKind::TripleLeftShiftEqual.fixed_text(), Some("<<<="));
    assert_eq!(TokenKind::OrEqualsArrow.fixed_text(), Some("|=>"));
    assert_eq!(TokenKind::MacroEscapedQuote.fixed_text(), Some("`\\`\""));
    assert_eq!(
        TokenKind::Keyword(Keyword::AlwaysComb).fixed_text(),
        Some("always_comb")
    );
}

#[test]
fn no_fixed_text_for_variable_tokens() {
    assert_eq!(TokenKind::Identifier.fixed_text(), None);
    assert_eq!(TokenKind::BasedIntegerLiteral.fixed_text(), None);
    assert_eq!(TokenKind::Directive(DirectiveKind::Define).fixed_text(), None);
    assert_eq!(TokenKind::EndOfFile.fixed_text(), None);
}

#[test]
fn literal_kinds() {
    assert!(TokenKind::TimeLiteral.is_literal());
    assert!(TokenKind::UnbasedUnsizedLiteral.is_literal());
    assert!(!TokenKind::Identifier.is_literal());
}

// === Flags ===

#[test]
fn flags_compose() {
    let flags = TokenFlags::LINE_START | TokenFlags::SYNTHESIZED;
    assert!(flags.contains(TokenFlags::LINE_START));
    assert!(!flags.contains(TokenFlags::HAS_ERROR));
    assert_eq!(TokenFlags::default(), TokenFlags::empty());
}

// === Ranges ===

#[test]
fn ranges_cover_trivia_and_text() {
    let trivia = [
        Trivia::new(TriviaKind::Whitespace, loc(10), b"  "),
        Trivia::new(TriviaKind::LineComment, loc(12), b"// c"),
    ];
    let token = Token::new(TokenKind::Identifier, loc(16), b"abc", &trivia);
    assert_eq!(token.range().start(), loc(16));
    assert_eq!(token.range().len(), 3);
    assert_eq!(token.full_range().start(), loc(10));
    assert_eq!(token.full_range().len(), 9);

    let mut text = Vec::new();
    token.write_source(&mut text);
    assert_eq!(text, b"  // cabc");
}

#[test]
fn accessors_on_payloadless_token() {
    let token = Token::new(TokenKind::Identifier, loc(0), b"x", &[]);
    assert_eq!(token.integer(), None);
    assert_eq!(token.string_value(), None);
    assert!(!token.has_error());
    assert!(!token.is_eof());
    assert_eq!(token.to_string(), "x");
}

#[test]
fn text_replaces_invalid_utf8() {
    let token = Token::new(TokenKind::Unknown, loc(0), b"\xE9", &[]);
    assert_eq!(token.text(), "\u{FFFD}");
    assert_eq!(token.range().len(), 1);
}

// === Units ===

#[test]
fn time_unit_suffixes() {
    for suffix in ["s", "ms", "us", "ns", "ps", "fs"] {
        let unit = TimeUnit::from_suffix(suffix.as_bytes());
        assert_eq!(unit.map(TimeUnit::suffix), Some(suffix));
    }
    assert_eq!(TimeUnit::from_suffix(b"min"), None);
    assert_eq!(format!("{:?}", TimeUnit::Picoseconds), "ps");
}
