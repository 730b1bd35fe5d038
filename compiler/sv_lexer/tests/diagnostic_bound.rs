//! Diagnostic bounding: suppression stops reporting, never lexing.

use bumpalo::Bump;
use pretty_assertions::assert_eq;
use sv_diagnostic::{DiagCode, Diagnostics};
use sv_lexer::{KeywordVersion, Lexer, LexerOptions};
use sv_lexer_core::{BufferId, SourceBuffer};

/// `count` independent malformed units separated by spaces.
fn malformed(count: usize) -> String {
    ["8'h ", "\u{1} ", "` ", "1e ", "'b2 "]
        .iter()
        .cycle()
        .take(count)
        .copied()
        .collect()
}

fn lex_units(source: &str, options: LexerOptions, diagnostics: &mut Diagnostics) -> usize {
    let buffer = SourceBuffer::new(BufferId::new(1), source);
    let arena = Bump::new();
    let tokens = Lexer::new(&buffer, &arena, diagnostics, options).lex_all(KeywordVersion::LATEST);
    tokens.iter().filter(|t| t.has_error()).count()
}

#[test]
fn exactly_max_errors_reported() {
    let mut diagnostics = Diagnostics::new();
    let flagged = lex_units(
        &malformed(10),
        LexerOptions::default().with_max_errors(4),
        &mut diagnostics,
    );
    assert_eq!(flagged, 10);
    assert_eq!(diagnostics.len(), 4);
    assert_eq!(
        diagnostics.codes(),
        vec![
            DiagCode::MissingVectorDigits,
            DiagCode::NonPrintableChar,
            DiagCode::MisplacedDirectiveChar,
            DiagCode::MissingExponentDigits,
        ]
    );
}

#[test]
fn default_limit() {
    let mut diagnostics = Diagnostics::new();
    let flagged = lex_units(&malformed(40), LexerOptions::default(), &mut diagnostics);
    assert_eq!(flagged, 40);
    assert_eq!(diagnostics.len(), 16);
}

#[test]
fn zero_limit_reports_nothing() {
    let mut diagnostics = Diagnostics::new();
    let flagged = lex_units(
        &malformed(5),
        LexerOptions::default().with_max_errors(0),
        &mut diagnostics,
    );
    assert_eq!(flagged, 5);
    assert!(diagnostics.is_empty());
}

#[test]
fn limit_is_per_buffer() {
    let mut diagnostics = Diagnostics::new();
    let options = LexerOptions::default().with_max_errors(3);
    lex_units(&malformed(6), options, &mut diagnostics);
    lex_units(&malformed(6), options, &mut diagnostics);
    assert_eq!(diagnostics.len(), 6);
}

#[test]
fn below_limit_reports_everything() {
    let mut diagnostics = Diagnostics::new();
    lex_units(&malformed(5), LexerOptions::unlimited(), &mut diagnostics);
    assert_eq!(diagnostics.len(), 5);
}
