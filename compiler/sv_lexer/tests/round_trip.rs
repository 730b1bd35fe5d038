//! Property-based tests for lossless lexing.
//!
//! For arbitrary input, including malformed literals, stray control bytes,
//! invalid UTF-8 and embedded NULs, the lexer must:
//! 1. Reproduce the source exactly from trivia and token text.
//! 2. Produce contiguous ranges with no gaps or overlaps.
//! 3. Keep returning identical EOF tokens once the input is exhausted.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use bumpalo::Bump;
use proptest::prelude::*;
use sv_diagnostic::Diagnostics;
use sv_lexer::{KeywordVersion, Lexer, LexerOptions};
use sv_lexer_core::{BufferId, SourceBuffer};

// -- Input Strategies --

/// Fragments chosen so that random joins hit literal, comment and
/// directive boundaries.
const FRAGMENTS: &[&str] = &[
    "a", "w1", "1", "8", "'", "h", "b", "d", "s", "x", "z", "?", "F", "e", "_", ".", "\"",
    "\\", "/", "*", "`", "\n", "\r", " ", "\t", "$", "(", ")", ":", "#", "=", "<", ">", "|",
    "-", "+", "{", "}", "ns", "step", "é", "\0", "\u{1}", "\u{FEFF}", "module", "//", "/*",
    "*/",
];

fn fragment_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..48).prop_map(|parts| parts.concat())
}

fn check_round_trip(source: &[u8]) -> Result<(), TestCaseError> {
    let buffer = SourceBuffer::new(BufferId::new(1), source);
    let arena = Bump::new();
    let mut diagnostics = Diagnostics::new();
    let mut lexer = Lexer::new(&buffer, &arena, &mut diagnostics, LexerOptions::unlimited());
    let tokens = lexer.lex_all(KeywordVersion::LATEST);

    let mut rebuilt = Vec::new();
    let mut next = 0u32;
    for token in &tokens {
        for trivia in token.trivia {
            prop_assert_eq!(trivia.location.offset(), next);
            next = trivia.range().end().offset();
        }
        prop_assert_eq!(token.location.offset(), next);
        next = token.range().end().offset();
        prop_assert!(token.is_eof() || !token.raw.is_empty(), "empty token {:?}", token);
        token.write_source(&mut rebuilt);
    }
    prop_assert_eq!(rebuilt.as_slice(), source);
    prop_assert_eq!(next, buffer.len());

    let errors = lexer.error_count();
    let eof = tokens[tokens.len() - 1];
    for _ in 0..3 {
        let again = lexer.produce_token(KeywordVersion::LATEST);
        prop_assert!(again.is_eof());
        prop_assert_eq!(again.location, eof.location);
        prop_assert!(again.trivia.is_empty());
    }
    prop_assert_eq!(lexer.error_count(), errors);
    Ok(())
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn fragments_round_trip(source in fragment_soup()) {
        check_round_trip(source.as_bytes())?;
    }

    #[test]
    fn arbitrary_text_round_trips(source in any::<String>()) {
        check_round_trip(source.as_bytes())?;
    }

    #[test]
    fn arbitrary_bytes_round_trip(source in prop::collection::vec(any::<u8>(), 0..256)) {
        check_round_trip(&source)?;
    }
}

// -- Fixed Inputs --

#[test]
fn realistic_module_round_trips() {
    let source = "\u{FEFF}`timescale 1ns/1ps\n\
                  module top #(parameter W = 8) (input logic [W-1:0] a, output wire y);\r\n\
                  \t/* block */ assign y = ^a; // parity\n\
                  \tinitial $display(\"%h\\n\", 8'hx_F, 'z, 1.5e-3, 10ps);\n\
                  endmodule \\esc+id \0\n";
    check_round_trip(source.as_bytes()).unwrap();
}

#[test]
fn latin1_source_round_trips() {
    check_round_trip(b"// r\xE9sum\xE9\nwire \xB5 = \"\xFF\";\n").unwrap();
}
