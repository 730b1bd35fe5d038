use pretty_assertions::assert_eq;
use sv_lexer_core::{BufferId, SourceLocation};

use super::*;

fn loc(offset: u32) -> SourceLocation {
    SourceLocation::new(BufferId::new(1), offset)
}

// === Sink ===

#[test]
fn keeps_report_order() {
    let mut diags = Diagnostics::new();
    diags.add(DiagCode::ExpectedClosingQuote, loc(4));
    diags.add(DiagCode::EmbeddedNull, loc(1));
    assert_eq!(
        diags.codes(),
        vec![DiagCode::ExpectedClosingQuote, DiagCode::EmbeddedNull]
    );
    assert_eq!(diags.len(), 2);
    assert_eq!(diags.iter().next_back().map(|d| d.location), Some(loc(1)));
}

#[test]
fn warnings_are_not_errors() {
    let mut diags = Diagnostics::new();
    assert!(diags.is_empty());
    diags.add(DiagCode::NestedBlockComment, loc(0));
    assert!(!diags.has_errors());
    diags.add(DiagCode::Utf8Char, loc(3));
    assert!(diags.has_errors());
}

// === Display ===

#[test]
fn display_includes_code_location_and_message() {
    let diag = Diagnostic::new(DiagCode::MissingVectorDigits, loc(12));
    assert_eq!(
        diag.to_string(),
        "error[L0208] at #1:12: expected vector literal digits"
    );
}
