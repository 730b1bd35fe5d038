//! The diagnostic sink.

use std::fmt;

use sv_lexer_core::SourceLocation;

use crate::{DiagCode, Severity};

/// One reported problem.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: DiagCode,
    pub location: SourceLocation,
}

impl Diagnostic {
    /// Create a diagnostic.
    pub fn new(code: DiagCode, location: SourceLocation) -> Self {
        Diagnostic { code, location }
    }

    /// Severity of the diagnostic's code.
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] at {}: {}",
            self.code.severity(),
            self.code,
            self.location,
            self.code.message()
        )
    }
}

/// Append-only, ordered collection of diagnostics.
///
/// Not synchronized: one lexer at a time holds it mutably.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty sink.
    pub fn new() -> Self {
        Diagnostics::default()
    }

    /// Append a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Append a diagnostic built from a code and location.
    pub fn add(&mut self, code: DiagCode, location: SourceLocation) {
        self.push(Diagnostic::new(code, location));
    }

    /// Number of diagnostics collected.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if any collected diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.items
            .iter()
            .any(|d| d.severity() == Severity::Error)
    }

    /// Iterate in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// The codes in report order.
    pub fn codes(&self) -> Vec<DiagCode> {
        self.items.iter().map(|d| d.code).collect()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests;
