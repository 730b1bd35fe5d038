//! Lexical diagnostics.
//!
//! The lexer reports every input problem as a [`Diagnostic`]: a [`DiagCode`]
//! plus the [`SourceLocation`] where it was found. Diagnostics are appended
//! to a [`Diagnostics`] sink in the order they are issued. Message text is
//! provided for tooling; rendering (snippets, line/column) is left to
//! whoever owns the source manager.
//!
//! [`SourceLocation`]: sv_lexer_core::SourceLocation

mod code;
mod diagnostics;

pub use code::{DiagCode, Severity};
pub use diagnostics::{Diagnostic, Diagnostics};
