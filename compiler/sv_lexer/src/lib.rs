//! SystemVerilog lexer.
//!
//! Converts one source buffer into a stream of [`Token`]s, each carrying its
//! leading [`Trivia`], a [`SourceLocation`](sv_lexer_core::SourceLocation)
//! and a decoded literal value. Lexing is total: malformed input produces
//! diagnostics and best-effort tokens, never a failure.
//!
//! Three primitives serve a macro preprocessor built on top:
//! [`concatenate_tokens`] (token pasting), [`stringify`] (`` `" ``) and
//! [`split_tokens`] (re-lexing part of a token).
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use sv_diagnostic::Diagnostics;
//! use sv_lexer::{KeywordVersion, Lexer, LexerOptions, TokenKind};
//! use sv_lexer_core::{BufferId, SourceBuffer};
//!
//! let buffer = SourceBuffer::new(BufferId::new(1), "wire [7:0] w = 8'hFF;");
//! let arena = Bump::new();
//! let mut diagnostics = Diagnostics::new();
//! let mut lexer = Lexer::new(&buffer, &arena, &mut diagnostics, LexerOptions::default());
//! let tokens = lexer.lex_all(KeywordVersion::LATEST);
//! assert_eq!(tokens[8].integer().and_then(|v| v.to_u64()), Some(255));
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfFile));
//! assert!(diagnostics.is_empty());
//! ```

mod arena;
mod directive;
mod escape;
mod keywords;
mod lexer;
mod logic;
mod options;
mod parse_helpers;
mod primitives;
mod source_manager;
mod token;
mod trivia;

pub use directive::DirectiveKind;
pub use keywords::{Keyword, KeywordVersion};
pub use lexer::Lexer;
pub use logic::{Logic, LogicVector, MAX_LITERAL_WIDTH};
pub use options::LexerOptions;
pub use primitives::{concatenate_tokens, split_tokens, stringify};
pub use source_manager::{SourceManager, SourceResolver};
pub use token::{TimeUnit, Token, TokenFlags, TokenKind, TokenValue};
pub use trivia::{Trivia, TriviaKind};
