//! Low-level building blocks for the SystemVerilog lexer.
//!
//! This crate has no `sv_*` dependencies so that external tools (formatters,
//! highlighters, language servers) can scan source text without pulling in
//! the rest of the front end.
//!
//! - [`SourceBuffer`]: owned, sentinel-terminated source text with a
//!   [`BufferId`].
//! - [`SourceView`]: borrowed view of sentinel-terminated text, either from a
//!   [`SourceBuffer`] or from memory owned by someone else (an arena).
//! - [`Cursor`]: byte cursor over a view; EOF is the sentinel.
//! - [`SourceLocation`] / [`SourceRange`]: opaque `(buffer, offset)` positions.

mod cursor;
mod location;
mod source_buffer;

pub use cursor::Cursor;
pub use location::{BufferId, SourceLocation, SourceRange};
pub use source_buffer::{padded_source, SourceBuffer, SourceBufferError, SourceView};
