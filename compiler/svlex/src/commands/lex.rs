//! The `lex` command: tokenize a file and list tokens and diagnostics.

use std::fmt::Write as _;

use bumpalo::Bump;
use sv_diagnostic::{Diagnostics, Severity};
use sv_lexer::{KeywordVersion, Lexer, LexerOptions, SourceManager, Token, TokenValue};
use tracing::debug;

use super::read_file;
use crate::DriverError;

/// Options of the `lex` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LexConfig {
    pub options: LexerOptions,
    pub version: KeywordVersion,
    /// List trivia pieces above each token.
    pub show_trivia: bool,
}

impl Default for LexConfig {
    fn default() -> Self {
        LexConfig {
            options: LexerOptions::default(),
            version: KeywordVersion::LATEST,
            show_trivia: true,
        }
    }
}

/// Parse the arguments after `lex`, returning the config and file path.
///
/// Flags may come before or after the path.
pub fn parse_lex_options(args: &[String]) -> Result<(LexConfig, String), DriverError> {
    let mut config = LexConfig::default();
    let mut path = None;

    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-errors=") {
            let max = value
                .parse()
                .map_err(|_| DriverError::InvalidMaxErrors(value.to_owned()))?;
            config.options = config.options.with_max_errors(max);
        } else if let Some(value) = arg.strip_prefix("--keywords=") {
            config.version = KeywordVersion::from_specifier(value)
                .ok_or_else(|| DriverError::UnknownKeywordVersion(value.to_owned()))?;
        } else if arg == "--no-trivia" {
            config.show_trivia = false;
        } else if arg.starts_with('-') {
            return Err(DriverError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        }
    }

    let path = path.ok_or(DriverError::MissingPath)?;
    Ok((config, path))
}

/// Result of lexing one source.
#[derive(Clone, Debug, Default)]
pub struct LexReport {
    /// One line per token, preceded by its trivia when enabled.
    pub listing: String,
    /// Rendered diagnostics in source order.
    pub diagnostics: String,
    pub token_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
}

impl LexReport {
    /// Check if lexing reported any error-severity diagnostic.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

/// Lex `text` (named `name` in diagnostics) and render the result.
///
/// The text need not be valid UTF-8; the listing shows invalid bytes as
/// replacement characters.
pub fn lex_source(
    name: &str,
    text: impl AsRef<[u8]>,
    config: &LexConfig,
) -> Result<LexReport, DriverError> {
    let mut sources = SourceManager::new();
    let id = sources.assign_text(text)?;
    let Some(buffer) = sources.buffer(id) else {
        unreachable!("buffer {id} was just assigned");
    };

    let arena = Bump::new();
    let mut diagnostics = Diagnostics::new();
    let tokens =
        Lexer::new(buffer, &arena, &mut diagnostics, config.options).lex_all(config.version);
    debug!(
        file = name,
        tokens = tokens.len(),
        diagnostics = diagnostics.len(),
        "lexed source"
    );

    let mut report = LexReport {
        token_count: tokens.len(),
        ..LexReport::default()
    };
    for token in &tokens {
        if config.show_trivia {
            for trivia in token.trivia {
                let raw = String::from_utf8_lossy(trivia.raw);
                let _ = writeln!(report.listing, "    {:?} {raw:?}", trivia.kind);
            }
        }
        let (line, col) = sources.line_column(token.location).unwrap_or((0, 0));
        let _ = write!(
            report.listing,
            "  {:?} {:?} @ {line}:{col}",
            token.kind,
            token.text()
        );
        if let Some(value) = describe_value(token) {
            let _ = write!(report.listing, " = {value}");
        }
        report.listing.push('\n');
    }

    for diagnostic in &diagnostics {
        match diagnostic.severity() {
            Severity::Error => report.error_count += 1,
            Severity::Warning => report.warning_count += 1,
        }
        let (line, col) = sources
            .line_column(diagnostic.location)
            .unwrap_or((0, 0));
        let _ = writeln!(
            report.diagnostics,
            "{}[{}]: {}",
            diagnostic.severity(),
            diagnostic.code,
            diagnostic.code.message()
        );
        let _ = writeln!(report.diagnostics, "  --> {name}:{line}:{col}");
    }
    Ok(report)
}

/// Lex a file, print the token listing and diagnostics.
///
/// Returns the report so the caller can pick the exit code.
pub fn lex_file(path: &str, config: &LexConfig) -> Result<LexReport, DriverError> {
    let text = read_file(path)?;
    let report = lex_source(path, &text, config)?;

    println!("Tokens for '{path}' ({} tokens):", report.token_count);
    print!("{}", report.listing);
    if !report.diagnostics.is_empty() {
        eprint!("{}", report.diagnostics);
        eprintln!(
            "{} error(s), {} warning(s)",
            report.error_count, report.warning_count
        );
    }
    Ok(report)
}

/// Short rendering of a literal's decoded value.
fn describe_value(token: &Token<'_>) -> Option<String> {
    match token.value {
        TokenValue::None => None,
        TokenValue::Integer(v) => Some(v.to_string()),
        TokenValue::Logic(bit) => Some(bit.to_string()),
        TokenValue::Real(value) => Some(value.to_string()),
        TokenValue::Time { value, unit } => Some(format!("{value}{unit:?}")),
        TokenValue::String(bytes) => Some(format!("{:?}", String::from_utf8_lossy(bytes))),
    }
}
