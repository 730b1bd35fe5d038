//! Codes for every lexical diagnostic.
//!
//! Each code has a stable identifier (e.g. `L0101`) where the second digit
//! groups the construct it concerns:
//! - L00xx: characters and identifiers
//! - L01xx: strings and comments
//! - L02xx: numeric literals
//! - L03xx: directives and macro primitives

use std::fmt;

/// Severity level for a diagnostic code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Lexical diagnostic codes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagCode {
    // Characters and identifiers (L00xx)
    /// ASCII control character outside any literal or comment
    NonPrintableChar,
    /// Multi-byte UTF-8 character outside any literal or comment
    Utf8Char,
    /// NUL byte before the end of the buffer
    EmbeddedNull,
    /// Backtick not followed by a directive name
    MisplacedDirectiveChar,
    /// Backslash followed by whitespace instead of an escaped identifier
    EscapedWhitespace,
    /// Byte that does not start a well-formed UTF-8 sequence
    InvalidUtf8,

    // Strings and comments (L01xx)
    /// String literal ends at a line break or end of buffer
    ExpectedClosingQuote,
    /// Block comment without `*/`
    UnterminatedBlockComment,
    /// `/*` inside a block comment
    NestedBlockComment,
    /// Unknown escape sequence in a string literal
    UnknownEscapeCode,
    /// Octal escape value above 255
    OctalEscapeCodeTooBig,
    /// `\x` without hex digits
    InvalidHexEscapeCode,

    // Numeric literals (L02xx)
    /// `.` not followed by a digit in a real literal
    MissingFractionalDigits,
    /// Exponent marker not followed by a digit
    MissingExponentDigits,
    /// Real literal does not fit in a double
    RealLiteralOverflow,
    /// Sized literal with width zero
    LiteralSizeIsZero,
    /// Sized literal wider than the maximum vector width
    LiteralSizeTooLarge,
    /// Digit not valid for the literal's base
    InvalidDigitForBase,
    /// Decimal literal with an unknown digit among other digits
    DecimalDigitMultipleUnknown,
    /// Based literal without digits
    MissingVectorDigits,
    /// Literal value has set bits beyond its declared width
    VectorLiteralOverflow,

    // Directives and macro primitives (L03xx)
    /// `` `include `` not the first token on its line
    IncludeNotFirstOnLine,
    /// Token paste did not form exactly one valid token
    MalformedConcatenation,
}

impl DiagCode {
    /// All codes, for exhaustive testing.
    ///
    /// When adding a variant: add it to the enum, `as_str()`, `message()`,
    /// and here. `all_codes_are_unique` catches a missed `as_str()` arm.
    pub const ALL: &[DiagCode] = &[
        DiagCode::NonPrintableChar,
        DiagCode::Utf8Char,
        DiagCode::EmbeddedNull,
        DiagCode::MisplacedDirectiveChar,
        DiagCode::EscapedWhitespace,
        DiagCode::InvalidUtf8,
        DiagCode::ExpectedClosingQuote,
        DiagCode::UnterminatedBlockComment,
        DiagCode::NestedBlockComment,
        DiagCode::UnknownEscapeCode,
        DiagCode::OctalEscapeCodeTooBig,
        DiagCode::InvalidHexEscapeCode,
        DiagCode::MissingFractionalDigits,
        DiagCode::MissingExponentDigits,
        DiagCode::RealLiteralOverflow,
        DiagCode::LiteralSizeIsZero,
        DiagCode::LiteralSizeTooLarge,
        DiagCode::InvalidDigitForBase,
        DiagCode::DecimalDigitMultipleUnknown,
        DiagCode::MissingVectorDigits,
        DiagCode::VectorLiteralOverflow,
        DiagCode::IncludeNotFirstOnLine,
        DiagCode::MalformedConcatenation,
    ];

    /// Stable identifier of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagCode::NonPrintableChar => "L0001",
            DiagCode::Utf8Char => "L0002",
            DiagCode::EmbeddedNull => "L0003",
            DiagCode::MisplacedDirectiveChar => "L0004",
            DiagCode::EscapedWhitespace => "L0005",
            DiagCode::InvalidUtf8 => "L0006",
            DiagCode::ExpectedClosingQuote => "L0101",
            DiagCode::UnterminatedBlockComment => "L0102",
            DiagCode::NestedBlockComment => "L0103",
            DiagCode::UnknownEscapeCode => "L0104",
            DiagCode::OctalEscapeCodeTooBig => "L0105",
            DiagCode::InvalidHexEscapeCode => "L0106",
            DiagCode::MissingFractionalDigits => "L0201",
            DiagCode::MissingExponentDigits => "L0202",
            DiagCode::RealLiteralOverflow => "L0203",
            DiagCode::LiteralSizeIsZero => "L0204",
            DiagCode::LiteralSizeTooLarge => "L0205",
            DiagCode::InvalidDigitForBase => "L0206",
            DiagCode::DecimalDigitMultipleUnknown => "L0207",
            DiagCode::MissingVectorDigits => "L0208",
            DiagCode::VectorLiteralOverflow => "L0209",
            DiagCode::IncludeNotFirstOnLine => "L0301",
            DiagCode::MalformedConcatenation => "L0302",
        }
    }

    /// Short message describing the problem.
    pub fn message(&self) -> &'static str {
        match self {
            DiagCode::NonPrintableChar => "non-printable character in source text",
            DiagCode::Utf8Char => "UTF-8 character outside of a string or comment",
            DiagCode::EmbeddedNull => "embedded NUL character in source text",
            DiagCode::MisplacedDirectiveChar => "expected a directive name after '`'",
            DiagCode::EscapedWhitespace => "escaped identifier cannot start with whitespace",
            DiagCode::InvalidUtf8 => "invalid UTF-8 sequence in source text",
            DiagCode::ExpectedClosingQuote => "missing closing quote",
            DiagCode::UnterminatedBlockComment => "block comment is not terminated",
            DiagCode::NestedBlockComment => "block comments cannot be nested",
            DiagCode::UnknownEscapeCode => "unknown character escape sequence",
            DiagCode::OctalEscapeCodeTooBig => "octal escape code is too large",
            DiagCode::InvalidHexEscapeCode => "expected hexadecimal digits after '\\x'",
            DiagCode::MissingFractionalDigits => "expected fractional digits after '.'",
            DiagCode::MissingExponentDigits => "expected exponent digits",
            DiagCode::RealLiteralOverflow => "real literal is too large",
            DiagCode::LiteralSizeIsZero => "size of vector literal cannot be zero",
            DiagCode::LiteralSizeTooLarge => "size of vector literal is too large",
            DiagCode::InvalidDigitForBase => "digit is not valid for the literal's base",
            DiagCode::DecimalDigitMultipleUnknown => {
                "decimal literal with an unknown digit cannot have other digits"
            }
            DiagCode::MissingVectorDigits => "expected vector literal digits",
            DiagCode::VectorLiteralOverflow => "vector literal value is too large for its size",
            DiagCode::IncludeNotFirstOnLine => "'`include' must be the first token on its line",
            DiagCode::MalformedConcatenation => "token concatenation does not form a valid token",
        }
    }

    /// Severity of the code.
    pub fn severity(&self) -> Severity {
        match self {
            DiagCode::NestedBlockComment | DiagCode::VectorLiteralOverflow => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Check if this code is a warning.
    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl fmt::Display for DiagCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DiagCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
