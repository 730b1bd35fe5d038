//! Tokens produced by the lexer.
//!
//! A [`Token`] is `Copy`: its text, trivia and literal payload all borrow
//! either the source buffer or the arena for `'a`.

mod units;

use std::borrow::Cow;
use std::fmt;

use bitflags::bitflags;
use sv_lexer_core::{SourceLocation, SourceRange};

use crate::{DirectiveKind, Keyword, Logic, LogicVector, Trivia};

pub use units::TimeUnit;

/// Kind of a token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // === Special ===
    /// Malformed input, or a placeholder carrying leftover trivia.
    Unknown,
    EndOfFile,

    // === Names ===
    /// Simple or escaped (`\bus+1 `) identifier.
    Identifier,
    /// `$display`, `$clog2`, ...
    SystemIdentifier,
    Keyword(Keyword),

    // === Literals ===
    /// Plain decimal number (`42`, `1_000`).
    IntegerLiteral,
    /// Sized or unsized based number (`8'hFF`, `'sb101`).
    BasedIntegerLiteral,
    /// `'0`, `'1`, `'x`, `'z`.
    UnbasedUnsizedLiteral,
    RealLiteral,
    TimeLiteral,
    StringLiteral,

    // === Directives & Macros ===
    /// `` `name ``
    Directive(DirectiveKind),
    /// `` `" ``
    MacroQuote,
    /// `` `\`" ``
    MacroEscapedQuote,
    /// ``` `` ```
    MacroPaste,

    // === Punctuation ===
    /// `1step`
    OneStep,
    /// `'{`
    ApostropheOpenBrace,
    /// `'`
    Apostrophe,
    /// `$`
    Dollar,
    OpenParenthesis,
    CloseParenthesis,
    /// `(*`
    OpenParenthesisStar,
    /// `*)`
    StarCloseParenthesis,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Semicolon,
    Comma,
    Dot,
    /// `.*`
    DotStar,
    Colon,
    /// `::`
    DoubleColon,
    /// `:=`
    ColonEquals,
    /// `:/`
    ColonSlash,
    Question,
    Hash,
    /// `##`
    DoubleHash,
    /// `#-#`
    HashMinusHash,
    /// `#=#`
    HashEqualsHash,
    At,
    /// `@@`
    DoubleAt,

    // === Operators ===
    Plus,
    /// `++`
    DoublePlus,
    /// `+:`
    PlusColon,
    Minus,
    /// `--`
    DoubleMinus,
    /// `-:`
    MinusColon,
    /// `->`
    MinusArrow,
    /// `->>`
    MinusDoubleArrow,
    Star,
    /// `**`
    DoubleStar,
    /// `*>`
    StarArrow,
    Slash,
    Percent,
    Caret,
    /// `^~`
    XorTilde,
    Tilde,
    /// `~&`
    TildeAnd,
    /// `~|`
    TildeOr,
    /// `~^`
    TildeXor,
    Exclamation,
    /// `!=`
    ExclamationEquals,
    /// `!==`
    ExclamationDoubleEquals,
    /// `!=?`
    ExclamationEqualsQuestion,
    And,
    /// `&&`
    DoubleAnd,
    /// `&&&`
    TripleAnd,
    Or,
    /// `||`
    DoubleOr,
    /// `|->`
    OrMinusArrow,
    /// `|=>`
    OrEqualsArrow,
    Equals,
    /// `==`
    DoubleEquals,
    /// `===`
    TripleEquals,
    /// `==?`
    DoubleEqualsQuestion,
    /// `=>`
    EqualsArrow,
    LessThan,
    /// `<=`
    LessThanEquals,
    /// `<->`
    LessThanMinusArrow,
    /// `<<`
    LeftShift,
    /// `<<<`
    TripleLeftShift,
    GreaterThan,
    /// `>=`
    GreaterThanEquals,
    /// `>>`
    RightShift,
    /// `>>>`
    TripleRightShift,

    // === Assignment Operators ===
    PlusEqual,
    MinusEqual,
    StarEqual,
    SlashEqual,
    PercentEqual,
    AndEqual,
    OrEqual,
    XorEqual,
    /// `<<=`
    LeftShiftEqual,
    /// `<<<=`
    TripleLeftShiftEqual,
    /// `>>=`
    RightShiftEqual,
    /// `>>>=`
    TripleRightShiftEqual,
}

impl TokenKind {
    /// The text of tokens whose spelling never varies.
    ///
    /// `None` for names, literals, directives and the special kinds.
    pub fn fixed_text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Keyword(kw) => kw.as_str(),
            TokenKind::MacroQuote => "`\"",
            TokenKind::MacroEscapedQuote => "`\\`\"",
            TokenKind::MacroPaste => "``",
            TokenKind::OneStep => "1step",
            TokenKind::ApostropheOpenBrace => "'{",
            TokenKind::Apostrophe => "'",
            TokenKind::Dollar => "$",
            TokenKind::OpenParenthesis => "(",
            TokenKind::CloseParenthesis => ")",
            TokenKind::OpenParenthesisStar => "(*",
            TokenKind::StarCloseParenthesis => "*)",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::DotStar => ".*",
            TokenKind::Colon => ":",
            TokenKind::DoubleColon => "::",
            TokenKind::ColonEquals => ":=",
            TokenKind::ColonSlash => ":/",
            TokenKind::Question => "?",
            TokenKind::Hash => "#",
            TokenKind::DoubleHash => "##",
            TokenKind::HashMinusHash => "#-#",
            TokenKind::HashEqualsHash => "#=#",
            TokenKind::At => "@",
            TokenKind::DoubleAt => "@@",
            TokenKind::Plus => "+",
            TokenKind::DoublePlus => "++",
            TokenKind::PlusColon => "+:",
            TokenKind::Minus => "-",
            TokenKind::DoubleMinus => "--",
            TokenKind::MinusColon => "-:",
            TokenKind::MinusArrow => "->",
            TokenKind::MinusDoubleArrow => "->>",
            TokenKind::Star => "*",
            TokenKind::DoubleStar => "**",
            TokenKind::StarArrow => "*>",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Caret => "^",
            TokenKind::XorTilde => "^~",
            TokenKind::Tilde => "~",
            TokenKind::TildeAnd => "~&",
            TokenKind::TildeOr => "~|",
            TokenKind::TildeXor => "~^",
            TokenKind::Exclamation => "!",
            TokenKind::ExclamationEquals => "!=",
            TokenKind::ExclamationDoubleEquals => "!==",
            TokenKind::ExclamationEqualsQuestion => "!=?",
            TokenKind::And => "&",
            TokenKind::DoubleAnd => "&&",
            TokenKind::TripleAnd => "&&&",
            TokenKind::Or => "|",
            TokenKind::DoubleOr => "||",
            TokenKind::OrMinusArrow => "|->",
            TokenKind::OrEqualsArrow => "|=>",
            TokenKind::Equals => "=",
            TokenKind::DoubleEquals => "==",
            TokenKind::TripleEquals => "===",
            TokenKind::DoubleEqualsQuestion => "==?",
            TokenKind::EqualsArrow => "=>",
            TokenKind::LessThan => "<",
            TokenKind::LessThanEquals => "<=",
            TokenKind::LessThanMinusArrow => "<->",
            TokenKind::LeftShift => "<<",
            TokenKind::TripleLeftShift => "<<<",
            TokenKind::GreaterThan => ">",
            TokenKind::GreaterThanEquals => ">=",
            TokenKind::RightShift => ">>",
            TokenKind::TripleRightShift => ">>>",
            TokenKind::PlusEqual => "+=",
            TokenKind::MinusEqual => "-=",
            TokenKind::StarEqual => "*=",
            TokenKind::SlashEqual => "/=",
            TokenKind::PercentEqual => "%=",
            TokenKind::AndEqual => "&=",
            TokenKind::OrEqual => "|=",
            TokenKind::XorEqual => "^=",
            TokenKind::LeftShiftEqual => "<<=",
            TokenKind::TripleLeftShiftEqual => "<<<=",
            TokenKind::RightShiftEqual => ">>=",
            TokenKind::TripleRightShiftEqual => ">>>=",
            TokenKind::Unknown
            | TokenKind::EndOfFile
            | TokenKind::Identifier
            | TokenKind::SystemIdentifier
            | TokenKind::IntegerLiteral
            | TokenKind::BasedIntegerLiteral
            | TokenKind::UnbasedUnsizedLiteral
            | TokenKind::RealLiteral
            | TokenKind::TimeLiteral
            | TokenKind::StringLiteral
            | TokenKind::Directive(_) => return None,
        };
        Some(text)
    }

    /// Check if this kind is a literal.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral
                | TokenKind::BasedIntegerLiteral
                | TokenKind::UnbasedUnsizedLiteral
                | TokenKind::RealLiteral
                | TokenKind::TimeLiteral
                | TokenKind::StringLiteral
        )
    }
}

bitflags! {
    /// Per-token metadata.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TokenFlags: u8 {
        /// Token is the first non-trivia token on its line.
        const LINE_START = 1 << 0;
        /// A diagnostic was issued while lexing this token or its trivia.
        const HAS_ERROR = 1 << 1;
        /// Token was built by a macro primitive rather than read from source.
        const SYNTHESIZED = 1 << 2;
    }
}

/// Decoded payload of a literal token.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum TokenValue<'a> {
    #[default]
    None,
    Integer(LogicVector<'a>),
    Logic(Logic),
    Real(f64),
    Time { value: f64, unit: TimeUnit },
    /// Decoded string bytes; escapes resolved, may contain NUL.
    String(&'a [u8]),
}

/// A lexical token.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub flags: TokenFlags,
    /// Location of the first byte of `raw`.
    pub location: SourceLocation,
    /// The token's source bytes, not necessarily valid UTF-8.
    pub raw: &'a [u8],
    /// Trivia preceding the token, in source order.
    pub trivia: &'a [Trivia<'a>],
    pub value: TokenValue<'a>,
}

impl<'a> Token<'a> {
    /// Create a token without payload or flags.
    pub fn new(
        kind: TokenKind,
        location: SourceLocation,
        raw: &'a [u8],
        trivia: &'a [Trivia<'a>],
    ) -> Self {
        Token {
            kind,
            flags: TokenFlags::empty(),
            location,
            raw,
            trivia,
            value: TokenValue::None,
        }
    }

    /// Source range of `raw`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "token text comes from a buffer whose length fits u32"
    )]
    pub fn range(&self) -> SourceRange {
        SourceRange::with_len(self.location, self.raw.len() as u32)
    }

    /// Source range of the leading trivia and the token together.
    pub fn full_range(&self) -> SourceRange {
        let start = self
            .trivia
            .first()
            .map_or(self.location, |t| t.location);
        SourceRange::new(start, self.range().end())
    }

    /// Check if this is the end-of-file token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    /// Check if a diagnostic was issued for this token.
    pub fn has_error(&self) -> bool {
        self.flags.contains(TokenFlags::HAS_ERROR)
    }

    /// Check if the token starts a line.
    pub fn is_line_start(&self) -> bool {
        self.flags.contains(TokenFlags::LINE_START)
    }

    /// The integer payload, for integer literal kinds.
    pub fn integer(&self) -> Option<LogicVector<'a>> {
        match self.value {
            TokenValue::Integer(v) => Some(v),
            _ => None,
        }
    }

    /// The decoded bytes of a string literal.
    pub fn string_value(&self) -> Option<&'a [u8]> {
        match self.value {
            TokenValue::String(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// The raw text, with invalid UTF-8 replaced by `U+FFFD`.
    pub fn text(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.raw)
    }

    /// Append the trivia and raw bytes to `out`, reproducing the source.
    pub fn write_source(&self, out: &mut Vec<u8>) {
        for t in self.trivia {
            out.extend_from_slice(t.raw);
        }
        out.extend_from_slice(self.raw);
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

#[cfg(test)]
mod tests;
