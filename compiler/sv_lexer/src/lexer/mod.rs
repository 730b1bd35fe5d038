//! The SystemVerilog lexer.
//!
//! [`Lexer::produce_token`] scans leading trivia, then one token, and
//! returns it with the trivia attached. Every input problem becomes a
//! diagnostic and a best-effort token; lexing never fails and never stops.
//! Past the end of input every call returns a fresh `EndOfFile` token.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns the token kind and payload; the
//! token's text is always the cursor span since the start of the token.
//! Numeric literals live in [`numeric`].

mod numeric;

use bumpalo::Bump;
use smallvec::SmallVec;
use sv_diagnostic::{DiagCode, Diagnostics};
use sv_lexer_core::{Cursor, SourceBuffer, SourceView};
use tracing::{debug, trace};

use crate::escape::unescape_string;
use crate::{
    DirectiveKind, Keyword, KeywordVersion, LexerOptions, Logic, Token, TokenFlags, TokenKind,
    TokenValue, Trivia, TriviaKind,
};

/// Kind and payload of a scanned token. The text is the cursor span.
type Lexed<'a> = (TokenKind, TokenValue<'a>);

/// Turns one source view into tokens.
///
/// Borrows the source and arena for `'a` (the lifetime of every token it
/// returns) and the diagnostic sink for `'d`.
pub struct Lexer<'a, 'd> {
    view: SourceView<'a>,
    cursor: Cursor<'a>,
    arena: &'a Bump,
    diagnostics: &'d mut Diagnostics,
    options: LexerOptions,
    /// Diagnostics issued so far, including suppressed ones.
    error_count: u32,
    /// No token has been produced since the last line break.
    on_new_line: bool,
}

impl<'a, 'd> Lexer<'a, 'd> {
    /// Create a lexer over a whole source buffer.
    pub fn new(
        buffer: &'a SourceBuffer,
        arena: &'a Bump,
        diagnostics: &'d mut Diagnostics,
        options: LexerOptions,
    ) -> Self {
        Self::from_view(buffer.view(), arena, diagnostics, options)
    }

    /// Create a lexer over any sentinel-terminated view.
    pub fn from_view(
        view: SourceView<'a>,
        arena: &'a Bump,
        diagnostics: &'d mut Diagnostics,
        options: LexerOptions,
    ) -> Self {
        Lexer {
            view,
            cursor: view.cursor(),
            arena,
            diagnostics,
            options,
            error_count: 0,
            on_new_line: true,
        }
    }

    /// Number of diagnostics issued so far, including suppressed ones.
    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    /// Produce the next token.
    pub fn produce_token(&mut self, version: KeywordVersion) -> Token<'a> {
        let errors_before = self.error_count;
        let mut trivia: SmallVec<[Trivia<'a>; 8]> = SmallVec::new();
        self.lex_trivia(&mut trivia);

        let mut flags = TokenFlags::empty();
        if self.on_new_line {
            flags |= TokenFlags::LINE_START;
        }

        let start = self.cursor.pos();
        let (kind, value) = self.lex_token(start, version);
        let raw = self.cursor.slice_from(start);
        if kind != TokenKind::EndOfFile {
            self.on_new_line = false;
        }
        if self.error_count != errors_before {
            flags |= TokenFlags::HAS_ERROR;
        }

        let trivia: &'a [Trivia<'a>] = if trivia.is_empty() {
            &[]
        } else {
            self.arena.alloc_slice_copy(&trivia)
        };
        let token = Token {
            kind,
            flags,
            location: self.view.location(start),
            raw,
            trivia,
            value,
        };
        trace!(?kind, location = %token.location, raw = %token, "token");
        token
    }

    /// Lex every remaining token, ending with (and including) `EndOfFile`.
    pub fn lex_all(&mut self, version: KeywordVersion) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.produce_token(version);
            tokens.push(token);
            if token.is_eof() {
                return tokens;
            }
        }
    }

    /// Report a diagnostic at view position `pos`, unless the limit has
    /// been reached.
    fn add_diag(&mut self, code: DiagCode, pos: u32) {
        if self.error_count < self.options.max_errors {
            self.diagnostics.add(code, self.view.location(pos));
        } else if self.error_count == self.options.max_errors {
            debug!(
                limit = self.options.max_errors,
                buffer = %self.view.id(),
                "diagnostic limit reached; suppressing further diagnostics"
            );
        }
        self.error_count = self.error_count.saturating_add(1);
    }

    // ─── Trivia ────────────────────────────────────────────────────────

    fn lex_trivia(&mut self, out: &mut SmallVec<[Trivia<'a>; 8]>) {
        loop {
            let start = self.cursor.pos();
            let kind = match self.cursor.current() {
                b' ' | b'\t' | 0x0B | 0x0C => {
                    self.cursor.eat_while(is_horizontal_space);
                    TriviaKind::Whitespace
                }
                0xEF if self.at_byte_order_mark(start) => {
                    self.cursor.advance_n(3);
                    TriviaKind::Whitespace
                }
                b'\n' | b'\r' => {
                    self.eat_line_break();
                    self.on_new_line = true;
                    TriviaKind::EndOfLine
                }
                b'/' if self.cursor.peek() == b'/' => {
                    self.cursor.eat_until_newline_or_eof();
                    TriviaKind::LineComment
                }
                b'/' if self.cursor.peek() == b'*' => {
                    self.block_comment(start);
                    TriviaKind::BlockComment
                }
                b'\\' if matches!(self.cursor.peek(), b'\n' | b'\r') => {
                    self.cursor.advance();
                    self.eat_line_break();
                    TriviaKind::LineContinuation
                }
                _ => return,
            };
            out.push(Trivia::new(
                kind,
                self.view.location(start),
                self.cursor.slice_from(start),
            ));
        }
    }

    fn at_byte_order_mark(&self, start: u32) -> bool {
        start == 0
            && self.view.base() == 0
            && self.cursor.peek() == 0xBB
            && self.cursor.peek_n(2) == 0xBF
    }

    /// Consume `\n`, `\r\n` or a lone `\r`.
    fn eat_line_break(&mut self) {
        if self.cursor.current() == b'\r' {
            self.cursor.advance();
            if self.cursor.current() == b'\n' {
                self.cursor.advance();
            }
        } else {
            self.cursor.advance();
        }
    }

    fn block_comment(&mut self, start: u32) {
        self.cursor.advance_n(2);
        loop {
            match self.cursor.skip_to_block_comment_delim() {
                b'*' => {
                    self.cursor.advance();
                    if self.cursor.current() == b'/' {
                        self.cursor.advance();
                        return;
                    }
                }
                b'/' => {
                    let slash = self.cursor.pos();
                    self.cursor.advance();
                    if self.cursor.current() == b'*' {
                        self.add_diag(DiagCode::NestedBlockComment, slash);
                    }
                }
                _ => {
                    self.add_diag(DiagCode::UnterminatedBlockComment, start);
                    return;
                }
            }
        }
    }

    // ─── Dispatch ──────────────────────────────────────────────────────

    fn lex_token(&mut self, start: u32, version: KeywordVersion) -> Lexed<'a> {
        match self.cursor.current() {
            0 => self.null_or_eof(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start, version),
            b'0'..=b'9' => self.number(start),
            b'$' => self.dollar(start, version),
            b'"' => self.string(start),
            b'`' => self.directive(start),
            b'\'' => self.apostrophe(start),
            b'\\' => self.escaped_identifier(start),
            b'(' => self.left_paren(),
            b')' => self.take(1, TokenKind::CloseParenthesis),
            b'[' => self.take(1, TokenKind::OpenBracket),
            b']' => self.take(1, TokenKind::CloseBracket),
            b'{' => self.take(1, TokenKind::OpenBrace),
            b'}' => self.take(1, TokenKind::CloseBrace),
            b';' => self.take(1, TokenKind::Semicolon),
            b',' => self.take(1, TokenKind::Comma),
            b'?' => self.take(1, TokenKind::Question),
            b'.' => self.dot(),
            b':' => self.colon(),
            b'#' => self.hash(),
            b'@' => self.at(),
            b'+' => self.plus(),
            b'-' => self.minus(),
            b'*' => self.star(start),
            b'/' => self.slash(),
            b'%' => self.percent(),
            b'^' => self.caret(),
            b'~' => self.tilde(),
            b'!' => self.exclamation(),
            b'&' => self.ampersand(),
            b'|' => self.pipe(),
            b'=' => self.equals(),
            b'<' => self.less(),
            b'>' => self.greater(),
            0x80..=0xFF => {
                let code = match self.cursor.utf8_len() {
                    Some(len) => {
                        self.cursor.advance_n(len);
                        DiagCode::Utf8Char
                    }
                    None => {
                        self.cursor.advance();
                        DiagCode::InvalidUtf8
                    }
                };
                self.add_diag(code, start);
                (TokenKind::Unknown, TokenValue::None)
            }
            // Control characters and DEL. Whitespace and line breaks were
            // consumed as trivia.
            _ => {
                self.cursor.advance();
                self.add_diag(DiagCode::NonPrintableChar, start);
                (TokenKind::Unknown, TokenValue::None)
            }
        }
    }

    /// Consume `len` bytes and produce a payload-free `kind`.
    #[inline]
    fn take(&mut self, len: u32, kind: TokenKind) -> Lexed<'a> {
        self.cursor.advance_n(len);
        (kind, TokenValue::None)
    }

    /// The current byte and the two after it.
    #[inline]
    fn lookahead(&self) -> (u8, u8, u8) {
        (
            self.cursor.current(),
            self.cursor.peek(),
            self.cursor.peek_n(2),
        )
    }

    fn null_or_eof(&mut self, start: u32) -> Lexed<'a> {
        if self.cursor.is_eof() {
            return (TokenKind::EndOfFile, TokenValue::None);
        }
        self.cursor.advance();
        self.add_diag(DiagCode::EmbeddedNull, start);
        (TokenKind::Unknown, TokenValue::None)
    }

    // ─── Names ─────────────────────────────────────────────────────────

    fn identifier(&mut self, start: u32, version: KeywordVersion) -> Lexed<'a> {
        self.cursor.eat_while(is_ident_char);
        let text = ascii_text(self.cursor.slice_from(start));
        match Keyword::lookup(text, version) {
            Some(kw) => (TokenKind::Keyword(kw), TokenValue::None),
            None => (TokenKind::Identifier, TokenValue::None),
        }
    }

    fn dollar(&mut self, start: u32, version: KeywordVersion) -> Lexed<'a> {
        self.cursor.advance();
        if !is_ident_char(self.cursor.current()) {
            return (TokenKind::Dollar, TokenValue::None);
        }
        self.cursor.eat_while(is_ident_char);
        let text = ascii_text(self.cursor.slice_from(start));
        match Keyword::lookup(text, version) {
            Some(kw) => (TokenKind::Keyword(kw), TokenValue::None),
            None => (TokenKind::SystemIdentifier, TokenValue::None),
        }
    }

    /// `\` followed by printable ASCII up to the next whitespace.
    fn escaped_identifier(&mut self, start: u32) -> Lexed<'a> {
        self.cursor.advance();
        if !is_printable_ascii(self.cursor.current()) {
            self.add_diag(DiagCode::EscapedWhitespace, start);
            return (TokenKind::Unknown, TokenValue::None);
        }
        self.cursor.eat_while(is_printable_ascii);
        (TokenKind::Identifier, TokenValue::None)
    }

    // ─── Strings ───────────────────────────────────────────────────────

    fn string(&mut self, start: u32) -> Lexed<'a> {
        self.cursor.advance();
        let content_start = self.cursor.pos();
        let mut terminated = true;
        let content_end = loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    let end = self.cursor.pos();
                    self.cursor.advance();
                    break end;
                }
                b'\\' => {
                    self.cursor.advance();
                    match self.cursor.current() {
                        b'\r' => self.eat_line_break(),
                        0 if self.cursor.is_eof() => {}
                        _ => self.cursor.advance_char(),
                    }
                }
                0 if !self.cursor.is_eof() => self.cursor.advance(),
                // Line break or end of input.
                _ => {
                    terminated = false;
                    break self.cursor.pos();
                }
            }
        };

        let content = self.cursor.slice(content_start, content_end);
        let mut errors = SmallVec::new();
        let bytes: &'a [u8] = match unescape_string(content, &mut errors) {
            Some(decoded) => self.arena.alloc_slice_copy(&decoded),
            None => content,
        };
        for (code, offset) in errors {
            self.add_diag(code, content_start + offset);
        }
        if !terminated {
            self.add_diag(DiagCode::ExpectedClosingQuote, start);
        }
        (TokenKind::StringLiteral, TokenValue::String(bytes))
    }

    // ─── Directives & Macros ───────────────────────────────────────────

    fn directive(&mut self, start: u32) -> Lexed<'a> {
        self.cursor.advance();
        match self.lookahead() {
            (b'"', _, _) => self.take(1, TokenKind::MacroQuote),
            (b'`', _, _) => self.take(1, TokenKind::MacroPaste),
            (b'\\', b'`', b'"') => self.take(3, TokenKind::MacroEscapedQuote),
            (c, _, _) if c.is_ascii_alphabetic() || c == b'_' => {
                self.cursor.eat_while(is_ident_char);
                let name = ascii_text(self.cursor.slice(start + 1, self.cursor.pos()));
                let kind = DirectiveKind::from_name(name);
                if kind == DirectiveKind::Include && !self.on_new_line {
                    self.add_diag(DiagCode::IncludeNotFirstOnLine, start);
                }
                (TokenKind::Directive(kind), TokenValue::None)
            }
            _ => {
                self.add_diag(DiagCode::MisplacedDirectiveChar, start);
                (TokenKind::Unknown, TokenValue::None)
            }
        }
    }

    // ─── Apostrophe ────────────────────────────────────────────────────

    fn apostrophe(&mut self, start: u32) -> Lexed<'a> {
        let (_, next, after) = self.lookahead();
        match next {
            b'{' => self.take(2, TokenKind::ApostropheOpenBrace),
            c if is_base_char(c) => self.based_literal(start, None),
            b's' | b'S' if is_base_char(after) => self.based_literal(start, None),
            b'0' | b'1' | b'x' | b'X' | b'z' | b'Z' => {
                self.cursor.advance_n(2);
                match Logic::from_char(next) {
                    Some(bit) => (TokenKind::UnbasedUnsizedLiteral, TokenValue::Logic(bit)),
                    None => unreachable!("matched a logic digit"),
                }
            }
            _ => self.take(1, TokenKind::Apostrophe),
        }
    }

    // ─── Operators ─────────────────────────────────────────────────────

    fn left_paren(&mut self) -> Lexed<'a> {
        match self.lookahead() {
            // `(*)` is three tokens; see `star`.
            (_, b'*', b')') => self.take(1, TokenKind::OpenParenthesis),
            (_, b'*', _) => self.take(2, TokenKind::OpenParenthesisStar),
            _ => self.take(1, TokenKind::OpenParenthesis),
        }
    }

    fn star(&mut self, start: u32) -> Lexed<'a> {
        let after_paren = start
            .checked_sub(1)
            .and_then(|p| self.view.text().get(p as usize))
            == Some(&b'(');
        self.cursor.advance();
        match self.cursor.current() {
            b'*' => self.take(1, TokenKind::DoubleStar),
            b'=' => self.take(1, TokenKind::StarEqual),
            b'>' => self.take(1, TokenKind::StarArrow),
            b')' if !after_paren => self.take(1, TokenKind::StarCloseParenthesis),
            _ => (TokenKind::Star, TokenValue::None),
        }
    }

    fn dot(&mut self) -> Lexed<'a> {
        self.cursor.advance();
        match self.cursor.current() {
            b'*' => self.take(1, TokenKind::DotStar),
            _ => (TokenKind::Dot, TokenValue::None),
        }
    }

    fn colon(&mut self) -> Lexed<'a> {
        self.cursor.advance();
        match self.lookahead() {
            (b':', _, _) => self.take(1, TokenKind::DoubleColon),
            (b'=', _, _) => self.take(1, TokenKind::ColonEquals),
            // `:/*` and `://` start a comment after the colon.
            (b'/', next, _) if next != b'/' && next != b'*' => {
                self.take(1, TokenKind::ColonSlash)
            }
            _ => (TokenKind::Colon, TokenValue::None),
        }
    }

    fn hash(&mut self) -> Lexed<'a> {
        self.cursor.advance();
        match self.lookahead() {
            (b'#', _, _) => self.take(1, TokenKind::DoubleHash),
            (b'-', b'#', _) => self.take(2, TokenKind::HashMinusHash),
            (b'=', b'#', _) => self.take(2, TokenKind::HashEqualsHash),
            _ => (TokenKind::Hash, TokenValue::None),
        }
    }

    fn at(&mut self) -> Lexed<'a> {
        self.cursor.advance();
        match self.cursor.current() {
            b'@' => self.take(1, TokenKind::DoubleAt),
            _ => (TokenKind::At, TokenValue::None),
        }
    }

    fn plus(&mut self) -> Lexed<'a> {
        self.cursor.advance();
        match self.cursor.current() {
            b'+' => self.take(1, TokenKind::DoublePlus),
            b'=' => self.take(1, TokenKind::PlusEqual),
            b':' => self.take(1, TokenKind::PlusColon),
            _ => (TokenKind::Plus, TokenValue::None),
        }
    }

    fn minus(&mut self) -> Lexed<'a> {
        self.cursor.advance();
        match self.lookahead() {
            (b'>', b'>', _) => self.take(2, TokenKind::MinusDoubleArrow),
            (b'>', _, _) => self.take(1, TokenKind::MinusArrow),
            (b'-', _, _) => self.take(1, TokenKind::DoubleMinus),
            (b'=', _, _) => self.take(1, TokenKind::MinusEqual),
            (b':', _, _) => self.take(1, TokenKind::MinusColon),
            _ => (TokenKind::Minus, TokenValue::None),
        }
    }

    fn slash(&mut self) -> Lexed<'a> {
        self.cursor.advance();
        match self.cursor.current() {
            b'=' => self.take(1, TokenKind::SlashEqual),
            _ => (TokenKind::Slash, TokenValue::None),
        }
    }

    fn percent(&mut self) -> Lexed<'a> {
        self.cursor.advance();
        match self.cursor.current() {
            b'=' => self.take(1, TokenKind::PercentEqual),
            _ => (TokenKind::Percent, TokenValue::None),
        }
    }

    fn caret(&mut self) -> Lexed<'a> {
        self.cursor.advance();
        match self.cursor.current() {
            b'~' => self.take(1, TokenKind::XorTilde),
            b'=' => self.take(1, TokenKind::XorEqual),
            _ => (TokenKind::Caret, TokenValue::None),
        }
    }

    fn tilde(&mut self) -> Lexed<'a> {
        self.cursor.advance();
        match self.cursor.current() {
            b'&' => self.take(1, TokenKind::TildeAnd),
            b'|' => self.take(1, TokenKind::TildeOr),
            b'^' => self.take(1, TokenKind::TildeXor),
            _ => (TokenKind::Tilde, TokenValue::None),
        }
    }

    fn exclamation(&mut self) -> Lexed<'a> {
        self.cursor.advance();
        match self.lookahead() {
            (b'=', b'=', _) => self.take(2, TokenKind::ExclamationDoubleEquals),
            (b'=', b'?', _) => self.take(2, TokenKind::ExclamationEqualsQuestion),
            (b'=', _, _) => self.take(1, TokenKind::ExclamationEquals),
            _ => (TokenKind::Exclamation, TokenValue::None),
        }
    }

    fn ampersand(&mut self) -> Lexed<'a> {
        self.cursor.advance();
        match self.lookahead() {
            (b'&', b'&', _) => self.take(2, TokenKind::TripleAnd),
            (b'&', _, _) => self.take(1, TokenKind::DoubleAnd),
            (b'=', _, _) => self.take(1, TokenKind::AndEqual),
            _ => (TokenKind::And, TokenValue::None),
        }
    }

    fn pipe(&mut self) -> Lexed<'a> {
        self.cursor.advance();
        match self.lookahead() {
            (b'-', b'>', _) => self.take(2, TokenKind::OrMinusArrow),
            (b'=', b'>', _) => self.take(2, TokenKind::OrEqualsArrow),
            (b'|', _, _) => self.take(1, TokenKind::DoubleOr),
            (b'=', _, _) => self.take(1, TokenKind::OrEqual),
            _ => (TokenKind::Or, TokenValue::None),
        }
    }

    fn equals(&mut self) -> Lexed<'a> {
        self.cursor.advance();
        match self.lookahead() {
            (b'=', b'=', _) => self.take(2, TokenKind::TripleEquals),
            (b'=', b'?', _) => self.take(2, TokenKind::DoubleEqualsQuestion),
            (b'=', _, _) => self.take(1, TokenKind::DoubleEquals),
            (b'>', _, _) => self.take(1, TokenKind::EqualsArrow),
            _ => (TokenKind::Equals, TokenValue::None),
        }
    }

    fn less(&mut self) -> Lexed<'a> {
        self.cursor.advance();
        match self.lookahead() {
            (b'<', b'<', b'=') => self.take(3, TokenKind::TripleLeftShiftEqual),
            (b'<', b'<', _) => self.take(2, TokenKind::TripleLeftShift),
            (b'<', b'=', _) => self.take(2, TokenKind::LeftShiftEqual),
            (b'<', _, _) => self.take(1, TokenKind::LeftShift),
            (b'=', _, _) => self.take(1, TokenKind::LessThanEquals),
            (b'-', b'>', _) => self.take(2, TokenKind::LessThanMinusArrow),
            _ => (TokenKind::LessThan, TokenValue::None),
        }
    }

    fn greater(&mut self) -> Lexed<'a> {
        self.cursor.advance();
        match self.lookahead() {
            (b'>', b'>', b'=') => self.take(3, TokenKind::TripleRightShiftEqual),
            (b'>', b'>', _) => self.take(2, TokenKind::TripleRightShift),
            (b'>', b'=', _) => self.take(2, TokenKind::RightShiftEqual),
            (b'>', _, _) => self.take(1, TokenKind::RightShift),
            (b'=', _, _) => self.take(1, TokenKind::GreaterThanEquals),
            _ => (TokenKind::GreaterThan, TokenValue::None),
        }
    }
}

// ─── Character Classes ─────────────────────────────────────────────────

/// Lexeme bytes the scanner only lets through when they are ASCII.
#[inline]
fn ascii_text(bytes: &[u8]) -> &str {
    std::str::from_utf8(bytes).unwrap_or_default()
}

#[inline]
fn is_horizontal_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0B | 0x0C)
}

#[inline]
pub(crate) fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

#[inline]
fn is_printable_ascii(b: u8) -> bool {
    (0x21..=0x7E).contains(&b)
}

#[inline]
fn is_base_char(b: u8) -> bool {
    matches!(b, b'b' | b'B' | b'o' | b'O' | b'd' | b'D' | b'h' | b'H')
}
