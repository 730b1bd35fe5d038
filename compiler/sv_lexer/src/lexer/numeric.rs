//! Numeric literals: integers, vectors, reals, time literals and `1step`.

use smallvec::SmallVec;
use sv_diagnostic::DiagCode;

use super::{ascii_text, is_base_char, is_ident_char, Lexed, Lexer};
use crate::logic::{Digit, LiteralBits};
use crate::parse_helpers::{parse_decimal_saturating, parse_real_skip_underscores};
use crate::{TimeUnit, TokenKind, TokenValue, MAX_LITERAL_WIDTH};

/// Width of unsized literals unless their value needs more.
const DEFAULT_WIDTH: u32 = 32;

#[inline]
fn is_decimal_run(b: u8) -> bool {
    b.is_ascii_digit() || b == b'_'
}

#[inline]
fn is_vector_digit(b: u8) -> bool {
    b.is_ascii_hexdigit() || matches!(b, b'x' | b'X' | b'z' | b'Z' | b'?' | b'_')
}

impl<'a> Lexer<'a, '_> {
    /// Cursor at a decimal digit.
    pub(super) fn number(&mut self, start: u32) -> Lexed<'a> {
        self.cursor.eat_while(is_decimal_run);
        let int_end = self.cursor.pos();

        if self.cursor.slice(start, int_end) == b"1"
            && self.cursor.rest().starts_with(b"step")
            && !is_ident_char(self.cursor.peek_n(4))
        {
            return self.take(4, TokenKind::OneStep);
        }

        if self.cursor.current() == b'\'' {
            let (_, next, after) = self.lookahead();
            if is_base_char(next) || (matches!(next, b's' | b'S') && is_base_char(after)) {
                let width = self.literal_width(start, int_end);
                return self.based_literal(start, width);
            }
        }

        let mut is_real = false;
        if self.cursor.current() == b'.' {
            if !self.cursor.peek().is_ascii_digit() {
                self.add_diag(DiagCode::MissingFractionalDigits, self.cursor.pos());
                return self.decimal_integer(start);
            }
            self.cursor.advance();
            self.cursor.eat_while(is_decimal_run);
            is_real = true;
        }

        if matches!(self.cursor.current(), b'e' | b'E') {
            let marker = self.cursor.pos();
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            if !self.cursor.current().is_ascii_digit() {
                self.cursor.reset_to(marker);
                self.add_diag(DiagCode::MissingExponentDigits, marker);
                return self.finish_decimal(start, is_real);
            }
            self.cursor.eat_while(is_decimal_run);
            is_real = true;
        }

        if let Some((unit, len)) = self.time_unit() {
            let value = self.real_value(start, self.cursor.pos());
            self.cursor.advance_n(len);
            return (TokenKind::TimeLiteral, TokenValue::Time { value, unit });
        }

        self.finish_decimal(start, is_real)
    }

    fn finish_decimal(&mut self, start: u32, is_real: bool) -> Lexed<'a> {
        if is_real {
            let value = self.real_value(start, self.cursor.pos());
            (TokenKind::RealLiteral, TokenValue::Real(value))
        } else {
            self.decimal_integer(start)
        }
    }

    /// The digits since `start` as a signed decimal integer.
    fn decimal_integer(&mut self, start: u32) -> Lexed<'a> {
        let digits = self
            .cursor
            .slice_from(start)
            .iter()
            .filter(|b| b.is_ascii_digit())
            .map(|b| b - b'0');
        let mut bits = LiteralBits::new();
        if bits.push_decimal(digits, MAX_LITERAL_WIDTH) {
            self.add_diag(DiagCode::VectorLiteralOverflow, start);
        }
        let width = bits.significant_bits().max(DEFAULT_WIDTH);
        let value = bits.finish(self.arena, width, true);
        (TokenKind::IntegerLiteral, TokenValue::Integer(value))
    }

    fn real_value(&mut self, start: u32, end: u32) -> f64 {
        let text = ascii_text(self.cursor.slice(start, end));
        let Some(value) = parse_real_skip_underscores(text) else {
            unreachable!("scanned real literal must parse");
        };
        if value.is_infinite() {
            self.add_diag(DiagCode::RealLiteralOverflow, start);
        }
        value
    }

    /// A time unit suffix at the cursor, with its length.
    fn time_unit(&self) -> Option<(TimeUnit, u32)> {
        let len = match (self.cursor.current(), self.cursor.peek()) {
            (b'm' | b'u' | b'n' | b'p' | b'f', b's') => 2,
            (b's', _) => 1,
            _ => return None,
        };
        if is_ident_char(self.cursor.peek_n(len)) {
            return None;
        }
        let pos = self.cursor.pos();
        let unit = TimeUnit::from_suffix(self.cursor.slice(pos, pos + len))?;
        Some((unit, len))
    }

    /// Validate the size prefix of a sized literal. `None` means the
    /// literal is treated as unsized.
    fn literal_width(&mut self, start: u32, end: u32) -> Option<u32> {
        let size = parse_decimal_saturating(self.cursor.slice(start, end));
        if size == 0 {
            self.add_diag(DiagCode::LiteralSizeIsZero, start);
            return None;
        }
        match u32::try_from(size) {
            Ok(width) if width <= MAX_LITERAL_WIDTH => Some(width),
            _ => {
                self.add_diag(DiagCode::LiteralSizeTooLarge, start);
                Some(MAX_LITERAL_WIDTH)
            }
        }
    }

    /// Cursor at the `'` of a based literal; `start` is the token start
    /// (the size prefix, if any).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "digit count is bounded by the source buffer length"
    )]
    pub(super) fn based_literal(&mut self, start: u32, size: Option<u32>) -> Lexed<'a> {
        self.cursor.advance();
        let signed = matches!(self.cursor.current(), b's' | b'S');
        if signed {
            self.cursor.advance();
        }
        let base = self.cursor.current().to_ascii_lowercase();
        self.cursor.advance();
        let (bits_per_digit, radix) = match base {
            b'b' => (1, 2),
            b'o' => (3, 8),
            b'h' => (4, 16),
            _ => (0, 10),
        };

        let digits_start = self.cursor.pos();
        let mut digits: SmallVec<[Digit; 32]> = SmallVec::new();
        let mut invalid_at = None;
        if self.cursor.current() != b'_' {
            while is_vector_digit(self.cursor.current()) {
                let c = self.cursor.current();
                let pos = self.cursor.pos();
                self.cursor.advance();
                let digit = match c {
                    b'_' => continue,
                    b'x' | b'X' => Digit::X,
                    b'z' | b'Z' | b'?' => Digit::Z,
                    _ => {
                        let value = hex_value(c);
                        if value < radix {
                            Digit::Value(value)
                        } else {
                            if invalid_at.is_none() {
                                invalid_at = Some(pos);
                            }
                            if radix == 10 {
                                Digit::Value(9)
                            } else {
                                Digit::Value(value & (radix - 1))
                            }
                        }
                    }
                };
                digits.push(digit);
            }
        }
        if let Some(pos) = invalid_at {
            self.add_diag(DiagCode::InvalidDigitForBase, pos);
        }

        let Some(&leading) = digits.first() else {
            self.add_diag(DiagCode::MissingVectorDigits, digits_start);
            let width = size.unwrap_or(DEFAULT_WIDTH);
            let value = LiteralBits::new().finish(self.arena, width, signed);
            return (TokenKind::BasedIntegerLiteral, TokenValue::Integer(value));
        };

        let mut bits = LiteralBits::new();
        let mut overflow = false;
        // Bits written by the digits; a leading x/z extends from here.
        let mut covered = 0;
        if radix == 10 {
            let unknowns = digits.iter().filter(|d| d.logic().is_some()).count();
            if unknowns > 0 && digits.len() > 1 {
                self.add_diag(DiagCode::DecimalDigitMultipleUnknown, digits_start);
            }
            if unknowns == 0 || digits.len() > 1 {
                let values = digits.iter().map(|digit| match digit {
                    Digit::Value(v) => *v,
                    Digit::X | Digit::Z => 0,
                });
                overflow = bits.push_decimal(values, size.unwrap_or(MAX_LITERAL_WIDTH));
                covered = u32::MAX;
            }
        } else {
            for (index, digit) in digits.iter().rev().enumerate() {
                bits.set_digit(index as u32, bits_per_digit, *digit);
            }
            covered = digits.len() as u32 * bits_per_digit;
        }

        let width = match size {
            Some(width) => width,
            None => bits
                .significant_bits()
                .clamp(DEFAULT_WIDTH, MAX_LITERAL_WIDTH),
        };
        if let Some(logic) = leading.logic() {
            if covered < width {
                bits.fill(covered, width, logic);
            }
        }
        if bits.truncate(width) || overflow {
            self.add_diag(DiagCode::VectorLiteralOverflow, start);
        }
        let value = bits.finish(self.arena, width, signed);
        (TokenKind::BasedIntegerLiteral, TokenValue::Integer(value))
    }
}

#[inline]
fn hex_value(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}
