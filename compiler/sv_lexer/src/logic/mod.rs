//! Four-state values of integer literals.
//!
//! A [`LogicVector`] stores two bit planes of `u64` words, least significant
//! word first:
//!
//! | unknown | value | bit |
//! |---------|-------|-----|
//! | 0       | 0     | `0` |
//! | 0       | 1     | `1` |
//! | 1       | 0     | `x` |
//! | 1       | 1     | `z` |
//!
//! The planes live in the arena so that [`Token`](crate::Token) stays
//! `Copy`. A literal without x/z digits has an empty `unknown` plane.
//! [`LiteralBits`] is the growable builder the lexer fills while scanning
//! digits.

use std::fmt;

use bumpalo::Bump;
use smallvec::SmallVec;

/// Widest vector a literal may declare (`2^24 - 1` bits).
pub const MAX_LITERAL_WIDTH: u32 = (1 << 24) - 1;

/// One four-state bit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Logic {
    Zero,
    One,
    X,
    Z,
}

impl Logic {
    /// Parse a single digit character (`0 1 x X z Z ?`).
    pub fn from_char(c: u8) -> Option<Self> {
        match c {
            b'0' => Some(Logic::Zero),
            b'1' => Some(Logic::One),
            b'x' | b'X' => Some(Logic::X),
            b'z' | b'Z' | b'?' => Some(Logic::Z),
            _ => None,
        }
    }

    /// Lowercase digit character.
    pub fn to_char(self) -> char {
        match self {
            Logic::Zero => '0',
            Logic::One => '1',
            Logic::X => 'x',
            Logic::Z => 'z',
        }
    }

    /// Check if the bit is `x` or `z`.
    pub fn is_unknown(self) -> bool {
        matches!(self, Logic::X | Logic::Z)
    }

    fn planes(self) -> (bool, bool) {
        match self {
            Logic::Zero => (false, false),
            Logic::One => (true, false),
            Logic::X => (false, true),
            Logic::Z => (true, true),
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Four-state integer value of a literal token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct LogicVector<'a> {
    width: u32,
    signed: bool,
    value: &'a [u64],
    unknown: &'a [u64],
}

impl<'a> LogicVector<'a> {
    /// Width in bits. Always at least 1.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Whether the literal is signed (`'s` marker or plain decimal).
    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// The value plane, least significant word first. Words above the
    /// highest `1` are not stored.
    pub fn value_words(&self) -> &'a [u64] {
        self.value
    }

    /// Check if any bit is `x` or `z`.
    pub fn has_unknown(&self) -> bool {
        !self.unknown.is_empty()
    }

    /// The bit at `index`; bits at or above the width read as `0`.
    pub fn bit(&self, index: u32) -> Logic {
        if index >= self.width {
            return Logic::Zero;
        }
        let word = (index / 64) as usize;
        let mask = 1u64 << (index % 64);
        let v = self.value.get(word).is_some_and(|w| w & mask != 0);
        let u = self.unknown.get(word).is_some_and(|w| w & mask != 0);
        match (u, v) {
            (false, false) => Logic::Zero,
            (false, true) => Logic::One,
            (true, false) => Logic::X,
            (true, true) => Logic::Z,
        }
    }

    /// The value as `u64`, if every bit is known and it fits.
    pub fn to_u64(&self) -> Option<u64> {
        if self.has_unknown() || self.value.iter().skip(1).any(|&w| w != 0) {
            return None;
        }
        Some(self.value.first().copied().unwrap_or(0))
    }
}

impl fmt::Display for LogicVector<'_> {
    /// Verilog notation: hex when fully known, binary otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.signed { "s" } else { "" };
        if self.has_unknown() {
            write!(f, "{}'{sign}b", self.width)?;
            for i in (0..self.width).rev() {
                write!(f, "{}", self.bit(i))?;
            }
            return Ok(());
        }
        write!(f, "{}'{sign}h", self.width)?;
        let top = self.value.iter().rposition(|&w| w != 0).unwrap_or(0);
        write!(f, "{:x}", self.value.get(top).copied().unwrap_or(0))?;
        for word in self.value[..top].iter().rev() {
            write!(f, "{word:016x}")?;
        }
        Ok(())
    }
}

/// Growable two-plane bit builder.
///
/// Bits beyond the stored words are `0`. [`finish`](Self::finish) drops
/// trailing zero words, so a wide literal of zeros stays small.
#[derive(Clone, Debug, Default)]
pub(crate) struct LiteralBits {
    value: SmallVec<[u64; 1]>,
    unknown: SmallVec<[u64; 1]>,
}

impl LiteralBits {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn ensure_words(&mut self, words: usize) {
        if self.value.len() < words {
            self.value.resize(words, 0);
            self.unknown.resize(words, 0);
        }
    }

    /// Set bit `index` to `logic`.
    pub(crate) fn set(&mut self, index: u32, logic: Logic) {
        let word = (index / 64) as usize;
        let mask = 1u64 << (index % 64);
        let (v, u) = logic.planes();
        if !v && !u && word >= self.value.len() {
            return;
        }
        self.ensure_words(word + 1);
        if v {
            self.value[word] |= mask;
        } else {
            self.value[word] &= !mask;
        }
        if u {
            self.unknown[word] |= mask;
        } else {
            self.unknown[word] &= !mask;
        }
    }

    /// Set bits `[from, to)` to `logic`.
    pub(crate) fn fill(&mut self, from: u32, to: u32, logic: Logic) {
        for index in from..to {
            self.set(index, logic);
        }
    }

    /// Store a base-2/8/16 digit at digit position `index` (0 = rightmost).
    pub(crate) fn set_digit(&mut self, index: u32, bits_per_digit: u32, digit: Digit) {
        let base = index * bits_per_digit;
        for k in 0..bits_per_digit {
            let logic = match digit {
                Digit::Value(d) if (d >> k) & 1 == 1 => Logic::One,
                Digit::Value(_) => Logic::Zero,
                Digit::X => Logic::X,
                Digit::Z => Logic::Z,
            };
            self.set(base + k, logic);
        }
    }

    /// `self = self * mul + add` on the value plane.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "splitting a u128 product into its low word and carry"
    )]
    fn mul_add(&mut self, mul: u64, add: u64) {
        let mut carry = u128::from(add);
        for word in &mut self.value {
            let product = u128::from(*word) * u128::from(mul) + carry;
            *word = product as u64;
            carry = product >> 64;
        }
        if carry != 0 {
            self.value.push(carry as u64);
            self.unknown.push(0);
        }
    }

    /// Accumulate decimal digit values (`0..=9`), most significant first,
    /// keeping only the low `limit` bits. Returns `true` if a set bit was
    /// dropped.
    ///
    /// Digits are folded in 19 at a time (`10^19 < 2^64`) and the planes
    /// never grow past `limit`, so a long run costs one pass per chunk over
    /// at most `limit / 64` words.
    pub(crate) fn push_decimal(
        &mut self,
        digits: impl IntoIterator<Item = u8>,
        limit: u32,
    ) -> bool {
        const CHUNK_DIGITS: u32 = 19;
        let mut overflow = false;
        let mut chunk = 0u64;
        let mut len = 0;
        for digit in digits {
            debug_assert!(digit < 10, "decimal digit out of range");
            chunk = chunk * 10 + u64::from(digit);
            len += 1;
            if len == CHUNK_DIGITS {
                self.mul_add(10u64.pow(len), chunk);
                overflow |= self.truncate(limit);
                chunk = 0;
                len = 0;
            }
        }
        if len > 0 {
            self.mul_add(10u64.pow(len), chunk);
            overflow |= self.truncate(limit);
        }
        overflow
    }

    /// Number of bits up to and including the highest `1`, `x` or `z`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "word count is bounded by MAX_LITERAL_WIDTH / 64 plus digit count"
    )]
    pub(crate) fn significant_bits(&self) -> u32 {
        let top = self
            .value
            .iter()
            .zip(&self.unknown)
            .rposition(|(v, u)| v | u != 0);
        match top {
            Some(word) => {
                let bits = self.value[word] | self.unknown[word];
                word as u32 * 64 + (64 - bits.leading_zeros())
            }
            None => 0,
        }
    }

    /// Drop every bit at or above `width`. Returns `true` if a set bit
    /// (`1`, `x` or `z`) was dropped.
    pub(crate) fn truncate(&mut self, width: u32) -> bool {
        let overflow = self.significant_bits() > width;
        if overflow {
            let words = width.div_ceil(64) as usize;
            self.value.truncate(words);
            self.unknown.truncate(words);
            let rem = width % 64;
            if rem != 0 {
                let mask = (1u64 << rem) - 1;
                if let Some(w) = self.value.last_mut() {
                    *w &= mask;
                }
                if let Some(w) = self.unknown.last_mut() {
                    *w &= mask;
                }
            }
        }
        overflow
    }

    /// Copy the planes into the arena as a vector of `width` bits.
    ///
    /// Bits above `width` must already be clear (see
    /// [`truncate`](Self::truncate)). Only words up to the highest non-zero
    /// one are copied.
    pub(crate) fn finish(self, arena: &Bump, width: u32, signed: bool) -> LogicVector<'_> {
        debug_assert!(width >= 1, "literal width must be positive");
        debug_assert!(self.significant_bits() <= width, "bits above width");
        let value = arena.alloc_slice_copy(significant_words(&self.value));
        let unknown = arena.alloc_slice_copy(significant_words(&self.unknown));
        LogicVector {
            width,
            signed,
            value,
            unknown,
        }
    }
}

/// `words` without its trailing zero words.
fn significant_words(words: &[u64]) -> &[u64] {
    let len = words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
    &words[..len]
}

/// A scanned vector digit.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Digit {
    Value(u8),
    X,
    Z,
}

impl Digit {
    pub(crate) fn logic(self) -> Option<Logic> {
        match self {
            Digit::Value(_) => None,
            Digit::X => Some(Logic::X),
            Digit::Z => Some(Logic::Z),
        }
    }
}

#[cfg(test)]
mod tests;
