use bumpalo::Bump;
use pretty_assertions::assert_eq;

use super::*;

fn bits_from_digits(digits: &[Digit], bits_per_digit: u32) -> LiteralBits {
    let mut bits = LiteralBits::new();
    for (i, &d) in digits.iter().rev().enumerate() {
        bits.set_digit(u32::try_from(i).unwrap_or(u32::MAX), bits_per_digit, d);
    }
    bits
}

// === Logic ===

#[test]
fn logic_chars() {
    assert_eq!(Logic::from_char(b'?'), Some(Logic::Z));
    assert_eq!(Logic::from_char(b'X'), Some(Logic::X));
    assert_eq!(Logic::from_char(b'2'), None);
    assert_eq!(Logic::Z.to_string(), "z");
    assert!(Logic::X.is_unknown());
    assert!(!Logic::One.is_unknown());
}

// === Builder ===

#[test]
fn hex_digits_fill_nibbles() {
    let arena = Bump::new();
    let bits = bits_from_digits(&[Digit::Value(0xF), Digit::Value(0xF)], 4);
    assert_eq!(bits.significant_bits(), 8);
    let v = bits.finish(&arena, 8, false);
    assert_eq!(v.to_u64(), Some(255));
    assert!(!v.has_unknown());
}

#[test]
fn unknown_digits_use_both_planes() {
    let arena = Bump::new();
    let bits = bits_from_digits(&[Digit::Value(1), Digit::Value(0), Digit::X], 1);
    let v = bits.finish(&arena, 3, false);
    assert_eq!(v.bit(0), Logic::X);
    assert_eq!(v.bit(1), Logic::Zero);
    assert_eq!(v.bit(2), Logic::One);
    assert_eq!(v.bit(3), Logic::Zero);
    assert!(v.has_unknown());
    assert_eq!(v.to_u64(), None);
}

#[test]
fn z_digit_sets_value_and_unknown() {
    let arena = Bump::new();
    let bits = bits_from_digits(&[Digit::Z], 4);
    let v = bits.finish(&arena, 4, false);
    for i in 0..4 {
        assert_eq!(v.bit(i), Logic::Z);
    }
}

#[test]
fn decimal_mul_add_crosses_words() {
    let arena = Bump::new();
    let mut bits = LiteralBits::new();
    // 2^64 = 18446744073709551616
    for d in "18446744073709551616".bytes() {
        bits.mul_add(10, u64::from(d - b'0'));
    }
    assert_eq!(bits.significant_bits(), 65);
    let v = bits.finish(&arena, 65, true);
    assert_eq!(v.value_words(), &[0, 1]);
    assert_eq!(v.to_u64(), None);
    assert!(v.is_signed());
}

#[test]
fn push_decimal_matches_digit_by_digit() {
    let arena = Bump::new();
    // 40 digits: two full chunks and a short tail.
    let digits: Vec<u8> = "1234567890123456789012345678901234567890"
        .bytes()
        .map(|d| d - b'0')
        .collect();
    let mut chunked = LiteralBits::new();
    assert!(!chunked.push_decimal(digits.iter().copied(), 256));
    let mut stepwise = LiteralBits::new();
    for &d in &digits {
        stepwise.mul_add(10, u64::from(d));
    }
    assert_eq!(chunked.significant_bits(), 130);
    assert_eq!(
        chunked.finish(&arena, 256, false),
        stepwise.finish(&arena, 256, false)
    );
}

#[test]
fn push_decimal_keeps_low_bits() {
    let arena = Bump::new();
    let mut bits = LiteralBits::new();
    let nines = std::iter::repeat(9).take(20_000);
    assert!(bits.push_decimal(nines, 8));
    assert_eq!(bits.significant_bits(), 8);
    // 10^20000 - 1 is odd and 10^20000 is a multiple of 256.
    assert_eq!(bits.finish(&arena, 8, false).to_u64(), Some(0xFF));
}

#[test]
fn push_decimal_exact_fit_is_not_overflow() {
    let mut bits = LiteralBits::new();
    assert!(!bits.push_decimal([2, 5, 5], 8));
    assert!(bits.push_decimal([0], 8));
}

#[test]
fn finish_stores_no_zero_words() {
    let arena = Bump::new();
    let v = LiteralBits::new().finish(&arena, MAX_LITERAL_WIDTH, false);
    assert_eq!(v.width(), MAX_LITERAL_WIDTH);
    assert!(v.value_words().is_empty());
    assert_eq!(v.to_u64(), Some(0));
    assert_eq!(v.bit(MAX_LITERAL_WIDTH - 1), Logic::Zero);
    assert!(arena.allocated_bytes() < 4096);
}

#[test]
fn truncate_reports_dropped_bits() {
    let mut bits = bits_from_digits(&[Digit::Value(1), Digit::Value(0xF)], 4);
    assert!(bits.truncate(4));
    assert_eq!(bits.significant_bits(), 4);

    let mut bits = bits_from_digits(&[Digit::Value(0), Digit::Value(0xF)], 4);
    assert!(!bits.truncate(4));
}

#[test]
fn truncate_sees_unknown_bits() {
    let mut bits = bits_from_digits(&[Digit::X, Digit::Value(0)], 4);
    assert!(bits.truncate(4));
}

#[test]
fn fill_extends_state() {
    let arena = Bump::new();
    let mut bits = bits_from_digits(&[Digit::X], 1);
    bits.fill(1, 70, Logic::X);
    assert_eq!(bits.significant_bits(), 70);
    let v = bits.finish(&arena, 70, false);
    assert_eq!(v.bit(69), Logic::X);
    assert!(v.has_unknown());
    assert!(v.value_words().is_empty());
}

#[test]
fn zero_value_has_no_significant_bits() {
    let bits = LiteralBits::new();
    assert_eq!(bits.significant_bits(), 0);
}

// === Display ===

#[test]
fn display_known_as_hex() {
    let arena = Bump::new();
    let bits = bits_from_digits(&[Digit::Value(0xA), Digit::Value(5)], 4);
    assert_eq!(bits.finish(&arena, 8, false).to_string(), "8'ha5");
}

#[test]
fn display_unknown_as_binary() {
    let arena = Bump::new();
    let bits = bits_from_digits(&[Digit::Value(1), Digit::Value(0), Digit::Z], 1);
    assert_eq!(bits.finish(&arena, 4, true).to_string(), "4'sb010z");
}

#[test]
fn display_multi_word_pads_lower_words() {
    let arena = Bump::new();
    let mut bits = LiteralBits::new();
    bits.set(64, Logic::One);
    bits.set(0, Logic::One);
    assert_eq!(
        bits.finish(&arena, 65, false).to_string(),
        "65'h10000000000000001"
    );
}
