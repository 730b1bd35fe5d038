use pretty_assertions::assert_eq;
use smallvec::SmallVec;
use sv_diagnostic::DiagCode;

use super::*;

fn decode(content: &str) -> (Option<Vec<u8>>, Vec<EscapeError>) {
    let mut errors = SmallVec::new();
    let out = unescape_string(content.as_bytes(), &mut errors);
    (out, errors.into_vec())
}

fn decoded(content: &str) -> Vec<u8> {
    match decode(content) {
        (Some(bytes), errors) => {
            assert!(errors.is_empty(), "unexpected errors: {errors:?}");
            bytes
        }
        (None, _) => content.as_bytes().to_vec(),
    }
}

// === Fast Path ===

#[test]
fn no_backslash_is_none() {
    assert_eq!(decode("plain text"), (None, vec![]));
}

// === Simple Escapes ===

#[test]
fn tab_escape() {
    assert_eq!(decoded("a\\tb"), b"a\tb");
}

#[test]
fn all_simple_escapes() {
    assert_eq!(
        decoded("\\n\\t\\\\\\\"\\v\\f\\a"),
        vec![b'\n', b'\t', b'\\', b'"', 0x0B, 0x0C, 0x07]
    );
}

#[test]
fn line_continuation_decodes_to_nothing() {
    assert_eq!(decoded("ab\\\ncd"), b"abcd");
    assert_eq!(decoded("ab\\\r\ncd"), b"abcd");
    assert_eq!(decoded("ab\\\rcd"), b"abcd");
}

// === Octal ===

#[test]
fn octal_escapes() {
    assert_eq!(decoded("\\101"), b"A");
    assert_eq!(decoded("\\0"), vec![0]);
    assert_eq!(decoded("\\12x"), b"\nx");
    // At most three digits.
    assert_eq!(decoded("\\1011"), b"A1");
}

#[test]
fn octal_too_big_keeps_low_bits() {
    let (out, errors) = decode("a\\777");
    assert_eq!(out, Some(vec![b'a', 0xFF]));
    assert_eq!(errors, vec![(DiagCode::OctalEscapeCodeTooBig, 1)]);

    let (out, _) = decode("\\400");
    assert_eq!(out, Some(vec![0]));
}

// === Hex ===

#[test]
fn hex_escapes() {
    assert_eq!(decoded("\\x41"), b"A");
    assert_eq!(decoded("\\xa"), b"\n");
    assert_eq!(decoded("\\x414"), b"A4");
}

#[test]
fn hex_without_digits_is_verbatim() {
    let (out, errors) = decode("\\xg");
    assert_eq!(out, Some(b"\\xg".to_vec()));
    assert_eq!(errors, vec![(DiagCode::InvalidHexEscapeCode, 0)]);
}

// === Unknown ===

#[test]
fn unknown_escape_is_verbatim() {
    let (out, errors) = decode("x\\q");
    assert_eq!(out, Some(b"x\\q".to_vec()));
    assert_eq!(errors, vec![(DiagCode::UnknownEscapeCode, 1)]);
}

#[test]
fn unknown_multibyte_escape_keeps_whole_char() {
    let (out, errors) = decode("\\\u{e9}z");
    assert_eq!(out, Some("\\\u{e9}z".as_bytes().to_vec()));
    assert_eq!(errors.len(), 1);
}
