//! Escape decoding for string literal content.
//!
//! Valid escapes: `\n` `\t` `\\` `\"` `\v` `\f` `\a`, an octal code of one
//! to three digits, `\x` with one or two hex digits, and a backslash before
//! a line break (line continuation, decodes to nothing). Malformed escapes
//! push a diagnostic and keep their text verbatim.

use smallvec::SmallVec;
use sv_diagnostic::DiagCode;

/// A problem found while decoding, at a byte offset into the content.
pub(crate) type EscapeError = (DiagCode, u32);

/// Decode string content (the bytes between the quotes).
///
/// Fast path: if there is no backslash, returns `None` so the caller can
/// use the source bytes directly.
#[allow(
    clippy::cast_possible_truncation,
    reason = "content comes from a buffer whose length fits u32"
)]
pub(crate) fn unescape_string(
    content: &[u8],
    errors: &mut SmallVec<[EscapeError; 2]>,
) -> Option<Vec<u8>> {
    let first = memchr::memchr(b'\\', content)?;

    let mut out = Vec::with_capacity(content.len());
    out.extend_from_slice(&content[..first]);
    let mut i = first;

    while i < content.len() {
        let b = content[i];
        if b != b'\\' {
            out.push(b);
            i += 1;
            continue;
        }

        let esc_start = i as u32;
        let Some(&c) = content.get(i + 1) else {
            // A lone trailing backslash cannot occur in a scanned literal
            // (it would have escaped the closing quote), but keep it.
            out.push(b'\\');
            break;
        };
        i += 2;
        match c {
            b'n' => out.push(b'\n'),
            b't' => out.push(b'\t'),
            b'\\' => out.push(b'\\'),
            b'"' => out.push(b'"'),
            b'v' => out.push(0x0B),
            b'f' => out.push(0x0C),
            b'a' => out.push(0x07),
            b'\n' => {}
            b'\r' => {
                if content.get(i) == Some(&b'\n') {
                    i += 1;
                }
            }
            b'0'..=b'7' => {
                let mut code = u32::from(c - b'0');
                let mut len = 1;
                while len < 3 {
                    match content.get(i) {
                        Some(&d @ b'0'..=b'7') => {
                            code = code * 8 + u32::from(d - b'0');
                            i += 1;
                            len += 1;
                        }
                        _ => break,
                    }
                }
                if code > 255 {
                    errors.push((DiagCode::OctalEscapeCodeTooBig, esc_start));
                }
                out.push((code & 0xFF) as u8);
            }
            b'x' => {
                let mut code = 0u8;
                let mut len = 0;
                while len < 2 {
                    match content.get(i).and_then(|&d| char::from(d).to_digit(16)) {
                        Some(d) => {
                            code = code * 16 + d as u8;
                            i += 1;
                            len += 1;
                        }
                        None => break,
                    }
                }
                if len == 0 {
                    errors.push((DiagCode::InvalidHexEscapeCode, esc_start));
                    out.extend_from_slice(b"\\x");
                } else {
                    out.push(code);
                }
            }
            _ => {
                errors.push((DiagCode::UnknownEscapeCode, esc_start));
                // Keep the whole (possibly multi-byte) escaped character.
                let width = utf8_width(c);
                let end = (i - 1 + width).min(content.len());
                out.push(b'\\');
                out.extend_from_slice(&content[i - 1..end]);
                i = end;
            }
        }
    }

    Some(out)
}

fn utf8_width(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

#[cfg(test)]
mod tests;
