//! Numeric Parsing Helpers
//!
//! Parsing utilities for numeric lexemes with underscore separators.

/// Parse a real literal, allocating only if underscores are present.
///
/// Accepts what the scanner produced (`1.5`, `3e10`, `1_000.0e-3`); the
/// result may be infinite when the literal is out of range.
#[inline]
pub(crate) fn parse_real_skip_underscores(s: &str) -> Option<f64> {
    if s.contains('_') {
        s.replace('_', "").parse().ok()
    } else {
        s.parse().ok()
    }
}

/// Parse a decimal digit run skipping underscores, saturating at `u64::MAX`.
///
/// Used for the width prefix of sized literals, where anything above the
/// maximum width is clamped anyway.
#[inline]
pub(crate) fn parse_decimal_saturating(s: &[u8]) -> u64 {
    s.iter()
        .copied()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_real_skip_underscores() {
        assert_eq!(parse_real_skip_underscores("1.5"), Some(1.5));
        assert_eq!(parse_real_skip_underscores("1_000.25"), Some(1000.25));
        assert_eq!(parse_real_skip_underscores("2e3"), Some(2000.0));
        assert_eq!(parse_real_skip_underscores("1.0E-2"), Some(0.01));
    }

    #[test]
    fn test_parse_real_overflow_is_infinite() {
        let huge = format!("1{}.0", "0".repeat(400));
        assert_eq!(parse_real_skip_underscores(&huge), Some(f64::INFINITY));
        assert_eq!(parse_real_skip_underscores("1e999"), Some(f64::INFINITY));
    }

    #[test]
    fn test_parse_decimal_saturating() {
        assert_eq!(parse_decimal_saturating(b"8"), 8);
        assert_eq!(parse_decimal_saturating(b"1_024"), 1024);
        assert_eq!(parse_decimal_saturating(b"99999999999999999999999"), u64::MAX);
    }
}
