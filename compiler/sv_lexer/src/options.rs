//! Lexer configuration.

/// Options controlling a [`Lexer`](crate::Lexer).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexerOptions {
    /// Maximum number of diagnostics issued for one buffer. Later problems
    /// are still recovered from, just not reported. `0` reports nothing.
    pub max_errors: u32,
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions { max_errors: 16 }
    }
}

impl LexerOptions {
    /// Options that never suppress a diagnostic (for testing).
    pub fn unlimited() -> Self {
        LexerOptions {
            max_errors: u32::MAX,
        }
    }

    /// Set the diagnostic limit.
    #[must_use]
    pub fn with_max_errors(mut self, max_errors: u32) -> Self {
        self.max_errors = max_errors;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit_is_sixteen() {
        assert_eq!(LexerOptions::default().max_errors, 16);
    }

    #[test]
    fn builders() {
        assert_eq!(LexerOptions::unlimited().max_errors, u32::MAX);
        assert_eq!(LexerOptions::default().with_max_errors(3).max_errors, 3);
    }
}
