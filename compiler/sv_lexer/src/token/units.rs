//! Time units for time literals.

use std::fmt;

/// Unit suffix of a time literal (`10ns`, `1.5us`).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum TimeUnit {
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
    Picoseconds,
    Femtoseconds,
}

impl TimeUnit {
    /// Parse a unit suffix.
    pub fn from_suffix(text: &[u8]) -> Option<Self> {
        let unit = match text {
            b"s" => TimeUnit::Seconds,
            b"ms" => TimeUnit::Milliseconds,
            b"us" => TimeUnit::Microseconds,
            b"ns" => TimeUnit::Nanoseconds,
            b"ps" => TimeUnit::Picoseconds,
            b"fs" => TimeUnit::Femtoseconds,
            _ => return None,
        };
        Some(unit)
    }

    /// Get the suffix string.
    #[inline]
    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Microseconds => "us",
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Picoseconds => "ps",
            TimeUnit::Femtoseconds => "fs",
        }
    }
}

impl fmt::Debug for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}
