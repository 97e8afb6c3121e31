//! Stored value parsing utilities
//!
//! Provides error-safe parsing of persisted and displayed counter text.

use rusqlite::Error as SqlError;

/// Parse a decimal integer leniently.
///
/// Surrounding whitespace is ignored, an optional sign is accepted and the
/// leading run of digits is used; anything after it is ignored. Text with no
/// leading digits (or an overflowing value) yields `None`.
pub fn parse_count(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Parse a counter that must be non-negative and fit a `u32`
pub fn parse_non_negative(raw: &str) -> Option<u32> {
    parse_count(raw).and_then(|v| u32::try_from(v).ok())
}

/// Extension trait for converting rusqlite Results to Option
pub trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>, SqlError>;
}

impl<T> OptionalExt<T> for Result<T, SqlError> {
    fn optional(self) -> Result<Option<T>, SqlError> {
        match self {
            Ok(v) => Ok(Some(v)),
            Err(SqlError::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
