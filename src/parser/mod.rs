//! Strict decimal text to `i32` parser.
//!
//! Accepts an optional single leading minus sign followed by one or more
//! ASCII digits, surrounded by optional whitespace. Leading zeros are not
//! significant and may be arbitrarily many.

use crate::common::ParseError;
use std::borrow::Cow;
use tracing::trace;

/// Largest digit count that can still fit in an `i32`, sign excluded.
const MAX_DIGITS: usize = 10;

/// Parse a token into a 32-bit signed integer.
pub fn parse_integer(text: &str) -> Result<i32, ParseError> {
    let trimmed = text.trim();

    if !is_signed_digit_run(trimmed) {
        trace!(token = %trimmed, "rejected: non-numeric character");
        return Err(ParseError::InvalidCharacter);
    }

    // Must run before the length check so padded values are not rejected
    let normalized = strip_leading_zeros(trimmed);
    let digits = normalized.strip_prefix('-').unwrap_or(&normalized);

    if digits.len() > MAX_DIGITS {
        trace!(token = %trimmed, digits = digits.len(), "rejected: too many digits");
        return Err(ParseError::RangeOverflow);
    }

    let wide: i64 = normalized
        .parse()
        .map_err(|_| ParseError::RangeOverflow)?;

    i32::try_from(wide).map_err(|_| {
        trace!(value = wide, "rejected: outside 32-bit range");
        ParseError::RangeOverflow
    })
}

/// Remove zeros preceding the first significant digit, keeping the sign.
///
/// A run made only of zeros collapses to `"0"` and loses its sign, so there
/// is no negative zero. Input that is not a signed digit run is returned as-is.
pub fn strip_leading_zeros(text: &str) -> Cow<'_, str> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    if digits.is_empty() || !digits.starts_with('0') {
        return Cow::Borrowed(text);
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        Cow::Borrowed("0")
    } else if negative {
        Cow::Owned(format!("-{}", significant))
    } else {
        Cow::Borrowed(significant)
    }
}

fn is_signed_digit_run(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
