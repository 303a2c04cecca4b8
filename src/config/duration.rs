//! Duration strings such as `"1m"`, `"90s"`, `"1h30m"` or `"1.5h"`.
//!
//! A duration is a sequence of decimal numbers, each with an optional
//! fraction and a mandatory unit: `ns`, `us` (`µs`), `ms`, `s`, `m`, `h`.
//! The bare string `"0"` is the only value allowed without a unit. A leading
//! `-` is accepted; since [`Duration`] cannot be negative, negative values
//! clamp to zero.

use std::time::Duration;

use thiserror::Error;

/// Largest representable duration, in nanoseconds.
const MAX_NANOS: u128 = i64::MAX as u128;

/// Why a duration string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,

    #[error("invalid number in duration")]
    InvalidNumber,

    #[error("missing unit in duration")]
    MissingUnit,

    #[error("unknown unit {0:?} in duration")]
    UnknownUnit(String),

    #[error("duration out of range")]
    Overflow,
}

fn unit_nanos(unit: &str) -> Option<u128> {
    let nanos = match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => 1_000,
        "ms" => 1_000_000,
        "s" => 1_000_000_000,
        "m" => 60 * 1_000_000_000,
        "h" => 3_600 * 1_000_000_000,
        _ => return None,
    };
    Some(nanos)
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Parse a duration string.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let (negative, body) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        Some(_) => (false, input),
        None => return Err(DurationError::Empty),
    };

    if body == "0" {
        return Ok(Duration::ZERO);
    }
    if body.is_empty() {
        return Err(DurationError::InvalidNumber);
    }

    let mut total: u128 = 0;
    let mut rest = body;
    while !rest.is_empty() {
        let number_end = rest.find(|c| !is_number_char(c)).unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_end);
        let (whole, fraction) = split_number(number)?;

        let unit_end = tail.find(is_number_char).unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_end);
        if unit.is_empty() {
            return Err(DurationError::MissingUnit);
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit(unit.to_string()))?;

        total = total
            .checked_add(component_nanos(whole, fraction, scale)?)
            .ok_or(DurationError::Overflow)?;
        rest = tail;
    }

    // The negative range reaches one nanosecond further, as with i64.
    let limit = if negative { MAX_NANOS + 1 } else { MAX_NANOS };
    if total > limit {
        return Err(DurationError::Overflow);
    }
    if negative {
        return Ok(Duration::ZERO);
    }

    Ok(Duration::from_nanos(total as u64))
}

/// Split `12.5` into `("12", "5")`, rejecting empty or doubly-dotted numbers.
fn split_number(number: &str) -> Result<(&str, &str), DurationError> {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if (whole.is_empty() && fraction.is_empty()) || fraction.contains('.') {
        return Err(DurationError::InvalidNumber);
    }
    Ok((whole, fraction))
}

/// Nanoseconds for one `<whole>.<fraction><unit>` component.
fn component_nanos(whole: &str, fraction: &str, scale: u128) -> Result<u128, DurationError> {
    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| DurationError::Overflow)?
    };
    let mut nanos = whole.checked_mul(scale).ok_or(DurationError::Overflow)?;

    // Digits past nanosecond precision do not change the result.
    let mut numerator: u128 = 0;
    let mut denominator: u128 = 1;
    for digit in fraction.bytes().take(18) {
        numerator = numerator * 10 + u128::from(digit - b'0');
        denominator *= 10;
    }
    nanos += numerator * scale / denominator;

    Ok(nanos)
}
