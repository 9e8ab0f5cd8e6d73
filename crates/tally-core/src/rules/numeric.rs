//! Decimal number syntax shared by every arithmetic entry point
//!
//! Accepted: an optional `+`/`-` sign followed by digits containing at most
//! one `.`, with at least one digit overall (`5`, `-2.5`, `+.5`, `7.`).
//! Rejected: exponents, whitespace, separators, `nan`/`inf`, lone signs or dots.

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::errors::{Result, TallyError};

/// Parse a token into an exact decimal value
///
/// # Errors
///
/// Returns `InvalidNumber` carrying the raw token when it does not follow
/// the decimal syntax.
pub fn parse_decimal(token: &str) -> Result<BigDecimal> {
    let invalid = || TallyError::InvalidNumber {
        token: token.to_string(),
    };

    let (negative, unsigned) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (unsigned, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return Err(invalid());
    }

    // Canonical form the decimal library always accepts: no bare dots.
    let mut canonical = String::with_capacity(token.len() + 1);
    if negative {
        canonical.push('-');
    }
    canonical.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        canonical.push('.');
        canonical.push_str(frac_part);
    }

    BigDecimal::from_str(&canonical).map_err(|_| invalid())
}
