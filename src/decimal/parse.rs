// ============================================================================
// Dec128 Parsing
// ============================================================================
//
// Grammar: [+-]? digit+ ( '.' digit+ )?
// The empty string is zero. At most 19 fractional digits are accepted.

use super::Dec128;
use crate::config::MAX_PRECISION;
use crate::numeric::{NumericError, NumericResult, POW10_U64};
use crate::uint128::Uint128;
use std::str::FromStr;

const NULL: &[u8] = b"null";

impl Dec128 {
    /// Parse ASCII text, returning a sentinel on malformed input.
    ///
    /// - `InvalidFormat` for anything outside the grammar (including a lone
    ///   sign and a point without digits on both sides)
    /// - `PrecisionOutOfRange` for more than 19 fractional digits
    /// - `Overflow` when the coefficient does not fit 128 bits
    pub fn parse_bytes(s: &[u8]) -> Self {
        match parse(s) {
            Ok(value) => value,
            Err(reason) => Self::nan(reason),
        }
    }

    /// Decode a JSON value: a quoted or bare number, `null`, or empty input.
    ///
    /// `null` and empty input decode to zero.
    ///
    /// # Errors
    /// Returns the parse failure reason for malformed input.
    pub fn parse_json(data: &[u8]) -> NumericResult<Self> {
        let inner = match data {
            [b'"', inner @ .., b'"'] => inner,
            _ => data,
        };
        if inner.is_empty() || inner == NULL {
            return Ok(Self::ZERO);
        }
        parse(inner)
    }
}

fn parse(s: &[u8]) -> NumericResult<Dec128> {
    if s.is_empty() {
        return Ok(Dec128::ZERO);
    }

    let (neg, body) = match s {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        _ => (false, s),
    };

    let (int_part, frac_part) = match body.iter().position(|&b| b == b'.') {
        Some(dot) => (&body[..dot], &body[dot + 1..]),
        None => (body, &[][..]),
    };
    let has_point = int_part.len() != body.len();

    if int_part.is_empty() || (has_point && frac_part.is_empty()) {
        return Err(NumericError::InvalidFormat);
    }
    if !frac_part.iter().all(u8::is_ascii_digit) {
        return Err(NumericError::InvalidFormat);
    }
    if frac_part.len() > MAX_PRECISION as usize {
        // Validate the integer digits first so garbage still reads as garbage
        Uint128::parse_digits(int_part)?;
        return Err(NumericError::PrecisionOutOfRange);
    }

    let prec = frac_part.len();
    let mut coef = Uint128::parse_digits(int_part)?;
    if prec > 0 {
        let frac = Uint128::parse_digits(frac_part)?;
        coef = coef.checked_mul_u64(POW10_U64[prec])?.checked_add(frac)?;
    }

    if coef.is_zero() {
        return Ok(Dec128::raw(Uint128::ZERO, prec as u8, false));
    }
    Ok(Dec128::raw(coef, prec as u8, neg))
}

impl FromStr for Dec128 {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "-0.0010" -> -0.0010 (exponent 4)
    /// - "" -> 0
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s.as_bytes())
    }
}
