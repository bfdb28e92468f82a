// ============================================================================
// Dec128 Conversions
// Integers, encoded coefficients, f64 and rust_decimal (for API boundaries)
// ============================================================================

use super::Dec128;
use crate::config::MAX_PRECISION;
use crate::numeric::{NumericError, NumericResult};
use crate::uint128::Uint128;
use rust_decimal::Decimal;

/// Largest mantissa a `rust_decimal::Decimal` can hold (2^96 - 1).
const DECIMAL_MAX_MANTISSA: u128 = (1 << 96) - 1;

// ============================================================================
// Integers
// ============================================================================

impl From<i64> for Dec128 {
    #[inline]
    fn from(value: i64) -> Self {
        Self::new(Uint128::from_u64(value.unsigned_abs()), 0, value < 0)
    }
}

impl From<i32> for Dec128 {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<u64> for Dec128 {
    #[inline]
    fn from(value: u64) -> Self {
        Self::new(Uint128::from_u64(value), 0, false)
    }
}

impl From<u32> for Dec128 {
    #[inline]
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl Dec128 {
    /// Non-negative value `coef × 10^(-exp)`.
    #[inline]
    pub fn from_uint128(coef: Uint128, exp: u8) -> Self {
        Self::new(coef, exp, false)
    }

    /// Non-negative value `coef × 10^(-exp)` from a single word.
    #[inline]
    pub fn from_u64_scaled(coef: u64, exp: u8) -> Self {
        Self::new(Uint128::from_u64(coef), exp, false)
    }

    /// Integer part, truncated toward zero.
    ///
    /// # Errors
    /// - the sentinel's reason
    /// - `Overflow` if the integer part does not fit an `i64`
    pub fn to_i64(self) -> NumericResult<i64> {
        let t = self.rescale(0).into_result()?;
        if t.coef.hi != 0 || t.coef.lo > i64::MAX as u64 {
            return Err(NumericError::Overflow);
        }
        let magnitude = t.coef.lo as i64;
        Ok(if t.neg { -magnitude } else { magnitude })
    }

    /// Coefficient at exponent `exp` as a single word.
    ///
    /// Rescaling truncates when `exp` is below the current exponent.
    ///
    /// # Errors
    /// - `Negative` for negative values
    /// - `Overflow` if the coefficient does not fit 64 bits
    pub fn encode_u64(self, exp: u8) -> NumericResult<u64> {
        self.encode_uint128(exp)?.to_u64()
    }

    /// Coefficient at exponent `exp`.
    ///
    /// # Errors
    /// - `Negative` for negative values
    /// - `Overflow` if scaling up does not fit 128 bits
    pub fn encode_uint128(self, exp: u8) -> NumericResult<Uint128> {
        let value = self.into_result()?;
        if value.is_negative() {
            return Err(NumericError::Negative);
        }
        Ok(value.rescale(exp).into_result()?.coef)
    }

    // ========================================================================
    // Floating Point
    // ========================================================================

    /// Convert from `f64` through its shortest round-trip decimal text.
    ///
    /// NaN and infinities give a `NotANumber` sentinel; values needing more
    /// than 19 fractional digits give `PrecisionOutOfRange`.
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self::nan(NumericError::NotANumber);
        }
        Self::parse_bytes(value.to_string().as_bytes())
    }

    /// Nearest `f64`. Precision beyond what `f64` carries is lost.
    ///
    /// # Errors
    /// Returns the sentinel's reason.
    pub fn to_f64_inexact(self) -> NumericResult<f64> {
        let value = self.into_result()?;
        value
            .format_trimmed()
            .parse::<f64>()
            .map_err(|_| NumericError::InvalidFormat)
    }

    // ========================================================================
    // rust_decimal
    // ========================================================================

    /// Convert from `rust_decimal::Decimal`.
    ///
    /// Scales above 19 are first normalized; if trailing zeros do not make
    /// enough room the result is a `PrecisionOutOfRange` sentinel.
    pub fn from_decimal(d: Decimal) -> Self {
        let d = if d.scale() > MAX_PRECISION as u32 {
            d.normalize()
        } else {
            d
        };
        if d.scale() > MAX_PRECISION as u32 {
            return Self::nan(NumericError::PrecisionOutOfRange);
        }

        let coef = Uint128::from_u128(d.mantissa().unsigned_abs());
        Self::new(coef, d.scale() as u8, d.is_sign_negative())
    }

    /// Convert to `rust_decimal::Decimal`, keeping the exponent when possible.
    ///
    /// # Errors
    /// - the sentinel's reason
    /// - `Overflow` if even the canonical coefficient exceeds 96 bits
    pub fn to_decimal(self) -> NumericResult<Decimal> {
        let value = self.into_result()?;
        let value = if value.coef.as_u128() > DECIMAL_MAX_MANTISSA {
            value.canonical()
        } else {
            value
        };

        let magnitude = value.coef.as_u128();
        if magnitude > DECIMAL_MAX_MANTISSA {
            return Err(NumericError::Overflow);
        }
        let mantissa = if value.is_negative() {
            -(magnitude as i128)
        } else {
            magnitude as i128
        };
        Decimal::try_from_i128_with_scale(mantissa, value.exp as u32)
            .map_err(|_| NumericError::Overflow)
    }
}

impl TryFrom<Dec128> for i64 {
    type Error = NumericError;

    #[inline]
    fn try_from(value: Dec128) -> Result<Self, Self::Error> {
        value.to_i64()
    }
}

impl From<Decimal> for Dec128 {
    #[inline]
    fn from(d: Decimal) -> Self {
        Self::from_decimal(d)
    }
}

impl TryFrom<Dec128> for Decimal {
    type Error = NumericError;

    #[inline]
    fn try_from(value: Dec128) -> Result<Self, Self::Error> {
        value.to_decimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Dec128 {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_integers() {
        assert_eq!(Dec128::from(-42i64).to_string(), "-42");
        assert_eq!(Dec128::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(Dec128::from(7i32), Dec128::from(7u32));
        assert_eq!(Dec128::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Dec128::from(0i64).exponent(), 0);
    }

    #[test]
    fn test_scaled_constructors() {
        assert_eq!(Dec128::from_u64_scaled(12345, 3).to_string(), "12.345");
        assert_eq!(
            Dec128::from_uint128(Uint128::new(0, 1), 19).to_string(),
            "1.8446744073709551616"
        );
        assert_eq!(
            Dec128::from_u64_scaled(1, 20).error(),
            Some(NumericError::PrecisionOutOfRange)
        );
    }

    #[test]
    fn test_to_i64() {
        assert_eq!(d("123.999").to_i64(), Ok(123));
        assert_eq!(d("-123.999").to_i64(), Ok(-123));
        assert_eq!(i64::try_from(d("9223372036854775807")), Ok(i64::MAX));
        assert_eq!(
            d("9223372036854775808").to_i64(),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            Dec128::nan(NumericError::DivisionByZero).to_i64(),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_encode() {
        assert_eq!(d("1.23").encode_u64(4), Ok(12_300));
        assert_eq!(d("1.2399").encode_u64(2), Ok(123));
        assert_eq!(d("-1.23").encode_u64(2), Err(NumericError::Negative));
        assert_eq!(
            d("18446744073709551616").encode_u64(0),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            d("18446744073709551616").encode_uint128(1),
            Ok(Uint128::new(0, 10))
        );
        assert_eq!(d("0.5").encode_uint128(20), Err(NumericError::PrecisionOutOfRange));
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Dec128::from_f64(1.5).to_string(), "1.5");
        assert_eq!(Dec128::from_f64(-0.1).to_string(), "-0.1");
        assert_eq!(Dec128::from_f64(1e-7).to_string(), "0.0000001");
        assert_eq!(Dec128::from_f64(-0.0), Dec128::ZERO);
        assert_eq!(
            Dec128::from_f64(f64::NAN).error(),
            Some(NumericError::NotANumber)
        );
        assert_eq!(
            Dec128::from_f64(f64::INFINITY).error(),
            Some(NumericError::NotANumber)
        );
        assert_eq!(
            Dec128::from_f64(1e-25).error(),
            Some(NumericError::PrecisionOutOfRange)
        );
    }

    #[test]
    fn test_to_f64_inexact() {
        assert_eq!(d("1.25").to_f64_inexact(), Ok(1.25));
        assert_eq!(d("-0.1").to_f64_inexact(), Ok(-0.1));
        assert!(Dec128::nan(NumericError::Overflow).to_f64_inexact().is_err());
    }

    #[test]
    fn test_from_decimal() {
        let x = Dec128::from_decimal(Decimal::new(12345, 2));
        assert_eq!(x.to_string(), "123.45");
        assert_eq!(x.exponent(), 2);

        let neg = Dec128::from(Decimal::new(-5, 1));
        assert_eq!(neg.to_string(), "-0.5");

        // Scale 25 with trailing zeros normalizes into range
        let padded = Decimal::from_i128_with_scale(15_000_000, 25);
        assert_eq!(Dec128::from_decimal(padded).to_string(), "0.0000000000000000015");

        let too_fine = Decimal::from_i128_with_scale(1, 25);
        assert_eq!(
            Dec128::from_decimal(too_fine).error(),
            Some(NumericError::PrecisionOutOfRange)
        );
    }

    #[test]
    fn test_to_decimal() {
        let x = d("-123.4500");
        let dec = x.to_decimal().unwrap();
        assert_eq!(dec.to_string(), "-123.4500");
        assert_eq!(Decimal::try_from(d("0.001")), Decimal::from_str("0.001").map_err(|_| NumericError::InvalidFormat));

        // 10^30 at exponent 0 exceeds the 96-bit mantissa
        assert_eq!(
            d("1000000000000000000000000000000").to_decimal(),
            Err(NumericError::Overflow)
        );
        // but 10^29 at exponent 19 canonicalizes to 10^10
        let wide = d("10000000000.0000000000000000000");
        assert_eq!(wide.to_decimal().map(|x| x.to_string()), Ok("10000000000".to_string()));
    }
}
