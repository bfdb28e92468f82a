// ============================================================================
// Dec128 Rendering
// Stack-only text forms: trimmed, fixed and JSON
// ============================================================================

use super::Dec128;
use crate::uint128::Uint128;
use arrayvec::ArrayString;
use std::fmt;

/// Rendered form of a sentinel.
pub const NAN_STR: &str = "NaN";

/// Capacity of the JSON form: the text form plus two quotes.
pub const MAX_JSON_LEN: usize = Dec128::MAX_STR_LEN + 2;

impl Dec128 {
    /// Text form without trailing fractional zeros: `"1.5"`, `"-0.001"`, `"0"`.
    pub fn format_trimmed(self) -> ArrayString<{ Dec128::MAX_STR_LEN }> {
        let mut out = ArrayString::new();
        self.write_trimmed(&mut out);
        out
    }

    /// Text form keeping every fractional digit of the exponent: `"1.500"`.
    ///
    /// Zero keeps its padding (`"0.000"` at exponent 3) and drops its sign.
    pub fn format_fixed(self) -> ArrayString<{ Dec128::MAX_STR_LEN }> {
        let mut out = ArrayString::new();
        if self.err.is_some() {
            out.push_str(NAN_STR);
        } else if self.coef.is_zero() {
            out.push('0');
            if self.exp > 0 {
                out.push('.');
                for _ in 0..self.exp {
                    out.push('0');
                }
            }
        } else {
            self.write_number(&mut out);
        }
        out
    }

    /// JSON form: the trimmed text in double quotes, `"\"NaN\""` for sentinels.
    pub fn format_json(self) -> ArrayString<MAX_JSON_LEN> {
        let mut out = ArrayString::new();
        out.push('"');
        self.write_trimmed(&mut out);
        out.push('"');
        out
    }

    fn write_trimmed<const N: usize>(self, out: &mut ArrayString<N>) {
        if self.err.is_some() {
            out.push_str(NAN_STR);
            return;
        }
        if self.coef.is_zero() {
            out.push('0');
            return;
        }

        let start = out.len();
        if !self.write_number(out) {
            return;
        }

        let trimmed = out[start..].trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(start + trimmed);
    }

    /// Appends sign and digits with the point placed per the exponent.
    ///
    /// Returns whether a decimal point was written.
    fn write_number<const N: usize>(self, out: &mut ArrayString<N>) -> bool {
        let mut buf = [0u8; Uint128::MAX_STR_LEN];
        let first = self.coef.write_digits(&mut buf);
        let digits = &buf[first..];

        if self.neg {
            out.push('-');
        }

        let prec = self.exp as usize;
        if prec == 0 {
            push_ascii(out, digits);
            return false;
        }

        let len = digits.len();
        if prec >= len {
            out.push_str("0.");
            for _ in len..prec {
                out.push('0');
            }
            push_ascii(out, digits);
        } else {
            push_ascii(out, &digits[..len - prec]);
            out.push('.');
            push_ascii(out, &digits[len - prec..]);
        }
        true
    }
}

#[inline]
fn push_ascii<const N: usize>(out: &mut ArrayString<N>, digits: &[u8]) {
    for &b in digits {
        out.push(b as char);
    }
}

impl fmt::Display for Dec128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_trimmed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    fn d(s: &str) -> Dec128 {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_trimmed() {
        assert_eq!(d("1.500").format_trimmed().as_str(), "1.5");
        assert_eq!(d("-0.00100").format_trimmed().as_str(), "-0.001");
        assert_eq!(d("1200").format_trimmed().as_str(), "1200");
        assert_eq!(d("1200.00").format_trimmed().as_str(), "1200");
        assert_eq!(d("0.000").format_trimmed().as_str(), "0");
        assert_eq!(d("-0.000").format_trimmed().as_str(), "0");
        assert_eq!(
            Dec128::nan(NumericError::Overflow).format_trimmed().as_str(),
            "NaN"
        );
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(d("1.500").format_fixed().as_str(), "1.500");
        assert_eq!(d("-0.0010").format_fixed().as_str(), "-0.0010");
        assert_eq!(d("0.000").format_fixed().as_str(), "0.000");
        assert_eq!(d("0").format_fixed().as_str(), "0");
        assert_eq!(d("0.1234").format_fixed().as_str(), "0.1234");
        assert_eq!(
            d("0.0000000000000000000").format_fixed().as_str(),
            "0.0000000000000000000"
        );
    }

    #[test]
    fn test_longest_forms_fit() {
        let widest = Dec128::new(Uint128::MAX, 19, true);
        assert_eq!(
            widest.format_fixed().as_str(),
            "-34028236692093846346.3374607431768211455"
        );
        assert_eq!(widest.format_fixed().len(), Dec128::MAX_STR_LEN);
        assert_eq!(
            widest.format_json().as_str(),
            "\"-34028236692093846346.3374607431768211455\""
        );
    }

    #[test]
    fn test_format_json() {
        assert_eq!(d("1.50").format_json().as_str(), "\"1.5\"");
        assert_eq!(Dec128::ZERO.format_json().as_str(), "\"0\"");
        assert_eq!(
            Dec128::nan(NumericError::InvalidFormat).format_json().as_str(),
            "\"NaN\""
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(d("-12.3400").to_string(), "-12.34");
        assert_eq!(format!("{:>8}", d("1.5")), "     1.5");
        assert_eq!(format!("{:<5}|", d("1")), "1    |");
    }
}
