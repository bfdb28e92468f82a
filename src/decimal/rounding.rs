// ============================================================================
// Dec128 Rounding
// ============================================================================

use super::Dec128;
use crate::numeric::POW10_U64;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How discarded digits affect the kept coefficient.
///
/// Every mode works on the magnitude and leaves the sign untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Toward negative infinity (floor)
    Down,
    /// Toward positive infinity (ceiling)
    Up,
    /// Drop the digits (truncate)
    TowardZero,
    /// Bump whenever anything is dropped
    AwayFromZero,
    /// Nearest; ties toward zero
    HalfTowardZero,
    /// Nearest; ties away from zero
    HalfAwayFromZero,
    /// Nearest; ties to the even neighbour (banker's rounding)
    HalfEven,
}

impl RoundingMode {
    /// Whether the truncated quotient `q` must be incremented.
    #[inline]
    fn bumps(self, neg: bool, q_is_odd: bool, r: u64, half: u64) -> bool {
        match self {
            RoundingMode::Down => neg && r != 0,
            RoundingMode::Up => !neg && r != 0,
            RoundingMode::TowardZero => false,
            RoundingMode::AwayFromZero => r != 0,
            RoundingMode::HalfTowardZero => r > half,
            RoundingMode::HalfAwayFromZero => r >= half,
            RoundingMode::HalfEven => r > half || (r == half && q_is_odd),
        }
    }
}

impl Dec128 {
    /// Round to `prec` fractional digits under `mode`.
    ///
    /// A no-op when `prec` is not below the current exponent, and for sentinels.
    pub fn round_with(self, mode: RoundingMode, prec: u8) -> Self {
        if self.err.is_some() || prec >= self.exp {
            return self;
        }

        let factor = POW10_U64[(self.exp - prec) as usize];
        let (q, r) = self.coef.div_rem_word(factor);

        if !mode.bumps(self.neg, q.lo & 1 == 1, r, factor / 2) {
            return Self::raw(q, prec, self.neg);
        }
        match q.checked_add_u64(1) {
            Ok(q) => Self::raw(q, prec, self.neg),
            Err(reason) => Self::nan(reason),
        }
    }

    /// Half away from zero.
    #[inline]
    pub fn round(self, prec: u8) -> Self {
        self.round_with(RoundingMode::HalfAwayFromZero, prec)
    }

    /// Floor: `-1.234 -> -1.24`, `1.236 -> 1.23` at 2 digits.
    #[inline]
    pub fn round_down(self, prec: u8) -> Self {
        self.round_with(RoundingMode::Down, prec)
    }

    /// Ceiling: `1.234 -> 1.24`, `-1.236 -> -1.23` at 2 digits.
    #[inline]
    pub fn round_up(self, prec: u8) -> Self {
        self.round_with(RoundingMode::Up, prec)
    }

    /// Truncation toward zero; same as [`trunc`](Self::trunc).
    #[inline]
    pub fn round_toward_zero(self, prec: u8) -> Self {
        self.round_with(RoundingMode::TowardZero, prec)
    }

    /// Any discarded digit bumps the magnitude: `-2.661 -> -2.7` at 1 digit.
    #[inline]
    pub fn round_away_from_zero(self, prec: u8) -> Self {
        self.round_with(RoundingMode::AwayFromZero, prec)
    }

    /// Nearest, ties toward zero: `2.665 -> 2.66` at 2 digits.
    #[inline]
    pub fn round_half_toward_zero(self, prec: u8) -> Self {
        self.round_with(RoundingMode::HalfTowardZero, prec)
    }

    /// Nearest, ties away from zero; same as [`round`](Self::round).
    #[inline]
    pub fn round_half_away_from_zero(self, prec: u8) -> Self {
        self.round_with(RoundingMode::HalfAwayFromZero, prec)
    }

    /// Banker's rounding: `2.125 -> 2.12`, `2.135 -> 2.14` at 2 digits.
    #[inline]
    pub fn round_bank(self, prec: u8) -> Self {
        self.round_with(RoundingMode::HalfEven, prec)
    }

    /// Drop digits beyond `prec`.
    #[inline]
    pub fn trunc(self, prec: u8) -> Self {
        self.round_with(RoundingMode::TowardZero, prec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    fn d(s: &str) -> Dec128 {
        s.parse().unwrap()
    }

    fn check(mode: RoundingMode, cases: &[(&str, &str)]) {
        for (input, expected) in cases {
            assert_eq!(
                d(input).round_with(mode, 2).to_string(),
                *expected,
                "{:?} {}",
                mode,
                input
            );
        }
    }

    #[test]
    fn test_round_down() {
        check(
            RoundingMode::Down,
            &[
                ("1.236", "1.23"),
                ("1.235", "1.23"),
                ("1.234", "1.23"),
                ("-1.234", "-1.24"),
                ("-1.235", "-1.24"),
                ("-1.236", "-1.24"),
            ],
        );
    }

    #[test]
    fn test_round_up() {
        check(
            RoundingMode::Up,
            &[
                ("1.236", "1.24"),
                ("1.234", "1.24"),
                ("-1.234", "-1.23"),
                ("-1.236", "-1.23"),
                ("1.230", "1.23"),
            ],
        );
    }

    #[test]
    fn test_round_toward_and_away_from_zero() {
        check(
            RoundingMode::TowardZero,
            &[("1.236", "1.23"), ("-1.236", "-1.23")],
        );
        check(
            RoundingMode::AwayFromZero,
            &[("1.234", "1.24"), ("-1.234", "-1.24"), ("-1.230", "-1.23")],
        );
    }

    #[test]
    fn test_round_half_modes() {
        check(
            RoundingMode::HalfTowardZero,
            &[
                ("1.236", "1.24"),
                ("1.235", "1.23"),
                ("-1.235", "-1.23"),
                ("-1.236", "-1.24"),
            ],
        );
        check(
            RoundingMode::HalfAwayFromZero,
            &[
                ("1.235", "1.24"),
                ("1.234", "1.23"),
                ("-1.235", "-1.24"),
                ("-1.234", "-1.23"),
            ],
        );
        check(
            RoundingMode::HalfEven,
            &[
                ("2.121", "2.12"),
                ("2.125", "2.12"),
                ("2.135", "2.14"),
                ("2.1351", "2.14"),
                ("2.127", "2.13"),
            ],
        );
    }

    #[test]
    fn test_named_methods_delegate() {
        let x = d("-2.675");
        assert_eq!(x.round(2).to_string(), "-2.68");
        assert_eq!(x.round_down(2).to_string(), "-2.68");
        assert_eq!(x.round_up(2).to_string(), "-2.67");
        assert_eq!(x.round_toward_zero(2), x.trunc(2));
        assert_eq!(x.round_away_from_zero(1).to_string(), "-2.7");
        assert_eq!(x.round_half_toward_zero(2).to_string(), "-2.67");
        assert_eq!(x.round_half_away_from_zero(2), x.round(2));
        assert_eq!(x.round_bank(2).to_string(), "-2.68");
        assert_eq!(d("1.12345").trunc(4).to_string(), "1.1234");
        assert_eq!(d("-2.661").round_away_from_zero(1).to_string(), "-2.7");
        assert_eq!(d("2.665").round_half_toward_zero(2).to_string(), "2.66");
    }

    #[test]
    fn test_round_no_op() {
        let x = d("1.5");
        assert_eq!(x.round(1).exponent(), 1);
        assert_eq!(x.round(5).exponent(), 1);
        let nan = Dec128::nan(NumericError::Overflow);
        assert_eq!(nan.round(0).error(), Some(NumericError::Overflow));
    }

    #[test]
    fn test_round_to_integer() {
        assert_eq!(d("0.5").round(0).to_string(), "1");
        assert_eq!(d("-0.5").round(0).to_string(), "-1");
        assert_eq!(d("0.49").round(0).to_string(), "0");
        assert_eq!(d("9.99").round(1).to_string(), "10");
    }
}
