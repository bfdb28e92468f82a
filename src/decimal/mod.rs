// ============================================================================
// 128-bit Scaled Decimal
// Signed decimal = (-1)^neg × coefficient × 10^(-exponent), or a sticky error
// ============================================================================
//
// This module provides:
// - Dec128: immutable value type with an inline error channel
// - Construction, rescaling and canonicalization
// - Normalized equality, ordering and hashing
// - Arithmetic, rounding, parsing, rendering and conversions (submodules)
//
// Design principles:
// - Arithmetic never panics; failures produce a sentinel value
// - A sentinel absorbs every later operation and keeps the first reason
// - Distinct (coefficient, exponent) pairs may denote the same number, so
//   comparison always normalizes

mod arithmetic;
mod convert;
mod format;
mod parse;
mod rounding;
#[cfg(feature = "serde")]
mod serde_impl;

pub use rounding::RoundingMode;

use crate::config::MAX_PRECISION;
use crate::numeric::{NumericError, NumericResult, POW10_U64};
use crate::uint128::Uint128;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 128-bit fixed-point decimal.
///
/// A value is either a number with up to 19 fractional digits and a 128-bit
/// coefficient, or a sentinel ("NaN") carrying the reason an earlier
/// operation failed. Sentinels propagate through arithmetic, so a chain of
/// operations can be checked once at the end.
///
/// # Example
/// ```
/// use dec128::decimal::Dec128;
///
/// let price: Dec128 = "19.99".parse().unwrap();
/// let total = price * Dec128::from(3) - "0.97".parse::<Dec128>().unwrap();
/// assert_eq!(total.to_string(), "59");
///
/// let broken = total / Dec128::ZERO + Dec128::ONE;
/// assert!(broken.is_nan());
/// assert!(broken.into_result().is_err());
/// ```
#[derive(Clone, Copy)]
pub struct Dec128 {
    coef: Uint128,
    exp: u8,
    neg: bool,
    err: Option<NumericError>,
}

impl Dec128 {
    /// Longest digit run that always fits a single word, and therefore the
    /// largest exponent.
    pub const MAX_PRECISION: u8 = MAX_PRECISION;

    /// Longest rendered form: 39 digits, a dot and a sign.
    pub const MAX_STR_LEN: usize = Uint128::MAX_STR_LEN + 2;

    /// Canonical zero
    pub const ZERO: Self = Self::raw(Uint128::ZERO, 0, false);

    /// One
    pub const ONE: Self = Self::raw(Uint128::ONE, 0, false);

    /// Minus one
    pub const NEG_ONE: Self = Self::raw(Uint128::ONE, 0, true);

    /// Two
    pub const TWO: Self = Self::raw(Uint128::from_u64(2), 0, false);

    /// Ten
    pub const TEN: Self = Self::raw(Uint128::from_u64(10), 0, false);

    /// One hundred
    pub const HUNDRED: Self = Self::raw(Uint128::from_u64(100), 0, false);

    /// One thousand
    pub const THOUSAND: Self = Self::raw(Uint128::from_u64(1000), 0, false);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from coefficient, exponent and sign.
    ///
    /// Returns a `PrecisionOutOfRange` sentinel when `exp` exceeds 19.
    /// A zero coefficient at exponent 0 collapses to [`Dec128::ZERO`].
    pub fn new(coef: Uint128, exp: u8, neg: bool) -> Self {
        if exp > MAX_PRECISION {
            return Self::nan(NumericError::PrecisionOutOfRange);
        }
        if coef.is_zero() && exp == 0 {
            return Self::ZERO;
        }
        Self::raw(coef, exp, neg)
    }

    /// A sentinel carrying `reason`.
    #[inline]
    pub const fn nan(reason: NumericError) -> Self {
        Self {
            coef: Uint128::ZERO,
            exp: 0,
            neg: false,
            err: Some(reason),
        }
    }

    /// Builds a valid value without checks; callers keep `exp <= 19`.
    #[inline]
    pub(crate) const fn raw(coef: Uint128, exp: u8, neg: bool) -> Self {
        Self {
            coef,
            exp,
            neg,
            err: None,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check if this is a sentinel.
    #[inline]
    pub const fn is_nan(self) -> bool {
        self.err.is_some()
    }

    /// The failure reason, if this is a sentinel.
    #[inline]
    pub const fn error(self) -> Option<NumericError> {
        self.err
    }

    /// Turns a sentinel into `Err`, so a fluent chain can end with `?`.
    #[inline]
    pub fn into_result(self) -> NumericResult<Self> {
        match self.err {
            Some(reason) => Err(reason),
            None => Ok(self),
        }
    }

    /// Check if value is zero. Sentinels are not zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.err.is_none() && self.coef.is_zero()
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.err.is_none() && self.neg && !self.coef.is_zero()
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.err.is_none() && !self.neg && !self.coef.is_zero()
    }

    /// -1, 0 or 1. Sentinels report 0.
    #[inline]
    pub const fn sign(self) -> i32 {
        if self.is_negative() {
            -1
        } else if self.is_positive() {
            1
        } else {
            0
        }
    }

    /// Number of fractional digits in the current representation.
    #[inline]
    pub const fn exponent(self) -> u8 {
        self.exp
    }

    /// Alias of [`exponent`](Self::exponent).
    #[inline]
    pub const fn precision(self) -> u8 {
        self.exp
    }

    /// Unsigned magnitude before scaling.
    #[inline]
    pub const fn coefficient(self) -> Uint128 {
        self.coef
    }

    // ========================================================================
    // Scale
    // ========================================================================

    /// Change the exponent without rounding.
    ///
    /// Scaling up multiplies the coefficient (Overflow on failure); scaling
    /// down truncates. Exponents above 19 give `PrecisionOutOfRange`.
    pub fn rescale(self, prec: u8) -> Self {
        if self.err.is_some() || self.exp == prec {
            return self;
        }
        if prec > MAX_PRECISION {
            return Self::nan(NumericError::PrecisionOutOfRange);
        }

        if prec > self.exp {
            let factor = POW10_U64[(prec - self.exp) as usize];
            return match self.coef.checked_mul_u64(factor) {
                Ok(coef) => Self::raw(coef, prec, self.neg),
                Err(reason) => Self::nan(reason),
            };
        }

        let (coef, _) = self
            .coef
            .div_rem_word(POW10_U64[(self.exp - prec) as usize]);
        Self::raw(coef, prec, self.neg)
    }

    /// Smallest-exponent representation of the same value.
    ///
    /// Trailing zero digits of the coefficient are stripped. Zero becomes
    /// [`Dec128::ZERO`]; sentinels pass through.
    pub fn canonical(self) -> Self {
        if self.err.is_some() {
            return self;
        }
        if self.coef.is_zero() {
            return Self::ZERO;
        }

        let mut coef = self.coef;
        let mut exp = self.exp;
        while exp > 0 {
            let (q, r) = coef.div_rem_word(10);
            if r != 0 {
                break;
            }
            coef = q;
            exp -= 1;
        }
        Self::raw(coef, exp, self.neg)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Sign with zero folded to non-negative.
    #[inline]
    const fn effective_neg(self) -> bool {
        self.neg && !self.coef.is_zero()
    }

    /// Comparison used by `min` and `max`.
    ///
    /// Sentinels are equal to each other and below every number. When the
    /// operands must be brought to a common exponent and that fails, the side
    /// whose rescale overflowed is treated as the larger magnitude on the left
    /// (`Greater`), or the smaller on the right (`Less`). That tie-break is
    /// returned as is, even for two negatives; `<` and `sort` use the
    /// sign-aware [`Ord`] instead.
    pub fn compare(self, other: Self) -> Ordering {
        self.order(other, false)
    }

    /// Shared body of [`compare`](Self::compare) and `Ord::cmp`.
    ///
    /// With `sign_aware_tie_break` the rescale tie-break is reversed for
    /// negatives like any other magnitude, which keeps the order transitive.
    fn order(self, other: Self, sign_aware_tie_break: bool) -> Ordering {
        match (self.err.is_some(), other.err.is_some()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        let (a_neg, b_neg) = (self.effective_neg(), other.effective_neg());
        if a_neg != b_neg {
            return if a_neg {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        let magnitude = match self.magnitude_cmp(other) {
            Ok(ord) => ord,
            Err(tie_break) if !sign_aware_tie_break => return tie_break,
            Err(tie_break) => tie_break,
        };

        if a_neg {
            magnitude.reverse()
        } else {
            magnitude
        }
    }

    /// Compares coefficients at a common exponent, or `Err` with the
    /// magnitude order implied by whichever rescale overflowed.
    fn magnitude_cmp(self, other: Self) -> Result<Ordering, Ordering> {
        if self.exp == other.exp {
            return Ok(self.coef.cmp(&other.coef));
        }
        let prec = self.exp.max(other.exp);
        let a = self.rescale(prec);
        if a.is_nan() {
            return Err(Ordering::Greater);
        }
        let b = other.rescale(prec);
        if b.is_nan() {
            return Err(Ordering::Less);
        }
        Ok(a.coef.cmp(&b.coef))
    }

    /// The smaller of two values, preferring `self` on ties.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.compare(self) == Ordering::Less {
            other
        } else {
            self
        }
    }

    /// The larger of two values, preferring `self` on ties.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other.compare(self) == Ordering::Greater {
            other
        } else {
            self
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Dec128 {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<NumericError> for Dec128 {
    #[inline]
    fn from(reason: NumericError) -> Self {
        Self::nan(reason)
    }
}

impl PartialEq for Dec128 {
    fn eq(&self, other: &Self) -> bool {
        match (self.err.is_some(), other.err.is_some()) {
            (true, true) => return true,
            (false, false) => {}
            _ => return false,
        }

        if self.coef.is_zero() || other.coef.is_zero() {
            return self.coef.is_zero() && other.coef.is_zero();
        }
        if self.neg != other.neg {
            return false;
        }
        if self.exp == other.exp {
            return self.coef == other.coef;
        }

        let prec = self.exp.max(other.exp);
        let (a, b) = (self.rescale(prec), other.rescale(prec));
        !a.is_nan() && !b.is_nan() && a.coef == b.coef
    }
}

impl Eq for Dec128 {}

impl PartialOrd for Dec128 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Numeric order with sentinels first.
impl Ord for Dec128 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.order(*other, true)
    }
}

impl Hash for Dec128 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.err.is_some() {
            state.write_u8(0xff);
            return;
        }
        let c = self.canonical();
        c.coef.hash(state);
        c.exp.hash(state);
        c.neg.hash(state);
    }
}

impl fmt::Debug for Dec128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.err {
            Some(reason) => write!(f, "Dec128(NaN: {})", reason),
            None => write!(
                f,
                "Dec128({}, coef={}, exp={})",
                self, self.coef, self.exp
            ),
        }
    }
}
