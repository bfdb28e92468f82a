// ============================================================================
// Dec128 Arithmetic
// ============================================================================
//
// Every public operation follows the same shape:
// 1. a sentinel operand is returned as-is (left operand first)
// 2. the operation is attempted on the operands as given
// 3. on failure it is attempted once more on the canonical forms, which
//    may have room to scale where the given operands did not
// 4. if that fails too the result is an Overflow sentinel

use super::Dec128;
use crate::config::{DecimalConfig, MAX_PRECISION};
use crate::numeric::{NumericError, NumericResult, POW10_U128, POW10_U64};
use crate::uint128::Uint128;
use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

#[allow(clippy::should_implement_trait)]
impl Dec128 {
    /// First sentinel among the operands, if any.
    #[inline]
    fn absorb(self, other: Self) -> Option<Self> {
        if self.err.is_some() {
            Some(self)
        } else if other.err.is_some() {
            Some(other)
        } else {
            None
        }
    }

    /// Runs `attempt` on the operands, then on their canonical forms.
    fn retry_canonical<T>(
        self,
        other: Self,
        op: &'static str,
        attempt: impl Fn(Self, Self) -> NumericResult<T>,
    ) -> NumericResult<T> {
        match attempt(self, other) {
            Ok(value) => Ok(value),
            Err(reason) => {
                tracing::trace!(
                    "{} failed at exponents {}/{} ({}), retrying canonical",
                    op,
                    self.exp,
                    other.exp,
                    reason
                );
                attempt(self.canonical(), other.canonical()).map_err(|_| NumericError::Overflow)
            }
        }
    }

    // ========================================================================
    // Add / Sub
    // ========================================================================

    /// Sum of two values.
    ///
    /// Sentinel on overflow, or if either operand is a sentinel.
    pub fn add(self, other: Self) -> Self {
        if let Some(nan) = self.absorb(other) {
            return nan;
        }
        self.retry_canonical(other, "add", Self::try_add)
            .unwrap_or_else(Self::nan)
    }

    /// Difference of two values.
    ///
    /// Sentinel on overflow, or if either operand is a sentinel.
    pub fn sub(self, other: Self) -> Self {
        if let Some(nan) = self.absorb(other) {
            return nan;
        }
        let negated = Self::raw(other.coef, other.exp, !other.neg);
        self.retry_canonical(negated, "sub", Self::try_add)
            .unwrap_or_else(Self::nan)
    }

    fn try_add(self, other: Self) -> NumericResult<Self> {
        let prec = self.exp.max(other.exp);
        let a = self.rescale(prec).into_result()?;
        let b = other.rescale(prec).into_result()?;

        if a.neg == b.neg {
            let coef = a.coef.checked_add(b.coef)?;
            return Ok(Self::raw(coef, prec, a.neg));
        }

        match a.coef.cmp(&b.coef) {
            Ordering::Greater => Ok(Self::raw(a.coef.checked_sub(b.coef)?, prec, a.neg)),
            Ordering::Equal => Ok(Self::ZERO),
            Ordering::Less => Ok(Self::raw(b.coef.checked_sub(a.coef)?, prec, b.neg)),
        }
    }

    // ========================================================================
    // Mul
    // ========================================================================

    /// Product of two values.
    ///
    /// The result exponent is the sum of the operand exponents. When the
    /// product does not fit that exponent, it is reduced only by an exact
    /// power of ten; digits are never rounded away. Sentinel on overflow.
    pub fn mul(self, other: Self) -> Self {
        if let Some(nan) = self.absorb(other) {
            return nan;
        }
        if self.is_zero() || other.is_zero() {
            return Self::ZERO;
        }
        self.retry_canonical(other, "mul", Self::try_mul)
            .unwrap_or_else(Self::nan)
    }

    fn try_mul(self, other: Self) -> NumericResult<Self> {
        let neg = self.neg != other.neg;
        let prec = self.exp + other.exp;
        let (coef, carry) = self.coef.mul_carry(other.coef);

        if carry.is_zero() {
            if prec <= MAX_PRECISION {
                return Ok(Self::raw(coef, prec, neg));
            }
            let reduced = Self::raw(coef, prec, neg).canonical();
            if reduced.exp <= MAX_PRECISION {
                return Ok(reduced);
            }
            return Err(NumericError::Overflow);
        }

        // Widest reduction first; the first exact quotient wins.
        let mut i = prec;
        while i > 0 {
            match coef.quo_rem_wide(carry, POW10_U128[i as usize]) {
                Ok((q, r)) if r.is_zero() => return Ok(Self::raw(q, prec - i, neg)),
                Err(NumericError::Overflow) => break,
                _ => {}
            }
            i -= 1;
            if prec - i > MAX_PRECISION {
                break;
            }
        }

        tracing::debug!(
            "No exact scale reduction for product at exponent {} (coef={}, carry={})",
            prec,
            coef,
            carry
        );
        Err(NumericError::Overflow)
    }

    // ========================================================================
    // Div
    // ========================================================================

    /// Quotient, using the process-wide default precision.
    pub fn div(self, other: Self) -> Self {
        self.div_with(other, &DecimalConfig::global())
    }

    /// Quotient with at least `cfg.default_precision` fractional digits.
    ///
    /// The result keeps the dividend's exponent when it is larger. Digits
    /// beyond the target are truncated.
    pub fn div_with(self, other: Self, cfg: &DecimalConfig) -> Self {
        if let Some(nan) = self.absorb(other) {
            return nan;
        }
        let prec = match cfg.precision() {
            Ok(prec) => prec,
            Err(reason) => return Self::nan(reason),
        };
        if other.is_zero() {
            return Self::nan(NumericError::DivisionByZero);
        }
        if self.is_zero() {
            return Self::ZERO;
        }
        self.retry_canonical(other, "div", |a, b| a.try_div(b, prec))
            .unwrap_or_else(Self::nan)
    }

    fn try_div(self, other: Self, default_precision: u8) -> NumericResult<Self> {
        let neg = self.neg != other.neg;
        let mut factor = other.exp;
        let mut prec = self.exp;
        if prec < default_precision {
            factor += default_precision - prec;
            prec = default_precision;
        }

        let (lo, carry) = self.coef.mul_carry(POW10_U128[factor as usize]);
        let (q, _) = lo.quo_rem_wide(carry, other.coef)?;
        Ok(Self::raw(q, prec, neg && !q.is_zero()))
    }

    // ========================================================================
    // Quotient / Remainder
    // ========================================================================

    /// Integer quotient and remainder.
    ///
    /// The quotient has exponent 0 and the sign of `self * other`; the
    /// remainder has the larger operand exponent and the dividend's sign,
    /// so `-4 quo_rem 3` is `(-1, -1)`.
    pub fn quo_rem(self, other: Self) -> (Self, Self) {
        if let Some(nan) = self.absorb(other) {
            return (nan, nan);
        }
        if other.is_zero() {
            let nan = Self::nan(NumericError::DivisionByZero);
            return (nan, nan);
        }
        if self.is_zero() {
            return (Self::ZERO, Self::ZERO);
        }
        match self.retry_canonical(other, "quo_rem", Self::try_quo_rem) {
            Ok(pair) => pair,
            Err(reason) => (Self::nan(reason), Self::nan(reason)),
        }
    }

    /// Remainder of [`quo_rem`](Self::quo_rem).
    pub fn rem(self, other: Self) -> Self {
        self.quo_rem(other).1
    }

    fn try_quo_rem(self, other: Self) -> NumericResult<(Self, Self)> {
        let (factor, lo, carry, divisor) = if self.exp == other.exp {
            (self.exp, self.coef, Uint128::ZERO, other.coef)
        } else {
            let factor = self.exp.max(other.exp);
            let (lo, carry) = self
                .coef
                .mul_carry(POW10_U128[(factor - self.exp) as usize]);
            let divisor = other
                .coef
                .checked_mul(POW10_U128[(factor - other.exp) as usize])?;
            (factor, lo, carry, divisor)
        };

        let (q, r) = lo.quo_rem_wide(carry, divisor)?;
        // Zero parts never carry a sign
        Ok((
            Self::raw(q, 0, self.neg != other.neg && !q.is_zero()),
            Self::raw(r, factor, self.neg && !r.is_zero()),
        ))
    }

    // ========================================================================
    // Sign
    // ========================================================================

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        if self.err.is_some() {
            return self;
        }
        Self::raw(self.coef, self.exp, false)
    }

    /// Negation.
    #[inline]
    pub fn neg(self) -> Self {
        if self.err.is_some() {
            return self;
        }
        Self::raw(self.coef, self.exp, !self.neg)
    }

    // ========================================================================
    // Square Root
    // ========================================================================

    /// Square root, using the process-wide default precision.
    pub fn sqrt(self) -> Self {
        self.sqrt_with(&DecimalConfig::global())
    }

    /// Square root truncated to `cfg.default_precision` fractional digits.
    ///
    /// Negative inputs give `SqrtNegative`.
    pub fn sqrt_with(self, cfg: &DecimalConfig) -> Self {
        if self.err.is_some() {
            return self;
        }
        let prec = match cfg.precision() {
            Ok(prec) => prec,
            Err(reason) => return Self::nan(reason),
        };
        if self.is_zero() {
            return Self::ZERO;
        }
        if self.neg {
            return Self::nan(NumericError::SqrtNegative);
        }
        if self == Self::ONE {
            return Self::ONE;
        }
        self.retry_canonical(Self::ZERO, "sqrt", |a, _| a.try_sqrt(prec))
            .unwrap_or_else(Self::nan)
    }

    fn try_sqrt(self, prec: u8) -> NumericResult<Self> {
        let prec2 = prec * 2;

        let mut coef = self.coef;
        let mut exp = self.exp;
        if exp > prec2 {
            coef = coef.div_u64(POW10_U64[(exp - prec2) as usize])?;
            exp = prec2;
        }

        // Radicand scaled to exactly 2 * prec fractional digits
        let (lo, carry) = coef.mul_carry(POW10_U128[(prec2 - exp) as usize]);
        if carry.hi != 0 {
            return Err(NumericError::Overflow);
        }
        if lo.is_zero() && carry.is_zero() {
            return Ok(Self::raw(Uint128::ZERO, prec, false));
        }

        let bit_len = if carry.is_zero() {
            lo.bit_len()
        } else {
            128 + carry.bit_len()
        };

        // Newton's method from an upper bound decreases monotonically to
        // floor(sqrt); the first non-decreasing step marks the fixed point.
        let mut x = Uint128::ONE.shift_left((bit_len + 1) / 2);
        loop {
            let (y, _) = lo.quo_rem_wide(carry, x)?;
            let next = x.checked_add(y)?.shift_right(1);
            if next >= x {
                break;
            }
            x = next;
        }

        Ok(Self::raw(x, prec, false))
    }

    // ========================================================================
    // Integer Power
    // ========================================================================

    /// `self` raised to `n`, using the process-wide default precision for
    /// negative powers.
    pub fn pow_int(self, n: i32) -> Self {
        self.pow_int_with(n, &DecimalConfig::global())
    }

    /// `self` raised to `n` by repeated squaring.
    ///
    /// Negative powers compute `1 / self^|n|` with `cfg`'s precision.
    pub fn pow_int_with(self, n: i32, cfg: &DecimalConfig) -> Self {
        if self.err.is_some() {
            return self;
        }
        if let Err(reason) = cfg.precision() {
            return Self::nan(reason);
        }
        let magnitude = self.pow_unsigned(n.unsigned_abs());
        if n < 0 {
            Self::ONE.div_with(magnitude, cfg)
        } else {
            magnitude
        }
    }

    fn pow_unsigned(self, n: u32) -> Self {
        match n {
            0 => Self::ONE,
            1 => self,
            _ if n % 2 == 0 => self.mul(self).pow_unsigned(n / 2),
            _ => self.mul(self).pow_unsigned((n - 1) / 2).mul(self),
        }
    }

    // ========================================================================
    // Aggregates
    // ========================================================================

    /// Arithmetic mean, using the process-wide default precision.
    ///
    /// An empty slice gives `DivisionByZero`.
    pub fn avg(values: &[Self]) -> Self {
        Self::avg_with(values, &DecimalConfig::global())
    }

    /// Arithmetic mean with `cfg`'s division precision.
    pub fn avg_with(values: &[Self], cfg: &DecimalConfig) -> Self {
        if let Err(reason) = cfg.precision() {
            return Self::nan(reason);
        }
        let total: Self = values.iter().sum();
        total.div_with(Self::from(values.len() as u64), cfg)
    }
}

// ============================================================================
// Operator Traits
// ============================================================================
//
// Operators never panic; failures surface as sentinels.

impl Add for Dec128 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Dec128::add(self, rhs)
    }
}

impl Sub for Dec128 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Dec128::sub(self, rhs)
    }
}

impl Mul for Dec128 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Dec128::mul(self, rhs)
    }
}

impl Div for Dec128 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Dec128::div(self, rhs)
    }
}

impl Rem for Dec128 {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self {
        Dec128::rem(self, rhs)
    }
}

impl Neg for Dec128 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Dec128::neg(self)
    }
}

impl Sum for Dec128 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Dec128::add)
    }
}

impl<'a> Sum<&'a Dec128> for Dec128 {
    fn sum<I: Iterator<Item = &'a Dec128>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| Dec128::add(acc, *x))
    }
}
