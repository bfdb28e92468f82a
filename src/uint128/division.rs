// ============================================================================
// Uint128 Division
// Word division, normalized 128/128 division and 256-by-128 long division
// ============================================================================
//
// The wide routines follow the usual normalize / estimate / correct scheme:
// the divisor is shifted left until its top bit is set, a trial quotient
// word is estimated from the dividend's leading words and the divisor's high
// word, then corrected downward (at most twice) until the trial product no
// longer exceeds the partial dividend.

use super::digit::{add_carry, div_wide, mul_wide, sub_borrow, Digit};
use super::Uint128;
use crate::numeric::{NumericError, NumericResult};
use std::cmp::Ordering;

impl Uint128 {
    /// Quotient and remainder by a single word.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    #[inline]
    pub fn quo_rem_u64(self, divisor: u64) -> NumericResult<(Self, u64)> {
        if divisor == 0 {
            return Err(NumericError::DivisionByZero);
        }
        Ok(self.div_rem_word(divisor))
    }

    /// Quotient by a single word.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    #[inline]
    pub fn div_u64(self, divisor: u64) -> NumericResult<Self> {
        self.quo_rem_u64(divisor).map(|(q, _)| q)
    }

    /// Remainder by a single word.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    #[inline]
    pub fn rem_u64(self, divisor: u64) -> NumericResult<u64> {
        self.quo_rem_u64(divisor).map(|(_, r)| r)
    }

    /// Quotient and remainder by a full 128-bit divisor.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn quo_rem(self, divisor: Self) -> NumericResult<(Self, Self)> {
        if divisor.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        if divisor.hi == 0 {
            let (q, r) = self.div_rem_word(divisor.lo);
            return Ok((q, Self::from_u64(r)));
        }

        if self < divisor {
            return Ok((Self::ZERO, self));
        }

        // A divisor with a non-zero high word leaves a single-word quotient.
        // Estimate it from the top bits, landing on q or q - 1.
        let n = divisor.hi.leading_zeros();
        let v1 = divisor.shift_left(n);
        let u1 = self.shift_right(1);
        let (mut tq, _) = div_wide(u1.hi, u1.lo, v1.hi);
        tq >>= 63 - n;
        if tq != 0 {
            tq -= 1;
        }

        let mut q = Self::from_u64(tq);
        let mut r = self.checked_sub(divisor.checked_mul_u64(tq)?)?;
        if r >= divisor {
            q = q.checked_add_u64(1)?;
            r = r.checked_sub(divisor)?;
        }

        Ok((q, r))
    }

    /// Quotient by a full 128-bit divisor.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    #[inline]
    pub fn checked_div(self, divisor: Self) -> NumericResult<Self> {
        self.quo_rem(divisor).map(|(q, _)| q)
    }

    /// Remainder by a full 128-bit divisor.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    #[inline]
    pub fn checked_rem(self, divisor: Self) -> NumericResult<Self> {
        self.quo_rem(divisor).map(|(_, r)| r)
    }

    /// Divides the 192-bit value `carry:self` by a single word.
    ///
    /// # Errors
    /// - `DivisionByZero` if `divisor` is zero
    /// - `Overflow` if `carry >= divisor` (the quotient would not fit 128 bits)
    pub fn quo_rem_192_by_64(self, carry: u64, divisor: u64) -> NumericResult<(Self, u64)> {
        if divisor == 0 {
            return Err(NumericError::DivisionByZero);
        }
        if carry >= divisor {
            return Err(NumericError::Overflow);
        }

        let (hi, rem) = div_wide(carry, self.hi, divisor);
        let (lo, r) = div_wide(rem, self.lo, divisor);

        Ok((Self { lo, hi }, r))
    }

    /// Divides the 256-bit value `carry:self` by a 128-bit divisor.
    ///
    /// `carry` is the high half of the dividend, as produced by
    /// [`mul_carry`](Self::mul_carry). Returns the exact quotient and remainder.
    ///
    /// # Errors
    /// - `DivisionByZero` if `divisor` is zero
    /// - `Overflow` if `carry >= divisor` (the quotient would not fit 128 bits)
    pub fn quo_rem_wide(self, carry: Self, divisor: Self) -> NumericResult<(Self, Self)> {
        if divisor.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        if carry.is_zero() {
            return self.quo_rem(divisor);
        }

        if divisor.hi == 0 && carry.hi == 0 {
            let (q, r) = self.quo_rem_192_by_64(carry.lo, divisor.lo)?;
            return Ok((q, Self::from_u64(r)));
        }

        if carry >= divisor {
            return Err(NumericError::Overflow);
        }

        // carry < divisor with a non-zero carry implies divisor.hi != 0
        let n = divisor.hi.leading_zeros();
        let v = divisor.shift_left(n);
        let a = shift_words_left([self.lo, self.hi, carry.lo, carry.hi], n);

        let (q1, rem) = div_3by2(a[3], a[2], a[1], v);
        let (q0, rem) = div_3by2(rem.hi, rem.lo, a[0], v);

        Ok((Self { lo: q0, hi: q1 }, rem.shift_right(n)))
    }

    /// Infallible word division; `divisor` must be non-zero.
    #[inline]
    pub(crate) const fn div_rem_word(self, divisor: u64) -> (Self, u64) {
        if self.hi < divisor {
            let (lo, r) = div_wide(self.hi, self.lo, divisor);
            (Self { lo, hi: 0 }, r)
        } else {
            let (hi, r) = div_wide(0, self.hi, divisor);
            let (lo, r) = div_wide(r, self.lo, divisor);
            (Self { lo, hi }, r)
        }
    }
}

/// Shifts a little-endian 4-word value left by `n < 64` bits.
///
/// Bits shifted out of the top word are dropped; callers guarantee there are none.
#[inline]
fn shift_words_left(w: [Digit; 4], n: u32) -> [Digit; 4] {
    if n == 0 {
        return w;
    }
    let back = Digit::BITS - n;
    [
        w[0] << n,
        (w[1] << n) | (w[0] >> back),
        (w[2] << n) | (w[1] >> back),
        (w[3] << n) | (w[2] >> back),
    ]
}

/// Divides the three words `u2:u1:u0` by the normalized divisor `v`.
///
/// Requires `u2:u1 < v` (so the quotient is one word) and `v.hi` to have its
/// top bit set. Returns the quotient word and the remainder (`< v`).
fn div_3by2(u2: Digit, u1: Digit, u0: Digit, v: Uint128) -> (Digit, Uint128) {
    let mut qhat = if u2 >= v.hi {
        Digit::MAX
    } else {
        div_wide(u2, u1, v.hi).0
    };

    let dividend = [u0, u1, u2];
    let mut product = mul_3(v, qhat);

    // Normalization bounds the overestimate by two
    while cmp_3(&product, &dividend) == Ordering::Greater {
        qhat -= 1;
        product = sub_3(product, [v.lo, v.hi, 0]);
    }

    let rem = sub_3(dividend, product);
    debug_assert_eq!(rem[2], 0);

    (qhat, Uint128::new(rem[0], rem[1]))
}

/// `v * q` as three little-endian words.
#[inline]
fn mul_3(v: Uint128, q: Digit) -> [Digit; 3] {
    let (p0, c0) = mul_wide(v.lo, q);
    let (m_lo, m_hi) = mul_wide(v.hi, q);
    let (p1, carry) = add_carry(c0, m_lo, 0);
    [p0, p1, m_hi + carry]
}

#[inline]
fn cmp_3(a: &[Digit; 3], b: &[Digit; 3]) -> Ordering {
    a[2].cmp(&b[2])
        .then(a[1].cmp(&b[1]))
        .then(a[0].cmp(&b[0]))
}

/// `a - b` on three words; requires `a >= b`.
#[inline]
fn sub_3(a: [Digit; 3], b: [Digit; 3]) -> [Digit; 3] {
    let (d0, borrow) = sub_borrow(a[0], b[0], 0);
    let (d1, borrow) = sub_borrow(a[1], b[1], borrow);
    let (d2, _) = sub_borrow(a[2], b[2], borrow);
    [d0, d1, d2]
}
