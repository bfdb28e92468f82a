// ============================================================================
// Uint128 Arithmetic
// Carry/borrow propagation and word-wise multiplication
// ============================================================================

use super::digit::{add_carry, mul_wide, sub_borrow, Digit, DoubleDigit, DIGIT_BITS};
use super::Uint128;
use crate::numeric::{NumericError, NumericResult};

impl Uint128 {
    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if a carry leaves the high word.
    #[inline]
    pub fn checked_add(self, other: Self) -> NumericResult<Self> {
        let (lo, carry) = add_carry(self.lo, other.lo, 0);
        let (hi, carry) = add_carry(self.hi, other.hi, carry);
        if carry != 0 {
            return Err(NumericError::Overflow);
        }
        Ok(Self { lo, hi })
    }

    /// Checked addition of a single word.
    ///
    /// # Errors
    /// Returns `Overflow` if a carry leaves the high word.
    #[inline]
    pub fn checked_add_u64(self, other: u64) -> NumericResult<Self> {
        self.checked_add(Self::from_u64(other))
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Underflow` if `other > self`.
    #[inline]
    pub fn checked_sub(self, other: Self) -> NumericResult<Self> {
        let (lo, borrow) = sub_borrow(self.lo, other.lo, 0);
        let (hi, borrow) = sub_borrow(self.hi, other.hi, borrow);
        if borrow != 0 {
            return Err(NumericError::Underflow);
        }
        Ok(Self { lo, hi })
    }

    /// Checked subtraction of a single word.
    ///
    /// # Errors
    /// Returns `Underflow` if `other > self`.
    #[inline]
    pub fn checked_sub_u64(self, other: u64) -> NumericResult<Self> {
        self.checked_sub(Self::from_u64(other))
    }

    /// Subtraction that wraps modulo 2^128.
    ///
    /// Only meaningful when the caller already knows `self >= other`.
    #[inline]
    pub const fn wrapping_sub(self, other: Self) -> Self {
        let (lo, borrow) = sub_borrow(self.lo, other.lo, 0);
        let (hi, _) = sub_borrow(self.hi, other.hi, borrow);
        Self { lo, hi }
    }

    /// Checked multiplication from four word-by-word partial products.
    ///
    /// # Errors
    /// Returns `Overflow` if any bit of the 256-bit product lies above bit 127.
    pub fn checked_mul(self, other: Self) -> NumericResult<Self> {
        if self.hi != 0 && other.hi != 0 {
            return Err(NumericError::Overflow);
        }

        let (lo, hi) = mul_wide(self.lo, other.lo);
        let (hl_lo, hl_hi) = mul_wide(self.hi, other.lo);
        let (lh_lo, lh_hi) = mul_wide(self.lo, other.hi);
        if hl_hi != 0 || lh_hi != 0 {
            return Err(NumericError::Overflow);
        }

        let (hi, c0) = add_carry(hi, hl_lo, 0);
        let (hi, c1) = add_carry(hi, lh_lo, 0);
        if c0 != 0 || c1 != 0 {
            return Err(NumericError::Overflow);
        }

        Ok(Self { lo, hi })
    }

    /// Full 256-bit product, returned as `(low 128 bits, high 128 bits)`.
    ///
    /// Never fails. The high half is the "carry" consumed by
    /// [`quo_rem_wide`](Self::quo_rem_wide).
    pub fn mul_carry(self, other: Self) -> (Self, Self) {
        if self.hi == 0 && other.hi == 0 {
            let (lo, hi) = mul_wide(self.lo, other.lo);
            return (Self { lo, hi }, Self::ZERO);
        }

        const LOW: DoubleDigit = Digit::MAX as DoubleDigit;

        let ll = self.lo as DoubleDigit * other.lo as DoubleDigit;
        let lh = self.lo as DoubleDigit * other.hi as DoubleDigit;
        let hl = self.hi as DoubleDigit * other.lo as DoubleDigit;
        let hh = self.hi as DoubleDigit * other.hi as DoubleDigit;

        let w0 = ll as Digit;
        let mid = (ll >> DIGIT_BITS) + (lh & LOW) + (hl & LOW);
        let w1 = mid as Digit;
        let upper = (mid >> DIGIT_BITS) + (lh >> DIGIT_BITS) + (hl >> DIGIT_BITS) + (hh & LOW);
        let w2 = upper as Digit;
        let w3 = ((upper >> DIGIT_BITS) + (hh >> DIGIT_BITS)) as Digit;

        (Self { lo: w0, hi: w1 }, Self { lo: w2, hi: w3 })
    }

    /// Checked multiplication by a single word.
    ///
    /// # Errors
    /// Returns `Overflow` if the 192-bit product does not fit 128 bits.
    #[inline]
    pub fn checked_mul_u64(self, other: u64) -> NumericResult<Self> {
        let (lo, hi) = mul_wide(self.lo, other);
        let (top_lo, top_hi) = mul_wide(self.hi, other);
        if top_hi != 0 {
            return Err(NumericError::Overflow);
        }

        let (hi, carry) = add_carry(hi, top_lo, 0);
        if carry != 0 {
            return Err(NumericError::Overflow);
        }

        Ok(Self { lo, hi })
    }
}
