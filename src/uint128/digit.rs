// ============================================================================
// Machine Words
// Single-word primitives with explicit carries, built on a native double word
// ============================================================================

/// One limb of a [`Uint128`](super::Uint128).
pub(crate) type Digit = u64;

/// Unsigned type with twice as many bits as [`Digit`].
pub(crate) type DoubleDigit = u128;

pub(crate) const DIGIT_BITS: u32 = Digit::BITS;

/// `a + b + carry`, returning `(sum, carry_out)` with `carry_out` in {0, 1}.
#[inline]
pub(crate) const fn add_carry(a: Digit, b: Digit, carry: Digit) -> (Digit, Digit) {
    let sum = a as DoubleDigit + b as DoubleDigit + carry as DoubleDigit;
    (sum as Digit, (sum >> DIGIT_BITS) as Digit)
}

/// `a - b - borrow`, returning `(difference, borrow_out)` with `borrow_out` in {0, 1}.
#[inline]
pub(crate) const fn sub_borrow(a: Digit, b: Digit, borrow: Digit) -> (Digit, Digit) {
    let (d1, b1) = a.overflowing_sub(b);
    let (d2, b2) = d1.overflowing_sub(borrow);
    (d2, (b1 | b2) as Digit)
}

/// Full product of two words as `(lo, hi)`.
#[inline]
pub(crate) const fn mul_wide(a: Digit, b: Digit) -> (Digit, Digit) {
    let product = a as DoubleDigit * b as DoubleDigit;
    (product as Digit, (product >> DIGIT_BITS) as Digit)
}

/// Divides the double word `hi:lo` by `d`, returning `(quotient, remainder)`.
///
/// Requires `hi < d`, so the quotient fits a single word.
#[inline]
pub(crate) const fn div_wide(hi: Digit, lo: Digit, d: Digit) -> (Digit, Digit) {
    debug_assert!(hi < d);
    let n = ((hi as DoubleDigit) << DIGIT_BITS) | lo as DoubleDigit;
    let d = d as DoubleDigit;
    ((n / d) as Digit, (n % d) as Digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_carry() {
        assert_eq!(add_carry(1, 2, 0), (3, 0));
        assert_eq!(add_carry(Digit::MAX, 1, 0), (0, 1));
        assert_eq!(add_carry(Digit::MAX, Digit::MAX, 1), (Digit::MAX, 1));
    }

    #[test]
    fn test_sub_borrow() {
        assert_eq!(sub_borrow(3, 2, 0), (1, 0));
        assert_eq!(sub_borrow(0, 1, 0), (Digit::MAX, 1));
        assert_eq!(sub_borrow(0, 0, 1), (Digit::MAX, 1));
        assert_eq!(sub_borrow(5, 5, 1), (Digit::MAX, 1));
    }

    #[test]
    fn test_mul_wide() {
        assert_eq!(mul_wide(Digit::MAX, Digit::MAX), (1, Digit::MAX - 1));
        assert_eq!(mul_wide(1 << 32, 1 << 32), (0, 1));
    }

    #[test]
    fn test_div_wide() {
        assert_eq!(div_wide(0, 100, 7), (14, 2));
        assert_eq!(div_wide(1, 0, 2), (1 << 63, 0));
    }
}
