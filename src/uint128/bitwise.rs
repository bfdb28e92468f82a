// ============================================================================
// Uint128 Bitwise Operations
// ============================================================================

use super::Uint128;
use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

impl Uint128 {
    /// Leading zero bits; 128 for zero.
    #[inline]
    pub const fn leading_zeros(self) -> u32 {
        if self.hi != 0 {
            self.hi.leading_zeros()
        } else {
            64 + self.lo.leading_zeros()
        }
    }

    /// Trailing zero bits; 128 for zero.
    #[inline]
    pub const fn trailing_zeros(self) -> u32 {
        if self.lo != 0 {
            self.lo.trailing_zeros()
        } else {
            64 + self.hi.trailing_zeros()
        }
    }

    /// Number of set bits.
    #[inline]
    pub const fn count_ones(self) -> u32 {
        self.lo.count_ones() + self.hi.count_ones()
    }

    /// Logical left shift. Shifts of 128 or more yield zero.
    #[inline]
    pub const fn shift_left(self, n: u32) -> Self {
        match n {
            0 => self,
            1..=63 => Self {
                lo: self.lo << n,
                hi: (self.hi << n) | (self.lo >> (64 - n)),
            },
            64..=127 => Self {
                lo: 0,
                hi: self.lo << (n - 64),
            },
            _ => Self::ZERO,
        }
    }

    /// Logical right shift. Shifts of 128 or more yield zero.
    #[inline]
    pub const fn shift_right(self, n: u32) -> Self {
        match n {
            0 => self,
            1..=63 => Self {
                lo: (self.lo >> n) | (self.hi << (64 - n)),
                hi: self.hi >> n,
            },
            64..=127 => Self {
                lo: self.hi >> (n - 64),
                hi: 0,
            },
            _ => Self::ZERO,
        }
    }

    /// Rotate left by `k` bits (taken modulo 128).
    #[inline]
    pub const fn rotate_left(self, k: u32) -> Self {
        let k = k % 128;
        if k == 0 {
            return self;
        }
        let left = self.shift_left(k);
        let right = self.shift_right(128 - k);
        Self {
            lo: left.lo | right.lo,
            hi: left.hi | right.hi,
        }
    }

    /// Rotate right by `k` bits (taken modulo 128).
    #[inline]
    pub const fn rotate_right(self, k: u32) -> Self {
        self.rotate_left(128 - k % 128)
    }

    /// Reverse the order of all 128 bits.
    #[inline]
    pub const fn reverse_bits(self) -> Self {
        Self {
            lo: self.hi.reverse_bits(),
            hi: self.lo.reverse_bits(),
        }
    }

    /// Reverse the order of all 16 bytes.
    #[inline]
    pub const fn reverse_bytes(self) -> Self {
        Self {
            lo: self.hi.swap_bytes(),
            hi: self.lo.swap_bytes(),
        }
    }

    /// Bitwise AND with a word; the high word is always cleared.
    #[inline]
    pub const fn and_u64(self, other: u64) -> Self {
        Self {
            lo: self.lo & other,
            hi: 0,
        }
    }

    /// Bitwise OR with a word, leaving the high word unchanged.
    #[inline]
    pub const fn or_u64(self, other: u64) -> Self {
        Self {
            lo: self.lo | other,
            hi: self.hi,
        }
    }

    /// Bitwise XOR with a word, leaving the high word unchanged.
    #[inline]
    pub const fn xor_u64(self, other: u64) -> Self {
        Self {
            lo: self.lo ^ other,
            hi: self.hi,
        }
    }
}

impl BitAnd for Uint128 {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self {
            lo: self.lo & rhs.lo,
            hi: self.hi & rhs.hi,
        }
    }
}

impl BitOr for Uint128 {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self {
            lo: self.lo | rhs.lo,
            hi: self.hi | rhs.hi,
        }
    }
}

impl BitXor for Uint128 {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self {
            lo: self.lo ^ rhs.lo,
            hi: self.hi ^ rhs.hi,
        }
    }
}

impl Not for Uint128 {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self {
            lo: !self.lo,
            hi: !self.hi,
        }
    }
}

impl Shl<u32> for Uint128 {
    type Output = Self;

    #[inline]
    fn shl(self, n: u32) -> Self {
        self.shift_left(n)
    }
}

impl Shr<u32> for Uint128 {
    type Output = Self;

    #[inline]
    fn shr(self, n: u32) -> Self {
        self.shift_right(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(v: u128) -> Uint128 {
        Uint128::from_u128(v)
    }

    const SAMPLE: u128 = 0x0123_4567_89ab_cdef_fedc_ba98_7654_3210;

    #[test]
    fn test_leading_and_trailing_zeros() {
        assert_eq!(Uint128::ZERO.leading_zeros(), 128);
        assert_eq!(Uint128::ZERO.trailing_zeros(), 128);
        assert_eq!(Uint128::ONE.leading_zeros(), 127);
        assert_eq!(Uint128::new(0, 1).trailing_zeros(), 64);
        assert_eq!(u(SAMPLE).leading_zeros(), SAMPLE.leading_zeros());
        assert_eq!(u(SAMPLE).trailing_zeros(), SAMPLE.trailing_zeros());
        assert_eq!(u(SAMPLE).count_ones(), SAMPLE.count_ones());
    }

    #[test]
    fn test_shifts_match_native() {
        for n in [0u32, 1, 17, 63, 64, 65, 100, 127] {
            assert_eq!(u(SAMPLE).shift_left(n).as_u128(), SAMPLE << n, "shl {}", n);
            assert_eq!(u(SAMPLE).shift_right(n).as_u128(), SAMPLE >> n, "shr {}", n);
        }
        assert_eq!(u(SAMPLE) << 128, Uint128::ZERO);
        assert_eq!(u(SAMPLE) >> 200, Uint128::ZERO);
    }

    #[test]
    fn test_rotations_match_native() {
        for k in [0u32, 1, 63, 64, 99, 128, 130] {
            assert_eq!(u(SAMPLE).rotate_left(k).as_u128(), SAMPLE.rotate_left(k));
            assert_eq!(u(SAMPLE).rotate_right(k).as_u128(), SAMPLE.rotate_right(k));
        }
    }

    #[test]
    fn test_reversal() {
        assert_eq!(u(SAMPLE).reverse_bits().as_u128(), SAMPLE.reverse_bits());
        assert_eq!(u(SAMPLE).reverse_bytes().as_u128(), SAMPLE.swap_bytes());
    }

    #[test]
    fn test_logic_operators() {
        let a = u(SAMPLE);
        let b = u(!SAMPLE ^ 0xffff);
        assert_eq!((a & b).as_u128(), SAMPLE & (!SAMPLE ^ 0xffff));
        assert_eq!((a | b).as_u128(), SAMPLE | (!SAMPLE ^ 0xffff));
        assert_eq!((a ^ b).as_u128(), SAMPLE ^ (!SAMPLE ^ 0xffff));
        assert_eq!((!a).as_u128(), !SAMPLE);

        assert_eq!(a.and_u64(0xff).as_u128(), SAMPLE & 0xff);
        assert_eq!(a.or_u64(0xff).as_u128(), SAMPLE | 0xff);
        assert_eq!(a.xor_u64(0xff).as_u128(), SAMPLE ^ 0xff);
        assert_eq!(Uint128::MAX.and_u64(u64::MAX), Uint128::from_u64(u64::MAX));
        assert_eq!(Uint128::new(1, 7).or_u64(2).hi, 7);
    }
}
