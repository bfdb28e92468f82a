// ============================================================================
// 128-bit Unsigned Integer
// Two-word unsigned integer with checked, carry-tracking arithmetic
// ============================================================================
//
// This module provides:
// - Uint128: value = lo + hi * 2^64
// - Checked add/sub/mul (Overflow / Underflow instead of wraparound)
// - Carry-tracking multiply producing the full 256-bit product
// - 128/64, 128/128, 192/64 and 256/128 division
// - Bitwise operations, decimal string and byte conversions
//
// Every fallible operation returns NumericResult; there is no error state
// stored inside the value.

mod arithmetic;
mod bitwise;
mod convert;
pub(crate) mod digit;
mod division;

use crate::numeric::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;

/// 128-bit unsigned integer stored as two 64-bit words.
///
/// # Example
/// ```
/// use dec128::uint128::Uint128;
///
/// let a = Uint128::from_u64(u64::MAX);
/// let b = a.checked_add(Uint128::ONE).unwrap();
/// assert_eq!(b, Uint128::new(0, 1));
/// assert_eq!(b.to_string(), "18446744073709551616");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Uint128 {
    /// Low 64 bits
    pub lo: u64,
    /// High 64 bits
    pub hi: u64,
}

impl Uint128 {
    /// Zero value
    pub const ZERO: Self = Self { lo: 0, hi: 0 };

    /// One
    pub const ONE: Self = Self { lo: 1, hi: 0 };

    /// Largest representable value, 2^128 - 1
    pub const MAX: Self = Self {
        lo: u64::MAX,
        hi: u64::MAX,
    };

    /// Largest value that fits a single 64-bit word
    pub const MAX_U64: Self = Self {
        lo: u64::MAX,
        hi: 0,
    };

    /// Maximum number of decimal digits in a 128-bit value.
    pub const MAX_STR_LEN: usize = 39;

    /// Maximum number of decimal digits that always fit a 64-bit word.
    pub const MAX_SAFE_STR_LEN_U64: usize = 19;

    /// Create from low and high words.
    #[inline]
    pub const fn new(lo: u64, hi: u64) -> Self {
        Self { lo, hi }
    }

    /// Create from a single 64-bit word.
    #[inline]
    pub const fn from_u64(value: u64) -> Self {
        Self { lo: value, hi: 0 }
    }

    /// Create from a native `u128`.
    #[inline]
    pub const fn from_u128(value: u128) -> Self {
        Self {
            lo: value as u64,
            hi: (value >> 64) as u64,
        }
    }

    /// Convert to a native `u128`.
    #[inline]
    pub const fn as_u128(self) -> u128 {
        ((self.hi as u128) << 64) | self.lo as u128
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.lo == 0 && self.hi == 0
    }

    /// Number of bits needed to represent the value (0 for zero).
    #[inline]
    pub const fn bit_len(self) -> u32 {
        128 - self.leading_zeros()
    }

    /// Narrow to a 64-bit word.
    ///
    /// # Errors
    /// Returns `Overflow` if the high word is non-zero.
    #[inline]
    pub fn to_u64(self) -> NumericResult<u64> {
        if self.hi != 0 {
            return Err(NumericError::Overflow);
        }
        Ok(self.lo)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialOrd for Uint128 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Uint128 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.hi.cmp(&other.hi).then(self.lo.cmp(&other.lo))
    }
}

impl From<u64> for Uint128 {
    #[inline]
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u128> for Uint128 {
    #[inline]
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<Uint128> for u128 {
    #[inline]
    fn from(value: Uint128) -> Self {
        value.as_u128()
    }
}

impl fmt::Debug for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint128({}, lo={:#x}, hi={:#x})", self, self.lo, self.hi)
    }
}
