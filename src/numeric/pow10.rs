// ============================================================================
// Power-of-Ten Tables
// Compile-time lookup tables shared by rescale, multiply and divide
// ============================================================================

use crate::uint128::Uint128;

/// Number of entries in [`POW10_U64`] (10^0 through 10^19).
pub const POW10_U64_LEN: usize = 20;

/// Number of entries in [`POW10_U128`] (10^0 through 10^38).
pub const POW10_U128_LEN: usize = 39;

/// 10^n for n in 0..=19, the largest powers that fit a single 64-bit word.
pub const POW10_U64: [u64; POW10_U64_LEN] = pow10_u64_table();

/// 10^n for n in 0..=38, the largest powers that fit 128 bits.
pub const POW10_U128: [Uint128; POW10_U128_LEN] = pow10_u128_table();

const fn pow10_u64_table() -> [u64; POW10_U64_LEN] {
    let mut table = [1u64; POW10_U64_LEN];
    let mut i = 1;
    while i < POW10_U64_LEN {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
}

const fn pow10_u128_table() -> [Uint128; POW10_U128_LEN] {
    let mut table = [Uint128::ONE; POW10_U128_LEN];
    let mut value: u128 = 1;
    let mut i = 1;
    while i < POW10_U128_LEN {
        value *= 10;
        table[i] = Uint128::from_u128(value);
        i += 1;
    }
    table
}
