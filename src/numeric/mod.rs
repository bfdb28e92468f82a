// ============================================================================
// Numeric Module
// Error channel and shared lookup tables for 128-bit decimal arithmetic
// ============================================================================
//
// This module provides:
// - NumericError: closed set of reason codes for failed operations
// - NumericResult: Result alias used by every fallible Uint128 operation
// - POW10_U64 / POW10_U128: power-of-ten tables built at compile time
//
// Design principles:
// - No floating-point operations
// - Errors are values; nothing in the arithmetic core panics
// - Tables are const data, shared freely across threads

mod errors;
mod pow10;

pub use errors::{NumericError, NumericResult};
pub use pow10::{POW10_U128, POW10_U128_LEN, POW10_U64, POW10_U64_LEN};
