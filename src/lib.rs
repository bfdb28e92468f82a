// ============================================================================
// Dec128 Library
// 128-bit fixed-point decimal arithmetic with a sticky error channel
// ============================================================================

//! # Dec128
//!
//! Exact, overflow-aware decimal arithmetic for pricing and accounting code.
//!
//! ## Features
//!
//! - **128-bit coefficient** with up to 19 fractional digits
//! - **No floating point** anywhere in the arithmetic core
//! - **Sticky errors**: failed operations yield a sentinel that absorbs every
//!   later operation, so a long chain is checked once at the end
//! - **Seven rounding modes**, truncating rescale, canonicalization
//! - **Stack-only rendering** (no heap allocation for text or JSON forms)
//! - Optional `serde` support and `rust_decimal` interop
//!
//! ## Example
//!
//! ```rust
//! use dec128::prelude::*;
//!
//! let cfg = DecimalConfig::new(6).unwrap();
//!
//! let price: Dec128 = "1000000".parse().unwrap();
//! let fee: Dec128 = "-0.0000001".parse().unwrap();
//! assert_eq!((price + fee).to_string(), "999999.9999999");
//!
//! let share = Dec128::ONE.div_with(Dec128::from(7), &cfg);
//! assert_eq!(share.to_string(), "0.142857");
//! assert_eq!(share.round_bank(2).to_string(), "0.14");
//!
//! // Errors propagate instead of panicking
//! let broken = (price / Dec128::ZERO).sqrt() * Dec128::TEN;
//! assert_eq!(broken.error(), Some(NumericError::DivisionByZero));
//! ```

pub mod config;
pub mod decimal;
pub mod numeric;
pub mod uint128;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{DecimalConfig, MAX_PRECISION};
    pub use crate::decimal::{Dec128, RoundingMode};
    pub use crate::numeric::{NumericError, NumericResult};
    pub use crate::uint128::Uint128;
}
