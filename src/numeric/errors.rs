// ============================================================================
// Numeric Errors
// Reason codes carried by failed 128-bit and decimal operations
// ============================================================================

use std::fmt;

/// Reasons an operation on [`Uint128`](crate::uint128::Uint128) or
/// [`Dec128`](crate::decimal::Dec128) can fail.
///
/// `Uint128` returns these through [`NumericResult`]. `Dec128` stores one inline
/// and becomes a sentinel ("NaN") that every later operation passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Generic invalid value (default sentinel reason)
    NotANumber,
    /// Attempted division by zero
    DivisionByZero,
    /// Result does not fit in 128 bits or in a legal scale
    Overflow,
    /// Unsigned subtraction went below zero
    Underflow,
    /// Negative value used where an unsigned result is required
    Negative,
    /// Byte buffer shorter than 16 bytes
    NotEnoughBytes,
    /// Input string is not a valid number
    InvalidFormat,
    /// Exponent above the maximum precision of 19
    PrecisionOutOfRange,
    /// Rescale would drop significant digits
    RescaleToLessPrecision,
    /// Square root of a negative value
    SqrtNegative,
}

impl NumericError {
    /// Every reason code, in declaration order.
    pub const ALL: [NumericError; 10] = [
        NumericError::NotANumber,
        NumericError::DivisionByZero,
        NumericError::Overflow,
        NumericError::Underflow,
        NumericError::Negative,
        NumericError::NotEnoughBytes,
        NumericError::InvalidFormat,
        NumericError::PrecisionOutOfRange,
        NumericError::RescaleToLessPrecision,
        NumericError::SqrtNegative,
    ];
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NotANumber => write!(f, "not a number"),
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::Overflow => write!(f, "overflow"),
            NumericError::Underflow => write!(f, "underflow"),
            NumericError::Negative => write!(f, "negative value in unsigned operation"),
            NumericError::NotEnoughBytes => write!(f, "not enough bytes"),
            NumericError::InvalidFormat => write!(f, "invalid format"),
            NumericError::PrecisionOutOfRange => write!(f, "precision out of range"),
            NumericError::RescaleToLessPrecision => write!(f, "rescale to less precision"),
            NumericError::SqrtNegative => write!(f, "square root of negative number"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NumericError::Overflow.to_string(), "overflow");
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::SqrtNegative.to_string(),
            "square root of negative number"
        );
        assert_eq!(
            NumericError::Negative.to_string(),
            "negative value in unsigned operation"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::Underflow);
    }

    #[test]
    fn test_every_reason_has_a_message() {
        for reason in NumericError::ALL {
            assert!(!reason.to_string().is_empty());
        }
    }
}
