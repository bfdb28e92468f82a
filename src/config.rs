// ============================================================================
// Decimal Configuration
// Default precision for divide, square root and friends
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest exponent a [`Dec128`](crate::decimal::Dec128) may carry.
pub const MAX_PRECISION: u8 = 19;

static GLOBAL: OnceLock<DecimalConfig> = OnceLock::new();

/// Settings consumed by operations whose result scale is not determined by
/// their operands.
///
/// Pass one explicitly to the `*_with` methods (`div_with`, `sqrt_with`,
/// `pow_int_with`, `avg_with`), or install one process-wide at startup and use
/// the plain forms.
///
/// # Example
/// ```
/// use dec128::config::DecimalConfig;
/// use dec128::decimal::Dec128;
///
/// let cfg = DecimalConfig::new(6).unwrap();
/// let third = Dec128::ONE.div_with(Dec128::from(7), &cfg);
/// assert_eq!(third.to_string(), "0.142857");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalConfig {
    /// Fractional digits produced by divide and square root
    pub default_precision: u8,
}

impl Default for DecimalConfig {
    fn default() -> Self {
        Self {
            default_precision: MAX_PRECISION,
        }
    }
}

impl DecimalConfig {
    /// Create a configuration with the given default precision.
    ///
    /// # Errors
    /// Returns `PrecisionOutOfRange` above [`MAX_PRECISION`].
    pub fn new(default_precision: u8) -> NumericResult<Self> {
        if default_precision > MAX_PRECISION {
            return Err(NumericError::PrecisionOutOfRange);
        }
        Ok(Self { default_precision })
    }

    /// Builder method: set the default precision
    pub fn with_default_precision(mut self, default_precision: u8) -> Self {
        self.default_precision = default_precision;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.default_precision > MAX_PRECISION {
            return Err(format!(
                "Default precision {} exceeds maximum of {}",
                self.default_precision, MAX_PRECISION
            ));
        }
        Ok(())
    }

    /// The default precision, or `PrecisionOutOfRange` if the public field
    /// was set past [`MAX_PRECISION`].
    pub(crate) fn precision(&self) -> NumericResult<u8> {
        if self.default_precision > MAX_PRECISION {
            return Err(NumericError::PrecisionOutOfRange);
        }
        Ok(self.default_precision)
    }

    /// Install this configuration process-wide.
    ///
    /// Meant to be called once during startup. Installing an identical
    /// configuration again succeeds; installing a different one is rejected.
    pub fn install(self) -> Result<(), String> {
        self.validate()?;

        let active = GLOBAL.get_or_init(|| {
            tracing::info!(
                "Installed decimal config: default_precision={}",
                self.default_precision
            );
            self
        });

        if *active != self {
            tracing::warn!(
                "Rejected decimal config install: default_precision={} already active, requested {}",
                active.default_precision,
                self.default_precision
            );
            return Err(format!(
                "Decimal config already installed with default precision {}",
                active.default_precision
            ));
        }

        Ok(())
    }

    /// The installed configuration, or the default if none was installed.
    pub fn global() -> Self {
        GLOBAL.get().copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DecimalConfig::default();
        assert_eq!(config.default_precision, 19);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(DecimalConfig::new(6).map(|c| c.default_precision), Ok(6));
        assert_eq!(
            DecimalConfig::new(20),
            Err(NumericError::PrecisionOutOfRange)
        );
    }

    #[test]
    fn test_builder_pattern() {
        let config = DecimalConfig::default().with_default_precision(10);
        assert_eq!(config.default_precision, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let config = DecimalConfig::default().with_default_precision(25);
        let err = config.validate().unwrap_err();
        assert!(err.contains("25"));
    }

    #[test]
    fn test_precision_accessor_rejects_out_of_range() {
        assert_eq!(DecimalConfig::default().precision(), Ok(19));
        let config = DecimalConfig {
            default_precision: 20,
        };
        assert_eq!(config.precision(), Err(NumericError::PrecisionOutOfRange));
    }

    #[test]
    fn test_invalid_config_is_never_installed() {
        assert!(DecimalConfig::default()
            .with_default_precision(30)
            .install()
            .is_err());
        assert!(DecimalConfig::global().default_precision <= MAX_PRECISION);
    }
}
