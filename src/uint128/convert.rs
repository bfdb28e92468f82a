// ============================================================================
// Uint128 Conversions
// Decimal strings and fixed-width byte encodings
// ============================================================================

use super::Uint128;
use crate::numeric::{NumericError, NumericResult, POW10_U64};
use arrayvec::ArrayString;
use std::fmt;
use std::str::FromStr;

/// Largest power of ten that fits a word; rendering peels off this many digits at a time.
const CHUNK_DIGITS: usize = 19;

impl Uint128 {
    /// Parse ASCII decimal digits. An empty input parses as zero.
    ///
    /// # Errors
    /// - `InvalidFormat` on any non-digit byte
    /// - `Overflow` if the value does not fit 128 bits
    pub fn parse_digits(digits: &[u8]) -> NumericResult<Self> {
        if digits.len() <= Self::MAX_SAFE_STR_LEN_U64 {
            let mut acc: u64 = 0;
            for &b in digits {
                if !b.is_ascii_digit() {
                    return Err(NumericError::InvalidFormat);
                }
                acc = acc * 10 + u64::from(b - b'0');
            }
            return Ok(Self::from_u64(acc));
        }

        let mut acc = Self::ZERO;
        for &b in digits {
            if !b.is_ascii_digit() {
                return Err(NumericError::InvalidFormat);
            }
            acc = acc.checked_mul_u64(10)?.checked_add_u64(u64::from(b - b'0'))?;
        }
        Ok(acc)
    }

    /// Render as decimal digits on the stack.
    pub fn to_array_string(self) -> ArrayString<{ Uint128::MAX_STR_LEN }> {
        let mut buf = [0u8; Uint128::MAX_STR_LEN];
        let start = self.write_digits(&mut buf);

        let mut out = ArrayString::new();
        for &b in &buf[start..] {
            out.push(b as char);
        }
        out
    }

    /// Writes the digits right-aligned into `buf`, returning the start index.
    pub(crate) fn write_digits(self, buf: &mut [u8; Uint128::MAX_STR_LEN]) -> usize {
        if self.is_zero() {
            buf[Self::MAX_STR_LEN - 1] = b'0';
            return Self::MAX_STR_LEN - 1;
        }

        let mut pos = Self::MAX_STR_LEN;
        let mut rest = self;
        while !rest.is_zero() {
            let (q, mut chunk) = rest.div_rem_word(POW10_U64[CHUNK_DIGITS]);
            rest = q;

            // Interior chunks are zero-padded to the full width.
            let width = if rest.is_zero() { 0 } else { CHUNK_DIGITS };
            let mut written = 0;
            while chunk != 0 || written < width {
                pos -= 1;
                buf[pos] = b'0' + (chunk % 10) as u8;
                chunk /= 10;
                written += 1;
            }
        }
        pos
    }

    /// Little-endian bytes: low word first, each word little-endian.
    pub fn to_le_bytes(self) -> [u8; 16] {
        self.as_u128().to_le_bytes()
    }

    /// Big-endian bytes: high word first, each word big-endian.
    pub fn to_be_bytes(self) -> [u8; 16] {
        self.as_u128().to_be_bytes()
    }

    /// Inverse of [`to_le_bytes`](Self::to_le_bytes).
    pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
        Self::from_u128(u128::from_le_bytes(bytes))
    }

    /// Inverse of [`to_be_bytes`](Self::to_be_bytes).
    pub const fn from_be_bytes(bytes: [u8; 16]) -> Self {
        Self::from_u128(u128::from_be_bytes(bytes))
    }

    /// Write little-endian bytes into the first 16 bytes of `out`.
    ///
    /// # Errors
    /// Returns `NotEnoughBytes` if `out` is shorter than 16 bytes.
    pub fn put_le_bytes(self, out: &mut [u8]) -> NumericResult<()> {
        let head = out.get_mut(..16).ok_or(NumericError::NotEnoughBytes)?;
        head.copy_from_slice(&self.to_le_bytes());
        Ok(())
    }

    /// Write big-endian bytes into the first 16 bytes of `out`.
    ///
    /// # Errors
    /// Returns `NotEnoughBytes` if `out` is shorter than 16 bytes.
    pub fn put_be_bytes(self, out: &mut [u8]) -> NumericResult<()> {
        let head = out.get_mut(..16).ok_or(NumericError::NotEnoughBytes)?;
        head.copy_from_slice(&self.to_be_bytes());
        Ok(())
    }

    /// Read little-endian from the first 16 bytes of `bytes`.
    ///
    /// # Errors
    /// Returns `NotEnoughBytes` if fewer than 16 bytes are available.
    pub fn from_le_slice(bytes: &[u8]) -> NumericResult<Self> {
        let head: [u8; 16] = bytes
            .get(..16)
            .and_then(|s| s.try_into().ok())
            .ok_or(NumericError::NotEnoughBytes)?;
        Ok(Self::from_le_bytes(head))
    }

    /// Read big-endian from the first 16 bytes of `bytes`.
    ///
    /// # Errors
    /// Returns `NotEnoughBytes` if fewer than 16 bytes are available.
    pub fn from_be_slice(bytes: &[u8]) -> NumericResult<Self> {
        let head: [u8; 16] = bytes
            .get(..16)
            .and_then(|s| s.try_into().ok())
            .ok_or(NumericError::NotEnoughBytes)?;
        Ok(Self::from_be_bytes(head))
    }
}

impl FromStr for Uint128 {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_digits(s.as_bytes())
    }
}

impl fmt::Display for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_array_string())
    }
}
