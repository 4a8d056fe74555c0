//! 16-bit reduced-precision float codec.
//!
//! [`Half`] stores an IEEE 754 binary32 value in 16 bits:
//!
//! ```text
//!  15  14      10  9          0
//! +---+----------+------------+
//! | s | exponent |  mantissa  |
//! +---+----------+------------+
//!       5 bits,     10 bits
//!       bias 15
//! ```
//!
//! Encoding truncates the mantissa (no rounding) and does not produce
//! denormals: values too small for the smallest normal half flush to a
//! signed zero, values too large flush to a signed infinity. Decoding is
//! exact and does understand denormal bit patterns coming from other
//! producers (GPU render targets, files).
//!
//! The float/integer reinterpretation is confined to [`Half::from_f32`] and
//! [`Half::to_f32`].
//!
//! # Usage
//!
//! ```rust
//! use gpx_core::Half;
//!
//! let h = Half::from_f32(1.0);
//! assert_eq!(h.to_bits(), 0x3c00);
//!
//! // Out of range values flush instead of failing
//! assert!(Half::from_f32(1.0e6).is_infinite());
//! assert_eq!(Half::from_f32(1.0e-8).to_f32(), 0.0);
//! ```

use std::fmt;

/// A 16-bit floating-point value (1 sign, 5 exponent, 10 mantissa bits).
///
/// Equality and hashing compare the raw bits, so two NaNs with the same
/// payload are equal and `+0` differs from `-0`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Half(u16);

impl Half {
    /// Sign bit.
    pub const SIGN_MASK: u16 = 0x8000;
    /// Exponent field, in place.
    pub const EXPONENT_MASK: u16 = 0x7c00;
    /// Mantissa field.
    pub const MANTISSA_MASK: u16 = 0x03ff;
    /// Position of the exponent field.
    pub const EXPONENT_SHIFT: u32 = 10;
    /// Exponent bias.
    pub const EXPONENT_BIAS: i32 = 15;
    /// Mantissa bits dropped when narrowing from binary32 (23 - 10).
    pub const MANTISSA_SHIFT: u32 = 13;

    /// Positive zero.
    pub const ZERO: Self = Self(0x0000);
    /// Negative zero.
    pub const NEG_ZERO: Self = Self(0x8000);
    /// One.
    pub const ONE: Self = Self(0x3c00);
    /// Largest finite value (65504).
    pub const MAX: Self = Self(0x7bff);
    /// Smallest positive normal value (2^-14).
    pub const MIN_POSITIVE: Self = Self(0x0400);
    /// Positive infinity.
    pub const INFINITY: Self = Self(0x7c00);
    /// Negative infinity.
    pub const NEG_INFINITY: Self = Self(0xfc00);
    /// Quiet NaN.
    pub const NAN: Self = Self(0x7e00);

    /// Wraps raw bits.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Encodes a binary32 value.
    ///
    /// - Infinity keeps its sign; NaN stays NaN with its payload folded
    ///   into 10 bits.
    /// - Magnitudes at or above 2^16 become infinity.
    /// - Magnitudes below 2^-14 become a signed zero.
    /// - Everything else keeps the top 10 mantissa bits (truncation).
    pub const fn from_f32(value: f32) -> Self {
        let bits = value.to_bits();
        let sign = ((bits >> 16) & 0x8000) as u16;
        let exponent = ((bits >> 23) & 0xff) as i32 - 127;
        let mantissa = bits & 0x007f_ffff;

        if exponent == 128 {
            if mantissa == 0 {
                return Self(sign | Self::EXPONENT_MASK);
            }
            // Never let a NaN collapse into the infinity pattern.
            let payload = ((mantissa >> Self::MANTISSA_SHIFT) | mantissa) & Self::MANTISSA_MASK as u32;
            let payload = if payload == 0 { 1 } else { payload as u16 };
            Self(sign | Self::EXPONENT_MASK | payload)
        } else if exponent > 15 {
            Self(sign | Self::EXPONENT_MASK)
        } else if exponent > -15 {
            let biased = (exponent + Self::EXPONENT_BIAS) as u16;
            let narrowed = (mantissa >> Self::MANTISSA_SHIFT) as u16;
            Self(sign | (biased << Self::EXPONENT_SHIFT) | narrowed)
        } else {
            Self(sign)
        }
    }

    /// Decodes to binary32. Every half value is exactly representable.
    pub fn to_f32(self) -> f32 {
        let exponent = (self.0 & Self::EXPONENT_MASK) >> Self::EXPONENT_SHIFT;
        let mantissa = self.0 & Self::MANTISSA_MASK;

        let magnitude = match exponent {
            // zero and denormals: m / 2^24
            0 => mantissa as f32 / (1u32 << 24) as f32,
            31 => {
                let sign = ((self.0 & Self::SIGN_MASK) as u32) << 16;
                return f32::from_bits(sign | 0x7f80_0000 | mantissa as u32);
            }
            _ => {
                let unbiased = exponent as i32 - Self::EXPONENT_BIAS;
                let scale = f32::from_bits(((unbiased + 127) as u32) << 23);
                scale * (1.0 + mantissa as f32 / 1024.0)
            }
        };

        if self.is_sign_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Returns `true` if the sign bit is set (including `-0` and negative NaN).
    #[inline]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & Self::SIGN_MASK != 0
    }

    /// Returns `true` for NaN patterns.
    #[inline]
    pub const fn is_nan(self) -> bool {
        self.0 & Self::EXPONENT_MASK == Self::EXPONENT_MASK && self.0 & Self::MANTISSA_MASK != 0
    }

    /// Returns `true` for positive or negative infinity.
    #[inline]
    pub const fn is_infinite(self) -> bool {
        self.0 & !Self::SIGN_MASK == Self::EXPONENT_MASK
    }

    /// Returns `true` if neither infinite nor NaN.
    #[inline]
    pub const fn is_finite(self) -> bool {
        self.0 & Self::EXPONENT_MASK != Self::EXPONENT_MASK
    }

    /// Little-endian byte representation.
    #[inline]
    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    /// Reads from little-endian bytes.
    #[inline]
    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }
}

impl From<f32> for Half {
    #[inline]
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl From<Half> for f32 {
    #[inline]
    fn from(value: Half) -> f32 {
        value.to_f32()
    }
}

impl fmt::Debug for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Half({} = {:#06x})", self.to_f32(), self.0)
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}
