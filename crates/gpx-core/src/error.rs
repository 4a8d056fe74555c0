//! Error types for gpx operations.
//!
//! Only a few operations in the stack can fail:
//! - inverting a singular matrix
//! - reading or writing texels through a buffer that is too short
//! - parsing an unknown texel format name
//!
//! Lossy conversions (half-float overflow/underflow, zero-length
//! normalization) are defined results, not errors.
//!
//! # Usage
//!
//! ```rust
//! use gpx_core::{Error, Result};
//!
//! fn check_len(buf: &[u8], needed: usize) -> Result<()> {
//!     if buf.len() < needed {
//!         return Err(Error::buffer_too_small("rgba8", needed, buf.len()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_len(&[0; 2], 4).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by gpx crates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Matrix determinant magnitude is at or below the singularity threshold.
    ///
    /// Returned by `Mat4::inverse`. No meaningful inverse exists, so callers
    /// usually treat this as a programming error.
    #[error("matrix is not invertible (determinant {determinant})")]
    SingularMatrix {
        /// Determinant that failed the check
        determinant: f32,
    },

    /// Texel buffer is shorter than the format requires.
    #[error("buffer too small for {format}: need {needed} bytes, got {got}")]
    BufferTooSmall {
        /// Format name
        format: &'static str,
        /// Bytes required
        needed: usize,
        /// Bytes available
        got: usize,
    },

    /// Texel format name was not recognized.
    #[error("unknown texel format: {0}")]
    UnknownFormat(String),
}

impl Error {
    /// Creates an [`Error::SingularMatrix`] error.
    #[inline]
    pub fn singular_matrix(determinant: f32) -> Self {
        Self::SingularMatrix { determinant }
    }

    /// Creates an [`Error::BufferTooSmall`] error.
    #[inline]
    pub fn buffer_too_small(format: &'static str, needed: usize, got: usize) -> Self {
        Self::BufferTooSmall { format, needed, got }
    }

    /// Creates an [`Error::UnknownFormat`] error.
    #[inline]
    pub fn unknown_format(name: impl Into<String>) -> Self {
        Self::UnknownFormat(name.into())
    }

    /// Returns `true` if this is a singular-matrix error.
    #[inline]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularMatrix { .. })
    }

    /// Returns `true` if this is a buffer-size error.
    #[inline]
    pub fn is_buffer_error(&self) -> bool {
        matches!(self, Self::BufferTooSmall { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_matrix() {
        let err = Error::singular_matrix(0.0);
        assert!(err.is_singular());
        assert!(!err.is_buffer_error());
        assert!(err.to_string().contains("not invertible"));
    }

    #[test]
    fn test_buffer_too_small() {
        let err = Error::buffer_too_small("rgba16f", 8, 3);
        let msg = err.to_string();
        assert!(msg.contains("rgba16f"));
        assert!(msg.contains("8"));
        assert!(msg.contains("3"));
        assert!(err.is_buffer_error());
    }

    #[test]
    fn test_unknown_format() {
        let err = Error::unknown_format("bc7");
        assert_eq!(err.to_string(), "unknown texel format: bc7");
    }
}
