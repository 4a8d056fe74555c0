//! # gpx-core
//!
//! Core types shared by every gpx crate.
//!
//! - [`Half`] - 16-bit reduced-precision float used for texel channels
//! - [`Error`], [`Result`] - error type for the fallible operations of the stack
//!
//! ## Crate Structure
//!
//! ```text
//! gpx-core (this crate)
//!    ^
//!    |
//!    +-- gpx-math (vectors, quaternions, 4x4 matrices)
//!    +-- gpx-format (texel formats)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use gpx_core::Half;
//!
//! let h = Half::from_f32(0.5);
//! assert_eq!(h.to_bits(), 0x3800);
//! assert_eq!(h.to_f32(), 0.5);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod half;

pub use error::{Error, Result};
pub use half::Half;
