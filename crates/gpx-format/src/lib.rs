//! # gpx-format
//!
//! Texel formats for GPU textures and render targets.
//!
//! A [`TexelFormat`] converts a [`Vec4`](gpx_math::Vec4) color to and from
//! the raw little-endian byte layout of one texel. The set of formats is
//! closed; each variant selects a row of a static conversion table.
//!
//! - [`TexelFormat`] - the format enum and single-texel `read`/`write`
//! - [`bulk`] - whole-buffer conversion (parallel with the `rayon` feature)
//!
//! # Usage
//!
//! ```rust
//! use gpx_format::TexelFormat;
//! use gpx_math::Vec4;
//!
//! let mut texel = [0u8; 8];
//! TexelFormat::Rgba16F.write(&mut texel, Vec4::new(1.0, 0.5, 0.25, 1.0)).unwrap();
//! let color = TexelFormat::Rgba16F.read(&texel).unwrap();
//! assert_eq!(color, Vec4::new(1.0, 0.5, 0.25, 1.0));
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` - parallel bulk conversion (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bulk;
mod texel;

pub use bulk::{decode_slice, encode_slice};
pub use texel::TexelFormat;
