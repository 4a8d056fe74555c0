//! Whole-buffer texel conversion.
//!
//! Converts slices of colors to packed texel bytes and back. With the
//! `rayon` feature the work is split across threads in row-sized chunks;
//! results are identical either way.
//!
//! # Example
//!
//! ```rust
//! use gpx_format::{bulk, TexelFormat};
//! use gpx_math::Vec4;
//!
//! let colors = vec![Vec4::new(0.0, 0.5, 1.0, 1.0); 16];
//! let mut bytes = vec![0u8; colors.len() * TexelFormat::Rgba8.size()];
//! bulk::encode_slice(TexelFormat::Rgba8, &colors, &mut bytes).unwrap();
//!
//! let back = bulk::decode_slice(TexelFormat::Rgba8, &bytes).unwrap();
//! assert_eq!(back.len(), 16);
//! ```

use crate::TexelFormat;
use gpx_core::{Error, Result};
use gpx_math::Vec4;
use tracing::trace;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Texels converted per parallel work item.
#[cfg(feature = "rayon")]
const CHUNK_TEXELS: usize = 1024;

/// Encodes `colors` into `dst`, one texel after another.
///
/// Bytes of `dst` past `colors.len() * format.size()` are left untouched.
///
/// # Errors
///
/// [`Error::BufferTooSmall`] if `dst` cannot hold every color.
pub fn encode_slice(format: TexelFormat, colors: &[Vec4], dst: &mut [u8]) -> Result<()> {
    let size = format.size();
    let needed = colors.len() * size;
    if dst.len() < needed {
        return Err(Error::buffer_too_small(format.name(), needed, dst.len()));
    }
    trace!(format = format.name(), texels = colors.len(), "encode_slice");

    let dst = &mut dst[..needed];

    #[cfg(feature = "rayon")]
    dst.par_chunks_mut(CHUNK_TEXELS * size)
        .zip(colors.par_chunks(CHUNK_TEXELS))
        .for_each(|(bytes, chunk)| encode_chunk(format, chunk, bytes));

    #[cfg(not(feature = "rayon"))]
    encode_chunk(format, colors, dst);

    Ok(())
}

/// Decodes every texel of `src`.
///
/// # Errors
///
/// [`Error::BufferTooSmall`] if `src` ends with a partial texel.
pub fn decode_slice(format: TexelFormat, src: &[u8]) -> Result<Vec<Vec4>> {
    let size = format.size();
    let rem = src.len() % size;
    if rem != 0 {
        return Err(Error::buffer_too_small(format.name(), src.len() - rem + size, src.len()));
    }
    let count = src.len() / size;
    trace!(format = format.name(), texels = count, "decode_slice");

    let mut out = vec![Vec4::ZERO; count];

    #[cfg(feature = "rayon")]
    out.par_chunks_mut(CHUNK_TEXELS)
        .zip(src.par_chunks(CHUNK_TEXELS * size))
        .for_each(|(chunk, bytes)| decode_chunk(format, bytes, chunk));

    #[cfg(not(feature = "rayon"))]
    decode_chunk(format, src, &mut out);

    Ok(out)
}

fn encode_chunk(format: TexelFormat, colors: &[Vec4], dst: &mut [u8]) {
    for (texel, &color) in dst.chunks_exact_mut(format.size()).zip(colors) {
        format.write_texel(texel, color);
    }
}

fn decode_chunk(format: TexelFormat, src: &[u8], out: &mut [Vec4]) {
    for (color, texel) in out.iter_mut().zip(src.chunks_exact(format.size())) {
        *color = format.read_texel(texel);
    }
}
