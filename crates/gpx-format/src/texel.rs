//! Single-texel conversions.

use gpx_core::{Error, Half, Result};
use gpx_math::Vec4;
use std::fmt;
use std::str::FromStr;

/// Supported texel layouts.
///
/// | Format        | Bytes | Channels | Storage                       |
/// |---------------|-------|----------|-------------------------------|
/// | `Rgba8`       | 4     | 4        | unorm8                        |
/// | `Rgba8Srgb`   | 4     | 4        | unorm8, sampled as sRGB       |
/// | `Rgba16F`     | 8     | 4        | [`Half`]                      |
/// | `Rgba16Uint`  | 8     | 4        | u16, `x * 65535`              |
/// | `R32F`        | 4     | 1        | f32                           |
/// | `R16Uint`     | 2     | 1        | u16, `x * 65535`              |
///
/// Single-channel formats read back as `(r, 0, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TexelFormat {
    /// 8-bit unsigned normalized RGBA.
    Rgba8,
    /// 8-bit unsigned normalized RGBA with sRGB sampling.
    ///
    /// Bytes are stored as given; the device applies the transfer curve.
    Rgba8Srgb,
    /// 16-bit half-float RGBA.
    Rgba16F,
    /// 16-bit unsigned integer RGBA holding `[0, 1]` scaled by 65535.
    Rgba16Uint,
    /// 32-bit float red channel.
    R32F,
    /// 16-bit unsigned integer red channel holding `[0, 1]` scaled by 65535.
    R16Uint,
}

/// Per-format entry of the conversion table.
struct Codec {
    name: &'static str,
    size: usize,
    channels: usize,
    write: fn(&mut [u8], Vec4),
    read: fn(&[u8]) -> Vec4,
}

static RGBA8: Codec = Codec {
    name: "rgba8",
    size: 4,
    channels: 4,
    write: write_unorm8x4,
    read: read_unorm8x4,
};

static RGBA8_SRGB: Codec = Codec {
    name: "rgba8_srgb",
    size: 4,
    channels: 4,
    write: write_unorm8x4,
    read: read_unorm8x4,
};

static RGBA16F: Codec = Codec {
    name: "rgba16f",
    size: 8,
    channels: 4,
    write: write_halfx4,
    read: read_halfx4,
};

static RGBA16_UINT: Codec = Codec {
    name: "rgba16_uint",
    size: 8,
    channels: 4,
    write: write_unorm16x4,
    read: read_unorm16x4,
};

static R32F: Codec = Codec {
    name: "r32f",
    size: 4,
    channels: 1,
    write: write_f32x1,
    read: read_f32x1,
};

static R16_UINT: Codec = Codec {
    name: "r16_uint",
    size: 2,
    channels: 1,
    write: write_unorm16x1,
    read: read_unorm16x1,
};

impl TexelFormat {
    /// Every format, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Rgba8,
        Self::Rgba8Srgb,
        Self::Rgba16F,
        Self::Rgba16Uint,
        Self::R32F,
        Self::R16Uint,
    ];

    fn codec(self) -> &'static Codec {
        match self {
            Self::Rgba8 => &RGBA8,
            Self::Rgba8Srgb => &RGBA8_SRGB,
            Self::Rgba16F => &RGBA16F,
            Self::Rgba16Uint => &RGBA16_UINT,
            Self::R32F => &R32F,
            Self::R16Uint => &R16_UINT,
        }
    }

    /// Bytes per texel.
    #[inline]
    pub fn size(self) -> usize {
        self.codec().size
    }

    /// Number of stored channels.
    #[inline]
    pub fn channels(self) -> usize {
        self.codec().channels
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[inline]
    pub fn name(self) -> &'static str {
        self.codec().name
    }

    /// Whether channels are stored as floating point.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Rgba16F | Self::R32F)
    }

    /// Whether the device decodes this format as sRGB when sampling.
    #[inline]
    pub const fn is_srgb(self) -> bool {
        matches!(self, Self::Rgba8Srgb)
    }

    /// Encodes `color` into the first [`size`](Self::size) bytes of `dst`.
    ///
    /// Normalized integer formats clamp to `[0, 1]` and round; float formats
    /// store the value as is (half floats flush out-of-range values).
    ///
    /// # Errors
    ///
    /// [`Error::BufferTooSmall`] if `dst` is shorter than one texel.
    pub fn write(self, dst: &mut [u8], color: Vec4) -> Result<()> {
        let codec = self.codec();
        let dst_len = dst.len();
        let texel = dst
            .get_mut(..codec.size)
            .ok_or_else(|| Error::buffer_too_small(codec.name, codec.size, dst_len))?;
        (codec.write)(texel, color);
        Ok(())
    }

    /// Decodes the texel in the first [`size`](Self::size) bytes of `src`.
    ///
    /// # Errors
    ///
    /// [`Error::BufferTooSmall`] if `src` is shorter than one texel.
    pub fn read(self, src: &[u8]) -> Result<Vec4> {
        let codec = self.codec();
        let texel = src
            .get(..codec.size)
            .ok_or_else(|| Error::buffer_too_small(codec.name, codec.size, src.len()))?;
        Ok((codec.read)(texel))
    }

    // Unchecked variants for the bulk paths, which validate lengths up front.
    pub(crate) fn write_texel(self, dst: &mut [u8], color: Vec4) {
        (self.codec().write)(dst, color)
    }

    pub(crate) fn read_texel(self, src: &[u8]) -> Vec4 {
        (self.codec().read)(src)
    }
}

impl fmt::Display for TexelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TexelFormat {
    type Err = Error;

    /// Parses a format name (case-insensitive).
    ///
    /// # Example
    /// ```rust
    /// use gpx_format::TexelFormat;
    /// assert_eq!("RGBA16F".parse::<TexelFormat>().unwrap(), TexelFormat::Rgba16F);
    /// assert!("bc7".parse::<TexelFormat>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::unknown_format(s))
    }
}

// Inputs are already clamped to [0, 1]; NaN saturates to 0 in the cast.
#[inline]
fn to_unorm8(v: f32) -> u8 {
    (v * 255.0 + 0.5) as u8
}

#[inline]
fn to_unorm16(v: f32) -> u16 {
    (v * 65535.0 + 0.5) as u16
}

fn write_unorm8x4(dst: &mut [u8], c: Vec4) {
    for (d, v) in dst.iter_mut().zip(c.clamp01().to_array()) {
        *d = to_unorm8(v);
    }
}

fn read_unorm8x4(src: &[u8]) -> Vec4 {
    Vec4::new(
        src[0] as f32 / 255.0,
        src[1] as f32 / 255.0,
        src[2] as f32 / 255.0,
        src[3] as f32 / 255.0,
    )
}

fn write_halfx4(dst: &mut [u8], c: Vec4) {
    for (d, v) in dst.chunks_exact_mut(2).zip(c.to_array()) {
        d.copy_from_slice(&Half::from_f32(v).to_le_bytes());
    }
}

fn read_halfx4(src: &[u8]) -> Vec4 {
    let h = |i: usize| Half::from_le_bytes([src[2 * i], src[2 * i + 1]]).to_f32();
    Vec4::new(h(0), h(1), h(2), h(3))
}

fn write_unorm16x4(dst: &mut [u8], c: Vec4) {
    for (d, v) in dst.chunks_exact_mut(2).zip(c.clamp01().to_array()) {
        d.copy_from_slice(&to_unorm16(v).to_le_bytes());
    }
}

fn read_unorm16x4(src: &[u8]) -> Vec4 {
    let u = |i: usize| u16::from_le_bytes([src[2 * i], src[2 * i + 1]]) as f32 / 65535.0;
    Vec4::new(u(0), u(1), u(2), u(3))
}

fn write_f32x1(dst: &mut [u8], c: Vec4) {
    dst[..4].copy_from_slice(&c.x.to_le_bytes());
}

fn read_f32x1(src: &[u8]) -> Vec4 {
    Vec4::new(f32::from_le_bytes([src[0], src[1], src[2], src[3]]), 0.0, 0.0, 0.0)
}

fn write_unorm16x1(dst: &mut [u8], c: Vec4) {
    dst[..2].copy_from_slice(&to_unorm16(c.clamp01().x).to_le_bytes());
}

fn read_unorm16x1(src: &[u8]) -> Vec4 {
    Vec4::new(u16::from_le_bytes([src[0], src[1]]) as f32 / 65535.0, 0.0, 0.0, 0.0)
}
