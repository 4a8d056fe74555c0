//! 3D vector type for positions, directions and scales.
//!
//! # Usage
//!
//! ```rust
//! use gpx_math::Vec3;
//!
//! let up = Vec3::X.cross(Vec3::Y);
//! assert_eq!(up, Vec3::Z);
//!
//! // Degenerate input normalizes to zero instead of NaN
//! assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
//! ```

use crate::Vec4;

/// A 3D vector.
///
/// # Example
///
/// ```rust
/// use gpx_math::Vec3;
///
/// let v = Vec3::new(1.0, 2.0, 2.0);
/// assert_eq!(v.length(), 3.0);
/// assert_eq!(v[2], 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Appends a `w` component.
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product (right-handed: `X x Y = Z`).
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns a unit-length copy.
    ///
    /// A zero (or non-finite) vector yields [`Vec3::ZERO`]
    /// rather than NaN components.
    #[inline]
    pub fn normalize(self) -> Self {
        self.try_normalize().unwrap_or(Self::ZERO)
    }

    /// Returns a unit-length copy, or `None` for a zero or non-finite vector.
    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        // Prescale so the squared length neither overflows nor underflows.
        let s = self.max_abs();
        if !(s > 0.0 && self.is_finite()) {
            return None;
        }
        let v = self / s;
        Some(v / v.length())
    }

    /// Largest absolute component.
    #[inline]
    pub fn max_abs(self) -> f32 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    /// Linear interpolation.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Returns true if every component differs by at most `eps`.
    #[inline]
    pub fn abs_diff_eq(self, other: Self, eps: f32) -> bool {
        (self.x - other.x).abs() <= eps
            && (self.y - other.y).abs() <= eps
            && (self.z - other.z).abs() <= eps
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl_vec_ops!(Vec3, x: 0, y: 1, z: 2);

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> [f32; 3] {
        v.to_array()
    }
}

impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3) -> glam::Vec3 {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_constants() {
        assert_eq!(Vec3::ONE, Vec3::X + Vec3::Y + Vec3::Z);
        assert_eq!(Vec3::ZERO, Vec3::default());
    }

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vec3_cross() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);

        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-2.0, 0.5, 4.0);
        let c = a.cross(b);
        assert!(c.dot(a).abs() < 1e-5);
        assert!(c.dot(b).abs() < 1e-5);
    }

    #[test]
    fn test_vec3_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));

        let mut c = a;
        c += b;
        c -= Vec3::ONE;
        c *= 0.5;
        assert_eq!(c, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_vec3_normalize() {
        let v = Vec3::new(0.0, 3.0, 4.0).normalize();
        assert!(v.abs_diff_eq(Vec3::new(0.0, 0.6, 0.8), 1e-6));
        assert!((v.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_vec3_normalize_zero() {
        let n = Vec3::ZERO.normalize();
        assert_eq!(n, Vec3::ZERO);
        assert!(n.is_finite());
        assert!(Vec3::ZERO.try_normalize().is_none());
        assert_eq!(Vec3::splat(f32::NAN).normalize(), Vec3::ZERO);
    }

    #[test]
    fn test_vec3_normalize_extreme_magnitudes() {
        // Squared length would overflow / underflow without prescaling.
        assert_eq!(Vec3::new(1e20, 0.0, 0.0).normalize(), Vec3::X);
        assert_eq!(Vec3::new(1e-25, 0.0, 0.0).normalize(), Vec3::X);
        assert_eq!(Vec3::new(0.0, -1e-40, 0.0).normalize(), -Vec3::Y);

        let big = Vec3::new(3e30, 4e30, 0.0).normalize();
        assert!(big.abs_diff_eq(Vec3::new(0.6, 0.8, 0.0), 1e-6));
        assert!(Vec3::new(f32::INFINITY, 1.0, 0.0).try_normalize().is_none());
    }

    #[test]
    fn test_vec3_extend() {
        let v = Vec3::new(1.0, 2.0, 3.0).extend(1.0);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_vec3_lerp() {
        assert_eq!(Vec3::ZERO.lerp(Vec3::ONE, 0.5), Vec3::splat(0.5));
    }

    #[test]
    fn test_vec3_glam() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        let g: glam::Vec3 = v.into();
        assert_eq!(Vec3::from(g), v);
    }
}
