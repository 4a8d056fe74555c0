//! 4D vector type.
//!
//! [`Vec4`] is the homogeneous position type, the RGBA color payload read and
//! written by texel formats, and the storage of a [`Quat`](crate::Quat).

use crate::Vec3;

/// A 4D vector.
///
/// For colors: x=R, y=G, z=B, w=A.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec4 {
    /// X component (R for colors)
    pub x: f32,
    /// Y component (G for colors)
    pub y: f32,
    /// Z component (B for colors)
    pub z: f32,
    /// W component (A for colors)
    pub w: f32,
}

impl Vec4 {
    /// Zero vector (0, 0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// One vector (1, 1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// Unit Z vector (0, 0, 1, 0).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Unit W vector (0, 0, 0, 1). Also the identity quaternion.
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Builds from a 3D vector and a `w` component.
    #[inline]
    pub const fn from_vec3(v: Vec3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Drops `w`.
    #[inline]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit-length copy, or [`Vec4::ZERO`] for a zero or non-finite vector.
    #[inline]
    pub fn normalize(self) -> Self {
        self.try_normalize().unwrap_or(Self::ZERO)
    }

    /// Unit-length copy, or `None` when every component is zero or any is not finite.
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
        self.x.abs().max(self.y.abs()).max(self.z.abs().max(self.w.abs()))
    }

    /// Linear interpolation.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Clamps every component to [0, 1].
    #[inline]
    pub fn clamp01(self) -> Self {
        Self::new(
            self.x.clamp(0.0, 1.0),
            self.y.clamp(0.0, 1.0),
            self.z.clamp(0.0, 1.0),
            self.w.clamp(0.0, 1.0),
        )
    }

    /// Returns true if every component differs by at most `eps`.
    #[inline]
    pub fn abs_diff_eq(self, other: Self, eps: f32) -> bool {
        (self.x - other.x).abs() <= eps
            && (self.y - other.y).abs() <= eps
            && (self.z - other.z).abs() <= eps
            && (self.w - other.w).abs() <= eps
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl_vec_ops!(Vec4, x: 0, y: 1, z: 2, w: 3);

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec4> for [f32; 4] {
    #[inline]
    fn from(v: Vec4) -> [f32; 4] {
        v.to_array()
    }
}

impl From<glam::Vec4> for Vec4 {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::from_array(v.to_array())
    }
}

impl From<Vec4> for glam::Vec4 {
    #[inline]
    fn from(v: Vec4) -> glam::Vec4 {
        glam::Vec4::from_array(v.to_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec4_constants() {
        assert_eq!(Vec4::ONE, Vec4::X + Vec4::Y + Vec4::Z + Vec4::W);
        for (i, unit) in [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W].into_iter().enumerate() {
            assert_eq!(unit[i], 1.0);
            assert_eq!(unit.length(), 1.0);
        }
    }

    #[test]
    fn test_vec4_ops() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a + a, a * 2.0);
        assert_eq!(a - a, Vec4::ZERO);
        assert_eq!(a.dot(Vec4::ONE), 10.0);
        assert_eq!(a / 2.0, Vec4::new(0.5, 1.0, 1.5, 2.0));
    }

    #[test]
    fn test_vec4_truncate() {
        let v = Vec4::from_vec3(Vec3::new(1.0, 2.0, 3.0), 9.0);
        assert_eq!(v.w, 9.0);
        assert_eq!(v.truncate(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_vec4_normalize_zero() {
        assert_eq!(Vec4::ZERO.normalize(), Vec4::ZERO);
        let n = Vec4::new(2.0, 0.0, 0.0, 0.0).normalize();
        assert_eq!(n, Vec4::X);
    }

    #[test]
    fn test_vec4_normalize_huge() {
        assert_eq!(Vec4::new(0.0, 0.0, 0.0, 1e25).normalize(), Vec4::W);
        let n = Vec4::splat(f32::MAX).normalize();
        assert!(n.abs_diff_eq(Vec4::splat(0.5), 1e-6));
    }

    #[test]
    fn test_vec4_clamp01() {
        let c = Vec4::new(-0.5, 0.5, 1.5, 1.0).clamp01();
        assert_eq!(c, Vec4::new(0.0, 0.5, 1.0, 1.0));
    }
}
