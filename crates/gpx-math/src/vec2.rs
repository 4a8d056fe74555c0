//! 2D vector type.

/// A 2D vector (texture coordinates, screen positions).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vec2 {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// One vector (1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Unit X vector (1, 0).
    pub const X: Self = Self::new(1.0, 0.0);

    /// Unit Y vector (0, 1).
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
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

    /// Unit-length copy, or [`Vec2::ZERO`] when the length is zero.
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
        self.x.abs().max(self.y.abs())
    }

    /// Linear interpolation: `self + (other - self) * t`.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Returns true if every component differs by at most `eps`.
    #[inline]
    pub fn abs_diff_eq(self, other: Self, eps: f32) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl_vec_ops!(Vec2, x: 0, y: 1);

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from(a: [f32; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(v: Vec2) -> [f32; 2] {
        v.to_array()
    }
}

impl From<glam::Vec2> for Vec2 {
    #[inline]
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2> for glam::Vec2 {
    #[inline]
    fn from(v: Vec2) -> glam::Vec2 {
        glam::Vec2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_constants() {
        assert_eq!(Vec2::ZERO, Vec2::splat(0.0));
        assert_eq!(Vec2::ONE, Vec2::X + Vec2::Y);
        assert_eq!(Vec2::X.dot(Vec2::Y), 0.0);
    }

    #[test]
    fn test_vec2_ops() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 5.0);
        assert_eq!(a + b, Vec2::new(4.0, 7.0));
        assert_eq!(b - a, Vec2::new(2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a * b, Vec2::new(3.0, 10.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_eq!(a.dot(b), 13.0);
    }

    #[test]
    fn test_vec2_normalize() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert!(v.normalize().abs_diff_eq(Vec2::new(0.6, 0.8), 1e-6));
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
        assert!(Vec2::ZERO.try_normalize().is_none());
    }

    #[test]
    fn test_vec2_normalize_tiny() {
        let v = Vec2::new(3e-30, 4e-30).normalize();
        assert!(v.abs_diff_eq(Vec2::new(0.6, 0.8), 1e-6));
        assert_eq!(Vec2::new(3e-30, 4e-30).max_abs(), 4e-30);
    }

    #[test]
    fn test_vec2_index() {
        let mut v = Vec2::new(1.0, 2.0);
        v[1] = 7.0;
        assert_eq!(v[0], 1.0);
        assert_eq!(v.y, 7.0);
    }

    #[test]
    #[should_panic]
    fn test_vec2_index_out_of_range() {
        let v = Vec2::ZERO;
        let _ = v[2];
    }
}
