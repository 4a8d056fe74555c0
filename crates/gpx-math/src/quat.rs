//! Quaternion helpers.
//!
//! A rotation quaternion is stored in a [`Vec4`]: `(x, y, z)` is the rotation
//! axis scaled by `sin(angle / 2)` and `w` is `cos(angle / 2)`. Normalization
//! is plain [`Vec4::normalize`].
//!
//! # Convention
//!
//! [`mul`] is the Hamilton product, so `mul(b, a)` rotates by `a` first and
//! then by `b`. With row-vector matrices the order flips:
//!
//! ```text
//! Mat4::from_quat(a) * Mat4::from_quat(b) == Mat4::from_quat(mul(b, a))
//! ```
//!
//! # Usage
//!
//! ```rust
//! use gpx_math::{quat, Vec3};
//! use std::f32::consts::PI;
//!
//! let half_turn = quat::from_angle_axis(PI, Vec3::Y);
//! let v = quat::rotate(half_turn, Vec3::X);
//! assert!(v.abs_diff_eq(-Vec3::X, 1e-6));
//! ```

use crate::{Vec3, Vec4};

/// Rotation quaternion `(x, y, z, w)`.
pub type Quat = Vec4;

/// The no-rotation quaternion `(0, 0, 0, 1)`.
pub const IDENTITY: Quat = Vec4::W;

/// Builds a rotation of `angle` radians about `axis`.
///
/// `axis` should be unit length; it is not normalized here.
#[inline]
pub fn from_angle_axis(angle: f32, axis: Vec3) -> Quat {
    let (s, c) = (angle * 0.5).sin_cos();
    Vec4::from_vec3(axis * s, c)
}

/// Hamilton product `a * b` (rotate by `b`, then by `a`).
#[inline]
pub fn mul(a: Quat, b: Quat) -> Quat {
    Vec4::new(
        a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
        a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
        a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
    )
}

/// Conjugate; the inverse rotation for a unit quaternion.
#[inline]
pub fn conjugate(q: Quat) -> Quat {
    Vec4::new(-q.x, -q.y, -q.z, q.w)
}

/// Rotates `v` by `q` (assumed unit length).
#[inline]
pub fn rotate(q: Quat, v: Vec3) -> Vec3 {
    let u = q.truncate();
    let t = u.cross(v) * 2.0;
    v + t * q.w + u.cross(t)
}
