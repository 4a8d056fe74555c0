//! 4x4 matrix type for object and camera transforms.
//!
//! [`Mat4`] builds rotation, scale and translation transforms and composes
//! them for upload to the GPU.
//!
//! # Convention
//!
//! Elements are stored as a flat row-major array (`m[4 * row + col]`) and
//! points are **row vectors** multiplied on the left:
//!
//! ```text
//!                   | m00 m01 m02 m03 |
//! [x y z w]    *    | m10 m11 m12 m13 |   = [x' y' z' w']
//!                   | m20 m21 m22 m23 |
//!                   | tx  ty  tz  m33 |
//! ```
//!
//! Translation occupies row 3, and `A * B` applies `A` before `B`.
//!
//! This block has the same 16-float memory image as a column-major matrix
//! for column vectors, which is what shader constant buffers and [`glam`]
//! expect, so no transpose is needed on upload.
//!
//! # Usage
//!
//! ```rust
//! use gpx_math::{Mat4, Vec3};
//!
//! let m = Mat4::scale(Vec3::splat(2.0)) * Mat4::translation(Vec3::new(1.0, 0.0, 0.0));
//! assert_eq!(m.transform_point(Vec3::ONE), Vec3::new(3.0, 2.0, 2.0));
//!
//! let inv = m.inverse().unwrap();
//! assert!((m * inv).abs_diff_eq(&Mat4::IDENTITY, 1e-6));
//! ```

use crate::{Quat, Vec3, Vec4};
use gpx_core::{Error, Result};
use std::ops::{Index, IndexMut, Mul};
use tracing::debug;

// Picks the three indices other than `i` as CYCLE[i + 1..=i + 3].
const CYCLE: [usize; 7] = [0, 1, 2, 3, 0, 1, 2];

/// A 4x4 transform matrix.
///
/// Stored row-major as 16 floats. Use [`Mat4::from_rows`] or
/// [`Mat4::from_array`] to build one from raw components.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    /// Elements in row-major order: `m[4 * row + col]`.
    pub m: [f32; 16],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [0.0; 16] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// [`Mat4::inverse`] rejects matrices with `|det| <= SINGULAR_EPSILON`.
    pub const SINGULAR_EPSILON: f32 = 1e-6;

    /// Creates a matrix from a row-major array.
    #[inline]
    pub const fn from_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// Creates a matrix from four rows.
    #[inline]
    pub const fn from_rows(r0: [f32; 4], r1: [f32; 4], r2: [f32; 4], r3: [f32; 4]) -> Self {
        Self {
            m: [
                r0[0], r0[1], r0[2], r0[3], //
                r1[0], r1[1], r1[2], r1[3], //
                r2[0], r2[1], r2[2], r2[3], //
                r3[0], r3[1], r3[2], r3[3],
            ],
        }
    }

    /// Returns a copy of the row-major elements.
    #[inline]
    pub const fn to_array(&self) -> [f32; 16] {
        self.m
    }

    /// Borrows the row-major elements, ready for a constant-buffer upload.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.m
    }

    /// Translation matrix (row 3 = `t`).
    #[inline]
    pub const fn translation(t: Vec3) -> Self {
        let mut r = Self::IDENTITY;
        r.m[12] = t.x;
        r.m[13] = t.y;
        r.m[14] = t.z;
        r
    }

    /// Axis-aligned scale matrix.
    #[inline]
    pub const fn scale(s: Vec3) -> Self {
        let mut r = Self::IDENTITY;
        r.m[0] = s.x;
        r.m[5] = s.y;
        r.m[10] = s.z;
        r
    }

    /// Element at `(row & 3, col & 3)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.m[4 * (row & 3) + (col & 3)]
    }

    /// Mutable element at `(row & 3, col & 3)`.
    ///
    /// Indices wrap modulo 4 instead of panicking.
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut f32 {
        &mut self.m[4 * (row & 3) + (col & 3)]
    }

    /// Returns row `i & 3`.
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        let base = 4 * (i & 3);
        Vec4::new(self.m[base], self.m[base + 1], self.m[base + 2], self.m[base + 3])
    }

    /// Returns column `i & 3`.
    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        let j = i & 3;
        Vec4::new(self.m[j], self.m[4 + j], self.m[8 + j], self.m[12 + j])
    }

    /// Overwrites row `i & 3`.
    #[inline]
    pub fn set_row(&mut self, i: usize, row: Vec4) {
        let base = 4 * (i & 3);
        self.m[base..base + 4].copy_from_slice(&row.to_array());
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let mut r = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                r.m[4 * col + row] = self.m[4 * row + col];
            }
        }
        r
    }

    /// Signed 3x3 minor of element `(row, col)`.
    ///
    /// The minor keeps the other three rows and columns in cyclic order,
    /// which does not change its determinant, and the checkerboard sign
    /// `(-1)^(row + col)` is applied.
    pub fn cofactor(&self, row: usize, col: usize) -> f32 {
        let (x, y) = (row & 3, col & 3);
        let r = [CYCLE[x + 1], CYCLE[x + 2], CYCLE[x + 3]];
        let c = [CYCLE[y + 1], CYCLE[y + 2], CYCLE[y + 3]];
        let e = |i: usize, j: usize| self.m[4 * r[i] + c[j]];

        let minor = e(0, 0) * e(1, 1) * e(2, 2)
            + e(0, 1) * e(1, 2) * e(2, 0)
            + e(0, 2) * e(1, 0) * e(2, 1)
            - e(2, 0) * e(1, 1) * e(0, 2)
            - e(2, 1) * e(1, 2) * e(0, 0)
            - e(2, 2) * e(1, 0) * e(0, 1);

        if (x + y) & 1 == 1 { -minor } else { minor }
    }

    /// Determinant by Laplace expansion along row 0.
    pub fn determinant(&self) -> f32 {
        (0..4).map(|j| self.m[j] * self.cofactor(0, j)).sum()
    }

    /// Inverse via the adjugate (transposed cofactor matrix) over the
    /// determinant.
    ///
    /// # Errors
    ///
    /// [`Error::SingularMatrix`] when `|det| <= SINGULAR_EPSILON` or the
    /// determinant is NaN.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det.is_nan() || det.abs() <= Self::SINGULAR_EPSILON {
            debug!(determinant = det, "matrix is not invertible");
            return Err(Error::singular_matrix(det));
        }

        let inv_det = 1.0 / det;
        let mut r = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                r.m[4 * col + row] = self.cofactor(row, col) * inv_det;
            }
        }
        Ok(r)
    }

    /// Rotation matrix for a quaternion.
    ///
    /// The quaternion is normalized first; a zero quaternion gives the
    /// identity. The translation row is zero and `m33` is 1.
    pub fn from_quat(q: Quat) -> Self {
        let q = q.normalize();

        let xs = 2.0 * q.x;
        let ys = 2.0 * q.y;
        let zs = 2.0 * q.z;

        let (wx, wy, wz) = (q.w * xs, q.w * ys, q.w * zs);
        let (xx, xy, xz) = (q.x * xs, q.x * ys, q.x * zs);
        let (yy, yz, zz) = (q.y * ys, q.y * zs, q.z * zs);

        Self::from_rows(
            [1.0 - yy - zz, xy + wz, xz - wy, 0.0],
            [xy - wz, 1.0 - xx - zz, yz + wx, 0.0],
            [xz + wy, yz - wx, 1.0 - xx - yy, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Position/rotation/scale composite: scale, then rotate, then translate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gpx_math::{quat, Mat4, Vec3};
    ///
    /// let m = Mat4::prs(Vec3::new(1.0, 2.0, 3.0), quat::IDENTITY, Vec3::splat(2.0));
    /// assert_eq!(m.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
    /// assert_eq!(m.transform_point(Vec3::X), Vec3::new(3.0, 2.0, 3.0));
    /// ```
    pub fn prs(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        let mut r = Self::from_quat(rotation);
        for (row, s) in scale.to_array().into_iter().enumerate() {
            for v in &mut r.m[4 * row..4 * row + 4] {
                *v *= s;
            }
        }
        r.m[12] = position.x;
        r.m[13] = position.y;
        r.m[14] = position.z;
        r
    }

    /// Rotation of `angle` radians about the X axis (Y turns toward Z).
    pub fn rot_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut r = Self::IDENTITY;
        r.m[5] = c;
        r.m[6] = s;
        r.m[9] = -s;
        r.m[10] = c;
        r
    }

    /// Rotation of `angle` radians about the Y axis (Z turns toward X).
    pub fn rot_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut r = Self::IDENTITY;
        r.m[0] = c;
        r.m[2] = -s;
        r.m[8] = s;
        r.m[10] = c;
        r
    }

    /// Rotation of `angle` radians about the Z axis (X turns toward Y).
    pub fn rot_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut r = Self::IDENTITY;
        r.m[0] = c;
        r.m[1] = s;
        r.m[4] = -s;
        r.m[5] = c;
        r
    }

    /// Pitch/yaw/roll composite: `rot_x(pitch) * rot_y(yaw) * rot_z(roll)`.
    ///
    /// With row vectors the pitch is applied first and the roll last.
    pub fn pyr(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self::rot_x(pitch) * Self::rot_y(yaw) * Self::rot_z(roll)
    }

    /// Matrix product `self * other`.
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut r = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                r.m[4 * i + j] = self.m[4 * i] * other.m[j]
                    + self.m[4 * i + 1] * other.m[4 + j]
                    + self.m[4 * i + 2] * other.m[8 + j]
                    + self.m[4 * i + 3] * other.m[12 + j];
            }
        }
        r
    }

    /// Row vector times matrix: `v * self`.
    pub fn transform(&self, v: Vec4) -> Vec4 {
        Vec4::new(
            v.x * self.m[0] + v.y * self.m[4] + v.z * self.m[8] + v.w * self.m[12],
            v.x * self.m[1] + v.y * self.m[5] + v.z * self.m[9] + v.w * self.m[13],
            v.x * self.m[2] + v.y * self.m[6] + v.z * self.m[10] + v.w * self.m[14],
            v.x * self.m[3] + v.y * self.m[7] + v.z * self.m[11] + v.w * self.m[15],
        )
    }

    /// Transforms a point (`w = 1`, translation applies). No perspective divide.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.transform(p.extend(1.0)).truncate()
    }

    /// Transforms a direction (`w = 0`, translation ignored).
    #[inline]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        self.transform(v.extend(0.0)).truncate()
    }

    /// Returns true if every element differs by at most `eps`.
    pub fn abs_diff_eq(&self, other: &Self, eps: f32) -> bool {
        self.m.iter().zip(other.m.iter()).all(|(a, b)| (a - b).abs() <= eps)
    }

    /// Returns true if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|x| x.is_finite())
    }

    /// Converts to glam. The element array is passed through unchanged.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array(&self.m)
    }

    /// Creates from glam.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_array(m.to_cols_array())
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Vec4 * Mat4 (row vector)
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Mat4) -> Vec4 {
        rhs.transform(self)
    }
}

impl Index<(usize, usize)> for Mat4 {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.m[4 * (row & 3) + (col & 3)]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        self.at_mut(row, col)
    }
}

impl From<glam::Mat4> for Mat4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_glam(m)
    }
}

impl From<Mat4> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4) -> glam::Mat4 {
        m.to_glam()
    }
}
