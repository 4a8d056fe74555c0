//! # gpx-math
//!
//! Geometry types for a real-time rendering pipeline.
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - small float vectors (`Vec4` doubles as color payload)
//! - [`Quat`] and the [`quat`] module - rotations stored as `(axis * sin(a/2), cos(a/2))`
//! - [`Mat4`] - 4x4 transform matrix
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **row vectors**:
//!
//! ```text
//! v' = v * M          (translation lives in row 3)
//! ```
//!
//! so `A * B` applies `A` first, then `B`. The 16 floats of a [`Mat4`] can be
//! uploaded to a shader constant buffer as-is.
//!
//! # Usage
//!
//! ```rust
//! use gpx_math::{quat, Mat4, Vec3};
//! use std::f32::consts::FRAC_PI_2;
//!
//! let spin = quat::from_angle_axis(FRAC_PI_2, Vec3::Z);
//! let world = Mat4::prs(Vec3::new(1.0, 2.0, 3.0), spin, Vec3::ONE);
//!
//! let p = world.transform_point(Vec3::X);
//! assert!(p.abs_diff_eq(Vec3::new(1.0, 3.0, 3.0), 1e-5));
//! ```
//!
//! # Dependencies
//!
//! - [`gpx_core`] - error type
//! - [`glam`] - interop conversions
//! - [`tracing`] - diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Elementwise operator impls shared by the vector types.
macro_rules! impl_vec_ops {
    ($t:ident, $($f:ident : $i:literal),+) => {
        impl std::ops::Add for $t {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl std::ops::Sub for $t {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl std::ops::Neg for $t {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }

        // component-wise
        impl std::ops::Mul for $t {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { $($f: self.$f * rhs.$f),+ }
            }
        }

        impl std::ops::Mul<f32> for $t {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f32) -> Self {
                Self { $($f: self.$f * rhs),+ }
            }
        }

        impl std::ops::Mul<$t> for f32 {
            type Output = $t;

            #[inline]
            fn mul(self, rhs: $t) -> $t {
                rhs * self
            }
        }

        impl std::ops::Div<f32> for $t {
            type Output = Self;

            #[inline]
            fn div(self, rhs: f32) -> Self {
                Self { $($f: self.$f / rhs),+ }
            }
        }

        impl std::ops::AddAssign for $t {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$f += rhs.$f;)+
            }
        }

        impl std::ops::SubAssign for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$f -= rhs.$f;)+
            }
        }

        impl std::ops::MulAssign<f32> for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                $(self.$f *= rhs;)+
            }
        }

        impl std::ops::Index<usize> for $t {
            type Output = f32;

            #[inline]
            fn index(&self, i: usize) -> &f32 {
                match i {
                    $($i => &self.$f,)+
                    _ => panic!("index {} out of range for {}", i, stringify!($t)),
                }
            }
        }

        impl std::ops::IndexMut<usize> for $t {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut f32 {
                match i {
                    $($i => &mut self.$f,)+
                    _ => panic!("index {} out of range for {}", i, stringify!($t)),
                }
            }
        }
    };
}

mod mat4;
pub mod quat;
mod vec2;
mod vec3;
mod vec4;

pub use mat4::*;
pub use quat::Quat;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;
