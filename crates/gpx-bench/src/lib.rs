//! Shared inputs for the gpx benchmarks.
//!
//! Run with: `cargo bench -p gpx-bench`

use gpx_math::{quat, Mat4, Vec3, Vec4};

/// `n` object transforms spread over a grid, each with its own rotation.
pub fn transforms(n: usize) -> Vec<Mat4> {
    (0..n)
        .map(|i| {
            let t = i as f32;
            let axis = Vec3::new(t.sin(), t.cos(), 0.5).normalize();
            Mat4::prs(
                Vec3::new(t, t * 0.5, -t),
                quat::from_angle_axis(t * 0.01, axis),
                Vec3::splat(1.0 + (i % 3) as f32),
            )
        })
        .collect()
}

/// `n` colors ramping through [0, 4] (HDR range for half-float tests).
pub fn colors(n: usize) -> Vec<Vec4> {
    (0..n)
        .map(|i| {
            let t = 4.0 * i as f32 / n.max(1) as f32;
            Vec4::new(t, t * 0.5, 1.0 - t * 0.25, 1.0)
        })
        .collect()
}
