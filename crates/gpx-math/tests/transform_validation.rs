//! Transform validation tests.
//!
//! Checks the matrix and quaternion builders against hand-computed
//! reference values and against each other.

use gpx_math::{quat, Mat4, Vec3, Vec4};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

const TOL: f32 = 1e-5;

// ============================================================================
// Reference matrices
// ============================================================================

/// Invertible matrices with their known determinants.
fn reference_matrices() -> Vec<(Mat4, f32)> {
    vec![
        (Mat4::IDENTITY, 1.0),
        (Mat4::scale(Vec3::new(2.0, 3.0, 4.0)), 24.0),
        (Mat4::translation(Vec3::new(5.0, -2.0, 1.0)), 1.0),
        (Mat4::rot_y(0.4), 1.0),
        (
            Mat4::from_rows(
                [2.0, 0.5, -1.0, 0.0],
                [1.0, 3.0, 0.0, 2.0],
                [0.0, -1.0, 4.0, 1.0],
                [3.0, 0.0, 1.0, 1.0],
            ),
            10.5,
        ),
        (
            // upper triangular: det = product of the diagonal
            Mat4::from_rows(
                [1.0, 2.0, 3.0, 4.0],
                [0.0, 5.0, 6.0, 7.0],
                [0.0, 0.0, 8.0, 9.0],
                [0.0, 0.0, 0.0, 0.5],
            ),
            20.0,
        ),
    ]
}

#[test]
fn determinant_reference_values() {
    assert_eq!(Mat4::IDENTITY.determinant(), 1.0);
    assert_eq!(Mat4::ZERO.determinant(), 0.0);
    for (m, det) in reference_matrices() {
        assert!((m.determinant() - det).abs() < 1e-4, "{m:?}");
    }
}

#[test]
fn inverse_times_matrix_is_identity() {
    for (m, _) in reference_matrices() {
        let inv = m.inverse().unwrap();
        assert!((m * inv).abs_diff_eq(&Mat4::IDENTITY, 1e-4), "{m:?}");
    }
}

#[test]
fn inverse_of_inverse() {
    for (m, _) in reference_matrices() {
        let back = m.inverse().unwrap().inverse().unwrap();
        assert!(back.abs_diff_eq(&m, 1e-3), "{m:?}");
    }
}

#[test]
fn identity_is_neutral() {
    for (m, _) in reference_matrices() {
        assert_eq!(Mat4::IDENTITY * m, m);
        assert_eq!(m * Mat4::IDENTITY, m);
    }
}

#[test]
fn singular_threshold() {
    // det = 1.25e-7, below the threshold
    let below = Mat4::scale(Vec3::splat(5e-3));
    assert!(below.inverse().unwrap_err().is_singular());
    let above = Mat4::scale(Vec3::new(1e-1, 1e-1, 1e-3));
    assert!(above.inverse().is_ok());
}

// ============================================================================
// Rotations
// ============================================================================

#[test]
fn quarter_turn_about_z() {
    let m = Mat4::from_quat(quat::from_angle_axis(FRAC_PI_2, Vec3::Z));
    assert!(m.transform_vector(Vec3::X).abs_diff_eq(Vec3::Y, TOL));
    assert!(m.transform_vector(Vec3::Y).abs_diff_eq(-Vec3::X, TOL));
}

#[test]
fn rotation_leaves_axis_fixed() {
    let axes = [
        Vec3::X,
        Vec3::Y,
        Vec3::Z,
        Vec3::new(1.0, 1.0, 1.0).normalize(),
        Vec3::new(-0.3, 0.8, 0.2).normalize(),
    ];
    for axis in axes {
        for angle in [0.1, FRAC_PI_4, 2.0, PI, 5.5] {
            let m = Mat4::from_quat(quat::from_angle_axis(angle, axis));
            assert!(m.transform_vector(axis).abs_diff_eq(axis, TOL), "{axis:?} {angle}");
        }
    }
}

#[test]
fn from_quat_is_orthonormal() {
    let quats = [
        Vec4::new(1.0, 2.0, 3.0, 4.0),
        Vec4::new(-0.2, 0.0, 0.9, 0.1),
        Vec4::new(0.0, 0.0, 0.0, 5.0),
    ];
    for q in quats {
        let m = Mat4::from_quat(q);
        for i in 0..3 {
            let ri = m.row(i).truncate();
            assert!((ri.length() - 1.0).abs() < TOL);
            for j in (i + 1)..3 {
                assert!(ri.dot(m.row(j).truncate()).abs() < TOL);
            }
        }
        // right-handed: row0 x row1 = row2
        let (r0, r1, r2) = (m.row(0).truncate(), m.row(1).truncate(), m.row(2).truncate());
        assert!(r0.cross(r1).abs_diff_eq(r2, TOL));
    }
}

#[test]
fn pyr_reference() {
    // Pitch a quarter turn: Y -> Z. Then yaw a quarter turn: Z -> X.
    let m = Mat4::pyr(FRAC_PI_2, FRAC_PI_2, 0.0);
    assert!(m.transform_vector(Vec3::Y).abs_diff_eq(Vec3::X, TOL));

    // Roll alone: X -> Y
    let m = Mat4::pyr(0.0, 0.0, FRAC_PI_2);
    assert!(m.transform_vector(Vec3::X).abs_diff_eq(Vec3::Y, TOL));
}

#[test]
fn matrix_composition_matches_quat_product() {
    let a = quat::from_angle_axis(0.7, Vec3::new(0.0, 0.6, 0.8));
    let b = quat::from_angle_axis(-1.3, Vec3::X);
    let product = Mat4::from_quat(a) * Mat4::from_quat(b);
    assert!(product.abs_diff_eq(&Mat4::from_quat(quat::mul(b, a)), TOL));
}

// ============================================================================
// Composite transforms
// ============================================================================

#[test]
fn prs_reference() {
    let m = Mat4::prs(Vec3::new(1.0, 2.0, 3.0), quat::IDENTITY, Vec3::splat(2.0));
    assert_eq!(m.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(m.transform_point(Vec3::X), Vec3::new(3.0, 2.0, 3.0));
}

#[test]
fn prs_scales_before_rotating() {
    let q = quat::from_angle_axis(FRAC_PI_2, Vec3::Z);
    let m = Mat4::prs(Vec3::ZERO, q, Vec3::new(3.0, 1.0, 1.0));
    // X is stretched to length 3, then turned onto Y
    assert!(m.transform_point(Vec3::X).abs_diff_eq(Vec3::new(0.0, 3.0, 0.0), TOL));
}
