// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};
use geek_math::{Mat4, Quat, Quatd, Quatf, Vec3, Vec3d, Vec4};

const TOL: f64 = 1e-9;

fn approx_quat(a: Quatd, b: Quatd) {
    let diff = (a - b).length();
    assert!(diff <= TOL, "{a} vs {b}, diff={diff}");
}

fn approx_vec3(a: Vec3d, b: Vec3d) {
    let diff = (a - b).length();
    assert!(diff <= TOL, "{a} vs {b}, diff={diff}");
}

#[test]
fn conjugate_of_identity_is_identity() {
    assert_eq!(Quatf::default().conjugate(), Quatf::new(0.0, 0.0, 0.0, 1.0));
    assert_eq!(Quatd::identity().conjugate(), Quatd::identity());
}

#[test]
fn conjugate_negates_vector_part() {
    let q = Quatd::new(1.0, -2.0, 3.0, 4.0);
    assert_eq!(q.conjugate(), Quatd::new(-1.0, 2.0, -3.0, 4.0));
}

#[test]
fn hamilton_product_of_basis_units() {
    let i = Quatd::new(1.0, 0.0, 0.0, 0.0);
    let j = Quatd::new(0.0, 1.0, 0.0, 0.0);
    let k = Quatd::new(0.0, 0.0, 1.0, 0.0);
    assert_eq!(i * j, k);
    assert_eq!(j * i, -k);
    assert_eq!(j * k, i);
    assert_eq!(k * i, j);
    assert_eq!(i * i, Quatd::new(0.0, 0.0, 0.0, -1.0));
}

#[test]
fn product_composes_rotations_right_to_left() {
    let yaw = Quatd::from_axis_angle(&Vec3d::UNIT_Y, FRAC_PI_2);
    let pitch = Quatd::from_axis_angle(&Vec3d::UNIT_X, FRAC_PI_2);
    let v = Vec3d::new(0.3, -0.7, 1.1);
    approx_vec3(v.rotate(&(yaw * pitch)), v.rotate(&pitch).rotate(&yaw));
    assert_ne!(yaw * pitch, pitch * yaw);

    let mut acc = yaw;
    acc *= pitch;
    assert_eq!(acc, yaw.multiply(&pitch));
}

#[test]
fn elementwise_product_is_separate_from_hamilton() {
    let a = Quatd::new(1.0, 2.0, 3.0, 4.0);
    let b = Quatd::new(2.0, 2.0, 2.0, 2.0);
    assert_eq!(a.mul_elementwise(&b), Quatd::new(2.0, 4.0, 6.0, 8.0));
}

#[test]
fn pure_vector_product_matches_full_product() {
    let q = Quatd::new(0.1, 0.2, 0.3, 0.9);
    let v = Vec3d::new(1.0, -2.0, 0.5);
    assert_eq!(q * v, q.mul_vec3(&v));
    approx_quat(q * v, q * Quat::new(1.0, -2.0, 0.5, 0.0));
}

#[test]
fn axis_angle_rotates_counter_clockwise() {
    let q = Quatd::from_axis_angle(&Vec3d::UNIT_Z, FRAC_PI_2);
    approx_vec3(Vec3d::UNIT_X.rotate(&q), Vec3d::UNIT_Y);
    approx_vec3(q.right(), Vec3d::UNIT_Y);
    approx_vec3(q.up(), Vec3d::new(-1.0, 0.0, 0.0));
    approx_vec3(q.forward(), Vec3d::UNIT_Z);
    approx_vec3(q.left(), -q.right());
    approx_vec3(q.down(), -q.up());
    approx_vec3(q.backward(), -q.forward());
}

#[test]
fn axis_is_not_normalized() {
    let q = Quatd::from_axis_angle(&Vec3::new(0.0, 0.0, 2.0), PI);
    approx_quat(q, Quatd::new(0.0, 0.0, 2.0, 0.0));
}

#[test]
fn rotation_matrix_agrees_with_rotate() {
    let axis = Vec3d::new(1.0, 2.0, -2.0).normalize();
    let q = Quatd::from_axis_angle(&axis, 1.234);
    let v = Vec3d::new(-3.0, 0.5, 4.0);
    approx_vec3(q.rotation_matrix().transform_direction(&v), v.rotate(&q));
    approx_vec3(Mat4::rotation(&q).transform_point(&v), v.rotate(&q));
}

#[test]
fn rotation_matrix_round_trips_through_every_branch() {
    // One rotation per branch of the extraction: positive trace, then each
    // dominant diagonal element.
    let cases = [
        Quatd::from_axis_angle(&Vec3d::UNIT_Y, FRAC_PI_3),
        Quatd::from_axis_angle(&Vec3d::UNIT_X, PI * 0.9),
        Quatd::from_axis_angle(&Vec3d::UNIT_Y, PI * 0.9),
        Quatd::from_axis_angle(&Vec3d::UNIT_Z, PI * 0.9),
    ];
    for q in cases {
        let m = q.rotation_matrix();
        let back = Quatd::from_rotation_matrix(&m);
        let expected = if back.dot(&q) < 0.0 { -q } else { q };
        approx_quat(back, expected);
        for r in 0..4 {
            for c in 0..4 {
                assert!((back.rotation_matrix()[r][c] - m[r][c]).abs() <= TOL);
            }
        }
    }
}

#[test]
fn normalize_and_divide_by_zero_fall_back_to_identity() {
    let zero = Quatd::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(zero.normalize(), Quatd::identity());
    assert_eq!(Quatd::new(1.0, 2.0, 3.0, 4.0) / 0.0, Quatd::identity());

    let mut q = Quatd::new(1.0, 2.0, 3.0, 4.0);
    q /= 0.0;
    assert_eq!(q, Quatd::new(1.0, 2.0, 3.0, 4.0));
    q /= 2.0;
    assert_eq!(q, Quatd::new(0.5, 1.0, 1.5, 2.0));
}

#[test]
fn scalar_operators_are_componentwise() {
    let q = Quatf::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(q + 1.0, Quatf::new(2.0, 3.0, 4.0, 5.0));
    assert_eq!(q - 1.0, Quatf::new(0.0, 1.0, 2.0, 3.0));
    assert_eq!(q * 2.0, 2.0 * q);
    assert_eq!(q / 2.0, Quatf::new(0.5, 1.0, 1.5, 2.0));
    assert_eq!(q + q - q, q);
}

#[test]
fn slerp_falls_back_to_nlerp_at_crate_threshold() {
    let a = Quatd::identity();
    let b = Quatd::from_axis_angle(&Vec3d::UNIT_Y, FRAC_PI_2);
    for t in [0.0, 0.25, 0.5, 1.0] {
        assert_eq!(a.slerp(&b, t, true), a.nlerp(&b, t, true));
    }
}

#[test]
fn slerp_with_small_threshold_follows_the_arc() {
    let a = Quatd::identity();
    let b = Quatd::from_axis_angle(&Vec3d::UNIT_Y, FRAC_PI_2);
    let quarter = a.slerp_with_threshold(&b, 0.25, true, 1e-3);
    approx_quat(quarter, Quatd::from_axis_angle(&Vec3d::UNIT_Y, FRAC_PI_2 * 0.25));
    assert!((quarter.length() - 1.0).abs() <= TOL);
}

#[test]
fn shortest_path_negates_far_destination() {
    let a = Quatd::identity();
    let far = -Quatd::from_axis_angle(&Vec3d::UNIT_Z, 0.5);
    let short = a.nlerp(&far, 1.0, true);
    approx_quat(short, -far);
    let long = a.nlerp(&far, 1.0, false);
    approx_quat(long, far);
}

#[test]
fn lerp_does_not_normalize() {
    let a = Quatd::new(1.0, 0.0, 0.0, 0.0);
    let b = Quatd::new(0.0, 1.0, 0.0, 0.0);
    let mid = a.lerp(&b, 0.5);
    assert_eq!(mid, Quatd::new(0.5, 0.5, 0.0, 0.0));
    assert!((mid.length() - 0.5_f64.sqrt()).abs() <= TOL);
}

#[test]
fn clamp_min_max_reflect_are_componentwise() {
    let q = Quatd::new(-2.0, 0.5, 3.0, 1.0);
    let lo = Quatd::new(-1.0, -1.0, -1.0, -1.0);
    let hi = Quatd::new(1.0, 1.0, 1.0, 1.0);
    assert_eq!(q.clamp(&lo, &hi), Quatd::new(-1.0, 0.5, 1.0, 1.0));
    assert_eq!(q.min(&hi), Quatd::new(-2.0, 0.5, 1.0, 1.0));
    assert_eq!(q.max(&lo), Quatd::new(-1.0, 0.5, 3.0, 1.0));
    let n = Quatd::new(0.0, 0.0, 0.0, 1.0);
    assert_eq!(q.reflect(&n), Quatd::new(-2.0, 0.5, 3.0, -1.0));
}

#[test]
fn conversions_fill_missing_components() {
    assert_eq!(Quatd::from(Vec3d::new(1.0, 2.0, 3.0)), Quatd::new(1.0, 2.0, 3.0, 1.0));
    assert_eq!(Quatd::from(geek_math::Vec2d::new(1.0, 2.0)), Quatd::new(1.0, 2.0, 0.0, 1.0));
    let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(Vec4::from(Quatd::from(v)), v);
    assert_eq!(Quatd::from([1.0, 2.0, 3.0, 4.0]).to_array(), [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn display_lists_xyzw() {
    assert_eq!(Quatf::identity().to_string(), "( 0.000000 | 0.000000 | 0.000000 | 1.000000 )");
}
