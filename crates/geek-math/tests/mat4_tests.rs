// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use geek_math::{MathError, Mat4, Mat4d, Mat4f, Mat4i, Quatd, Vec3, Vec3d, Vec4, Vec4d};

const TOL: f64 = 1e-9;

fn approx_mat(a: &Mat4d, b: &Mat4d) {
    for r in 0..4 {
        for c in 0..4 {
            let diff = (a[r][c] - b[r][c]).abs();
            assert!(diff <= TOL, "[{r}][{c}]:\n{a}\nvs\n{b}\ndiff={diff}");
        }
    }
}

fn approx_vec3(a: Vec3d, b: Vec3d) {
    let diff = (a - b).length();
    assert!(diff <= TOL, "{a} vs {b}, diff={diff}");
}

fn sample() -> Mat4d {
    Mat4d::from_rows([
        [2.0, 0.5, -1.0, 3.0],
        [0.0, 1.5, 4.0, -2.0],
        [1.0, -3.0, 2.5, 0.25],
        [0.5, 2.0, -0.5, 1.0],
    ])
}

#[test]
fn identity_times_identity_is_identity() {
    assert_eq!(Mat4f::identity() * Mat4f::identity(), Mat4f::identity());
    assert_eq!(Mat4i::identity() * Mat4i::identity(), Mat4i::identity());
}

#[test]
fn default_is_zero_matrix() {
    assert_eq!(Mat4d::default(), Mat4d::zero());
    assert_eq!(Mat4d::default()[2][2], 0.0);
}

#[test]
fn product_is_row_by_column() {
    let a = Mat4i::new([1, 2, 0, 0, 3, 4, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1]);
    let b = Mat4i::new([5, 6, 0, 0, 7, 8, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1]);
    let ab = a * b;
    assert_eq!(ab.row(0), Vec4::new(19, 22, 0, 0));
    assert_eq!(ab.row(1), Vec4::new(43, 50, 0, 0));
    assert_eq!(&a * &b, ab);
}

#[test]
fn translation_lives_in_last_column() {
    let t = Mat4d::translation(1.0, 2.0, 3.0);
    assert_eq!(t.col(3), Vec4::new(1.0, 2.0, 3.0, 1.0));
    assert_eq!(t.transform_point(&Vec3::new(1.0, 1.0, 1.0)), Vec3::new(2.0, 3.0, 4.0));
    assert_eq!(t.transform_direction(&Vec3d::UNIT_X), Vec3d::UNIT_X);
    assert_eq!(Mat4d::translation_vec(&Vec3::new(1.0, 2.0, 3.0)), t);
}

#[test]
fn composition_applies_right_operand_first() {
    let t = Mat4d::translation(10.0, 0.0, 0.0);
    let s = Mat4d::scale(2.0, 3.0, 4.0);
    let p = Vec3d::new(1.0, 1.0, 1.0);
    assert_eq!((t * s).transform_point(&p), Vec3::new(12.0, 3.0, 4.0));
    assert_eq!((s * t).transform_point(&p), Vec3::new(22.0, 3.0, 4.0));
    assert_eq!(Mat4d::scale_vec(&Vec3::new(2.0, 3.0, 4.0)), s);
}

#[test]
fn mul_assign_matches_multiply() {
    let mut m = sample();
    m *= Mat4d::translation(1.0, 0.0, 0.0);
    assert_eq!(m, sample().multiply(&Mat4d::translation(1.0, 0.0, 0.0)));
    let mut n = sample();
    n *= &Mat4d::identity();
    assert_eq!(n, sample());
}

#[test]
fn inverse_law_holds_for_non_singular() {
    let m = sample();
    assert!(m.determinant().abs() > 1e-3);
    approx_mat(&(m * m.inverse()), &Mat4d::identity());
    approx_mat(&(m.inverse() * m), &Mat4d::identity());
}

#[test]
fn inverse_of_affine_transform() {
    let q = Quatd::from_axis_angle(&Vec3d::new(0.0, 0.6, 0.8), 0.7);
    let m = Mat4d::translation(3.0, -1.0, 2.0) * Mat4d::rotation(&q) * Mat4d::scale(2.0, 2.0, 2.0);
    let p = Vec3d::new(0.25, -4.0, 9.0);
    approx_vec3(m.inverse().transform_point(&m.transform_point(&p)), p);
}

#[test]
fn singular_inverse_returns_input() {
    let m = Mat4d::from_rows([
        [1.0, 2.0, 3.0, 4.0],
        [2.0, 4.0, 6.0, 8.0],
        [0.0, 1.0, 0.0, 1.0],
        [5.0, 0.0, 1.0, 0.0],
    ]);
    assert_eq!(m.determinant(), 0.0);
    assert_eq!(m.inverse(), m);
    assert_eq!(Mat4d::zero().inverse(), Mat4d::zero());
}

#[test]
fn integer_inverse_of_unimodular_matrix() {
    let m = Mat4i::translation(3, -2, 7);
    assert_eq!(m.determinant(), 1);
    assert_eq!(m.inverse(), Mat4i::translation(-3, 2, -7));
}

#[test]
fn determinant_of_scale_is_product() {
    assert_eq!(Mat4i::scale(2, 3, 4).determinant(), 24);
    assert_eq!(Mat4d::identity().determinant(), 1.0);
}

#[test]
fn transpose_is_an_involution() {
    let m = sample();
    assert_eq!(m.transpose().transpose(), m);
    assert_eq!(m.transpose()[0][3], m[3][0]);
    assert_eq!(m.transpose().row(1), m.col(1));
}

#[test]
fn axis_rotations_are_counter_clockwise() {
    approx_vec3(Mat4d::rotation_z(FRAC_PI_2).transform_direction(&Vec3d::UNIT_X), Vec3d::UNIT_Y);
    approx_vec3(Mat4d::rotation_y(FRAC_PI_2).transform_direction(&Vec3d::UNIT_Z), Vec3d::UNIT_X);
    approx_vec3(Mat4d::rotation_x(FRAC_PI_2).transform_direction(&Vec3d::UNIT_Y), Vec3d::UNIT_Z);
}

#[test]
fn euler_composes_z_y_x() {
    let (x, y, z) = (0.3, -0.8, 1.1);
    let expected = Mat4d::rotation_z(z) * Mat4d::rotation_y(y) * Mat4d::rotation_x(x);
    approx_mat(&Mat4d::rotation_euler(x, y, z), &expected);
    approx_mat(&Mat4d::rotation_euler(0.0, 0.0, z), &Mat4d::rotation_z(z));
}

#[test]
fn axis_rotations_match_quaternions() {
    for (axis, m) in [
        (Vec3d::UNIT_X, Mat4d::rotation_x(0.9)),
        (Vec3d::UNIT_Y, Mat4d::rotation_y(0.9)),
        (Vec3d::UNIT_Z, Mat4d::rotation_z(0.9)),
    ] {
        approx_mat(&Mat4d::rotation(&Quatd::from_axis_angle(&axis, 0.9)), &m);
    }
}

#[test]
fn look_rotation_builds_orthonormal_rows() {
    let m = Mat4d::look_rotation(&Vec3::new(0.0, 0.0, 5.0), &Vec3::new(0.0, 2.0, 0.0));
    approx_mat(&m, &Mat4d::identity());

    let m = Mat4d::look_rotation(&Vec3::new(1.0, 0.0, 1.0), &Vec3d::UNIT_Y);
    let forward = m.row(2).truncate();
    approx_vec3(forward, Vec3d::new(1.0, 0.0, 1.0).normalize());
    assert!(m.row(0).dot(&m.row(1)).abs() <= TOL);
    assert!((m.row(0).length() - 1.0).abs() <= TOL);
}

#[test]
fn from_basis_orders_rows_right_up_forward() {
    let m = Mat4i::from_basis(&Vec3::new(0, 0, 1), &Vec3::new(0, 1, 0), &Vec3::new(1, 0, 0));
    assert_eq!(m, Mat4i::identity());
}

#[test]
fn rotation_columns_are_rotated_axes_and_rows_are_inverse() {
    let q = Quatd::from_axis_angle(&Vec3d::UNIT_Z, FRAC_PI_2);
    let m = Mat4d::rotation(&q);
    approx_vec3(m.col(0).truncate(), q.right());
    approx_vec3(m.col(1).truncate(), q.up());
    approx_vec3(m.col(2).truncate(), q.forward());

    let inverse = q.conjugate();
    approx_vec3(m.row(0).truncate(), inverse.right());
    approx_vec3(m.row(0).truncate(), Vec3d::new(0.0, -1.0, 0.0));
    approx_vec3(m.row(1).truncate(), inverse.up());
}

#[test]
fn look_rotation_is_world_to_local() {
    let m = Mat4d::look_rotation(&Vec3d::UNIT_X, &Vec3d::UNIT_Y);
    approx_vec3(m.transform_direction(&Vec3d::UNIT_X), Vec3d::UNIT_Z);
    approx_vec3(m.transform_direction(&Vec3d::UNIT_Z), Vec3d::new(-1.0, 0.0, 0.0));

    let forward = Vec3d::new(1.0, 0.0, 1.0);
    let m = Mat4d::look_rotation(&forward, &Vec3d::UNIT_Y);
    approx_vec3(m.transform_direction(&forward.normalize()), Vec3d::UNIT_Z);
    let to_world = Mat4d::rotation(&Quatd::from_axis_angle(&Vec3d::UNIT_Y, FRAC_PI_4));
    approx_mat(&m.transpose(), &to_world);
    approx_vec3(to_world.transform_direction(&Vec3d::UNIT_Z), forward.normalize());
}

#[test]
fn integer_determinant_holds_at_documented_element_bound() {
    assert_eq!(Mat4i::scale(96, 96, 96).determinant(), 96 * 96 * 96);

    // Scaled Hadamard matrix: the largest determinant reachable with |e| <= 96.
    let m = Mat4i::from_rows([
        [96, -96, 96, -96],
        [96, 96, -96, -96],
        [96, -96, -96, 96],
        [96, 96, 96, 96],
    ]);
    assert_eq!(m.determinant(), -1_358_954_496);
    assert_eq!(m.transpose().determinant(), -1_358_954_496);
}

#[test]
fn orthographic_maps_near_and_far_to_ndc() {
    let m = Mat4d::orthographic(-1.0, 1.0, -1.0, 1.0, 0.1, 100.0).unwrap();
    let near = m * Vec4::new(0.0, 0.0, -0.1, 1.0);
    let far = m * Vec4::new(0.0, 0.0, -100.0, 1.0);
    assert!((near.z() + 1.0).abs() <= TOL, "near z = {}", near.z());
    assert!((far.z() - 1.0).abs() <= TOL, "far z = {}", far.z());
    assert_eq!(near.w(), 1.0);
}

#[test]
fn orthographic_maps_box_corners() {
    let m = Mat4d::orthographic(0.0, 800.0, 0.0, 600.0, 1.0, 10.0).unwrap();
    let p = m * Vec4d::new(800.0, 0.0, -1.0, 1.0);
    assert!((p.x() - 1.0).abs() <= TOL);
    assert!((p.y() + 1.0).abs() <= TOL);
}

#[test]
fn perspective_maps_near_and_far_to_ndc() {
    let (near, far) = (0.5, 50.0);
    let m = Mat4d::perspective(90.0, 16.0 / 9.0, near, far).unwrap();
    let clip_near = m * Vec4::new(0.0, 0.0, -near, 1.0);
    let clip_far = m * Vec4::new(0.0, 0.0, -far, 1.0);
    assert!((clip_near.z() / clip_near.w() + 1.0).abs() <= TOL);
    assert!((clip_far.z() / clip_far.w() - 1.0).abs() <= TOL);
    assert!((m[1][1] - 1.0).abs() <= TOL, "cot(45deg) should be 1");
    assert!((m[0][0] - 9.0 / 16.0).abs() <= TOL);
    assert_eq!(m[3][2], -1.0);
}

#[test]
fn projections_reject_inverted_depth_range() {
    let err = Mat4d::perspective(60.0, 1.0, 10.0, 1.0).unwrap_err();
    assert_eq!(err, MathError::InvalidProjectionRange { near: 10.0, far: 1.0 });
    assert!(Mat4f::orthographic(-1.0, 1.0, -1.0, 1.0, 2.0, 2.0).is_err());
    assert_eq!(
        err.to_string(),
        "invalid projection depth range: near (10) must be less than far (1)"
    );
}

#[test]
fn projection_errors_are_traced() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    assert!(Mat4d::perspective(60.0, 1.0, 1.0, 1.0).is_err());
}

#[test]
fn quaternion_is_transformed_as_four_vector() {
    let m = Mat4d::translation(1.0, 2.0, 3.0);
    let q = Quatd::new(1.0, 1.0, 1.0, 1.0);
    assert_eq!(m * q, Quatd::new(2.0, 3.0, 4.0, 1.0));
    assert_eq!(m.transformation(&q), m * q);
}

#[test]
fn element_accessors_round_trip() {
    let mut m = Mat4i::zero();
    m.set(1, 2, 5);
    m[3][0] = 7;
    assert_eq!(m.get(1, 2), 5);
    assert_eq!(m.to_rows()[3][0], 7);
    assert_eq!(Mat4::from(m.to_rows()), m);
}

#[test]
fn display_prints_one_row_per_line() {
    let expected = "( 1 | 0 | 0 | 0 )\n( 0 | 1 | 0 | 0 )\n( 0 | 0 | 1 | 0 )\n( 0 | 0 | 0 | 1 )";
    assert_eq!(Mat4i::identity().to_string(), expected);
}
