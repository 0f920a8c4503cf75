// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! geek-math: small fixed-size linear algebra for graphics and game engines.
//!
//! Every type is a `Copy` value with no heap allocation:
//! - [`Vec2`], [`Vec3`], [`Vec4`] over `f32`, `f64` and `i32`.
//! - [`Quat`] over `f32` and `f64`.
//! - [`Mat3`] (2D affine) and [`Mat4`] (3D affine + projection) over `f32`,
//!   `f64` and `i32`.
//!
//! Conventions:
//! - Matrices are stored row-major (`m[row][col]`) and act on column vectors:
//!   `m * v`, so `(a * b) * v == a * (b * v)` and translation lives in the
//!   last column.
//! - Quaternions are `(x, y, z, w)` with `w` the scalar part; products are
//!   Hamilton products.
//! - Angles are radians unless a parameter says degrees (`perspective` takes
//!   its field of view in degrees).
//! - Division by a zero scalar never faults: vectors yield zero, quaternions
//!   yield identity, and the compound `/=` forms leave the receiver untouched.
//! - A singular matrix inverts to itself; check [`Mat4::determinant`] first
//!   when that distinction matters.
#![forbid(unsafe_code)]

use core::f64::consts::TAU;

mod error;
mod mat3;
mod mat4;
mod ops;
mod quat;
mod scalar;
pub mod swizzle;
mod vec2;
mod vec3;
mod vec4;

pub use error::MathError;
pub use mat3::{Mat3, Mat3d, Mat3f, Mat3i};
pub use mat4::{Mat4, Mat4d, Mat4f, Mat4i};
pub use quat::{Quat, Quatd, Quatf};
pub use scalar::{Real, Scalar};
pub use swizzle::Swizzle;
pub use vec2::{Vec2, Vec2d, Vec2f, Vec2i};
pub use vec3::{Vec3, Vec3d, Vec3f, Vec3i};
pub use vec4::{Vec4, Vec4d, Vec4f, Vec4i};

/// Tolerance used by tests and callers comparing float results.
pub const EPSILON: f64 = 1e-6;

/// Threshold for the `slerp` → `nlerp` fallback.
///
/// `slerp` falls back to `nlerp` when `|cos| > 1 - SLERP_EPSILON`. At `1e3`
/// the fallback is taken for every input; use
/// [`Quat::slerp_with_threshold`] to interpolate along the arc.
pub const SLERP_EPSILON: f64 = 1e3;

/// Clamps `value` to the inclusive `[min, max]` range.
pub fn clamp<T: Scalar>(value: T, min: T, max: T) -> T {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max_of(min).min_of(max)
}

/// Linear interpolation `(to - from) * t + from`; `t` is not clamped.
pub fn lerp<T: Scalar>(from: T, to: T, t: T) -> T {
    (to - from) * t + from
}

/// Converts degrees to radians.
pub fn deg_to_rad<T: Real>(value: T) -> T {
    value * T::from_f64(TAU / 360.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg<T: Real>(value: T) -> T {
    value * T::from_f64(360.0 / TAU)
}
