// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::ops::impl_vector_common;
use crate::{Quat, Real, Scalar, Vec2, Vec4};

/// 3D vector over any [`Scalar`].
///
/// * Components may encode points or directions depending on context; use
///   [`crate::Mat4::transform_point`] for points (homogeneous `w = 1`) and
///   [`crate::Mat4::transform_direction`] for directions (`w = 0`).
/// * Division by a zero scalar yields the zero vector, so
///   [`normalize`](Self::normalize) maps the zero vector to itself.
///
/// # Examples
/// ```
/// use geek_math::Vec3;
/// let x = Vec3::new(1.0_f32, 0.0, 0.0);
/// let y = Vec3::new(0.0_f32, 1.0, 0.0);
/// assert_eq!(x.cross(&y), Vec3::new(0.0, 0.0, 1.0));
/// assert_eq!(Vec3::new(1.0_f32, 1.0, 1.0) / 0.0, Vec3::zero());
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<T> {
    data: [T; 3],
}

/// `f32` 3D vector.
pub type Vec3f = Vec3<f32>;
/// `f64` 3D vector.
pub type Vec3d = Vec3<f64>;
/// `i32` 3D vector.
pub type Vec3i = Vec3<i32>;

impl<T: Scalar> Vec3<T> {
    /// Creates a vector from components.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Overwrites the X component.
    pub fn set_x(&mut self, x: T) {
        self.data[0] = x;
    }

    /// Overwrites the Y component.
    pub fn set_y(&mut self, y: T) {
        self.data[1] = y;
    }

    /// Overwrites the Z component.
    pub fn set_z(&mut self, z: T) {
        self.data[2] = z;
    }

    /// Overwrites all components.
    pub fn set(&mut self, x: T, y: T, z: T) {
        self.data = [x, y, z];
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Drops the Z component.
    pub fn xy(&self) -> Vec2<T> {
        Vec2::new(self.x(), self.y())
    }

    /// Appends a W component.
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4::new(self.x(), self.y(), self.z(), w)
    }
}

impl<T: Real> Vec3<T> {
    /// Rotates by `rotation`: the vector part of `q * v * conj(q)`.
    ///
    /// `rotation` is expected to be unit length; no normalization happens here.
    pub fn rotate(&self, rotation: &Quat<T>) -> Self {
        let w = rotation.mul_vec3(self).multiply(&rotation.conjugate());
        Self::new(w.x(), w.y(), w.z())
    }

    /// Rotates `angle` radians about `axis` (Rodrigues' formula).
    ///
    /// Positive angles rotate counter-clockwise looking down `axis`, matching
    /// [`Quat::from_axis_angle`]. `axis` should be unit length.
    pub fn rotate_axis_angle(&self, axis: &Self, angle: T) -> Self {
        let (sin, cos) = (-angle).sin_cos();
        self.cross(&axis.scale(sin))
            + self.scale(cos)
            + axis.scale(self.dot(&axis.scale(T::one() - cos)))
    }
}

impl_vector_common!(Vec3, 3);

macro_rules! impl_vec3_units {
    ($($t:ty => $zero:literal, $one:literal);+ $(;)?) => {$(
        impl Vec3<$t> {
            /// Unit vector pointing along the positive X axis.
            pub const UNIT_X: Self = Self::new($one, $zero, $zero);
            /// Unit vector pointing along the positive Y axis.
            pub const UNIT_Y: Self = Self::new($zero, $one, $zero);
            /// Unit vector pointing along the positive Z axis.
            pub const UNIT_Z: Self = Self::new($zero, $zero, $one);
            /// Zero vector.
            pub const ZERO: Self = Self::new($zero, $zero, $zero);
            /// Vector of ones.
            pub const ONE: Self = Self::new($one, $one, $one);
        }
    )+};
}

impl_vec3_units!(f32 => 0.0, 1.0; f64 => 0.0, 1.0; i32 => 0, 1);
