// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::ops::impl_vector_common;
use crate::{Quat, Real, Scalar, Vec2, Vec3};

/// 4D vector over any [`Scalar`]; also the homogeneous form of a [`Vec3`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4<T> {
    data: [T; 4],
}

/// `f32` 4D vector.
pub type Vec4f = Vec4<f32>;
/// `f64` 4D vector.
pub type Vec4d = Vec4<f64>;
/// `i32` 4D vector.
pub type Vec4i = Vec4<i32>;

impl<T: Scalar> Vec4<T> {
    /// Creates a vector from components.
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
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

    /// W component.
    pub fn w(&self) -> T {
        self.data[3]
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

    /// Overwrites the W component.
    pub fn set_w(&mut self, w: T) {
        self.data[3] = w;
    }

    /// Overwrites all components.
    pub fn set(&mut self, x: T, y: T, z: T, w: T) {
        self.data = [x, y, z, w];
    }

    /// Drops the W component.
    pub fn truncate(self) -> Vec3<T> {
        Vec3::new(self.x(), self.y(), self.z())
    }

    /// Alias of [`truncate`](Self::truncate).
    pub fn xyz(&self) -> Vec3<T> {
        self.truncate()
    }

    /// First two components.
    pub fn xy(&self) -> Vec2<T> {
        Vec2::new(self.x(), self.y())
    }
}

impl<T: Real> Vec4<T> {
    /// Normalized linear interpolation with the quaternion contract
    /// (see [`Quat::nlerp`]).
    pub fn nlerp(&self, destination: &Self, t: T, shortest_path: bool) -> Self {
        Quat::from(*self)
            .nlerp(&Quat::from(*destination), t, shortest_path)
            .into()
    }

    /// Spherical linear interpolation with the quaternion contract
    /// (see [`Quat::slerp`]).
    pub fn slerp(&self, destination: &Self, t: T, shortest_path: bool) -> Self {
        Quat::from(*self)
            .slerp(&Quat::from(*destination), t, shortest_path)
            .into()
    }
}

/// Homogeneous point: `(x, y, z, 1)`.
impl<T: Scalar> From<Vec3<T>> for Vec4<T> {
    fn from(value: Vec3<T>) -> Self {
        Self::new(value.x(), value.y(), value.z(), T::one())
    }
}

/// `(x, y, 0, 1)`.
impl<T: Scalar> From<Vec2<T>> for Vec4<T> {
    fn from(value: Vec2<T>) -> Self {
        Self::new(value.x(), value.y(), T::zero(), T::one())
    }
}

impl_vector_common!(Vec4, 4);
