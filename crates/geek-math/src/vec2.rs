// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::ops::impl_vector_common;
use crate::{Scalar, Vec3};

/// 2D vector over any [`Scalar`].
///
/// Arithmetic operators accept either a vector (component-wise) or a scalar
/// of the same type. Division by a zero scalar yields the zero vector.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<T> {
    data: [T; 2],
}

/// `f32` 2D vector.
pub type Vec2f = Vec2<f32>;
/// `f64` 2D vector.
pub type Vec2d = Vec2<f64>;
/// `i32` 2D vector.
pub type Vec2i = Vec2<i32>;

impl<T: Scalar> Vec2<T> {
    /// Creates a vector from components.
    pub const fn new(x: T, y: T) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Overwrites the X component.
    pub fn set_x(&mut self, x: T) {
        self.data[0] = x;
    }

    /// Overwrites the Y component.
    pub fn set_y(&mut self, y: T) {
        self.data[1] = y;
    }

    /// Overwrites both components.
    pub fn set(&mut self, x: T, y: T) {
        self.data = [x, y];
    }

    /// Z component of the 3D cross product of `(self, 0)` and `(other, 0)`.
    pub fn cross(&self, other: &Self) -> T {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Appends a Z component.
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3::new(self.x(), self.y(), z)
    }
}

impl_vector_common!(Vec2, 2);
