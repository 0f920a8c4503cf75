// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use geek_math::Vec3f;

use crate::{Aabb, BoundingSphere, IntersectData};

/// Collider type tags. `Obb` and `Plane` are reserved and have no shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColliderKind {
    /// Axis-aligned bounding box.
    Aabb,
    /// Oriented bounding box (reserved).
    Obb,
    /// Bounding sphere.
    Sphere,
    /// Infinite plane (reserved).
    Plane,
}

/// Capability shared by every collision shape.
pub trait Collider {
    /// Type tag of this shape.
    fn kind(&self) -> ColliderKind;

    /// Moves the shape by `translation`.
    fn translate(&mut self, translation: Vec3f);

    /// Geometric center.
    fn center(&self) -> Vec3f;

    /// Tests this shape against `other`.
    fn intersect(&self, other: &Shape) -> IntersectData;
}

/// Closed set of concrete shapes accepted by [`Collider::intersect`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// Axis-aligned bounding box.
    Aabb(Aabb),
    /// Bounding sphere.
    Sphere(BoundingSphere),
}

impl Collider for Shape {
    fn kind(&self) -> ColliderKind {
        match self {
            Self::Aabb(a) => a.kind(),
            Self::Sphere(s) => s.kind(),
        }
    }

    fn translate(&mut self, translation: Vec3f) {
        match self {
            Self::Aabb(a) => a.translate(translation),
            Self::Sphere(s) => s.translate(translation),
        }
    }

    fn center(&self) -> Vec3f {
        match self {
            Self::Aabb(a) => a.center(),
            Self::Sphere(s) => s.center(),
        }
    }

    fn intersect(&self, other: &Shape) -> IntersectData {
        match self {
            Self::Aabb(a) => a.intersect(other),
            Self::Sphere(s) => s.intersect(other),
        }
    }
}

impl From<Aabb> for Shape {
    fn from(value: Aabb) -> Self {
        Self::Aabb(value)
    }
}

impl From<BoundingSphere> for Shape {
    fn from(value: BoundingSphere) -> Self {
        Self::Sphere(value)
    }
}
