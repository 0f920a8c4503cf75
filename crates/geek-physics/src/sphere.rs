// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use geek_math::Vec3f;

use crate::{Aabb, Collider, ColliderKind, IntersectData, Shape};

/// Sphere given by center and radius.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingSphere {
    center: Vec3f,
    radius: f32,
}

impl BoundingSphere {
    /// Creates a sphere.
    pub const fn new(center: Vec3f, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Signed gap along the center line.
    ///
    /// `distance` is `|Δ| - (r1 + r2)`; the result vector is the unit
    /// direction toward `other` scaled by it. Coincident centers give a zero
    /// direction, so the vector is zero while `intersects` stays true.
    pub fn intersect_sphere(&self, other: &Self) -> IntersectData {
        let delta = other.center - self.center;
        let gap = delta.length() - (self.radius + other.radius);
        IntersectData::new(gap < 0.0, delta.normalize() * gap)
    }

    /// Not implemented: logs a warning and reports no intersection.
    pub fn intersect_aabb(&self, aabb: &Aabb) -> IntersectData {
        tracing::warn!(
            center = %aabb.center(),
            "sphere/aabb intersection is not implemented"
        );
        IntersectData::none()
    }
}

impl Collider for BoundingSphere {
    fn kind(&self) -> ColliderKind {
        ColliderKind::Sphere
    }

    fn translate(&mut self, translation: Vec3f) {
        self.center += translation;
    }

    fn center(&self) -> Vec3f {
        self.center
    }

    fn intersect(&self, other: &Shape) -> IntersectData {
        match other {
            Shape::Aabb(b) => self.intersect_aabb(b),
            Shape::Sphere(s) => self.intersect_sphere(s),
        }
    }
}
