// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use geek_math::Vec3f;

use crate::{BoundingSphere, Collider, ColliderKind, IntersectData, Shape};

/// Axis-aligned bounding box.
///
/// `min` is expected to be component-wise less than or equal to `max`; the
/// constructor does not reorder corners.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    min: Vec3f,
    max: Vec3f,
}

impl Aabb {
    /// Constructs a box from its minimum and maximum corners.
    pub const fn new(min: Vec3f, max: Vec3f) -> Self {
        Self { min, max }
    }

    /// Builds a box centered at `center` with half-extents `hx, hy, hz`.
    pub fn from_center_half_extents(center: Vec3f, hx: f32, hy: f32, hz: f32) -> Self {
        let he = Vec3f::new(hx, hy, hz);
        Self::new(center - he, center + he)
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec3f {
        self.min
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec3f {
        self.max
    }

    /// Per-axis gap to `other`: `max(other.min - self.max, self.min - other.max)`.
    ///
    /// The boxes overlap iff every component is negative.
    ///
    /// # Examples
    /// ```
    /// use geek_math::Vec3f;
    /// use geek_physics::Aabb;
    /// let a = Aabb::new(Vec3f::ZERO, Vec3f::ONE);
    /// let b = Aabb::new(Vec3f::new(1.0, 1.0, 0.0), Vec3f::new(2.0, 2.0, 1.0));
    /// let hit = a.intersect_aabb(&b);
    /// assert!(!hit.intersects()); // touching faces do not count
    /// assert_eq!(hit.distance(), Vec3f::new(0.0, 0.0, -1.0));
    /// ```
    pub fn intersect_aabb(&self, other: &Self) -> IntersectData {
        let gap = (other.min - self.max).max(&(self.min - other.max));
        IntersectData::new(gap.max_element() < 0.0, gap)
    }

    /// Not implemented: logs a warning and reports no intersection.
    pub fn intersect_sphere(&self, sphere: &BoundingSphere) -> IntersectData {
        tracing::warn!(
            center = %sphere.center(),
            "aabb/sphere intersection is not implemented"
        );
        IntersectData::none()
    }
}

impl Collider for Aabb {
    fn kind(&self) -> ColliderKind {
        ColliderKind::Aabb
    }

    fn translate(&mut self, translation: Vec3f) {
        self.min += translation;
        self.max += translation;
    }

    fn center(&self) -> Vec3f {
        (self.min + self.max) * 0.5
    }

    fn intersect(&self, other: &Shape) -> IntersectData {
        match other {
            Shape::Aabb(b) => self.intersect_aabb(b),
            Shape::Sphere(s) => self.intersect_sphere(s),
        }
    }
}
