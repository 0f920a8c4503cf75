// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use geek_math::Vec3f;

/// Result of a collider query.
///
/// `distance` is shape-pair specific: per-axis separation for boxes,
/// signed gap along the center line for spheres. Negative components mean
/// penetration.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectData {
    intersects: bool,
    distance: Vec3f,
}

impl IntersectData {
    /// Creates a result.
    pub const fn new(intersects: bool, distance: Vec3f) -> Self {
        Self {
            intersects,
            distance,
        }
    }

    /// Non-intersecting result with a zero distance vector.
    pub const fn none() -> Self {
        Self::new(false, Vec3f::ZERO)
    }

    /// Whether the shapes overlap.
    pub fn intersects(&self) -> bool {
        self.intersects
    }

    /// Separation (or penetration) vector.
    pub fn distance(&self) -> Vec3f {
        self.distance
    }
}

impl Default for IntersectData {
    fn default() -> Self {
        Self::none()
    }
}
