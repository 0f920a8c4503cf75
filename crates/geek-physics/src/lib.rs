// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Collider stubs built on `geek-math`.

This crate provides:
- The `Collider` capability (`kind`, `translate`, `center`, `intersect`).
- Axis-aligned boxes (`Aabb`) and bounding spheres (`BoundingSphere`).
- The closed `Shape` enum used as the `intersect` argument.
- `IntersectData`, the result of every query.

Only same-kind pairs are implemented. Mixed `Aabb`/`BoundingSphere` queries
log a warning and report no intersection.
"]
#![forbid(unsafe_code)]

mod aabb;
mod collider;
mod intersect;
mod sphere;

pub use aabb::Aabb;
pub use collider::{Collider, ColliderKind, Shape};
pub use intersect::IntersectData;
pub use sphere::BoundingSphere;
