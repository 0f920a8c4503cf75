// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Component projection ("swizzling") for vectors and quaternions.
//!
//! Instead of one named accessor per permutation (`xzy()`, `wwx()`, ...),
//! every type exposes the same index-list accessors. Components may repeat
//! and appear in any order:
//!
//! ```
//! use geek_math::swizzle::{Swizzle, X, Y, Z};
//! use geek_math::Vec3;
//!
//! let v = Vec3::new(1.0_f32, 2.0, 3.0);
//! assert_eq!(v.swizzle3::<Z, Y, X>(), Vec3::new(3.0, 2.0, 1.0));
//! assert_eq!(v.swizzle([X, X, Y, Z]), [1.0, 1.0, 2.0, 3.0]);
//! ```
//!
//! Indices must be `< LEN`; out-of-range indices panic like array indexing.

use crate::{Scalar, Vec2, Vec3, Vec4};

/// Index of the `x` component.
pub const X: usize = 0;
/// Index of the `y` component.
pub const Y: usize = 1;
/// Index of the `z` component.
pub const Z: usize = 2;
/// Index of the `w` component.
pub const W: usize = 3;

/// Read access to components by index plus projections built on top of it.
pub trait Swizzle<T: Scalar>: Copy {
    /// Number of components.
    const LEN: usize;

    /// Returns component `index`.
    fn component(&self, index: usize) -> T;

    /// Gathers the components named by `indices`, in order.
    fn swizzle<const N: usize>(&self, indices: [usize; N]) -> [T; N] {
        indices.map(|i| self.component(i))
    }

    /// Two-component projection.
    fn swizzle2<const A: usize, const B: usize>(&self) -> Vec2<T> {
        Vec2::new(self.component(A), self.component(B))
    }

    /// Three-component projection.
    fn swizzle3<const A: usize, const B: usize, const C: usize>(&self) -> Vec3<T> {
        Vec3::new(self.component(A), self.component(B), self.component(C))
    }

    /// Four-component projection.
    fn swizzle4<const A: usize, const B: usize, const C: usize, const D: usize>(&self) -> Vec4<T> {
        Vec4::new(
            self.component(A),
            self.component(B),
            self.component(C),
            self.component(D),
        )
    }
}
