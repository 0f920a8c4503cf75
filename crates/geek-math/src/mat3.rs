// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Index, IndexMut, Mul, MulAssign};

use crate::{Real, Scalar, Vec2, Vec3};

/// Row-major 3×3 matrix for 2D affine transforms in homogeneous
/// coordinates.
///
/// Same conventions as [`crate::Mat4`]: column vectors, `a * b` applies `b`
/// first, translation in the last column. `Default` is the zero matrix.
///
/// # Examples
/// ```
/// use geek_math::{Mat3, Vec2};
/// let m = Mat3::translation(2, 3) * Mat3::scale(10, 10);
/// assert_eq!(m.transform_point(&Vec2::new(1, 1)), Vec2::new(12, 13));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3<T> {
    rows: [[T; 3]; 3],
}

/// `f32` 3×3 matrix.
pub type Mat3f = Mat3<f32>;
/// `f64` 3×3 matrix.
pub type Mat3d = Mat3<f64>;
/// `i32` 3×3 matrix.
pub type Mat3i = Mat3<i32>;

impl<T: Scalar> Mat3<T> {
    /// Creates a matrix from its rows.
    pub const fn from_rows(rows: [[T; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Creates a matrix from three row vectors.
    pub fn from_row_vectors(r0: &Vec3<T>, r1: &Vec3<T>, r2: &Vec3<T>) -> Self {
        Self::from_rows([r0.to_array(), r1.to_array(), r2.to_array()])
    }

    /// Matrix with every element zero.
    pub fn zero() -> Self {
        Self { rows: [[T::zero(); 3]; 3] }
    }

    /// Returns the identity matrix.
    pub fn identity() -> Self {
        Self::scale(T::one(), T::one())
    }

    /// 2D scale.
    pub fn scale(x: T, y: T) -> Self {
        let mut m = Self::zero();
        m.rows[0][0] = x;
        m.rows[1][1] = y;
        m.rows[2][2] = T::one();
        m
    }

    /// 2D scale by the components of `s`.
    pub fn scale_vec(s: &Vec2<T>) -> Self {
        Self::scale(s.x(), s.y())
    }

    /// 2D translation stored in the last column.
    pub fn translation(x: T, y: T) -> Self {
        let mut m = Self::identity();
        m.rows[0][2] = x;
        m.rows[1][2] = y;
        m
    }

    /// 2D translation by `t`.
    pub fn translation_vec(t: &Vec2<T>) -> Self {
        Self::translation(t.x(), t.y())
    }

    /// Returns the rows as nested arrays.
    pub fn to_rows(self) -> [[T; 3]; 3] {
        self.rows
    }

    /// Row `index`.
    pub fn row(&self, index: usize) -> Vec3<T> {
        Vec3::from(self.rows[index])
    }

    /// Column `index`.
    pub fn col(&self, index: usize) -> Vec3<T> {
        Vec3::new(self.rows[0][index], self.rows[1][index], self.rows[2][index])
    }

    /// Overwrites the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.rows[row][col] = value;
    }

    /// Matrix product `self * rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = Self::zero();
        for (r, row) in out.rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).fold(T::zero(), |acc, k| acc + self.rows[r][k] * rhs.rows[k][c]);
            }
        }
        out
    }

    /// Matrix-vector product `self * v`.
    pub fn mul_vec3(&self, v: &Vec3<T>) -> Vec3<T> {
        let [x, y, z] = self.rows.map(|row| Vec3::from(row).dot(v));
        Vec3::new(x, y, z)
    }

    /// Transforms a 2D point (`w = 1`).
    pub fn transform_point(&self, point: &Vec2<T>) -> Vec2<T> {
        self.mul_vec3(&point.extend(T::one())).xy()
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let mut out = *self;
        for (r, row) in out.rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.rows[c][r];
            }
        }
        out
    }

    fn adjugate(&self) -> [[T; 3]; 3] {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows;
        [
            [e * i - f * h, c * h - b * i, b * f - c * e],
            [f * g - d * i, a * i - c * g, c * d - a * f],
            [d * h - e * g, b * g - a * h, a * e - b * d],
        ]
    }

    /// Determinant.
    pub fn determinant(&self) -> T {
        let adj = self.adjugate();
        let [a, b, c] = self.rows[0];
        a * adj[0][0] + b * adj[1][0] + c * adj[2][0]
    }

    /// Inverse via the adjugate; `self` unchanged when the determinant is
    /// exactly zero. Integer matrices use integer `1 / det`.
    pub fn inverse(&self) -> Self {
        let adj = self.adjugate();
        let [a, b, c] = self.rows[0];
        let det = a * adj[0][0] + b * adj[1][0] + c * adj[2][0];
        if det.is_zero() {
            tracing::trace!("inverse of singular 3x3 matrix requested; returning input");
            return *self;
        }
        let inv_det = T::one() / det;
        Self::from_rows(adj.map(|row| row.map(|v| v * inv_det)))
    }
}

impl<T: Real> Mat3<T> {
    /// Counter-clockwise rotation of `angle` radians in the XY plane.
    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::identity();
        m.rows[0][0] = c;
        m.rows[0][1] = -s;
        m.rows[1][0] = s;
        m.rows[1][1] = c;
        m
    }
}

impl<T: Scalar> Default for Mat3<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> From<[[T; 3]; 3]> for Mat3<T> {
    fn from(rows: [[T; 3]; 3]) -> Self {
        Self::from_rows(rows)
    }
}

impl<T: Scalar> Index<usize> for Mat3<T> {
    type Output = [T; 3];
    fn index(&self, row: usize) -> &[T; 3] {
        &self.rows[row]
    }
}

impl<T: Scalar> IndexMut<usize> for Mat3<T> {
    fn index_mut(&mut self, row: usize) -> &mut [T; 3] {
        &mut self.rows[row]
    }
}

impl<T: Scalar> Mul for Mat3<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> MulAssign for Mat3<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<T: Scalar> Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;
    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        self.mul_vec3(&rhs)
    }
}

impl<T: Scalar> fmt::Display for Mat3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            crate::scalar::write_components(f, row)?;
        }
        Ok(())
    }
}
