// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Index, IndexMut, Mul, MulAssign};

use crate::{deg_to_rad, MathError, Quat, Real, Scalar, Vec3, Vec4};

/// Row-major 4×4 matrix acting on column vectors.
///
/// - `m[row][col]` addresses a single element.
/// - `m * v` multiplies rows by the column vector `v`, so `(a * b) * v ==
///   a * (b * v)` and `a * b` applies `b` first.
/// - Affine transforms keep their translation in the last column.
///
/// `Default` is the zero matrix; use [`Mat4::identity`] for the
/// multiplicative identity.
///
/// # Examples
/// ```
/// use geek_math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0_f32, -3.0, 2.0);
/// let p = Vec3::new(2.0_f32, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p), Vec3::new(7.0, 1.0, 1.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4<T> {
    rows: [[T; 4]; 4],
}

/// `f32` 4×4 matrix.
pub type Mat4f = Mat4<f32>;
/// `f64` 4×4 matrix.
pub type Mat4d = Mat4<f64>;
/// `i32` 4×4 matrix.
pub type Mat4i = Mat4<i32>;

impl<T: Scalar> Mat4<T> {
    /// Creates a matrix from its rows.
    pub const fn from_rows(rows: [[T; 4]; 4]) -> Self {
        Self { rows }
    }

    /// Creates a matrix from 16 row-major elements.
    pub fn new(data: [T; 16]) -> Self {
        let mut rows = [[T::zero(); 4]; 4];
        for (i, v) in data.into_iter().enumerate() {
            rows[i / 4][i % 4] = v;
        }
        Self { rows }
    }

    /// Matrix with every element zero.
    pub fn zero() -> Self {
        Self { rows: [[T::zero(); 4]; 4] }
    }

    /// Returns the identity matrix.
    pub fn identity() -> Self {
        Self::diagonal(T::one(), T::one(), T::one(), T::one())
    }

    fn diagonal(a: T, b: T, c: T, d: T) -> Self {
        let mut m = Self::zero();
        m.rows[0][0] = a;
        m.rows[1][1] = b;
        m.rows[2][2] = c;
        m.rows[3][3] = d;
        m
    }

    /// Non-uniform scale.
    pub fn scale(x: T, y: T, z: T) -> Self {
        Self::diagonal(x, y, z, T::one())
    }

    /// Non-uniform scale by the components of `s`.
    pub fn scale_vec(s: &Vec3<T>) -> Self {
        Self::scale(s.x(), s.y(), s.z())
    }

    /// Translation by `(x, y, z)` stored in the last column.
    pub fn translation(x: T, y: T, z: T) -> Self {
        let mut m = Self::identity();
        m.rows[0][3] = x;
        m.rows[1][3] = y;
        m.rows[2][3] = z;
        m
    }

    /// Translation by `t`.
    pub fn translation_vec(t: &Vec3<T>) -> Self {
        Self::translation(t.x(), t.y(), t.z())
    }

    /// Matrix whose rows are `right`, `up`, then `forward`.
    ///
    /// For an orthonormal basis this is the world-to-local change of basis:
    /// it maps `right` to +X, `up` to +Y and `forward` to +Z, and its
    /// transpose is the local-to-world rotation.
    pub fn from_basis(forward: &Vec3<T>, up: &Vec3<T>, right: &Vec3<T>) -> Self {
        let zero = T::zero();
        Self::from_rows([
            [right.x(), right.y(), right.z(), zero],
            [up.x(), up.y(), up.z(), zero],
            [forward.x(), forward.y(), forward.z(), zero],
            [zero, zero, zero, T::one()],
        ])
    }

    /// Returns the rows as nested arrays.
    pub fn to_rows(self) -> [[T; 4]; 4] {
        self.rows
    }

    /// Row `index`.
    pub fn row(&self, index: usize) -> Vec4<T> {
        Vec4::from(self.rows[index])
    }

    /// Column `index`.
    pub fn col(&self, index: usize) -> Vec4<T> {
        Vec4::new(
            self.rows[0][index],
            self.rows[1][index],
            self.rows[2][index],
            self.rows[3][index],
        )
    }

    /// Element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.rows[row][col]
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
                *cell = (0..4).fold(T::zero(), |acc, k| acc + self.rows[r][k] * rhs.rows[k][c]);
            }
        }
        out
    }

    /// Matrix-vector product `self * v`.
    pub fn mul_vec4(&self, v: &Vec4<T>) -> Vec4<T> {
        let [x, y, z, w] = self.rows.map(|row| Vec4::from(row).dot(v));
        Vec4::new(x, y, z, w)
    }

    /// Transforms a point (`w = 1`); no perspective divide.
    pub fn transform_point(&self, point: &Vec3<T>) -> Vec3<T> {
        self.mul_vec4(&point.extend(T::one())).truncate()
    }

    /// Transforms a direction (`w = 0`), ignoring translation.
    pub fn transform_direction(&self, direction: &Vec3<T>) -> Vec3<T> {
        self.mul_vec4(&direction.extend(T::zero())).truncate()
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

    fn flatten(&self) -> [T; 16] {
        let mut m = [T::zero(); 16];
        for (i, v) in m.iter_mut().enumerate() {
            *v = self.rows[i / 4][i % 4];
        }
        m
    }

    /// Cofactor expansion of the flattened matrix; entry `i` of the result
    /// is element `i` of the adjugate in row-major order.
    #[rustfmt::skip]
    fn adjugate(m: &[T; 16]) -> [T; 16] {
        [
            m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
                + m[9] * m[7] * m[14] + m[13] * m[6] * m[11] - m[13] * m[7] * m[10],
            m[1] * m[11] * m[14] - m[1] * m[10] * m[15] + m[9] * m[2] * m[15]
                - m[9] * m[3] * m[14] - m[13] * m[2] * m[11] + m[13] * m[3] * m[10],
            m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
                + m[5] * m[3] * m[14] + m[13] * m[2] * m[7] - m[13] * m[3] * m[6],
            m[1] * m[7] * m[10] - m[1] * m[6] * m[11] + m[5] * m[2] * m[11]
                - m[5] * m[3] * m[10] - m[9] * m[2] * m[7] + m[9] * m[3] * m[6],

            m[4] * m[11] * m[14] - m[4] * m[10] * m[15] + m[8] * m[6] * m[15]
                - m[8] * m[7] * m[14] - m[12] * m[6] * m[11] + m[12] * m[7] * m[10],
            m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
                + m[8] * m[3] * m[14] + m[12] * m[2] * m[11] - m[12] * m[3] * m[10],
            m[0] * m[7] * m[14] - m[0] * m[6] * m[15] + m[4] * m[2] * m[15]
                - m[4] * m[3] * m[14] - m[12] * m[2] * m[7] + m[12] * m[3] * m[6],
            m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
                + m[4] * m[3] * m[10] + m[8] * m[2] * m[7] - m[8] * m[3] * m[6],

            m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
                + m[8] * m[7] * m[13] + m[12] * m[5] * m[11] - m[12] * m[7] * m[9],
            m[0] * m[11] * m[13] - m[0] * m[9] * m[15] + m[8] * m[1] * m[15]
                - m[8] * m[3] * m[13] - m[12] * m[1] * m[11] + m[12] * m[3] * m[9],
            m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
                + m[4] * m[3] * m[13] + m[12] * m[1] * m[7] - m[12] * m[3] * m[5],
            m[0] * m[7] * m[9] - m[0] * m[5] * m[11] + m[4] * m[1] * m[11]
                - m[4] * m[3] * m[9] - m[8] * m[1] * m[7] + m[8] * m[3] * m[5],

            m[4] * m[10] * m[13] - m[4] * m[9] * m[14] + m[8] * m[5] * m[14]
                - m[8] * m[6] * m[13] - m[12] * m[5] * m[10] + m[12] * m[6] * m[9],
            m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
                + m[8] * m[2] * m[13] + m[12] * m[1] * m[10] - m[12] * m[2] * m[9],
            m[0] * m[6] * m[13] - m[0] * m[5] * m[14] + m[4] * m[1] * m[14]
                - m[4] * m[2] * m[13] - m[12] * m[1] * m[6] + m[12] * m[2] * m[5],
            m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
                + m[4] * m[2] * m[9] + m[8] * m[1] * m[6] - m[8] * m[2] * m[5],
        ]
    }

    fn determinant_with(m: &[T; 16], adj: &[T; 16]) -> T {
        m[0] * adj[0] + m[1] * adj[4] + m[2] * adj[8] + m[3] * adj[12]
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// Integer matrices multiply four elements per term and sum up to
    /// 24 such terms, so `i32` overflow is ruled out only while every
    /// element has magnitude `<= 96`; larger entries may overflow.
    pub fn determinant(&self) -> T {
        let m = self.flatten();
        Self::determinant_with(&m, &Self::adjugate(&m))
    }

    /// Inverse via the adjugate.
    ///
    /// Returns `self` unchanged when the determinant is exactly zero; there
    /// is no tolerance, so near-singular matrices produce large elements.
    /// Integer matrices compute `1 / det` with integer division, so only
    /// unimodular matrices (`det = ±1`) invert meaningfully. The element
    /// range limit of [`determinant`](Self::determinant) applies here too.
    pub fn inverse(&self) -> Self {
        let m = self.flatten();
        let adj = Self::adjugate(&m);
        let det = Self::determinant_with(&m, &adj);
        if det.is_zero() {
            tracing::trace!("inverse of singular 4x4 matrix requested; returning input");
            return *self;
        }
        let inv_det = T::one() / det;
        Self::new(adj.map(|v| v * inv_det))
    }

    /// Treats `q` as the 4-vector `(x, y, z, w)` and returns `self * q`.
    pub fn transformation(&self, q: &Quat<T>) -> Quat<T>
    where
        T: Real,
    {
        Quat::from(self.mul_vec4(&Vec4::from(q.to_array())))
    }
}

impl<T: Real> Mat4<T> {
    /// Rotation matrix for the unit quaternion `q`.
    pub fn rotation(q: &Quat<T>) -> Self {
        q.rotation_matrix()
    }

    /// Counter-clockwise rotation of `angle` radians about +X.
    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([[l, o, o, o], [o, c, -s, o], [o, s, c, o], [o, o, o, l]])
    }

    /// Counter-clockwise rotation of `angle` radians about +Y.
    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([[c, o, s, o], [o, l, o, o], [-s, o, c, o], [o, o, o, l]])
    }

    /// Counter-clockwise rotation of `angle` radians about +Z.
    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([[c, -s, o, o], [s, c, o, o], [o, o, l, o], [o, o, o, l]])
    }

    /// Euler rotation `Rz(z) * Ry(y) * Rx(x)`: X is applied first.
    ///
    /// # Examples
    /// ```
    /// use core::f64::consts::FRAC_PI_2;
    /// use geek_math::{Mat4, Vec3};
    /// let r = Mat4::rotation_euler(0.0, FRAC_PI_2, 0.0);
    /// let v = r.transform_direction(&Vec3::new(0.0, 0.0, 1.0));
    /// assert!((v - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-12);
    /// ```
    pub fn rotation_euler(x: T, y: T, z: T) -> Self {
        Self::rotation_z(z)
            .multiply(&Self::rotation_y(y))
            .multiply(&Self::rotation_x(x))
    }

    /// Orthonormal basis looking along `forward` with `up` as the hint.
    ///
    /// Rows are `up × forward`, `forward × right` and `forward`, all derived
    /// from the normalized inputs, so the result is world-to-local: it maps
    /// `forward` to +Z. It is the inverse (transpose) of the
    /// [`Mat4::rotation`] that carries +Z to `forward` and +Y toward `up`.
    /// `forward` and `up` must not be parallel.
    pub fn look_rotation(forward: &Vec3<T>, up: &Vec3<T>) -> Self {
        let n = forward.normalize();
        let u = up.normalize().cross(&n);
        let v = n.cross(&u);
        Self::from_basis(&n, &v, &u)
    }

    /// Right-handed perspective projection.
    ///
    /// `fov_degrees` is the vertical field of view. View space looks down
    /// `-Z`; `z = -near` maps to NDC `-1` and `z = -far` to `+1`.
    ///
    /// # Errors
    /// [`MathError::InvalidProjectionRange`] when `near >= far`.
    pub fn perspective(fov_degrees: T, aspect: T, near: T, far: T) -> Result<Self, MathError> {
        check_depth_range(near, far)?;
        let two = T::two();
        let f = T::one() / (deg_to_rad(fov_degrees) / two).tan();
        let depth = near - far;

        let mut m = Self::zero();
        m.rows[0][0] = f / aspect;
        m.rows[1][1] = f;
        m.rows[2][2] = (far + near) / depth;
        m.rows[2][3] = two * far * near / depth;
        m.rows[3][2] = -T::one();
        Ok(m)
    }

    /// Right-handed orthographic projection onto the NDC cube.
    ///
    /// # Errors
    /// [`MathError::InvalidProjectionRange`] when `near >= far`.
    ///
    /// # Examples
    /// ```
    /// use geek_math::{Mat4, Vec4};
    /// let m = Mat4::<f64>::orthographic(-1.0, 1.0, -1.0, 1.0, 0.1, 100.0).unwrap();
    /// let near = m * Vec4::new(0.0, 0.0, -0.1, 1.0);
    /// assert!((near.z() + 1.0).abs() < 1e-9);
    /// assert!(Mat4::<f64>::orthographic(-1.0, 1.0, -1.0, 1.0, 5.0, 5.0).is_err());
    /// ```
    pub fn orthographic(
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
    ) -> Result<Self, MathError> {
        check_depth_range(near, far)?;
        let two = T::two();
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;

        let mut m = Self::identity();
        m.rows[0][0] = two / width;
        m.rows[1][1] = two / height;
        m.rows[2][2] = -two / depth;
        m.rows[0][3] = -((right + left) / width);
        m.rows[1][3] = -((top + bottom) / height);
        m.rows[2][3] = -((far + near) / depth);
        Ok(m)
    }
}

fn check_depth_range<T: Real>(near: T, far: T) -> Result<(), MathError> {
    if near >= far {
        tracing::debug!(near = near.to_f64(), far = far.to_f64(), "rejected projection depth range");
        return Err(MathError::InvalidProjectionRange {
            near: near.to_f64(),
            far: far.to_f64(),
        });
    }
    Ok(())
}

impl<T: Scalar> Default for Mat4<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> From<[[T; 4]; 4]> for Mat4<T> {
    fn from(rows: [[T; 4]; 4]) -> Self {
        Self::from_rows(rows)
    }
}

impl<T: Scalar> From<[T; 16]> for Mat4<T> {
    fn from(data: [T; 16]) -> Self {
        Self::new(data)
    }
}

impl<T: Scalar> Index<usize> for Mat4<T> {
    type Output = [T; 4];
    fn index(&self, row: usize) -> &[T; 4] {
        &self.rows[row]
    }
}

impl<T: Scalar> IndexMut<usize> for Mat4<T> {
    fn index_mut(&mut self, row: usize) -> &mut [T; 4] {
        &mut self.rows[row]
    }
}

impl<T: Scalar> Mul for Mat4<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<'a, T: Scalar> Mul<&'a Mat4<T>> for &'a Mat4<T> {
    type Output = Mat4<T>;
    fn mul(self, rhs: &'a Mat4<T>) -> Mat4<T> {
        self.multiply(rhs)
    }
}

impl<T: Scalar> MulAssign for Mat4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<T: Scalar> MulAssign<&Mat4<T>> for Mat4<T> {
    fn mul_assign(&mut self, rhs: &Mat4<T>) {
        *self = self.multiply(rhs);
    }
}

impl<T: Scalar> Mul<Vec4<T>> for Mat4<T> {
    type Output = Vec4<T>;
    fn mul(self, rhs: Vec4<T>) -> Vec4<T> {
        self.mul_vec4(&rhs)
    }
}

impl<T: Real> Mul<Quat<T>> for Mat4<T> {
    type Output = Quat<T>;
    fn mul(self, rhs: Quat<T>) -> Quat<T> {
        self.transformation(&rhs)
    }
}

impl<T: Scalar> fmt::Display for Mat4<T> {
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
