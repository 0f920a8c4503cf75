// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{Mat4, Real, Scalar, Swizzle, Vec2, Vec3, Vec4, SLERP_EPSILON};

/// Quaternion stored as `(x, y, z, w)` with `w` the scalar part.
///
/// * All angles are expressed in radians.
/// * Unit length is expected for rotations but never enforced; call
///   [`normalize`](Self::normalize) after operations that drift (`lerp`,
///   scalar arithmetic, long product chains).
/// * `Default` is the identity rotation.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat<T> {
    data: [T; 4],
}

/// `f32` quaternion.
pub type Quatf = Quat<f32>;
/// `f64` quaternion.
pub type Quatd = Quat<f64>;

impl<T: Real> Quat<T> {
    /// Creates a quaternion from components.
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity rotation `(0, 0, 0, 1)`.
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
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

    /// Scalar (W) component.
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

    /// Returns the components as an array.
    pub fn to_array(self) -> [T; 4] {
        self.data
    }

    /// Vector part `(x, y, z)`.
    pub fn xyz(&self) -> Vec3<T> {
        Vec3::new(self.x(), self.y(), self.z())
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// The axis is used as given; pass a unit vector to get a unit
    /// quaternion.
    ///
    /// # Examples
    /// ```
    /// use core::f64::consts::FRAC_PI_2;
    /// use geek_math::{Quat, Vec3};
    /// let q = Quat::from_axis_angle(&Vec3::new(0.0, 0.0, 1.0), FRAC_PI_2);
    /// let v = Vec3::new(1.0, 0.0, 0.0).rotate(&q);
    /// assert!((v - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-12);
    /// ```
    pub fn from_axis_angle(axis: &Vec3<T>, angle: T) -> Self {
        let (sin_half, cos_half) = (angle / T::two()).sin_cos();
        let v = axis.scale(sin_half);
        Self::new(v.x(), v.y(), v.z(), cos_half)
    }

    /// Extracts the rotation stored in the upper-left 3×3 block of `m`.
    ///
    /// Reads the block in the orientation written by
    /// [`rotation_matrix`](Self::rotation_matrix), picking the numerically
    /// largest of `w`, `x`, `y`, `z` to divide by. The result is normalized.
    pub fn from_rotation_matrix(m: &Mat4<T>) -> Self {
        let one = T::one();
        let two = T::two();
        let quarter = one / T::from_i8(4);
        let half = one / two;
        let (m00, m01, m02) = (m[0][0], m[0][1], m[0][2]);
        let (m10, m11, m12) = (m[1][0], m[1][1], m[1][2]);
        let (m20, m21, m22) = (m[2][0], m[2][1], m[2][2]);
        let trace = m00 + m11 + m22;

        let q = if trace > T::zero() {
            let s = half / (trace + one).sqrt();
            Self::new((m21 - m12) * s, (m02 - m20) * s, (m10 - m01) * s, quarter / s)
        } else if m00 > m11 && m00 > m22 {
            let s = two * (one + m00 - m11 - m22).sqrt();
            Self::new(quarter * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            let s = two * (one + m11 - m00 - m22).sqrt();
            Self::new((m01 + m10) / s, quarter * s, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            let s = two * (one + m22 - m00 - m11).sqrt();
            Self::new((m02 + m20) / s, (m12 + m21) / s, quarter * s, (m10 - m01) / s)
        };
        q.normalize()
    }

    fn map(self, f: impl Fn(T) -> T) -> Self {
        Self { data: self.data.map(f) }
    }

    fn zip_with(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        let mut data = self.data;
        for (a, b) in data.iter_mut().zip(rhs.data) {
            *a = f(*a, b);
        }
        Self { data }
    }

    /// Four-dimensional dot product.
    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(other.data)
            .fold(T::zero(), |acc, (a, b)| acc + *a * b)
    }

    /// Squared norm.
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Norm.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Negates the vector part.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// Multiplies every component by `factor`.
    pub fn scale(&self, factor: T) -> Self {
        self.map(|a| a * factor)
    }

    /// Divides every component by `divisor`; returns identity when
    /// `divisor` is zero.
    pub fn div_scalar(&self, divisor: T) -> Self {
        if divisor.is_zero() {
            tracing::trace!("quaternion divided by zero scalar; returning identity");
            return Self::identity();
        }
        self.map(|a| a / divisor)
    }

    /// Scales to unit length; the zero quaternion normalizes to identity.
    pub fn normalize(&self) -> Self {
        self.div_scalar(self.length())
    }

    /// Hamilton product `self * other`.
    ///
    /// Applying the result to a vector rotates by `other` first, then by
    /// `self`. Non-commutative.
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;
        Self::new(
            ax * bw + aw * bx + ay * bz - az * by,
            ay * bw + aw * by + az * bx - ax * bz,
            az * bw + aw * bz + ax * by - ay * bx,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Product with the pure quaternion `(v, 0)`.
    pub fn mul_vec3(&self, v: &Vec3<T>) -> Self {
        let [x, y, z, w] = self.data;
        let (vx, vy, vz) = (v.x(), v.y(), v.z());
        Self::new(
            w * vx + y * vz - z * vy,
            w * vy + z * vx - x * vz,
            w * vz + x * vy - y * vx,
            -x * vx - y * vy - z * vz,
        )
    }

    /// Component-wise product.
    pub fn mul_elementwise(&self, other: &Self) -> Self {
        self.zip_with(*other, |a, b| a * b)
    }

    /// Reflects about `normal` in four dimensions.
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - normal.scale(self.dot(normal) * T::two())
    }

    /// `(destination - self) * t + self`; neither clamped nor normalized.
    pub fn lerp(&self, destination: &Self, t: T) -> Self {
        (*destination - *self).scale(t) + *self
    }

    fn corrected(&self, destination: &Self, shortest_path: bool) -> (Self, T) {
        let cos = self.dot(destination);
        if shortest_path && cos < T::zero() {
            (-*destination, -cos)
        } else {
            (*destination, cos)
        }
    }

    /// Normalized linear interpolation.
    ///
    /// With `shortest_path`, `destination` is negated when it lies on the
    /// far hemisphere so the blend takes the short arc.
    pub fn nlerp(&self, destination: &Self, t: T, shortest_path: bool) -> Self {
        let (destination, _) = self.corrected(destination, shortest_path);
        self.lerp(&destination, t).normalize()
    }

    /// Spherical linear interpolation using [`SLERP_EPSILON`].
    ///
    /// At the crate's threshold every input takes the [`nlerp`](Self::nlerp)
    /// path; see [`slerp_with_threshold`](Self::slerp_with_threshold).
    pub fn slerp(&self, destination: &Self, t: T, shortest_path: bool) -> Self {
        self.slerp_with_threshold(destination, t, shortest_path, T::from_f64(SLERP_EPSILON))
    }

    /// Spherical linear interpolation that falls back to `nlerp` when
    /// `|cos| > 1 - threshold`.
    ///
    /// # Examples
    /// ```
    /// use core::f64::consts::FRAC_PI_2;
    /// use geek_math::{Quat, Vec3};
    /// let axis = Vec3::new(0.0, 1.0, 0.0);
    /// let a = Quat::identity();
    /// let b = Quat::from_axis_angle(&axis, FRAC_PI_2);
    /// let mid = a.slerp_with_threshold(&b, 0.5, true, 1e-3);
    /// let expected = Quat::from_axis_angle(&axis, FRAC_PI_2 / 2.0);
    /// assert!((mid - expected).length() < 1e-12);
    /// ```
    pub fn slerp_with_threshold(&self, destination: &Self, t: T, shortest_path: bool, threshold: T) -> Self {
        let (destination, cos) = self.corrected(destination, shortest_path);
        match slerp_weights(cos, t, threshold) {
            Some((from, to)) => self.scale(from) + destination.scale(to),
            None => self.nlerp(&destination, t, false),
        }
    }

    /// Clamps each component into `[min, max]`.
    pub fn clamp(&self, min: &Self, max: &Self) -> Self {
        let mut data = self.data;
        for ((v, lo), hi) in data.iter_mut().zip(min.data).zip(max.data) {
            if *v < lo {
                *v = lo;
            } else if *v > hi {
                *v = hi;
            }
        }
        Self { data }
    }

    /// Component-wise minimum.
    pub fn min(&self, other: &Self) -> Self {
        self.zip_with(*other, T::min_of)
    }

    /// Component-wise maximum.
    pub fn max(&self, other: &Self) -> Self {
        self.zip_with(*other, T::max_of)
    }

    /// Rotation matrix for `self`, acting on column vectors.
    ///
    /// Its columns are the rotated right, up and forward axes
    /// ([`right`](Self::right), [`up`](Self::up), [`forward`](Self::forward));
    /// its rows are the same axes rotated by the inverse, i.e. the
    /// world-to-local basis. No normalization is applied.
    pub fn rotation_matrix(&self) -> Mat4<T> {
        let [x, y, z, w] = self.data;
        let (one, two, zero) = (T::one(), T::two(), T::zero());

        let row0 = [
            one - two * (y * y + z * z),
            two * (x * y - w * z),
            two * (x * z + w * y),
            zero,
        ];
        let row1 = [
            two * (x * y + w * z),
            one - two * (x * x + z * z),
            two * (y * z - w * x),
            zero,
        ];
        let row2 = [
            two * (x * z - w * y),
            two * (y * z + w * x),
            one - two * (x * x + y * y),
            zero,
        ];
        Mat4::from_rows([row0, row1, row2, [zero, zero, zero, one]])
    }

    fn rotated(&self, x: i8, y: i8, z: i8) -> Vec3<T> {
        Vec3::new(T::from_i8(x), T::from_i8(y), T::from_i8(z)).rotate(self)
    }

    /// `+Z` rotated by `self`.
    pub fn forward(&self) -> Vec3<T> {
        self.rotated(0, 0, 1)
    }

    /// `-Z` rotated by `self`.
    pub fn backward(&self) -> Vec3<T> {
        self.rotated(0, 0, -1)
    }

    /// `-X` rotated by `self`.
    pub fn left(&self) -> Vec3<T> {
        self.rotated(-1, 0, 0)
    }

    /// `+X` rotated by `self`.
    pub fn right(&self) -> Vec3<T> {
        self.rotated(1, 0, 0)
    }

    /// `+Y` rotated by `self`.
    pub fn up(&self) -> Vec3<T> {
        self.rotated(0, 1, 0)
    }

    /// `-Y` rotated by `self`.
    pub fn down(&self) -> Vec3<T> {
        self.rotated(0, -1, 0)
    }
}

/// Arc blend weights `(from, to)` for interpolating between two unit
/// 4-vectors whose dot product is `cos`. `None` selects the `nlerp` path.
pub(crate) fn slerp_weights<T: Real>(cos: T, t: T, threshold: T) -> Option<(T, T)> {
    let one = T::one();
    if cos.abs() > one - threshold {
        return None;
    }
    let sin = (one - cos * cos).sqrt();
    if sin.is_zero() {
        return None;
    }
    let angle = sin.atan2(cos);
    let inv_sin = one / sin;
    Some((((one - t) * angle).sin() * inv_sin, (t * angle).sin() * inv_sin))
}

impl<T: Real> Default for Quat<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> From<[T; 4]> for Quat<T> {
    fn from(value: [T; 4]) -> Self {
        Self { data: value }
    }
}

impl<T: Real> From<Quat<T>> for [T; 4] {
    fn from(value: Quat<T>) -> Self {
        value.data
    }
}

/// `(x, y, z, 1)`.
impl<T: Real> From<Vec3<T>> for Quat<T> {
    fn from(value: Vec3<T>) -> Self {
        Self::new(value.x(), value.y(), value.z(), T::one())
    }
}

/// `(x, y, 0, 1)`.
impl<T: Real> From<Vec2<T>> for Quat<T> {
    fn from(value: Vec2<T>) -> Self {
        Self::new(value.x(), value.y(), T::zero(), T::one())
    }
}

impl<T: Real> From<Vec4<T>> for Quat<T> {
    fn from(value: Vec4<T>) -> Self {
        Self { data: value.to_array() }
    }
}

impl<T: Real> From<Quat<T>> for Vec4<T> {
    fn from(value: Quat<T>) -> Self {
        Self::from(value.data)
    }
}

impl<T: Real> Index<usize> for Quat<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Real> IndexMut<usize> for Quat<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Real> Swizzle<T> for Quat<T> {
    const LEN: usize = 4;
    fn component(&self, index: usize) -> T {
        self.data[index]
    }
}

impl<T: Real> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::scalar::write_components(f, &self.data)
    }
}

impl<T: Real> Add for Quat<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Real> Sub for Quat<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Real> Mul for Quat<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Real> Mul<Vec3<T>> for Quat<T> {
    type Output = Self;
    fn mul(self, rhs: Vec3<T>) -> Self {
        self.mul_vec3(&rhs)
    }
}

impl<T: Real> AddAssign for Quat<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Real> SubAssign for Quat<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Real> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<T: Real> Neg for Quat<T> {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

macro_rules! impl_quat_scalar_ops {
    ($($t:ty),+) => {$(
        impl Add<$t> for Quat<$t> {
            type Output = Self;
            fn add(self, rhs: $t) -> Self {
                self.map(|a| a + rhs)
            }
        }

        impl Sub<$t> for Quat<$t> {
            type Output = Self;
            fn sub(self, rhs: $t) -> Self {
                self.map(|a| a - rhs)
            }
        }

        impl Mul<$t> for Quat<$t> {
            type Output = Self;
            fn mul(self, rhs: $t) -> Self {
                self.scale(rhs)
            }
        }

        impl Mul<Quat<$t>> for $t {
            type Output = Quat<$t>;
            fn mul(self, rhs: Quat<$t>) -> Quat<$t> {
                rhs.scale(self)
            }
        }

        impl core::ops::Div<$t> for Quat<$t> {
            type Output = Self;
            fn div(self, rhs: $t) -> Self {
                self.div_scalar(rhs)
            }
        }

        impl AddAssign<$t> for Quat<$t> {
            fn add_assign(&mut self, rhs: $t) {
                *self = *self + rhs;
            }
        }

        impl SubAssign<$t> for Quat<$t> {
            fn sub_assign(&mut self, rhs: $t) {
                *self = *self - rhs;
            }
        }

        impl MulAssign<$t> for Quat<$t> {
            fn mul_assign(&mut self, rhs: $t) {
                *self = self.scale(rhs);
            }
        }

        impl core::ops::DivAssign<$t> for Quat<$t> {
            fn div_assign(&mut self, rhs: $t) {
                if rhs.is_zero() {
                    return;
                }
                *self = self.div_scalar(rhs);
            }
        }
    )+};
}

impl_quat_scalar_ops!(f32, f64);
