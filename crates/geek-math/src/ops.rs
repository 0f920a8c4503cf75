// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared vector plumbing: the component-wise API and operator impls are the
//! same for every arity, so they are stamped out once per vector type here.

/// Generates the arity-independent inherent API and operators for a vector
/// type `$vec<T>` backed by `data: [T; $n]`.
macro_rules! impl_vector_common {
    ($vec:ident, $n:literal) => {
        impl<T: $crate::Scalar> $vec<T> {
            /// Creates a vector with every component set to `value`.
            pub fn splat(value: T) -> Self {
                Self { data: [value; $n] }
            }

            /// Returns the zero vector.
            pub fn zero() -> Self {
                Self::splat(T::zero())
            }

            /// Returns the components as an array.
            pub fn to_array(self) -> [T; $n] {
                self.data
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

            /// Multiplies every component by `factor`.
            pub fn scale(&self, factor: T) -> Self {
                self.map(|a| a * factor)
            }

            /// Divides every component by `divisor`; returns the zero vector
            /// when `divisor` is zero.
            pub fn div_scalar(&self, divisor: T) -> Self {
                if divisor.is_zero() {
                    tracing::trace!("vector divided by zero scalar; returning zero");
                    return Self::zero();
                }
                self.map(|a| a / divisor)
            }

            /// Component-wise division; components whose divisor is zero
            /// become zero.
            pub fn div_elementwise(&self, divisor: &Self) -> Self {
                self.zip_with(*divisor, |a, b| if b.is_zero() { T::zero() } else { a / b })
            }

            /// Dot product.
            pub fn dot(&self, other: &Self) -> T {
                self.data
                    .iter()
                    .zip(other.data)
                    .fold(T::zero(), |acc, (a, b)| acc + *a * b)
            }

            /// Squared magnitude.
            pub fn length_squared(&self) -> T {
                self.dot(self)
            }

            /// Magnitude. Integer vectors truncate toward zero.
            pub fn length(&self) -> T {
                self.length_squared().sqrt()
            }

            /// Divides by [`length`](Self::length) through the safe-division
            /// policy, so the zero vector normalizes to the zero vector.
            pub fn normalize(&self) -> Self {
                self.div_scalar(self.length())
            }

            /// Reflects about `normal`: `self - normal * (2 * self·normal)`.
            pub fn reflect(&self, normal: &Self) -> Self {
                *self - normal.scale(self.dot(normal) * T::two())
            }

            /// `(destination - self) * t + self`; `t` is not clamped.
            pub fn lerp(&self, destination: &Self, t: T) -> Self {
                (*destination - *self).scale(t) + *self
            }

            /// Clamps each component into `[min, max]` (component-wise).
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

            /// Smallest component.
            pub fn min_element(&self) -> T {
                self.data[1..].iter().fold(self.data[0], |acc, v| acc.min_of(*v))
            }

            /// Largest component.
            pub fn max_element(&self) -> T {
                self.data[1..].iter().fold(self.data[0], |acc, v| acc.max_of(*v))
            }
        }

        impl<T: $crate::Scalar> Default for $vec<T> {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl<T: $crate::Scalar> From<[T; $n]> for $vec<T> {
            fn from(value: [T; $n]) -> Self {
                Self { data: value }
            }
        }

        impl<T: $crate::Scalar> From<$vec<T>> for [T; $n] {
            fn from(value: $vec<T>) -> Self {
                value.data
            }
        }

        impl<T: $crate::Scalar> core::ops::Index<usize> for $vec<T> {
            type Output = T;
            fn index(&self, index: usize) -> &T {
                &self.data[index]
            }
        }

        impl<T: $crate::Scalar> core::ops::IndexMut<usize> for $vec<T> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                &mut self.data[index]
            }
        }

        impl<T: $crate::Scalar> $crate::Swizzle<T> for $vec<T> {
            const LEN: usize = $n;
            fn component(&self, index: usize) -> T {
                self.data[index]
            }
        }

        impl<T: $crate::Scalar> core::fmt::Display for $vec<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                $crate::scalar::write_components(f, &self.data)
            }
        }

        impl<T: $crate::Scalar> core::ops::Add for $vec<T> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                self.zip_with(rhs, |a, b| a + b)
            }
        }

        impl<T: $crate::Scalar> core::ops::Sub for $vec<T> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                self.zip_with(rhs, |a, b| a - b)
            }
        }

        impl<T: $crate::Scalar> core::ops::Mul for $vec<T> {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                self.zip_with(rhs, |a, b| a * b)
            }
        }

        impl<T: $crate::Scalar> core::ops::Div for $vec<T> {
            type Output = Self;
            fn div(self, rhs: Self) -> Self {
                self.div_elementwise(&rhs)
            }
        }

        impl<T: $crate::Scalar> core::ops::AddAssign for $vec<T> {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: $crate::Scalar> core::ops::SubAssign for $vec<T> {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: $crate::Scalar> core::ops::MulAssign for $vec<T> {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        // Components with a zero divisor keep their value, mirroring `/=` by
        // a zero scalar.
        impl<T: $crate::Scalar> core::ops::DivAssign for $vec<T> {
            fn div_assign(&mut self, rhs: Self) {
                for (a, b) in self.data.iter_mut().zip(rhs.data) {
                    if !b.is_zero() {
                        *a /= b;
                    }
                }
            }
        }

        impl<T: $crate::Real> core::ops::Neg for $vec<T> {
            type Output = Self;
            fn neg(self) -> Self {
                self.map(|a| -a)
            }
        }

        $crate::ops::impl_vector_scalar_ops!($vec, f32, f64, i32);
    };
}

/// Operators mixing a vector with its own scalar type. Emitted per concrete
/// scalar so `v * s` and `v * w` never overlap.
macro_rules! impl_vector_scalar_ops {
    ($vec:ident, $($t:ty),+) => {$(
        impl core::ops::Add<$t> for $vec<$t> {
            type Output = Self;
            fn add(self, rhs: $t) -> Self {
                self.map(|a| a + rhs)
            }
        }

        impl core::ops::Sub<$t> for $vec<$t> {
            type Output = Self;
            fn sub(self, rhs: $t) -> Self {
                self.map(|a| a - rhs)
            }
        }

        impl core::ops::Mul<$t> for $vec<$t> {
            type Output = Self;
            fn mul(self, rhs: $t) -> Self {
                self.scale(rhs)
            }
        }

        impl core::ops::Mul<$vec<$t>> for $t {
            type Output = $vec<$t>;
            fn mul(self, rhs: $vec<$t>) -> $vec<$t> {
                rhs.scale(self)
            }
        }

        impl core::ops::Div<$t> for $vec<$t> {
            type Output = Self;
            fn div(self, rhs: $t) -> Self {
                self.div_scalar(rhs)
            }
        }

        impl core::ops::AddAssign<$t> for $vec<$t> {
            fn add_assign(&mut self, rhs: $t) {
                *self = *self + rhs;
            }
        }

        impl core::ops::SubAssign<$t> for $vec<$t> {
            fn sub_assign(&mut self, rhs: $t) {
                *self = *self - rhs;
            }
        }

        impl core::ops::MulAssign<$t> for $vec<$t> {
            fn mul_assign(&mut self, rhs: $t) {
                *self = self.scale(rhs);
            }
        }

        impl core::ops::DivAssign<$t> for $vec<$t> {
            fn div_assign(&mut self, rhs: $t) {
                if $crate::Scalar::is_zero(rhs) {
                    return;
                }
                *self = self.div_scalar(rhs);
            }
        }
    )+};
}

pub(crate) use impl_vector_common;
pub(crate) use impl_vector_scalar_ops;
