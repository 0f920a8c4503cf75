// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar abstraction shared by every vector, quaternion and matrix type.
//!
//! Two layers:
//! - [`Scalar`]: ring arithmetic, ordering, and a square root. Implemented for
//!   `f32`, `f64` and `i32` so the integer families reuse the same generic
//!   code paths as the float ones.
//! - [`Real`]: adds negation and the transcendentals needed by rotations,
//!   interpolation and projections. Implemented for `f32` and `f64` only.
//!
//! Integer semantics follow plain `i32` arithmetic: `sqrt` truncates toward
//! zero and division truncates. Division by zero is never reached through the
//! library because every divide checks [`Scalar::is_zero`] first.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Arithmetic core for all fixed-size math types.
///
/// Arithmetic operators are required through the standard operator traits so
/// generic code can use `+`, `-`, `*`, `/` and their compound forms directly.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Returns the additive identity (zero).
    fn zero() -> Self;

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    /// Returns `one() + one()`.
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Lossless conversion from a small integer literal.
    fn from_i8(value: i8) -> Self;

    /// Returns `true` when `self` equals zero exactly.
    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    /// Square root. Integer implementations truncate toward zero and map
    /// negative inputs to zero.
    fn sqrt(self) -> Self;

    /// Smaller of two values; returns `other` when the values compare equal.
    fn min_of(self, other: Self) -> Self {
        if self < other {
            self
        } else {
            other
        }
    }

    /// Larger of two values; returns `other` when the values compare equal.
    fn max_of(self, other: Self) -> Self {
        if self > other {
            self
        } else {
            other
        }
    }

    /// Writes the value using the debug-print convention of the math types:
    /// six fractional digits for floats, plain digits for integers.
    fn fmt_component(self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Floating-point scalars: negation plus the transcendentals used by
/// rotations, interpolation and projections. Angles are radians.
pub trait Real: Scalar + Neg<Output = Self> {
    /// Converts from `f64`, rounding to the nearest representable value.
    fn from_f64(value: f64) -> Self;

    /// Widens to `f64` for diagnostics and error payloads.
    fn to_f64(self) -> f64;

    /// Sine of `self`.
    fn sin(self) -> Self;

    /// Cosine of `self`.
    fn cos(self) -> Self;

    /// Returns both sine and cosine of `self`.
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// Tangent of `self`.
    fn tan(self) -> Self;

    /// Four-quadrant arctangent of `self / other`.
    fn atan2(self, other: Self) -> Self;

    /// Arc cosine of `self`.
    fn acos(self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;
}

macro_rules! impl_float_scalar {
    ($($t:ty),+) => {$(
        impl Scalar for $t {
            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn from_i8(value: i8) -> Self {
                <$t>::from(value)
            }

            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            fn fmt_component(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{self:.6}")
            }
        }

        impl Real for $t {
            #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[allow(clippy::useless_conversion)]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            fn sin(self) -> Self {
                <$t>::sin(self)
            }

            fn cos(self) -> Self {
                <$t>::cos(self)
            }

            fn sin_cos(self) -> (Self, Self) {
                <$t>::sin_cos(self)
            }

            fn tan(self) -> Self {
                <$t>::tan(self)
            }

            fn atan2(self, other: Self) -> Self {
                <$t>::atan2(self, other)
            }

            fn acos(self) -> Self {
                <$t>::acos(self)
            }

            fn abs(self) -> Self {
                <$t>::abs(self)
            }
        }
    )+};
}

impl_float_scalar!(f32, f64);

impl Scalar for i32 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn from_i8(value: i8) -> Self {
        i32::from(value)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn sqrt(self) -> Self {
        if self <= 0 {
            return 0;
        }
        f64::from(self).sqrt() as i32
    }

    fn fmt_component(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

/// Adapter so `Display` impls can route each component through
/// [`Scalar::fmt_component`].
pub(crate) struct Component<T>(pub(crate) T);

impl<T: Scalar> fmt::Display for Component<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_component(f)
    }
}

/// Writes `( a | b | c )` for a slice of components.
pub(crate) fn write_components<T: Scalar>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    f.write_str("( ")?;
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(" | ")?;
        }
        write!(f, "{}", Component(*v))?;
    }
    f.write_str(" )")
}
