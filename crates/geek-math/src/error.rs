// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for fallible matrix constructors.

use thiserror::Error;

/// Errors produced by the math constructors that validate their inputs.
///
/// Everything else in the crate is total: degenerate division and singular
/// inversion have defined fallback values instead of errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// A projection was requested with `near >= far`.
    #[error("invalid projection depth range: near ({near}) must be less than far ({far})")]
    InvalidProjectionRange {
        /// Requested near plane distance.
        near: f64,
        /// Requested far plane distance.
        far: f64,
    },
}
