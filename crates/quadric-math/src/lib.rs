#![warn(missing_docs)]

//! Math types for the quadric intersection kernel.
//!
//! Thin wrappers around nalgebra providing domain-specific types for
//! 3D analytic geometry: points, vectors, directions, and the scalar
//! abstraction that lets every algorithm run in single or double
//! precision with an appropriately scaled zero tolerance.

use nalgebra::RealField;

/// A point in 3D space.
pub type Point3<T> = nalgebra::Point3<T>;

/// A vector in 3D space.
pub type Vec3<T> = nalgebra::Vector3<T>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3<T> = nalgebra::Unit<nalgebra::Vector3<T>>;

/// Scalar type for geometric computation.
///
/// Implemented for `f32` and `f64`. Every classification in the kernel
/// (coefficient magnitude tests, discriminant tests) compares against
/// [`Real::ZERO_TOLERANCE`], so the same algorithm behaves consistently
/// in both precisions.
pub trait Real: RealField + Copy {
    /// Threshold below which a scalar is treated as zero.
    ///
    /// One shared constant per precision. The true rounding error of a
    /// configuration grows with its coordinate scale, but the kernel
    /// keeps a single fixed tolerance so coefficient tests and
    /// discriminant tests can never disagree about which degenerate
    /// branch applies.
    const ZERO_TOLERANCE: Self;
}

impl Real for f32 {
    const ZERO_TOLERANCE: Self = 1e-6;
}

impl Real for f64 {
    const ZERO_TOLERANCE: Self = 1e-8;
}
