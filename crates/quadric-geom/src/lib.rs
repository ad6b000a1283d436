#![warn(missing_docs)]

//! Analytic line and quadric surface types for the quadric kernel.
//!
//! Provides the value types consumed by the intersectors: infinite
//! lines, single-sided infinite cones, and spheres. Directions and
//! axes are stored as [`Dir3`], so the unit-norm invariants the
//! intersection algebra relies on are discharged at construction.

use quadric_math::{Dir3, Point3, Real, Vec3};
use thiserror::Error;

/// Errors raised by the fallible geometry constructors.
///
/// The intersection algorithms themselves never fail; every degenerate
/// configuration maps to a classification outcome.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// The two points used to define a line are coincident.
    #[error("line endpoints are coincident, direction is undefined")]
    CoincidentPoints,
    /// A cone half-angle outside the open interval (0, pi/2).
    #[error("cone half-angle must lie strictly between 0 and pi/2")]
    InvalidHalfAngle,
    /// A sphere radius below zero.
    #[error("sphere radius must be non-negative")]
    NegativeRadius,
}

// =============================================================================
// Line3
// =============================================================================

/// An infinite line in 3D space.
///
/// Parameterization: `P(t) = origin + t * direction`, `t` over all reals.
#[derive(Debug, Clone, Copy)]
pub struct Line3<T: Real> {
    /// A point on the line.
    pub origin: Point3<T>,
    /// Unit direction of the line.
    pub direction: Dir3<T>,
}

impl<T: Real> Line3<T> {
    /// Create a line from an origin and a direction.
    ///
    /// The direction will be normalized.
    pub fn new(origin: Point3<T>, direction: Vec3<T>) -> Self {
        Self {
            origin,
            direction: Dir3::new_normalize(direction),
        }
    }

    /// Create a line through two points, directed from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CoincidentPoints`] if the points are too
    /// close for a direction to be defined.
    pub fn from_points(start: Point3<T>, end: Point3<T>) -> Result<Self, GeometryError> {
        let dir = end - start;
        if dir.norm() <= T::ZERO_TOLERANCE {
            return Err(GeometryError::CoincidentPoints);
        }
        Ok(Self {
            origin: start,
            direction: Dir3::new_normalize(dir),
        })
    }

    /// Evaluate the line at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: T) -> Point3<T> {
        self.origin + self.direction.as_ref() * t
    }
}

// =============================================================================
// Cone3
// =============================================================================

/// A single-sided infinite cone (one nappe).
///
/// Defined by its vertex, a unit axis pointing into the nappe, and the
/// cosine of the half-angle between the axis and the cone wall. A point
/// `X` lies on the wall whenever `(X - vertex)·axis = cos_angle * |X - vertex|`.
///
/// `cos_angle` is expected in `(0, 1)` for a proper cone. Edge values are
/// degenerate (the cone collapses to a ray or opens to a plane) but are
/// not rejected; the intersectors classify them through their degenerate
/// branches.
#[derive(Debug, Clone, Copy)]
pub struct Cone3<T: Real> {
    /// Vertex (apex) of the cone.
    pub vertex: Point3<T>,
    /// Unit axis, pointing from the vertex into the nappe.
    pub axis: Dir3<T>,
    /// Cosine of the half-angle.
    pub cos_angle: T,
}

impl<T: Real> Cone3<T> {
    /// Create a cone from vertex, axis, and the cosine of its half-angle.
    ///
    /// The axis will be normalized. `cos_angle` is taken as-is.
    pub fn new(vertex: Point3<T>, axis: Vec3<T>, cos_angle: T) -> Self {
        Self {
            vertex,
            axis: Dir3::new_normalize(axis),
            cos_angle,
        }
    }

    /// Create a cone from vertex, axis, and half-angle in radians.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidHalfAngle`] unless the angle lies
    /// strictly between 0 and pi/2.
    pub fn from_half_angle(
        vertex: Point3<T>,
        axis: Vec3<T>,
        half_angle: T,
    ) -> Result<Self, GeometryError> {
        if half_angle <= T::zero() || half_angle >= T::frac_pi_2() {
            return Err(GeometryError::InvalidHalfAngle);
        }
        Ok(Self::new(vertex, axis, half_angle.cos()))
    }

    /// Half-angle in radians, recovered from the stored cosine.
    ///
    /// The cosine is clamped to `[-1, 1]` first so degenerate cones do
    /// not produce NaN.
    pub fn half_angle(&self) -> T {
        let c = if self.cos_angle > T::one() {
            T::one()
        } else if self.cos_angle < -T::one() {
            -T::one()
        } else {
            self.cos_angle
        };
        c.acos()
    }

    /// Vertex-side filter: is `point` strictly in front of the vertex
    /// along the axis?
    ///
    /// Candidate intersection points on the double-sided algebraic cone
    /// must pass this test to lie on the nappe this type represents.
    #[inline]
    pub fn in_front_of_vertex(&self, point: &Point3<T>) -> bool {
        (*point - self.vertex).dot(self.axis.as_ref()) > T::zero()
    }
}

// =============================================================================
// Sphere3
// =============================================================================

/// A sphere defined by center and radius.
#[derive(Debug, Clone, Copy)]
pub struct Sphere3<T: Real> {
    /// Center of the sphere.
    pub center: Point3<T>,
    /// Radius of the sphere.
    pub radius: T,
}

impl<T: Real> Sphere3<T> {
    /// Create a sphere from center and radius.
    pub fn new(center: Point3<T>, radius: T) -> Self {
        Self { center, radius }
    }

    /// Create a sphere from center and radius, rejecting negative radii.
    ///
    /// A zero radius is accepted; the sphere degenerates to its center
    /// point and the intersectors classify it through their tangent
    /// branches.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeRadius`] if `radius < 0`.
    pub fn from_radius(center: Point3<T>, radius: T) -> Result<Self, GeometryError> {
        if radius < T::zero() {
            return Err(GeometryError::NegativeRadius);
        }
        Ok(Self::new(center, radius))
    }
}
