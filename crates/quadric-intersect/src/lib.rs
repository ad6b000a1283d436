#![warn(missing_docs)]

//! Line-quadric intersection classification.
//!
//! This crate computes exact intersections between infinite 3D lines
//! and analytic quadric surfaces, classifying each configuration into
//! a tagged variant rather than a bare list of hit parameters:
//!
//! - [`LineConeIntersector`] - line against a single-sided infinite cone
//!   (empty / point / ray / segment)
//! - [`LineSphereIntersector`] - line against a sphere
//!   (empty / point / segment)
//!
//! Each intersector borrows its line and surface, owns a fixed two-slot
//! result buffer, and performs no allocation. Degenerate configurations
//! (tangency, lines embedded in the surface, roots behind the cone
//! vertex) are classification outcomes, never errors.
//!
//! # Example
//!
//! ```
//! use quadric_geom::{Cone3, Line3};
//! use quadric_intersect::{intersect_line_cone, ConeIntersection};
//! use quadric_math::{Point3, Vec3};
//!
//! // 45-degree cone opening along +Z, crossed by a horizontal line.
//! let cone = Cone3::new(Point3::origin(), Vec3::z(), std::f64::consts::SQRT_2 / 2.0);
//! let line = Line3::new(Point3::new(-10.0, 0.0, 1.0), Vec3::x());
//!
//! match intersect_line_cone(&line, &cone) {
//!     ConeIntersection::Segment { start, end } => {
//!         assert!((start.x - -1.0).abs() < 1e-10);
//!         assert!((end.x - 1.0).abs() < 1e-10);
//!     }
//!     other => panic!("expected a segment, got {other:?}"),
//! }
//! ```

mod line_cone;
mod line_sphere;

pub use line_cone::{intersect_line_cone, ConeIntersection, LineConeIntersector};
pub use line_sphere::{intersect_line_sphere, LineSphereIntersector, SphereIntersection};

/// The shape of an intersection set, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntersectionKind {
    /// No intersection.
    Empty,
    /// A single point (tangency).
    Point,
    /// A half-line: a start point extending without bound along a direction.
    Ray,
    /// Two points bounding a finite segment.
    Segment,
}
