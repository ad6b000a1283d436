//! Line-sphere intersection (quadratic classification).

use crate::IntersectionKind;
use quadric_geom::{Line3, Sphere3};
use quadric_math::{Point3, Real, Vec3};

/// A line-sphere intersection with its geometric payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SphereIntersection<T: Real> {
    /// The line misses the sphere.
    Empty,
    /// The line is tangent to the sphere at a single point.
    Point(Point3<T>),
    /// The line crosses the sphere: entry and exit points.
    Segment {
        /// Crossing at the smaller line parameter.
        start: Point3<T>,
        /// Crossing at the larger line parameter.
        end: Point3<T>,
    },
}

/// Intersector for an infinite line and a sphere.
///
/// With unit line direction the substituted quadratic is monic,
/// `t^2 + 2*a1*t + a0`, so only two coefficients are needed. Both roots
/// are kept whatever their sign; the line is infinite in both
/// directions.
#[derive(Debug)]
pub struct LineSphereIntersector<'a, T: Real> {
    line: &'a Line3<T>,
    sphere: &'a Sphere3<T>,
    kind: IntersectionKind,
    quantity: usize,
    results: [Vec3<T>; 2],
}

impl<'a, T: Real> LineSphereIntersector<'a, T> {
    /// Bind an intersector to a line and a sphere.
    pub fn new(line: &'a Line3<T>, sphere: &'a Sphere3<T>) -> Self {
        Self {
            line,
            sphere,
            kind: IntersectionKind::Empty,
            quantity: 0,
            results: [Vec3::zeros(); 2],
        }
    }

    /// The bound line.
    pub fn line(&self) -> &Line3<T> {
        self.line
    }

    /// The bound sphere.
    pub fn sphere(&self) -> &Sphere3<T> {
        self.sphere
    }

    /// Compute the intersection, returning `true` iff it is non-empty.
    ///
    /// Recomputes from scratch on every call.
    pub fn find(&mut self) -> bool {
        self.kind = IntersectionKind::Empty;
        self.quantity = 0;
        self.results = [Vec3::zeros(); 2];

        let d = self.line.direction.as_ref();
        let e = self.line.origin - self.sphere.center;
        let a1 = d.dot(&e);
        let a0 = e.dot(&e) - self.sphere.radius * self.sphere.radius;

        let discr = a1 * a1 - a0;
        if discr < T::zero() {
            // No real roots.
        } else if discr > T::ZERO_TOLERANCE {
            let root = discr.sqrt();
            for t in [-a1 - root, -a1 + root] {
                self.results[self.quantity] = self.line.at(t).coords;
                self.quantity += 1;
            }
            self.kind = IntersectionKind::Segment;
        } else {
            // Repeated root: tangent.
            self.kind = IntersectionKind::Point;
            self.quantity = 1;
            self.results[0] = self.line.at(-a1).coords;
        }

        self.kind != IntersectionKind::Empty
    }

    /// Classification tag of the last [`find`](Self::find).
    pub fn kind(&self) -> IntersectionKind {
        self.kind
    }

    /// Number of valid entries in the result buffer (0, 1, or 2).
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Result buffer entry at `index`, a point on the sphere.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.quantity()`.
    pub fn point(&self, index: usize) -> Vec3<T> {
        assert!(
            index < self.quantity,
            "intersection result index {index} out of range (quantity {})",
            self.quantity
        );
        self.results[index]
    }

    /// The intersection with its payload, as computed by the last
    /// [`find`](Self::find).
    pub fn classification(&self) -> SphereIntersection<T> {
        match self.kind {
            IntersectionKind::Empty => SphereIntersection::Empty,
            IntersectionKind::Point => SphereIntersection::Point(Point3::from(self.results[0])),
            IntersectionKind::Segment => SphereIntersection::Segment {
                start: Point3::from(self.results[0]),
                end: Point3::from(self.results[1]),
            },
            // A line never meets a sphere in a ray.
            IntersectionKind::Ray => unreachable!("sphere intersections are never rays"),
        }
    }
}

/// Intersect a line with a sphere.
pub fn intersect_line_sphere<T: Real>(
    line: &Line3<T>,
    sphere: &Sphere3<T>,
) -> SphereIntersection<T> {
    let mut intersector = LineSphereIntersector::new(line, sphere);
    intersector.find();
    intersector.classification()
}
