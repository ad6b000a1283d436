//! Line-cone intersection (quadratic classification).

use crate::IntersectionKind;
use quadric_geom::{Cone3, Line3};
use quadric_math::{Point3, Real, Vec3};

/// A line-cone intersection with its geometric payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConeIntersection<T: Real> {
    /// The line misses the nappe entirely.
    Empty,
    /// The line is tangent to the cone wall at a single point.
    Point(Point3<T>),
    /// The line enters the nappe and never leaves it (or lies in the
    /// wall through the vertex): a half-line from `start` along
    /// `direction`.
    Ray {
        /// Start of the half-line.
        start: Point3<T>,
        /// Unit direction the half-line extends along.
        direction: Vec3<T>,
    },
    /// The line crosses the wall twice in front of the vertex.
    Segment {
        /// Crossing at the smaller line parameter.
        start: Point3<T>,
        /// Crossing at the larger line parameter.
        end: Point3<T>,
    },
}

/// Intersector for an infinite line and a single-sided infinite cone.
///
/// The cone wall is the zero set of the quadratic form
/// `((X - V)·A)^2 = g^2 |X - V|^2` with vertex `V`, unit axis `A`, and
/// `g` the cosine of the half-angle. That form is double-sided, so every
/// root of the substituted line quadratic is filtered by the vertex-side
/// test `(X - V)·A > 0` to keep only the nappe `A` points into.
///
/// [`find`](Self::find) populates a kind tag, a quantity, and a two-slot
/// result buffer:
///
/// - `Point`: slot 0 holds the tangency point, quantity 1.
/// - `Segment`: slots 0 and 1 hold the crossings ordered by increasing
///   line parameter, quantity 2.
/// - `Ray`: slot 0 holds the start point, slot 1 holds the line
///   direction, quantity 2.
#[derive(Debug)]
pub struct LineConeIntersector<'a, T: Real> {
    line: &'a Line3<T>,
    cone: &'a Cone3<T>,
    kind: IntersectionKind,
    quantity: usize,
    results: [Vec3<T>; 2],
}

impl<'a, T: Real> LineConeIntersector<'a, T> {
    /// Bind an intersector to a line and a cone.
    pub fn new(line: &'a Line3<T>, cone: &'a Cone3<T>) -> Self {
        Self {
            line,
            cone,
            kind: IntersectionKind::Empty,
            quantity: 0,
            results: [Vec3::zeros(); 2],
        }
    }

    /// The bound line.
    pub fn line(&self) -> &Line3<T> {
        self.line
    }

    /// The bound cone.
    pub fn cone(&self) -> &Cone3<T> {
        self.cone
    }

    /// Compute the intersection, returning `true` iff it is non-empty.
    ///
    /// Recomputes from scratch on every call, so repeated invocation is
    /// idempotent. Closed-form arithmetic only: no allocation, no
    /// errors.
    pub fn find(&mut self) -> bool {
        self.kind = IntersectionKind::Empty;
        self.quantity = 0;
        self.results = [Vec3::zeros(); 2];

        // Substituting L(t) = P + t*D into the cone quadric gives
        // Q(t) = c2*t^2 + 2*c1*t + c0 with E = P - V.
        let a = self.cone.axis.as_ref();
        let d = self.line.direction.as_ref();
        let e = self.line.origin - self.cone.vertex;

        let g_sqr = self.cone.cos_angle * self.cone.cos_angle;
        let a_dot_d = a.dot(d);
        let a_dot_e = a.dot(&e);
        let d_dot_e = d.dot(&e);
        let e_dot_e = e.dot(&e);

        let c2 = a_dot_d * a_dot_d - g_sqr;
        let c1 = a_dot_d * a_dot_e - g_sqr * d_dot_e;
        let c0 = a_dot_e * a_dot_e - g_sqr * e_dot_e;

        // One shared tolerance for every zero test; mixing scales here
        // can select inconsistent branches near degeneracy.
        let eps = T::ZERO_TOLERANCE;

        if c2.abs() >= eps {
            let discr = c1 * c1 - c0 * c2;
            if discr < T::zero() {
                // No real roots: the line misses the double-sided cone.
            } else if discr > eps {
                // Two distinct roots. One or both may land behind the
                // vertex, on the rejected nappe.
                let root = discr.sqrt();
                let inv_c2 = T::one() / c2;
                let mut t0 = (-c1 - root) * inv_c2;
                let mut t1 = (-c1 + root) * inv_c2;
                // Reported points are ordered by increasing line
                // parameter, whatever the sign of c2.
                if t0 > t1 {
                    std::mem::swap(&mut t0, &mut t1);
                }

                for t in [t0, t1] {
                    let p = self.line.at(t);
                    if self.cone.in_front_of_vertex(&p) {
                        self.results[self.quantity] = p.coords;
                        self.quantity += 1;
                    }
                }

                match self.quantity {
                    2 => self.kind = IntersectionKind::Segment,
                    1 => {
                        // The other crossing is on the rejected nappe;
                        // the line stays inside the nappe forever past
                        // the kept one. Slot 1 holds the direction.
                        self.kind = IntersectionKind::Ray;
                        self.results[1] = *d;
                        self.quantity = 2;
                    }
                    _ => {}
                }
            } else {
                // Repeated root: tangent to the double-sided cone.
                let p = self.line.at(-(c1 / c2));
                if self.cone.in_front_of_vertex(&p) {
                    self.kind = IntersectionKind::Point;
                    self.quantity = 1;
                    self.results[0] = p.coords;
                }
            }
        } else if c1.abs() >= eps {
            // D lies in the cone wall direction; the quadratic
            // degenerates to a linear equation with one crossing.
            let half: T = nalgebra::convert(0.5);
            let p = self.line.at(-(half * c0 / c1));
            if self.cone.in_front_of_vertex(&p) {
                self.kind = IntersectionKind::Ray;
                self.quantity = 2;
                self.results[0] = p.coords;
                self.results[1] = *d;
            }
        } else if c0.abs() >= eps {
            // Parallel to the wall but offset from it: no intersection.
        } else {
            // c2 = c1 = c0 = 0: the whole line lies in the wall through
            // the vertex. Only the forward half-line from the vertex is
            // on the single-sided nappe.
            self.kind = IntersectionKind::Ray;
            self.quantity = 2;
            self.results[0] = self.cone.vertex.coords;
            self.results[1] = *d;
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

    /// Result buffer entry at `index`.
    ///
    /// For `Point` and `Segment` the entries are point coordinates; for
    /// `Ray` entry 0 is the start point and entry 1 is the direction.
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
    pub fn classification(&self) -> ConeIntersection<T> {
        match self.kind {
            IntersectionKind::Empty => ConeIntersection::Empty,
            IntersectionKind::Point => ConeIntersection::Point(Point3::from(self.results[0])),
            IntersectionKind::Ray => ConeIntersection::Ray {
                start: Point3::from(self.results[0]),
                direction: self.results[1],
            },
            IntersectionKind::Segment => ConeIntersection::Segment {
                start: Point3::from(self.results[0]),
                end: Point3::from(self.results[1]),
            },
        }
    }
}

/// Intersect a line with a single-sided infinite cone.
pub fn intersect_line_cone<T: Real>(line: &Line3<T>, cone: &Cone3<T>) -> ConeIntersection<T> {
    let mut intersector = LineConeIntersector::new(line, cone);
    intersector.find();
    intersector.classification()
}
