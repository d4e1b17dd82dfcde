//! Line–line intersection within a distance tolerance.
//!
//! A solver proposes one candidate point on each line; the lines intersect when the
//! candidates are closer than the tolerance. Solvers are stateless and can be shared
//! between threads.

use crate::{
    config::Tolerance,
    geometry3d::{distance::DistanceTo, line::Line, point::Point3D},
};

mod closest_approach;
mod parametric;

pub use closest_approach::ClosestApproach;
pub use parametric::Parametric;

#[derive(Debug, Clone, Copy, PartialEq, derive_more::IsVariant)]
pub enum IntersectionResult {
    Intersects(Point3D),
    NoIntersection,
}

impl IntersectionResult {
    pub fn point(&self) -> Option<Point3D> {
        match self {
            IntersectionResult::Intersects(point) => Some(*point),
            IntersectionResult::NoIntersection => None,
        }
    }
}

/// Closest-looking pair of points, one on each line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidates {
    pub on_line0: Point3D,
    pub on_line1: Point3D,
    pub distance: f64,
}

impl Candidates {
    pub fn new(on_line0: Point3D, on_line1: Point3D) -> Self {
        Self {
            on_line0,
            on_line1,
            distance: on_line0.distance_to(&on_line1),
        }
    }

    pub fn classify(&self, epsilon: Tolerance) -> IntersectionResult {
        if self.distance < epsilon.into_inner() {
            IntersectionResult::Intersects(self.on_line0)
        } else {
            IntersectionResult::NoIntersection
        }
    }
}

pub trait IntersectionSolver: Send + Sync {
    /// `None` when the lines have no unique pair of candidates (parallel or degenerate).
    fn candidates(&self, line0: &Line, line1: &Line) -> Option<Candidates>;

    fn intersect(&self, line0: &Line, line1: &Line, epsilon: Tolerance) -> IntersectionResult {
        self.candidates(line0, line1)
            .map_or(IntersectionResult::NoIntersection, |c| c.classify(epsilon))
    }
}

/// Intersects two lines with the [`Parametric`] solver.
pub fn intersect(line0: &Line, line1: &Line, epsilon: Tolerance) -> IntersectionResult {
    Parametric.intersect(line0, line1, epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_strict() {
        let eps = Tolerance::try_new(1.0).unwrap();
        let touching = Candidates::new(Point3D::new(0, 0, 0), Point3D::new(1, 0, 0));
        assert_eq!(touching.classify(eps), IntersectionResult::NoIntersection);
        let close = Candidates::new(Point3D::new(0, 0, 0), Point3D::new(0.5, 0, 0));
        assert_eq!(
            close.classify(eps),
            IntersectionResult::Intersects(Point3D::new(0, 0, 0))
        );
    }

    #[test]
    fn result_accessors() {
        let hit = IntersectionResult::Intersects(Point3D::new(1, 2, 3));
        assert!(hit.is_intersects());
        assert_eq!(hit.point(), Some(Point3D::new(1, 2, 3)));
        assert!(IntersectionResult::NoIntersection.is_no_intersection());
        assert_eq!(IntersectionResult::NoIntersection.point(), None);
    }
}
