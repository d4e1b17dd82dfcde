use super::{
    distance::DistanceFrom, point::Point3D, vector::Vector, GeometryError, PARALLEL_TOLERANCE,
};

/// Infinite line through two endpoints.
///
/// Parametrized from `b` toward `a`: [`Line::at`] gives `b` for `0.0` and `a` for `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    a: Point3D,
    b: Point3D,
}

impl Line {
    /// Both endpoints must be finite. Equal endpoints are accepted; such a line has no
    /// direction and never intersects anything.
    pub fn try_new(a: Point3D, b: Point3D) -> Result<Self, GeometryError> {
        for point in [a, b] {
            if !point.is_finite() {
                return Err(GeometryError::NonFinite { point });
            }
        }
        Ok(Self { a, b })
    }

    pub fn a(&self) -> Point3D {
        self.a
    }

    pub fn b(&self) -> Point3D {
        self.b
    }

    /// `a - b`
    pub fn span(&self) -> Vector {
        self.a - self.b
    }

    pub fn at(&self, param: f64) -> Point3D {
        self.b + self.span() * param
    }

    pub fn is_degenerate(&self) -> bool {
        self.span().length() == 0.0
    }

    /// Degenerate lines count as parallel to everything.
    pub fn is_parallel_to(&self, other: &Line) -> bool {
        let (u, v) = (self.span(), other.span());
        let (len_u, len_v) = (u.length(), v.length());
        if len_u == 0.0 || len_v == 0.0 {
            return true;
        }
        // sine of the angle between the lines
        (u / len_u).cross(&(v / len_v)).length() <= PARALLEL_TOLERANCE
    }

    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

impl DistanceFrom<Point3D> for Line {
    fn distance_from(&self, other: &Point3D) -> f64 {
        let offset = *other - self.b;
        let span = self.span();
        let len = span.length();
        if len == 0.0 {
            return offset.length();
        }
        offset.cross(&span).length() / len
    }
}

impl DistanceFrom<Line> for Line {
    fn distance_from(&self, other: &Line) -> f64 {
        if self.is_parallel_to(other) {
            // any point of one line is equally far from the other
            return self.distance_from(&other.b);
        }
        let normal = self.span().cross(&other.span());
        (other.b - self.b).dot(&normal).abs() / normal.length()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::geometry3d::distance::DistanceTo;

    fn line(a: [f64; 3], b: [f64; 3]) -> Line {
        Line::try_new(a.into(), b.into()).unwrap()
    }

    #[test]
    fn rejects_non_finite_endpoints() {
        let bad = Point3D::new(0, f64::NAN, 0);
        let err = Line::try_new(Point3D::new(0, 0, 0), bad).unwrap_err();
        assert!(matches!(err, GeometryError::NonFinite { point } if point.y.is_nan()));
        assert!(Line::try_new(Point3D::new(f64::NEG_INFINITY, 0, 0), bad).is_err());
    }

    #[test]
    fn parameter_runs_from_b_to_a() {
        let l = line([2.0, 4.0, 6.0], [0.0, 0.0, 0.0]);
        assert_eq!(l.at(0.0), l.b());
        assert_eq!(l.at(1.0), l.a());
        assert_eq!(l.at(0.5), Point3D::new(1, 2, 3));
    }

    #[test]
    fn point_distance() {
        let l = line([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(l.distance_from(&Point3D::new(5, 3, 4)), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Point3D::new(-7, 0, 0).distance_to(&l), 0.0);
    }

    #[test]
    fn skew_lines_distance() {
        let l0 = line([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let l1 = line([0.0, 0.0, 3.0], [0.0, 1.0, 3.0]);
        assert!(!l0.is_parallel_to(&l1));
        assert_abs_diff_eq!(l0.distance_to(&l1), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn parallel_lines_distance() {
        let l0 = line([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let l1 = line([0.0, 5.0, 0.0], [1.0, 5.0, 0.0]);
        assert!(l0.is_parallel_to(&l1));
        assert!(l0.is_parallel_to(&l1.reversed()));
        assert_abs_diff_eq!(l0.distance_to(&l1), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn nearly_parallel_lines() {
        let l0 = line([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let within = line([0.0, 1.0, 0.0], [1.0, 1.0 + 1e-12, 0.0]);
        let beyond = line([0.0, 1.0, 0.0], [1.0, 1.0 + 1e-6, 0.0]);
        assert!(l0.is_parallel_to(&within));
        assert!(within.is_parallel_to(&l0));
        assert!(!l0.is_parallel_to(&beyond));
        assert!(!beyond.is_parallel_to(&l0));
    }

    #[test]
    fn extreme_scales() {
        for scale in [1e-200, 1e200] {
            let l0 = line([0.0, 0.0, 0.0], [scale, 0.0, 0.0]);
            let l1 = line([0.0, 0.0, 0.0], [0.0, scale, scale]);
            assert!(!l0.is_degenerate());
            assert!(!l0.is_parallel_to(&l1), "perpendicular at scale {scale}");
            assert!(l0.is_parallel_to(&line([0.0, 1.0, 0.0], [scale, 1.0, 0.0])));
            assert_eq!(l0.span().length(), scale);
        }
    }

    #[test]
    fn degenerate_line() {
        let dot = line([1.0, 1.0, 1.0], [1.0, 1.0, 1.0]);
        let l = line([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        assert!(dot.is_degenerate());
        assert!(!l.is_degenerate());
        assert!(dot.is_parallel_to(&l));
        assert_abs_diff_eq!(dot.distance_from(&Point3D::new(1, 1, 3)), 2.0);
    }
}
