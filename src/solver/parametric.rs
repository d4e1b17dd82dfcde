use itertools::Itertools;

use super::{Candidates, IntersectionSolver};
use crate::geometry3d::{det2, line::Line, vector::Axis};

/// Solves `b0 + λ·(a0 - b0) = b1 + μ·(a1 - b1)` on two coordinates and rebuilds both
/// points in 3D from the resulting parameters.
///
/// The 2×2 system uses the coordinate plane where it is best conditioned, XY first on ties.
/// For skew lines the two rebuilt points disagree in the remaining coordinate, which is what
/// the tolerance check catches.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parametric;

impl IntersectionSolver for Parametric {
    fn candidates(&self, line0: &Line, line1: &Line) -> Option<Candidates> {
        if line0.is_parallel_to(line1) {
            return None;
        }
        let (u, v) = (line0.span(), line1.span());
        let rhs = line1.b() - line0.b();
        let (i, j, det) = Axis::ALL
            .into_iter()
            .tuple_combinations::<(Axis, Axis)>()
            .map(|(i, j)| {
                let det = det2!(
                    [u.component(i), -v.component(i)],
                    [u.component(j), -v.component(j)]
                );
                (i, j, det)
            })
            .reduce(|best, next| if next.2.abs() > best.2.abs() { next } else { best })?;
        let lambda = det2!(
            [rhs.component(i), -v.component(i)],
            [rhs.component(j), -v.component(j)]
        ) / det;
        let mu = det2!(
            [u.component(i), rhs.component(i)],
            [u.component(j), rhs.component(j)]
        ) / det;
        Some(Candidates::new(line0.at(lambda), line1.at(mu)))
    }
}
