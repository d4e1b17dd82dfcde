use super::{Candidates, IntersectionSolver};
use crate::geometry3d::line::Line;

/// Reference solver: closest points of the two infinite lines, found by minimizing the squared
/// distance between `b0 + s·u` and `b1 + t·v` over `s` and `t`.
///
/// Shares no code path with [`super::Parametric`], so the two can cross-check each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosestApproach;

impl IntersectionSolver for ClosestApproach {
    fn candidates(&self, line0: &Line, line1: &Line) -> Option<Candidates> {
        if line0.is_parallel_to(line1) {
            return None;
        }
        let (u, v) = (line0.span(), line1.span());
        let w = line0.b() - line1.b();
        let a = u.dot(&u);
        let b = u.dot(&v);
        let c = v.dot(&v);
        let d = u.dot(&w);
        let e = v.dot(&w);
        let denominator = a * c - b * b;
        let s = (b * e - c * d) / denominator;
        let t = (a * e - b * d) / denominator;
        Some(Candidates::new(line0.at(s), line1.at(t)))
    }
}
