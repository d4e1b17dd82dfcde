//! End-to-end checks through the public API: the solver properties and a sample test file.

use std::path::Path;

use approx::assert_abs_diff_eq;
use skewline::{
    config::Tolerance,
    geometry3d::distance::DistanceTo,
    harness::run_batch_file,
    intersect,
    solver::{ClosestApproach, Parametric},
    IntersectionResult, IntersectionSolver, Line, Point3D,
};

fn line(a: [f64; 3], b: [f64; 3]) -> Line {
    Line::try_new(a.into(), b.into()).expect("finite endpoints")
}

fn eps() -> Tolerance {
    Tolerance::try_new(0.01).unwrap()
}

#[test]
fn crossing_diagonals_meet_at_center() {
    let result = intersect(
        &line([0.0, 0.0, 0.0], [2.0, 2.0, 0.0]),
        &line([0.0, 2.0, 0.0], [2.0, 0.0, 0.0]),
        eps(),
    );
    let IntersectionResult::Intersects(point) = result else {
        panic!("Expected an intersection, got {result:?}");
    };
    assert!(point.distance_to(&Point3D::new(1, 1, 0)) < 0.01);
}

#[test]
fn parallel_lines_in_plane_do_not_meet() {
    let result = intersect(
        &line([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
        &line([0.0, 5.0, 0.0], [1.0, 5.0, 0.0]),
        eps(),
    );
    assert_eq!(result, IntersectionResult::NoIntersection);
}

#[test]
fn lines_offset_in_z_do_not_meet() {
    let result = intersect(
        &line([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
        &line([0.0, 0.0, 5.0], [1.0, 0.0, 5.0]),
        eps(),
    );
    assert_eq!(result, IntersectionResult::NoIntersection);
}

#[test]
fn skew_lines_are_rejected_by_both_solvers() {
    let l0 = line([-1.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
    let l1 = line([0.0, -1.0, 1.0], [0.0, 1.0, 1.0]);
    assert_abs_diff_eq!(l0.distance_to(&l1), 1.0, epsilon = 1e-12);
    assert!(Parametric.intersect(&l0, &l1, eps()).is_no_intersection());
    assert!(ClosestApproach.intersect(&l0, &l1, eps()).is_no_intersection());
}

#[test]
fn nearly_touching_lines_respect_the_tolerance() {
    let l0 = line([-1.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
    let l1 = line([0.0, -1.0, 0.005], [0.0, 1.0, 0.005]);
    assert!(intersect(&l0, &l1, eps()).is_intersects());
    let tight = Tolerance::try_new(0.001).unwrap();
    assert!(intersect(&l0, &l1, tight).is_no_intersection());
}

#[test]
fn verdict_survives_swapping_and_reversing_lines() {
    let l0 = line([3.0, -1.0, 2.0], [-1.0, 4.0, 0.0]);
    let l1 = line([0.0, 0.0, 0.0], [2.0, 3.0, 4.0]);
    for solver in [&Parametric as &dyn IntersectionSolver, &ClosestApproach] {
        let verdict = solver.intersect(&l0, &l1, eps()).is_intersects();
        assert_eq!(solver.intersect(&l1, &l0, eps()).is_intersects(), verdict);
        assert_eq!(
            solver.intersect(&l0.reversed(), &l1, eps()).is_intersects(),
            verdict
        );
    }
}

#[test]
fn sample_file_passes_completely() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/testCases.txt");
    let mut out = Vec::new();
    let tally = run_batch_file(&path, &mut out, &Parametric, &ClosestApproach, eps()).unwrap();
    let report = String::from_utf8(out).unwrap();
    assert_eq!(tally.to_string(), "8 out of 8", "{report}");
    assert!(report.contains("Test case #8\n"));
}
