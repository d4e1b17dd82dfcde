//! Batch cross-check of two solvers over a file of test cases.
//!
//! The file starts with the number of cases, followed by 12 coordinates per case.

use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use log::{debug, info, log_enabled, Level};

use crate::{
    config::Tolerance,
    geometry3d::distance::DistanceTo,
    input::{InputError, Tokens},
    solver::{IntersectionResult, IntersectionSolver},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub passed: usize,
    pub total: usize,
}

impl Tally {
    pub fn record(&mut self, passed: bool) {
        self.total += 1;
        if passed {
            self.passed += 1;
        }
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} out of {}", self.passed, self.total)
    }
}

/// A case passes when both solvers give the same verdict and, if they both found a point,
/// the points are within `epsilon` of each other.
pub fn judge(
    primary: IntersectionResult,
    reference: IntersectionResult,
    epsilon: Tolerance,
) -> bool {
    match (primary, reference) {
        (IntersectionResult::Intersects(p), IntersectionResult::Intersects(q)) => {
            p.distance_to(&q) <= epsilon.into_inner()
        }
        (IntersectionResult::NoIntersection, IntersectionResult::NoIntersection) => true,
        _ => false,
    }
}

pub fn run_batch<R: BufRead, W: Write>(
    reader: R,
    mut out: W,
    primary: &dyn IntersectionSolver,
    reference: &dyn IntersectionSolver,
    epsilon: Tolerance,
) -> Result<Tally, InputError> {
    let mut tokens = Tokens::new(reader);
    let count = tokens.next_count()?;
    info!("Running {count} test cases with tolerance {epsilon}");

    let mut tally = Tally::default();
    for case in 1..=count {
        let line0 = tokens.next_line(&format!("line 1 of test case #{case}"))?;
        let line1 = tokens.next_line(&format!("line 2 of test case #{case}"))?;

        if log_enabled!(Level::Debug) {
            match primary.candidates(&line0, &line1) {
                Some(c) => {
                    debug!("Case #{case}: points are {} {}", c.on_line0, c.on_line1);
                    debug!("Case #{case}: point dist {}", c.distance);
                }
                None => debug!("Case #{case}: lines are parallel"),
            }
        }
        let mine = primary.intersect(&line0, &line1, epsilon);
        let theirs = reference.intersect(&line0, &line1, epsilon);

        writeln!(out, "Test case #{case}")?;
        match theirs.point() {
            Some(point) => writeln!(out, "Pt of intersection from reference {point}")?,
            None => writeln!(out, "No intersection from reference")?,
        }
        if let (Some(p), Some(q)) = (mine.point(), theirs.point()) {
            writeln!(out, "Result from primary solver {p}")?;
            writeln!(out, "Result from reference solver {q}")?;
        } else {
            writeln!(out, "No intersection")?;
        }
        writeln!(out)?;

        let passed = judge(mine, theirs, epsilon);
        if !passed {
            debug!("Case #{case} failed: {mine:?} vs {theirs:?}");
        }
        tally.record(passed);
    }

    writeln!(out, "Number of test cases passed {tally}")?;
    Ok(tally)
}

pub fn run_batch_file<W: Write>(
    path: &Path,
    out: W,
    primary: &dyn IntersectionSolver,
    reference: &dyn IntersectionSolver,
    epsilon: Tolerance,
) -> Result<Tally, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    run_batch(BufReader::new(file), out, primary, reference, epsilon)
}
