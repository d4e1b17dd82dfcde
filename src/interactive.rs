use std::io::{BufRead, Write};

use log::{debug, log_enabled, Level};

use crate::{
    config::Tolerance,
    geometry3d::{distance::DistanceTo, line::Line, point::Point3D},
    input::{InputError, Tokens},
    solver::{IntersectionResult, IntersectionSolver},
};

fn prompt_point<R: BufRead, W: Write>(
    tokens: &mut Tokens<R>,
    out: &mut W,
    point: usize,
    line: usize,
) -> Result<Point3D, InputError> {
    writeln!(out, "Enter (x, y, z) for point {point} of line {line}: ")?;
    out.flush()?;
    tokens.next_point(&format!("point {point} of line {line}"))
}

fn prompt_line<R: BufRead, W: Write>(
    tokens: &mut Tokens<R>,
    out: &mut W,
    line: usize,
) -> Result<Line, InputError> {
    let a = prompt_point(tokens, out, 1, line)?;
    let b = prompt_point(tokens, out, 2, line)?;
    Line::try_new(a, b).map_err(|source| InputError::Geometry {
        expected: format!("line {line}"),
        source,
    })
}

/// Asks for two lines, one point at a time, and reports where they meet.
pub fn run_interactive<R: BufRead, W: Write>(
    reader: R,
    mut out: W,
    solver: &dyn IntersectionSolver,
    epsilon: Tolerance,
) -> Result<IntersectionResult, InputError> {
    let mut tokens = Tokens::new(reader);
    writeln!(out, "Please enter the point of line 1: ")?;
    let line0 = prompt_line(&mut tokens, &mut out, 1)?;
    let line1 = prompt_line(&mut tokens, &mut out, 2)?;

    if log_enabled!(Level::Debug) {
        match solver.candidates(&line0, &line1) {
            Some(c) => {
                debug!("Points are {} {}", c.on_line0, c.on_line1);
                debug!("Point dist: {}", c.distance);
            }
            None => debug!("Lines are parallel, {} apart", line0.distance_to(&line1)),
        }
    }
    let result = solver.intersect(&line0, &line1, epsilon);

    match result {
        IntersectionResult::Intersects(point) => {
            writeln!(out, "The point of intersection is:")?;
            writeln!(out, "{point}")?;
        }
        IntersectionResult::NoIntersection => {
            writeln!(out, "There is no point of intersection")?;
            writeln!(out, "The lines are skewed")?;
        }
    }
    Ok(result)
}
