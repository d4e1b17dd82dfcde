//! Intersection of two lines in 3D space, decided within a distance tolerance, plus an
//! interactive front end and a batch harness that cross-checks two independent solvers.

pub mod config;
pub mod geometry3d;
pub mod harness;
pub mod input;
pub mod interactive;
pub mod solver;

pub use geometry3d::{line::Line, point::Point3D};
pub use solver::{intersect, IntersectionResult, IntersectionSolver};
