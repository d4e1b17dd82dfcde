use thiserror::Error;

/// Sine of the angle between two lines below which they are treated as parallel.
pub const PARALLEL_TOLERANCE: f64 = 1e-10;

fn hypot(x: f64, y: f64, z: f64) -> f64 {
    f64::hypot(f64::hypot(x, y), z)
}

macro_rules! det2 {
    ([$a11:expr, $a12:expr], [$a21:expr, $a22:expr]) => {
        $a11 * $a22 - $a12 * $a21
    };
}
pub(crate) use det2;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("Point {point} has a non-finite coordinate")]
    NonFinite { point: point::Point3D },
}

pub mod line;
pub mod point;
pub mod vector;

pub mod distance;
