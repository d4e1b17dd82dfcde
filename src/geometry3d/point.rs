use std::{fmt, ops::Sub};

use super::{distance::DistanceFrom, vector::Vector};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: impl Into<f64>, y: impl Into<f64>, z: impl Into<f64>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Point3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Sub for Point3D {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector {
            vx: self.x - rhs.x,
            vy: self.y - rhs.y,
            vz: self.z - rhs.z,
        }
    }
}

impl DistanceFrom<Point3D> for Point3D {
    fn distance_from(&self, other: &Point3D) -> f64 {
        (*self - *other).length()
    }
}
