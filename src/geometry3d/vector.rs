use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use super::{hypot, point::Point3D};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Neg,
)]
pub struct Vector {
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
}

impl Vector {
    pub fn length(&self) -> f64 {
        hypot(self.vx, self.vy, self.vz)
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.vx * other.vx + self.vy * other.vy + self.vz * other.vz
    }

    pub fn cross(&self, other: &Vector) -> Vector {
        Vector {
            vx: det2!([self.vy, self.vz], [other.vy, other.vz]),
            vy: det2!([self.vz, self.vx], [other.vz, other.vx]),
            vz: det2!([self.vx, self.vy], [other.vx, other.vy]),
        }
    }

    pub fn component(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.vx,
            Axis::Y => self.vy,
            Axis::Z => self.vz,
        }
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self *= rhs;
        self
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        self.vx *= rhs;
        self.vy *= rhs;
        self.vz *= rhs;
    }
}

impl Div<f64> for Vector {
    type Output = Self;

    fn div(mut self, rhs: f64) -> Self::Output {
        self /= rhs;
        self
    }
}

impl DivAssign<f64> for Vector {
    fn div_assign(&mut self, rhs: f64) {
        self.vx /= rhs;
        self.vy /= rhs;
        self.vz /= rhs;
    }
}

impl Add<Vector> for Point3D {
    type Output = Point3D;

    fn add(mut self, rhs: Vector) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign<Vector> for Point3D {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.vx;
        self.y += rhs.vy;
        self.z += rhs.vz;
    }
}

impl Sub<Vector> for Point3D {
    type Output = Point3D;

    fn sub(mut self, rhs: Vector) -> Self::Output {
        self -= rhs;
        self
    }
}

impl SubAssign<Vector> for Point3D {
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.vx;
        self.y -= rhs.vy;
        self.z -= rhs.vz;
    }
}
