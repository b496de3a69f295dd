use std::ops;

use anyhow::{ensure, Result};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::{margin_of_error, Angle};

/// A free direction or displacement. Not anchored to any position.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
const ERR_NORMED_0: &str = "Tried to normalize vector of length 0!";
impl Vec3 {
    pub const ZERO: Self = Self::new(0., 0., 0.);
    // The standard basis
    pub const UNIT_X: Self = Self::new(1., 0., 0.);
    pub const UNIT_Y: Self = Self::new(0., 1., 0.);
    pub const UNIT_Z: Self = Self::new(0., 0., 1.);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// # Precondition
    /// `self` must not be the zero vector. This is only checked in debug builds,
    /// use [`Vec3::checked_normalized`] when the input isn't known to be nonzero.
    ///
    /// # Example
    /// ```
    /// # use raytracing::vec3::Vec3;
    /// let a = Vec3::new(1., 2., 3.);
    /// let b = a.normalized();
    /// assert!((b.vec().norm() - 1.).abs() < 1e-12);
    /// ```
    pub fn normalized(self) -> UnitVec3 {
        let normed = self / self.norm();
        debug_assert!(!normed.is_nan(), "{}", ERR_NORMED_0);
        UnitVec3(normed)
    }

    /// # Example
    /// ```
    /// # use raytracing::vec3::Vec3;
    /// let a = Vec3::new(0., 0., 0.);
    /// assert!(a.checked_normalized().is_err());
    /// ```
    pub fn checked_normalized(self) -> Result<UnitVec3> {
        let norm = self.norm();
        ensure!(norm != 0., ERR_NORMED_0);
        Ok(UnitVec3(self / norm))
    }

    /// Samples each component uniformly from `[-1, 1)`.
    pub fn random_in_cube<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let distr = Uniform::new(-1., 1.);
        Self::new(distr.sample(rng), distr.sample(rng), distr.sample(rng))
    }

    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    pub fn norm_squared(&self) -> f64 {
        self.x.powi(2) + self.y.powi(2) + self.z.powi(2)
    }

    /// # Example
    /// ```
    /// # use raytracing::vec3::Vec3;
    /// let a = Vec3::new(4., 8., 10.);
    /// let b = Vec3::new(9., 2., 7.);
    /// assert_eq!(a.dot(b), 122.);
    /// ```
    pub fn dot(&self, rhs: Vec3) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// # Example
    /// ```
    /// # use raytracing::vec3::Vec3;
    /// let a = Vec3::new(2., 3., 4.);
    /// let b = Vec3::new(5., 6., 7.);
    /// assert_eq!(a.cross(b), Vec3::new(-3., 6., -3.));
    /// ```
    pub fn cross(&self, rhs: Vec3) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// The angle between `self` and `rhs`. Both must be nonzero.
    pub fn angle(&self, rhs: Vec3) -> Angle {
        Angle::new((self.dot(rhs) / self.norm() / rhs.norm()).acos())
    }

    pub fn is_orthogonal(&self, rhs: Vec3) -> bool {
        self.angle(rhs).is_orthogonal()
    }

    pub fn is_normalized(&self) -> bool {
        margin_of_error(self.norm(), 1.)
    }

    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl ops::Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl ops::Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}
impl ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl ops::Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl ops::Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
impl ops::Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

impl ops::Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

/// A `Vec3` of length 1. Can only be built by normalizing, and is never mutated afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UnitVec3(Vec3);
impl UnitVec3 {
    /// Widen back into a plain `Vec3`
    pub fn vec(self) -> Vec3 {
        self.0
    }
}
impl From<UnitVec3> for Vec3 {
    fn from(u: UnitVec3) -> Self {
        u.0
    }
}

/// An absolute position in world space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Point3 {
    pub const ORIGIN: Self = Self::new(0., 0., 0.);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The point reached by travelling `t` times `dir` from `self`.
    pub fn along(self, dir: Vec3, t: f64) -> Self {
        self + t * dir
    }

    pub fn distance(self, other: Point3) -> f64 {
        (self - other).norm()
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(p: [f64; 3]) -> Self {
        Self::new(p[0], p[1], p[2])
    }
}

impl ops::Add<Vec3> for Point3 {
    type Output = Self;

    fn add(self, rhs: Vec3) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}
/// The displacement from `rhs` to `self`
impl ops::Sub for Point3 {
    type Output = Vec3;

    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
