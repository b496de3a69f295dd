use crate::{Point3, UnitVec3, Vec3};

#[derive(Clone, Debug)]
pub struct Ray {
    origin: Point3,
    dir: UnitVec3,
}
impl Ray {
    pub fn new(origin: Point3, dir: UnitVec3) -> Self {
        Self { origin, dir }
    }

    /// Normalizes `dir`. It must not be the zero vector.
    pub fn towards(origin: Point3, dir: Vec3) -> Self {
        Self::new(origin, dir.normalized())
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn dir(&self) -> UnitVec3 {
        self.dir
    }

    pub fn at(&self, t: f64) -> Point3 {
        self.origin.along(self.dir.vec(), t)
    }

    /// Perpendicular distance from `point` to the line the ray lies on.
    pub fn min_dist(&self, point: Point3) -> f64 {
        (self.origin - point).cross(self.dir.vec()).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_uses_unit_direction() {
        let ray = Ray::towards(Point3::ORIGIN, Vec3::new(0., 0., -10.));
        assert_eq!(ray.at(2.), Point3::new(0., 0., -2.));
    }

    #[test]
    fn min_dist_to_line() {
        let ray = Ray::towards(Point3::ORIGIN, Vec3::UNIT_X);
        assert!((ray.min_dist(Point3::new(5., 3., 4.)) - 5.).abs() < 1e-12);
        assert_eq!(ray.min_dist(Point3::new(-2., 0., 0.)), 0.);
    }
}
