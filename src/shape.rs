use crate::{margin_of_error, snap, Point3, Ray, Vec3, MOE};

/// Direction vectors passed to the intersection tests need not be unit length. Every
/// returned `t` is measured in multiples of the given direction.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    radius_squared: f64,
}
impl Sphere {
    pub fn new(center: Point3, radius: f64) -> Self {
        Self {
            center,
            radius,
            radius_squared: radius * radius,
        }
    }

    pub fn from(c: [f64; 3], radius: f64) -> Self {
        Self::new(c.into(), radius)
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Coefficients `(a, half_b, discriminant)` of `a*t^2 + 2*half_b*t + c = 0`
    fn quadratic(&self, origin: Point3, dir: Vec3) -> (f64, f64, f64) {
        let oc = origin - self.center;
        let a = dir.norm_squared();
        let half_b = oc.dot(dir);
        let c = oc.norm_squared() - self.radius_squared;
        (a, half_b, half_b.powi(2) - a * c)
    }

    /// Smallest positive `t` at which the ray enters the sphere.
    ///
    /// Only the nearer root is considered: if it isn't positive (the sphere is behind the
    /// origin, or the origin is inside or on the sphere) there is no hit, even though the
    /// farther root may be positive.
    pub fn hit_t(&self, origin: Point3, dir: Vec3) -> Option<f64> {
        let (a, half_b, disc) = self.quadratic(origin, dir);
        if disc < 0. {
            return None;
        }

        let t = snap(0., (-half_b - disc.sqrt()) / a, MOE);
        if t > 0. {
            Some(t)
        } else {
            None
        }
    }

    /// The point at the nearer root, whether it lies in front of the origin or not.
    pub fn hit_point(&self, origin: Point3, dir: Vec3) -> Option<Point3> {
        let (a, half_b, disc) = self.quadratic(origin, dir);
        if disc < 0. {
            return None;
        }
        let t = (-half_b - disc.sqrt()) / a;
        Some(origin.along(dir, t))
    }

    /// Both roots as `(near, far)`, unfiltered. `None` unless the line crosses the sphere
    /// at two distinct points.
    pub fn hit_roots(&self, origin: Point3, dir: Vec3) -> Option<(f64, f64)> {
        let (a, half_b, disc) = self.quadratic(origin, dir);
        if disc > 0. {
            let root = disc.sqrt();
            Some(((-half_b - root) / a, (-half_b + root) / a))
        } else {
            None
        }
    }

    /// Normal at `point`, pointing *into* the sphere. `point` is assumed to be on the surface.
    pub fn normal_at(&self, point: Point3) -> Vec3 {
        self.center - point
    }

    pub fn is_on_surface(&self, point: Point3) -> bool {
        margin_of_error(point.distance(self.center), self.radius)
    }

    /// Whether the ray's line passes within the sphere.
    pub fn has_hit(&self, ray: &Ray) -> bool {
        ray.min_dist(self.center) <= self.radius
    }
}
