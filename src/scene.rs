use rand::Rng;

use crate::{snap, CrateRng, Hit, Material, Point3, Rgb, Sphere, Vec3};

/// Roots of a shadow ray closer to zero than this count as zero.
const SHADOW_MOE: f64 = 0.0001;

/// Sign pattern applied to the jitter of each extra light made by `Scene::make_light`.
/// Some octants appear twice.
const LIGHT_OCTANTS: [[f64; 3]; 12] = [
    [1., 1., 1.],
    [1., 1., -1.],
    [1., 1., -1.],
    [1., -1., 1.],
    [1., -1., -1.],
    [1., -1., -1.],
    [-1., 1., 1.],
    [-1., 1., -1.],
    [-1., 1., -1.],
    [-1., -1., 1.],
    [-1., -1., -1.],
    [-1., -1., -1.],
];

/// A sphere and the material describing it.
#[derive(Clone, Debug)]
pub struct Object {
    pub sphere: Sphere,
    pub material: Material,
}

/// Populated once before rendering, then only read from.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub objects: Vec<Object>,
    pub lights: Vec<Point3>,
}
impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_object(&mut self, sphere: Sphere, material: Material) {
        self.objects.push(Object { sphere, material });
    }

    pub fn make_sphere(&mut self, center: Point3, radius: f64, color: Rgb) {
        self.add_object(Sphere::new(center, radius), Material::Solid(color));
    }

    pub fn add_light(&mut self, position: Point3) {
        self.lights.push(position);
    }

    /// Approximates an area light with a cluster of 13 point lights: `position` itself and
    /// 12 copies offset along the octant diagonals. Each copy's offset is drawn from
    /// `[0, 1 / width)` in steps of `1 / (1000 * width)`.
    pub fn make_light(&mut self, position: Point3, width: f64, rng: &mut CrateRng) {
        self.add_light(position);
        for signs in &LIGHT_OCTANTS {
            let steps: u32 = rng.gen_range(0, 1000);
            let offset = steps as f64 / (1000. * width);
            let jitter = offset * Vec3::from(*signs);
            self.add_light(position + jitter);
        }
    }

    /// The nearest object hit by travelling from `origin` along `dir`.
    pub fn first_hit(&self, origin: Point3, dir: Vec3) -> Option<Hit> {
        let mut closest: Option<(usize, f64)> = None;
        for (index, obj) in self.objects.iter().enumerate() {
            if let Some(t) = obj.sphere.hit_t(origin, dir) {
                if closest.map_or(true, |(_, t_min)| t < t_min) {
                    closest = Some((index, t));
                }
            }
        }

        closest.map(|(index, t)| {
            let point = origin.along(dir, t);
            let normal = self.objects[index].sphere.normal_at(point);
            Hit::new(index, t, point, normal)
        })
    }

    /// Fraction of lights with an unobstructed view of `point`, in `[0, 1]`.
    /// A scene without lights leaves every point unlit.
    pub fn lit_fraction(&self, point: Point3) -> f64 {
        if self.lights.is_empty() {
            return 0.;
        }
        let increment = 1. / self.lights.len() as f64;

        self.lights
            .iter()
            .filter(|&&light| !self.is_shadowed(point, light))
            .count() as f64
            * increment
    }

    fn is_shadowed(&self, point: Point3, light: Point3) -> bool {
        let dir = light - point;
        self.objects.iter().any(|obj| {
            // Blocked when the sphere lies ahead of the point (near root >= 0) or surrounds it
            // (near root < 0). Both cases come down to the far root being past the point.
            obj.sphere
                .hit_roots(point, dir)
                .map_or(false, |(_near, far)| snap(0., far, SHADOW_MOE) > 0.)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const RED: Rgb = Rgb::new(200, 50, 50);

    #[test]
    fn objects_keep_their_material() {
        let mut scene = Scene::new();
        scene.make_sphere(Point3::new(0., 0., -1.), 0.5, RED);
        scene.add_object(
            Sphere::from([0., 0., -3.], 1.),
            Material::Metal { reflect_amount: 0.5 },
        );
        assert_eq!(scene.objects.len(), 2);
        assert_eq!(scene.objects[0].material, Material::Solid(RED));
        assert_eq!(scene.objects[1].sphere.center(), Point3::new(0., 0., -3.));
    }

    #[test]
    fn soft_light_cluster() {
        let mut rng = CrateRng::seed_from_u64(3);
        let mut scene = Scene::new();
        let position = Point3::new(-1., 10., 0.);
        scene.make_light(position, 10., &mut rng);

        assert_eq!(scene.lights.len(), 13);
        assert_eq!(scene.lights[0], position);
        for light in &scene.lights[1..] {
            let d = *light - position;
            // Same offset on each axis, bounded by 1 / width
            assert!((d.x.abs() - d.y.abs()).abs() < 1e-12);
            assert!((d.x.abs() - d.z.abs()).abs() < 1e-12);
            assert!(d.x.abs() < 0.1);
        }
        // Octant signs, where the offset isn't zero
        for (light, signs) in scene.lights[1..].iter().zip(LIGHT_OCTANTS.iter()) {
            let d = *light - position;
            assert!(d.x * signs[0] >= 0. && d.y * signs[1] >= 0. && d.z * signs[2] >= 0.);
        }
    }

    #[test]
    fn nearest_hit_wins() {
        let mut scene = Scene::new();
        scene.make_sphere(Point3::new(0., 0., -10.), 1., RED);
        scene.make_sphere(Point3::new(0., 0., -5.), 1., RED);
        scene.make_sphere(Point3::new(0., 5., -2.), 1., RED);

        let hit = scene.first_hit(Point3::ORIGIN, -Vec3::UNIT_Z).unwrap();
        assert_eq!(hit.index, 1);
        assert!((hit.t - 4.).abs() < 1e-12);
        assert!(hit.point.distance(Point3::new(0., 0., -4.)) < 1e-12);
        assert_eq!(hit.normal, Vec3::new(0., 0., -1.));

        assert!(scene.first_hit(Point3::ORIGIN, Vec3::UNIT_X).is_none());
    }

    #[test]
    fn no_lights_is_unlit() {
        let mut scene = Scene::new();
        scene.make_sphere(Point3::new(0., 0., -5.), 1., RED);
        let hit = scene.first_hit(Point3::ORIGIN, -Vec3::UNIT_Z).unwrap();
        let lit = scene.lit_fraction(hit.point);
        assert_eq!(lit, 0.);
        assert!(!lit.is_nan());
    }

    #[test]
    fn light_in_front_of_surface() {
        let mut scene = Scene::new();
        scene.make_sphere(Point3::new(0., 0., -5.), 1., RED);
        scene.add_light(Point3::new(0., 0., 0.));
        let hit = scene.first_hit(Point3::ORIGIN, -Vec3::UNIT_Z).unwrap();
        assert_eq!(scene.lit_fraction(hit.point), 1.);
    }

    #[test]
    fn light_behind_surface() {
        let mut scene = Scene::new();
        scene.make_sphere(Point3::new(0., 0., -5.), 1., RED);
        scene.add_light(Point3::new(0., 0., -10.));
        let hit = scene.first_hit(Point3::ORIGIN, -Vec3::UNIT_Z).unwrap();
        assert_eq!(scene.lit_fraction(hit.point), 0.);
    }

    #[test]
    fn occluder_blocks_some_lights() {
        let mut scene = Scene::new();
        scene.make_sphere(Point3::new(0., 0., -5.), 1., RED);
        // Sits between the hit point and the first light only
        scene.make_sphere(Point3::new(0., 0., -2.), 0.5, RED);
        scene.add_light(Point3::new(0., 0., 0.));
        scene.add_light(Point3::new(0., 10., -3.));

        let point = Point3::new(0., 0., -4.);
        assert_eq!(scene.lit_fraction(point), 0.5);
    }

    #[test]
    fn lit_fraction_is_bounded() {
        let mut rng = CrateRng::seed_from_u64(11);
        let mut scene = Scene::new();
        scene.make_sphere(Point3::new(0., -100.2, -1.), 100., RED);
        scene.make_sphere(Point3::new(0., 0., -0.5), 0.2, RED);
        scene.make_light(Point3::new(-1., 10., 0.), 10., &mut rng);

        for i in 0..50 {
            let x = -1. + i as f64 * 0.04;
            if let Some(hit) = scene.first_hit(Point3::ORIGIN, Vec3::new(x, -0.5, -1.)) {
                let lit = scene.lit_fraction(hit.point);
                assert!((0.0..=1.0).contains(&lit), "{}", lit);
            }
        }
    }

    #[test]
    fn point_inside_sphere_is_shadowed() {
        let mut scene = Scene::new();
        scene.make_sphere(Point3::ORIGIN, 5., RED);
        scene.add_light(Point3::new(0., 100., 0.));

        let point = Point3::new(0., 1., 0.);
        let (near, far) = scene.objects[0]
            .sphere
            .hit_roots(point, Point3::new(0., 100., 0.) - point)
            .unwrap();
        assert!(near < 0. && far > 0.);
        assert_eq!(scene.lit_fraction(point), 0.);
    }

    #[test]
    fn sphere_beyond_light_still_blocks() {
        // Shadow rays aren't cut off at the light
        let mut scene = Scene::new();
        scene.make_sphere(Point3::new(0., 20., 0.), 1., RED);
        scene.add_light(Point3::new(0., 10., 0.));
        assert_eq!(scene.lit_fraction(Point3::ORIGIN), 0.);
    }
}
