use crate::{Point3, Vec3};

/// The nearest intersection of a ray with the scene.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    /// Index of the object that was hit in `Scene::objects`
    pub index: usize,
    /// Distance along the (possibly non-unit) direction that was traced
    pub t: f64,
    pub point: Point3,
    /// Points into the sphere, with the sphere's radius as its length
    pub normal: Vec3,
}
impl Hit {
    pub fn new(index: usize, t: f64, point: Point3, normal: Vec3) -> Self {
        Self {
            index,
            t,
            point,
            normal,
        }
    }
}
