pub mod angle;
pub mod color;
pub mod config;
pub mod hit;
pub mod material;
pub mod ppm;
pub mod ray;
pub mod render;
pub mod scene;
pub mod screen;
pub mod shade;
pub mod shape;
pub mod vec3;

pub use angle::Angle;
pub use color::Rgb;
pub use hit::Hit;
pub use material::Material;
pub use ray::Ray;
pub use render::{render, RenderSettings};
pub use scene::{Object, Scene};
pub use screen::{Camera, Screen};
pub use shape::Sphere;
pub use vec3::{Point3, UnitVec3, Vec3};

/// The rng used throughout the crate. Every render worker owns one.
pub type CrateRng = rand::rngs::SmallRng;

/// Tolerance used by approximate comparisons
pub const MOE: f64 = 0.00001;

/// Floating point operations are never exact. Returns `true` if `value` is within `MOE` of `cmp`.
pub fn margin_of_error(cmp: f64, value: f64) -> bool {
    cmp < value + MOE && cmp > value - MOE
}

/// Snaps `value` to `cmp` if it lies within `moe` of it. Used to clean up roots that are
/// mathematically zero before branching on their sign.
///
/// # Example
/// ```
/// # use raytracing::snap;
/// assert_eq!(snap(0., 1e-7, 1e-5), 0.);
/// assert_eq!(snap(0., 0.5, 1e-5), 0.5);
/// ```
pub fn snap(cmp: f64, value: f64, moe: f64) -> f64 {
    if value < cmp + moe && value > cmp - moe {
        cmp
    } else {
        value
    }
}
