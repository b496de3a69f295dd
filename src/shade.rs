//! Diffuse shading by random bounce sampling.
//!
//! A camera ray that hits the scene keeps bouncing off whatever it hits next, in a random
//! direction around the (inward) surface normal, until it escapes or `MAX_DEPTH` bounces are
//! recorded. Every bounce records how lit its hit point is, and those fractions are folded
//! into one brightness factor for the color of the object the camera ray hit first.

use crate::{CrateRng, Point3, Rgb, Scene, Vec3};

/// Maximum number of lit fractions recorded for one camera ray
pub const MAX_DEPTH: usize = 10;

/// Traces one sample from `origin` along `dir`. Returns `background` if nothing is hit.
pub fn trace(
    scene: &Scene,
    origin: Point3,
    dir: Vec3,
    background: Rgb,
    rng: &mut CrateRng,
) -> Rgb {
    let hit = match scene.first_hit(origin, dir) {
        Some(hit) => hit,
        None => return background,
    };
    let color = scene.objects[hit.index].material.color();

    let mut lit = Vec::with_capacity(MAX_DEPTH);
    lit.push(scene.lit_fraction(hit.point));

    let mut origin = hit.point;
    // The first bounce direction is used as is, later ones are normalized
    let mut dir = Vec3::random_in_cube(rng) + hit.normal;
    while lit.len() < MAX_DEPTH {
        let hit = match scene.first_hit(origin, dir) {
            Some(hit) => hit,
            None => break,
        };
        lit.push(scene.lit_fraction(hit.point));

        origin = hit.point;
        dir = match (Vec3::random_in_cube(rng) + hit.normal).checked_normalized() {
            Ok(dir) => dir.vec(),
            // Degenerate bounce, the path ends here
            Err(_) => break,
        };
    }

    color.scale(brightness(&lit))
}

/// Weights the `i`th lit fraction by `0.5^(i + 1)`, so deeper bounces matter less.
///
/// # Example
/// ```
/// # use raytracing::shade::brightness;
/// assert_eq!(brightness(&[1.0]), 0.5);
/// assert_eq!(brightness(&[1.0, 1.0, 0.0]), 0.75);
/// assert_eq!(brightness(&[]), 0.0);
/// ```
pub fn brightness(lit: &[f64]) -> f64 {
    lit.iter()
        .zip(1..)
        .map(|(fraction, depth)| fraction * 0.5f64.powi(depth))
        .sum()
}
