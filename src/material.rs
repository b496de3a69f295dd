use crate::Rgb;

/// Color of a sphere built without an explicit material.
pub const DEFAULT_COLOR: Rgb = Rgb::new(0, 0, 200);

/// Surface description of a sphere.
///
/// Only `Solid` is evaluated by the shading engine. `Metal` and `Glass` are accepted
/// by the scene but shade as [`DEFAULT_COLOR`] until reflection and refraction exist.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Material {
    Solid(Rgb),
    Metal { reflect_amount: f64 },
    Glass { blur_amount: f64 },
}
impl Material {
    /// The color the shading engine multiplies by the path's brightness.
    pub fn color(&self) -> Rgb {
        match self {
            Material::Solid(color) => *color,
            Material::Metal { .. } | Material::Glass { .. } => DEFAULT_COLOR,
        }
    }
}
impl Default for Material {
    fn default() -> Self {
        Material::Solid(DEFAULT_COLOR)
    }
}
impl From<Rgb> for Material {
    fn from(color: Rgb) -> Self {
        Material::Solid(color)
    }
}
