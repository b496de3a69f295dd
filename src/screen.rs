use crate::{Angle, Point3, Rgb, Vec3};

pub struct Screen {
    pub width: usize,
    pub height: usize,
    /// Flat row-major buffer of pixels with length of `width * height`
    pub buffer: Box<[Rgb]>,
}
impl Screen {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buffer: vec![Rgb::default(); width * height].into(),
        }
    }

    pub fn rows(&self) -> std::slice::ChunksExact<Rgb> {
        self.buffer.chunks_exact(self.width)
    }

    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<Rgb> {
        self.buffer.chunks_exact_mut(self.width)
    }
}

/// A pinhole camera sitting at the origin and looking down `-z`.
#[derive(Clone, Debug)]
pub struct Camera {
    pub height: usize,
    pub width: usize,
    pub fov: Angle,
    pub origin: Point3,
}
impl Camera {
    pub fn new(height: usize, width: usize, fov: Angle) -> Self {
        Self {
            height,
            width,
            fov,
            origin: Point3::ORIGIN,
        }
    }

    pub fn mx(&self) -> f64 {
        -2. / self.width as f64
    }

    pub fn my(&self) -> f64 {
        -2. / self.height as f64
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    pub fn fov_adjustment(&self) -> f64 {
        (self.fov.radians() / 2.).tan()
    }

    /// Direction through pixel `(x, y)`. Not normalized.
    ///
    /// `x` runs from `width` (left edge) down to 1, `y` from 0 (top edge) up to `height - 1`.
    pub fn direction(&self, x: usize, y: usize) -> Vec3 {
        let fov_adjustment = self.fov_adjustment();
        Vec3::new(
            fov_adjustment * self.aspect_ratio() * (x as f64 * self.mx() + 1.),
            fov_adjustment * (y as f64 * self.my() + 1.),
            -1.,
        )
    }
}
