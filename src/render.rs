use std::mem;
use std::num::{NonZeroU16, NonZeroUsize};
use std::ops::Range;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rayon::prelude::*;

use crate::{shade, Camera, CrateRng, Rgb, Scene, Screen};

#[derive(Clone, Debug)]
pub struct RenderSettings {
    /// Number of row bands, each rendered by its own thread
    pub workers: NonZeroUsize,
    /// Samples averaged per pixel
    pub samples: NonZeroU16,
    /// Seed of the first band's rng. Band `i` uses `seed + i`.
    pub seed: u64,
    /// Color of rays that don't hit anything
    pub background: Rgb,
}
impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            workers: NonZeroUsize::new(10).unwrap(),
            samples: NonZeroU16::new(2).unwrap(),
            seed: 0,
            background: Rgb::BLACK,
        }
    }
}

/// Splits `0..height` into `workers` consecutive bands. Band `i` is
/// `i * height / workers .. (i + 1) * height / workers`, so the bands never overlap and
/// always cover every row. Some bands are empty when `workers > height`.
pub fn bands(height: usize, workers: usize) -> Vec<Range<usize>> {
    (0..workers)
        .map(|i| i * height / workers..(i + 1) * height / workers)
        .collect()
}

/// Renders `scene` as seen from `camera`, one thread per band of rows.
pub fn render(camera: &Camera, scene: &Scene, settings: &RenderSettings) -> Result<Screen> {
    let mut screen = Screen::new(camera.width, camera.height);
    let width = screen.width;
    let workers = settings.workers.get();

    // Hand every band its own slice of the buffer
    let mut rest = &mut screen.buffer[..];
    let mut jobs = Vec::with_capacity(workers);
    for (index, rows) in bands(camera.height, workers).into_iter().enumerate() {
        let (pixels, tail) = mem::take(&mut rest).split_at_mut(rows.len() * width);
        rest = tail;
        jobs.push((index, rows, pixels));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .context("Failed to build the render thread pool")?;

    log::info!(
        "Rendering {}x{} with {} workers, {} samples per pixel",
        camera.width,
        camera.height,
        workers,
        settings.samples
    );
    pool.install(|| {
        jobs.into_par_iter().for_each(|(index, rows, pixels)| {
            let mut rng = CrateRng::seed_from_u64(settings.seed.wrapping_add(index as u64));
            render_band(camera, scene, settings, rows.clone(), pixels, &mut rng);
            log::debug!("Band {} done (rows {:?})", index, rows);
        })
    });

    Ok(screen)
}

/// Fills `pixels`, the buffer slice covering `rows`. Columns are scanned right to left.
fn render_band(
    camera: &Camera,
    scene: &Scene,
    settings: &RenderSettings,
    rows: Range<usize>,
    pixels: &mut [Rgb],
    rng: &mut CrateRng,
) {
    let samples = settings.samples.get();
    for (y, row) in rows.zip(pixels.chunks_exact_mut(camera.width)) {
        for (x, pix) in (1..=camera.width).rev().zip(row.iter_mut()) {
            let dir = camera.direction(x, y);

            let mut sum = Rgb::default();
            for _ in 0..samples {
                sum += shade::trace(scene, camera.origin, dir, settings.background, rng);
            }
            *pix = sum / samples as i32;
        }
    }
}
