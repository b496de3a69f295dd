use std::time::Instant;

use anyhow::Result;
use rand::{Rng, SeedableRng};

use raytracing::{config, ppm, render, CrateRng};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config::GLOBAL();
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("Using seed {}", seed);

    let mut rng = CrateRng::seed_from_u64(seed);
    let scene = config.preset.scene(&mut rng);
    let camera = config.camera();
    let settings = config.settings(rng.gen());

    let start = Instant::now();
    let screen = render(&camera, &scene, &settings)?;
    log::info!("Render time = {:.2?}", start.elapsed());

    log::info!("Saving image to {:?}", config.output);
    ppm::save(&config.output, &screen)?;
    Ok(())
}
