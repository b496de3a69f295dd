use std::num::{NonZeroU16, NonZeroUsize};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use once_cell::sync::OnceCell;
use structopt::StructOpt;
use strum::VariantNames;
use strum_macros::Display as StrumDisplay;
use strum_macros::{EnumString, EnumVariantNames};

use crate::material::DEFAULT_COLOR;
use crate::{Angle, Camera, CrateRng, Point3, RenderSettings, Rgb, Scene};

static CONFIG: OnceCell<Config> = OnceCell::new();

#[allow(non_snake_case)]
/// Return a `Config` built from command line args
pub fn GLOBAL() -> &'static Config {
    CONFIG.get_or_init(Config::from_args)
}

#[derive(Clone, Debug, StructOpt)]
pub struct Config {
    #[structopt(short, long, default_value = "1080", display_order = 0)]
    /// Width of render
    pub width: NonZeroUsize,

    #[structopt(short, long, default_value = "1080", display_order = 1)]
    /// Height of render
    pub height: NonZeroUsize,

    #[structopt(short, long, default_value = "90")]
    /// Field of view in degrees
    pub fov: f64,

    #[structopt(short, long, default_value = "test.ppm", parse(from_os_str))]
    /// Where to write the image
    pub output: PathBuf,

    #[structopt(short = "j", long, default_value = "10")]
    /// Number of threads, each rendering one band of rows
    pub workers: NonZeroUsize,

    #[structopt(short, long, default_value = "2")]
    /// Number of samples per pixel
    pub samples: NonZeroU16,

    #[structopt(short = "r", long = "rng")]
    /// Use a specific seed for the rng.
    pub seed: Option<u64>,

    #[structopt(
        default_value = "Spheres",
        // Using this instead of possible_values because possible_values doesn't wrap properly
        parse(try_from_str = parse_preset),
    )]
    /// The scene to render
    pub preset: Preset,
}
impl Config {
    pub fn camera(&self) -> Camera {
        Camera::new(
            self.height.get(),
            self.width.get(),
            Angle::from_degrees(self.fov),
        )
    }

    pub fn settings(&self, seed: u64) -> RenderSettings {
        RenderSettings {
            workers: self.workers,
            samples: self.samples,
            seed,
            ..RenderSettings::default()
        }
    }
}

fn parse_preset(s: &str) -> Result<Preset> {
    s.parse::<Preset>().map_err(|_| {
        anyhow!(
            "\"{}\" isn't a Preset.\nPossible values: {:#?}",
            s,
            Preset::VARIANTS
        )
    })
}

const SPHERE_RED: Rgb = Rgb::new(200, 50, 50);

#[derive(Copy, Clone, Debug, StrumDisplay, EnumString, EnumVariantNames, PartialEq)]
pub enum Preset {
    /// A row of small red spheres on a huge ground sphere, under one point light
    Spheres,
    /// `Spheres`, with the light spread into a cluster for softer shadows
    SoftLight,
}
impl Preset {
    pub fn scene(self, rng: &mut CrateRng) -> Scene {
        let mut scene = Scene::new();
        for &x in &[0., 0.5, -0.5, 1.0, -1.0, 1.5, -1.5, 2.0, -2.0] {
            scene.make_sphere(Point3::new(x, 0., -0.5), 0.2, SPHERE_RED);
        }
        scene.make_sphere(Point3::new(0., 0., 2.), 1., DEFAULT_COLOR);
        scene.make_sphere(Point3::new(0., -100.2, -1.), 100., DEFAULT_COLOR);

        let light = Point3::new(-1., 10., 0.);
        match self {
            Preset::Spheres => scene.add_light(light),
            Preset::SoftLight => scene.make_light(light, 10., rng),
        }
        scene
    }
}
