//! Plain-text (`P3`) PPM images.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, ensure, Context, Result};

use crate::{Rgb, Screen};

/// Writes `pixels` as a `P3` image.
///
/// Nothing is validated: a buffer whose length isn't `width * height`, or channels outside
/// `0..=255`, are only logged and then written as they are.
pub fn write<W: Write>(mut out: W, width: usize, height: usize, pixels: &[Rgb]) -> Result<()> {
    let expected = width * height;
    if pixels.len() < expected {
        log::warn!(
            "Color data is not complete: {} pixels when there should be {}",
            pixels.len(),
            expected
        );
    } else if pixels.len() > expected {
        log::warn!(
            "Color data is too big: {} pixels when there should be {}",
            pixels.len(),
            expected
        );
    }

    write!(out, "P3\n{} {}\n255\n", width, height)?;
    let mut out_of_range = 0;
    for p in pixels {
        if !p.in_range() {
            out_of_range += 1;
        }
        write!(out, "{} {} {} ", p.r, p.g, p.b)?;
    }
    if out_of_range > 0 {
        log::warn!("{} pixels have channels outside 0..=255", out_of_range);
    }
    out.flush()?;
    Ok(())
}

pub fn save<P: AsRef<Path>>(path: P, screen: &Screen) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
    write(BufWriter::new(file), screen.width, screen.height, &screen.buffer)
        .with_context(|| format!("Failed to write image to {:?}", path))
}

/// Parses a `P3` image into `(width, height, pixels)`. The max value must be 255.
pub fn parse(text: &str) -> Result<(usize, usize, Vec<Rgb>)> {
    let mut tokens = text.split_whitespace();
    let mut next = |what: &str| tokens.next().with_context(|| format!("Missing {}", what));

    let magic = next("magic number")?;
    if magic != "P3" {
        bail!("Not a plain PPM image: magic number is {:?}", magic);
    }
    let width: usize = next("width")?.parse().context("Invalid width")?;
    let height: usize = next("height")?.parse().context("Invalid height")?;
    let max: u32 = next("max value")?.parse().context("Invalid max value")?;
    ensure!(max == 255, "Unsupported max value {}", max);

    let mut pixels = Vec::with_capacity(width * height);
    while let Some(r) = tokens.next() {
        let mut channel = |s: Option<&str>| -> Result<i32> {
            let s = s.context("Truncated pixel")?;
            s.parse().with_context(|| format!("Invalid channel {:?}", s))
        };
        let r = channel(Some(r))?;
        let g = channel(tokens.next())?;
        let b = channel(tokens.next())?;
        pixels.push(Rgb::new(r, g, b));
    }
    Ok((width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string(width: usize, height: usize, pixels: &[Rgb]) -> String {
        let mut out = Vec::new();
        write(&mut out, width, height, pixels).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn layout() {
        let pixels = [Rgb::new(255, 0, 7), Rgb::new(1, 2, 3)];
        assert_eq!(to_string(2, 1, &pixels), "P3\n2 1\n255\n255 0 7 1 2 3 ");
    }

    #[test]
    fn round_trip() {
        let pixels: Vec<Rgb> = (0..12)
            .map(|i| Rgb::new(i * 20, 255 - i * 3, (i * 37) % 256))
            .collect();
        let text = to_string(4, 3, &pixels);
        let (width, height, parsed) = parse(&text).unwrap();
        assert_eq!((width, height), (4, 3));
        assert_eq!(parsed, pixels);
    }

    #[test]
    fn anomalies_are_written_anyway() {
        // Too few pixels, one of them out of range
        let pixels = [Rgb::new(300, -4, 0)];
        let text = to_string(2, 2, &pixels);
        assert_eq!(text, "P3\n2 2\n255\n300 -4 0 ");
        let (_, _, parsed) = parse(&text).unwrap();
        assert_eq!(parsed, pixels);
    }

    #[test]
    fn bad_input() {
        assert!(parse("P6\n1 1\n255\n").is_err());
        assert!(parse("P3\n1 1\n65535\n0 0 0").is_err());
        assert!(parse("P3\n1 1\n255\n0 0").is_err());
        assert!(parse("P3\n1").is_err());
    }

    #[test]
    fn save_screen() {
        let mut screen = Screen::new(2, 2);
        screen.buffer[3] = Rgb::new(9, 8, 7);
        let path = std::env::temp_dir().join(format!("raytracing-{}.ppm", std::process::id()));
        save(&path, &screen).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        let (_, _, pixels) = parse(&text).unwrap();
        assert_eq!(&pixels[..], &screen.buffer[..]);
    }
}
