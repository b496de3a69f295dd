use std::ops;

/// Each channel nominally ranges from 0 to 255. Arithmetic is never clamped, so values
/// outside that range are representable and are reported by the image writer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}
impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Scales every channel by `factor`, truncating toward zero.
    ///
    /// # Example
    /// ```
    /// # use raytracing::Rgb;
    /// assert_eq!(Rgb::new(200, 50, 9).scale(0.5), Rgb::new(100, 25, 4));
    /// ```
    pub fn scale(self, factor: f64) -> Self {
        Self::new(
            (self.r as f64 * factor) as i32,
            (self.g as f64 * factor) as i32,
            (self.b as f64 * factor) as i32,
        )
    }

    pub fn in_range(&self) -> bool {
        let bounds = 0..=255;
        bounds.contains(&self.r) && bounds.contains(&self.g) && bounds.contains(&self.b)
    }
}

impl From<[i32; 3]> for Rgb {
    fn from(a: [i32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl ops::Add for Rgb {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}
impl ops::AddAssign for Rgb {
    fn add_assign(&mut self, rhs: Self) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}
/// Integer division, truncating
impl ops::Div<i32> for Rgb {
    type Output = Self;

    fn div(self, rhs: i32) -> Self::Output {
        Self::new(self.r / rhs, self.g / rhs, self.b / rhs)
    }
}
