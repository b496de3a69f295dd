use std::f64::consts::FRAC_PI_2;

use crate::margin_of_error;

/// Stored in radians
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Angle(f64);
impl Angle {
    pub const fn new(radians: f64) -> Self {
        Self(radians)
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees.to_radians())
    }

    pub fn radians(&self) -> f64 {
        self.0
    }

    pub fn degrees(&self) -> f64 {
        self.0.to_degrees()
    }

    /// Within `MOE` of a right angle
    pub fn is_orthogonal(&self) -> bool {
        margin_of_error(self.0, FRAC_PI_2)
    }
}
