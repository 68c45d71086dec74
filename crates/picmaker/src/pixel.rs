use core::fmt;

use serde::{Deserialize, Serialize};

/// Largest value a channel may hold, also written as the ppm max value.
pub const MAX_CHANNEL: u8 = 255;

/// Restrict an integer channel value to `0..=255`.
#[inline]
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, MAX_CHANNEL as i32) as u8
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);
    pub const RED: Pixel = Pixel::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a pixel from unbounded channel values, clamping each one.
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }
}

/// Writes `r g b`, the triple layout of an ascii pixel map.
impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}
