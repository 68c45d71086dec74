use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    buffer::{ImageBuffer, Region},
    pixel::{Pixel, clamp_channel},
};

/// Per channel multipliers applied to each drawn value.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelWeights {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl ChannelWeights {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl Default for ChannelWeights {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

/// Options for filling a region with uniform random colors.
///
/// Every channel of every cell is drawn independently from `min..=max`,
/// scaled by its weight, truncated and clamped to `0..=255`.
///
/// ```rust
/// use picmaker::{ImageBuffer, NoiseFill};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut buf = ImageBuffer::new(16, 16);
/// let mut rng = StdRng::seed_from_u64(7);
/// NoiseFill::new().range(0, 64).apply(&mut buf, &mut rng);
/// assert!(buf.pixels().iter().all(|p| p.r <= 64));
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NoiseFill {
    weights: ChannelWeights,
    region: Option<Region>,
    min: i32,
    max: i32,
}

impl Default for NoiseFill {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseFill {
    pub fn new() -> Self {
        Self {
            weights: ChannelWeights::default(),
            region: None,
            min: 0,
            max: 255,
        }
    }

    pub fn weights(&mut self, weights: ChannelWeights) -> &mut Self {
        self.weights = weights;
        self
    }

    /// Restrict the fill to `region`. Defaults to the whole buffer.
    pub fn region(&mut self, region: Region) -> &mut Self {
        self.region = Some(region);
        self
    }

    pub fn range(&mut self, min: i32, max: i32) -> &mut Self {
        self.min = min;
        self.max = max;
        self
    }

    /// The inclusive range values are drawn from.
    ///
    /// Both ends are clamped to `0..=255`. When `min` ends up above `max`
    /// the range collapses to the single value `min`.
    pub fn draw_bounds(&self) -> (u8, u8) {
        let min = clamp_channel(self.min);
        let max = clamp_channel(self.max).max(min);
        (min, max)
    }

    pub fn apply<R: Rng + ?Sized>(&self, buf: &mut ImageBuffer, rng: &mut R) {
        let region = self
            .region
            .unwrap_or_else(|| buf.full_region())
            .bounded(buf.width(), buf.height());
        if region.is_empty() {
            return;
        }

        let (min, max) = self.draw_bounds();
        let weights = self.weights;
        let mut draw = |weight: f64| -> i32 {
            let base = rng.random_range(min..=max);
            (base as f64 * weight) as i32
        };

        for row in region.top..region.bottom {
            for cell in &mut buf.row_mut(row)[region.left..region.right] {
                let r = draw(weights.r);
                let g = draw(weights.g);
                let b = draw(weights.b);
                *cell = Pixel::clamped(r, g, b);
            }
        }
    }
}
