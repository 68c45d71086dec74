//! Tile by tile "wheel" coloring with a radial shadow.
//!
//! Red grows downwards, green grows to the right, blue grows with the
//! distance to the bottom-right corner, and every tile's brightness ceiling
//! drops as the tile moves away from the image center.

use rand::Rng;

use crate::{
    buffer::{ImageBuffer, Region},
    error::Error,
    noise::{ChannelWeights, NoiseFill},
};

/// Divisor turning a tile size into the per-pixel weight scale.
///
/// Found by eye, there is no derivation for it. Changing it changes the image.
pub const SCALE_DIVISOR: f64 = 2048.0;

pub const DEFAULT_TILE_SIZE: usize = 8;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WheelShadow {
    tile_size: usize,
}

impl Default for WheelShadow {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

/// Distances shared by every tile of one image.
#[derive(Clone, Copy, Debug)]
struct Frame {
    width: f64,
    height: f64,
    center_x: f64,
    center_y: f64,
    max_dist: f64,
}

impl Frame {
    fn new(width: usize, height: usize) -> Self {
        let center_x = width as f64 / 2.0;
        let center_y = height as f64 / 2.0;
        Self {
            width: width as f64,
            height: height as f64,
            center_x,
            center_y,
            max_dist: center_x.hypot(center_y),
        }
    }
}

impl WheelShadow {
    pub fn new(tile_size: usize) -> Result<Self, Error> {
        if tile_size == 0 {
            return Err(Error::InvalidConfig("tile size must be positive".into()));
        }
        Ok(Self { tile_size })
    }

    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    pub fn scale(&self) -> f64 {
        self.tile_size as f64 / SCALE_DIVISOR
    }

    /// Top row of every band of tiles, in drawing order.
    pub fn bands(&self, height: usize) -> impl Iterator<Item = usize> + use<> {
        (0..height).step_by(self.tile_size)
    }

    /// The noise fill that draws the tile whose top-left cell is (`top`, `left`).
    pub fn tile_fill(&self, width: usize, height: usize, top: usize, left: usize) -> NoiseFill {
        self.tile_fill_in(&Frame::new(width, height), top, left)
    }

    fn tile_fill_in(&self, frame: &Frame, top: usize, left: usize) -> NoiseFill {
        let scale = self.scale();
        let (x, y) = (left as f64, top as f64);

        let cent_dist = (x - frame.center_x).hypot(y - frame.center_y);
        let corner_dist = (frame.width - x).hypot(frame.height - y);
        let ceiling = 255.0 * (frame.max_dist - cent_dist) / frame.max_dist;

        let mut fill = NoiseFill::new();
        fill.weights(ChannelWeights::new(y * scale, x * scale, corner_dist * scale))
            .region(Region::square(top, left, self.tile_size))
            .range(0, ceiling as i32);
        fill
    }

    pub fn fill<R: Rng + ?Sized>(&self, buf: &mut ImageBuffer, rng: &mut R) {
        self.fill_with_progress(buf, rng, || {});
    }

    /// Draw every tile, calling `on_band` after each finished row of tiles.
    #[tracing::instrument(
        skip_all,
        fields(width = buf.width(), height = buf.height(), tile_size = self.tile_size)
    )]
    pub fn fill_with_progress<R, F>(&self, buf: &mut ImageBuffer, rng: &mut R, mut on_band: F)
    where
        R: Rng + ?Sized,
        F: FnMut(),
    {
        let frame = Frame::new(buf.width(), buf.height());
        tracing::debug!(max_dist = frame.max_dist, scale = self.scale(), "wheel shadow");
        for top in self.bands(buf.height()) {
            for left in (0..buf.width()).step_by(self.tile_size) {
                self.tile_fill_in(&frame, top, left).apply(buf, rng);
            }
            on_band();
        }
    }
}
