use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    buffer::ImageBuffer,
    error::Result,
    noise::{ChannelWeights, NoiseFill},
    pixel::Pixel,
    wheel::{DEFAULT_TILE_SIZE, WheelShadow},
};

/// What gets drawn into the buffer.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", rename_all_fields = "kebab-case")]
pub enum Pattern {
    WheelShadow {
        #[serde(default = "default_tile_size")]
        tile_size: usize,
    },
    Noise {
        #[serde(default)]
        min: i32,
        #[serde(default = "default_max")]
        max: i32,
        #[serde(default)]
        weights: ChannelWeights,
    },
    Solid {
        #[serde(default = "default_color")]
        color: Pixel,
    },
}

fn default_tile_size() -> usize {
    DEFAULT_TILE_SIZE
}

fn default_max() -> i32 {
    255
}

fn default_color() -> Pixel {
    Pixel::RED
}

impl Default for Pattern {
    fn default() -> Self {
        Pattern::WheelShadow {
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl Pattern {
    pub fn validate(&self) -> Result<()> {
        if let Pattern::WheelShadow { tile_size } = *self {
            WheelShadow::new(tile_size)?;
        }
        Ok(())
    }

    /// Number of progress steps `render_with_progress` reports for a buffer
    /// `height` rows tall.
    pub fn steps(&self, height: usize) -> usize {
        match *self {
            Pattern::WheelShadow { tile_size } if tile_size > 0 => height.div_ceil(tile_size),
            _ => 1,
        }
    }

    pub fn render<R: Rng + ?Sized>(&self, buf: &mut ImageBuffer, rng: &mut R) -> Result<()> {
        self.render_with_progress(buf, rng, || {})
    }

    /// Draw into `buf`, calling `on_step` after each finished step.
    pub fn render_with_progress<R, F>(
        &self,
        buf: &mut ImageBuffer,
        rng: &mut R,
        mut on_step: F,
    ) -> Result<()>
    where
        R: Rng + ?Sized,
        F: FnMut(),
    {
        match *self {
            Pattern::WheelShadow { tile_size } => {
                WheelShadow::new(tile_size)?.fill_with_progress(buf, rng, on_step);
            }
            Pattern::Noise { min, max, weights } => {
                NoiseFill::new()
                    .range(min, max)
                    .weights(weights)
                    .apply(buf, rng);
                on_step();
            }
            Pattern::Solid { color } => {
                buf.fill(color);
                on_step();
            }
        }
        Ok(())
    }
}
