//! Procedurally generated color grids written as plain pixel maps.

pub mod buffer;
pub mod config;
pub mod error;
pub mod noise;
pub mod pattern;
pub mod pixel;
pub mod ppm;
pub mod wheel;

pub use buffer::{ImageBuffer, Region};
pub use config::Config;
pub use error::{Error, Result};
pub use noise::{ChannelWeights, NoiseFill};
pub use pattern::Pattern;
pub use pixel::{Pixel, clamp_channel};
pub use wheel::WheelShadow;
