use std::path::{Path, PathBuf};

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    buffer::ImageBuffer,
    error::{Error, Result},
    pattern::Pattern,
    pixel::Pixel,
};

pub const DEFAULT_WIDTH: usize = 512;
pub const DEFAULT_HEIGHT: usize = 512;
pub const DEFAULT_OUTPUT: &str = "picmaker.ppm";

/// Everything one run needs. Missing keys in a config file take the
/// defaults, which draw a 512x512 wheel shadow into `picmaker.ppm`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub output: PathBuf,
    /// Without a seed every run draws a different image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub pattern: Pattern,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
            pattern: Pattern::default(),
        }
    }
}

impl Config {
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let context = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&context)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "image size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        let fits = self
            .width
            .checked_mul(self.height)
            .and_then(|cells| cells.checked_mul(size_of::<Pixel>()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if !fits {
            return Err(Error::InvalidConfig(format!(
                "image size {}x{} is too large",
                self.width, self.height
            )));
        }
        self.pattern.validate()
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// A cleared buffer of the configured size.
    pub fn buffer(&self) -> Result<ImageBuffer> {
        self.validate()?;
        let mut buf = ImageBuffer::new(self.width, self.height);
        buf.clear();
        Ok(buf)
    }

    /// Draw the configured image in memory.
    pub fn generate(&self) -> Result<ImageBuffer> {
        let mut buf = self.buffer()?;
        self.pattern.render(&mut buf, &mut self.rng())?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!((config.width, config.height), (512, 512));
        assert_eq!(config.output, PathBuf::from("picmaker.ppm"));
        assert_eq!(config.pattern, Pattern::WheelShadow { tile_size: 8 });
        assert_eq!(Config::from_toml("").unwrap(), config);
    }

    #[test]
    fn partial_file() {
        let config = Config::from_toml("width = 64\nseed = 9\n").unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 512);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn toml_round_trip() {
        let config = Config {
            seed: Some(42),
            pattern: Pattern::Solid {
                color: Pixel::new(1, 2, 3),
            },
            ..Config::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn read_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "height = 32\noutput = \"x.ppm\"").unwrap();
        let config = Config::read_from_file(file.path()).unwrap();
        assert_eq!(config.height, 32);
        assert_eq!(config.output, PathBuf::from("x.ppm"));
    }

    #[test]
    fn missing_file() {
        let err = Config::read_from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }

    #[test]
    fn bad_toml() {
        let err = Config::from_toml("width = \"wide\"").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn zero_size_is_invalid() {
        let config = Config {
            width: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        assert!(config.generate().is_err());
    }

    #[test]
    fn oversized_image_is_invalid() {
        for (width, height) in [
            (usize::MAX, 2),
            (usize::MAX / 2, usize::MAX / 2),
            (isize::MAX as usize / 2, 1),
        ] {
            let config = Config {
                width,
                height,
                pattern: Pattern::Solid { color: Pixel::RED },
                ..Config::default()
            };
            assert!(
                matches!(config.generate(), Err(Error::InvalidConfig(_))),
                "{width}x{height}"
            );
        }
    }

    #[test]
    fn seeded_generate_is_repeatable() {
        let config = Config {
            width: 48,
            height: 40,
            seed: Some(1234),
            ..Config::default()
        };
        assert_eq!(config.generate().unwrap(), config.generate().unwrap());
    }
}
