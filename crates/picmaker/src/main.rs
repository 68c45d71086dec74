use std::path::PathBuf;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use picmaker::{Config, Pattern, ppm};
use tracing_subscriber::EnvFilter;

#[derive(Debug, clap::Parser)]
#[command(name = "picmaker", about = "Draw a wheel shadow noise image as a plain ppm")]
struct Args {
    /// TOML file with generation settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed for the random source, repeatable output.
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    /// Draw the wheel shadow pattern with this tile size.
    #[arg(short, long)]
    tile_size: Option<usize>,

    /// Hide the progress bar.
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn into_config(self) -> anyhow::Result<(Config, bool)> {
        let mut config = match &self.config {
            Some(path) => Config::read_from_file(path)?,
            None => Config::default(),
        };

        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(tile_size) = self.tile_size {
            config.pattern = Pattern::WheelShadow { tile_size };
        }

        Ok((config, self.quiet))
    }
}

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";

fn progress_bar(len: usize, quiet: bool) -> anyhow::Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(PROGRESS_TEMPLATE)?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

fn run() -> anyhow::Result<()> {
    let (config, quiet) = Args::parse().into_config()?;
    let mut buf = config.buffer()?;
    tracing::debug!(?config, "starting");

    let mut rng = config.rng();

    let pb = progress_bar(config.pattern.steps(config.height), quiet)?;
    config
        .pattern
        .render_with_progress(&mut buf, &mut rng, || pb.inc(1))?;
    pb.finish_with_message("Image done");

    ppm::save(&config.output, &buf)?;
    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        tracing::error!("fatal error: {err:#}");
        std::process::exit(1);
    }
}
