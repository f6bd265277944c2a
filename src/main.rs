//! Batch driver for the snowflake generator
//!
//! The main entrypoint is actually in [`cli::run`] ('src/cli.rs'), which parses the arguments
//! and then calls the `run` method on [`AppSettings`].

use std::fs;

use eyre::Context;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use snowflake_generator::params::GenerationParams;
use snowflake_generator::{gen, img, svg};

mod cli;

/// Everything needed for a single run of the program, filled by the `cli` module
#[derive(Debug)]
struct AppSettings {
    params: GenerationParams,
    /// The number of snowflakes to generate
    count: usize,
    /// Seed for the random number generator. If absent, the generator is seeded from system
    /// entropy.
    seed: Option<u64>,
    /// Output file pattern, where the first `{}` is replaced by the index of the snowflake
    output_pattern: String,
    format: OutputFormat,
}

/// The kind of file each snowflake is written to
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum OutputFormat {
    Svg,
    Png,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Internally calls `AppSettings::run`
    cli::run()
}

impl AppSettings {
    /// Generates and writes every snowflake, stopping at the first error
    ///
    /// A single random number generator is shared between all of the snowflakes, so a seeded run
    /// always produces the same sequence of files.
    fn run(&self) -> eyre::Result<()> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let svg_config = svg::SvgConfig::default();
        let img_config = img::ImageConfig::default();

        for i in 0..self.count {
            info!("iteration {}", i);

            let flake = gen::generate(&self.params, &mut rng)
                .wrap_err_with(|| format!("failed to generate snowflake #{}", i))?;

            let path = cli::substitute_file_pattern(&self.output_pattern, i, self.count);
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir).wrap_err_with(|| {
                    format!("failed to create output directory {:?}", dir.to_string_lossy())
                })?;
            }

            match self.format {
                OutputFormat::Svg => svg_config.save(&flake, &path)?,
                OutputFormat::Png => img_config.save(&flake, &path)?,
            }

            info!(
                "wrote {} polygons to {:?}",
                flake.polygons().len(),
                path.to_string_lossy()
            );
        }

        Ok(())
    }
}
