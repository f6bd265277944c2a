//! Command-line parsing, producing the [`AppSettings`] that drive the rest of the program

use crate::{AppSettings, OutputFormat};
use snowflake_generator::params::{CombTipType, GenerationParams};

use clap::{crate_version, value_t, App, Arg, ArgMatches};
use eyre::{eyre, Context};
use std::path::{Path, PathBuf};
use std::process::exit;
use std::str::FromStr;

/// The file pattern used if none is given
const DEFAULT_OUTPUT_PATTERN: &str = "img/{}.svg";

/// Parses the command-line arguments and runs the app
pub fn run() {
    let matches = app().get_matches();

    let settings = settings_from_matches(&matches).unwrap_or_else(|e| {
        eprintln!("{:?}", e.wrap_err("invalid arguments"));
        exit(1)
    });

    if let Err(e) = settings.run() {
        eprintln!("{:?}", e);
        exit(1)
    }
}

fn app() -> App<'static, 'static> {
    App::new("snowflake-generator")
        .version(crate_version!())
        .about("Generates random n-fold symmetric snowflakes")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .value_name("FILE")
                .help("JSON file with generation parameters. Missing fields use the defaults"),
        )
        .arg(
            Arg::with_name("count")
                .short("n")
                .long("count")
                .takes_value(true)
                .default_value("10")
                .help("Number of snowflakes to generate"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .help("Seed for the random number generator, for reproducible output"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("PATTERN")
                .default_value(DEFAULT_OUTPUT_PATTERN)
                .help(
                    "Output file pattern. '{}' is replaced by the index of each snowflake; the \
                     extension ('svg' or 'png') picks the format",
                ),
        )
        .arg(override_arg("symmetry", "Number of rays"))
        .arg(override_arg("scale", "Length of each ray, in pixels"))
        .arg(override_arg("ray-width", "Width of each ray, relative to its length"))
        .arg(override_arg("comb-width", "Width of each comb, relative to the ray length"))
        .arg(override_arg("min-combs", "Minimum number of combs per side of a ray"))
        .arg(override_arg("max-combs", "Maximum number of combs per side of a ray"))
        .arg(override_arg("tip-type", "Shape of the comb tips. Only 'angled' is supported"))
        .arg(override_arg("min-tip-length", "Minimum comb length, relative to the ray"))
        .arg(override_arg("max-tip-length", "Maximum comb length, relative to the ray"))
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log the random choices made for each snowflake"),
        )
}

/// Helper for the arguments that override a single generation parameter
fn override_arg(name: &'static str, help: &'static str) -> Arg<'static, 'static> {
    Arg::with_name(name).long(name).takes_value(true).help(help)
}

/// Parses the value of the argument, if present, exiting with clap's usual message if it's
/// malformed
fn parse_opt<T: FromStr>(matches: &ArgMatches, name: &str) -> Option<T> {
    matches
        .value_of(name)
        .map(|_| value_t!(matches, name, T).unwrap_or_else(|e| e.exit()))
}

fn settings_from_matches(matches: &ArgMatches) -> eyre::Result<AppSettings> {
    let mut params = match matches.value_of("config") {
        Some(file) => GenerationParams::from_file(Path::new(file))
            .wrap_err("failed to load generation parameters")?,
        None => GenerationParams::default(),
    };

    apply_overrides(&mut params, matches);

    let output_pattern = matches.value_of("output").unwrap_or(DEFAULT_OUTPUT_PATTERN);
    let format = OutputFormat::from_pattern(output_pattern)?;

    Ok(AppSettings {
        params,
        count: parse_opt(matches, "count").unwrap_or(10),
        seed: parse_opt(matches, "seed"),
        output_pattern: output_pattern.to_owned(),
        format,
    })
}

#[rustfmt::skip]
fn apply_overrides(params: &mut GenerationParams, matches: &ArgMatches) {
    if let Some(v) = parse_opt(matches, "symmetry") { params.symmetry = v; }
    if let Some(v) = parse_opt(matches, "scale") { params.global_scale_factor = v; }
    if let Some(v) = parse_opt(matches, "ray-width") { params.ray_width = v; }
    if let Some(v) = parse_opt(matches, "comb-width") { params.comb_width = v; }
    if let Some(v) = parse_opt(matches, "min-combs") { params.min_comb_count = v; }
    if let Some(v) = parse_opt(matches, "max-combs") { params.max_comb_count = v; }
    if let Some(v) = matches.value_of("tip-type") { params.comb_tip_type = CombTipType::from(v); }
    if let Some(v) = parse_opt(matches, "min-tip-length") { params.comb_tip_min_length = v; }
    if let Some(v) = parse_opt(matches, "max-tip-length") { params.comb_tip_max_length = v; }

    if matches.is_present("verbose") {
        params.verbose = true;
    }
}

impl OutputFormat {
    /// Picks the output format from the extension of the file pattern
    fn from_pattern(pattern: &str) -> eyre::Result<Self> {
        let ext = Path::new(pattern)
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase());

        match ext.as_deref() {
            Some("svg") => Ok(OutputFormat::Svg),
            Some("png") => Ok(OutputFormat::Png),
            Some(other) => Err(eyre!("unsupported output file extension '{}'", other)),
            None => Err(eyre!("output pattern {:?} has no file extension", pattern)),
        }
    }
}

/// Substitutes the index `n` into the first `{}` of the file pattern, zero-padded so that every
/// file name up to `total` has the same length
///
/// If the pattern has no `{}`, the index is inserted before the extension instead, so that
/// successive snowflakes don't overwrite each other.
pub fn substitute_file_pattern(pattern: &str, n: usize, total: usize) -> PathBuf {
    let width = total.saturating_sub(1).to_string().len();
    let index = format!("{:0width$}", n, width = width);

    if pattern.contains("{}") {
        return PathBuf::from(pattern.replacen("{}", &index, 1));
    }

    let path = Path::new(pattern);
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let file_name = match path.extension() {
        Some(ext) => format!("{}{}.{}", stem, index, ext.to_string_lossy()),
        None => format!("{}{}", stem, index),
    };

    path.with_file_name(file_name)
}
