//! Wrapper module for the generation parameters, rooted at [`GenerationParams`]

use crate::Float;
use eyre::{eyre, Context};
use serde::Deserialize;
use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::Path;

/// The largest accepted number of combs per side of a ray. The polygon count grows with the
/// product of this and `symmetry`.
pub const MAX_COMB_COUNT: usize = 100;

/// The largest accepted symmetry order
pub const MAX_SYMMETRY: usize = 360;

/// The full set of options controlling a single snowflake generation
///
/// All lengths are in unit geometry (i.e. relative to a ray length of 1), apart from
/// `global_scale_factor`, which converts unit geometry into pixels.
///
/// When loaded from JSON, any missing field takes its value from [`GenerationParams::default`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationParams {
    /// The number of rays, i.e. the order of the rotational symmetry. Must be at least 2
    pub symmetry: usize,
    /// The size of a single ray, in pixels
    pub global_scale_factor: Float,
    /// The full width of each primary ray
    pub ray_width: Float,
    /// The width of each comb, measured along the ray
    pub comb_width: Float,
    /// Inclusive lower bound on the random number of combs per side of a ray
    pub min_comb_count: usize,
    /// Inclusive upper bound on the random number of combs per side of a ray
    pub max_comb_count: usize,
    /// The shape at the end of each comb
    pub comb_tip_type: CombTipType,
    /// Lower bound on the random target length of each comb
    pub comb_tip_min_length: Float,
    /// Upper bound on the random target length of each comb
    pub comb_tip_max_length: Float,
    /// If true, the random choices made during generation are logged at `info` instead of
    /// `debug`. Has no effect on the geometry.
    pub verbose: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        GenerationParams {
            symmetry: 6,
            global_scale_factor: 200.0,
            // Anything down to 0.05 still looks reasonable. Much thicker and the combs get lost.
            ray_width: 0.065,
            comb_width: 0.053,
            min_comb_count: 3,
            max_comb_count: 5,
            comb_tip_type: CombTipType::Angled,
            comb_tip_min_length: 0.15,
            comb_tip_max_length: 0.45,
            verbose: false,
        }
    }
}

/// The shape of the tip of each comb
///
/// Only [`Angled`] is implemented. Any other name is kept around as [`Unsupported`] so that
/// configuration loading succeeds, and generation then fails with a configuration error.
///
/// [`Angled`]: Self::Angled
/// [`Unsupported`]: Self::Unsupported
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CombTipType {
    /// Each comb leans out from the ray by one wedge angle, with a flat tip
    Angled,
    Unsupported(String),
}

impl From<&str> for CombTipType {
    fn from(name: &str) -> Self {
        match name {
            "angled" => CombTipType::Angled,
            other => CombTipType::Unsupported(other.to_owned()),
        }
    }
}

impl From<String> for CombTipType {
    fn from(name: String) -> Self {
        match name == "angled" {
            true => CombTipType::Angled,
            false => CombTipType::Unsupported(name),
        }
    }
}

impl Display for CombTipType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CombTipType::Angled => f.write_str("angled"),
            CombTipType::Unsupported(name) => f.write_str(name),
        }
    }
}

impl GenerationParams {
    /// Reads the parameters from the JSON file at the given path
    ///
    /// The parameters are not validated here; that happens at the start of each generation.
    pub fn from_file(file: &Path) -> eyre::Result<Self> {
        let file_content = fs::read_to_string(file)
            .wrap_err_with(|| format!("failed to read file at {:?}", file.to_string_lossy()))?;

        Self::from_json(&file_content)
    }

    /// Parses the parameters from a JSON string
    pub fn from_json(json: &str) -> eyre::Result<Self> {
        serde_json::from_str(json).wrap_err("could not deserialize generation parameters")
    }

    /// Half the side length of the square canvas that fits the full snowflake, in pixels
    ///
    /// This is a slight overestimate; combs never actually reach the full tip length past the end
    /// of the ray.
    pub fn canvas_extent(&self) -> Float {
        self.global_scale_factor * (1.0 + self.comb_tip_max_length)
    }

    /// Checks that the numeric ranges make sense, so that generation doesn't silently produce
    /// degenerate geometry
    ///
    /// This does *not* reject an unsupported [`CombTipType`]; that's reported by the comb builder
    /// itself.
    pub fn validate(&self) -> eyre::Result<()> {
        let field_err = |field: &str, result: eyre::Result<()>| {
            result.with_context(|| format!("invalid value at .{} in generation parameters", field))
        };

        let check = |ok: bool, msg: String| match ok {
            true => Ok(()),
            false => Err(eyre!(msg)),
        };

        field_err(
            "symmetry",
            check(
                (2..=MAX_SYMMETRY).contains(&self.symmetry),
                format!(
                    "symmetry must be within 2..={} (got {})",
                    MAX_SYMMETRY, self.symmetry
                ),
            ),
        )?;

        field_err(
            "global_scale_factor",
            check(
                self.global_scale_factor.is_finite() && self.global_scale_factor > 0.0,
                format!(
                    "scale factor must be > 0 (got {})",
                    self.global_scale_factor
                ),
            ),
        )?;

        for (name, width) in [("ray_width", self.ray_width), ("comb_width", self.comb_width)] {
            field_err(
                name,
                check(
                    width.is_finite() && width > 0.0,
                    format!("width must be > 0 (got {})", width),
                ),
            )?;
        }

        field_err(
            "max_comb_count",
            check(
                self.min_comb_count <= self.max_comb_count,
                format!(
                    "`max_comb_count` ({}) must not be less than `min_comb_count` ({})",
                    self.max_comb_count, self.min_comb_count
                ),
            ),
        )?;

        field_err(
            "max_comb_count",
            check(
                self.max_comb_count <= MAX_COMB_COUNT,
                format!(
                    "`max_comb_count` must be <= {} (got {})",
                    MAX_COMB_COUNT, self.max_comb_count
                ),
            ),
        )?;

        field_err(
            "comb_tip_min_length",
            check(
                self.comb_tip_min_length >= 0.0,
                format!(
                    "minimum tip length must be >= 0 (got {})",
                    self.comb_tip_min_length
                ),
            ),
        )?;

        field_err(
            "comb_tip_max_length",
            check(
                self.comb_tip_max_length.is_finite()
                    && self.comb_tip_min_length <= self.comb_tip_max_length,
                format!(
                    "`comb_tip_max_length` ({}) must not be less than `comb_tip_min_length` ({})",
                    self.comb_tip_max_length, self.comb_tip_min_length
                ),
            ),
        )?;

        Ok(())
    }
}
