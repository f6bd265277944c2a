//! Random snowflake generator
//!
//! Snowflakes are built as a list of polygons: a set of wedge-shaped rays, plus randomly sized
//! "combs" along each ray, all placed with n-fold rotational symmetry and a mirror across each
//! ray. The generation itself lives in [`gen`]; the result is written out by [`svg`] or [`img`].
//!
//! ```no_run
//! use rand::SeedableRng;
//! use snowflake_generator::{gen, params::GenerationParams, svg::SvgConfig};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let flake = gen::generate(&GenerationParams::default(), &mut rng)?;
//! SvgConfig::default().save(&flake, std::path::Path::new("flake.svg"))?;
//! # Ok::<(), eyre::Report>(())
//! ```

pub mod float;
pub mod gen;
pub mod geometry;
pub mod img;
pub mod params;
pub mod point;
pub mod polygon;
pub mod svg;

pub use float::Float;
pub use gen::{generate, Snowflake};
pub use params::{CombTipType, GenerationParams};
pub use point::Point;
pub use polygon::Polygon;
