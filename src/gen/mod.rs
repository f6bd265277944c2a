//! Tools for generating [`Snowflake`]s
//!
//! Generation happens in a fixed sequence of steps, each appending to (or modifying) a single list
//! of polygons:
//!
//!  1. The `symmetry` primary rays ([`ray`])
//!  2. The combs for the first ray only ([`comb`])
//!  3. Scaling from unit geometry into pixels
//!  4. Mirroring the combs, and then rotating them onto every other ray ([`symmetry`])
//!
//! The order of the final list is meaningful: the rays come first, followed by one "cluster" of
//! combs per ray, in the same order as the rays.

use crate::geometry::GeometryConstants;
use crate::params::{CombTipType, GenerationParams};
use crate::polygon::Polygon;
use crate::{Float, Point};
use log::{log, Level};
use rand::Rng;

pub mod comb;
pub mod ray;
pub mod symmetry;

use comb::CombLayout;

/// A fully generated snowflake
#[derive(Clone, Debug, PartialEq)]
pub struct Snowflake {
    polygons: Vec<Polygon>,
    symmetry: usize,
    comb_lengths: Vec<Float>,
    extent: Float,
}

/// Generates a new snowflake, using `rng` for all of the random choices
///
/// Nothing is carried over between calls; given the same parameters and the same random state,
/// this always produces the same snowflake. Fails if the parameters are invalid or the comb tip
/// type is unsupported, in which case no geometry is produced.
pub fn generate<R: Rng>(params: &GenerationParams, rng: &mut R) -> eyre::Result<Snowflake> {
    params.validate()?;

    let consts = GeometryConstants::new(params.symmetry);
    let mut polygons = Vec::new();

    ray::build_rays(params, &consts, &mut polygons);

    let layout = CombLayout::draw(params, rng);
    comb::build_combs(params, &consts, &layout, &mut polygons)?;

    scale_polygons(&mut polygons, params.global_scale_factor);

    symmetry::mirror_combs(&mut polygons, consts.symmetry);
    symmetry::rotate_clusters(&mut polygons, 2 * layout.count(), &consts);

    log!(
        narration_level(params),
        "generated {} polygons ({} rays, {} combs per side)",
        polygons.len(),
        consts.symmetry,
        layout.count(),
    );

    Ok(Snowflake {
        polygons,
        symmetry: consts.symmetry,
        comb_lengths: (0..layout.count()).map(|i| layout.length(i)).collect(),
        extent: params.canvas_extent(),
    })
}

/// Multiplies every vertex of every polygon by `factor`
pub fn scale_polygons(polygons: &mut [Polygon], factor: Float) {
    polygons.iter_mut().for_each(|p| p.scale(factor));
}

/// Returns the level that narration of the random choices should be logged at
pub(crate) fn narration_level(params: &GenerationParams) -> Level {
    match params.verbose {
        true => Level::Info,
        false => Level::Debug,
    }
}

impl Snowflake {
    /// Returns every polygon in the snowflake, rays first
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Returns the primary rays, in anti-clockwise order starting from the positive X axis
    pub fn rays(&self) -> &[Polygon] {
        &self.polygons[..self.symmetry]
    }

    /// Returns the combs attached to the given ray: first the original set, and then their
    /// mirror images
    ///
    /// Returns `None` if `ray` is not less than the symmetry order.
    pub fn comb_cluster(&self, ray: usize) -> Option<&[Polygon]> {
        if ray >= self.symmetry {
            return None;
        }

        let len = 2 * self.comb_count();
        let start = self.symmetry + ray * len;
        self.polygons.get(start..start + len)
    }

    pub fn symmetry(&self) -> usize {
        self.symmetry
    }

    /// Returns the number of combs on each side of a single ray
    pub fn comb_count(&self) -> usize {
        self.comb_lengths.len()
    }

    /// Returns the length of each comb (after clamping) in unit geometry, ordered from the center
    /// outwards
    pub fn comb_lengths(&self) -> &[Float] {
        &self.comb_lengths
    }

    /// Half the side length of the square canvas that the snowflake fits in, in pixels
    pub fn extent(&self) -> Float {
        self.extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rotation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_polygons_close(a: &Polygon, b: &Polygon, eps: Float) {
        assert_eq!(a.len(), b.len());
        for (p, q) in a.vertices().iter().zip(b.vertices()) {
            assert!((*p - *q).norm() < eps, "{:?} != {:?}", p, q);
        }
    }

    fn unit_params(symmetry: usize, combs: usize) -> GenerationParams {
        GenerationParams {
            symmetry,
            global_scale_factor: 1.0,
            min_comb_count: combs,
            max_comb_count: combs,
            ..GenerationParams::default()
        }
    }

    #[test]
    fn six_fold_three_combs() {
        let params = unit_params(6, 3);
        let flake = generate(&params, &mut StdRng::seed_from_u64(0)).unwrap();

        assert_eq!(flake.polygons().len(), 6 + 2 * 6 * 3);
        assert_eq!(flake.comb_count(), 3);
        assert_eq!(flake.symmetry(), 6);

        // Every ray is the first one, rotated
        let consts = GeometryConstants::new(6);
        let first = &flake.rays()[0];
        for (k, ray) in flake.rays().iter().enumerate() {
            let rot = Rotation::from_angle(k as Float * consts.theta);
            assert_polygons_close(ray, &first.rotated(&rot), 1e-12);
        }
    }

    #[test]
    fn polygon_count_matches_drawn_comb_count() {
        let mut rng = StdRng::seed_from_u64(1234);
        for symmetry in 2..=9 {
            let params = GenerationParams {
                symmetry,
                min_comb_count: 1,
                max_comb_count: 6,
                ..GenerationParams::default()
            };

            for _ in 0..10 {
                let flake = generate(&params, &mut rng).unwrap();
                let n = flake.comb_count();
                assert!((1..=6).contains(&n));
                assert_eq!(flake.polygons().len(), symmetry + 2 * symmetry * n);
            }
        }
    }

    #[test]
    fn no_combs() {
        let flake = generate(&unit_params(6, 0), &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(flake.polygons().len(), 6);
        assert_eq!(flake.comb_cluster(3), Some(&[][..]));
    }

    #[test]
    fn clusters_are_mirrored_and_rotated() {
        let params = unit_params(6, 4);
        let flake = generate(&params, &mut StdRng::seed_from_u64(99)).unwrap();
        let consts = GeometryConstants::new(6);

        let base = flake.comb_cluster(0).unwrap();
        let (originals, mirrors) = base.split_at(4);
        for (o, m) in originals.iter().zip(mirrors) {
            assert_eq!(&o.mirrored(), m);
        }

        for k in 1..6 {
            let rot = Rotation::from_angle(k as Float * consts.theta);
            for (p, q) in flake.comb_cluster(k).unwrap().iter().zip(base) {
                assert_polygons_close(p, &q.rotated(&rot), 1e-12);
            }
        }
    }

    #[test]
    fn out_of_range_cluster_is_none() {
        let flake = generate(&unit_params(6, 2), &mut StdRng::seed_from_u64(4)).unwrap();

        assert_eq!(flake.comb_cluster(5).map(|c| c.len()), Some(4));
        assert_eq!(flake.comb_cluster(6), None);
        assert_eq!(flake.comb_cluster(usize::MAX), None);
    }

    #[test]
    fn comb_lengths_are_clamped() {
        let params = GenerationParams {
            comb_tip_min_length: 0.8,
            comb_tip_max_length: 0.9,
            ..unit_params(6, 5)
        };
        let flake = generate(&params, &mut StdRng::seed_from_u64(3)).unwrap();

        for (i, &l) in flake.comb_lengths().iter().enumerate() {
            // Every target is at least 0.8, which is more than any of the bounds here
            let bound = 0.9 * (i + 1) as Float / 6.0;
            assert!((l - bound).abs() < 1e-12, "comb {} has length {}", i, l);
        }
    }

    #[test]
    fn scale_is_linear() {
        let unit = generate(&unit_params(6, 3), &mut StdRng::seed_from_u64(8)).unwrap();
        let scaled = generate(
            &GenerationParams {
                global_scale_factor: 250.0,
                ..unit_params(6, 3)
            },
            &mut StdRng::seed_from_u64(8),
        )
        .unwrap();

        let mut back = scaled.polygons().to_vec();
        scale_polygons(&mut back, 1.0 / 250.0);
        for (a, b) in back.iter().zip(unit.polygons()) {
            assert_polygons_close(a, b, 1e-9);
        }

        assert!((scaled.extent() - 250.0 * 1.45).abs() < 1e-9);
    }

    #[test]
    fn same_seed_same_snowflake() {
        let params = GenerationParams::default();
        let a = generate(&params, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate(&params, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn verbose_does_not_change_geometry() {
        let quiet = GenerationParams {
            verbose: false,
            ..GenerationParams::default()
        };
        let verbose = GenerationParams {
            verbose: true,
            ..GenerationParams::default()
        };

        let a = generate(&quiet, &mut StdRng::seed_from_u64(17)).unwrap();
        let b = generate(&verbose, &mut StdRng::seed_from_u64(17)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unsupported_tip_type_is_fatal() {
        let params = GenerationParams {
            comb_tip_type: CombTipType::from("spiky"),
            ..GenerationParams::default()
        };

        let err = generate(&params, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(err.to_string().contains("not recognized"), "{}", err);
    }

    #[test]
    fn invalid_params_are_rejected() {
        let params = GenerationParams {
            symmetry: 1,
            ..GenerationParams::default()
        };

        assert!(generate(&params, &mut StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn ray_tips_on_scaled_circle() {
        let params = GenerationParams::default();
        let flake = generate(&params, &mut StdRng::seed_from_u64(11)).unwrap();

        for ray in flake.rays() {
            let tip = ray.vertices()[4];
            assert!((tip.norm() - params.global_scale_factor).abs() < 1e-9);
        }
    }
}
