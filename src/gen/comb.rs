//! Construction of the combs -- the randomized teeth attached along a single ray
//!
//! Combs are only ever built for the ray lying along the positive X axis. The
//! [`symmetry`](super::symmetry) module is responsible for copying them onto the other rays.

use super::*;
use eyre::eyre;
use log::log;
use rand::distributions::Uniform;
use rand::Rng;

/// Combs never extend further than this fraction of their distance from the center
const MAX_LENGTH_RATIO: Float = 0.9;

/// The random choices for a single set of combs
///
/// These are drawn once per generation and shared between every ray.
#[derive(Clone, Debug, PartialEq)]
pub struct CombLayout {
    /// The randomly drawn target length of each comb, before clamping. The number of combs is
    /// the length of this vector.
    pub target_lengths: Vec<Float>,
}

impl CombLayout {
    /// Draws a random layout according to the comb count and length bounds in `params`
    pub fn draw<R: Rng>(params: &GenerationParams, rng: &mut R) -> Self {
        let counts = Uniform::new_inclusive(params.min_comb_count, params.max_comb_count);
        let count = rng.sample(counts);

        let range = params.comb_tip_max_length - params.comb_tip_min_length;
        let target_lengths = (0..count)
            .map(|_| range * rng.gen::<Float>() + params.comb_tip_min_length)
            .collect();

        CombLayout { target_lengths }
    }

    pub fn count(&self) -> usize {
        self.target_lengths.len()
    }

    /// Returns the distance along the ray at which comb `index` is attached
    ///
    /// Combs are spaced evenly, with none at the center or at the tip of the ray.
    pub fn offset(&self, index: usize) -> Float {
        (index + 1) as Float / (self.count() + 1) as Float
    }

    /// Returns the actual length of comb `index`: its target length, clamped so that it can't
    /// reach past 90% of its own offset along the ray
    pub fn length(&self, index: usize) -> Float {
        Float::min(MAX_LENGTH_RATIO * self.offset(index), self.target_lengths[index])
    }
}

/// Builds a single angled comb, rooted at `offset` along the X axis
///
/// The comb leans out from the ray in the direction of the next ray (i.e. `theta` anti-clockwise
/// from the X axis).
pub fn angled_comb(offset: Float, length: Float, comb_width: Float, consts: &GeometryConstants) -> Polygon {
    let dir = consts.step_direction();
    let t = Point::new(offset, 0.0);
    let w = Point::new(comb_width, 0.0);

    let p0 = Point::ORIGIN + t;
    let p1 = length * dir + t;
    let p2 = p1 + w * 0.5;
    // Only "correct" for six-fold symmetry. For any other order, the back corner of the tip is
    // slightly skewed.
    let p3 = p2 + w * 0.5 - dir * (comb_width / 2.0);
    let p4 = p0 + w;

    Polygon::new(vec![p0, p1, p2, p3, p4])
}

/// Appends one comb for each entry in `layout` to `polygons`, in order of distance from the
/// center
///
/// Returns an error without touching `polygons` if the configured tip type isn't implemented.
pub fn build_combs(
    params: &GenerationParams,
    consts: &GeometryConstants,
    layout: &CombLayout,
    polygons: &mut Vec<Polygon>,
) -> eyre::Result<()> {
    let level = narration_level(params);

    log!(level, "creating {} combs", layout.count());
    log!(level, "random comb lengths: {:?}", layout.target_lengths);

    match &params.comb_tip_type {
        CombTipType::Angled => {
            log!(level, "building combs with angled shape");

            for i in 0..layout.count() {
                let length = layout.length(i);
                let comb = angled_comb(layout.offset(i), length, params.comb_width, consts);

                log!(level, "comb {}, length {}, vertices {:?}", i, length, comb.vertices());
                polygons.push(comb);
            }

            Ok(())
        }
        CombTipType::Unsupported(name) => Err(eyre!(
            "comb_tip_type '{}' not recognized or implemented",
            name
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::MAX_COMB_COUNT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn count_stays_in_bounds() {
        let params = GenerationParams {
            min_comb_count: 2,
            max_comb_count: 4,
            ..GenerationParams::default()
        };

        let mut rng = StdRng::seed_from_u64(17);
        let mut seen = [false; 5];
        for _ in 0..200 {
            let layout = CombLayout::draw(&params, &mut rng);
            assert!((2..=4).contains(&layout.count()));
            seen[layout.count()] = true;

            for &l in &layout.target_lengths {
                assert!((params.comb_tip_min_length..=params.comb_tip_max_length).contains(&l));
            }
        }

        // Both ends of the range are inclusive
        assert!(seen[2] && seen[3] && seen[4]);
    }

    #[test]
    fn largest_count_is_drawn_exactly() {
        let params = GenerationParams {
            min_comb_count: MAX_COMB_COUNT,
            max_comb_count: MAX_COMB_COUNT,
            ..GenerationParams::default()
        };
        params.validate().unwrap();

        let layout = CombLayout::draw(&params, &mut StdRng::seed_from_u64(1));
        assert_eq!(layout.count(), MAX_COMB_COUNT);
    }

    #[test]
    fn offsets_exclude_center_and_tip() {
        let layout = CombLayout {
            target_lengths: vec![0.2; 3],
        };

        assert_eq!(layout.offset(0), 0.25);
        assert_eq!(layout.offset(1), 0.5);
        assert_eq!(layout.offset(2), 0.75);
    }

    #[test]
    fn length_is_clamped_near_center() {
        let layout = CombLayout {
            target_lengths: vec![0.45, 0.45, 0.1],
        };

        // 0.9 * 1/4 = 0.225 < 0.45
        assert!((layout.length(0) - 0.225).abs() < 1e-12);
        // 0.9 * 2/4 = 0.45, which is exactly the target
        assert!((layout.length(1) - 0.45).abs() < 1e-12);
        // Far enough out that the target is used as-is
        assert_eq!(layout.length(2), 0.1);

        for i in 0..layout.count() {
            assert!(layout.length(i) <= MAX_LENGTH_RATIO * layout.offset(i) + 1e-12);
        }
    }

    #[test]
    fn six_fold_angled_comb() {
        let consts = GeometryConstants::new(6);
        let comb = angled_comb(0.5, 0.2, 0.04, &consts);
        let v = comb.vertices();
        let s3 = (3.0 as Float).sqrt();

        let expected = [
            Point::new(0.5, 0.0),
            Point::new(0.5 + 0.1, 0.1 * s3),
            Point::new(0.62, 0.1 * s3),
            Point::new(0.63, 0.1 * s3 - 0.01 * s3),
            Point::new(0.54, 0.0),
        ];

        assert_eq!(v.len(), 5);
        for (a, b) in v.iter().zip(&expected) {
            assert!((*a - *b).norm() < 1e-12, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn unsupported_tip_type_fails_without_output() {
        let params = GenerationParams {
            comb_tip_type: CombTipType::from("spiky"),
            ..GenerationParams::default()
        };
        let consts = GeometryConstants::new(params.symmetry);
        let layout = CombLayout {
            target_lengths: vec![0.3; 4],
        };

        let mut polygons = Vec::new();
        let err = build_combs(&params, &consts, &layout, &mut polygons).unwrap_err();

        assert!(err.to_string().contains("'spiky'"), "{}", err);
        assert!(polygons.is_empty());
    }

    #[test]
    fn combs_appended_in_order() {
        let params = GenerationParams::default();
        let consts = GeometryConstants::new(params.symmetry);
        let layout = CombLayout {
            target_lengths: vec![0.3, 0.15, 0.4],
        };

        let mut polygons = Vec::new();
        build_combs(&params, &consts, &layout, &mut polygons).unwrap();

        assert_eq!(polygons.len(), 3);
        for (i, comb) in polygons.iter().enumerate() {
            assert_eq!(comb.vertices()[0], Point::new(layout.offset(i), 0.0));
        }
    }
}
