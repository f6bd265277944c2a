//! Turning the combs of a single ray into the full snowflake, by mirroring and rotating them

use super::*;

/// Appends a mirrored copy of every comb (i.e. every polygon after the first `ray_count`), in the
/// same order
///
/// The mirror is across the X axis, which is the axis of the ray the combs are attached to. The
/// primary rays themselves are already symmetric, so they aren't mirrored.
pub fn mirror_combs(polygons: &mut Vec<Polygon>, ray_count: usize) {
    let mirrored: Vec<_> = polygons[ray_count..].iter().map(Polygon::mirrored).collect();
    polygons.extend(mirrored);
}

/// Repeatedly rotates the last `cluster_len` polygons by one wedge step and appends the result,
/// until there's one cluster for each ray
///
/// Each new cluster is rotated from the previous one (not from the original), so this composes
/// rotations in exactly the same way as the primary rays.
pub fn rotate_clusters(polygons: &mut Vec<Polygon>, cluster_len: usize, consts: &GeometryConstants) {
    if cluster_len == 0 {
        return;
    }

    for _ in 1..consts.symmetry {
        let start = polygons.len() - cluster_len;
        let rotated: Vec<_> = polygons[start..]
            .iter()
            .map(|p| p.rotated(&consts.rot))
            .collect();

        polygons.extend(rotated);
    }
}
