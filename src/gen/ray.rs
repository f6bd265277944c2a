//! Construction of the primary rays -- the wedge-shaped arms that everything else hangs off

use super::*;

/// Builds the single ray lying along the positive X axis, with its tip at `(1, 0)`
///
/// The end of the ray is pointed, with the two tip edges each at `half_theta` from the ray's
/// sides. Vertices run clockwise, starting from the lower-right shoulder.
pub fn primary_ray(ray_width: Float, consts: &GeometryConstants) -> Polygon {
    let half_ray_width = ray_width / 2.0;
    let tip = half_ray_width * consts.half_theta.tan();

    Polygon::new(vec![
        Point::new(1.0 - tip, -half_ray_width),
        Point::new(0.0, -half_ray_width),
        Point::new(0.0, half_ray_width),
        Point::new(1.0 - tip, half_ray_width),
        Point::new(1.0, 0.0),
    ])
}

/// Appends all `symmetry` primary rays to `polygons`
///
/// Each ray after the first is the previous one rotated by one wedge step, so the last ray
/// appended has been rotated `symmetry - 1` times.
pub fn build_rays(params: &GenerationParams, consts: &GeometryConstants, polygons: &mut Vec<Polygon>) {
    let mut ray = primary_ray(params.ray_width, consts);

    for _ in 1..consts.symmetry {
        let next = ray.rotated(&consts.rot);
        polygons.push(ray);
        ray = next;
    }

    polygons.push(ray);
}
