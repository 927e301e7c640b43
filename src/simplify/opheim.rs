//! Opheim simplification: Reumann-Witkam constrained by a search radius.
use super::{copy_key, copy_through, log_reduction, point_count, squared_tolerance};
use crate::math::{point_distance2, ray_distance2};
use crate::Coordinate;

/// Follow a ray from the current key, bounded by `min_tol` sideways and `max_tol` radially.
///
/// Points within `min_tol` of the key are absorbed without defining the ray;
/// the last of them and the key define the ray.
/// A new key starts at the previous point when a point strays further than `min_tol` from the ray,
/// or further than `max_tol` from the key.
/// Requires at least 2 points and non-zero tolerances.
/// O(n).
pub fn opheim<T: Coordinate, const D: usize>(
    coords: &[T],
    min_tol: T,
    max_tol: T,
    out: &mut Vec<T>,
) -> usize {
    let (points, min_tol2, max_tol2) = match point_count::<T, D>(coords, 2).and_then(|p| {
        Ok((p, squared_tolerance(min_tol)?, squared_tolerance(max_tol)?))
    }) {
        Ok(v) => v,
        Err(e) => return copy_through("Opheim", coords, out, e),
    };
    let start = out.len();

    // ray from r0 through r1, once defined
    let mut r0 = 0;
    let mut r1 = 0;
    let mut ray_defined = false;
    // current test point
    let mut pj = D;

    copy_key::<T, D>(coords, r0, out);
    for _ in 2..points {
        let pi = pj;
        pj += D;

        if !ray_defined {
            if point_distance2::<T, D>(&coords[r0..], &coords[pj..]) < min_tol2 {
                continue;
            }
            r1 = pi;
            ray_defined = true;
        }

        if point_distance2::<T, D>(&coords[r0..], &coords[pj..]) < max_tol2
            && ray_distance2::<T, D>(&coords[r0..], &coords[r1..], &coords[pj..]) < min_tol2
        {
            continue;
        }
        copy_key::<T, D>(coords, pi, out);
        r0 = pi;
        ray_defined = false;
    }
    copy_key::<T, D>(coords, pj, out);

    let written = out.len() - start;
    log_reduction::<D>("Opheim", coords.len(), written);
    written
}
