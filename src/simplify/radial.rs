//! Radial distance simplification.
//!
//! Successive points clustered within the tolerance of a key are reduced to that key.
use super::{copy_key, copy_through, log_reduction, point_count, squared_tolerance};
use crate::math::point_distance2;
use crate::Coordinate;

/// Keep a point only if it is at least `tol` away from the previous key.
///
/// The first and last points are always kept, however close the last is to its predecessor.
/// Requires at least 2 points and a non-zero tolerance.
/// O(n).
pub fn radial_distance<T: Coordinate, const D: usize>(
    coords: &[T],
    tol: T,
    out: &mut Vec<T>,
) -> usize {
    let (points, tol2) =
        match point_count::<T, D>(coords, 2).and_then(|p| Ok((p, squared_tolerance(tol)?))) {
            Ok(v) => v,
            Err(e) => return copy_through("radial distance", coords, out, e),
        };
    let start = out.len();

    let mut key = 0;
    copy_key::<T, D>(coords, key, out);
    for next in (1..points - 1).map(|idx| idx * D) {
        if point_distance2::<T, D>(&coords[key..], &coords[next..]) < tol2 {
            continue;
        }
        key = next;
        copy_key::<T, D>(coords, key, out);
    }
    copy_key::<T, D>(coords, (points - 1) * D, out);

    let written = out.len() - start;
    log_reduction::<D>("radial distance", coords.len(), written);
    written
}
