//! Reumann-Witkam simplification.
use super::{copy_key, copy_through, log_reduction, point_count, squared_tolerance};
use crate::math::line_distance2;
use crate::Coordinate;

/// Follow a line through the current key and its successor,
/// starting a new key at the last point before one strays further than `tol` from that line.
///
/// The new line runs through the new key and the point which strayed.
/// Requires at least 3 points and a non-zero tolerance.
/// Consecutive duplicate points define no line; avoid them.
/// O(n).
pub fn reumann_witkam<T: Coordinate, const D: usize>(
    coords: &[T],
    tol: T,
    out: &mut Vec<T>,
) -> usize {
    let (points, tol2) =
        match point_count::<T, D>(coords, 3).and_then(|p| Ok((p, squared_tolerance(tol)?))) {
            Ok(v) => v,
            Err(e) => return copy_through("Reumann-Witkam", coords, out, e),
        };
    let start = out.len();

    // line through p0 and p1
    let mut p0 = 0;
    let mut p1 = D;
    // current test point
    let mut pj = p1;

    copy_key::<T, D>(coords, p0, out);
    for _ in 2..points {
        let pi = pj;
        pj += D;

        if line_distance2::<T, D>(&coords[p0..], &coords[p1..], &coords[pj..]) < tol2 {
            continue;
        }
        copy_key::<T, D>(coords, pi, out);
        p0 = pi;
        p1 = pj;
    }
    copy_key::<T, D>(coords, pj, out);

    let written = out.len() - start;
    log_reduction::<D>("Reumann-Witkam", coords.len(), written);
    written
}
