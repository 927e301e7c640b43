//! Perpendicular distance simplification.
//!
//! Each point is tested against the segment joining its neighbours.
//! A single pass removes at most every other point, so the routine can be repeated.
use super::{copy_key, copy_through, log_reduction, point_count, squared_tolerance};
use crate::math::segment_distance2;
use crate::{Coordinate, InputError};
use std::mem;

/// Drop points closer than `tol` to the segment joining their neighbours, in a single pass.
///
/// When a point is dropped its successor is kept unconditionally,
/// so the result has at least half of the input points.
/// Requires at least 3 points and a non-zero tolerance.
/// O(n).
pub fn perpendicular_distance<T: Coordinate, const D: usize>(
    coords: &[T],
    tol: T,
    out: &mut Vec<T>,
) -> usize {
    let tol2 =
        match point_count::<T, D>(coords, 3).and_then(|_| squared_tolerance(tol)) {
            Ok(t) => t,
            Err(e) => return copy_through("perpendicular distance", coords, out, e),
        };
    let start = out.len();
    let end = coords.len();

    let mut p0 = 0;
    let mut p1 = D;
    let mut p2 = 2 * D;

    copy_key::<T, D>(coords, p0, out);
    while p2 != end {
        if segment_distance2::<T, D>(&coords[p0..], &coords[p2..], &coords[p1..]) < tol2 {
            // p1 is absorbed, p2 becomes the key
            copy_key::<T, D>(coords, p2, out);
            p0 = p2;
            p1 += 2 * D;
            if p1 == end {
                break;
            }
            p2 += 2 * D;
        } else {
            copy_key::<T, D>(coords, p1, out);
            p0 = p1;
            p1 = p2;
            p2 += D;
        }
    }
    if p1 != end {
        copy_key::<T, D>(coords, p1, out);
    }

    let written = out.len() - start;
    log_reduction::<D>("perpendicular distance", coords.len(), written);
    written
}

/// Apply [perpendicular_distance] up to `repeat` times.
///
/// Stops early as soon as a pass removes no points.
/// `repeat == 1` is exactly a single pass; `repeat == 0` copies the input.
/// Uses up to two scratch buffers the size of the input.
pub fn perpendicular_distance_repeat<T: Coordinate, const D: usize>(
    coords: &[T],
    tol: T,
    repeat: usize,
    out: &mut Vec<T>,
) -> usize {
    match repeat {
        0 => return copy_through("perpendicular distance", coords, out, InputError::ZeroRepeat),
        1 => return perpendicular_distance::<T, D>(coords, tol, out),
        _ => (),
    }

    let mut current = Vec::with_capacity(coords.len());
    perpendicular_distance::<T, D>(coords, tol, &mut current);
    if current.len() == coords.len() {
        log::trace!("perpendicular distance: converged after 1 pass");
        out.extend_from_slice(&current);
        return current.len();
    }

    let mut next = Vec::with_capacity(current.len());
    let mut remaining = repeat - 1;
    while remaining > 1 {
        next.clear();
        perpendicular_distance::<T, D>(&current, tol, &mut next);
        if next.len() == current.len() {
            log::trace!(
                "perpendicular distance: converged after {} passes",
                repeat - remaining + 1
            );
            out.extend_from_slice(&current);
            return current.len();
        }
        mem::swap(&mut current, &mut next);
        remaining -= 1;
    }

    perpendicular_distance::<T, D>(&current, tol, out)
}
