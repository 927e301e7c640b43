//! Simplify polylines.
//!
//! Polylines are simplified by keeping a subsequence of their points, called keys.
//! The first and last points are always keys, and no new coordinates are ever introduced.
//!
//! All simplifiers share one calling convention: the result is appended to `out`
//! and the number of coordinates written is returned.
//! Input which cannot be simplified (see [InputError]) is appended unchanged.
mod nth_point;
mod opheim;
mod perpendicular;
mod radial;
mod rdp;
mod reumann_witkam;

pub use nth_point::nth_point;
pub use opheim::opheim;
pub use perpendicular::{perpendicular_distance, perpendicular_distance_repeat};
pub use radial::radial_distance;
pub use rdp::{douglas_peucker, douglas_peucker_n};
pub use reumann_witkam::reumann_witkam;

use crate::{Coordinate, InputError};
use num_traits::{NumCast, ToPrimitive};

/// Number of whole points in `coords`, which must be at least `required`.
pub(crate) fn point_count<T, const D: usize>(
    coords: &[T],
    required: usize,
) -> Result<usize, InputError> {
    if D == 0 {
        return Err(InputError::ZeroDimension);
    }
    if coords.len() % D != 0 {
        return Err(InputError::Ragged {
            count: coords.len(),
            dim: D,
        });
    }
    let points = coords.len() / D;
    if points < required {
        return Err(InputError::TooFewPoints { points, required });
    }
    Ok(points)
}

/// Square a tolerance, rejecting it if the square does not fit in `T`.
///
/// Float squares never overflow; they saturate to infinity.
pub(crate) fn checked_square<T: Coordinate>(tol: T) -> Result<T, InputError> {
    let wide = tol.to_f64().unwrap_or(f64::INFINITY);
    match <T as NumCast>::from(wide * wide) {
        Some(_) => Ok(tol * tol),
        None => Err(InputError::ToleranceOverflow),
    }
}

/// Square a tolerance, rejecting it if the square is zero or overflows.
pub(crate) fn squared_tolerance<T: Coordinate>(tol: T) -> Result<T, InputError> {
    let tol2 = checked_square(tol)?;
    if tol2.is_zero() {
        return Err(InputError::ZeroTolerance);
    }
    Ok(tol2)
}

/// The universal fallback: append the whole input.
pub(crate) fn copy_through<T: Copy>(
    algorithm: &str,
    coords: &[T],
    out: &mut Vec<T>,
    reason: InputError,
) -> usize {
    log::debug!("{algorithm}: {reason}; copying input through");
    out.extend_from_slice(coords);
    coords.len()
}

/// Append the point starting at coordinate `offset`.
pub(crate) fn copy_key<T: Copy, const D: usize>(coords: &[T], offset: usize, out: &mut Vec<T>) {
    out.extend_from_slice(&coords[offset..offset + D]);
}

/// Append every point whose entry in `keys` is set.
pub(crate) fn copy_keys<T: Copy, const D: usize>(coords: &[T], keys: &[bool], out: &mut Vec<T>) {
    for (point, _) in coords.chunks_exact(D).zip(keys).filter(|(_, k)| **k) {
        out.extend_from_slice(point);
    }
}

pub(crate) fn log_reduction<const D: usize>(algorithm: &str, input: usize, written: usize) {
    log::trace!(
        "{algorithm}: {} points reduced to {}",
        input / D,
        written / D
    );
}
