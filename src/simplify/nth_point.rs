//! Keep every `n`th point.
use super::{copy_key, copy_through, log_reduction, point_count};
use crate::InputError;

/// Keep the first point, every `n`th point after it, and the last point.
///
/// For any 8-point line, `n = 3` keeps points 0, 3, 6 and 7.
/// Requires at least 2 points and `n >= 2`.
pub fn nth_point<T: Copy, const D: usize>(coords: &[T], n: usize, out: &mut Vec<T>) -> usize {
    let points = match point_count::<T, D>(coords, 2).and_then(|points| {
        if n < 2 {
            Err(InputError::InvalidStride(n))
        } else {
            Ok(points)
        }
    }) {
        Ok(p) => p,
        Err(e) => return copy_through("nth point", coords, out, e),
    };
    let start = out.len();

    // strided points after the first, and the points left over beyond the final one
    let strided = (points - 1) / n;
    let remainder = points - 1 - strided * n;

    let mut key = 0;
    copy_key::<T, D>(coords, key, out);
    for _ in 0..strided {
        key += n * D;
        copy_key::<T, D>(coords, key, out);
    }
    if remainder > 0 {
        key += remainder * D;
        copy_key::<T, D>(coords, key, out);
    }

    let written = out.len() - start;
    log_reduction::<D>("nth point", coords.len(), written);
    written
}
