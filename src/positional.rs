//! Measure how far a simplification strays from its original polyline.
//!
//! Each original point is scored by its squared distance to the simplified segment
//! spanning it. This only makes sense if every simplified point occurs, in order,
//! in the original; anything else is rejected.
use crate::math::{equal, segment_distance2};
use crate::simplify::point_count;
use crate::{Coordinate, InputError, Precision, Statistics};
use num_traits::ToPrimitive;

fn walk<T: Coordinate, const D: usize>(
    original: &[T],
    simplified: &[T],
) -> Result<Vec<T>, InputError> {
    let original_points = point_count::<T, D>(original, 2)?;
    let simplified_points = point_count::<T, D>(simplified, 2)?;
    if original_points < simplified_points {
        return Err(InputError::LongerSimplification {
            original: original_points,
            simplified: simplified_points,
        });
    }
    if !equal::<T, D>(original, simplified) {
        return Err(InputError::FirstPointMismatch);
    }

    let mut errors = Vec::with_capacity(original_points);
    let mut orig = 0;
    let mut prev = 0;
    for end in (D..simplified.len()).step_by(D) {
        // score original points until one matches the end of this segment
        while orig < original.len() && !equal::<T, D>(&original[orig..], &simplified[end..]) {
            errors.push(segment_distance2::<T, D>(
                &simplified[prev..],
                &simplified[end..],
                &original[orig..],
            ));
            orig += D;
        }
        if orig == original.len() {
            return Err(InputError::UnmatchedPoint { index: end / D });
        }
        prev = end;
    }
    if orig + D != original.len() {
        return Err(InputError::UnconsumedTail {
            matched: orig / D,
            original: original_points,
        });
    }
    // the final point matches the end of the last segment
    errors.push(T::zero());
    Ok(errors)
}

/// Squared distance from every original point to its segment of the simplification.
///
/// Returns one value per original point; points which are themselves part of
/// the simplification score zero.
/// Errors if either polyline is malformed or has fewer than 2 points,
/// if the simplification has more points or a different first point,
/// or if its points do not occur in order in the original, ending at the original's last point.
pub fn positional_errors2<T: Coordinate, const D: usize>(
    original: &[T],
    simplified: &[T],
) -> Result<Vec<T>, InputError> {
    walk::<T, D>(original, simplified).map_err(|e| {
        log::debug!("positional errors: {e}");
        e
    })
}

/// Statistics of the (not squared) positional errors of a simplification.
///
/// Fails under the same conditions as [positional_errors2].
pub fn positional_error_statistics<T: Coordinate, const D: usize>(
    original: &[T],
    simplified: &[T],
) -> Result<Statistics, InputError> {
    let errors: Vec<Precision> = positional_errors2::<T, D>(original, simplified)?
        .into_iter()
        .map(|e2| e2.to_f64().unwrap_or(Precision::NAN).sqrt())
        .collect();
    Ok(Statistics::from_values(&errors))
}
