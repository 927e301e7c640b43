//! Vector and distance primitives on points of dimension `D`.
//!
//! A point is passed as a slice whose first `D` values are its coordinates,
//! so `&coords[offset..]` addresses the point starting at `offset` directly.
//! Slices shorter than `D` panic on indexing.
//!
//! The line and ray distances divide by the squared length of the reference vector:
//! callers must not pass two identical reference points to [line_distance2].
use crate::{Coordinate, Precision};
use nalgebra::{SVector, SVectorSlice};
use num_traits::{NumCast, ToPrimitive};

fn to_precision<T: Coordinate>(value: T) -> Precision {
    value.to_f64().unwrap_or(Precision::NAN)
}

fn lerp<T: Coordinate>(a: T, b: T, fraction: Precision) -> T {
    let value = to_precision(a) + fraction * to_precision(b - a);
    // only a non-finite fraction fails to cast back, which requires a degenerate reference
    <T as NumCast>::from(value).unwrap_or(a)
}

/// The point starting at the head of `p`, as a vector.
fn view<T: Coordinate, const D: usize>(p: &[T]) -> SVectorSlice<'_, T, D> {
    SVectorSlice::from_slice(&p[..D])
}

/// Whether two points have exactly the same coordinates.
pub fn equal<T: Coordinate, const D: usize>(p1: &[T], p2: &[T]) -> bool {
    view::<T, D>(p1) == view::<T, D>(p2)
}

/// The vector `p2 - p1`.
pub fn make_vector<T: Coordinate, const D: usize>(p1: &[T], p2: &[T]) -> SVector<T, D> {
    view::<T, D>(p2) - view::<T, D>(p1)
}

pub fn dot<T: Coordinate, const D: usize>(v1: &[T], v2: &[T]) -> T {
    view::<T, D>(v1).dot(&view::<T, D>(v2))
}

/// The point `p1 + fraction * (p2 - p1)`.
///
/// The interpolation happens in [Precision]; integer coordinates are truncated on the way back.
pub fn interpolate<T: Coordinate, const D: usize>(
    p1: &[T],
    p2: &[T],
    fraction: Precision,
) -> SVector<T, D> {
    SVector::from_fn(|d, _| lerp(p1[d], p2[d], fraction))
}

/// Squared euclidean distance between two points.
pub fn point_distance2<T: Coordinate, const D: usize>(p1: &[T], p2: &[T]) -> T {
    let diff = make_vector::<T, D>(p1, p2);
    diff.dot(&diff)
}

/// Squared distance from `p` to the infinite line through `l1` and `l2`.
pub fn line_distance2<T: Coordinate, const D: usize>(l1: &[T], l2: &[T], p: &[T]) -> T {
    let v = make_vector::<T, D>(l1, l2);
    let w = make_vector::<T, D>(l1, p);

    let cv = v.dot(&v);
    let cw = w.dot(&v);

    let fraction = to_precision(cw) / to_precision(cv);
    let proj = interpolate::<T, D>(l1, l2, fraction);
    point_distance2::<T, D>(p, proj.as_slice())
}

/// Squared distance from `p` to the segment between `s1` and `s2`.
///
/// Projections falling before `s1` or beyond `s2` are measured to that endpoint,
/// which also makes a zero-length segment safe.
pub fn segment_distance2<T: Coordinate, const D: usize>(s1: &[T], s2: &[T], p: &[T]) -> T {
    let v = make_vector::<T, D>(s1, s2);
    let w = make_vector::<T, D>(s1, p);

    let cw = w.dot(&v);
    if cw <= T::zero() {
        return point_distance2::<T, D>(p, s1);
    }

    let cv = v.dot(&v);
    if cv <= cw {
        return point_distance2::<T, D>(p, s2);
    }

    let fraction = to_precision(cw) / to_precision(cv);
    let proj = interpolate::<T, D>(s1, s2, fraction);
    point_distance2::<T, D>(p, proj.as_slice())
}

/// Squared distance from `p` to the ray starting at `r1` and passing through `r2`.
pub fn ray_distance2<T: Coordinate, const D: usize>(r1: &[T], r2: &[T], p: &[T]) -> T {
    let v = make_vector::<T, D>(r1, r2);
    let w = make_vector::<T, D>(r1, p);

    let cw = w.dot(&v);
    if cw <= T::zero() {
        return point_distance2::<T, D>(p, r1);
    }

    let cv = v.dot(&v);
    let fraction = to_precision(cw) / to_precision(cv);
    let proj = interpolate::<T, D>(r1, r2, fraction);
    point_distance2::<T, D>(p, proj.as_slice())
}

/// Summary of a sequence of values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    pub max: Precision,
    pub sum: Precision,
    pub mean: Precision,
    /// Population standard deviation.
    pub std: Precision,
}

impl Statistics {
    /// All fields are zero for an empty sequence.
    pub fn from_values(values: &[Precision]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let count = values.len() as Precision;
        let max = values.iter().copied().fold(Precision::NEG_INFINITY, Precision::max);
        let sum = values.iter().sum::<Precision>();
        let mean = sum / count;
        let variance = values
            .iter()
            .map(|v| (v - mean) * (v - mean))
            .sum::<Precision>()
            / count;
        Self {
            max,
            sum,
            mean,
            std: variance.sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vectors() {
        let v = make_vector::<f64, 3>(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
        assert_eq!(v, SVector::from([1.0, 2.0, 3.0]));
        assert_eq!(dot::<f64, 3>(v.as_slice(), v.as_slice()), 14.0);
    }

    #[test]
    fn interpolates() {
        let p = interpolate::<f64, 2>(&[0.0, 0.0], &[4.0, -2.0], 0.25);
        assert_relative_eq!(p[0], 1.0);
        assert_relative_eq!(p[1], -0.5);
    }

    #[test]
    fn interpolation_truncates_integers() {
        let p = interpolate::<i32, 1>(&[0], &[3], 0.5);
        assert_eq!(p.as_slice(), &[1]);
    }

    #[test]
    fn equality_reads_only_d_values() {
        assert!(equal::<f64, 2>(&[1.0, 2.0, 3.0], &[1.0, 2.0, 4.0]));
        assert!(!equal::<f64, 2>(&[1.0, 2.0], &[1.0, 2.5]));
    }

    #[test]
    fn point_distance() {
        assert_eq!(point_distance2::<f64, 3>(&[0.0, 0.0, 0.0], &[1.0, 2.0, 2.0]), 9.0);
        assert_eq!(point_distance2::<i64, 1>(&[-3], &[4]), 49);
    }

    #[test]
    fn line_distance_is_unbounded() {
        let (l1, l2) = ([0.0, 0.0], [2.0, 0.0]);
        assert_relative_eq!(line_distance2::<f64, 2>(&l1, &l2, &[1.0, 1.0]), 1.0);
        assert_relative_eq!(line_distance2::<f64, 2>(&l1, &l2, &[5.0, -2.0]), 4.0);
        assert_relative_eq!(line_distance2::<f64, 2>(&l1, &l2, &[-5.0, 3.0]), 9.0);
    }

    #[test]
    fn segment_distance_clamps_both_ends() {
        let (s1, s2) = ([0.0, 0.0], [2.0, 0.0]);
        assert_relative_eq!(segment_distance2::<f64, 2>(&s1, &s2, &[1.0, 1.0]), 1.0);
        assert_relative_eq!(segment_distance2::<f64, 2>(&s1, &s2, &[-1.0, 1.0]), 2.0);
        assert_relative_eq!(segment_distance2::<f64, 2>(&s1, &s2, &[3.0, 1.0]), 2.0);
    }

    #[test]
    fn segment_distance_zero_length() {
        let s = [1.0, 1.0];
        assert_relative_eq!(segment_distance2::<f64, 2>(&s, &s, &[4.0, 5.0]), 25.0);
    }

    #[test]
    fn segment_distance_integer() {
        assert_eq!(segment_distance2::<i32, 2>(&[0, 0], &[4, 0], &[1, 3]), 9);
    }

    #[test]
    fn ray_distance_clamps_near_end() {
        let (r1, r2) = ([0.0, 0.0], [2.0, 0.0]);
        assert_relative_eq!(ray_distance2::<f64, 2>(&r1, &r2, &[-1.0, 1.0]), 2.0);
        assert_relative_eq!(ray_distance2::<f64, 2>(&r1, &r2, &[10.0, 1.0]), 1.0);
    }

    #[test]
    fn offsets_into_buffer() {
        let coords = [0.0, 0.0, 5.0, 5.0, 2.0, 0.0];
        let d2 = segment_distance2::<f64, 2>(&coords[0..], &coords[4..], &coords[2..]);
        assert_relative_eq!(d2, 34.0);
    }

    #[test]
    fn statistics() {
        let stats = Statistics::from_values(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.sum, 10.0);
        assert_eq!(stats.mean, 2.5);
        assert_relative_eq!(stats.std, 1.25_f64.sqrt());
    }

    #[test]
    fn empty_statistics() {
        assert_eq!(Statistics::from_values(&[]), Statistics::default());
    }
}
