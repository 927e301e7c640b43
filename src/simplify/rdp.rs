//! Simplify a polyline using the [Ramer-Douglas-Peucker](https://en.wikipedia.org/wiki/Ramer%E2%80%93Douglas%E2%80%93Peucker_algorithm) algorithm.
//!
//! Both variants split sub-polylines at their key: the interior point furthest from the segment
//! joining the sub-polyline's ends.
//! Splitting is driven by an explicit worklist rather than recursion,
//! so the stack depth does not depend on the input size.
use super::{
    checked_square, copy_keys, copy_through, log_reduction, point_count, radial_distance,
};
use crate::math::segment_distance2;
use crate::{Coordinate, InputError};
use std::cmp::{Ord, Ordering, PartialOrd};
use std::collections::BinaryHeap;

/// Coordinate offsets of the first and last points of a sub-polyline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct SubPoly {
    first: usize,
    last: usize,
}

impl SubPoly {
    fn split(&self, at: usize) -> (Self, Self) {
        (
            Self {
                first: self.first,
                last: at,
            },
            Self {
                first: at,
                last: self.last,
            },
        )
    }
}

#[derive(Copy, Clone, Debug)]
struct KeyInfo<T> {
    /// Coordinate offset of the key; the sub-polyline's `last` if it has no interior points.
    index: usize,
    /// Squared distance from the key to the sub-polyline's segment.
    dist2: T,
}

/// Find the key of a sub-polyline.
///
/// Ties go to the earliest point.
fn find_key<T: Coordinate, const D: usize>(coords: &[T], sub: SubPoly) -> KeyInfo<T> {
    let mut key = KeyInfo {
        index: sub.last,
        dist2: T::zero(),
    };
    for current in ((sub.first + D)..sub.last).step_by(D) {
        let d2 = segment_distance2::<T, D>(
            &coords[sub.first..],
            &coords[sub.last..],
            &coords[current..],
        );
        if key.index == sub.last || key.dist2 < d2 {
            key = KeyInfo {
                index: current,
                dist2: d2,
            };
        }
    }
    key
}

/// A sub-polyline awaiting its key in the count-bounded variant.
#[derive(Copy, Clone, Debug)]
struct Pending<T> {
    sub: SubPoly,
    key: KeyInfo<T>,
    /// Insertion order, to pop equal deviations first-in first-out.
    seq: usize,
}

impl<T: Coordinate> PartialEq for Pending<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Coordinate> Eq for Pending<T> {}

impl<T: Coordinate> PartialOrd for Pending<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Coordinate> Ord for Pending<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .dist2
            .partial_cmp(&other.key.dist2)
            .unwrap_or(Ordering::Equal)
            // reversed so that earlier insertions are greater
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Mark the points of `coords` kept to within `tol2` by depth-first splitting.
fn approximate<T: Coordinate, const D: usize>(coords: &[T], tol2: T) -> Vec<bool> {
    let points = coords.len() / D;
    let mut keys = vec![false; points];
    keys[0] = true;
    keys[points - 1] = true;

    let mut stack = vec![SubPoly {
        first: 0,
        last: coords.len() - D,
    }];
    while let Some(sub) = stack.pop() {
        let key = find_key::<T, D>(coords, sub);
        if key.index != sub.last && tol2 < key.dist2 {
            keys[key.index / D] = true;
            let (left, right) = sub.split(key.index);
            stack.push(right);
            stack.push(left);
        }
    }
    keys
}

/// Mark `count` points of `coords` by always splitting the sub-polyline with the largest deviation.
fn approximate_n<T: Coordinate, const D: usize>(coords: &[T], count: usize) -> Vec<bool> {
    let points = coords.len() / D;
    let mut keys = vec![false; points];
    keys[0] = true;
    keys[points - 1] = true;
    let mut key_count = 2;

    if count <= key_count {
        return keys;
    }

    let mut queue = BinaryHeap::new();
    let mut seq = 0;
    let mut enqueue = |queue: &mut BinaryHeap<Pending<T>>, sub: SubPoly| {
        queue.push(Pending {
            sub,
            key: find_key::<T, D>(coords, sub),
            seq,
        });
        seq += 1;
    };

    enqueue(
        &mut queue,
        SubPoly {
            first: 0,
            last: coords.len() - D,
        },
    );
    while let Some(pending) = queue.pop() {
        if pending.key.index == pending.sub.last {
            continue;
        }
        keys[pending.key.index / D] = true;
        key_count += 1;
        if key_count >= count {
            break;
        }
        let (left, right) = pending.sub.split(pending.key.index);
        enqueue(&mut queue, left);
        enqueue(&mut queue, right);
    }
    if key_count < count {
        log::debug!("Douglas-Peucker: worklist exhausted at {key_count} of {count} points");
    }
    keys
}

/// Simplify so that no removed point deviates more than `tol` from its simplified segment.
///
/// The points are first reduced with [radial_distance] at the same tolerance.
/// O(n m) worst case and O(n log m) on average,
/// where m is the number of points left by that reduction.
/// Requires at least 2 points and a non-zero tolerance.
pub fn douglas_peucker<T: Coordinate, const D: usize>(
    coords: &[T],
    tol: T,
    out: &mut Vec<T>,
) -> usize {
    let tol2 = match point_count::<T, D>(coords, 2).and_then(|_| {
        if tol.is_zero() {
            Err(InputError::ZeroTolerance)
        } else {
            checked_square(tol)
        }
    }) {
        Ok(t) => t,
        Err(e) => return copy_through("Douglas-Peucker", coords, out, e),
    };
    let start = out.len();

    let mut reduced = Vec::with_capacity(coords.len());
    radial_distance::<T, D>(coords, tol, &mut reduced);

    let keys = approximate::<T, D>(&reduced, tol2);
    copy_keys::<T, D>(&reduced, &keys, out);

    let written = out.len() - start;
    log_reduction::<D>("Douglas-Peucker", coords.len(), written);
    written
}

/// Simplify to exactly `count` points, repeatedly adding the point which deviates most
/// from the current simplification.
///
/// Fewer points are returned only if every remaining sub-polyline is exhausted first.
/// No radial distance reduction is applied.
/// O(n^2) worst case and O(n log n) on average.
/// Requires more than `count` points, and `count >= 2`.
pub fn douglas_peucker_n<T: Coordinate, const D: usize>(
    coords: &[T],
    count: usize,
    out: &mut Vec<T>,
) -> usize {
    if let Err(e) = point_count::<T, D>(coords, 2).and_then(|points| {
        if points <= count || count < 2 {
            Err(InputError::InvalidCount { count, points })
        } else {
            Ok(())
        }
    }) {
        return copy_through("Douglas-Peucker (n)", coords, out, e);
    }
    let start = out.len();

    let keys = approximate_n::<T, D>(coords, count);
    copy_keys::<T, D>(coords, &keys, out);

    let written = out.len() - start;
    log_reduction::<D>("Douglas-Peucker (n)", coords.len(), written);
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplify::test_utils::{flat, init_logging};
    use proptest::prelude::*;

    /// Recursive RDP, as a reference for the worklist implementation.
    fn rdp_keep_inner(coords: &[f64], first: usize, last: usize, epsilon_sq: f64) -> Vec<usize> {
        if last <= first + 1 {
            return vec![];
        }

        let mut greatest_dist2 = (0, f64::NEG_INFINITY);
        for idx in (first + 1)..last {
            let d2 = segment_distance2::<f64, 2>(
                &coords[first * 2..],
                &coords[last * 2..],
                &coords[idx * 2..],
            );
            if d2 > greatest_dist2.1 {
                greatest_dist2 = (idx, d2);
            }
        }

        let mut to_keep = vec![];
        if greatest_dist2.1 > epsilon_sq {
            to_keep.append(&mut rdp_keep_inner(coords, first, greatest_dist2.0, epsilon_sq));
            to_keep.push(greatest_dist2.0);
            to_keep.append(&mut rdp_keep_inner(coords, greatest_dist2.0, last, epsilon_sq));
        }
        to_keep
    }

    fn reference(coords: &[f64], epsilon: f64) -> Vec<f64> {
        let mut reduced = vec![];
        radial_distance::<_, 2>(coords, epsilon, &mut reduced);
        let last = reduced.len() / 2 - 1;
        let mut kept = vec![0];
        kept.append(&mut rdp_keep_inner(&reduced, 0, last, epsilon * epsilon));
        kept.push(last);
        kept.into_iter()
            .flat_map(|idx| [reduced[idx * 2], reduced[idx * 2 + 1]])
            .collect()
    }

    fn peak() -> Vec<f64> {
        flat(&[
            [0.0, 0.0],
            [1.0, 0.1],
            [2.0, -0.1],
            [3.0, 5.0],
            [4.0, 6.0],
            [5.0, 5.0],
            [6.0, 0.0],
        ])
    }

    fn assert_reduce(orig: Vec<f64>, expected: Vec<[f64; 2]>, epsilon: f64) {
        let mut out = vec![];
        douglas_peucker::<_, 2>(&orig, epsilon, &mut out);
        assert_eq!(out, flat(&expected));
    }

    #[test]
    fn reduce() {
        assert_reduce(
            flat(&[[0.0, 0.0], [1.0, 0.1], [2.0, 0.0]]),
            vec![[0.0, 0.0], [2.0, 0.0]],
            0.2,
        );
    }

    #[test]
    fn reduce_multi() {
        assert_reduce(
            flat(&[[0.0, 0.0], [0.5, 0.6], [1.0, 1.0], [1.6, 0.5], [2.0, 0.0]]),
            vec![[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]],
            0.2,
        )
    }

    #[test]
    fn reduce_peak() {
        assert_reduce(
            peak(),
            vec![[0.0, 0.0], [2.0, -0.1], [4.0, 6.0], [6.0, 0.0]],
            1.0,
        );
        assert_eq!(
            reference(&peak(), 1.0),
            flat(&[[0.0, 0.0], [2.0, -0.1], [4.0, 6.0], [6.0, 0.0]])
        );
    }

    #[test]
    fn tolerance_ladder() {
        let counts: Vec<_> = [1e-6, 1.0, 100.0]
            .iter()
            .map(|tol| douglas_peucker::<_, 2>(&peak(), *tol, &mut vec![]) / 2)
            .collect();
        assert!(counts[0] >= counts[1]);
        assert_eq!(counts[1], 4);
        assert_eq!(counts[2], 2);
    }

    #[test]
    fn radial_preprocessing() {
        // the cluster is reduced before any segment is considered
        assert_reduce(
            flat(&[[0.0, 0.0], [0.1, 0.5], [0.2, 0.0], [5.0, 0.0]]),
            vec![[0.0, 0.0], [5.0, 0.0]],
            1.0,
        );
    }

    #[test]
    fn integer_coordinates() {
        let coords = [0, 0, 5, 1, 10, 0, 15, 8, 20, 0];
        let mut out = vec![];
        douglas_peucker::<_, 2>(&coords, 2, &mut out);
        assert_eq!(out, vec![0, 0, 10, 0, 15, 8, 20, 0]);
    }

    #[test]
    fn overflowing_tolerance_copies() {
        let coords = [0, 0, 5, 1, 10, 0, 15, 8, 20, 0];
        let mut out = vec![];
        douglas_peucker::<i32, 2>(&coords, 100_000, &mut out);
        assert_eq!(out, coords.to_vec());
    }

    #[test]
    fn coarser_tolerance_can_keep_more() {
        // the radial pass keeps -3 at the finer tolerance, which hides -5 from the split
        let coords = [1.0, -3.0, -5.0, 2.0];
        let mut out = vec![];
        douglas_peucker::<_, 1>(&coords, 4.0, &mut out);
        assert_eq!(out, vec![1.0, 2.0]);

        out.clear();
        douglas_peucker::<_, 1>(&coords, 5.0, &mut out);
        assert_eq!(out, vec![1.0, -5.0, 2.0]);
    }

    #[test]
    fn zero_tolerance_copies() {
        init_logging();
        let mut out = vec![];
        douglas_peucker::<_, 2>(&peak(), 0.0, &mut out);
        assert_eq!(out, peak());
    }

    #[test]
    fn count_variant() {
        let expected = [
            (2, vec![[0.0, 0.0], [6.0, 0.0]]),
            (3, vec![[0.0, 0.0], [4.0, 6.0], [6.0, 0.0]]),
            (4, vec![[0.0, 0.0], [2.0, -0.1], [4.0, 6.0], [6.0, 0.0]]),
            (
                5,
                vec![[0.0, 0.0], [2.0, -0.1], [3.0, 5.0], [4.0, 6.0], [6.0, 0.0]],
            ),
        ];
        for (count, points) in expected {
            let mut out = vec![];
            assert_eq!(douglas_peucker_n::<_, 2>(&peak(), count, &mut out), count * 2);
            assert_eq!(out, flat(&points));
        }
    }

    #[test]
    fn count_variant_ties_go_to_first() {
        let coords = flat(&[[0.0, 0.0], [1.0, 1.0], [2.0, 0.0], [3.0, 1.0], [4.0, 0.0]]);
        let mut out = vec![];
        douglas_peucker_n::<_, 2>(&coords, 3, &mut out);
        assert_eq!(out, flat(&[[0.0, 0.0], [1.0, 1.0], [4.0, 0.0]]));

        out.clear();
        douglas_peucker_n::<_, 2>(&coords, 4, &mut out);
        assert_eq!(out, flat(&[[0.0, 0.0], [1.0, 1.0], [2.0, 0.0], [4.0, 0.0]]));
    }

    #[test]
    fn count_variant_collinear() {
        let coords: Vec<f64> = (0..6).map(|x| x as f64).collect();
        let mut out = vec![];
        assert_eq!(douglas_peucker_n::<_, 1>(&coords, 4, &mut out), 4);
        assert_eq!(out.first(), Some(&0.0));
        assert_eq!(out.last(), Some(&5.0));
    }

    #[test]
    fn count_not_below_points_copies() {
        let mut out = vec![];
        douglas_peucker_n::<_, 2>(&peak(), 7, &mut out);
        assert_eq!(out, peak());

        out.clear();
        douglas_peucker_n::<_, 2>(&peak(), 1, &mut out);
        assert_eq!(out, peak());
    }

    #[test]
    fn pending_order() {
        let sub = SubPoly { first: 0, last: 4 };
        let pending = |dist2: f64, seq| Pending {
            sub,
            key: KeyInfo { index: 2, dist2 },
            seq,
        };
        let mut queue: BinaryHeap<_> =
            vec![pending(1.0, 0), pending(3.0, 1), pending(3.0, 2), pending(2.0, 3)].into();
        let order: Vec<_> = std::iter::from_fn(|| queue.pop()).map(|p| p.seq).collect();
        assert_eq!(order, vec![1, 2, 3, 0]);
    }

    proptest! {
        #[test]
        fn matches_recursive_reference(
            points in prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 2..40),
            epsilon in 0.01..20.0f64,
        ) {
            let coords: Vec<f64> = points.iter().flat_map(|(x, y)| [*x, *y]).collect();
            let mut out = vec![];
            douglas_peucker::<_, 2>(&coords, epsilon, &mut out);
            prop_assert_eq!(out, reference(&coords, epsilon));
        }
    }
}
