//! Simplify polylines in N dimensions.
//!
//! Polylines are flat coordinate buffers: `D` consecutive values per point,
//! points in traversal order, no point type materialised.
//! Every simplifier appends a subsequence of the input points to an output buffer
//! and returns the number of coordinates written.
//!
//! Malformed input (ragged buffers, too few points, zero tolerances) is never an error
//! for a simplifier: the input is copied to the output unchanged.
//!
//! ```
//! use polysimp::simplify::nth_point;
//!
//! let coords: Vec<f64> = (0..10).map(|n| n as f64).collect();
//! let mut out = Vec::new();
//! let written = nth_point::<_, 1>(&coords, 3, &mut out);
//! assert_eq!(written, 4);
//! assert_eq!(out, vec![0.0, 3.0, 6.0, 9.0]);
//! ```
pub use nalgebra;

use nalgebra::{ClosedAdd, ClosedMul, ClosedSub, Scalar};
use num_traits::{Num, NumCast, Signed};

pub mod algorithm;
pub mod error;
pub mod math;
pub mod points;
pub mod positional;
pub mod simplify;

pub use algorithm::Algorithm;
pub use error::InputError;
pub use math::Statistics;

/// Floating point type used for projection fractions and statistics.
pub type Precision = f64;

/// Scalar type of a single coordinate.
///
/// Any signed integer or float qualifies. Unsigned types are not supported,
/// as point differences must be representable.
pub trait Coordinate:
    Scalar + Num + Signed + NumCast + Copy + PartialOrd + ClosedAdd + ClosedSub + ClosedMul
{
}

impl<T> Coordinate for T where
    T: Scalar + Num + Signed + NumCast + Copy + PartialOrd + ClosedAdd + ClosedSub + ClosedMul
{
}
