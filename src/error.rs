//! Reasons an input is rejected.
//!
//! Simplifiers recover from all of these by copying their input through unchanged;
//! positional error computation reports them to the caller.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Points must have at least one coordinate.
    #[error("dimension must be at least 1")]
    ZeroDimension,

    #[error("coordinate count {count} is not a multiple of dimension {dim}")]
    Ragged { count: usize, dim: usize },

    #[error("polyline has {points} points but at least {required} are required")]
    TooFewPoints { points: usize, required: usize },

    /// Tolerance (or its square) is zero.
    #[error("tolerance must be non-zero")]
    ZeroTolerance,

    /// The squared tolerance does not fit in the coordinate type.
    #[error("squared tolerance overflows the coordinate type")]
    ToleranceOverflow,

    #[error("point stride must be at least 2, got {0}")]
    InvalidStride(usize),

    #[error("target point count {count} must be at least 2 and below the point count {points}")]
    InvalidCount { count: usize, points: usize },

    #[error("repeat count must be at least 1")]
    ZeroRepeat,

    #[error("simplification has {simplified} points but the original only has {original}")]
    LongerSimplification { original: usize, simplified: usize },

    #[error("first points of the original and the simplification differ")]
    FirstPointMismatch,

    /// A simplified point was not found, in order, in the original.
    #[error("simplified point {index} does not occur in order in the original")]
    UnmatchedPoint { index: usize },

    /// The simplification ends before the original does.
    #[error("simplification ends at original point {matched} of {original}")]
    UnconsumedTail { matched: usize, original: usize },
}
