//! Convert between [nalgebra] points and flat coordinate buffers.
use nalgebra::{Point, Scalar};

/// Concatenate the coordinates of every point.
pub fn flatten<T: Scalar + Copy, const D: usize>(line: &[Point<T, D>]) -> Vec<T> {
    let mut out = Vec::with_capacity(line.len() * D);
    for point in line {
        out.extend(point.coords.iter().copied());
    }
    out
}

/// Split a coordinate buffer into points.
///
/// Trailing coordinates which do not make up a whole point are dropped.
pub fn unflatten<T: Scalar + Copy, const D: usize>(coords: &[T]) -> Vec<Point<T, D>> {
    if D == 0 {
        return vec![];
    }
    coords.chunks_exact(D).map(Point::from_slice).collect()
}
