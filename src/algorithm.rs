//! A simplification algorithm together with its parameters.
use crate::points::{flatten, unflatten};
use crate::simplify::{
    douglas_peucker, douglas_peucker_n, nth_point, opheim, perpendicular_distance_repeat,
    radial_distance, reumann_witkam,
};
use crate::Coordinate;
use nalgebra::Point;

/// Parameter set for one of the simplifiers in [crate::simplify].
///
/// With the `serde` feature, parameter sets can be read from configuration files.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm<T> {
    NthPoint { n: usize },
    RadialDistance { tol: T },
    /// `repeat == 1` is a single pass.
    PerpendicularDistance { tol: T, repeat: usize },
    ReumannWitkam { tol: T },
    Opheim { min_tol: T, max_tol: T },
    DouglasPeucker { tol: T },
    /// Simplify to a fixed number of points.
    DouglasPeuckerN { count: usize },
}

impl<T: Coordinate> Algorithm<T> {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::NthPoint { .. } => "nth point",
            Algorithm::RadialDistance { .. } => "radial distance",
            Algorithm::PerpendicularDistance { .. } => "perpendicular distance",
            Algorithm::ReumannWitkam { .. } => "Reumann-Witkam",
            Algorithm::Opheim { .. } => "Opheim",
            Algorithm::DouglasPeucker { .. } => "Douglas-Peucker",
            Algorithm::DouglasPeuckerN { .. } => "Douglas-Peucker (n)",
        }
    }

    /// Append the simplification of `coords` to `out`, returning the number of coordinates written.
    pub fn simplify<const D: usize>(&self, coords: &[T], out: &mut Vec<T>) -> usize {
        match *self {
            Algorithm::NthPoint { n } => nth_point::<T, D>(coords, n, out),
            Algorithm::RadialDistance { tol } => radial_distance::<T, D>(coords, tol, out),
            Algorithm::PerpendicularDistance { tol, repeat } => {
                perpendicular_distance_repeat::<T, D>(coords, tol, repeat, out)
            }
            Algorithm::ReumannWitkam { tol } => reumann_witkam::<T, D>(coords, tol, out),
            Algorithm::Opheim { min_tol, max_tol } => {
                opheim::<T, D>(coords, min_tol, max_tol, out)
            }
            Algorithm::DouglasPeucker { tol } => douglas_peucker::<T, D>(coords, tol, out),
            Algorithm::DouglasPeuckerN { count } => douglas_peucker_n::<T, D>(coords, count, out),
        }
    }

    /// Simplify a line of [nalgebra] points.
    pub fn simplify_points<const D: usize>(&self, line: &[Point<T, D>]) -> Vec<Point<T, D>> {
        let coords = flatten(line);
        let mut out = Vec::with_capacity(coords.len());
        self.simplify::<D>(&coords, &mut out);
        unflatten(&out)
    }
}
