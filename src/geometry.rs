//! Euclidean geometry over labeled 2D points.

use crate::error::Error;

/// An immutable 2D coordinate.
///
/// Labels are carried separately by callers and never influence the
/// optimizer; a `Point` is only ever measured, not rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
///
/// Non-negative and symmetric; zero iff the points coincide (up to
/// floating tolerance).
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    let dx = p.x - q.x;
    let dy = p.y - q.y;
    (dx * dx + dy * dy).sqrt()
}

/// Total length of the path visiting `points` in the order given by
/// `order` (a sequence of indices into `points`).
///
/// Sums consecutive segment lengths; the sequence is treated as an open
/// path, so closing it is the caller's duplicated-endpoint convention.
pub fn path_length(points: &[Point], order: &[usize]) -> f64 {
    order
        .windows(2)
        .map(|w| distance(points[w[0]], points[w[1]]))
        .sum()
}

/// Checks that a point set is annealable.
///
/// Fails with [`Error::InvalidInput`] when there are fewer than two points
/// or any coordinate is NaN or infinite. Called once before the first pass;
/// the optimizer never silently proceeds on degenerate input.
pub fn validate_points(points: &[Point]) -> Result<(), Error> {
    if points.len() < 2 {
        return Err(Error::InvalidInput(format!(
            "at least 2 points required, got {}",
            points.len()
        )));
    }
    for (i, p) in points.iter().enumerate() {
        if !p.x.is_finite() || !p.y.is_finite() {
            return Err(Error::InvalidInput(format!(
                "point {i} has non-finite coordinates ({}, {})",
                p.x, p.y
            )));
        }
    }
    Ok(())
}
