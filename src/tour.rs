//! Tour representation and the swap move generator.

use crate::geometry::{path_length, Point};
use rand::seq::SliceRandom;
use rand::Rng;

/// An ordered sequence of point indices with anchored endpoints.
///
/// The first and last positions are fixed for the tour's lifetime: callers
/// duplicate the starting point at the end of the point list, and the path
/// is optimized as an open path between those anchors rather than as a true
/// cycle. Interior positions hold a permutation of the interior indices,
/// each used exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// The identity tour `0, 1, .., n-1`.
    pub fn identity(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    /// A tour with randomly shuffled interior and fixed endpoints
    /// `0` and `n-1`. Requires `n >= 2`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        order[1..n - 1].shuffle(rng);
        Self { order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The visit order as point indices.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Total Euclidean length of this tour over `points`.
    pub fn length(&self, points: &[Point]) -> f64 {
        path_length(points, &self.order)
    }

    /// Proposes a candidate tour by swapping two positions.
    ///
    /// Two distinct positions are drawn uniformly from the full range
    /// `0..n`. When either draw lands on an endpoint position the input is
    /// returned unchanged rather than resampled, so some proposals are
    /// deliberate no-ops. The input is never mutated.
    pub fn propose_swap<R: Rng>(&self, rng: &mut R) -> Tour {
        let n = self.order.len();
        let i = rng.random_range(0..n);
        let mut j = rng.random_range(0..n);
        while j == i {
            j = rng.random_range(0..n);
        }

        if i == 0 || i == n - 1 || j == 0 || j == n - 1 {
            return self.clone();
        }

        let mut order = self.order.clone();
        order.swap(i, j);
        Tour { order }
    }
}
