//! Closed tour over all points.

use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::local_search::tour_length;

/// A cyclic visiting order of every point in an instance.
///
/// Always a permutation of `[0, n)`. The closing edge from the last index
/// back to the first is implicit and included in [`Tour::length`].
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Point, Tour};
/// use u_tsp::distance::DistanceMatrix;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// let tour = Tour::identity(points.len());
/// assert_eq!(tour.order(), &[0, 1, 2, 3]);
/// assert!((tour.length(&dm) - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// The identity tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    /// Creates a tour from an explicit order, checking it visits every
    /// index in `[0, size)` exactly once.
    pub fn from_order(order: Vec<usize>, size: usize) -> Result<Self> {
        check_permutation(&order, size)?;
        Ok(Self { order })
    }

    /// Wraps an order already known to be a permutation.
    pub(crate) fn from_permutation(order: Vec<usize>) -> Self {
        debug_assert!(check_permutation(&order, order.len()).is_ok());
        Self { order }
    }

    /// Point indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of points visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no points.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total closed-cycle length under the given distances.
    pub fn length(&self, distances: &DistanceMatrix) -> f64 {
        tour_length(&self.order, distances)
    }

    /// Reverses positions `i+1..=j` in place (a 2-opt reconnection).
    ///
    /// # Panics
    ///
    /// Panics if `i >= j` or `j` is out of bounds.
    pub fn reverse_segment(&mut self, i: usize, j: usize) {
        assert!(i < j, "2-opt segment requires i < j (got {i}, {j})");
        self.order[i + 1..=j].reverse();
    }
}

/// Checks that `order` visits every index in `[0, size)` exactly once.
pub fn check_permutation(order: &[usize], size: usize) -> Result<()> {
    let fail = |reason: String| TspError::NotAPermutation { size, reason };

    if order.len() != size {
        return Err(fail(format!("has {} entries", order.len())));
    }
    let mut seen = vec![false; size];
    for &idx in order {
        if idx >= size {
            return Err(fail(format!("index {idx} out of range")));
        }
        if seen[idx] {
            return Err(fail(format!("index {idx} repeated")));
        }
        seen[idx] = true;
    }
    Ok(())
}
