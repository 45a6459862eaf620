//! Nearest-neighbor tour construction.
//!
//! Builds a tour greedily: starting from a given point, always visit the
//! nearest unvisited point. The closing edge back to the start is implicit.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Constructs a tour with the nearest-neighbor heuristic.
///
/// Returns the empty tour for an empty matrix. `start` is clamped to the
/// last point if out of range.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::nearest_neighbor;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(2.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// let tour = nearest_neighbor(&dm, 0);
/// assert_eq!(tour.order(), &[0, 2, 3, 1]);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix, start: usize) -> Tour {
    let n = distances.size();
    if n == 0 {
        return Tour::identity(0);
    }

    let start = start.min(n - 1);
    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    let mut order = Vec::with_capacity(n);
    order.push(start);

    let mut current = start;
    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        unvisited.retain(|&i| i != next);
        order.push(next);
        current = next;
    }

    Tour::from_permutation(order)
}
