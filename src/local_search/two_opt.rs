//! Closed-tour 2-opt move search.
//!
//! # Algorithm
//!
//! For each edge A = (t[i], t[i+1]) and each non-adjacent edge
//! B = (t[j], t[(j+1) mod n]) with j > i+1, compute the length saved by
//! reconnecting them as (t[i], t[j]) and (t[i+1], t[j+1]):
//!
//! ```text
//! delta = d(t[i], t[i+1]) + d(t[j], t[j+1]) - d(t[i], t[j]) - d(t[i+1], t[j+1])
//! ```
//!
//! If delta > 0, reversing positions [i+1..=j] shortens the tour by delta.
//! When i == 0 the last edge (t[n-1], t[0]) touches A through the wraparound,
//! so j stops at n-2 for that row only.
//!
//! # Complexity
//!
//! O(n²) per pass.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Minimum delta for a move to count as an improvement.
///
/// Deltas at or below this are treated as floating-point noise, so
/// zero-gain reversals are never applied.
pub const IMPROVEMENT_TOLERANCE: f64 = 1e-12;

/// How a pass picks among improving moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Take the first improving move in scan order and stop scanning.
    #[default]
    FirstImprovement,
    /// Scan every pair and take the move with the largest delta.
    BestImprovement,
}

/// A candidate 2-opt move: reverse tour positions `i+1..=j`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoOptMove {
    /// Position of the first removed edge's start.
    pub i: usize,
    /// Position of the second removed edge's start.
    pub j: usize,
    /// Length saved by applying the move (positive means shorter).
    pub delta: f64,
}

/// Outcome of one 2-opt pass.
#[derive(Debug, Clone)]
pub struct PassOutcome {
    /// The tour after the pass (unchanged if nothing improved).
    pub tour: Tour,
    /// Total length of `tour`.
    pub length: f64,
    /// The move that was applied, if any.
    pub applied: Option<TwoOptMove>,
}

impl PassOutcome {
    /// Returns `true` if the pass applied an improving move.
    pub fn improved(&self) -> bool {
        self.applied.is_some()
    }
}

/// Computes the total closed-cycle length: `t[0] → ... → t[n-1] → t[0]`.
///
/// The empty order has length zero.
pub fn tour_length(order: &[usize], distances: &DistanceMatrix) -> f64 {
    let (Some(&first), Some(&last)) = (order.first(), order.last()) else {
        return 0.0;
    };
    let mut cost = distances.get(last, first);
    for w in order.windows(2) {
        cost += distances.get(w[0], w[1]);
    }
    cost
}

/// Computes the length saved by the 2-opt move at positions `(i, j)`.
///
/// Before: ... t[i] → t[i+1] ... t[j] → t[j+1] ...
/// After:  ... t[i] → t[j] ... t[i+1] → t[j+1] ...
///
/// # Panics
///
/// Panics if `i + 1` or `j` is out of bounds.
pub fn two_opt_delta(order: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let n = order.len();
    let (a, b) = (order[i], order[i + 1]);
    let (c, d) = (order[j], order[(j + 1) % n]);
    distances.get(a, b) + distances.get(c, d) - distances.get(a, c) - distances.get(b, d)
}

/// Second-edge positions paired with edge `i` in a tour of `n` points.
fn partner_range(n: usize, i: usize) -> Range<usize> {
    let end = if i == 0 { n - 1 } else { n };
    (i + 2)..end
}

/// Scans the tour once and returns an improving move under `policy`.
///
/// Returns `None` when the tour is 2-optimal. Tours of fewer than four
/// points have no non-adjacent edge pairs and always return `None`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Point, Tour};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::{find_move, SelectionPolicy};
///
/// // Visiting the unit square corners diagonally crosses two edges.
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// let tour = Tour::identity(4);
///
/// let mv = find_move(tour.order(), &dm, SelectionPolicy::FirstImprovement).unwrap();
/// assert_eq!((mv.i, mv.j), (0, 2));
/// assert!((mv.delta - (2.0 * 2.0_f64.sqrt() - 2.0)).abs() < 1e-10);
/// ```
pub fn find_move(
    order: &[usize],
    distances: &DistanceMatrix,
    policy: SelectionPolicy,
) -> Option<TwoOptMove> {
    let n = order.len();
    let mut best: Option<TwoOptMove> = None;

    for i in 0..n.saturating_sub(1) {
        let (a, b) = (order[i], order[i + 1]);
        let d_ab = distances.get(a, b);

        for j in partner_range(n, i) {
            let (c, d) = (order[j], order[(j + 1) % n]);
            let delta = d_ab + distances.get(c, d) - distances.get(a, c) - distances.get(b, d);
            if delta <= IMPROVEMENT_TOLERANCE {
                continue;
            }

            let candidate = TwoOptMove { i, j, delta };
            match policy {
                SelectionPolicy::FirstImprovement => return Some(candidate),
                SelectionPolicy::BestImprovement => {
                    if best.map_or(true, |m| delta > m.delta) {
                        best = Some(candidate);
                    }
                }
            }
        }
    }

    best
}

/// Applies a move to the tour by reversing positions `i+1..=j`.
pub fn apply_move(tour: &mut Tour, mv: &TwoOptMove) {
    tour.reverse_segment(mv.i, mv.j);
}

/// Runs one 2-opt pass: find a move under `policy` and apply it.
///
/// The returned length is recomputed from the new tour.
pub fn two_opt_pass(
    mut tour: Tour,
    distances: &DistanceMatrix,
    policy: SelectionPolicy,
) -> PassOutcome {
    let applied = find_move(tour.order(), distances, policy);
    if let Some(mv) = &applied {
        apply_move(&mut tour, mv);
    }
    let length = tour.length(distances);
    PassOutcome {
        tour,
        length,
        applied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn crossed_square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
        ])
    }

    fn octagon() -> DistanceMatrix {
        let points: Vec<Point> = (0..8)
            .map(|k| {
                let a = k as f64 * std::f64::consts::FRAC_PI_4;
                Point::new(10.0 * a.cos(), 10.0 * a.sin())
            })
            .collect();
        DistanceMatrix::from_points(&points)
    }

    #[test]
    fn test_partner_range_carve_out() {
        assert_eq!(partner_range(5, 0), 2..4);
        assert_eq!(partner_range(5, 1), 3..5);
        assert_eq!(partner_range(5, 2), 4..5);
        assert!(partner_range(5, 3).is_empty());
    }

    #[test]
    fn test_tour_length_empty_and_single() {
        let dm = crossed_square();
        assert_eq!(tour_length(&[], &dm), 0.0);
        assert_eq!(tour_length(&[2], &dm), 0.0);
    }

    #[test]
    fn test_tour_length_pair_counts_both_directions() {
        let dm = crossed_square();
        // (0,0) <-> (1,1) twice
        assert!((tour_length(&[0, 1], &dm) - 2.0 * 2.0_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_delta_matches_length_change() {
        let dm = crossed_square();
        let mut tour = Tour::identity(4);
        let before = tour.length(&dm);
        let delta = two_opt_delta(tour.order(), &dm, 0, 2);
        tour.reverse_segment(0, 2);
        assert!((before - tour.length(&dm) - delta).abs() < 1e-10);
    }

    #[test]
    fn test_apply_move_reverses_inner_segment() {
        let mut tour = Tour::identity(4);
        apply_move(
            &mut tour,
            &TwoOptMove {
                i: 0,
                j: 2,
                delta: 1.0,
            },
        );
        assert_eq!(tour.order(), &[0, 2, 1, 3]);
    }

    #[test]
    fn test_no_pairs_below_four_points() {
        let dm = crossed_square();
        for n in 0..4 {
            let order: Vec<usize> = (0..n).collect();
            assert!(find_move(&order, &dm, SelectionPolicy::FirstImprovement).is_none());
            assert!(find_move(&order, &dm, SelectionPolicy::BestImprovement).is_none());
        }
    }

    #[test]
    fn test_zero_gain_move_not_taken() {
        // Collinear points in order: the only other candidate has delta 0.
        let dm = DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        ]);
        let order = [0, 1, 2, 3];
        assert!(two_opt_delta(&order, &dm, 1, 3).abs() < 1e-12);
        assert!(find_move(&order, &dm, SelectionPolicy::BestImprovement).is_none());
    }

    /// On [0, 1, 2, 3] the move (0, 2) saves `gap`; the move (1, 3) loses
    /// length because edge 3-0 is short.
    fn near_tie_matrix(gap: f64) -> DistanceMatrix {
        let mut dm = DistanceMatrix::new(4);
        for (a, b, d) in [
            (0, 1, 1.0),
            (1, 2, 1.0),
            (2, 3, 1.0),
            (3, 0, 0.5),
            (0, 2, 1.0),
            (1, 3, 1.0 - gap),
        ] {
            dm.set(a, b, d);
            dm.set(b, a, d);
        }
        dm
    }

    #[test]
    fn test_sub_tolerance_delta_not_taken() {
        let dm = near_tie_matrix(5e-13);
        let order = [0, 1, 2, 3];
        let delta = two_opt_delta(&order, &dm, 0, 2);
        assert!(delta > 0.0 && delta < IMPROVEMENT_TOLERANCE);
        assert!(find_move(&order, &dm, SelectionPolicy::FirstImprovement).is_none());
        assert!(find_move(&order, &dm, SelectionPolicy::BestImprovement).is_none());
    }

    #[test]
    fn test_above_tolerance_delta_taken() {
        let dm = near_tie_matrix(2e-12);
        let order = [0, 1, 2, 3];
        for policy in [SelectionPolicy::FirstImprovement, SelectionPolicy::BestImprovement] {
            let mv = find_move(&order, &dm, policy).expect("delta above tolerance");
            assert_eq!((mv.i, mv.j), (0, 2));
            assert!(mv.delta > IMPROVEMENT_TOLERANCE);
        }
    }

    #[test]
    fn test_first_improvement_is_first_in_scan_order() {
        let dm = octagon();
        let order = [0, 4, 1, 5, 2, 6, 3, 7];
        let mv = find_move(&order, &dm, SelectionPolicy::FirstImprovement).expect("crossed");

        let n = order.len();
        let first = (0..n - 1)
            .flat_map(|i| partner_range(n, i).map(move |j| (i, j)))
            .find(|&(i, j)| two_opt_delta(&order, &dm, i, j) > IMPROVEMENT_TOLERANCE)
            .expect("some improving pair");
        assert_eq!((mv.i, mv.j), first);
    }

    #[test]
    fn test_best_improvement_is_maximal() {
        let dm = octagon();
        let order = [0, 4, 1, 5, 2, 6, 3, 7];
        let mv = find_move(&order, &dm, SelectionPolicy::BestImprovement).expect("crossed");

        let n = order.len();
        for i in 0..n - 1 {
            for j in partner_range(n, i) {
                assert!(two_opt_delta(&order, &dm, i, j) <= mv.delta + 1e-12);
            }
        }
        assert!((two_opt_delta(&order, &dm, mv.i, mv.j) - mv.delta).abs() < 1e-12);
    }

    #[test]
    fn test_pass_reports_improvement() {
        let dm = crossed_square();
        let before = Tour::identity(4).length(&dm);
        let out = two_opt_pass(Tour::identity(4), &dm, SelectionPolicy::FirstImprovement);
        assert!(out.improved());
        assert_eq!(out.tour.order(), &[0, 2, 1, 3]);
        assert!((out.length - 4.0).abs() < 1e-10);
        let delta = out.applied.expect("applied").delta;
        assert!((before - out.length - delta).abs() < 1e-10);
    }

    #[test]
    fn test_pass_at_local_optimum() {
        let dm = crossed_square();
        let tour = Tour::from_order(vec![0, 2, 1, 3], 4).expect("valid");
        let out = two_opt_pass(tour.clone(), &dm, SelectionPolicy::BestImprovement);
        assert!(!out.improved());
        assert_eq!(out.tour, tour);
        assert!((out.length - 4.0).abs() < 1e-10);
    }
}
