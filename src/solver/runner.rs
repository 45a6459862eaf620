//! 2-opt optimization loop.

use std::time::Instant;

use log::{debug, info, trace, warn};
use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::local_search::two_opt_pass;
use crate::models::{Point, Tour};

use super::SolverConfig;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// A pass found no improving move: the tour is 2-optimal.
    Converged,
    /// The accepted-move budget ran out before convergence was confirmed.
    IterationLimit,
    /// The time budget ran out before convergence was confirmed.
    TimeLimit,
}

/// Result of a solver run.
#[derive(Debug, Clone, Serialize)]
pub struct SolveResult {
    /// Best tour found.
    pub tour: Tour,
    /// Total closed length of `tour`.
    pub length: f64,
    /// Length of the starting tour.
    pub initial_length: f64,
    /// Number of accepted moves.
    pub iterations: usize,
    /// Number of passes run (accepted moves plus the final empty pass).
    pub passes: usize,
    /// Wall-clock seconds spent in the loop.
    pub elapsed_secs: f64,
    /// Why the loop stopped.
    pub termination: Termination,
}

impl SolveResult {
    /// Returns `true` if the tour is a confirmed local optimum.
    pub fn is_converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchState {
    Searching,
    Converged,
}

/// Repeated 2-opt local search over a Euclidean instance.
///
/// Builds the distance matrix and the initial tour, then applies one
/// improving move per pass until a pass finds none. Optional budgets stop
/// the search early with the best tour so far.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::solver::{SolverConfig, TwoOptSolver};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let result = TwoOptSolver::new(SolverConfig::default()).solve(&points);
/// assert!(result.is_converged());
/// assert!((result.length - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TwoOptSolver {
    config: SolverConfig,
}

impl TwoOptSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solves an instance from its points.
    pub fn solve(&self, points: &[Point]) -> SolveResult {
        let distances = DistanceMatrix::from_points(points);
        self.solve_with(&distances)
    }

    /// Solves an instance from a prebuilt distance matrix.
    pub fn solve_with(&self, distances: &DistanceMatrix) -> SolveResult {
        let tour = self.config.initial_tour.build(distances);
        self.improve(tour, distances)
    }

    /// Improves a given tour until it is 2-optimal or a budget runs out.
    pub fn improve(&self, tour: Tour, distances: &DistanceMatrix) -> SolveResult {
        let start = Instant::now();
        let time_limit = self.config.time_limit();
        let policy = self.config.policy;

        let mut tour = tour;
        let mut length = tour.length(distances);
        let initial_length = length;
        let mut iterations = 0;
        let mut passes = 0;
        let mut state = SearchState::Searching;
        let mut termination = Termination::Converged;

        info!(
            "2-opt: n={} policy={policy:?} initial_length={initial_length:.6}",
            tour.len()
        );

        while state == SearchState::Searching {
            if self.config.max_iterations.is_some_and(|max| iterations >= max) {
                warn!("2-opt: stopping after {iterations} moves (iteration limit)");
                termination = Termination::IterationLimit;
                break;
            }
            if time_limit.is_some_and(|limit| start.elapsed() >= limit) {
                warn!("2-opt: stopping after {iterations} moves (time limit)");
                termination = Termination::TimeLimit;
                break;
            }

            let outcome = two_opt_pass(tour, distances, policy);
            passes += 1;
            tour = outcome.tour;

            match outcome.applied {
                Some(mv) => {
                    debug_assert!((length - mv.delta - outcome.length).abs() <= 1e-9 * length.max(1.0));
                    iterations += 1;
                    debug!(
                        "2-opt: move {iterations}: reverse {}..={} delta={:.6} length={:.6}",
                        mv.i + 1,
                        mv.j,
                        mv.delta,
                        outcome.length
                    );
                }
                None => {
                    trace!("2-opt: pass {passes} found no improving move");
                    state = SearchState::Converged;
                }
            }
            length = outcome.length;
        }

        let elapsed_secs = start.elapsed().as_secs_f64();
        info!(
            "2-opt: {termination:?} length={length:.6} moves={iterations} passes={passes} elapsed={elapsed_secs:.3}s"
        );

        SolveResult {
            tour,
            length,
            initial_length,
            iterations,
            passes,
            elapsed_secs,
            termination,
        }
    }
}

/// Solves an instance with the given configuration.
pub fn solve(points: &[Point], config: &SolverConfig) -> SolveResult {
    TwoOptSolver::new(config.clone()).solve(points)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::constructive::InitialTour;
    use crate::local_search::{find_move, SelectionPolicy};
    use crate::models::check_permutation;

    fn scattered(n: usize) -> Vec<Point> {
        // Deterministic pseudo-random points from a linear congruential walk.
        let mut state: u64 = 12345;
        let mut next = move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 33) as f64 / (1u64 << 31) as f64 * 100.0
        };
        (0..n).map(|_| Point::new(next(), next())).collect()
    }

    #[test]
    fn test_single_point() {
        let result = solve(&[Point::new(0.0, 0.0)], &SolverConfig::default());
        assert_eq!(result.tour.order(), &[0]);
        assert_eq!(result.length, 0.0);
        assert!(result.is_converged());
        assert_eq!(result.iterations, 0);
        assert_eq!(result.passes, 1);
    }

    #[test]
    fn test_empty_instance() {
        let result = solve(&[], &SolverConfig::default());
        assert!(result.tour.is_empty());
        assert_eq!(result.length, 0.0);
        assert!(result.is_converged());
    }

    #[test]
    fn test_two_points() {
        let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
        let result = solve(&points, &SolverConfig::default());
        assert_eq!(result.tour.order(), &[0, 1]);
        assert!((result.length - 10.0).abs() < 1e-10);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_crossed_square_converges_to_perimeter() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        let result = solve(&points, &SolverConfig::default());
        assert_eq!(result.tour.order(), &[0, 2, 1, 3]);
        assert!((result.length - 4.0).abs() < 1e-10);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.passes, 2);
    }

    #[test]
    fn test_converged_tour_is_local_optimum() {
        let points = scattered(40);
        let dm = DistanceMatrix::from_points(&points);
        for policy in [SelectionPolicy::FirstImprovement, SelectionPolicy::BestImprovement] {
            let solver = TwoOptSolver::new(SolverConfig::default().with_policy(policy));
            let result = solver.solve_with(&dm);
            assert!(result.is_converged());
            assert!(check_permutation(result.tour.order(), 40).is_ok());
            assert!(find_move(result.tour.order(), &dm, policy).is_none());
            assert!((result.length - result.tour.length(&dm)).abs() < 1e-9);
            assert!(result.length <= result.initial_length);
        }
    }

    #[test]
    fn test_iteration_limit_returns_best_so_far() {
        let points = scattered(30);
        let dm = DistanceMatrix::from_points(&points);
        let solver = TwoOptSolver::new(SolverConfig::default().with_max_iterations(2));
        let result = solver.solve_with(&dm);
        assert_eq!(result.termination, Termination::IterationLimit);
        assert_eq!(result.iterations, 2);
        assert!(result.length < result.initial_length);
        assert!(check_permutation(result.tour.order(), 30).is_ok());
    }

    #[test]
    fn test_zero_time_limit_returns_initial_tour() {
        let points = scattered(10);
        let config = SolverConfig::default().with_time_limit(Duration::ZERO);
        let result = solve(&points, &config);
        assert_eq!(result.termination, Termination::TimeLimit);
        assert_eq!(result.tour, Tour::identity(10));
        assert_eq!(result.passes, 0);
        assert_eq!(result.length, result.initial_length);
    }

    #[test]
    fn test_improve_from_given_tour() {
        let points = scattered(15);
        let dm = DistanceMatrix::from_points(&points);
        let start = crate::constructive::random_tour(15, 5);
        let result = TwoOptSolver::default().improve(start, &dm);
        assert!(result.is_converged());
        assert!(check_permutation(result.tour.order(), 15).is_ok());
    }

    #[test]
    fn test_nearest_neighbor_start() {
        let points = scattered(25);
        let config = SolverConfig::default().with_initial_tour(InitialTour::NearestNeighbor);
        let result = solve(&points, &config);
        assert!(result.is_converged());
        assert!(result.length <= result.initial_length);
    }
}
