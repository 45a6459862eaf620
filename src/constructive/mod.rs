//! Initial tour construction.
//!
//! - [`InitialTour::Identity`] — input order `0, 1, ..., n-1`
//! - [`nearest_neighbor`] — greedy nearest unvisited point, O(n²)
//! - [`random_tour`] — seeded uniform shuffle

mod nearest_neighbor;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::models::Tour;

pub use nearest_neighbor::nearest_neighbor;

/// Strategy for the tour the local search starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum InitialTour {
    /// Points in input order.
    #[default]
    Identity,
    /// Nearest-neighbor tour starting at point 0.
    NearestNeighbor,
    /// Random permutation from a fixed seed.
    Random {
        /// RNG seed.
        seed: u64,
    },
}

impl InitialTour {
    /// Builds the starting tour over all points of `distances`.
    pub fn build(&self, distances: &DistanceMatrix) -> Tour {
        let n = distances.size();
        match *self {
            InitialTour::Identity => Tour::identity(n),
            InitialTour::NearestNeighbor => nearest_neighbor(distances, 0),
            InitialTour::Random { seed } => random_tour(n, seed),
        }
    }
}

/// A uniformly shuffled tour of `n` points, reproducible from `seed`.
pub fn random_tour(n: usize, seed: u64) -> Tour {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut rng);
    Tour::from_permutation(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{check_permutation, Point};

    fn grid() -> DistanceMatrix {
        let points: Vec<Point> = (0..12)
            .map(|k| Point::new((k % 4) as f64, (k / 4) as f64))
            .collect();
        DistanceMatrix::from_points(&points)
    }

    #[test]
    fn test_identity_default() {
        assert_eq!(InitialTour::default(), InitialTour::Identity);
        let tour = InitialTour::Identity.build(&grid());
        assert_eq!(tour, Tour::identity(12));
    }

    #[test]
    fn test_random_is_permutation() {
        let tour = random_tour(50, 7);
        assert!(check_permutation(tour.order(), 50).is_ok());
    }

    #[test]
    fn test_random_reproducible() {
        assert_eq!(random_tour(30, 42), random_tour(30, 42));
    }

    #[test]
    fn test_build_all_strategies() {
        let dm = grid();
        for init in [
            InitialTour::Identity,
            InitialTour::NearestNeighbor,
            InitialTour::Random { seed: 3 },
        ] {
            let tour = init.build(&dm);
            assert!(check_permutation(tour.order(), 12).is_ok(), "{init:?}");
        }
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_string(&InitialTour::Random { seed: 9 }).expect("serialize");
        assert_eq!(json, r#"{"kind":"random","seed":9}"#);
        let back: InitialTour = serde_json::from_str(r#"{"kind":"nearest_neighbor"}"#).expect("parse");
        assert_eq!(back, InitialTour::NearestNeighbor);
    }
}
