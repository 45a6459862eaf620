//! Domain model types for the Euclidean TSP.
//!
//! Points are plain coordinate values identified by their input index;
//! a tour is a cyclic permutation of those indices.

mod point;
mod tour;

pub use point::Point;
pub use tour::{check_permutation, Tour};
