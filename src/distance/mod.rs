//! Distance cache.
//!
//! Provides a dense, symmetric Euclidean distance matrix over the instance
//! points, built once before the search starts.

mod matrix;

pub use matrix::DistanceMatrix;
