//! Crate error type.

use thiserror::Error;

/// Errors produced while reading instances, tours, and configuration.
///
/// The optimizer itself never fails once it has a valid instance; every
/// variant here comes from parsing or validating external input.
#[derive(Debug, Error)]
pub enum TspError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed JSON configuration or result.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The instance has no leading point count.
    #[error("instance is empty: expected a point count")]
    MissingCount,

    /// The leading point count is not a non-negative integer.
    #[error("invalid point count '{0}'")]
    InvalidCount(String),

    /// A coordinate token could not be parsed as a float.
    #[error("invalid coordinate '{token}' at token {position}")]
    InvalidCoordinate {
        /// The offending token.
        token: String,
        /// 1-based position of the token after the count.
        position: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate for point {index}")]
    NonFiniteCoordinate {
        /// Point index.
        index: usize,
    },

    /// The number of coordinate tokens does not match the declared count.
    #[error("expected {expected} coordinate tokens for {points} points, found {found}")]
    CoordinateCount {
        /// Declared number of points.
        points: usize,
        /// Expected coordinate token count (2n).
        expected: usize,
        /// Actual coordinate token count.
        found: usize,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A tour file or result had nothing to read.
    #[error("tour is empty: no line to read")]
    EmptyTour,

    /// A tour index could not be parsed.
    #[error("invalid tour index '{0}'")]
    InvalidTourIndex(String),

    /// A result header line is not `<length> 0`.
    #[error("invalid result header '{0}'")]
    InvalidHeader(String),

    /// A tour is not a permutation of `[0, n)`.
    #[error("tour is not a permutation of 0..{size}: {reason}")]
    NotAPermutation {
        /// Instance size.
        size: usize,
        /// What was wrong.
        reason: String,
    },
}

/// Convenience alias for results with [`TspError`].
pub type Result<T> = std::result::Result<T, TspError>;
