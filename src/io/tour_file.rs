//! Tour file reader.
//!
//! Only the final line of a tour file matters; it holds the visiting order
//! as whitespace-separated point indices. Solver output is itself a valid
//! tour file.

use std::path::Path;

use crate::error::{Result, TspError};

/// Parses one line of whitespace-separated point indices.
pub fn parse_tour_line(line: &str) -> Result<Vec<usize>> {
    line.split_whitespace()
        .map(|t| {
            t.parse::<usize>()
                .map_err(|_| TspError::InvalidTourIndex(t.to_string()))
        })
        .collect()
}

/// Parses a tour file, keeping only its last line.
///
/// # Examples
///
/// ```
/// use u_tsp::io::parse_tour_file;
///
/// let tour = parse_tour_file("4.00 0\n0 2 1 3\n").unwrap();
/// assert_eq!(tour, vec![0, 2, 1, 3]);
/// ```
pub fn parse_tour_file(text: &str) -> Result<Vec<usize>> {
    let last = text.lines().last().ok_or(TspError::EmptyTour)?;
    parse_tour_line(last)
}

/// Reads a tour file from disk.
pub fn read_tour_file(path: impl AsRef<Path>) -> Result<Vec<usize>> {
    let text = std::fs::read_to_string(path)?;
    parse_tour_file(&text)
}
