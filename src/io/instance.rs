//! Instance reader.
//!
//! Format: whitespace-separated tokens, first the point count `n`, then
//! exactly `2n` coordinates `x1 y1 x2 y2 ... xn yn`.

use std::io::Read;
use std::path::Path;

use crate::error::{Result, TspError};
use crate::models::Point;

/// Parses an instance from text.
///
/// # Examples
///
/// ```
/// use u_tsp::io::parse_instance;
///
/// let points = parse_instance("2\n0 0\n3.5 -1").unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].x(), 3.5);
/// assert!(parse_instance("2\n0 0\n3.5").is_err());
/// ```
pub fn parse_instance(input: &str) -> Result<Vec<Point>> {
    let mut tokens = input.split_whitespace();

    let count = tokens.next().ok_or(TspError::MissingCount)?;
    let n: usize = count
        .parse()
        .map_err(|_| TspError::InvalidCount(count.to_string()))?;
    let expected = n
        .checked_mul(2)
        .ok_or_else(|| TspError::InvalidCount(count.to_string()))?;

    let coords = tokens
        .enumerate()
        .map(|(k, token)| {
            token.parse::<f64>().map_err(|_| TspError::InvalidCoordinate {
                token: token.to_string(),
                position: k + 1,
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    if coords.len() != expected {
        return Err(TspError::CoordinateCount {
            points: n,
            expected,
            found: coords.len(),
        });
    }

    coords
        .chunks_exact(2)
        .enumerate()
        .map(|(index, xy)| {
            let p = Point::new(xy[0], xy[1]);
            if p.is_finite() {
                Ok(p)
            } else {
                Err(TspError::NonFiniteCoordinate { index })
            }
        })
        .collect()
}

/// Reads an instance from any reader (e.g. stdin).
pub fn read_instance_from<R: Read>(mut reader: R) -> Result<Vec<Point>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_instance(&text)
}

/// Reads an instance file.
pub fn read_instance(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let text = std::fs::read_to_string(path)?;
    parse_instance(&text)
}
