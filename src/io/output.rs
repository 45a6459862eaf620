//! Result writer.
//!
//! Text format, two lines:
//!
//! ```text
//! <length to two decimals> 0
//! <tour indices separated by spaces>
//! ```
//!
//! Both lines end with a newline, so the tour line is always the last line
//! and the text doubles as a tour file even when the tour is empty.
//!
//! The literal `0` after the length is kept for compatibility with
//! existing consumers of this format.

use std::io::Write;

use crate::error::{Result, TspError};
use crate::solver::SolveResult;

use super::tour_file::parse_tour_line;

/// Length and tour read back from result text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResult {
    /// Tour length as printed (two decimals).
    pub length: f64,
    /// Visiting order.
    pub order: Vec<usize>,
}

/// Formats a length and visiting order in the result text format.
///
/// # Examples
///
/// ```
/// use u_tsp::io::format_tour;
///
/// assert_eq!(format_tour(4.0, &[0, 2, 1, 3]), "4.00 0\n0 2 1 3\n");
/// ```
pub fn format_tour(length: f64, order: &[usize]) -> String {
    let indices: Vec<String> = order.iter().map(|i| i.to_string()).collect();
    format!("{length:.2} 0\n{}\n", indices.join(" "))
}

/// Formats a solver result in the result text format.
pub fn format_result(result: &SolveResult) -> String {
    format_tour(result.length, result.tour.order())
}

/// Writes a solver result.
pub fn write_result<W: Write>(mut writer: W, result: &SolveResult) -> Result<()> {
    writer.write_all(format_result(result).as_bytes())?;
    Ok(())
}

/// Serializes a solver result as pretty-printed JSON.
pub fn result_to_json(result: &SolveResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Parses result text produced by [`format_result`].
///
/// A missing second line is read as the empty tour.
pub fn parse_result(text: &str) -> Result<ParsedResult> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(TspError::EmptyTour)?;

    let invalid = || TspError::InvalidHeader(header.to_string());
    let mut fields = header.split_whitespace();
    let length = fields
        .next()
        .and_then(|t| t.parse::<f64>().ok())
        .ok_or_else(invalid)?;
    if fields.next() != Some("0") || fields.next().is_some() {
        return Err(invalid());
    }

    let order = parse_tour_line(lines.next().unwrap_or(""))?;
    Ok(ParsedResult { length, order })
}
