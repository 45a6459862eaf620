//! Instance, result and tour file I/O.
//!
//! - [`parse_instance`] / [`read_instance`] — point count then `2n` coordinates
//! - [`format_result`] / [`parse_result`] — `"<length> 0"` plus the tour line
//! - [`parse_tour_file`] / [`read_tour_file`] — last line of a tour file

mod instance;
mod output;
mod tour_file;

pub use instance::{parse_instance, read_instance, read_instance_from};
pub use output::{
    format_result, format_tour, parse_result, result_to_json, write_result, ParsedResult,
};
pub use tour_file::{parse_tour_file, parse_tour_line, read_tour_file};
