//! # u-tsp
//!
//! Euclidean traveling salesman local search: a dense distance cache,
//! closed-tour 2-opt improvement with first- or best-improvement selection,
//! plain-text instance and result I/O, and SVG tour plots.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Point, Tour)
//! - [`distance`] — Distance matrix
//! - [`constructive`] — Initial tours (identity, nearest neighbor, random)
//! - [`local_search`] — 2-opt move search and tour length
//! - [`solver`] — Optimization loop, configuration and budgets
//! - [`io`] — Instance, result and tour file formats
//! - [`render`] — SVG rendering of a tour
//!
//! ## Example
//!
//! ```
//! use u_tsp::io::{format_result, parse_instance};
//! use u_tsp::solver::{solve, SolverConfig};
//!
//! let points = parse_instance("4\n0 0\n1 1\n0 1\n1 0").unwrap();
//! let result = solve(&points, &SolverConfig::default());
//! assert_eq!(format_result(&result), "4.00 0\n0 2 1 3\n");
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod io;
pub mod local_search;
pub mod models;
pub mod render;
pub mod solver;

pub use error::{Result, TspError};
