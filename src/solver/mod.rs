//! 2-opt optimization loop.
//!
//! Drives repeated [`two_opt_pass`](crate::local_search::two_opt_pass)
//! calls until no improving move remains. The loop is a two-state machine
//! (searching, converged); an optional iteration or time budget ends it
//! early with the best tour found so far.

mod config;
mod runner;

pub use config::SolverConfig;
pub use runner::{solve, SolveResult, Termination, TwoOptSolver};
