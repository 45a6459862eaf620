//! Local search operators for improving a closed tour.
//!
//! - [`find_move`] — one 2-opt scan under a [`SelectionPolicy`]
//! - [`two_opt_pass`] — scan and apply, returning the new tour and length
//! - [`tour_length`] — the cost function shared by every operator

mod two_opt;

pub use two_opt::{
    apply_move, find_move, tour_length, two_opt_delta, two_opt_pass, PassOutcome,
    SelectionPolicy, TwoOptMove, IMPROVEMENT_TOLERANCE,
};
