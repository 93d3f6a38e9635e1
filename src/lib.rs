//! Maximum contiguous subsequence sum, three ways.
//!
//! [`solver::mcss_cubic`], [`solver::mcss_quadratic`] and [`solver::mcss_linear`]
//! all return the same sum for any input; [`race`] times them against random
//! sequences.

pub mod common;
pub mod error;
pub mod params;
pub mod problem;
pub mod race;
pub mod solver;

#[cfg(test)]
mod proptests;

pub use error::McssError;
pub use problem::Sequence;
pub use solver::{mcss_cubic, mcss_linear, mcss_quadratic, Algorithm, McssResult, Solver};
