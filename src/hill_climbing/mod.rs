//! Hill Climbing and Hill Climbing with Random Restarts.
//!
//! Steepest-ascent local search over the neighborhood defined by
//! [`SearchProblem::actions`](crate::problem::SearchProblem::actions) and
//! [`SearchProblem::result`](crate::problem::SearchProblem::result).
//! Each step moves to the best neighbor if it strictly improves on the
//! current value, and stops at the first local optimum.
//!
//! Random restarts repeat the climb from independent random states and
//! keep the best local optimum.
//!
//! # References
//!
//! - Russell & Norvig (2010), *Artificial Intelligence: A Modern Approach*,
//!   §4.1.1 "Hill-climbing search"

mod config;
mod runner;

pub use config::{HillClimbingConfig, RandomRestartsConfig};
pub use runner::{HillClimbing, RandomRestarts};
