//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. A random neighbor is drawn each iteration; worsening
//! moves are accepted with a probability that shrinks as the temperature
//! falls, letting the search leave local optima early and settle later.
//!
//! SA maximizes [`SearchProblem::value`](crate::problem::SearchProblem::value)
//! and returns the best state observed, not the last one.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::SaRunner;
