//! Genetic Algorithm.
//!
//! A generational GA over full-length states produced by
//! [`SearchProblem::generate_random_state`](crate::problem::SearchProblem::generate_random_state).
//! Offspring come from [`SearchProblem::crossover`](crate::problem::SearchProblem::crossover)
//! and are perturbed by [`SearchProblem::mutate`](crate::problem::SearchProblem::mutate)
//! with a configurable chance.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, selection, elitism)
//! - [`Selection`]: Parent selection strategies
//! - [`GaRunner`]: Executes the evolutionary loop
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;
mod selection;

pub use config::GaConfig;
pub use runner::GaRunner;
pub use selection::Selection;
