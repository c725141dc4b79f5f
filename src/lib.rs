//! Problem-agnostic local search.
//!
//! A problem implements the small [`SearchProblem`](problem::SearchProblem)
//! contract (states, actions, transitions, objective, random states and
//! genetic operators) and can then be solved by any of four strategies:
//!
//! - **Hill Climbing**: steepest ascent to the first local optimum.
//! - **Hill Climbing with Random Restarts**: repeated climbs from random
//!   states, keeping the best.
//! - **Simulated Annealing (SA)**: random-neighbor walk with temperature
//!   controlled acceptance of worsening moves.
//! - **Genetic Algorithm (GA)**: population-based evolution with
//!   selection, crossover and mutation.
//!
//! Every strategy maximizes and returns a
//! [`SearchResult`](result::SearchResult). The 0/1 knapsack problem ships
//! as [`knapsack::Knapsack`].
//!
//! All randomness flows through an explicit, seedable generator, so runs
//! are reproducible for a fixed seed.
//!
//! # Quick start
//!
//! ```
//! use u_localsearch::knapsack::Knapsack;
//! use u_localsearch::strategy::{solve, Algorithm, SearchConfig};
//!
//! let problem = Knapsack::from_columns(&[10, 20, 30], &[60, 100, 120], 50)?;
//! let config = SearchConfig::default().with_seed(42);
//! let result = solve(&problem, Algorithm::Genetic, &config)?;
//! assert_eq!(result.value, 220);
//! # Ok::<(), u_localsearch::error::Error>(())
//! ```

pub mod error;
pub mod ga;
pub mod hill_climbing;
pub mod knapsack;
pub mod problem;
pub mod random;
pub mod result;
pub mod sa;
pub mod strategy;
