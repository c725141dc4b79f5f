//! SA execution loop.

use super::config::SaConfig;
use crate::error::Error;
use crate::problem::{Objective, SearchProblem};
use crate::random::rng_from;
use crate::result::SearchResult;
use rand::Rng;
use tracing::{debug, instrument, trace};

/// Executes the Simulated Annealing algorithm.
///
/// Each iteration picks a uniformly random legal action from the current
/// state. Improving moves are always taken; a move that changes the value
/// by `delta <= 0` is taken with probability `exp(delta / T)`.
///
/// The run ends when the iteration budget is spent, the temperature falls
/// below `min_temperature`, or the current state has no neighbors.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA seeded from `config.seed`.
    pub fn run<P: SearchProblem>(
        problem: &P,
        config: &SaConfig,
    ) -> Result<SearchResult<P::State, P::Value>, Error> {
        let mut rng = rng_from(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs SA with an explicit random source.
    #[instrument(
        level = "debug",
        skip_all,
        fields(iterations_limit = config.iterations_limit, initial_temperature = config.initial_temperature)
    )]
    pub fn run_with_rng<P: SearchProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SearchResult<P::State, P::Value>, Error> {
        config.validate().map_err(Error::InvalidConfig)?;

        let mut current = problem.initial_state();
        let mut current_value = problem.value(&current);
        let mut best = current.clone();
        let mut best_value = current_value;

        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut value_history = Vec::with_capacity(config.iterations_limit + 1);
        value_history.push(best_value);

        for t in 0..config.iterations_limit {
            let temperature = config.temperature(t);
            if temperature < config.min_temperature {
                break;
            }

            let actions = problem.actions(&current);
            if actions.is_empty() {
                break;
            }
            let action = actions[rng.random_range(0..actions.len())];
            let neighbor = problem.result(&current, action);
            let neighbor_value = problem.value(&neighbor);
            let delta = neighbor_value.to_f64() - current_value.to_f64();

            // Metropolis acceptance criterion
            let accept = if delta > 0.0 {
                improving_moves += 1;
                true
            } else {
                rng.random_range(0.0..1.0) < (delta / temperature).exp()
            };

            if accept {
                current = neighbor;
                current_value = neighbor_value;
                accepted_moves += 1;

                if current_value > best_value {
                    best = current.clone();
                    best_value = current_value;
                    trace!(iteration = t, value = ?best_value, temperature, "new best");
                }
            }

            iterations += 1;
            value_history.push(best_value);
        }

        debug!(
            value = ?best_value,
            iterations,
            accepted_moves,
            improving_moves,
            "simulated annealing finished"
        );

        Ok(SearchResult {
            state: problem.complete(best),
            value: best_value,
            iterations,
            value_history,
        })
    }
}
