//! Hill climbing execution.

use super::config::{HillClimbingConfig, RandomRestartsConfig};
use crate::error::Error;
use crate::problem::SearchProblem;
use crate::random::{create_rng, rng_from};
use crate::result::SearchResult;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument, trace};

/// Executes steepest-ascent Hill Climbing.
///
/// The climb is deterministic: no randomness is involved, and ties
/// between equally good neighbors go to the first action returned by
/// [`SearchProblem::actions`].
///
/// # Usage
///
/// ```
/// use u_localsearch::hill_climbing::{HillClimbing, HillClimbingConfig};
/// use u_localsearch::knapsack::Knapsack;
///
/// let problem = Knapsack::from_columns(&[5, 3, 7, 2], &[12, 5, 10, 7], 12).unwrap();
/// let result = HillClimbing::run(&problem, &HillClimbingConfig::default());
/// assert_eq!(result.state, vec![1, 1, 0, 0]);
/// assert_eq!(result.value, 17);
/// ```
pub struct HillClimbing;

impl HillClimbing {
    /// Climbs from [`SearchProblem::initial_state`].
    #[instrument(level = "debug", skip_all, fields(iterations_limit = config.iterations_limit))]
    pub fn run<P: SearchProblem>(
        problem: &P,
        config: &HillClimbingConfig,
    ) -> SearchResult<P::State, P::Value> {
        let result = Self::climb_from(problem, problem.initial_state(), config.iterations_limit);
        debug!(value = ?result.value, steps = result.iterations, "hill climbing finished");
        result
    }

    /// Climbs from a caller-supplied start state.
    ///
    /// `iterations_limit` caps the number of improving steps; 0 means no
    /// cap.
    pub fn climb_from<P: SearchProblem>(
        problem: &P,
        start: P::State,
        iterations_limit: usize,
    ) -> SearchResult<P::State, P::Value> {
        let mut result = climb(problem, start, iterations_limit);
        result.state = problem.complete(result.state);
        result
    }
}

/// Executes Hill Climbing with Random Restarts.
///
/// Every restart climbs from [`SearchProblem::generate_random_state`].
/// One seed per restart is drawn from the master RNG before any climb
/// starts, so sequential and parallel runs agree.
pub struct RandomRestarts;

impl RandomRestarts {
    /// Runs random-restart hill climbing seeded from `config.seed`.
    pub fn run<P: SearchProblem>(
        problem: &P,
        config: &RandomRestartsConfig,
    ) -> Result<SearchResult<P::State, P::Value>, Error> {
        let mut rng = rng_from(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs random-restart hill climbing with an explicit random source.
    #[instrument(
        level = "debug",
        skip_all,
        fields(restarts_limit = config.restarts_limit, parallel = config.parallel)
    )]
    pub fn run_with_rng<P: SearchProblem, R: Rng>(
        problem: &P,
        config: &RandomRestartsConfig,
        rng: &mut R,
    ) -> Result<SearchResult<P::State, P::Value>, Error> {
        config.validate().map_err(Error::InvalidConfig)?;

        let seeds: Vec<u64> = (0..config.restarts_limit).map(|_| rng.random()).collect();
        let climbs = run_restarts(problem, &seeds, config.iterations_limit, config.parallel);

        let mut value_history = Vec::with_capacity(climbs.len());
        let mut best: Option<SearchResult<P::State, P::Value>> = None;
        for (index, climb) in climbs.into_iter().enumerate() {
            trace!(restart = index, value = ?climb.value, steps = climb.iterations, "restart finished");
            if best.as_ref().is_none_or(|b| climb.value > b.value) {
                best = Some(climb);
            }
            if let Some(ref b) = best {
                value_history.push(b.value);
            }
        }

        // validate() guarantees at least one restart.
        let best = best.ok_or_else(|| Error::InvalidConfig("no restarts were run".into()))?;
        debug!(value = ?best.value, "random restarts finished");

        Ok(SearchResult {
            state: problem.complete(best.state),
            value: best.value,
            iterations: config.restarts_limit,
            value_history,
        })
    }
}

/// Steepest-ascent climb. The returned state is not yet completed.
fn climb<P: SearchProblem>(
    problem: &P,
    start: P::State,
    iterations_limit: usize,
) -> SearchResult<P::State, P::Value> {
    let mut current = start;
    let mut current_value = problem.value(&current);
    let mut value_history = vec![current_value];
    let mut steps = 0usize;

    loop {
        if iterations_limit > 0 && steps >= iterations_limit {
            break;
        }

        let mut best_neighbor: Option<(P::State, P::Value)> = None;
        for action in problem.actions(&current) {
            let neighbor = problem.result(&current, action);
            let value = problem.value(&neighbor);
            if best_neighbor.as_ref().is_none_or(|(_, best)| value > *best) {
                best_neighbor = Some((neighbor, value));
            }
        }

        match best_neighbor {
            Some((neighbor, value)) if value > current_value => {
                current = neighbor;
                current_value = value;
                steps += 1;
                value_history.push(current_value);
            }
            // Local optimum, or no neighbors at all.
            _ => break,
        }
    }

    SearchResult {
        state: current,
        value: current_value,
        iterations: steps,
        value_history,
    }
}

fn restart<P: SearchProblem>(
    problem: &P,
    seed: u64,
    iterations_limit: usize,
) -> SearchResult<P::State, P::Value> {
    let mut rng = create_rng(seed);
    let start = problem.generate_random_state(&mut rng);
    climb(problem, start, iterations_limit)
}

#[cfg(feature = "parallel")]
fn run_restarts<P: SearchProblem>(
    problem: &P,
    seeds: &[u64],
    iterations_limit: usize,
    parallel: bool,
) -> Vec<SearchResult<P::State, P::Value>> {
    if parallel {
        seeds
            .par_iter()
            .map(|&seed| restart(problem, seed, iterations_limit))
            .collect()
    } else {
        seeds
            .iter()
            .map(|&seed| restart(problem, seed, iterations_limit))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn run_restarts<P: SearchProblem>(
    problem: &P,
    seeds: &[u64],
    iterations_limit: usize,
    _parallel: bool,
) -> Vec<SearchResult<P::State, P::Value>> {
    seeds
        .iter()
        .map(|&seed| restart(problem, seed, iterations_limit))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
