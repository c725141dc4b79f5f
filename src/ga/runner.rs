//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.

use super::config::GaConfig;
use crate::error::Error;
use crate::problem::SearchProblem;
use crate::random::rng_from;
use crate::result::SearchResult;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument, trace};

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_localsearch::ga::{GaConfig, GaRunner};
/// use u_localsearch::knapsack::Knapsack;
///
/// let problem = Knapsack::from_columns(&[10, 20, 30], &[60, 100, 120], 50).unwrap();
/// let config = GaConfig::default().with_iterations_limit(50).with_seed(42);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert!(result.value <= 220);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA seeded from `config.seed`.
    pub fn run<P: SearchProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<SearchResult<P::State, P::Value>, Error> {
        let mut rng = rng_from(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA with an explicit random source.
    ///
    /// The best individual is tracked across the initial population and
    /// every generation, so it survives even without elitism.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            population_size = config.population_size,
            generations = config.iterations_limit,
            elite_count = config.elite_count
        )
    )]
    pub fn run_with_rng<P: SearchProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<SearchResult<P::State, P::Value>, Error> {
        config.validate().map_err(Error::InvalidConfig)?;

        // 1. Initialize and evaluate population
        let mut population: Vec<P::State> = (0..config.population_size)
            .map(|_| problem.generate_random_state(rng))
            .collect();
        let mut fitness = evaluate_population(problem, &population, config.parallel);

        // 2. Track best
        let order = ranking(&fitness);
        let mut best = population[order[0]].clone();
        let mut best_value = fitness[order[0]];
        let mut value_history = Vec::with_capacity(config.iterations_limit + 1);
        value_history.push(best_value);

        // 3. Evolutionary loop
        for generation in 0..config.iterations_limit {
            let order = ranking(&fitness);

            // Elite preservation
            let mut next_gen: Vec<P::State> = order[..config.elite_count]
                .iter()
                .map(|&i| population[i].clone())
                .collect();

            // Generate offspring
            while next_gen.len() < config.population_size {
                let p1 = config.selection.select(&fitness, rng);
                let p2 = config.selection.select(&fitness, rng);

                let mut child = problem.crossover(&population[p1], &population[p2], rng);
                if rng.random_range(0.0..1.0) < config.mutation_chance {
                    child = problem.mutate(&child, rng);
                }

                next_gen.push(child);
            }

            population = next_gen;
            fitness = evaluate_population(problem, &population, config.parallel);

            // Update best
            let gen_best = ranking(&fitness)[0];
            if fitness[gen_best] > best_value {
                best = population[gen_best].clone();
                best_value = fitness[gen_best];
                trace!(generation = generation + 1, value = ?best_value, "new best");
            }

            value_history.push(best_value);
        }

        debug!(value = ?best_value, generations = config.iterations_limit, "genetic algorithm finished");

        Ok(SearchResult {
            state: problem.complete(best),
            value: best_value,
            iterations: config.iterations_limit,
            value_history,
        })
    }
}

/// Population indices, fittest first. Ties keep population order.
fn ranking<V: PartialOrd>(fitness: &[V]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fitness.len()).collect();
    order.sort_by(|&a, &b| {
        fitness[b]
            .partial_cmp(&fitness[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}

/// Evaluate all individuals in the population.
#[cfg(feature = "parallel")]
fn evaluate_population<P: SearchProblem>(
    problem: &P,
    population: &[P::State],
    parallel: bool,
) -> Vec<P::Value> {
    if parallel {
        population.par_iter().map(|s| problem.value(s)).collect()
    } else {
        population.iter().map(|s| problem.value(s)).collect()
    }
}

/// Evaluate all individuals in the population.
#[cfg(not(feature = "parallel"))]
fn evaluate_population<P: SearchProblem>(
    problem: &P,
    population: &[P::State],
    _parallel: bool,
) -> Vec<P::Value> {
    population.iter().map(|s| problem.value(s)).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Selection;
    use crate::knapsack::{Item, Knapsack};
    use crate::random::create_rng;

    fn scenario_a() -> Knapsack {
        Knapsack::from_columns(&[5, 3, 7, 2], &[12, 5, 10, 7], 12).unwrap()
    }

    fn scenario_b() -> Knapsack {
        Knapsack::from_columns(&[10, 20, 30], &[60, 100, 120], 50).unwrap()
    }

    /// Unit weights and values with room for everything: OneMax.
    fn one_max(n: usize) -> Knapsack {
        Knapsack::new(vec![Item::new(1, 1); n], n as i64).unwrap()
    }

    #[test]
    fn test_finds_scenario_b_optimum() {
        let config = GaConfig::default().with_seed(42);
        let result = GaRunner::run(&scenario_b(), &config).unwrap();
        assert_eq!(result.value, 220);
        assert_eq!(result.state, vec![0, 1, 1]);
    }

    #[test]
    fn test_finds_scenario_a_optimum() {
        let problem = scenario_a();
        let config = GaConfig::default().with_seed(42);
        let result = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.value, 24);
        assert_eq!(result.state, vec![1, 1, 0, 1]);
        assert!(problem.is_feasible(&result.state));
    }

    #[test]
    fn test_onemax_convergence_with_elitism() {
        let config = GaConfig::default()
            .with_population_size(50)
            .with_iterations_limit(300)
            .with_selection(Selection::Tournament(3))
            .with_elite_count(2)
            .with_mutation_chance(0.3)
            .with_seed(42);

        let result = GaRunner::run(&one_max(20), &config).unwrap();

        assert!(
            result.value >= 18,
            "expected value >= 18 for 20-bit OneMax, got {}",
            result.value
        );
    }

    #[test]
    fn test_all_selection_strategies() {
        for selection in [
            Selection::Roulette,
            Selection::Rank,
            Selection::Tournament(3),
        ] {
            let config = GaConfig::default()
                .with_population_size(30)
                .with_iterations_limit(50)
                .with_selection(selection)
                .with_seed(42);

            let result = GaRunner::run(&one_max(10), &config).unwrap();

            assert!(
                result.value >= 7,
                "selection {:?} should find most bits, got {}",
                selection,
                result.value
            );
        }
    }

    #[test]
    fn test_value_history() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_iterations_limit(30)
            .with_seed(42);

        let result = GaRunner::run(&scenario_a(), &config).unwrap();

        // Initial population + one entry per generation
        assert_eq!(result.value_history.len(), 31);
        assert_eq!(result.iterations, 30);
        for window in result.value_history.windows(2) {
            assert!(window[1] >= window[0]);
        }
        assert_eq!(result.value_history.last(), Some(&result.value));
    }

    #[test]
    fn test_same_seed_same_result() {
        let problem = scenario_a();
        let config = GaConfig::default().with_iterations_limit(100).with_seed(9);
        let first = GaRunner::run(&problem, &config).unwrap();
        let second = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_explicit_rng_matches_seed() {
        let problem = scenario_a();
        let config = GaConfig::default().with_iterations_limit(20).with_seed(5);
        let seeded = GaRunner::run(&problem, &config).unwrap();
        let mut rng = create_rng(5);
        let explicit = GaRunner::run_with_rng(&problem, &config, &mut rng).unwrap();
        assert_eq!(seeded, explicit);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let problem = scenario_a();
        let config = GaConfig::default().with_iterations_limit(50).with_seed(3);
        let sequential = GaRunner::run(&problem, &config).unwrap();
        let parallel = GaRunner::run(&problem, &config.clone().with_parallel(true)).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_empty_instance() {
        let problem = Knapsack::new(vec![], 10).unwrap();
        let config = GaConfig::default().with_iterations_limit(10).with_seed(1);
        let result = GaRunner::run(&problem, &config).unwrap();
        assert!(result.state.is_empty());
        assert_eq!(result.value, 0);
    }

    #[test]
    fn test_single_item_instance() {
        // No crossover split exists for one flag; mutation still explores.
        let problem = Knapsack::from_columns(&[4], &[9], 5).unwrap();
        let config = GaConfig::default().with_iterations_limit(20).with_seed(1);
        let result = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.value, 9);
        assert_eq!(result.state, vec![1]);
    }

    #[test]
    fn test_zero_capacity() {
        let problem = Knapsack::from_columns(&[5, 3, 7], &[10, 20, 30], 0).unwrap();
        let config = GaConfig::default().with_iterations_limit(20).with_seed(1);
        let result = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.value, 0);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = GaConfig::default().with_population_size(1);
        let err = GaRunner::run(&scenario_a(), &config).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_ranking_orders_best_first() {
        assert_eq!(ranking(&[3i64, 9, 1, 9]), vec![1, 3, 0, 2]);
    }
}
