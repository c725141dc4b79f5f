//! One entry point for all four strategies.
//!
//! Callers that only need "run algorithm X on this problem" use [`solve`]
//! with the flat [`SearchConfig`] tunables instead of the per-algorithm
//! configs.

use crate::error::Error;
use crate::ga::{GaConfig, GaRunner};
use crate::hill_climbing::{HillClimbing, HillClimbingConfig, RandomRestarts, RandomRestartsConfig};
use crate::problem::SearchProblem;
use crate::result::SearchResult;
use crate::sa::{SaConfig, SaRunner};
use std::fmt;
use std::str::FromStr;

/// The available search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    HillClimbing,
    HillClimbingRandomRestarts,
    SimulatedAnnealing,
    Genetic,
}

impl Algorithm {
    /// Every strategy, in presentation order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::HillClimbing,
        Algorithm::HillClimbingRandomRestarts,
        Algorithm::SimulatedAnnealing,
        Algorithm::Genetic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::HillClimbing => "hill_climbing",
            Algorithm::HillClimbingRandomRestarts => "hill_climbing_random_restarts",
            Algorithm::SimulatedAnnealing => "simulated_annealing",
            Algorithm::Genetic => "genetic",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Caller-facing tunables shared by all strategies.
///
/// Each strategy reads only the fields that apply to it:
///
/// | Field              | Used by                                  |
/// |--------------------|------------------------------------------|
/// | `restarts_limit`   | random restarts                          |
/// | `iterations_limit` | simulated annealing, genetic (generations) |
/// | `mutation_chance`  | genetic                                  |
/// | `seed`             | every randomized strategy                |
///
/// # Examples
///
/// ```
/// use u_localsearch::strategy::SearchConfig;
///
/// let config = SearchConfig::default().with_seed(42);
/// assert_eq!(config.restarts_limit, 100);
/// assert_eq!(config.iterations_limit, 1000);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub restarts_limit: usize,
    pub iterations_limit: usize,
    pub mutation_chance: f64,
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            restarts_limit: 100,
            iterations_limit: 1000,
            mutation_chance: 0.2,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_restarts_limit(mut self, n: usize) -> Self {
        self.restarts_limit = n;
        self
    }

    pub fn with_iterations_limit(mut self, n: usize) -> Self {
        self.iterations_limit = n;
        self
    }

    pub fn with_mutation_chance(mut self, chance: f64) -> Self {
        self.mutation_chance = chance.clamp(0.0, 1.0);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Plain hill climbing runs until a local optimum.
    pub fn to_hill_climbing_config(&self) -> HillClimbingConfig {
        HillClimbingConfig::default()
    }

    pub fn to_random_restarts_config(&self) -> RandomRestartsConfig {
        RandomRestartsConfig {
            restarts_limit: self.restarts_limit,
            seed: self.seed,
            ..RandomRestartsConfig::default()
        }
    }

    pub fn to_sa_config(&self) -> SaConfig {
        SaConfig {
            iterations_limit: self.iterations_limit,
            seed: self.seed,
            ..SaConfig::default()
        }
    }

    pub fn to_ga_config(&self) -> GaConfig {
        GaConfig {
            iterations_limit: self.iterations_limit,
            mutation_chance: self.mutation_chance,
            seed: self.seed,
            ..GaConfig::default()
        }
    }
}

/// Runs `algorithm` on `problem`.
///
/// # Examples
///
/// ```
/// use u_localsearch::knapsack::Knapsack;
/// use u_localsearch::strategy::{solve, Algorithm, SearchConfig};
///
/// let problem = Knapsack::from_columns(&[5, 3, 7, 2], &[12, 5, 10, 7], 12).unwrap();
/// let config = SearchConfig::default().with_seed(1);
/// for algorithm in Algorithm::ALL {
///     let result = solve(&problem, algorithm, &config).unwrap();
///     assert_eq!(result.state.len(), 4);
///     assert!(result.value <= 24);
/// }
/// ```
pub fn solve<P: SearchProblem>(
    problem: &P,
    algorithm: Algorithm,
    config: &SearchConfig,
) -> Result<SearchResult<P::State, P::Value>, Error> {
    tracing::debug!(%algorithm, "solving");
    match algorithm {
        Algorithm::HillClimbing => Ok(HillClimbing::run(
            problem,
            &config.to_hill_climbing_config(),
        )),
        Algorithm::HillClimbingRandomRestarts => {
            RandomRestarts::run(problem, &config.to_random_restarts_config())
        }
        Algorithm::SimulatedAnnealing => SaRunner::run(problem, &config.to_sa_config()),
        Algorithm::Genetic => GaRunner::run(problem, &config.to_ga_config()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knapsack::Knapsack;

    fn scenario_a() -> Knapsack {
        Knapsack::from_columns(&[5, 3, 7, 2], &[12, 5, 10, 7], 12).unwrap()
    }

    fn scenario_b() -> Knapsack {
        Knapsack::from_columns(&[10, 20, 30], &[60, 100, 120], 50).unwrap()
    }

    /// Best feasible value by enumerating every subset.
    fn brute_force(problem: &Knapsack) -> i64 {
        let n = problem.len();
        (0u32..(1 << n))
            .map(|mask| {
                let state: Vec<u8> = (0..n).map(|i| ((mask >> i) & 1) as u8).collect();
                problem.value(&state)
            })
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_algorithm_round_trips_through_str() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_unknown_algorithm() {
        assert_eq!(
            "tabu".parse::<Algorithm>(),
            Err(Error::UnknownAlgorithm("tabu".into()))
        );
    }

    #[test]
    fn test_config_mapping() {
        let config = SearchConfig::default()
            .with_restarts_limit(7)
            .with_iterations_limit(300)
            .with_mutation_chance(0.4)
            .with_seed(11);

        assert_eq!(config.to_random_restarts_config().restarts_limit, 7);
        assert_eq!(config.to_random_restarts_config().seed, Some(11));
        assert_eq!(config.to_sa_config().iterations_limit, 300);
        let ga = config.to_ga_config();
        assert_eq!(ga.iterations_limit, 300);
        assert!((ga.mutation_chance - 0.4).abs() < 1e-12);
        assert_eq!(ga.seed, Some(11));
        assert_eq!(config.to_hill_climbing_config().iterations_limit, 0);
    }

    #[test]
    fn test_scenario_a_all_algorithms() {
        let problem = scenario_a();
        let optimum = brute_force(&problem);
        assert_eq!(optimum, 24);

        let config = SearchConfig::default().with_seed(42);
        for algorithm in Algorithm::ALL {
            let result = solve(&problem, algorithm, &config).unwrap();
            assert_eq!(result.state.len(), 4, "{algorithm}");
            assert!(result.value >= 0 && result.value <= optimum, "{algorithm}");
            assert_eq!(result.value, problem.value(&result.state), "{algorithm}");
            assert!(problem.is_feasible(&result.state), "{algorithm}");
        }

        let plain = solve(&problem, Algorithm::HillClimbing, &config).unwrap();
        let restarts = solve(&problem, Algorithm::HillClimbingRandomRestarts, &config).unwrap();
        assert!(restarts.value >= plain.value);
    }

    #[test]
    fn test_scenario_b_best_algorithm_reaches_optimum() {
        let problem = scenario_b();
        assert_eq!(brute_force(&problem), 220);

        let config = SearchConfig::default().with_seed(42);
        let best = Algorithm::ALL
            .into_iter()
            .map(|algorithm| solve(&problem, algorithm, &config).unwrap().value)
            .max();
        assert_eq!(best, Some(220));
    }

    #[test]
    fn test_same_seed_same_result() {
        let problem = scenario_a();
        let config = SearchConfig::default().with_seed(2024);
        for algorithm in Algorithm::ALL {
            let first = solve(&problem, algorithm, &config).unwrap();
            let second = solve(&problem, algorithm, &config).unwrap();
            assert_eq!(first, second, "{algorithm} is not reproducible");
        }
    }

    #[test]
    fn test_zero_capacity_yields_zero() {
        let problem = Knapsack::from_columns(&[5, 3, 7, 2], &[12, 5, 10, 7], 0).unwrap();
        let config = SearchConfig::default().with_seed(1);
        for algorithm in Algorithm::ALL {
            let result = solve(&problem, algorithm, &config).unwrap();
            assert_eq!(result.value, 0, "{algorithm}");
        }
    }

    #[test]
    fn test_empty_instance_yields_empty_state() {
        let problem = Knapsack::new(vec![], 10).unwrap();
        let config = SearchConfig::default().with_seed(1);
        for algorithm in Algorithm::ALL {
            let (state, value) = solve(&problem, algorithm, &config).unwrap().into_pair();
            assert!(state.is_empty(), "{algorithm}");
            assert_eq!(value, 0, "{algorithm}");
        }
    }

    #[test]
    fn test_invalid_tunables_are_rejected() {
        let config = SearchConfig::default().with_restarts_limit(0);
        let err = solve(&scenario_a(), Algorithm::HillClimbingRandomRestarts, &config).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
