//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, selection strategy, elitism, mutation
/// chance, the generation budget, and parallelism.
///
/// # Defaults
///
/// ```
/// use u_localsearch::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.iterations_limit, 1000);
/// assert_eq!(config.selection, Selection::Roulette);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_localsearch::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Tournament(3))
///     .with_elite_count(2)
///     .with_mutation_chance(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations to run.
    pub iterations_limit: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Number of best individuals copied unchanged into the next
    /// generation. 0 replaces the population wholesale.
    pub elite_count: usize,

    /// Probability of mutating each offspring (0.0–1.0).
    pub mutation_chance: f64,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Only has an effect with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            iterations_limit: 1000,
            selection: Selection::default(),
            elite_count: 0,
            mutation_chance: 0.2,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_iterations_limit(mut self, n: usize) -> Self {
        self.iterations_limit = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the number of elites kept per generation.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the mutation chance.
    pub fn with_mutation_chance(mut self, chance: f64) -> Self {
        self.mutation_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.iterations_limit == 0 {
            return Err("iterations_limit must be at least 1".into());
        }
        if self.elite_count >= self.population_size {
            return Err("elite_count too high: elites fill entire population".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_chance) {
            return Err(format!(
                "mutation_chance must be in [0, 1], got {}",
                self.mutation_chance
            ));
        }
        if let Selection::Tournament(0) = self.selection {
            return Err("tournament size must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.iterations_limit, 1000);
        assert_eq!(config.selection, Selection::Roulette);
        assert_eq!(config.elite_count, 0);
        assert!((config.mutation_chance - 0.2).abs() < 1e-10);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(50)
            .with_iterations_limit(200)
            .with_selection(Selection::Rank)
            .with_elite_count(5)
            .with_mutation_chance(0.1)
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.population_size, 50);
        assert_eq!(config.iterations_limit, 200);
        assert_eq!(config.selection, Selection::Rank);
        assert_eq!(config.elite_count, 5);
        assert!((config.mutation_chance - 0.1).abs() < 1e-10);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_iterations_limit(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_elite_too_high() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_elite_count(10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_out_of_range_chance() {
        let mut config = GaConfig::default();
        config.mutation_chance = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_tournament() {
        let config = GaConfig::default().with_selection(Selection::Tournament(0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clamp_mutation_chance() {
        let config = GaConfig::default().with_mutation_chance(2.0);
        assert!((config.mutation_chance - 1.0).abs() < 1e-10);
        let config = GaConfig::default().with_mutation_chance(-0.5);
        assert!(config.mutation_chance.abs() < 1e-10);
    }
}
