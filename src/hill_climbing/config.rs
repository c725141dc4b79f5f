//! Hill climbing configuration.

/// Configuration for plain Hill Climbing.
///
/// # Examples
///
/// ```
/// use u_localsearch::hill_climbing::HillClimbingConfig;
///
/// let config = HillClimbingConfig::default().with_iterations_limit(50);
/// assert_eq!(config.iterations_limit, 50);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbingConfig {
    /// Maximum number of improving steps. 0 = climb until a local optimum.
    pub iterations_limit: usize,
}

impl HillClimbingConfig {
    pub fn with_iterations_limit(mut self, n: usize) -> Self {
        self.iterations_limit = n;
        self
    }
}

/// Configuration for Hill Climbing with Random Restarts.
///
/// # Examples
///
/// ```
/// use u_localsearch::hill_climbing::RandomRestartsConfig;
///
/// let config = RandomRestartsConfig::default()
///     .with_restarts_limit(200)
///     .with_seed(7);
/// assert_eq!(config.restarts_limit, 200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomRestartsConfig {
    /// Number of independent climbs.
    pub restarts_limit: usize,

    /// Step cap for each climb. 0 = climb until a local optimum.
    pub iterations_limit: usize,

    /// Whether to run restarts in parallel using rayon.
    ///
    /// Only has an effect with the `parallel` feature. Results are
    /// identical either way for a given seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for RandomRestartsConfig {
    fn default() -> Self {
        Self {
            restarts_limit: 100,
            iterations_limit: 0,
            parallel: false,
            seed: None,
        }
    }
}

impl RandomRestartsConfig {
    /// Sets the number of restarts.
    pub fn with_restarts_limit(mut self, n: usize) -> Self {
        self.restarts_limit = n;
        self
    }

    /// Sets the step cap of each climb (0 to disable).
    pub fn with_iterations_limit(mut self, n: usize) -> Self {
        self.iterations_limit = n;
        self
    }

    /// Enables or disables parallel restarts.
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
    pub fn validate(&self) -> Result<(), String> {
        if self.restarts_limit == 0 {
            return Err("restarts_limit must be at least 1".into());
        }
        Ok(())
    }
}
