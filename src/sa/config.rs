//! SA configuration and cooling schedules.

/// Temperature schedule, as a function of the iteration index `t`.
///
/// # References
///
/// - Exponential: Russell & Norvig, `k · e^(-λt)` schedule
/// - Geometric: standard textbook approach
/// - Linear: fixed-duration cooling
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Exponential decay: `T_t = T_0 · e^(-lambda · t)`.
    Exponential {
        /// Decay rate, positive. Typical: 0.001–0.01.
        lambda: f64,
    },

    /// Geometric cooling: `T_t = T_0 · alpha^t`.
    ///
    /// Typical `alpha`: 0.95–0.999.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Linear cooling from `T_0` towards `T_min` over the iteration budget:
    /// `T_t = T_0 - t · (T_0 - T_min) / iterations_limit`.
    Linear,
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Exponential { lambda: 0.005 }
    }
}

/// Configuration for the Simulated Annealing algorithm.
///
/// # Examples
///
/// ```
/// use u_localsearch::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(50.0)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.995 })
///     .with_iterations_limit(5000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// The run stops early once the temperature drops below this.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Maximum number of iterations (hard budget).
    pub iterations_limit: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 20.0,
            min_temperature: 1e-3,
            cooling: CoolingSchedule::default(),
            iterations_limit: 1000,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_iterations_limit(mut self, n: usize) -> Self {
        self.iterations_limit = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Temperature at iteration `t`.
    pub fn temperature(&self, t: usize) -> f64 {
        let t0 = self.initial_temperature;
        match self.cooling {
            CoolingSchedule::Exponential { lambda } => t0 * (-lambda * t as f64).exp(),
            CoolingSchedule::Geometric { alpha } => t0 * alpha.powf(t as f64),
            CoolingSchedule::Linear => {
                let step = (t0 - self.min_temperature) / self.iterations_limit.max(1) as f64;
                (t0 - t as f64 * step).max(self.min_temperature)
            }
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.iterations_limit == 0 {
            return Err("iterations_limit must be at least 1".into());
        }
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        match self.cooling {
            CoolingSchedule::Exponential { lambda } => {
                if lambda <= 0.0 {
                    return Err(format!("exponential lambda must be positive, got {lambda}"));
                }
            }
            CoolingSchedule::Geometric { alpha } => {
                if alpha <= 0.0 || alpha >= 1.0 {
                    return Err(format!("geometric alpha must be in (0, 1), got {alpha}"));
                }
            }
            CoolingSchedule::Linear => {}
        }
        Ok(())
    }
}
