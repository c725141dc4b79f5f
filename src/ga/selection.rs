//! Selection strategies for the GA.
//!
//! Selection determines which individuals are chosen as parents for
//! crossover. Different strategies provide different selection pressure.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use crate::problem::Objective;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// All strategies assume **maximization** (higher fitness = better).
///
/// # Examples
///
/// ```
/// use u_localsearch::ga::Selection;
///
/// // Fitness-proportionate (the default)
/// let sel = Selection::Roulette;
///
/// // Tournament with size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Probability of selection is proportional to fitness. Negative
    /// fitness counts as zero; if every individual scores zero the pick
    /// is uniform.
    ///
    /// # Complexity
    /// O(n) per selection (linear scan)
    #[default]
    Roulette,

    /// Rank-based selection.
    ///
    /// Individuals are sorted by fitness; the best gets weight `n`, the
    /// worst weight 1. Immune to fitness scaling.
    ///
    /// # Complexity
    /// O(n log n) per selection (sort)
    Rank,

    /// Tournament selection: pick `k` individuals at random, select the best.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),
}

impl Selection {
    /// Selects a parent index given the population's fitness values.
    ///
    /// # Panics
    /// Panics if `fitness` is empty.
    pub fn select<V: Objective, R: Rng>(&self, fitness: &[V], rng: &mut R) -> usize {
        assert!(!fitness.is_empty(), "cannot select from empty population");

        match self {
            Selection::Roulette => roulette(fitness, rng),
            Selection::Rank => rank(fitness, rng),
            Selection::Tournament(k) => tournament(fitness, *k, rng),
        }
    }
}

/// Roulette wheel selection over non-negative fitness.
fn roulette<V: Objective, R: Rng>(fitness: &[V], rng: &mut R) -> usize {
    let n = fitness.len();
    if n == 1 {
        return 0;
    }

    let weights: Vec<f64> = fitness.iter().map(|f| f.to_f64().max(0.0)).collect();
    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    // floating-point fallback: last individual with positive weight
    weights.iter().rposition(|&w| w > 0.0).unwrap_or(n - 1)
}

/// Linear ranking: best gets weight n, worst weight 1.
fn rank<V: Objective, R: Rng>(fitness: &[V], rng: &mut R) -> usize {
    let n = fitness.len();
    if n == 1 {
        return 0;
    }

    // Best first
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        fitness[b]
            .partial_cmp(&fitness[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let total = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (rank, &index) in order.iter().enumerate() {
        cumulative += (n - rank) as f64;
        if cumulative > threshold {
            return index;
        }
    }

    order[n - 1]
}

/// Tournament selection: pick k random individuals, return the fittest.
fn tournament<V: Objective, R: Rng>(fitness: &[V], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = fitness.len();

    let mut best = rng.random_range(0..n);
    for _ in 1..k {
        let candidate = rng.random_range(0..n);
        if fitness[candidate] > fitness[best] {
            best = candidate;
        }
    }
    best
}
