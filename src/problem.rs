//! Core trait definitions for the search engine.
//!
//! [`SearchProblem`] is the contract between the generic strategies and a
//! concrete problem: state space, action space, transition function,
//! objective, random initial states, and the genetic operators.
//! [`Objective`] is the marker trait for the scalar being maximized.

use rand::Rng;

/// Marker trait for objective values.
///
/// Objectives must support comparison and be cheaply copyable.
/// **Higher is better** (maximization), unlike the cost-minimizing
/// conventions used elsewhere.
///
/// Built-in implementations exist for `i64`, `u64` and `f64`.
pub trait Objective: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Converts the objective to `f64`, used by acceptance probabilities
    /// and fitness-proportionate selection.
    fn to_f64(self) -> f64;
}

impl Objective for i64 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Objective for u64 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Objective for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

/// Defines a local search problem.
///
/// Implementors describe the problem once; all four strategies
/// (hill climbing, random restarts, simulated annealing, genetic) run
/// against this trait. The operators fall into three groups:
///
/// 1. **Neighborhood**: [`actions`](Self::actions) and [`result`](Self::result),
///    used by hill climbing and simulated annealing.
/// 2. **Evaluation**: [`value`](Self::value), maximized by every strategy.
/// 3. **Generation and recombination**:
///    [`generate_random_state`](Self::generate_random_state),
///    [`crossover`](Self::crossover) and [`mutate`](Self::mutate),
///    used by random restarts and the GA.
///
/// Every operator returns a new state; inputs are never modified.
///
/// # Thread Safety
///
/// `SearchProblem` must be `Send + Sync` because restarts and fitness
/// evaluation may run in parallel when the `parallel` feature is enabled.
pub trait SearchProblem: Send + Sync {
    /// The state representation.
    type State: Clone + Send + Sync + std::fmt::Debug;

    /// A move from one state to a neighbor.
    type Action: Copy + Send + Sync + std::fmt::Debug;

    /// The objective type.
    type Value: Objective;

    /// The state a search starts from when none is supplied
    /// ("not yet started").
    fn initial_state(&self) -> Self::State;

    /// Returns the legal actions from `state`, in a stable order.
    ///
    /// An empty list means `state` has no neighbors.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Applies `action` to `state` and returns the resulting state.
    ///
    /// Must be total: applying an action that is not legal for `state`
    /// returns some state rather than panicking.
    fn result(&self, state: &Self::State, action: Self::Action) -> Self::State;

    /// Evaluates a state. Higher is better.
    fn value(&self, state: &Self::State) -> Self::Value;

    /// Produces a random complete state.
    fn generate_random_state<R: Rng>(&self, rng: &mut R) -> Self::State;

    /// Recombines two parents into one child.
    fn crossover<R: Rng>(
        &self,
        state1: &Self::State,
        state2: &Self::State,
        rng: &mut R,
    ) -> Self::State;

    /// Returns a randomly perturbed copy of `state`.
    fn mutate<R: Rng>(&self, state: &Self::State, rng: &mut R) -> Self::State;

    /// Normalises a terminal state before it is handed back to the caller.
    ///
    /// Must not change the state's value. The default is the identity.
    fn complete(&self, state: Self::State) -> Self::State {
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objective_to_f64() {
        assert_eq!(42i64.to_f64(), 42.0);
        assert_eq!(7u64.to_f64(), 7.0);
        assert_eq!(1.5f64.to_f64(), 1.5);
        assert_eq!((-3i64).to_f64(), -3.0);
    }
}
