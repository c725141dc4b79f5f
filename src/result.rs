//! The uniform outcome of every strategy.

/// Result of a search run.
///
/// `state` and `value` are the terminal answer. The remaining fields
/// describe how the run went.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult<S, V> {
    /// The best state found, normalised by
    /// [`SearchProblem::complete`](crate::problem::SearchProblem::complete).
    pub state: S,

    /// Objective value of `state`.
    pub value: V,

    /// Steps, restarts, iterations or generations executed, depending on
    /// the strategy.
    pub iterations: usize,

    /// Best value seen so far, recorded after each iteration.
    /// Non-decreasing.
    pub value_history: Vec<V>,
}

impl<S, V: Copy> SearchResult<S, V> {
    /// Returns the `(state, value)` pair, dropping run statistics.
    pub fn into_pair(self) -> (S, V) {
        (self.state, self.value)
    }
}
