//! 0/1 knapsack as a [`SearchProblem`].
//!
//! A state is a vector of inclusion flags, one per item in item order.
//! The neighborhood builds that vector incrementally: [`KnapsackAction::Add`]
//! appends an "include" flag for the next item and [`KnapsackAction::Remove`]
//! drops the last flag. Hill climbing therefore walks item prefixes rather
//! than flipping arbitrary bits, which changes which local optima are
//! reachable.
//!
//! The objective is a hard cutoff: any state heavier than the capacity
//! scores 0, regardless of its value. This leaves flat zero plateaus in
//! the landscape that local search cannot see across.

use crate::error::Error;
use crate::problem::SearchProblem;
use rand::Rng;

/// An item that can be packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub weight: i64,
    pub value: i64,
}

impl Item {
    pub fn new(weight: i64, value: i64) -> Self {
        Self { weight, value }
    }
}

impl From<(i64, i64)> for Item {
    fn from((weight, value): (i64, i64)) -> Self {
        Self { weight, value }
    }
}

/// Neighborhood moves over an inclusion vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnapsackAction {
    /// Append an "include" flag for the next item.
    Add,
    /// Drop the last flag.
    Remove,
}

/// A validated knapsack instance.
///
/// Read-only after construction, so one instance can back any number of
/// concurrent searches.
///
/// # Examples
///
/// ```
/// use u_localsearch::knapsack::{Item, Knapsack};
/// use u_localsearch::problem::SearchProblem;
///
/// let problem = Knapsack::new(
///     vec![Item::new(10, 60), Item::new(20, 100), Item::new(30, 120)],
///     50,
/// )
/// .unwrap();
///
/// assert_eq!(problem.value(&vec![0, 1, 1]), 220);
/// assert_eq!(problem.value(&vec![1, 1, 1]), 0); // over capacity
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knapsack {
    items: Vec<Item>,
    capacity: i64,
}

impl Knapsack {
    /// Builds an instance, rejecting negative capacities, weights and values.
    pub fn new(items: Vec<Item>, capacity: i64) -> Result<Self, Error> {
        if capacity < 0 {
            return Err(Error::NegativeCapacity(capacity));
        }
        for (index, item) in items.iter().enumerate() {
            if item.weight < 0 {
                return Err(Error::NegativeWeight {
                    index,
                    weight: item.weight,
                });
            }
            if item.value < 0 {
                return Err(Error::NegativeValue {
                    index,
                    value: item.value,
                });
            }
        }
        Ok(Self { items, capacity })
    }

    /// Builds an instance from parallel weight and value columns.
    pub fn from_columns(weights: &[i64], values: &[i64], capacity: i64) -> Result<Self, Error> {
        if weights.len() != values.len() {
            return Err(Error::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        let items = weights
            .iter()
            .zip(values)
            .map(|(&weight, &value)| Item { weight, value })
            .collect();
        Self::new(items, capacity)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Summed weight of the items included by `state`.
    pub fn weight(&self, state: &[u8]) -> i64 {
        self.included(state)
            .fold(0i64, |acc, item| acc.saturating_add(item.weight))
    }

    /// Whether `state` fits within the capacity.
    pub fn is_feasible(&self, state: &[u8]) -> bool {
        self.weight(state) <= self.capacity
    }

    /// Items selected by `state`. Flags past the end of `state` count as
    /// excluded; flags past the last item are ignored.
    fn included<'a>(&'a self, state: &'a [u8]) -> impl Iterator<Item = &'a Item> + 'a {
        self.items
            .iter()
            .zip(state)
            .filter(|(_, &flag)| flag != 0)
            .map(|(item, _)| item)
    }
}

impl SearchProblem for Knapsack {
    type State = Vec<u8>;
    type Action = KnapsackAction;
    type Value = i64;

    fn initial_state(&self) -> Vec<u8> {
        Vec::new()
    }

    fn actions(&self, state: &Vec<u8>) -> Vec<KnapsackAction> {
        let mut actions = Vec::with_capacity(2);
        if state.len() < self.items.len() {
            actions.push(KnapsackAction::Add);
        }
        if !state.is_empty() {
            actions.push(KnapsackAction::Remove);
        }
        actions
    }

    fn result(&self, state: &Vec<u8>, action: KnapsackAction) -> Vec<u8> {
        let mut next = state.clone();
        match action {
            KnapsackAction::Add => {
                if next.len() < self.items.len() {
                    next.push(1);
                }
            }
            KnapsackAction::Remove => {
                next.pop();
            }
        }
        next
    }

    fn value(&self, state: &Vec<u8>) -> i64 {
        let (weight, value) = self.included(state).fold((0i64, 0i64), |(w, v), item| {
            (w.saturating_add(item.weight), v.saturating_add(item.value))
        });
        if weight > self.capacity {
            0
        } else {
            value
        }
    }

    fn generate_random_state<R: Rng>(&self, rng: &mut R) -> Vec<u8> {
        self.items
            .iter()
            .map(|_| u8::from(rng.random_bool(0.5)))
            .collect()
    }

    /// Single-point crossover: `state1[..i] ++ state2[i..]` with `i`
    /// uniform in `[1, len - 1]`.
    ///
    /// Parents shorter than two flags, or of different lengths, have no
    /// valid split; a copy of `state1` is returned.
    fn crossover<R: Rng>(&self, state1: &Vec<u8>, state2: &Vec<u8>, rng: &mut R) -> Vec<u8> {
        let n = state1.len();
        if n < 2 || state2.len() != n {
            return state1.clone();
        }
        let index = rng.random_range(1..n);
        let mut child = Vec::with_capacity(n);
        child.extend_from_slice(&state1[..index]);
        child.extend_from_slice(&state2[index..]);
        child
    }

    /// Flips one uniformly chosen flag.
    fn mutate<R: Rng>(&self, state: &Vec<u8>, rng: &mut R) -> Vec<u8> {
        let mut next = state.clone();
        if next.is_empty() {
            return next;
        }
        let index = rng.random_range(0..next.len());
        next[index] = if next[index] == 0 { 1 } else { 0 };
        next
    }

    /// Pads a partially built state with "exclude" flags up to the item
    /// count.
    fn complete(&self, mut state: Vec<u8>) -> Vec<u8> {
        if state.len() < self.items.len() {
            state.resize(self.items.len(), 0);
        }
        state
    }
}
