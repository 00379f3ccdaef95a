//! Per-configuration action-value table.

use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use crate::types::{ACTION_COUNT, Action};

/// Mapping from each of the four actions to its learned value.
///
/// A table always holds exactly one value per action in the fixed set; the
/// array representation makes the invariant structural. Fresh tables are
/// initialized from a standard normal distribution so that early selections
/// break ties randomly instead of favoring the first action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionValueTable {
    values: [f64; ACTION_COUNT],
}

impl ActionValueTable {
    /// Create a table with each value drawn independently from N(0, 1).
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut values = [0.0; ACTION_COUNT];
        for value in &mut values {
            *value = rng.sample(StandardNormal);
        }
        Self { values }
    }

    /// Create a table from explicit per-action values, in id order
    /// (Up, Right, Down, Left).
    pub fn from_values(values: [f64; ACTION_COUNT]) -> Self {
        Self { values }
    }

    /// Value learned for `action`.
    pub fn get(&self, action: Action) -> f64 {
        self.values[action.index()]
    }

    /// Replace the value for `action`.
    pub fn set(&mut self, action: Action, value: f64) {
        self.values[action.index()] = value;
    }

    /// Maximum value across all actions, legality not considered.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// All actions attaining [`max_value`](Self::max_value), ties included.
    pub fn best_actions(&self) -> Vec<Action> {
        let max = self.max_value();
        Action::ALL
            .into_iter()
            .filter(|action| self.get(*action) == max)
            .collect()
    }

    /// Iterate over `(action, value)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (Action, f64)> + '_ {
        Action::ALL.into_iter().map(|action| (action, self.get(action)))
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn random_table_has_one_finite_value_per_action() {
        let mut rng = StdRng::seed_from_u64(7);
        let table = ActionValueTable::random(&mut rng);
        for action in Action::ALL {
            assert!(table.get(action).is_finite());
        }
    }

    #[test]
    fn random_values_are_spread() {
        // With 100 tables the odds of all values coinciding are nil; this
        // guards against a constant-initialization regression.
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            let table = ActionValueTable::random(&mut rng);
            for action in Action::ALL {
                seen.insert(table.get(action).to_bits());
            }
        }
        assert!(seen.len() > 300, "expected distinct samples, got {}", seen.len());
    }

    #[test]
    fn max_value_and_best_actions_with_ties() {
        let table = ActionValueTable::from_values([5.0, 5.0, 1.0, 1.0]);
        assert_eq!(table.max_value(), 5.0);
        assert_eq!(table.best_actions(), vec![Action::Up, Action::Right]);
    }

    #[test]
    fn set_replaces_single_entry() {
        let mut table = ActionValueTable::from_values([0.0, 0.0, 0.0, 0.0]);
        table.set(Action::Left, 2.5);
        assert_eq!(table.get(Action::Left), 2.5);
        assert_eq!(table.get(Action::Up), 0.0);
    }

    #[test]
    fn iter_visits_every_action_in_id_order() {
        let table = ActionValueTable::from_values([0.5, 1.5, 2.5, 3.5]);
        let pairs: Vec<_> = table.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Action::Up, 0.5),
                (Action::Right, 1.5),
                (Action::Down, 2.5),
                (Action::Left, 3.5),
            ]
        );
    }
}
