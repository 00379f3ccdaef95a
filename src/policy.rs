//! Epsilon-greedy action selection.

use rand::{Rng, seq::IndexedRandom};

use crate::{
    table::ActionValueTable,
    types::Action,
};

/// Default exploration rate.
pub const DEFAULT_EPSILON: f64 = 0.05;

/// Epsilon-greedy selection over an action-value table.
///
/// With probability 1 - ε the policy exploits: the candidate set is every
/// action tied at the maximum value across the whole table. With probability
/// ε it explores: the candidate set is all four actions. Illegal actions are
/// removed only *after* the candidate set is formed, so an illegal action can
/// be "the" maximum and get filtered out, with remaining tied actions still
/// eligible.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use qslide::{Action, ActionValueTable, EpsilonGreedy};
///
/// let policy = EpsilonGreedy::default();
/// let table = ActionValueTable::from_values([0.1, 3.0, -1.0, 0.4]);
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let action = policy.select(&mut rng, &table, &[]);
/// assert!(Action::ALL.contains(&action));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EpsilonGreedy {
    epsilon: f64,
    fallback: Action,
}

impl EpsilonGreedy {
    /// Create a policy with the given exploration rate and last-resort
    /// fallback action.
    pub fn new(epsilon: f64, fallback: Action) -> Self {
        Self { epsilon, fallback }
    }

    /// Select an action for a configuration with the given value table and
    /// set of illegal actions.
    ///
    /// Selection order:
    /// 1. exploit (draw > ε): candidates are all actions tied at the
    ///    table-wide maximum; explore (draw <= ε): candidates are all
    ///    actions;
    /// 2. remove illegal actions from the candidates;
    /// 3. if empty, fall back to the full action set minus illegals;
    /// 4. if still empty, return the fallback action;
    /// 5. otherwise pick uniformly at random among the survivors.
    pub fn select<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        table: &ActionValueTable,
        illegal: &[Action],
    ) -> Action {
        let candidates = if rng.random::<f64>() > self.epsilon {
            table.best_actions()
        } else {
            Action::ALL.to_vec()
        };

        let legal: Vec<Action> = candidates
            .into_iter()
            .filter(|action| !illegal.contains(action))
            .collect();

        let legal = if legal.is_empty() {
            Action::ALL
                .into_iter()
                .filter(|action| !illegal.contains(action))
                .collect()
        } else {
            legal
        };

        legal.choose(rng).copied().unwrap_or(self.fallback)
    }

    /// Uniformly random action from the fixed set.
    ///
    /// Used for the degenerate bootstrap case where no configuration is
    /// supplied at all; the value table is bypassed entirely.
    pub fn random_action<R: Rng + ?Sized>(rng: &mut R) -> Action {
        // ALL is non-empty, so choose cannot fail.
        *Action::ALL.choose(rng).unwrap_or(&Action::FALLBACK)
    }
}

impl Default for EpsilonGreedy {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON, Action::FALLBACK)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn forced_exploit() -> EpsilonGreedy {
        // A draw in [0, 1) is greater than a negative epsilon with
        // certainty, so the exploitation branch is always taken.
        EpsilonGreedy::new(-1.0, Action::FALLBACK)
    }

    #[test]
    fn exploitation_samples_only_tied_maxima() {
        let policy = forced_exploit();
        let table = ActionValueTable::from_values([5.0, 5.0, 1.0, 1.0]);
        let mut rng = StdRng::seed_from_u64(3);

        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(policy.select(&mut rng, &table, &[]));
        }
        assert_eq!(
            seen,
            HashSet::from([Action::Up, Action::Right]),
            "only the tied maxima should ever be selected"
        );
    }

    #[test]
    fn illegal_actions_are_never_returned() {
        let policy = EpsilonGreedy::default();
        let table = ActionValueTable::from_values([1.0, 2.0, 3.0, 4.0]);
        let illegal = [Action::Left, Action::Down];
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..500 {
            let action = policy.select(&mut rng, &table, &illegal);
            assert!(!illegal.contains(&action), "returned illegal {action}");
        }
    }

    #[test]
    fn illegal_maximum_falls_through_to_tied_action() {
        // Left and Up tie at the maximum; Left is illegal, so exploitation
        // must always land on Up.
        let policy = forced_exploit();
        let table = ActionValueTable::from_values([7.0, 0.0, 0.0, 7.0]);
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..200 {
            assert_eq!(policy.select(&mut rng, &table, &[Action::Left]), Action::Up);
        }
    }

    #[test]
    fn illegal_maximum_without_ties_falls_back_to_remaining_legal_set() {
        // The unique maximum is illegal; the exploit candidates empty out
        // and selection falls back to the full set minus illegals.
        let policy = forced_exploit();
        let table = ActionValueTable::from_values([9.0, 0.0, 0.0, 0.0]);
        let mut rng = StdRng::seed_from_u64(13);

        for _ in 0..200 {
            let action = policy.select(&mut rng, &table, &[Action::Up]);
            assert_ne!(action, Action::Up);
        }
    }

    #[test]
    fn all_actions_illegal_returns_fallback() {
        let policy = EpsilonGreedy::default();
        let table = ActionValueTable::from_values([1.0, 2.0, 3.0, 4.0]);
        let mut rng = StdRng::seed_from_u64(17);

        let action = policy.select(&mut rng, &table, &Action::ALL);
        assert_eq!(action, Action::FALLBACK);
    }

    #[test]
    fn exploration_reaches_non_maximal_actions() {
        // epsilon = 1.0 forces exploration on (almost) every draw.
        let policy = EpsilonGreedy::new(1.0, Action::FALLBACK);
        let table = ActionValueTable::from_values([100.0, 0.0, 0.0, 0.0]);
        let mut rng = StdRng::seed_from_u64(19);

        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(policy.select(&mut rng, &table, &[]));
        }
        assert_eq!(seen.len(), 4, "exploration should reach every action");
    }

    #[test]
    fn random_action_covers_the_fixed_set() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(EpsilonGreedy::random_action(&mut rng));
        }
        assert_eq!(seen.len(), 4);
    }
}
