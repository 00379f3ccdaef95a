//! One-step temporal-difference value update.

use std::sync::Arc;

use tracing::debug;

use crate::{
    Result,
    error::Error,
    identifiers::StateKey,
    ports::ValueStore,
    types::Action,
};

/// Default learning-rate-like coefficient.
pub const DEFAULT_ALPHA: f64 = 0.1;
/// Default discount factor.
pub const DEFAULT_GAMMA: f64 = 0.9;

/// One-step bootstrapped value updater.
///
/// The update rule deviates from canonical Q-learning: alpha scales only the
/// bootstrap term, while the raw reward is added unscaled.
///
/// ```text
/// delta      = alpha * (gamma * max(next_table) - current[action])
/// adjustment = reward + delta
/// current[action] += adjustment
/// ```
///
/// This shape is the behavioral contract being reproduced and must not be
/// "corrected" to the textbook formula.
pub struct TdLearner {
    store: Arc<dyn ValueStore>,
    alpha: f64,
    gamma: f64,
}

impl TdLearner {
    /// Create a learner over the given store with default coefficients.
    pub fn new(store: Arc<dyn ValueStore>) -> Self {
        Self::with_coefficients(store, DEFAULT_ALPHA, DEFAULT_GAMMA)
    }

    /// Create a learner with explicit alpha and gamma.
    pub fn with_coefficients(store: Arc<dyn ValueStore>, alpha: f64, gamma: f64) -> Self {
        Self { store, alpha, gamma }
    }

    /// Apply one update for the transition `state --action/reward--> next_state`
    /// and persist the revised table. Returns the new value for the taken
    /// action.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownState`] if `state` has no existing record: a
    /// reward arriving for an unobserved configuration is an inconsistency,
    /// not an occasion to fabricate history. An unseen `next_state` is the
    /// normal case and is created on demand.
    pub fn update(
        &self,
        state: &StateKey,
        action_taken: Action,
        reward: f64,
        next_state: &StateKey,
    ) -> Result<f64> {
        let mut table = self
            .store
            .get(state)?
            .ok_or_else(|| Error::UnknownState { key: state.clone() })?;
        let next_table = self.store.get_or_create(next_state)?;

        let current = table.get(action_taken);
        let delta = self.alpha * (self.gamma * next_table.max_value() - current);
        let adjustment = reward + delta;
        let new_value = current + adjustment;
        table.set(action_taken, new_value);

        self.store.save(state, &table)?;
        debug!(
            state = %state,
            action = %action_taken,
            reward,
            new_value,
            "applied value update"
        );
        Ok(new_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adapters::InMemoryStore, table::ActionValueTable};

    fn seeded_store() -> Arc<InMemoryStore> {
        Arc::new(InMemoryStore::with_seed(99))
    }

    #[test]
    fn update_matches_reference_arithmetic() {
        let store = seeded_store();
        let state = StateKey::new("s0");
        let next = StateKey::new("s1");
        store
            .save(&state, &ActionValueTable::from_values([1.0, -9.0, -9.0, -9.0]))
            .unwrap();
        store
            .save(&next, &ActionValueTable::from_values([2.0, 0.0, 0.0, 0.0]))
            .unwrap();

        let learner = TdLearner::new(store.clone());
        let new_value = learner.update(&state, Action::Up, 3.0, &next).unwrap();

        // delta = 0.1 * (0.9 * 2.0 - 1.0) = 0.08
        // adjustment = 3.0 + 0.08 = 3.08
        // new value = 1.0 + 3.08 = 4.08
        assert!((new_value - 4.08).abs() < 1e-12);
        let stored = store.get(&state).unwrap().unwrap();
        assert!((stored.get(Action::Up) - 4.08).abs() < 1e-12);
        // Other entries untouched.
        assert_eq!(stored.get(Action::Right), -9.0);
    }

    #[test]
    fn reward_is_not_scaled_by_alpha() {
        // With alpha = 0 the bootstrap term vanishes but the raw reward
        // still lands in full; this pins the non-standard update shape.
        let store = seeded_store();
        let state = StateKey::new("s0");
        let next = StateKey::new("s1");
        store
            .save(&state, &ActionValueTable::from_values([0.0, 0.0, 0.0, 0.0]))
            .unwrap();
        store
            .save(&next, &ActionValueTable::from_values([5.0, 0.0, 0.0, 0.0]))
            .unwrap();

        let learner = TdLearner::with_coefficients(store.clone(), 0.0, 0.9);
        let new_value = learner.update(&state, Action::Down, 2.0, &next).unwrap();
        assert_eq!(new_value, 2.0);
    }

    #[test]
    fn unknown_current_state_is_rejected() {
        let store = seeded_store();
        let learner = TdLearner::new(store);
        let result = learner.update(
            &StateKey::new("never-seen"),
            Action::Up,
            1.0,
            &StateKey::new("next"),
        );
        assert!(matches!(result, Err(Error::UnknownState { .. })));
    }

    #[test]
    fn unseen_next_state_is_created_on_demand() {
        let store = seeded_store();
        let state = StateKey::new("s0");
        let next = StateKey::new("brand-new");
        store
            .save(&state, &ActionValueTable::from_values([0.0; 4]))
            .unwrap();

        let learner = TdLearner::new(store.clone());
        learner.update(&state, Action::Left, 0.5, &next).unwrap();
        assert!(store.get(&next).unwrap().is_some());
    }
}
