//! Boundary-facing facade over the learning core.
//!
//! The service layer (HTTP or otherwise, outside this crate) interacts with
//! the engine through three operations: request an action for a
//! configuration, report the reward observed for a transition, and report an
//! episode termination. Each call is an independent, short-lived unit of
//! work; the engine holds no per-request state.

use std::sync::{Arc, Mutex};

use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{
    Result,
    error::Error,
    identifiers::StateKey,
    learner::TdLearner,
    policy::EpsilonGreedy,
    ports::{EpisodeLog, ValueStore},
    recorder::EpisodeRecorder,
    types::Action,
};

/// The decision-and-learning engine.
///
/// Owns injected handles to the value store and episode log; no ambient
/// globals. Safe to share across threads — note that value updates to the
/// same configuration key still race at the store level (see
/// [`ValueStore`]).
pub struct LearningEngine {
    store: Arc<dyn ValueStore>,
    policy: EpsilonGreedy,
    learner: TdLearner,
    recorder: EpisodeRecorder,
    rng: Mutex<StdRng>,
}

impl LearningEngine {
    /// Create an engine over the given store and episode log.
    pub fn new(
        store: Arc<dyn ValueStore>,
        episode_log: Arc<dyn EpisodeLog>,
        policy: EpsilonGreedy,
        learner: TdLearner,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            store,
            policy,
            learner,
            recorder: EpisodeRecorder::new(episode_log),
            rng: Mutex::new(rng),
        }
    }

    /// Choose a move for the given configuration.
    ///
    /// With no configuration supplied (the degenerate bootstrap case) the
    /// store and table are bypassed entirely and a uniformly random action
    /// from the fixed set is returned. Otherwise the configuration's table
    /// is pulled (or created) from the store and selection is
    /// epsilon-greedy.
    pub fn request_action(
        &self,
        state: Option<&StateKey>,
        illegal: &[Action],
    ) -> Result<Action> {
        let mut rng = self.rng.lock().expect("rng lock poisoned");
        let action = match state {
            None => EpsilonGreedy::random_action(&mut *rng),
            Some(state) => {
                let table = self.store.get_or_create(state)?;
                self.policy.select(&mut *rng, &table, illegal)
            }
        };
        debug!(state = state.map(StateKey::as_str), %action, "selected action");
        Ok(action)
    }

    /// Report the reward observed for one transition.
    ///
    /// Returns the updated value for the taken action.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingField`] if `state` is absent;
    /// - [`Error::UnknownState`] if `state` was never seen before (see
    ///   [`TdLearner::update`]).
    pub fn report_reward(
        &self,
        state: Option<&StateKey>,
        next_state: &StateKey,
        reward: f64,
        action_taken: Action,
    ) -> Result<f64> {
        let state = state.ok_or(Error::MissingField { field: "state" })?;
        self.learner.update(state, action_taken, reward, next_state)
    }

    /// Report an episode termination.
    ///
    /// The terminal score is appended to the episode log first, then the
    /// terminal transition goes through the same reward update as
    /// [`report_reward`](Self::report_reward). The outcome is logged even
    /// when the subsequent update is rejected, preserving the original
    /// ordering of the two effects.
    pub fn report_episode_end(
        &self,
        state: Option<&StateKey>,
        next_state: &StateKey,
        reward: f64,
        action_taken: Action,
        score: f64,
    ) -> Result<f64> {
        self.recorder.record(score)?;
        self.report_reward(state, next_state, reward, action_taken)
    }
}
