//! Configuration types for engine creation.

use crate::{
    learner::{DEFAULT_ALPHA, DEFAULT_GAMMA},
    policy::DEFAULT_EPSILON,
    types::Action,
};

/// Configuration for creating a learning engine.
///
/// This type provides a builder-style API for configuring the engine
/// before creation through the dependency injection container.
///
/// # Examples
///
/// ```
/// use qslide::app::LearningConfig;
///
/// let config = LearningConfig::new()
///     .with_epsilon(0.1)
///     .with_seed(42);
/// assert_eq!(config.alpha, 0.1);
/// ```
#[derive(Debug, Clone)]
pub struct LearningConfig {
    /// Exploration rate ε for epsilon-greedy selection
    pub epsilon: f64,
    /// Learning-rate-like coefficient applied to the bootstrap term
    pub alpha: f64,
    /// Discount factor γ
    pub gamma: f64,
    /// Last-resort action when every action is illegal
    pub fallback: Action,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl LearningConfig {
    /// Create a configuration with the standard defaults:
    /// ε = 0.05, α = 0.1, γ = 0.9, fallback = `Action::Right`, no seed.
    pub fn new() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            alpha: DEFAULT_ALPHA,
            gamma: DEFAULT_GAMMA,
            fallback: Action::FALLBACK,
            seed: None,
        }
    }

    /// Set the exploration rate.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the learning coefficient.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the discount factor.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the fallback action.
    pub fn with_fallback(mut self, fallback: Action) -> Self {
        self.fallback = fallback;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self::new()
    }
}
