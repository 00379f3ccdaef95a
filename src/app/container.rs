//! Dependency injection container for the qslide application.
//!
//! Centralizes creation and wiring of dependencies following hexagonal
//! architecture. Infrastructure handles (value store, episode log) are owned
//! by the app and injected into the engine; there are no ambient globals and
//! no lazily initialized process-wide connections.

use std::{path::Path, sync::Arc};

use super::config::LearningConfig;
use crate::{
    adapters::{JsonlEpisodeLog, MsgPackStore},
    engine::LearningEngine,
    learner::TdLearner,
    policy::EpsilonGreedy,
    ports::{EpisodeLog, ValueStore},
};

/// Snapshot file name under the data directory.
const STATES_FILE: &str = "states.msgpack";
/// Episode log file name under the data directory.
const EPISODES_FILE: &str = "episodes.jsonl";

/// Application container owning the infrastructure dependencies.
///
/// # Examples
///
/// ## Production usage
///
/// ```no_run
/// use qslide::app::{App, LearningConfig};
///
/// let app = App::new("./data");
/// let engine = app.create_engine(LearningConfig::new());
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use qslide::app::App;
/// use qslide::adapters::{InMemoryEpisodeLog, InMemoryStore};
///
/// let app = App::for_testing()
///     .with_store(InMemoryStore::with_seed(42))
///     .with_episode_log(InMemoryEpisodeLog::new())
///     .with_default_seed(42)
///     .build();
/// ```
pub struct App {
    store: Arc<dyn ValueStore>,
    episode_log: Arc<dyn EpisodeLog>,
    default_seed: Option<u64>,
}

impl App {
    /// Create an app with production defaults: a MessagePack snapshot store
    /// and a JSON-lines episode log under `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            store: Arc::new(MsgPackStore::new(data_dir.join(STATES_FILE))),
            episode_log: Arc::new(JsonlEpisodeLog::new(data_dir.join(EPISODES_FILE))),
            default_seed: None,
        }
    }

    /// Create a builder for constructing the app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// The value store handle.
    pub fn store(&self) -> Arc<dyn ValueStore> {
        Arc::clone(&self.store)
    }

    /// The episode log handle.
    pub fn episode_log(&self) -> Arc<dyn EpisodeLog> {
        Arc::clone(&self.episode_log)
    }

    /// Create a learning engine with the given configuration.
    ///
    /// The engine receives clones of the app's store and log handles; the
    /// seed comes from the config or, failing that, the container default.
    pub fn create_engine(&self, config: LearningConfig) -> LearningEngine {
        let policy = EpsilonGreedy::new(config.epsilon, config.fallback);
        let learner =
            TdLearner::with_coefficients(self.store(), config.alpha, config.gamma);
        let seed = config.seed.or(self.default_seed);
        LearningEngine::new(self.store(), self.episode_log(), policy, learner, seed)
    }
}

/// Builder for an [`App`] with injected dependencies.
pub struct AppBuilder {
    store: Option<Arc<dyn ValueStore>>,
    episode_log: Option<Arc<dyn EpisodeLog>>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    fn new() -> Self {
        Self {
            store: None,
            episode_log: None,
            default_seed: None,
        }
    }

    /// Inject a value store.
    pub fn with_store(mut self, store: impl ValueStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Inject an episode log.
    pub fn with_episode_log(mut self, log: impl EpisodeLog + 'static) -> Self {
        self.episode_log = Some(Arc::new(log));
        self
    }

    /// Set a default seed applied when a config carries none.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app, defaulting missing dependencies to in-memory adapters.
    pub fn build(self) -> App {
        use crate::adapters::{InMemoryEpisodeLog, InMemoryStore};
        App {
            store: self
                .store
                .unwrap_or_else(|| Arc::new(InMemoryStore::new())),
            episode_log: self
                .episode_log
                .unwrap_or_else(|| Arc::new(InMemoryEpisodeLog::new())),
            default_seed: self.default_seed,
        }
    }
}
