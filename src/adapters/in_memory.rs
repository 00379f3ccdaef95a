//! In-memory adapters for testing and embedded use.
//!
//! These adapters implement the store and log ports against shared
//! in-process maps, avoiding file system I/O entirely.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    Result,
    identifiers::StateKey,
    ports::{EpisodeLog, ValueStore},
    recorder::EpisodeOutcome,
    table::ActionValueTable,
};

/// In-memory value store.
///
/// Stores tables in a shared `HashMap`. All clones share the same underlying
/// storage, so a cloned handle sees writes made through the original.
///
/// Each trait method takes the map lock for its own duration only: a
/// get / compute / save sequence spanning several calls is *not* atomic,
/// which preserves the lost-update behavior documented on
/// [`ValueStore`].
#[derive(Clone)]
pub struct InMemoryStore {
    tables: Arc<Mutex<HashMap<StateKey, ActionValueTable>>>,
    rng: Arc<Mutex<StdRng>>,
}

impl InMemoryStore {
    /// Create an empty store with a nondeterministic RNG for fresh tables.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()))
    }

    /// Create an empty store seeding fresh-table initialization for
    /// reproducible tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            tables: Arc::new(Mutex::new(HashMap::new())),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Number of state records currently stored.
    pub fn len(&self) -> usize {
        self.tables.lock().expect("store lock poisoned").len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a record exists for `key`.
    pub fn contains(&self, key: &StateKey) -> bool {
        self.tables
            .lock()
            .expect("store lock poisoned")
            .contains_key(key)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueStore for InMemoryStore {
    fn get(&self, key: &StateKey) -> Result<Option<ActionValueTable>> {
        Ok(self
            .tables
            .lock()
            .expect("store lock poisoned")
            .get(key)
            .cloned())
    }

    fn get_or_create(&self, key: &StateKey) -> Result<ActionValueTable> {
        let mut tables = self.tables.lock().expect("store lock poisoned");
        if let Some(table) = tables.get(key) {
            return Ok(table.clone());
        }
        let table = {
            let mut rng = self.rng.lock().expect("rng lock poisoned");
            ActionValueTable::random(&mut *rng)
        };
        tables.insert(key.clone(), table.clone());
        Ok(table)
    }

    fn save(&self, key: &StateKey, table: &ActionValueTable) -> Result<()> {
        self.tables
            .lock()
            .expect("store lock poisoned")
            .insert(key.clone(), table.clone());
        Ok(())
    }
}

/// In-memory append-only episode log.
///
/// All clones share the same underlying vector.
#[derive(Clone, Default)]
pub struct InMemoryEpisodeLog {
    outcomes: Arc<Mutex<Vec<EpisodeOutcome>>>,
}

impl InMemoryEpisodeLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded outcomes.
    pub fn len(&self) -> usize {
        self.outcomes.lock().expect("log lock poisoned").len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EpisodeLog for InMemoryEpisodeLog {
    fn append(&self, outcome: &EpisodeOutcome) -> Result<()> {
        self.outcomes
            .lock()
            .expect("log lock poisoned")
            .push(outcome.clone());
        Ok(())
    }

    fn all(&self) -> Result<Vec<EpisodeOutcome>> {
        Ok(self.outcomes.lock().expect("log lock poisoned").clone())
    }
}
