//! MessagePack file implementation of the value store port.
//!
//! This adapter persists the full key-to-table map as a single MessagePack
//! snapshot file via rmp_serde. Every call performs blocking I/O: reads load
//! the snapshot, writes rewrite it. A missing file reads as an empty store,
//! so the first `get_or_create` bootstraps the snapshot.

use std::{
    collections::HashMap,
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
};

use rand::{SeedableRng, rngs::StdRng};
use tracing::warn;

use crate::{
    Result,
    error::Error,
    identifiers::StateKey,
    ports::ValueStore,
    table::ActionValueTable,
};

type Snapshot = HashMap<StateKey, ActionValueTable>;

/// MessagePack-file-backed value store.
///
/// Load and save are separate blocking calls with nothing spanning them, so
/// the lost-update caveat on [`ValueStore`] applies in full: two processes
/// (or two threads) updating the same key can overwrite each other.
///
/// # Examples
///
/// ```no_run
/// use qslide::adapters::MsgPackStore;
/// use qslide::ports::ValueStore;
/// use qslide::StateKey;
///
/// let store = MsgPackStore::new("states.msgpack");
/// let table = store.get_or_create(&StateKey::new("2,0|0,2"))?;
/// # Ok::<(), qslide::Error>(())
/// ```
pub struct MsgPackStore {
    path: PathBuf,
    rng: Mutex<StdRng>,
}

impl MsgPackStore {
    /// Create a store persisting to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rng: Mutex::new(StdRng::from_rng(&mut rand::rng())),
        }
    }

    /// Create a store with seeded fresh-table initialization.
    pub fn with_seed(path: impl Into<PathBuf>, seed: u64) -> Self {
        Self {
            path: path.into(),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Number of state records in the snapshot.
    pub fn state_count(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    fn load(&self) -> Result<Snapshot> {
        if !self.path.exists() {
            return Ok(Snapshot::new());
        }
        let file = File::open(&self.path).map_err(|source| Error::Store {
            operation: format!("open snapshot {:?}", self.path),
            source,
        })?;
        rmp_serde::decode::from_read(&file).map_err(|e| Error::Serialization {
            operation: format!("decode snapshot {:?}", self.path),
            message: e.to_string(),
        })
    }

    fn persist(&self, snapshot: &Snapshot) -> Result<()> {
        let mut file = File::create(&self.path).map_err(|source| {
            warn!(path = ?self.path, "failed to create snapshot file");
            Error::Store {
                operation: format!("create snapshot {:?}", self.path),
                source,
            }
        })?;
        rmp_serde::encode::write(&mut file, snapshot).map_err(|e| Error::Serialization {
            operation: format!("encode snapshot {:?}", self.path),
            message: e.to_string(),
        })
    }
}

impl ValueStore for MsgPackStore {
    fn get(&self, key: &StateKey) -> Result<Option<ActionValueTable>> {
        Ok(self.load()?.remove(key))
    }

    fn get_or_create(&self, key: &StateKey) -> Result<ActionValueTable> {
        let mut snapshot = self.load()?;
        if let Some(table) = snapshot.get(key) {
            return Ok(table.clone());
        }
        let table = {
            let mut rng = self.rng.lock().expect("rng lock poisoned");
            ActionValueTable::random(&mut *rng)
        };
        snapshot.insert(key.clone(), table.clone());
        self.persist(&snapshot)?;
        Ok(table)
    }

    fn save(&self, key: &StateKey, table: &ActionValueTable) -> Result<()> {
        let mut snapshot = self.load()?;
        snapshot.insert(key.clone(), table.clone());
        self.persist(&snapshot)
    }
}
