//! Value store port for durable action-value tables.
//!
//! This module defines the trait boundary between the learning core and the
//! persistence layer holding per-configuration value tables.

use crate::{Result, identifiers::StateKey, table::ActionValueTable};

/// Port for persisting and loading per-configuration action-value tables.
///
/// The store exclusively owns all state records: the policy and learner only
/// read and write tables through it and hold no table state across calls.
/// Records are created lazily on first lookup and never deleted.
///
/// # Consistency
///
/// The learner performs `get` / compute / `save` as three separate calls
/// with no compare-and-swap, locking, or transaction spanning them. Two
/// concurrent updates to the same key each read a possibly stale table and
/// write back a full replacement, so the later write can silently overwrite
/// the earlier one (a lost-update anomaly). This matches the behavioral
/// contract of the system being reproduced. The port is the single
/// serialization point: an adapter that needs stronger guarantees can add
/// per-key mutual exclusion or an optimistic version check here without any
/// change to the domain layer.
///
/// # Errors
///
/// Persistence-layer unavailability is fatal for the calling request and is
/// surfaced as [`Error::Store`](crate::Error::Store) or
/// [`Error::Serialization`](crate::Error::Serialization); implementations
/// must not retry silently.
pub trait ValueStore: Send + Sync {
    /// Look up the table for `key`, returning `None` if the configuration
    /// has never been seen.
    fn get(&self, key: &StateKey) -> Result<Option<ActionValueTable>>;

    /// Look up the table for `key`, creating, persisting, and returning a
    /// freshly randomized table if the key is absent.
    ///
    /// Once a table exists for a key, repeated calls observe that single
    /// canonical table (no duplicate records per key), modulo the
    /// concurrency caveat above.
    fn get_or_create(&self, key: &StateKey) -> Result<ActionValueTable>;

    /// Persist `table` for `key`, replacing the prior stored value in its
    /// entirety. Never a partial or delta write: a failed save loses the
    /// update atomically rather than leaving a half-applied table.
    fn save(&self, key: &StateKey, table: &ActionValueTable) -> Result<()>;
}
