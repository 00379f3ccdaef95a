//! Episode log port for terminal-episode outcomes.

use crate::{Result, recorder::EpisodeOutcome};

/// Port for the append-only log of terminated episodes.
///
/// The log is independent of the value store: outcomes carry no relation to
/// state records beyond temporal proximity. Implementations must never
/// mutate or remove previously appended outcomes.
pub trait EpisodeLog: Send + Sync {
    /// Append one outcome to the log.
    fn append(&self, outcome: &EpisodeOutcome) -> Result<()>;

    /// Read back every recorded outcome, in append order.
    ///
    /// This is the read path for score history inspection (CLI, external
    /// analytics); the engine itself never reads the log.
    fn all(&self) -> Result<Vec<EpisodeOutcome>>;
}
