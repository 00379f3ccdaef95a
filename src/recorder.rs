//! Terminal-episode outcome recording.

use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Result, ports::EpisodeLog};

/// Immutable record of one terminated episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeOutcome {
    /// Final score reported by the caller.
    pub score: f64,
    /// Wall-clock time of recording, seconds since the Unix epoch.
    pub timestamp: f64,
}

/// Appends one outcome per episode termination to the episode log.
///
/// No aggregation, no dedup: every call appends exactly one record.
pub struct EpisodeRecorder {
    log: Arc<dyn EpisodeLog>,
}

impl EpisodeRecorder {
    /// Create a recorder over the given log.
    pub fn new(log: Arc<dyn EpisodeLog>) -> Self {
        Self { log }
    }

    /// Append an outcome with the supplied terminal score and the current
    /// wall-clock timestamp.
    pub fn record(&self, score: f64) -> Result<()> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        let outcome = EpisodeOutcome { score, timestamp };
        self.log.append(&outcome)?;
        info!(score, timestamp, "recorded episode outcome");
        Ok(())
    }
}
