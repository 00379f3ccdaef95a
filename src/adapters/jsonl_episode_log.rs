//! JSON-lines implementation of the episode log port.
//!
//! One JSON object per line, appended on every episode termination. The
//! format is trivially greppable and streams into external analysis tools
//! without a reader for the whole file.

use std::{
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, Write},
    path::PathBuf,
};

use crate::{Result, error::Error, ports::EpisodeLog, recorder::EpisodeOutcome};

/// Append-only episode log backed by a JSON-lines file.
///
/// A missing file reads as an empty history; the first append creates it.
pub struct JsonlEpisodeLog {
    path: PathBuf,
}

impl JsonlEpisodeLog {
    /// Create a log persisting to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EpisodeLog for JsonlEpisodeLog {
    fn append(&self, outcome: &EpisodeOutcome) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| Error::EpisodeLog {
                operation: format!("open episode log {:?}", self.path),
                source,
            })?;
        let line = serde_json::to_string(outcome).map_err(|e| Error::Serialization {
            operation: "encode episode outcome".to_string(),
            message: e.to_string(),
        })?;
        writeln!(file, "{line}").map_err(|source| Error::EpisodeLog {
            operation: format!("append to episode log {:?}", self.path),
            source,
        })
    }

    fn all(&self) -> Result<Vec<EpisodeOutcome>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.path).map_err(|source| Error::EpisodeLog {
            operation: format!("open episode log {:?}", self.path),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut outcomes = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|source| Error::EpisodeLog {
                operation: format!("read episode log {:?}", self.path),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let outcome =
                serde_json::from_str(&line).map_err(|e| Error::Serialization {
                    operation: "decode episode outcome".to_string(),
                    message: e.to_string(),
                })?;
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn appends_accumulate_across_reopen() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("episodes.jsonl");

        {
            let log = JsonlEpisodeLog::new(&path);
            log.append(&EpisodeOutcome { score: 128.0, timestamp: 1.0 })
                .unwrap();
        }
        let log = JsonlEpisodeLog::new(&path);
        log.append(&EpisodeOutcome { score: 256.0, timestamp: 2.0 })
            .unwrap();

        let outcomes = log.all().unwrap();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].score, 128.0);
        assert_eq!(outcomes[1].score, 256.0);
    }

    #[test]
    fn missing_file_reads_as_empty_history() {
        let dir = TempDir::new().expect("create temp dir");
        let log = JsonlEpisodeLog::new(dir.path().join("absent.jsonl"));
        assert!(log.all().unwrap().is_empty());
    }

    #[test]
    fn unwritable_path_surfaces_log_error() {
        let log = JsonlEpisodeLog::new("/nonexistent_dir_qslide/episodes.jsonl");
        let result = log.append(&EpisodeOutcome { score: 0.0, timestamp: 0.0 });
        assert!(matches!(result, Err(Error::EpisodeLog { .. })));
    }
}
