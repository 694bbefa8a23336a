//! Append-only log of query/response pairs, one JSON object per line.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::models::InteractionRecord;

/// Writer for the interaction log. Cheap to clone; each append opens the
/// file fresh so concurrent handlers never share a file handle.
#[derive(Debug, Clone)]
pub struct InteractionLog {
    dir: PathBuf,
}

impl InteractionLog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.join("interactions.json")
    }

    /// Append one record, timestamped now. Failures are logged and
    /// swallowed; a bad disk must never break a reply already generated.
    pub fn record(&self, query: &str, response: &str) {
        let entry = InteractionRecord {
            timestamp: Utc::now(),
            query: query.to_string(),
            response: response.to_string(),
        };
        if let Err(e) = self.append(&entry) {
            tracing::error!("Error logging interaction: {e:#}");
        }
    }

    fn append(&self, entry: &InteractionRecord) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating log directory {}", self.dir.display()))?;

        let line = serde_json::to_string(entry)?;
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.log_path())
            .with_context(|| format!("opening {}", self.log_path().display()))?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
