use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::greeting::GreetingTable;
use crate::interactions::InteractionLog;
use crate::models::Document;

/// Shared application state. Everything here is built once at startup and
/// never mutated, so handlers read it concurrently without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub documents: Arc<Vec<Document>>,
    pub greetings: Arc<GreetingTable>,
    pub interactions: InteractionLog,
}

impl AppState {
    /// Load documents and build the greeting tables. A missing or broken
    /// data file degrades to an empty collection; a dead greeting rule is
    /// a hard startup error.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let documents = load_documents(&config.data_file);
        let greetings = GreetingTable::builtin()?;
        let interactions = InteractionLog::new(&config.log_dir);

        Ok(Self {
            config,
            documents: Arc::new(documents),
            greetings: Arc::new(greetings),
            interactions,
        })
    }
}

/// Load the curated document collection. Never fails: absence or a
/// malformed file yields an empty collection with a log line, and records
/// without a string `content` field are skipped.
pub fn load_documents(path: &Path) -> Vec<Document> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("{} not found. Using empty dataset.", path.display());
            return Vec::new();
        }
        Err(e) => {
            tracing::error!("Error reading {}: {e}", path.display());
            return Vec::new();
        }
    };

    let records: Vec<serde_json::Value> = match serde_json::from_str(&data) {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Error parsing {}: {e}", path.display());
            return Vec::new();
        }
    };

    let mut documents = Vec::with_capacity(records.len());
    let mut skipped = 0usize;
    for record in &records {
        match record.get("content").and_then(|v| v.as_str()) {
            Some(content) => documents.push(Document {
                content: content.to_string(),
            }),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::warn!(
            "Skipped {skipped} malformed record(s) in {}",
            path.display()
        );
    }

    documents
}
