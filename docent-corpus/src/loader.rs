//! Corpus record loading.
//!
//! The offline ingestion job writes a JSON file of the form
//! `{"records": [...]}`. Loading is pure deserialization; all decision
//! logic lives in the index builder.

use std::path::Path;

use docent_core::errors::{CorpusError, DocentResult};
use docent_core::models::CorpusRecord;
use serde::Deserialize;
use tracing::info;

#[derive(Deserialize)]
struct CorpusFile {
    records: Vec<CorpusRecord>,
}

/// Load corpus records from the ingestion output file.
pub fn load_records(path: &Path) -> DocentResult<Vec<CorpusRecord>> {
    let raw = std::fs::read_to_string(path).map_err(|e| CorpusError::ReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let file: CorpusFile = serde_json::from_str(&raw).map_err(|e| CorpusError::ParseFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    info!(records = file.records.len(), path = %path.display(), "corpus records loaded");
    Ok(file.records)
}
