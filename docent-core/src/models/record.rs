use serde::{Deserialize, Serialize};

/// One pre-ingested corpus record, as written by the offline ingestion job.
///
/// Many records aggregate into one room; ordering within a room follows
/// encounter order and is significant only for determinism.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusRecord {
    /// Unique chunk identifier.
    pub chunk_id: String,
    /// Scope type; only "room" records participate in the index.
    #[serde(default = "default_scope_type")]
    pub scope_type: String,
    /// Room this record belongs to.
    pub scope_id: String,
    /// Canonical source URL for the room page.
    #[serde(default)]
    pub url: String,
    /// Display heading.
    #[serde(default)]
    pub heading: String,
    /// Italian text (primary language).
    pub text_it: String,
    /// Optional English text.
    #[serde(default)]
    pub text_en: Option<String>,
}

fn default_scope_type() -> String {
    "room".to_string()
}
