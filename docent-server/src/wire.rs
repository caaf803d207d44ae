//! Wire types for the HTTP API.

use docent_core::models::{Citation, Turn};
use serde::{Deserialize, Serialize};

/// Body of `POST /ask`.
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    /// The visitor question.
    pub q: String,
    /// Optional language tag ("it", "en", "en-GB", ...). Detection from the
    /// question text wins on disagreement.
    #[serde(default)]
    pub lang: Option<String>,
    /// Optional room pin. Bypasses room selection, not off-topic routing.
    #[serde(default)]
    pub room_id: Option<String>,
    /// Caller-supplied conversation history, oldest first. Never persisted.
    #[serde(default)]
    pub history: Vec<Turn>,
}

/// Body of the `POST /ask` response.
#[derive(Debug, Clone, Serialize)]
pub struct AskResponse {
    pub answer: String,
    /// Zero or one source citation for the resolved room.
    pub citations: Vec<Citation>,
    /// Resolved answer language tag.
    pub lang: String,
}

/// Body of the `GET /healthz` response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    /// Number of known rooms, synthetic info room included.
    pub rooms: usize,
}
