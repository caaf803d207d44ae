use serde::{Deserialize, Serialize};

use super::defaults;

/// Room routing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Minimum cosine similarity for the embedding fallback to accept a room.
    /// Below this the selector abstains rather than guessing.
    pub min_similarity: f32,
    /// Maximum number of prior user turns fused into the selection text.
    pub history_max_turns: usize,
    /// Character cap for the history block sent to the generator.
    pub history_max_chars: usize,
    /// Character budget per room text when computing room embeddings.
    pub embed_text_chars: usize,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            min_similarity: defaults::DEFAULT_ROOM_MIN_SIMILARITY,
            history_max_turns: defaults::DEFAULT_HISTORY_MAX_TURNS,
            history_max_chars: defaults::DEFAULT_HISTORY_MAX_CHARS,
            embed_text_chars: defaults::DEFAULT_EMBED_TEXT_CHARS,
        }
    }
}
