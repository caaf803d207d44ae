use serde::{Deserialize, Serialize};

use super::defaults;

/// Grounded generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Character budget for the room text sent to the generator.
    /// Truncated from the end when over budget.
    pub max_context_chars: usize,
    /// Run the second critic pass that audits the draft against the room text.
    pub critic_enabled: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_context_chars: defaults::DEFAULT_MAX_CONTEXT_CHARS,
            critic_enabled: defaults::DEFAULT_CRITIC_ENABLED,
        }
    }
}
