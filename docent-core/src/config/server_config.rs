use serde::{Deserialize, Serialize};

use super::defaults;

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the server binds to.
    pub bind_addr: String,
    /// Path to the pre-ingested corpus records (JSON).
    pub corpus_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: defaults::DEFAULT_BIND_ADDR.to_string(),
            corpus_path: defaults::DEFAULT_CORPUS_PATH.to_string(),
        }
    }
}
