//! Configuration — one struct per subsystem, TOML-loadable, with
//! `defaults.rs` as the single source of truth for default values.

pub mod defaults;

mod generation_config;
mod llm_config;
mod routing_config;
mod server_config;

pub use generation_config::GenerationConfig;
pub use llm_config::LlmConfig;
pub use routing_config::RoutingConfig;
pub use server_config::ServerConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, DocentResult};

/// Top-level configuration for the docent service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocentConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub routing: RoutingConfig,
    pub generation: GenerationConfig,
}

impl DocentConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> DocentResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Load from a TOML file if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> DocentResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
